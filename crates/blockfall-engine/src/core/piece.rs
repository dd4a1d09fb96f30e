use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Serialize};

/// Offset of one piece cell relative to the pivot, in piece space.
///
/// Piece space has `x` growing to the right and `y` growing downward, as
/// the piece is drawn on screen.
pub type Offset = (i32, i32);

/// Enum representing the type of piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[repr(u8)]
pub enum PieceKind {
    /// Z-piece.
    Z = 0,
    /// S-piece.
    S = 1,
    /// I-piece (line).
    I = 2,
    /// T-piece.
    T = 3,
    /// O-piece (square).
    O = 4,
    /// L-piece.
    L = 5,
    /// J-piece (mirrored L).
    J = 6,
}

/// Uniform distribution over all seven kinds, with repeats allowed.
impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

impl PieceKind {
    /// Number of piece types (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        PieceKind::Z,
        PieceKind::S,
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Returns the canonical offsets of this kind in spawn orientation.
    #[must_use]
    pub const fn coordinates(self) -> [Offset; 4] {
        PIECE_COORDINATES[self as usize]
    }

    /// Returns the single character representation of this piece kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_engine::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_char(), 'I');
    /// assert_eq!(PieceKind::J.as_char(), 'J');
    /// ```
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::I => 'I',
            PieceKind::T => 'T',
            PieceKind::O => 'O',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
        }
    }

    /// Parses a piece kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'Z' => Some(PieceKind::Z),
            'S' => Some(PieceKind::S),
            'I' => Some(PieceKind::I),
            'T' => Some(PieceKind::T),
            'O' => Some(PieceKind::O),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            _ => None,
        }
    }
}

const PIECE_COORDINATES: [[Offset; 4]; PieceKind::LEN] = [
    // Z-piece
    [(0, -1), (0, 0), (-1, 0), (-1, 1)],
    // S-piece
    [(0, -1), (0, 0), (1, 0), (1, 1)],
    // I-piece
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // T-piece
    [(-1, 0), (0, 0), (1, 0), (0, 1)],
    // O-piece
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // L-piece
    [(-1, -1), (0, -1), (0, 0), (0, 1)],
    // J-piece
    [(1, -1), (0, -1), (0, 0), (0, 1)],
];

/// A tetromino shape: a kind plus the four offsets of its cells.
///
/// Pieces are immutable values. Rotation returns a new `Piece` with
/// transformed offsets and never adjusts for bounds or collisions; that is
/// left to the engine.
///
/// [`Piece::EMPTY`] is the no-shape sentinel: it has no kind, degenerate
/// `(0, 0)` offsets, and occupies nothing.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PieceKind};
///
/// let piece = Piece::new(PieceKind::T);
/// assert_eq!(piece.rotated_right().rotated_left(), piece);
/// assert_eq!(Piece::new(PieceKind::O).rotated_left(), Piece::new(PieceKind::O));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: Option<PieceKind>,
    offsets: [Offset; 4],
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Piece {
    pub const EMPTY: Self = Self {
        kind: None,
        offsets: [(0, 0); 4],
    };

    /// Creates a piece of the given kind in its canonical orientation.
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        Self {
            kind: Some(kind),
            offsets: kind.coordinates(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Option<PieceKind> {
        self.kind
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.kind.is_none()
    }

    #[must_use]
    pub const fn offsets(&self) -> &[Offset; 4] {
        &self.offsets
    }

    /// Rotates counter-clockwise: `(x, y) -> (y, -x)`.
    #[must_use]
    pub fn rotated_left(self) -> Self {
        if self.kind == Some(PieceKind::O) {
            return self;
        }
        self.map_offsets(|(x, y)| (y, -x))
    }

    /// Rotates clockwise: `(x, y) -> (-y, x)`.
    #[must_use]
    pub fn rotated_right(self) -> Self {
        if self.kind == Some(PieceKind::O) {
            return self;
        }
        self.map_offsets(|(x, y)| (-y, x))
    }

    fn map_offsets(self, f: impl Fn(Offset) -> Offset) -> Self {
        Self {
            kind: self.kind,
            offsets: self.offsets.map(f),
        }
    }

    #[must_use]
    pub fn min_x(&self) -> i32 {
        self.offsets.iter().map(|&(x, _)| x).fold(i32::MAX, i32::min)
    }

    #[must_use]
    pub fn max_x(&self) -> i32 {
        self.offsets.iter().map(|&(x, _)| x).fold(i32::MIN, i32::max)
    }

    #[must_use]
    pub fn min_y(&self) -> i32 {
        self.offsets.iter().map(|&(_, y)| y).fold(i32::MAX, i32::min)
    }

    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.offsets.iter().map(|&(_, y)| y).fold(i32::MIN, i32::max)
    }

    /// Returns the absolute board coordinates of the four cells when the
    /// pivot sits at `(x, y)`.
    ///
    /// Board rows grow upward from the bottom while piece offsets grow
    /// downward, so a piece-space offset `(dx, dy)` lands on
    /// `(x + dx, y - dy)`. The result may lie outside the board.
    #[must_use]
    pub fn cells_at(&self, x: i32, y: i32) -> [(i32, i32); 4] {
        self.offsets.map(|(dx, dy)| (x + dx, y - dy))
    }

    /// Returns whether the offset `(x, y)` is one of this piece's cells.
    #[must_use]
    pub fn contains_offset(&self, x: i32, y: i32) -> bool {
        !self.is_empty() && self.offsets.contains(&(x, y))
    }
}
