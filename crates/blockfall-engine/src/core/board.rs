use serde::{Deserialize, Serialize};

use super::piece::PieceKind;

/// Number of columns on the board.
pub const BOARD_WIDTH: usize = 10;
/// Number of rows on the board.
pub const BOARD_HEIGHT: usize = 22;

/// A single board cell.
///
/// Locked cells remember which kind of piece filled them so the front end
/// can keep their colour after the piece is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Piece(PieceKind),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns `'.'` for an empty cell, otherwise the piece kind's letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Piece(kind) => kind.as_char(),
        }
    }
}

/// A coordinate known to lie on the board.
///
/// `x` counts columns from the left, `y` counts rows from the bottom.
/// Constructors return `None` for anything outside
/// `[0, BOARD_WIDTH) x [0, BOARD_HEIGHT)`, so every [`Board`] access is in
/// range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    x: u8,
    y: u8,
}

impl CellPosition {
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Option<Self> {
        if x < BOARD_WIDTH && y < BOARD_HEIGHT {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Like [`Self::new`], but for signed coordinates produced by piece
    /// arithmetic.
    #[must_use]
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        Self::new(x, y)
    }

    #[must_use]
    pub fn x(self) -> usize {
        usize::from(self.x)
    }

    #[must_use]
    pub fn y(self) -> usize {
        usize::from(self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoardRow {
    cells: [Cell; BOARD_WIDTH],
}

impl BoardRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; BOARD_WIDTH],
    };

    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

/// The fixed-size playfield.
///
/// Rows are stored bottom first, so `y == 0` is the floor and
/// `y == BOARD_HEIGHT - 1` is the top row where pieces spawn.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Board, Cell, CellPosition, PieceKind};
///
/// let mut board = Board::EMPTY;
/// for x in 0..Board::WIDTH {
///     let pos = CellPosition::new(x, 0).unwrap();
///     board.set_cell_at(pos, Cell::Piece(PieceKind::I));
/// }
/// assert_eq!(board.full_rows().collect::<Vec<_>>(), [0]);
///
/// board.remove_rows([0]);
/// assert_eq!(board.occupied_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [BoardRow; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const WIDTH: usize = BOARD_WIDTH;
    pub const HEIGHT: usize = BOARD_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [BoardRow::EMPTY; BOARD_HEIGHT],
    };

    #[must_use]
    pub fn cell_at(&self, pos: CellPosition) -> Cell {
        self.rows[pos.y()].cells[pos.x()]
    }

    /// Overwrites a cell unconditionally.
    pub fn set_cell_at(&mut self, pos: CellPosition, cell: Cell) {
        self.rows[pos.y()].cells[pos.x()] = cell;
    }

    /// Returns whether `(x, y)` is on the board and empty.
    #[must_use]
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        CellPosition::from_signed(x, y).is_some_and(|pos| self.cell_at(pos).is_empty())
    }

    /// Sets every cell to [`Cell::Empty`].
    pub fn reset(&mut self) {
        self.rows.fill(BoardRow::EMPTY);
    }

    /// Returns an iterator over the rows, bottom row first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell; BOARD_WIDTH]> + '_ {
        self.rows.iter().map(|row| &row.cells)
    }

    /// Returns the indices of all full rows in ascending order.
    pub fn full_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_full())
            .map(|(y, _)| y)
    }

    /// Removes the given rows in one compaction and returns how many were
    /// removed.
    ///
    /// Every surviving row drops by the number of removed rows beneath it,
    /// and the same number of empty rows appear at the top. The order of
    /// `rows` does not matter; duplicates and out-of-range indices are
    /// ignored.
    pub fn remove_rows<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = usize>,
    {
        let mut removed = [false; BOARD_HEIGHT];
        for y in rows {
            if let Some(flag) = removed.get_mut(y) {
                *flag = true;
            }
        }

        let mut dst = 0;
        for src in 0..BOARD_HEIGHT {
            if removed[src] {
                continue;
            }
            if dst != src {
                self.rows[dst] = self.rows[src];
            }
            dst += 1;
        }
        self.rows[dst..].fill(BoardRow::EMPTY);
        BOARD_HEIGHT - dst
    }

    /// Returns the number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .filter(|c| !c.is_empty())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: usize, y: usize) -> CellPosition {
        CellPosition::new(x, y).unwrap()
    }

    fn fill_row(board: &mut Board, y: usize, kind: PieceKind) {
        for x in 0..BOARD_WIDTH {
            board.set_cell_at(pos(x, y), Cell::Piece(kind));
        }
    }

    /// Fills row `y` except one column, using the column as a tag so rows
    /// can be told apart after compaction.
    fn fill_row_with_gap(board: &mut Board, y: usize) {
        let gap = y % BOARD_WIDTH;
        for x in 0..BOARD_WIDTH {
            if x != gap {
                board.set_cell_at(pos(x, y), Cell::Piece(PieceKind::T));
            }
        }
    }

    #[test]
    fn test_initial_board_is_empty() {
        let board = Board::EMPTY;
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.full_rows().count(), 0);
    }

    #[test]
    fn test_cell_position_bounds() {
        assert!(CellPosition::new(0, 0).is_some());
        assert!(CellPosition::new(BOARD_WIDTH - 1, BOARD_HEIGHT - 1).is_some());
        assert!(CellPosition::new(BOARD_WIDTH, 0).is_none());
        assert!(CellPosition::new(0, BOARD_HEIGHT).is_none());
        assert!(CellPosition::from_signed(-1, 0).is_none());
        assert!(CellPosition::from_signed(0, -1).is_none());
    }

    #[test]
    fn test_set_and_get_cell() {
        let mut board = Board::EMPTY;
        board.set_cell_at(pos(3, 4), Cell::Piece(PieceKind::S));
        assert_eq!(board.cell_at(pos(3, 4)), Cell::Piece(PieceKind::S));
        assert!(!board.is_free(3, 4));
        assert!(board.is_free(4, 3));
        assert!(!board.is_free(-1, 0));
        assert!(!board.is_free(0, BOARD_HEIGHT as i32));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 0, PieceKind::I);
        fill_row_with_gap(&mut board, 7);
        board.reset();
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_full_rows_ascending() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, 9, PieceKind::I);
        fill_row(&mut board, 2, PieceKind::O);
        fill_row_with_gap(&mut board, 5);
        assert_eq!(board.full_rows().collect::<Vec<_>>(), [2, 9]);
    }

    #[test]
    fn test_remove_rows_compacts_non_adjacent_rows() {
        let mut board = Board::EMPTY;
        for y in 0..BOARD_HEIGHT - 2 {
            fill_row_with_gap(&mut board, y);
        }
        fill_row(&mut board, 3, PieceKind::I);
        fill_row(&mut board, 5, PieceKind::J);
        let before = board.clone();
        let occupied_before = board.occupied_count();

        assert_eq!(board.remove_rows([3, 5]), 2);

        for y in 0..3 {
            assert_eq!(board.rows[y], before.rows[y], "row {y} should not move");
        }
        assert_eq!(board.rows[3], before.rows[4], "row 4 becomes row 3");
        for y in 6..BOARD_HEIGHT {
            assert_eq!(board.rows[y - 2], before.rows[y], "row {y} drops by 2");
        }
        assert_eq!(board.rows[BOARD_HEIGHT - 1], BoardRow::EMPTY);
        assert_eq!(board.rows[BOARD_HEIGHT - 2], BoardRow::EMPTY);
        assert_eq!(board.occupied_count(), occupied_before - 2 * BOARD_WIDTH);
    }

    #[test]
    fn test_remove_rows_order_independent() {
        let mut board = Board::EMPTY;
        for y in 0..12 {
            fill_row_with_gap(&mut board, y);
        }
        fill_row(&mut board, 1, PieceKind::Z);
        fill_row(&mut board, 4, PieceKind::S);
        fill_row(&mut board, 8, PieceKind::L);

        let mut ascending = board.clone();
        let mut descending = board.clone();
        let mut shuffled = board;
        ascending.remove_rows([1, 4, 8]);
        descending.remove_rows([8, 4, 1]);
        shuffled.remove_rows([4, 8, 1, 4]);
        assert_eq!(ascending, descending);
        assert_eq!(ascending, shuffled);
    }

    #[test]
    fn test_remove_top_row() {
        let mut board = Board::EMPTY;
        fill_row(&mut board, BOARD_HEIGHT - 1, PieceKind::I);
        fill_row_with_gap(&mut board, 0);
        let bottom = board.rows[0];

        assert_eq!(board.remove_rows([BOARD_HEIGHT - 1]), 1);
        assert_eq!(board.rows[BOARD_HEIGHT - 1], BoardRow::EMPTY);
        assert_eq!(board.rows[0], bottom);
    }

    #[test]
    fn test_remove_all_rows() {
        let mut board = Board::EMPTY;
        for y in 0..BOARD_HEIGHT {
            fill_row(&mut board, y, PieceKind::O);
        }
        let rows = board.full_rows().collect::<Vec<_>>();
        assert_eq!(board.remove_rows(rows), BOARD_HEIGHT);
        assert_eq!(board, Board::EMPTY);
    }

    #[test]
    fn test_remove_no_rows_is_noop() {
        let mut board = Board::EMPTY;
        fill_row_with_gap(&mut board, 0);
        let before = board.clone();
        assert_eq!(board.remove_rows([]), 0);
        assert_eq!(board.remove_rows([BOARD_HEIGHT + 3]), 0);
        assert_eq!(board, before);
    }
}
