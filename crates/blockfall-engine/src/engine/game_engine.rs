use std::time::Duration;

use arrayvec::ArrayVec;
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::{
    MoveRejected,
    core::{
        board::{BOARD_HEIGHT, BOARD_WIDTH, Board, Cell, CellPosition},
        piece::{Piece, PieceKind},
    },
};

use super::{
    game_stats::{GameStats, INITIAL_TICK_INTERVAL, tick_interval_for_level},
    notification::Notification,
    piece_generator::{PieceGenerator, PieceSeed},
    snapshot::{self, ActiveSnapshot, EngineSnapshot},
};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const SPAWN_X: i32 = (BOARD_WIDTH / 2 + 1) as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const TOP_ROW: i32 = (BOARD_HEIGHT - 1) as i32;

/// Coarse state of a game session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::IsVariant,
)]
pub enum GameMode {
    /// No game has been started yet.
    #[default]
    Stopped,
    Running,
    Paused,
    GameOver,
}

/// The falling piece together with its pivot position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    piece: Piece,
    x: i32,
    y: i32,
}

impl ActivePiece {
    const HIDDEN: Self = Self {
        piece: Piece::EMPTY,
        x: SPAWN_X,
        y: TOP_ROW,
    };

    #[must_use]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    #[must_use]
    pub fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the four occupied board cells, or `None` for the empty piece
    /// or a placement that leaves the board.
    #[must_use]
    pub fn cells(&self) -> Option<[CellPosition; 4]> {
        if self.piece.is_empty() {
            return None;
        }
        let [a, b, c, d] = self
            .piece
            .cells_at(self.x, self.y)
            .map(|(x, y)| CellPosition::from_signed(x, y));
        Some([a?, b?, c?, d?])
    }
}

/// A game session: board, falling piece, lookahead piece and counters.
///
/// Everything that changes the game goes through `&mut self`, so ticks and
/// player commands are applied one at a time by whoever owns the engine.
/// After each call the owner reads the new state and drains queued
/// [`Notification`]s.
///
/// # Lifecycle
///
/// ```text
/// Stopped --start--> Running <--pause--> Paused
///                       |
///                  spawn blocked
///                       v
///                    GameOver --start--> Running
/// ```
///
/// After a lock that clears rows the engine spends one tick "settling": the
/// falling piece is hidden and the next tick spawns a new one.
///
/// # Example
///
/// ```
/// use blockfall_engine::{GameEngine, GameMode, Notification};
///
/// let mut engine = GameEngine::new();
/// engine.start();
///
/// let before = engine.active_piece().unwrap();
/// engine.tick();
/// let after = engine.active_piece().unwrap();
/// assert_eq!(after.y(), before.y() - 1);
///
/// engine.pause();
/// assert_eq!(engine.mode(), GameMode::Paused);
/// assert_eq!(engine.tick_interval(), None);
/// assert!(
///     engine
///         .drain_notifications()
///         .any(|n| n == Notification::StatusMessage("Paused".into()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    generator: PieceGenerator,
    stats: GameStats,
    mode: GameMode,
    settling: bool,
    tick_interval: Option<Duration>,
    tick_arm_count: u64,
    notifications: Vec<Notification>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Creates a stopped engine with a random piece seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    /// Like [`Self::new`], but the piece sequence is reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        let mut generator = PieceGenerator::with_seed(seed);
        let next = generator.next_kind();
        Self {
            board: Board::EMPTY,
            active: ActivePiece::HIDDEN,
            next,
            generator,
            stats: GameStats::new(),
            mode: GameMode::Stopped,
            settling: false,
            tick_interval: None,
            tick_arm_count: 0,
            notifications: vec![],
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn cell_at(&self, pos: CellPosition) -> Cell {
        self.board.cell_at(pos)
    }

    /// Returns the falling piece, or `None` while it is hidden (before the
    /// first start, while settling after a clear, and after game over).
    #[must_use]
    pub fn active_piece(&self) -> Option<ActivePiece> {
        (!self.active.piece.is_empty()).then_some(self.active)
    }

    #[must_use]
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.stats.level()
    }

    #[must_use]
    pub fn cleared_lines(&self) -> usize {
        self.stats.cleared_lines()
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns whether the engine is in the one-tick pause after a clear.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Returns how often the driver should call [`Self::tick`], or `None`
    /// when the tick is disarmed (stopped, paused or game over).
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        self.tick_interval
    }

    /// Returns how many times the tick has been (re)armed.
    ///
    /// Every arm starts a fresh interval, even when its length is unchanged:
    /// on start, on resume and after a clear. A driver whose timer keeps
    /// running across calls restarts it whenever this value changes.
    #[must_use]
    pub fn tick_arm_count(&self) -> u64 {
        self.tick_arm_count
    }

    /// Removes and returns the notifications queued since the last drain.
    pub fn drain_notifications(&mut self) -> impl Iterator<Item = Notification> + '_ {
        self.notifications.drain(..)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let active = self.active_piece().and_then(|active| {
            Some(ActiveSnapshot {
                kind: active.piece().kind()?,
                cells: active.cells()?.map(|pos| (pos.x(), pos.y())),
            })
        });
        EngineSnapshot {
            mode: self.mode,
            rows: snapshot::board_rows(&self.board),
            active,
            next: self.next,
            stats: self.stats.clone(),
        }
    }

    /// Starts a new game.
    ///
    /// Does nothing while paused; a paused game has to be resumed with
    /// [`Self::pause`]. From any other mode, including a running game, the
    /// board and counters are reset and a fresh piece spawns.
    pub fn start(&mut self) {
        if self.mode.is_paused() {
            return;
        }

        self.board.reset();
        self.stats = GameStats::new();
        self.settling = false;
        self.mode = GameMode::Running;
        self.arm_tick(INITIAL_TICK_INTERVAL);
        self.next = self.generator.next_kind();
        self.notify_stats();
        self.spawn();
    }

    /// Toggles between running and paused. Does nothing when no game is in
    /// progress.
    pub fn pause(&mut self) {
        match self.mode {
            GameMode::Stopped | GameMode::GameOver => {}
            GameMode::Running => {
                self.mode = GameMode::Paused;
                self.tick_interval = None;
                self.notify(Notification::StatusMessage("Paused".to_owned()));
            }
            GameMode::Paused => {
                self.mode = GameMode::Running;
                self.arm_tick(tick_interval_for_level(self.level()));
                let message = format!("Score: {}", self.score());
                self.notify(Notification::StatusMessage(message));
            }
        }
    }

    /// Advances the game by one gravity step.
    ///
    /// While settling this spawns the next piece instead; outside
    /// [`GameMode::Running`] it does nothing.
    pub fn tick(&mut self) {
        if !self.mode.is_running() {
            return;
        }
        if self.settling {
            self.settling = false;
            self.spawn();
            return;
        }
        if self.step_down().is_err() {
            self.lock();
        }
    }

    /// Replaces the falling piece with `piece` at pivot `(x, y)` if all four
    /// cells are on the board and empty.
    ///
    /// On rejection nothing changes. The empty piece is always rejected, and
    /// so is every placement unless the game is running and not settling.
    pub fn attempt_move(&mut self, piece: Piece, x: i32, y: i32) -> Result<(), MoveRejected> {
        if piece.is_empty() || !self.mode.is_running() || self.settling {
            return Err(MoveRejected);
        }
        let fits = piece
            .cells_at(x, y)
            .iter()
            .all(|&(cx, cy)| self.board.is_free(cx, cy));
        if !fits {
            return Err(MoveRejected);
        }
        self.active = ActivePiece { piece, x, y };
        Ok(())
    }

    pub fn move_left(&mut self) -> Result<(), MoveRejected> {
        self.control(|active| (active.piece, active.x - 1, active.y))
    }

    pub fn move_right(&mut self) -> Result<(), MoveRejected> {
        self.control(|active| (active.piece, active.x + 1, active.y))
    }

    pub fn rotate_left(&mut self) -> Result<(), MoveRejected> {
        self.control(|active| (active.piece.rotated_left(), active.x, active.y))
    }

    pub fn rotate_right(&mut self) -> Result<(), MoveRejected> {
        self.control(|active| (active.piece.rotated_right(), active.x, active.y))
    }

    /// Moves the falling piece one row down, locking it if it cannot move.
    ///
    /// Returns `Err` when the piece locked instead (or there was nothing to
    /// drop).
    pub fn soft_drop(&mut self) -> Result<(), MoveRejected> {
        if !self.is_controllable() {
            return Err(MoveRejected);
        }
        let result = self.step_down();
        if result.is_err() {
            self.lock();
        }
        result
    }

    /// Drops the falling piece as far as it goes and locks it.
    pub fn hard_drop(&mut self) {
        if !self.is_controllable() {
            return;
        }
        while self.step_down().is_ok() {}
        self.lock();
    }

    fn is_controllable(&self) -> bool {
        self.mode.is_running() && !self.active.piece.is_empty()
    }

    fn control<F>(&mut self, target: F) -> Result<(), MoveRejected>
    where
        F: FnOnce(ActivePiece) -> (Piece, i32, i32),
    {
        if !self.is_controllable() {
            return Err(MoveRejected);
        }
        let (piece, x, y) = target(self.active);
        self.attempt_move(piece, x, y)
    }

    fn step_down(&mut self) -> Result<(), MoveRejected> {
        let ActivePiece { piece, x, y } = self.active;
        self.attempt_move(piece, x, y - 1)
    }

    fn lock(&mut self) {
        let (Some(kind), Some(cells)) = (self.active.piece.kind(), self.active.cells()) else {
            return;
        };
        for pos in cells {
            self.board.set_cell_at(pos, Cell::Piece(kind));
        }

        let full_rows = self.board.full_rows().collect::<ArrayVec<usize, BOARD_HEIGHT>>();
        let cleared_lines = self.board.remove_rows(full_rows);
        let previous_level = self.level();
        self.stats.complete_piece_drop(cleared_lines);

        if cleared_lines == 0 {
            self.spawn();
            return;
        }

        self.notify(Notification::ScoreChanged(self.score()));
        if self.level() != previous_level {
            self.notify(Notification::LevelChanged(self.level()));
        }
        self.notify(Notification::LinesChanged(self.cleared_lines()));

        self.active.piece = Piece::EMPTY;
        self.settling = true;
        self.arm_tick(tick_interval_for_level(self.level()));
    }

    fn arm_tick(&mut self, interval: Duration) {
        self.tick_interval = Some(interval);
        self.tick_arm_count += 1;
    }

    fn spawn(&mut self) {
        let piece = Piece::new(self.next);
        self.next = self.generator.next_kind();
        self.notify(Notification::NextPieceChanged(self.next));

        let x = SPAWN_X;
        let y = TOP_ROW + piece.min_y();
        if self.attempt_move(piece, x, y).is_err() {
            self.active = ActivePiece {
                piece: Piece::EMPTY,
                x,
                y,
            };
            self.tick_interval = None;
            self.mode = GameMode::GameOver;
            self.notify(Notification::StatusMessage("Game Over".to_owned()));
        }
    }

    fn notify_stats(&mut self) {
        self.notify(Notification::ScoreChanged(self.score()));
        self.notify(Notification::LevelChanged(self.level()));
        self.notify(Notification::LinesChanged(self.cleared_lines()));
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}
