//! Game-state engine for a falling-block puzzle game.
//!
//! The crate is split in two layers:
//!
//! - [`core`] - Pure data: piece geometry and rotation, the board grid and
//!   its line-clear compaction.
//! - [`engine`] - The state machine driving a game session: spawn, gravity,
//!   move validation, lock, scoring, leveling and game over.
//!
//! Nothing here performs I/O. A front end owns a [`GameEngine`], forwards
//! periodic ticks and player commands into it one at a time, and reads the
//! resulting state back.
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{GameEngine, GameMode};
//!
//! let mut engine = GameEngine::new();
//! engine.start();
//! assert_eq!(engine.mode(), GameMode::Running);
//!
//! engine.move_left().unwrap();
//! // Rotation may be refused near a wall; the piece then stays as it was.
//! _ = engine.rotate_right();
//! engine.hard_drop();
//!
//! for notification in engine.drain_notifications() {
//!     println!("{notification:?}");
//! }
//! ```

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

/// A placement was rejected because a target cell is outside the board or
/// already occupied, or because the game does not accept moves right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece out of bounds or colliding at target position")]
pub struct MoveRejected;
