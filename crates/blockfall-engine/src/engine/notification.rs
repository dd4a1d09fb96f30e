use serde::{Deserialize, Serialize};

use crate::PieceKind;

/// Change reported by the engine as a side effect of a command or tick.
///
/// The engine queues these synchronously while it mutates its state; the
/// caller drains them with [`GameEngine::drain_notifications`] after each
/// call. Each variant carries the new value.
///
/// [`GameEngine::drain_notifications`]: crate::GameEngine::drain_notifications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant)]
pub enum Notification {
    ScoreChanged(usize),
    LevelChanged(usize),
    LinesChanged(usize),
    NextPieceChanged(PieceKind),
    /// Status-bar text such as `"Paused"`, `"Game Over"` or `"Score: 120"`.
    StatusMessage(String),
}
