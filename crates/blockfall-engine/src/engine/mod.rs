//! Game session state machine.
//!
//! [`GameEngine`] owns the board, the falling and lookahead pieces, the piece
//! generator and the session counters. It validates every placement, locks
//! pieces, clears rows, scores and levels, and decides game over.
//!
//! The engine is driven from outside: the caller calls [`GameEngine::tick`]
//! at [`GameEngine::tick_interval`] and forwards player commands in between.
//! State changes the caller may want to show are queued as
//! [`Notification`]s.

pub use self::{game_engine::*, game_stats::*, notification::*, piece_generator::*, snapshot::*};

mod game_engine;
mod game_stats;
mod notification;
mod piece_generator;
mod snapshot;
