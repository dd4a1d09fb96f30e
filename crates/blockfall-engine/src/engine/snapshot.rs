use serde::{Deserialize, Serialize};

use crate::{Board, GameMode, GameStats, PieceKind};

/// Read-only copy of everything a front end needs to draw one frame.
///
/// Board rows are strings of [`Cell::as_char`](crate::Cell::as_char),
/// listed top row first so they read like the screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub mode: GameMode,
    pub rows: Vec<String>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub stats: GameStats,
}

/// The visible falling piece: its kind and absolute `(x, y)` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub cells: [(usize, usize); 4],
}

pub(crate) fn board_rows(board: &Board) -> Vec<String> {
    board
        .rows()
        .rev()
        .map(|row| row.iter().map(|cell| cell.as_char()).collect())
        .collect()
}
