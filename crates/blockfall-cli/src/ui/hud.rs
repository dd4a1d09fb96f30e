use blockfall_engine::{Notification, PieceKind};

/// Side-panel values, kept up to date from engine notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub score: usize,
    pub level: usize,
    pub lines: usize,
    pub next: Option<PieceKind>,
    pub status: String,
}

impl Default for Hud {
    fn default() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
            next: None,
            status: String::new(),
        }
    }
}

impl Hud {
    pub fn apply(&mut self, notification: Notification) {
        match notification {
            Notification::ScoreChanged(score) => self.score = score,
            Notification::LevelChanged(level) => self.level = level,
            Notification::LinesChanged(lines) => self.lines = lines,
            Notification::NextPieceChanged(kind) => self.next = Some(kind),
            Notification::StatusMessage(message) => self.status = message,
        }
    }
}

impl Extend<Notification> for Hud {
    fn extend<T: IntoIterator<Item = Notification>>(&mut self, iter: T) {
        for notification in iter {
            self.apply(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{GameEngine, PieceSeed};

    use super::*;

    #[test]
    fn test_apply_notifications() {
        let mut hud = Hud::default();
        hud.extend([
            Notification::ScoreChanged(140),
            Notification::LevelChanged(2),
            Notification::LinesChanged(11),
            Notification::NextPieceChanged(PieceKind::J),
            Notification::StatusMessage("Paused".to_owned()),
        ]);
        assert_eq!(
            hud,
            Hud {
                score: 140,
                level: 2,
                lines: 11,
                next: Some(PieceKind::J),
                status: "Paused".to_owned(),
            }
        );
    }

    #[test]
    fn test_tracks_engine() {
        let mut engine = GameEngine::with_seed(PieceSeed::from_bytes([3; 16]));
        let mut hud = Hud::default();
        engine.start();
        for _ in 0..5 {
            engine.hard_drop();
        }
        engine.pause();
        hud.extend(engine.drain_notifications());

        assert_eq!(hud.score, engine.score());
        assert_eq!(hud.level, engine.level());
        assert_eq!(hud.lines, engine.cleared_lines());
        assert_eq!(hud.next, Some(engine.next_kind()));
        assert_eq!(hud.status, "Paused");
    }
}
