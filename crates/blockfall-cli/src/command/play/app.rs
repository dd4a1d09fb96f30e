use blockfall_engine::{GameEngine, GameMode, PieceSeed};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::Line,
};

use crate::{
    tui::{App, RenderMode, Runtime},
    ui::{
        hud::Hud,
        widgets::{GameDisplay, KeyBindingDisplay, KeyHint, style},
    },
};

const FPS: f64 = 60.0;

const RUNNING_KEYS: &[KeyHint] = &[
    KeyHint::new(&["←", "→"], "Move"),
    KeyHint::new(&["↑", "↓"], "Rotate"),
    KeyHint::new(&["Space"], "Drop"),
    KeyHint::new(&["D"], "Down"),
    KeyHint::new(&["P"], "Pause"),
    KeyHint::new(&["N"], "New"),
    KeyHint::new(&["Q"], "Quit"),
];
const PAUSED_KEYS: &[KeyHint] = &[
    KeyHint::new(&["P"], "Resume"),
    KeyHint::new(&["Q"], "Quit"),
];
const IDLE_KEYS: &[KeyHint] = &[
    KeyHint::new(&["N"], "New Game"),
    KeyHint::new(&["Q"], "Quit"),
];

/// Interactive game: forwards keys and ticks to the engine and mirrors its
/// notifications into the side panel.
#[derive(Debug)]
pub struct PlayApp {
    engine: GameEngine,
    hud: Hud,
    tick_arm_count: u64,
    is_exiting: bool,
}

impl PlayApp {
    pub fn new(seed: Option<PieceSeed>) -> Self {
        let engine = seed.map_or_else(GameEngine::new, GameEngine::with_seed);
        Self {
            engine,
            hud: Hud::default(),
            tick_arm_count: 0,
            is_exiting: false,
        }
    }

    pub fn final_score(&self) -> usize {
        self.engine.score()
    }

    /// Pulls everything the last engine call changed into the view and the
    /// event loop. Every re-arm of the engine tick restarts the runtime's
    /// tick phase, even when the interval stays the same.
    fn sync(&mut self, runtime: &mut Runtime) {
        self.hud.extend(self.engine.drain_notifications());
        let interval = self.engine.tick_interval();
        if self.engine.tick_arm_count() == self.tick_arm_count {
            runtime.set_tick_interval(interval);
        } else {
            self.tick_arm_count = self.engine.tick_arm_count();
            runtime.restart_tick_interval(interval);
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        let engine = &mut self.engine;
        match code {
            KeyCode::Left => _ = engine.move_left(),
            KeyCode::Right => _ = engine.move_right(),
            KeyCode::Up => _ = engine.rotate_left(),
            KeyCode::Down => _ = engine.rotate_right(),
            KeyCode::Char(' ') => engine.hard_drop(),
            KeyCode::Char('d' | 'D') => _ = engine.soft_drop(),
            KeyCode::Char('p' | 'P') => engine.pause(),
            KeyCode::Char('n' | 'N') => engine.start(),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.is_exiting = true,
            _ => {}
        }
    }
}

impl App for PlayApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_render_mode(RenderMode::throttled_from_rate(FPS));
        self.engine.start();
        self.sync(runtime);
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event) {
        if let Some(key) = event.as_key_event()
            && key.kind == KeyEventKind::Press
        {
            self.handle_key(key.code);
            self.sync(runtime);
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let game = GameDisplay::new(&self.engine, &self.hud);
        let bindings = match self.engine.mode() {
            GameMode::Running => RUNNING_KEYS,
            GameMode::Paused => PAUSED_KEYS,
            GameMode::Stopped | GameMode::GameOver => IDLE_KEYS,
        };

        let [game_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(game.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(&game, game_area);
        frame.render_widget(
            Line::styled(self.hud.status.as_str(), style::STATUS).centered(),
            status_area,
        );
        frame.render_widget(KeyBindingDisplay::new(bindings), help_area);
    }

    fn update(&mut self, runtime: &mut Runtime) {
        self.engine.tick();
        self.sync(runtime);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> PlayApp {
        let mut app = PlayApp::new(Some(PieceSeed::from_bytes([9; 16])));
        app.init(&mut Runtime::new());
        app
    }

    fn press(app: &mut PlayApp, code: KeyCode) {
        let event = Event::Key(code.into());
        app.handle_event(&mut Runtime::new(), &event);
    }

    #[test]
    fn test_starts_on_launch() {
        let app = app();
        assert_eq!(app.engine.mode(), GameMode::Running);
        assert_eq!(app.hud.next, Some(app.engine.next_kind()));
    }

    #[test]
    fn test_arrow_keys_move_and_rotate() {
        let mut app = app();
        let before = app.engine.active_piece().unwrap();
        press(&mut app, KeyCode::Left);
        assert_eq!(app.engine.active_piece().unwrap().x(), before.x() - 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.engine.active_piece().unwrap().x(), before.x());

        // let the piece clear the top row so every kind can rotate
        for _ in 0..3 {
            press(&mut app, KeyCode::Char('d'));
        }
        let dropped = app.engine.active_piece().unwrap();
        assert_eq!(dropped.y(), before.y() - 3);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.engine.active_piece().unwrap(), dropped);
    }

    #[test]
    fn test_pause_key_updates_status() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.engine.mode(), GameMode::Paused);
        assert_eq!(app.hud.status, "Paused");

        press(&mut app, KeyCode::Char('P'));
        assert_eq!(app.engine.mode(), GameMode::Running);
        assert_eq!(app.hud.status, "Score: 0");
    }

    #[test]
    fn test_space_hard_drops() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine.board().occupied_count(), 4);
        assert_eq!(app.engine.stats().completed_pieces(), 1);
    }

    #[test]
    fn test_new_game_rearms_tick() {
        let mut app = app();
        assert_eq!(app.tick_arm_count, 1);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.engine.tick_arm_count(), 2);
        assert_eq!(app.tick_arm_count, 2);
    }

    #[test]
    fn test_pause_does_not_rearm_until_resume() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.tick_arm_count, 1);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.tick_arm_count, 2);
    }

    #[test]
    fn test_quit_key() {
        let mut app = app();
        assert!(!app.should_exit());
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn test_tick_advances_engine() {
        let mut app = app();
        let before = app.engine.active_piece().unwrap();
        app.update(&mut Runtime::new());
        assert_eq!(app.engine.active_piece().unwrap().y(), before.y() - 1);
    }
}
