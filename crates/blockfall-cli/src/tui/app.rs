use crossterm::event::Event;
use ratatui::Frame;

use super::Runtime;

/// Application driven by [`Runtime::run`].
pub trait App {
    /// Called once before the first event. Configure the tick interval and
    /// render mode here.
    fn init(&mut self, runtime: &mut Runtime);

    fn should_exit(&self) -> bool;

    /// Handles key input, resize and other terminal events.
    fn handle_event(&mut self, runtime: &mut Runtime, event: &Event);

    fn draw(&self, frame: &mut Frame);

    /// Called each time the tick interval elapses.
    fn update(&mut self, runtime: &mut Runtime);
}
