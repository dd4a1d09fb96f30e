use std::{io, time::Duration};

use super::{
    App,
    event::TuiEvent,
    event_loop::{EventLoop, RenderMode},
};

/// Owns the event loop and dispatches its events to an [`App`].
#[derive(Default, Debug)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how often [`App::update`] runs. `None` stops ticking.
    ///
    /// Setting the same interval again keeps the current tick phase, so this
    /// can be called after every input event.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Like [`Self::set_tick_interval`], but always restarts the tick phase
    /// so the next update comes one full interval from now.
    pub fn restart_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.restart_tick(interval);
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.events.set_render_mode(mode);
    }

    /// Runs `app` in the alternate screen until [`App::should_exit`] returns
    /// true.
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Tick => app.update(&mut self),
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(&mut self, &event),
                }
            }
            Ok(())
        })
    }
}
