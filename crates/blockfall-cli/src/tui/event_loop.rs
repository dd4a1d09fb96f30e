use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event;

use super::event::TuiEvent;

/// When to emit render events.
#[derive(Debug, Clone, Copy, Default)]
pub enum RenderMode {
    /// Render after every tick or terminal event.
    #[default]
    OnDirty,
    /// Like `OnDirty`, but at most once per interval. Bursts of key repeats
    /// are folded into one frame.
    Throttled(Duration),
}

impl RenderMode {
    #[must_use]
    pub fn throttled_from_rate(rate: f64) -> Self {
        Self::Throttled(Duration::from_secs_f64(1.0 / rate))
    }
}

/// Produces tick, render and terminal events in the order they fall due.
///
/// Without a tick interval only render and terminal events are produced.
#[derive(Debug)]
pub(super) struct EventLoop {
    tick_interval: Option<Duration>,
    render_mode: RenderMode,
    last_tick: Instant,
    last_render: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        let now = Instant::now();
        Self {
            tick_interval: None,
            render_mode: RenderMode::default(),
            last_tick: now,
            last_render: now.checked_sub(Duration::from_secs(1)).unwrap_or(now),
            // draw the first frame without waiting for input
            dirty: true,
        }
    }

    /// Changes the tick interval.
    ///
    /// A changed interval restarts the tick phase; an unchanged one keeps it.
    /// Use [`Self::restart_tick`] to restart regardless.
    pub(super) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        if interval != self.tick_interval {
            self.tick_interval = interval;
            self.last_tick = Instant::now();
        }
    }

    /// Sets the tick interval and restarts the tick phase unconditionally.
    pub(super) fn restart_tick(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
        self.last_tick = Instant::now();
    }

    pub(super) fn set_render_mode(&mut self, render_mode: RenderMode) {
        self.render_mode = render_mode;
    }

    /// Blocks until the next tick or render is due or a terminal event
    /// arrives.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        loop {
            let now = Instant::now();
            if let Some(tick_interval) = self.tick_interval
                && now.duration_since(self.last_tick) >= tick_interval
            {
                self.last_tick = now;
                self.dirty = true;
                return Ok(TuiEvent::Tick);
            }

            let do_render = match self.render_mode {
                RenderMode::OnDirty => self.dirty,
                RenderMode::Throttled(interval) => {
                    self.dirty && now.duration_since(self.last_render) >= interval
                }
            };
            if do_render {
                self.last_render = now;
                self.dirty = false;
                return Ok(TuiEvent::Render);
            }

            if let Some(timeout) = self.timeout(now)
                && !event::poll(timeout)?
            {
                continue;
            }

            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Time left until the next tick or pending render, or `None` to wait
    /// for input indefinitely.
    fn timeout(&self, now: Instant) -> Option<Duration> {
        let next_tick_at = self.tick_interval.map(|interval| self.last_tick + interval);
        let next_render_at = match self.render_mode {
            RenderMode::OnDirty => self.dirty.then_some(now),
            RenderMode::Throttled(interval) => self.dirty.then(|| self.last_render + interval),
        };
        let next_at = [next_tick_at, next_render_at].into_iter().flatten().min()?;
        Some(next_at.saturating_duration_since(now))
    }
}
