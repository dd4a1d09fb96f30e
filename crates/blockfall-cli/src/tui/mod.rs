//! Minimal terminal runtime: an event loop that interleaves engine ticks,
//! renders and crossterm input for a single [`App`].

pub use self::{app::App, event_loop::RenderMode, runtime::Runtime};

mod app;
mod event;
mod event_loop;
mod runtime;
