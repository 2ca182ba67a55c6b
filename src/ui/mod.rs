// UI module
// TUI components and views for the portfolio

pub mod app_view;
pub mod banner;
pub mod screens;
pub mod styles;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::{Duration, Instant};

use crate::core::{App, EventHandler};

pub use app_view::render_app;
pub use styles::{resolve_style, StyleRole};

/// Run the main application event loop
///
/// Polls at the frame interval while something animates, and at the idle
/// interval otherwise.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        let was_idle = !app.needs_frame();
        let timeout = if was_idle {
            app.settings.ui.idle_poll
        } else {
            app.settings.ui.frame_interval
        };
        if event::poll(timeout)? {
            let event = event::read()?;
            app.handle_event(EventHandler::handle(event));
        }

        // Advance animations by the real time elapsed
        let now = Instant::now();
        app.tick(tick_delta(now - last_tick, was_idle, app.settings.ui.frame_interval));
        last_tick = now;

        // Check if we should quit
        if app.should_quit {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}

/// Time to advance animations by after one loop iteration
///
/// After an idle poll nothing was moving, so most of the wait happened
/// before whatever event started an animation. That step is capped at one
/// frame so the first drawn frame of a transition starts near its origin.
pub fn tick_delta(elapsed: Duration, was_idle: bool, frame_interval: Duration) -> Duration {
    if was_idle {
        elapsed.min(frame_interval)
    } else {
        elapsed
    }
}
