// Portfolio TUI
// Terminal portfolio with a spring-animated tab view

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use portfolio_tui::{load_and_validate_config, logging, ui, App, AppSettings};

// ┌──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                                 MAIN ENTRY POINT                                                 │
// └──────────────────────────────────────────────────────────────────────────────────────────────────────────────────┘

fn main() -> Result<()> {
    if let Some(log_path) = logging::init_logging() {
        tracing::info!(log = %log_path.display(), "starting portfolio-tui");
    }

    // Load and validate configuration from YAML file (optional path as first argument)
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_and_validate_config(config_path)?;
    let settings = AppSettings::default();
    let mouse_enabled = settings.ui.mouse_enabled;
    let mut app = App::new(config, settings)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(error = %err, "portfolio-tui exited with an error");
    } else {
        tracing::info!("portfolio-tui stopped");
    }
    result
}
