// Portfolio TUI Library
// A terminal portfolio built around a spring-animated tab view

// Core infrastructure - app state, settings, events, theme
pub mod core;

// Runtime configuration and its validation
pub mod config;
pub mod config_validation;

// Logging to a file (stdout is the UI)
pub mod logging;

// UI - screens, styles and the event loop
pub mod ui;

// Re-export commonly used items for convenience
pub use config::{load_config, AppConfig};
pub use config_validation::{load_and_validate_config, ConfigError};
pub use crate::core::{App, AppSettings, ThemeMode};
