// Application Configuration
// Defaults compiled from config.yaml at build time
// Modify config.yaml and rebuild to change these values

use std::time::Duration;

use tui_components::SpringConfig;

use super::theme::ThemeMode;

// Include the auto-generated config from build.rs
pub mod compiled {
    include!(concat!(env!("OUT_DIR"), "/compiled_config.rs"));
}

/// Application-level settings for portfolio-tui
/// Values are compiled in from config.yaml at build time
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// UI and display settings
    pub ui: UiSettings,

    /// Tab indicator spring
    pub animation: AnimationSettings,
}

#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Theme on startup
    pub theme: ThemeMode,

    /// Enable mouse support
    pub mouse_enabled: bool,

    /// Redraw interval while something animates
    pub frame_interval: Duration,

    /// Event poll timeout while idle
    pub idle_poll: Duration,
}

#[derive(Debug, Clone)]
pub struct AnimationSettings {
    pub damping: f32,
    pub stiffness: f32,
    pub mass: f32,
}

impl AnimationSettings {
    pub fn spring(&self) -> SpringConfig {
        SpringConfig::new(self.damping, self.stiffness, self.mass)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        let theme = compiled::THEME.parse().unwrap_or_else(|err| {
            tracing::warn!("{}, falling back to classic", err);
            ThemeMode::Classic
        });

        Self {
            theme,
            mouse_enabled: compiled::MOUSE_ENABLED,
            frame_interval: Duration::from_millis(compiled::FRAME_INTERVAL_MS.max(1)),
            idle_poll: Duration::from_millis(compiled::IDLE_POLL_MS.max(1)),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            damping: compiled::SPRING_DAMPING,
            stiffness: compiled::SPRING_STIFFNESS,
            mass: compiled::SPRING_MASS,
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            ui: UiSettings::default(),
            animation: AnimationSettings::default(),
        }
    }
}
