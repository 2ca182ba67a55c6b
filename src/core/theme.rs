// Theme Provider
// The two built-in palettes and the toggle between them

use std::fmt;
use std::str::FromStr;

use tui_components::{hex_color, ThemeColors};

/// Visual mode of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Classic,
    Neon,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Classic => ThemeMode::Neon,
            ThemeMode::Neon => ThemeMode::Classic,
        }
    }

    pub fn is_neon(self) -> bool {
        self == ThemeMode::Neon
    }

    /// Palette for this mode
    pub fn palette(self) -> ThemeColors {
        match self {
            ThemeMode::Classic => classic_palette(),
            ThemeMode::Neon => neon_palette(),
        }
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(ThemeMode::Classic),
            "neon" => Ok(ThemeMode::Neon),
            other => Err(format!("unknown theme '{}' (expected classic or neon)", other)),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Classic => write!(f, "classic"),
            ThemeMode::Neon => write!(f, "neon"),
        }
    }
}

/// Light blue-on-white palette
pub fn classic_palette() -> ThemeColors {
    ThemeColors {
        background: hex_color(0xF5F5F5),
        card_background: hex_color(0xFFFFFF),
        header_background: hex_color(0x2563EB),
        text: hex_color(0x1F2937),
        text_secondary: hex_color(0x6B7280),
        accent: hex_color(0x2563EB),
        accent_secondary: hex_color(0x3B82F6),
        border: hex_color(0xE5E7EB),
        tab_active: hex_color(0x2563EB),
        tab_inactive: hex_color(0x9CA3AF),
        shadow: hex_color(0x000000),
        card_border: hex_color(0xE5E7EB),
    }
}

/// Green/magenta on black
pub fn neon_palette() -> ThemeColors {
    ThemeColors {
        background: hex_color(0x0A0A0A),
        card_background: hex_color(0x1A1A1A),
        header_background: hex_color(0x1A1A1A),
        text: hex_color(0x00FF41),
        text_secondary: hex_color(0x00FFFF),
        accent: hex_color(0x00FF41),
        accent_secondary: hex_color(0xFF00FF),
        border: hex_color(0x00FF41),
        tab_active: hex_color(0x00FF41),
        tab_inactive: hex_color(0x666666),
        shadow: hex_color(0x00FF41),
        card_border: hex_color(0xFF00FF),
    }
}

/// Holds the current theme; the only mutation is `toggle`
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    mode: ThemeMode,
}

impl ThemeProvider {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Resolved colors for the current mode
    pub fn colors(&self) -> ThemeColors {
        self.mode.palette()
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::info!(theme = %self.mode, "theme toggled");
        self.mode
    }
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use tui_components::ColorRole;

    #[test]
    fn test_toggle_flips_between_modes() {
        let mut provider = ThemeProvider::default();
        assert_eq!(provider.mode(), ThemeMode::Classic);
        assert_eq!(provider.toggle(), ThemeMode::Neon);
        assert_eq!(provider.colors(), neon_palette());
        assert_eq!(provider.toggle(), ThemeMode::Classic);
    }

    #[test]
    fn test_palettes_resolve_every_role_to_rgb() {
        for mode in [ThemeMode::Classic, ThemeMode::Neon] {
            let palette = mode.palette();
            for role in ColorRole::ALL {
                assert!(
                    matches!(palette.resolve(role), Color::Rgb(..)),
                    "{} has no color for {}",
                    mode,
                    role.name()
                );
            }
        }
    }

    #[test]
    fn test_parse_theme_names() {
        assert_eq!("Neon".parse::<ThemeMode>(), Ok(ThemeMode::Neon));
        assert_eq!(" classic ".parse::<ThemeMode>(), Ok(ThemeMode::Classic));
        assert!("solarized".parse::<ThemeMode>().is_err());
    }
}
