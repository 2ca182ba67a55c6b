// Helper utilities for TUI components
use ratatui::style::Color;

/// Convert hex color to ratatui Color
pub const fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color string from configuration
///
/// Accepts `#RGB`, `#RRGGBB` and the named colors ratatui understands
/// ("cyan", "dark gray", "lightblue", ...). Returns None if the value
/// can't be interpreted.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim().trim_matches('"').trim_matches('\'');

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    value.parse::<Color>().ok()
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => u32::from_str_radix(hex, 16).ok().map(hex_color),
        3 => {
            // #0FF -> #00FFFF
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok().map(hex_color)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_channels() {
        assert_eq!(hex_color(0x007AFF), Color::Rgb(0, 122, 255));
        assert_eq!(hex_color(0x8E8E93), Color::Rgb(142, 142, 147));
    }

    #[test]
    fn test_parse_long_and_short_hex() {
        assert_eq!(parse_color("#00FF41"), Some(Color::Rgb(0, 255, 65)));
        assert_eq!(parse_color("#0FF"), Some(Color::Rgb(0, 255, 255)));
        assert_eq!(parse_color("\"#666\""), Some(Color::Rgb(0x66, 0x66, 0x66)));
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("cyan"), Some(Color::Cyan));
        assert_eq!(parse_color("red"), Some(Color::Red));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
        assert_eq!(parse_color("not-a-color"), None);
    }
}
