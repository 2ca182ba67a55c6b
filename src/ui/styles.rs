// UI Styles
// Maps a theme mode and its palette to concrete styles for each UI role

use ratatui::style::{Color, Modifier, Style};
use tui_components::{hex_color, ThemeColors};

use crate::core::ThemeMode;

/// Classic skill badge fill
const CLASSIC_BADGE_BG: Color = hex_color(0xE0E7FF);
/// Neon body text on cards
const NEON_CARD_TEXT: Color = hex_color(0xCCCCCC);

/// Every place in the UI that needs a style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleRole {
    // === Frame ===
    Page,
    HeaderTitle,
    HeaderSubtitle,
    Hint,
    StatusBar,
    StatusKey,

    // === Cards ===
    Card,
    CardBorder,
    SectionTitle,
    SectionSubtitle,
    Body,
    Muted,

    // === Badges and bars ===
    Badge,
    LevelFilled,
    LevelEmpty,

    // === Banner ===
    BannerName,
    BannerTagline,
    Link,
}

/// Resolve the style for `role` in the given theme
///
/// Pure: the same inputs always give the same style.
pub fn resolve_style(mode: ThemeMode, colors: &ThemeColors, role: StyleRole) -> Style {
    let neon = mode.is_neon();
    let base = Style::default().bg(colors.card_background);

    match role {
        StyleRole::Page => Style::default().bg(colors.background).fg(colors.text),
        StyleRole::HeaderTitle => {
            let fg = if neon { colors.accent } else { colors.header_background };
            base.fg(fg).add_modifier(Modifier::BOLD)
        }
        StyleRole::HeaderSubtitle => base.fg(colors.text_secondary),
        StyleRole::Hint => base.fg(colors.text_secondary).add_modifier(Modifier::ITALIC),
        StyleRole::StatusBar => base.fg(colors.text_secondary),
        StyleRole::StatusKey => base.fg(colors.accent).add_modifier(Modifier::BOLD),

        StyleRole::Card => base.fg(colors.text),
        StyleRole::CardBorder => {
            let style = base.fg(colors.card_border);
            if neon {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        }
        StyleRole::SectionTitle => {
            let fg = if neon { colors.accent_secondary } else { colors.accent };
            base.fg(fg).add_modifier(Modifier::BOLD)
        }
        StyleRole::SectionSubtitle => {
            let fg = if neon { colors.text_secondary } else { colors.accent };
            base.fg(fg).add_modifier(Modifier::BOLD)
        }
        StyleRole::Body => base.fg(colors.text),
        StyleRole::Muted => {
            let fg = if neon { NEON_CARD_TEXT } else { colors.text_secondary };
            base.fg(fg)
        }

        StyleRole::Badge => {
            let bg = if neon { colors.card_background } else { CLASSIC_BADGE_BG };
            let style = Style::default().bg(bg).fg(colors.accent);
            if neon {
                style.add_modifier(Modifier::BOLD)
            } else {
                style
            }
        }
        StyleRole::LevelFilled => base.fg(colors.accent),
        StyleRole::LevelEmpty => base.fg(colors.border),

        StyleRole::BannerName => {
            let fg = if neon { colors.accent } else { colors.header_background };
            Style::default().bg(colors.background).fg(fg).add_modifier(Modifier::BOLD)
        }
        StyleRole::BannerTagline => Style::default().bg(colors.background).fg(colors.text_secondary),
        StyleRole::Link => base.fg(colors.accent_secondary).add_modifier(Modifier::UNDERLINED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_titles_follow_theme() {
        let classic = ThemeMode::Classic.palette();
        let neon = ThemeMode::Neon.palette();

        assert_eq!(
            resolve_style(ThemeMode::Classic, &classic, StyleRole::SectionTitle).fg,
            Some(classic.accent)
        );
        assert_eq!(
            resolve_style(ThemeMode::Neon, &neon, StyleRole::SectionTitle).fg,
            Some(neon.accent_secondary)
        );
    }

    #[test]
    fn test_badges_use_fixed_fill_in_classic() {
        let classic = ThemeMode::Classic.palette();
        let style = resolve_style(ThemeMode::Classic, &classic, StyleRole::Badge);
        assert_eq!(style.bg, Some(CLASSIC_BADGE_BG));
        assert_eq!(style.fg, Some(classic.accent));
    }

    #[test]
    fn test_resolution_is_pure() {
        let neon = ThemeMode::Neon.palette();
        let a = resolve_style(ThemeMode::Neon, &neon, StyleRole::CardBorder);
        let b = resolve_style(ThemeMode::Neon, &neon, StyleRole::CardBorder);
        assert_eq!(a, b);
        assert!(a.add_modifier.contains(Modifier::BOLD));
    }
}
