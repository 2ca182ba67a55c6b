// Theme Colors
// Fully resolved color roles handed to components each render

use ratatui::style::Color;

/// Named color roles of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    CardBackground,
    HeaderBackground,
    Text,
    TextSecondary,
    Accent,
    AccentSecondary,
    Border,
    TabActive,
    TabInactive,
    Shadow,
    CardBorder,
}

impl ColorRole {
    pub const ALL: [ColorRole; 12] = [
        ColorRole::Background,
        ColorRole::CardBackground,
        ColorRole::HeaderBackground,
        ColorRole::Text,
        ColorRole::TextSecondary,
        ColorRole::Accent,
        ColorRole::AccentSecondary,
        ColorRole::Border,
        ColorRole::TabActive,
        ColorRole::TabInactive,
        ColorRole::Shadow,
        ColorRole::CardBorder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::CardBackground => "card_background",
            ColorRole::HeaderBackground => "header_background",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "text_secondary",
            ColorRole::Accent => "accent",
            ColorRole::AccentSecondary => "accent_secondary",
            ColorRole::Border => "border",
            ColorRole::TabActive => "tab_active",
            ColorRole::TabInactive => "tab_inactive",
            ColorRole::Shadow => "shadow",
            ColorRole::CardBorder => "card_border",
        }
    }
}

/// A palette with every role resolved to a concrete color
///
/// Read-only to components; whoever owns the theme builds a new value when
/// the theme changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Color,
    pub card_background: Color,
    pub header_background: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_secondary: Color,
    pub border: Color,
    pub tab_active: Color,
    pub tab_inactive: Color,
    pub shadow: Color,
    pub card_border: Color,
}

impl ThemeColors {
    /// Look up the color for a role
    pub fn resolve(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::CardBackground => self.card_background,
            ColorRole::HeaderBackground => self.header_background,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::Accent => self.accent,
            ColorRole::AccentSecondary => self.accent_secondary,
            ColorRole::Border => self.border,
            ColorRole::TabActive => self.tab_active,
            ColorRole::TabInactive => self.tab_inactive,
            ColorRole::Shadow => self.shadow,
            ColorRole::CardBorder => self.card_border,
        }
    }
}
