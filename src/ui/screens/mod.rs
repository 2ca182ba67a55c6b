// Screens
// Content shown inside each tab of the portfolio

pub mod links;
pub mod profile;
pub mod projects;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_components::{TabContent, TabDescriptor, ThemeColors};

use crate::config::PortfolioContent;
use crate::core::ThemeMode;
use super::banner::BannerAnimation;
use super::styles::{resolve_style, StyleRole};

/// The screens a tab id can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Profile,
    Projects,
    Links,
}

impl ScreenKind {
    pub const ALL: [ScreenKind; 3] = [ScreenKind::Profile, ScreenKind::Projects, ScreenKind::Links];

    /// Look up the screen for a configured tab id
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "profile" => Some(ScreenKind::Profile),
            "projects" => Some(ScreenKind::Projects),
            "links" => Some(ScreenKind::Links),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ScreenKind::Profile => "profile",
            ScreenKind::Projects => "projects",
            ScreenKind::Links => "links",
        }
    }
}

/// Everything a screen needs to draw itself for one frame
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    pub content: &'a PortfolioContent,
    pub mode: ThemeMode,
    pub colors: ThemeColors,
    pub banner: &'a BannerAnimation,
}

impl ScreenContext<'_> {
    pub fn style(&self, role: StyleRole) -> ratatui::style::Style {
        resolve_style(self.mode, &self.colors, role)
    }

    /// Bordered card with a section title
    pub fn card(&self, title: &str) -> Block<'static> {
        let border_type = if self.mode.is_neon() { BorderType::Double } else { BorderType::Rounded };
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(self.style(StyleRole::CardBorder))
            .style(self.style(StyleRole::Card))
            .padding(Padding::horizontal(1))
            .title(Line::from(Span::styled(format!(" {} ", title), self.style(StyleRole::SectionTitle))))
    }
}

/// A screen bound to the current frame's theme and content
pub struct ScreenView<'a> {
    pub kind: ScreenKind,
    pub ctx: ScreenContext<'a>,
}

impl TabContent for ScreenView<'_> {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.ctx.style(StyleRole::Page));
        match self.kind {
            ScreenKind::Profile => profile::render(&self.ctx, area, buf),
            ScreenKind::Projects => projects::render(&self.ctx, area, buf),
            ScreenKind::Links => links::render(&self.ctx, area, buf),
        }
    }
}

/// Build this frame's tab descriptors from the configured screens
pub fn screen_views<'a>(screens: &'a [TabDescriptor<ScreenKind>], ctx: ScreenContext<'a>) -> Vec<TabDescriptor<ScreenView<'a>>> {
    screens
        .iter()
        .map(|screen| {
            TabDescriptor::new(
                screen.key.as_str(),
                screen.title.as_str(),
                ScreenView { kind: screen.content, ctx },
            )
        })
        .collect()
}

/// Badge spans ("[ React ]") separated by single spaces
pub(crate) fn badges<'a>(ctx: &ScreenContext<'_>, labels: impl IntoIterator<Item = &'a str>) -> Line<'a> {
    let style = ctx.style(StyleRole::Badge);
    let gap = ctx.style(StyleRole::Card);
    let mut spans = Vec::new();
    for (i, label) in labels.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ", gap));
        }
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    Line::from(spans)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_ids_round_trip() {
        for kind in ScreenKind::ALL {
            assert_eq!(ScreenKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(ScreenKind::from_id(" Links "), Some(ScreenKind::Links));
        assert_eq!(ScreenKind::from_id("blog"), None);
    }

    #[test]
    fn test_screen_views_keep_order_and_titles() {
        let content = test_support::content();
        let banner = BannerAnimation::new();
        let screens = vec![
            TabDescriptor::new("links", "Links", ScreenKind::Links),
            TabDescriptor::new("profile", "Me", ScreenKind::Profile),
        ];
        let ctx = ScreenContext {
            content: &content,
            mode: ThemeMode::Neon,
            colors: ThemeMode::Neon.palette(),
            banner: &banner,
        };

        let views = screen_views(&screens, ctx);
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].key, "links");
        assert_eq!(views[1].title, "Me");
        assert_eq!(views[1].content.kind, ScreenKind::Profile);
    }
}
