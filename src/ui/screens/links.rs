// Links Screen
// Contact and profile links; URLs are shown, not opened

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::ScreenContext;
use crate::ui::styles::StyleRole;

/// Borders, subtitle and URL
const ITEM_HEIGHT: u16 = 4;

pub fn render(ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
    let links = &ctx.content.links;
    if links.is_empty() {
        Paragraph::new("No links configured")
            .style(ctx.style(StyleRole::Muted))
            .render(area, buf);
        return;
    }

    let mut constraints: Vec<Constraint> = links.iter().map(|_| Constraint::Length(ITEM_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (link, chunk) in links.iter().zip(chunks.iter()) {
        if chunk.height == 0 {
            break;
        }
        let lines = vec![
            Line::styled(link.subtitle.as_str(), ctx.style(StyleRole::Muted)),
            Line::from(vec![
                Span::styled("→ ", ctx.style(StyleRole::SectionSubtitle)),
                Span::styled(link.url.as_str(), ctx.style(StyleRole::Link)),
            ]),
        ];
        Paragraph::new(lines)
            .block(ctx.card(&format!("{} {}", link.icon, link.title)))
            .render(*chunk, buf);
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::screens::test_support::{content, render_to_string};
    use crate::ui::screens::ScreenKind;

    #[test]
    fn test_links_show_title_subtitle_and_url() {
        let content = content();
        let text = render_to_string(ScreenKind::Links, &content, 70, 16);

        assert!(text.contains("GitHub"));
        assert!(text.contains("Check out my projects"));
        assert!(text.contains("https://github.com/Advik-n"));
    }
}
