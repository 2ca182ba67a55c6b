// Projects Screen
// One card per project with its description and tech badges

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use super::{badges, ScreenContext};
use crate::ui::styles::StyleRole;

/// Borders, description and the badge row
const CARD_HEIGHT: u16 = 5;

pub fn render(ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
    let projects = &ctx.content.projects;
    if projects.is_empty() {
        Paragraph::new("No projects yet")
            .style(ctx.style(StyleRole::Muted))
            .render(area, buf);
        return;
    }

    let mut constraints: Vec<Constraint> = projects.iter().map(|_| Constraint::Length(CARD_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (project, chunk) in projects.iter().zip(chunks.iter()) {
        if chunk.height == 0 {
            break;
        }
        let lines = vec![
            Line::styled(project.description.as_str(), ctx.style(StyleRole::Muted)),
            badges(ctx, project.tech.iter().map(String::as_str)),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(ctx.card(&project.title))
            .render(*chunk, buf);
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::screens::test_support::{content, render_to_string};
    use crate::ui::screens::ScreenKind;

    #[test]
    fn test_projects_render_cards_in_order() {
        let content = content();
        let text = render_to_string(ScreenKind::Projects, &content, 100, 24);

        let first = text.find("Portfolio App").unwrap();
        let second = text.find("TabView Component").unwrap();
        assert!(first < second);
        assert!(text.contains(" Reanimated "));
    }

    #[test]
    fn test_empty_project_list_shows_hint() {
        let mut content = content();
        content.projects.clear();
        let text = render_to_string(ScreenKind::Projects, &content, 40, 5);
        assert!(text.contains("No projects yet"));
    }
}
