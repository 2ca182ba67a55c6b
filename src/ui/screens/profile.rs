// Profile Screen
// Banner, about card, skill badges and skill level bars

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{badges, ScreenContext};
use crate::config::Skill;
use crate::ui::banner::BANNER_HEIGHT;
use crate::ui::styles::StyleRole;

const FILLED: &str = "█";
const EMPTY: &str = "░";
const MAX_NAME_WIDTH: usize = 28;

/// Rows needed to wrap `len` cells into `width` columns
fn wrapped_rows(len: usize, width: u16) -> u16 {
    let width = width.max(1) as usize;
    len.div_ceil(width).max(1) as u16
}

/// `name  ██████░░░░ 60%`
fn level_line<'a>(ctx: &ScreenContext<'_>, skill: &'a Skill, level: u8, name_width: usize, width: u16) -> Line<'a> {
    let bar_width = (width as usize).saturating_sub(name_width + 6);
    let filled = bar_width * level.min(100) as usize / 100;

    Line::from(vec![
        Span::styled(format!("{:<w$} ", skill.name, w = name_width), ctx.style(StyleRole::Body)),
        Span::styled(FILLED.repeat(filled), ctx.style(StyleRole::LevelFilled)),
        Span::styled(EMPTY.repeat(bar_width - filled), ctx.style(StyleRole::LevelEmpty)),
        Span::styled(format!(" {:>3}%", level), ctx.style(StyleRole::Muted)),
    ])
}

pub fn render(ctx: &ScreenContext<'_>, area: Rect, buf: &mut Buffer) {
    let content = ctx.content;
    // Borders and horizontal padding
    let inner_width = area.width.saturating_sub(4);

    let about_height = wrapped_rows(content.about.chars().count(), inner_width) + 2;

    let badge_cells: usize = content.skills.iter().map(|s| s.name.chars().count() + 3).sum();
    let leveled: Vec<(&Skill, u8)> = content
        .skills
        .iter()
        .filter_map(|skill| skill.level.map(|level| (skill, level)))
        .collect();
    let skills_height = wrapped_rows(badge_cells, inner_width) + leveled.len() as u16 + 3;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BANNER_HEIGHT),
            Constraint::Length(about_height),
            Constraint::Length(skills_height),
            Constraint::Min(0),
        ])
        .split(area);

    ctx.banner.render(
        &content.name,
        content.tagline.as_deref(),
        ctx.style(StyleRole::BannerName),
        ctx.style(StyleRole::BannerTagline),
        chunks[0],
        buf,
    );

    Paragraph::new(content.about.as_str())
        .style(ctx.style(StyleRole::Body))
        .wrap(Wrap { trim: true })
        .block(ctx.card(&format!("About Me · {}", content.role)))
        .render(chunks[1], buf);

    let mut lines = vec![badges(ctx, content.skills.iter().map(|s| s.name.as_str()))];
    if !leveled.is_empty() {
        lines.push(Line::default());
        let name_width = leveled
            .iter()
            .map(|(skill, _)| skill.name.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_NAME_WIDTH);
        for (skill, level) in &leveled {
            lines.push(level_line(ctx, skill, *level, name_width, inner_width));
        }
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(ctx.card("Skills"))
        .render(chunks[2], buf);
}
