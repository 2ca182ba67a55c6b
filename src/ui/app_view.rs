// Application View
// Main application layout and rendering

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_components::render_configuration_error;

use super::screens::screen_views;
use super::styles::{resolve_style, StyleRole};
use crate::core::App;

/// Render the entire application
pub fn render_app(f: &mut Frame, app: &mut App) {
    let colors = app.theme.colors();
    let mode = app.theme.mode();
    f.render_widget(
        Block::default().style(resolve_style(mode, &colors, StyleRole::Page)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Tabs
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_tabs(f, app, chunks[1]);
    render_footer(f, app, chunks[2]);
}

/// Render the header bar
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let colors = app.theme.colors();
    let mode = app.theme.mode();
    let style = |role| resolve_style(mode, &colors, role);

    let title = if mode.is_neon() {
        format!("✨ {} ✨", app.config.application.title.to_uppercase())
    } else {
        app.config.application.title.clone()
    };
    let hint = if mode.is_neon() { "t: classic theme" } else { "t: neon theme" };

    let lines = vec![
        Line::from(Span::styled(title, style(StyleRole::HeaderTitle))),
        Line::from(vec![
            Span::styled(app.config.portfolio.name.as_str(), style(StyleRole::HeaderSubtitle)),
            Span::styled("  ·  ", style(StyleRole::HeaderSubtitle)),
            Span::styled(hint, style(StyleRole::Hint)),
        ]),
    ];

    let header = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style(StyleRole::CardBorder))
            .style(style(StyleRole::Card)),
    );
    f.render_widget(header, area);
}

/// Render the tab view, or the configuration error in its place
fn render_tabs(f: &mut Frame, app: &mut App, area: Rect) {
    let App {
        screens,
        config,
        theme,
        banner,
        tab_view,
        ..
    } = app;

    let colors = theme.colors();
    let ctx = super::screens::ScreenContext {
        content: &config.portfolio,
        mode: theme.mode(),
        colors,
        banner,
    };
    let tabs = screen_views(screens, ctx);

    match tab_view {
        Ok(manager) => {
            // On failure the placeholder is drawn; the manager logs each new error once
            let _ = manager.render(f, area, &tabs, Some(&colors));
        }
        Err(err) => render_configuration_error(f, area, err),
    }
}

/// Render the footer with bindings and status text
fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let colors = app.theme.colors();
    let mode = app.theme.mode();
    let style = |role| resolve_style(mode, &colors, role);

    let mut spans = Vec::new();
    for binding in &app.config.application.bindings {
        spans.push(Span::styled(binding.key.as_str(), style(StyleRole::StatusKey)));
        spans.push(Span::styled(format!(" {}  ", binding.description), style(StyleRole::StatusBar)));
    }
    spans.push(Span::styled(
        format!("│ {}", app.config.application.status_bar.default_text),
        style(StyleRole::StatusBar),
    ));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(style(StyleRole::CardBorder))
            .style(style(StyleRole::StatusBar)),
    );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::core::{AppEvent, AppSettings};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(yaml_edit: impl FnOnce(&mut crate::config::AppConfig)) -> App {
        let mut config = parse_config(include_str!("../config.yaml")).unwrap();
        yaml_edit(&mut config);
        App::new(config, AppSettings::default()).unwrap()
    }

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        let buf = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_renders_header_tabs_and_footer() {
        let mut app = app(|_| {});
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Portfolio"));
        assert!(text.contains("Projects"));
        assert!(text.contains("About Me"));
        assert!(text.contains("Toggle theme"));
    }

    #[test]
    fn test_neon_title_and_click_selection() {
        let mut app = app(|_| {});
        app.handle_event(AppEvent::ToggleTheme);
        let mut terminal = Terminal::new(TestBackend::new(90, 40)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("PORTFOLIO"));

        // Header strip starts right below the 4-row header; third tab spans columns 60..90
        app.handle_event(AppEvent::Click { column: 75, row: 4 });
        terminal.draw(|f| render_app(f, &mut app)).unwrap();
        assert!(screen(&terminal).contains("https://github.com/Advik-n"));
    }

    #[test]
    fn test_configuration_error_replaces_tab_ui() {
        let mut app = app(|config| config.tab_view.active_color = Some("not-a-color".to_string()));
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal.draw(|f| render_app(f, &mut app)).unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Configuration error"));
        assert!(!text.contains("About Me"));
    }
}
