// Tab View Manager
// Provides YAML configuration helpers and OOP-style tab view manager wrapper

use ratatui::{layout::Rect, Frame};
use serde::Deserialize;
use std::time::Duration;

use crate::core::{TabDescriptor, TabViewError, ThemeColors};
use crate::elements::tab_view::{render_configuration_error, TabContent, TabView, TabViewOptions, TabViewState};
use crate::utilities::{parse_color, SpringConfig};

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    YAML Configuration Structures                               │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Spring overrides from YAML (missing fields keep the defaults)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpringConfigYaml {
    pub damping: Option<f32>,
    pub stiffness: Option<f32>,
    pub mass: Option<f32>,
}

/// Tab configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabConfigYaml {
    /// Tab key (also selects the content the host shows for it)
    pub id: String,
    /// Tab display name
    pub name: String,
}

/// Tab view configuration from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct TabViewConfigYaml {
    /// Title color of the active tab (e.g., "#007AFF" or "cyan")
    pub active_color: Option<String>,
    /// Title color of inactive tabs
    pub inactive_color: Option<String>,
    /// Indicator color (defaults to the active color)
    pub indicator_color: Option<String>,
    /// Indicator spring overrides
    #[serde(default)]
    pub spring: Option<SpringConfigYaml>,
    /// Ordered list of tabs
    pub tabs: Vec<TabConfigYaml>,
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                    Configuration Conversion Functions                          │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

fn convert_color(role: &str, value: Option<&String>) -> Result<Option<ratatui::style::Color>, TabViewError> {
    match value {
        None => Ok(None),
        Some(value) => parse_color(value)
            .map(Some)
            .ok_or_else(|| TabViewError::InvalidColor {
                role: role.to_string(),
                value: value.clone(),
            }),
    }
}

/// Convert YAML style overrides to tab view options
pub fn convert_tab_view_options(config: &TabViewConfigYaml) -> Result<TabViewOptions, TabViewError> {
    Ok(TabViewOptions {
        active_color: convert_color("active_color", config.active_color.as_ref())?,
        inactive_color: convert_color("inactive_color", config.inactive_color.as_ref())?,
        indicator_color: convert_color("indicator_color", config.indicator_color.as_ref())?,
    })
}

/// Apply YAML spring overrides on top of `defaults` and validate the result
pub fn convert_spring_config(config: Option<&SpringConfigYaml>, defaults: SpringConfig) -> Result<SpringConfig, TabViewError> {
    let spring = match config {
        Some(overrides) => SpringConfig {
            damping: overrides.damping.unwrap_or(defaults.damping),
            stiffness: overrides.stiffness.unwrap_or(defaults.stiffness),
            mass: overrides.mass.unwrap_or(defaults.mass),
            ..defaults
        },
        None => defaults,
    };
    spring.validate()?;
    Ok(spring)
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                            Tab View Manager - OOP Style Tab View Operations                    │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab View Manager wrapper for OOP-style tab view operations
/// Owns the mounted state and the resolved style options
#[derive(Debug, Clone)]
pub struct TabViewManager {
    state: TabViewState,
    options: TabViewOptions,
    /// Error from the most recent render, reported once until it changes
    last_error: Option<TabViewError>,
}

impl TabViewManager {
    /// Mount a tab view over `tabs` with explicit options
    pub fn new<C>(tabs: &[TabDescriptor<C>], options: TabViewOptions, spring: SpringConfig) -> Result<Self, TabViewError> {
        let state = TabViewState::mount(tabs, spring)?;
        tracing::debug!(tab_count = tabs.len(), "tab view mounted");
        Ok(Self {
            state,
            options,
            last_error: None,
        })
    }

    /// Create and mount a tab view from YAML configuration
    pub fn create<C>(config: &TabViewConfigYaml, tabs: &[TabDescriptor<C>], spring_defaults: SpringConfig) -> Result<Self, TabViewError> {
        let options = convert_tab_view_options(config)?;
        let spring = convert_spring_config(config.spring.as_ref(), spring_defaults)?;
        Self::new(tabs, options, spring)
    }

    pub fn state(&self) -> &TabViewState {
        &self.state
    }

    pub fn options(&self) -> TabViewOptions {
        self.options
    }

    pub fn active_index(&self) -> usize {
        self.state.active_index()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Why the last render showed the configuration error placeholder, if it did
    pub fn last_error(&self) -> Option<&TabViewError> {
        self.last_error.as_ref()
    }

    /// Navigate to the previous tab
    pub fn navigate_previous(&mut self) -> bool {
        self.state.navigate_previous()
    }

    /// Navigate to the next tab
    pub fn navigate_next(&mut self) -> bool {
        self.state.navigate_next()
    }

    /// Set the active tab by index
    pub fn set_active(&mut self, index: usize) -> bool {
        self.state.select_tab(index)
    }

    /// Select whichever tab header sits under a screen position
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.state.tab_at(column, row) {
            Some(index) => self.state.select_tab(index),
            None => false,
        }
    }

    /// Adopt a replaced tab set
    pub fn sync_tabs<C>(&mut self, tabs: &[TabDescriptor<C>]) -> Result<(), TabViewError> {
        self.state.sync_tabs(tabs)
    }

    /// Advance the indicator animation
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.state.tick(dt)
    }

    /// Render the tab view, or the configuration error placeholder if `tabs` is invalid
    pub fn render<C: TabContent>(
        &mut self,
        f: &mut Frame,
        area: Rect,
        tabs: &[TabDescriptor<C>],
        palette: Option<&ThemeColors>,
    ) -> Result<(), TabViewError> {
        match TabView::try_new(tabs) {
            Ok(view) => {
                let view = view.options(self.options).palette(palette);
                f.render_stateful_widget(view, area, &mut self.state);
                if self.last_error.take().is_some() {
                    tracing::info!("tab set valid again");
                }
                Ok(())
            }
            Err(err) => {
                if self.last_error.as_ref() != Some(&err) {
                    tracing::error!(error = %err, "refusing to render tab view");
                    self.last_error = Some(err.clone());
                }
                render_configuration_error(f, area, &err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

    struct Label(&'static str);

    impl TabContent for Label {
        fn render(&self, area: Rect, buf: &mut Buffer) {
            buf.set_string(area.x, area.y, self.0, ratatui::style::Style::default());
        }
    }

    fn tabs() -> Vec<TabDescriptor<Label>> {
        vec![
            TabDescriptor::new("profile", "Profile", Label("profile body")),
            TabDescriptor::new("projects", "Projects", Label("projects body")),
            TabDescriptor::new("links", "Links", Label("links body")),
        ]
    }

    const YAML: &str = r##"
active_color: "#00FF41"
inactive_color: "#666"
spring:
  stiffness: 120
tabs:
  - id: profile
    name: Profile
  - id: projects
    name: Projects
  - id: links
    name: Links
"##;

    #[test]
    fn test_yaml_configuration_converts() {
        let config: TabViewConfigYaml = serde_yaml::from_str(YAML).unwrap();
        assert_eq!(config.tabs.len(), 3);

        let options = convert_tab_view_options(&config).unwrap();
        assert_eq!(options.active_color, Some(Color::Rgb(0x00, 0xFF, 0x41)));
        assert_eq!(options.inactive_color, Some(Color::Rgb(0x66, 0x66, 0x66)));
        assert_eq!(options.indicator_color, None);

        let spring = convert_spring_config(config.spring.as_ref(), SpringConfig::default()).unwrap();
        assert_eq!(spring.stiffness, 120.0);
        assert_eq!(spring.damping, SpringConfig::DEFAULT_DAMPING);
    }

    #[test]
    fn test_invalid_style_values_are_configuration_errors() {
        let mut config: TabViewConfigYaml = serde_yaml::from_str(YAML).unwrap();
        config.indicator_color = Some("#12".to_string());
        assert_eq!(
            convert_tab_view_options(&config),
            Err(TabViewError::InvalidColor {
                role: "indicator_color".to_string(),
                value: "#12".to_string(),
            })
        );

        let bad_spring = SpringConfigYaml {
            mass: Some(0.0),
            ..SpringConfigYaml::default()
        };
        assert!(convert_spring_config(Some(&bad_spring), SpringConfig::default()).is_err());

        config.indicator_color = None;
        config.spring = Some(bad_spring);
        assert!(TabViewManager::create(&config, &tabs(), SpringConfig::default()).is_err());
    }

    #[test]
    fn test_navigation_wraps_both_ways() {
        let tabs = tabs();
        let mut manager = TabViewManager::new(&tabs, TabViewOptions::default(), SpringConfig::default()).unwrap();

        assert!(manager.navigate_previous());
        assert_eq!(manager.active_index(), 2);
        assert!(manager.navigate_next());
        assert_eq!(manager.active_index(), 0);
        assert!(manager.set_active(1));
        assert!(!manager.set_active(7));
        assert_eq!(manager.active_index(), 1);
    }

    #[test]
    fn test_render_and_click() {
        let tabs = tabs();
        let mut manager = TabViewManager::new(&tabs, TabViewOptions::default(), SpringConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();

        terminal
            .draw(|f| {
                manager.render(f, f.area(), &tabs, None).unwrap();
            })
            .unwrap();

        // Click on the third header
        assert!(manager.click(25, 0));
        assert_eq!(manager.active_index(), 2);
        // Clicks outside the header strip do nothing
        assert!(!manager.click(5, 4));
        assert_eq!(manager.active_index(), 2);

        terminal
            .draw(|f| {
                manager.render(f, f.area(), &tabs, None).unwrap();
            })
            .unwrap();
        let buf = terminal.backend().buffer();
        let row: String = (0..10).map(|x| buf[(x, 2)].symbol()).collect();
        assert_eq!(row, "links body");
    }

    #[test]
    fn test_render_invalid_tabs_shows_placeholder() {
        let tabs = tabs();
        let mut manager = TabViewManager::new(&tabs, TabViewOptions::default(), SpringConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();

        let empty: Vec<TabDescriptor<Label>> = Vec::new();
        let mut result = Ok(());
        terminal
            .draw(|f| {
                result = manager.render(f, f.area(), &empty, None);
            })
            .unwrap();

        assert_eq!(result, Err(TabViewError::EmptyTabs));
        let buf = terminal.backend().buffer();
        let title: String = (0..buf.area.width).map(|x| buf[(x, 0)].symbol()).collect();
        assert!(title.contains("Configuration error"));
    }

    #[test]
    fn test_render_error_is_remembered_until_tabs_are_valid() {
        let tabs = tabs();
        let mut manager = TabViewManager::new(&tabs, TabViewOptions::default(), SpringConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(50, 6)).unwrap();
        assert_eq!(manager.last_error(), None);

        let duplicated = vec![
            TabDescriptor::new("a", "A", Label("a")),
            TabDescriptor::new("a", "B", Label("b")),
        ];
        for _ in 0..3 {
            terminal
                .draw(|f| {
                    let _ = manager.render(f, f.area(), &duplicated, None);
                })
                .unwrap();
        }
        assert_eq!(
            manager.last_error(),
            Some(&TabViewError::DuplicateKey { key: "a".to_string() })
        );

        // A different problem replaces the remembered one
        let empty: Vec<TabDescriptor<Label>> = Vec::new();
        terminal
            .draw(|f| {
                let _ = manager.render(f, f.area(), &empty, None);
            })
            .unwrap();
        assert_eq!(manager.last_error(), Some(&TabViewError::EmptyTabs));

        terminal
            .draw(|f| {
                manager.render(f, f.area(), &tabs, None).unwrap();
            })
            .unwrap();
        assert_eq!(manager.last_error(), None);
    }
}
