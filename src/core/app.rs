// Application State
// Central state for the portfolio TUI

use std::time::Duration;

use tui_components::{TabDescriptor, TabViewError, TabViewManager};

use super::app_config::AppSettings;
use super::events::AppEvent;
use super::theme::ThemeProvider;
use crate::config::AppConfig;
use crate::config_validation::ConfigError;
use crate::ui::banner::BannerAnimation;
use crate::ui::screens::{screen_views, ScreenContext, ScreenKind, ScreenView};

/// Main application state
pub struct App {
    /// Runtime configuration
    pub config: AppConfig,

    /// Compiled defaults
    pub settings: AppSettings,

    /// Current theme
    pub theme: ThemeProvider,

    /// Configured tabs, in order, each naming its screen
    pub screens: Vec<TabDescriptor<ScreenKind>>,

    /// Mounted tab view, or the configuration error that prevents mounting
    pub tab_view: Result<TabViewManager, TabViewError>,

    /// Profile banner animation
    pub banner: BannerAnimation,

    /// Should quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance
    ///
    /// Unknown screen ids fail here. An invalid tab set or invalid style
    /// values do not: the app starts and shows the error in place of the tabs.
    pub fn new(config: AppConfig, settings: AppSettings) -> Result<Self, ConfigError> {
        let screens = config
            .tab_view
            .tabs
            .iter()
            .map(|tab| {
                ScreenKind::from_id(&tab.id)
                    .map(|kind| TabDescriptor::new(tab.id.as_str(), tab.name.as_str(), kind))
                    .ok_or_else(|| ConfigError::UnknownScreen { id: tab.id.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tab_view = TabViewManager::create(&config.tab_view, &screens, settings.animation.spring());
        match &tab_view {
            Ok(_) => tracing::info!(tabs = screens.len(), "tab view ready"),
            Err(err) => tracing::error!(error = %err, "tab view configuration rejected"),
        }

        Ok(Self {
            theme: ThemeProvider::new(settings.ui.theme),
            config,
            settings,
            screens,
            tab_view,
            banner: BannerAnimation::new(),
            should_quit: false,
        })
    }

    /// Screen of the active tab, if the tab view is mounted
    pub fn active_screen(&self) -> Option<ScreenKind> {
        let manager = self.tab_view.as_ref().ok()?;
        self.screens.get(manager.active_index()).map(|screen| screen.content)
    }

    /// This frame's tab descriptors, bound to the current theme
    pub fn tab_descriptors(&self) -> Vec<TabDescriptor<ScreenView<'_>>> {
        screen_views(&self.screens, self.screen_context())
    }

    pub fn screen_context(&self) -> ScreenContext<'_> {
        ScreenContext {
            content: &self.config.portfolio,
            mode: self.theme.mode(),
            colors: self.theme.colors(),
            banner: &self.banner,
        }
    }

    /// Apply an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.quit(),
            AppEvent::ToggleTheme => {
                self.theme.toggle();
            }
            AppEvent::NextTab => {
                if let Ok(manager) = &mut self.tab_view {
                    manager.navigate_next();
                }
            }
            AppEvent::PreviousTab => {
                if let Ok(manager) = &mut self.tab_view {
                    manager.navigate_previous();
                }
            }
            AppEvent::SelectTab(index) => {
                if let Ok(manager) = &mut self.tab_view {
                    manager.set_active(index);
                }
            }
            AppEvent::Click { column, row } => {
                if !self.settings.ui.mouse_enabled {
                    return;
                }
                if let Ok(manager) = &mut self.tab_view {
                    manager.click(column, row);
                }
            }
            // Layout is derived from the frame area on the next draw
            AppEvent::Resize | AppEvent::None => {}
        }
    }

    /// Advance animations by `dt`
    ///
    /// Only the active screen's animations run.
    pub fn tick(&mut self, dt: Duration) {
        if let Ok(manager) = &mut self.tab_view {
            manager.tick(dt);
        }
        if self.active_screen() == Some(ScreenKind::Profile) {
            self.banner.tick(dt);
        }
    }

    /// Whether anything on screen is moving
    pub fn needs_frame(&self) -> bool {
        let indicator_moving = self.tab_view.as_ref().is_ok_and(|manager| manager.is_animating());
        indicator_moving || self.active_screen() == Some(ScreenKind::Profile)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn app() -> App {
        let config = parse_config(include_str!("../config.yaml")).unwrap();
        App::new(config, AppSettings::default()).unwrap()
    }

    #[test]
    fn test_starts_on_first_tab() {
        let app = app();
        assert_eq!(app.active_screen(), Some(ScreenKind::Profile));
        assert_eq!(app.tab_descriptors().len(), 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_keyboard_navigation_swaps_screens_immediately() {
        let mut app = app();
        app.handle_event(AppEvent::NextTab);
        assert_eq!(app.active_screen(), Some(ScreenKind::Projects));
        assert!(app.needs_frame());

        app.handle_event(AppEvent::PreviousTab);
        app.handle_event(AppEvent::PreviousTab);
        assert_eq!(app.active_screen(), Some(ScreenKind::Links));

        app.handle_event(AppEvent::SelectTab(0));
        assert_eq!(app.active_screen(), Some(ScreenKind::Profile));

        // Out of range is ignored
        app.handle_event(AppEvent::SelectTab(8));
        assert_eq!(app.active_screen(), Some(ScreenKind::Profile));
    }

    #[test]
    fn test_banner_only_runs_on_profile() {
        let mut app = app();
        app.tick(Duration::from_millis(100));
        assert_eq!(app.banner.elapsed(), Duration::from_millis(100));

        app.handle_event(AppEvent::SelectTab(1));
        for _ in 0..120 {
            app.tick(Duration::from_millis(16));
        }
        assert_eq!(app.banner.elapsed(), Duration::from_millis(100));
        // Indicator has settled and nothing else animates on projects
        assert!(!app.needs_frame());
    }

    #[test]
    fn test_toggle_theme_and_quit() {
        let mut app = app();
        let before = app.theme.mode();
        app.handle_event(AppEvent::ToggleTheme);
        assert_ne!(app.theme.mode(), before);

        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_unknown_screen_is_rejected() {
        let mut config = parse_config(include_str!("../config.yaml")).unwrap();
        config.tab_view.tabs[1].id = "blog".to_string();
        assert!(matches!(
            App::new(config, AppSettings::default()),
            Err(ConfigError::UnknownScreen { id }) if id == "blog"
        ));
    }

    #[test]
    fn test_invalid_tab_set_keeps_error_for_display() {
        let mut config = parse_config(include_str!("../config.yaml")).unwrap();
        config.tab_view.tabs[2].id = "profile".to_string();
        let mut app = App::new(config, AppSettings::default()).unwrap();

        assert_eq!(
            app.tab_view.as_ref().err(),
            Some(&TabViewError::DuplicateKey { key: "profile".to_string() })
        );
        assert_eq!(app.active_screen(), None);

        // Navigation is inert without a mounted tab view
        app.handle_event(AppEvent::NextTab);
        app.tick(Duration::from_millis(16));
        assert!(!app.needs_frame());
    }
}
