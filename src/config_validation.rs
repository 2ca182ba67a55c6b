// Configuration validation module

use std::path::PathBuf;

use anyhow::Result;
use thiserror::Error;

use crate::config::{load_config, AppConfig};
use crate::ui::screens::ScreenKind;

/// Problems in the runtime configuration that stop the app from starting
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tab '{id}' does not name a screen (expected profile, projects or links)")]
    UnknownScreen { id: String },

    #[error("skill '{name}' has level {level}, levels are percentages (0-100)")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("portfolio.name must not be empty")]
    EmptyName,
}

/// Check the parts of the configuration the tab view itself does not validate
///
/// Tab set and style problems are left to the tab view, which reports them
/// in place of its UI.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    for tab in &config.tab_view.tabs {
        if ScreenKind::from_id(&tab.id).is_none() {
            return Err(ConfigError::UnknownScreen { id: tab.id.clone() });
        }
    }

    if config.portfolio.name.trim().is_empty() {
        return Err(ConfigError::EmptyName);
    }

    for skill in &config.portfolio.skills {
        if let Some(level) = skill.level {
            if level > 100 {
                return Err(ConfigError::SkillLevelOutOfRange {
                    name: skill.name.clone(),
                    level,
                });
            }
        }
    }

    Ok(())
}

/// Load and validate configuration
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let config = load_config(config_path)?;
    if let Err(err) = validate_config(&config) {
        tracing::error!(error = %err, "invalid configuration");
        return Err(err.into());
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;

    fn config() -> AppConfig {
        parse_config(include_str!("config.yaml")).unwrap()
    }

    #[test]
    fn test_shipped_config_is_valid() {
        assert_eq!(validate_config(&config()), Ok(()));
    }

    #[test]
    fn test_rejects_unknown_screen() {
        let mut config = config();
        config.tab_view.tabs[0].id = "resume".to_string();
        assert_eq!(
            validate_config(&config),
            Err(ConfigError::UnknownScreen { id: "resume".to_string() })
        );
    }

    #[test]
    fn test_rejects_skill_level_above_100() {
        let mut config = config();
        config.portfolio.skills[0].level = Some(150);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::SkillLevelOutOfRange { level: 150, .. })
        ));
    }

    #[test]
    fn test_rejects_blank_name() {
        let mut config = config();
        config.portfolio.name = "  ".to_string();
        assert_eq!(validate_config(&config), Err(ConfigError::EmptyName));
    }

    #[test]
    fn test_duplicate_tabs_are_left_to_the_tab_view() {
        let mut config = config();
        config.tab_view.tabs[1].id = "profile".to_string();
        assert_eq!(validate_config(&config), Ok(()));
    }
}
