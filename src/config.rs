// Configuration loading module

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tui_components::TabViewConfigYaml;

/// Copy of src/config.yaml baked into the binary, used when no file is found
const EMBEDDED_CONFIG: &str = include_str!("config.yaml");

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    pub tab_view: TabViewConfigYaml,
    pub portfolio: PortfolioContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub bindings: Vec<BindingConfigYaml>,
    pub status_bar: StatusBarConfigYaml,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfigYaml {
    pub key: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatusBarConfigYaml {
    pub default_text: String,
}

/// Everything the portfolio screens display
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioContent {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: Option<String>,
    pub about: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent; skills without a level render as badges only
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub url: String,
}

/// Location of the configuration shipped next to the sources
pub fn default_config_path() -> PathBuf {
    let mut default_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    default_path.push("src");
    default_path.push("config.yaml");
    default_path
}

/// Parse configuration from YAML text
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = serde_yaml::from_str(contents).context("invalid configuration YAML")?;
    Ok(config)
}

/// Load configuration from `config_path`, or from the default location
///
/// An explicit path must exist. Without one, the embedded copy is used if
/// the default file is missing (e.g. the binary was moved).
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let path = match config_path {
        Some(path) => path,
        None => {
            let path = default_config_path();
            if !path.exists() {
                tracing::info!("no config file at {}, using embedded defaults", path.display());
                return parse_config(EMBEDDED_CONFIG);
            }
            path
        }
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = parse_config(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.application.title, "Portfolio");
        assert_eq!(config.tab_view.tabs.len(), 3);
        assert_eq!(config.tab_view.tabs[0].id, "profile");
        assert!(!config.portfolio.projects.is_empty());
        assert!(config.portfolio.links.iter().any(|l| l.title == "GitHub"));
    }

    #[test]
    fn test_optional_portfolio_fields_default() {
        let yaml = r#"
application:
  title: "T"
  bindings: []
  status_bar:
    default_text: "hi"
tab_view:
  tabs:
    - id: profile
      name: Profile
portfolio:
  name: "N"
  role: "R"
  about: "A"
"#;
        let config = parse_config(yaml).unwrap();
        assert!(config.portfolio.tagline.is_none());
        assert!(config.portfolio.skills.is_empty());
        assert!(config.tab_view.active_color.is_none());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let err = load_config(Some(PathBuf::from("/definitely/not/here.yaml"))).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(parse_config("application: [").is_err());
    }
}
