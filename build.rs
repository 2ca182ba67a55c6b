// Build script - reads config.yaml at compile time and generates defaults
// This allows changing defaults during development without editing source code

use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Tell Cargo to rerun if config.yaml changes
    println!("cargo:rerun-if-changed=src/config.yaml");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest_path = Path::new(&out_dir).join("compiled_config.rs");

    // Try to read config.yaml from src/, fall back to hardcoded defaults if not found
    let config = if Path::new("src/config.yaml").exists() {
        let content = fs::read_to_string("src/config.yaml")
            .expect("Failed to read src/config.yaml");
        parse_config(&content)
    } else {
        CompiledConfig::default()
    };

    // Generate Rust code with the compiled-in values
    let generated = format!(
        r#"// Auto-generated from config.yaml at compile time
// Do not edit - modify config.yaml and rebuild instead

pub const THEME: &str = "{theme}";
pub const MOUSE_ENABLED: bool = {mouse_enabled};
pub const FRAME_INTERVAL_MS: u64 = {frame_interval_ms};
pub const IDLE_POLL_MS: u64 = {idle_poll_ms};

pub const SPRING_DAMPING: f32 = {damping:?};
pub const SPRING_STIFFNESS: f32 = {stiffness:?};
pub const SPRING_MASS: f32 = {mass:?};
"#,
        theme = config.theme,
        mouse_enabled = config.mouse_enabled,
        frame_interval_ms = config.frame_interval_ms,
        idle_poll_ms = config.idle_poll_ms,
        damping = config.damping,
        stiffness = config.stiffness,
        mass = config.mass,
    );

    fs::write(&dest_path, generated).expect("Failed to write compiled config");
}

struct CompiledConfig {
    theme: String,
    mouse_enabled: bool,
    frame_interval_ms: u64,
    idle_poll_ms: u64,
    damping: f32,
    stiffness: f32,
    mass: f32,
}

impl Default for CompiledConfig {
    fn default() -> Self {
        Self {
            theme: "classic".to_string(),
            mouse_enabled: true,
            frame_interval_ms: 16,
            idle_poll_ms: 250,
            damping: 20.0,
            stiffness: 90.0,
            mass: 1.0,
        }
    }
}

#[derive(PartialEq)]
enum Section {
    Ui,
    Animation,
    Other,
}

fn parse_config(content: &str) -> CompiledConfig {
    let mut config = CompiledConfig::default();

    // Simple YAML parsing (avoiding external dependencies in build script)
    let mut section = Section::Other;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Top-level keys switch sections
        if !line.starts_with(' ') && !line.starts_with('\t') {
            section = match trimmed {
                "ui:" => Section::Ui,
                "animation:" => Section::Animation,
                _ => Section::Other,
            };
            continue;
        }

        let Some((key, value)) = parse_kv(trimmed) else {
            continue;
        };

        match section {
            Section::Ui => match key {
                "theme" => config.theme = value.trim_matches('"').to_string(),
                "mouse_enabled" => config.mouse_enabled = parse_bool(value),
                "frame_interval_ms" => config.frame_interval_ms = value.parse().unwrap_or(16),
                "idle_poll_ms" => config.idle_poll_ms = value.parse().unwrap_or(250),
                _ => {}
            },
            Section::Animation => match key {
                "damping" => config.damping = value.parse().unwrap_or(20.0),
                "stiffness" => config.stiffness = value.parse().unwrap_or(90.0),
                "mass" => config.mass = value.parse().unwrap_or(1.0),
                _ => {}
            },
            Section::Other => {}
        }
    }

    config
}

fn parse_kv(line: &str) -> Option<(&str, &str)> {
    let colon_pos = line.find(':')?;
    let key = line[..colon_pos].trim();
    let mut value = line[colon_pos + 1..].trim();

    // Remove inline comments (a # preceded by a space)
    if let Some(comment_pos) = value.find(" #") {
        value = value[..comment_pos].trim();
    }

    // Skip if value is empty (nested section header)
    if value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_lowercase().as_str(), "true" | "yes" | "1")
}
