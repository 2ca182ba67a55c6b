// Managers module
// Provides OOP-style manager wrappers for TUI components

pub mod tab_view;

pub use tab_view::TabViewManager;

// Re-export YAML configuration types from tab_view module
pub use tab_view::{
    TabViewConfigYaml,
    TabConfigYaml,
    SpringConfigYaml,
    convert_tab_view_options,
    convert_spring_config,
};
