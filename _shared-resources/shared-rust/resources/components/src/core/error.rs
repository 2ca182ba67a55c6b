// Tab View Errors
// Configuration errors detected before a tab view renders

/// Errors raised while setting up a tab view
///
/// All of these are caller configuration mistakes. They are reported
/// synchronously, before anything is drawn, and the tab view refuses to
/// render while one is outstanding.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TabViewError {
    #[error("tab view needs at least one tab")]
    EmptyTabs,

    #[error("tab at position {index} has an empty key")]
    EmptyKey { index: usize },

    #[error("duplicate tab key '{key}'")]
    DuplicateKey { key: String },

    #[error("tab '{key}' has an empty title")]
    EmptyTitle { key: String },

    #[error("invalid color '{value}' for {role}")]
    InvalidColor { role: String, value: String },

    #[error("spring {name} out of range: {value}")]
    InvalidSpring { name: &'static str, value: String },
}
