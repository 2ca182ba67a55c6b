// Core infrastructure module
// Provides foundational systems that other modules depend on

pub mod error;
pub mod selection;
pub mod tab_descriptor;
pub mod theme_colors;

pub use error::TabViewError;
pub use selection::SelectionState;
pub use tab_descriptor::{validate_tabs, TabDescriptor};
pub use theme_colors::{ColorRole, ThemeColors};
