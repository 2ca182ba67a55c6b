// Shared TUI components library
// Reusable components for all TUI applications

// Core infrastructure
pub mod core;
// GUI elements (visual components)
pub mod elements;
// OOP-style manager wrappers
pub mod managers;
// Utilities and helpers
pub mod utilities;

// Re-export commonly used items
// Note: ambiguous_glob_reexports warning is intentional - tab_view exists in both elements and managers
// but refers to different types (TabView widget vs TabViewManager), so disambiguation is expected
#[allow(ambiguous_glob_reexports)]
pub use crate::core::*;
#[allow(ambiguous_glob_reexports)]
pub use elements::*;
#[allow(ambiguous_glob_reexports)]
pub use managers::*;
pub use utilities::*;
