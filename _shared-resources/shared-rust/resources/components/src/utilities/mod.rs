// Utilities module
// Helper functions and quality of life utilities

pub mod helpers;
pub mod spring;

pub use helpers::*;
pub use spring::{SpringConfig, TabIndicatorAnimator};
