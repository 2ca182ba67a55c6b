// GUI Elements module
// Visual components that render UI elements

pub mod tab_view;

pub use tab_view::*;
