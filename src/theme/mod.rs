//! Theme system deriving brand colors and lengths from a host configuration.
//!
//! Components receive a [`ThemeContext`] explicitly; a [`ThemeProvider`]
//! rebuilds it when the configuration handed to it changes.

pub use gpui_polaris_theme::*;

mod context;
pub use context::*;

mod kinds;
pub use kinds::*;
