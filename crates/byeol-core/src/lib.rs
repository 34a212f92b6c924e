//! Core types for the byeol starfield screensaver.
//!
//! Shared between the animation crate, the config crate, and the binary:
//! the logical-pixel viewport model and the accent color themes.

mod theme;
mod viewport;

pub use theme::ColorTheme;
pub use viewport::{CELL_HEIGHT_PX, CELL_WIDTH_PX, Viewport};
