//! Color helpers for the animations.

use ratatui::style::Color;

/// White as RGB channels, for alpha scaling.
pub const WHITE: (u8, u8, u8) = (255, 255, 255);

/// The near-black backdrop the original drew onto.
pub const BACKDROP: Color = Color::Rgb(5, 5, 7);

/// Scale a color by an alpha value. Compositing over the near-black
/// backdrop collapses to per-channel scaling.
pub fn alpha_scale((r, g, b): (u8, u8, u8), alpha: f32) -> Color {
    let a = alpha.clamp(0.0, 1.0);
    Color::Rgb(
        (r as f32 * a) as u8,
        (g as f32 * a) as u8,
        (b as f32 * a) as u8,
    )
}
