//! Accent color themes.

use ratatui::style::Color;

/// Accent color used for comets, accent stars, and the scan HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    /// The original azure accent.
    #[default]
    Azure,
    Ember,
    Viridian,
    Violet,
}

impl ColorTheme {
    /// Accent color as RGB channels, for alpha scaling.
    pub fn accent_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Azure => (0, 120, 212),
            Self::Ember => (224, 108, 40),
            Self::Viridian => (46, 204, 113),
            Self::Violet => (155, 89, 182),
        }
    }

    /// Accent color at full brightness.
    pub fn color(self) -> Color {
        let (r, g, b) = self.accent_rgb();
        Color::Rgb(r, g, b)
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            Self::Azure => Self::Ember,
            Self::Ember => Self::Viridian,
            Self::Viridian => Self::Violet,
            Self::Violet => Self::Azure,
        }
    }

    /// Parse a theme from its config name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "azure" => Some(Self::Azure),
            "ember" => Some(Self::Ember),
            "viridian" => Some(Self::Viridian),
            "violet" => Some(Self::Violet),
            _ => None,
        }
    }

    /// Config name of this theme.
    pub fn name(self) -> &'static str {
        match self {
            Self::Azure => "azure",
            Self::Ember => "ember",
            Self::Viridian => "viridian",
            Self::Violet => "violet",
        }
    }
}
