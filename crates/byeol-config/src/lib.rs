//! Configuration loading for the byeol screensaver.
//!
//! Settings live in a TOML file under the platform config directory
//! (e.g. `~/.config/byeol/config.toml` on Linux). A missing file yields
//! the defaults; a malformed file is a startup error.

use std::path::PathBuf;
use std::time::Duration;

use byeol_core::ColorTheme;
use color_eyre::eyre::WrapErr;
use directories::ProjectDirs;
use serde::Deserialize;

/// Default frames per second.
const DEFAULT_FPS: u32 = 60;

/// Highest fps the frame driver will attempt.
const MAX_FPS: u32 = 120;

/// User configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hold the sky still: no comets, no meteors, no twinkle.
    pub reduce_motion: bool,
    /// Target frames per second, clamped to [1, 120].
    pub fps: u32,
    /// Accent theme name; unknown names fall back to the default theme.
    pub theme: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reduce_motion: false,
            fps: DEFAULT_FPS,
            theme: ColorTheme::default().name().to_string(),
        }
    }
}

impl Config {
    /// Load the config from the platform config directory, falling back
    /// to defaults when no file exists.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => {
                let raw = std::fs::read_to_string(&path)
                    .wrap_err_with(|| format!("reading {}", path.display()))?;
                Self::from_toml(&raw)
            }
            _ => Ok(Self::default()),
        }
    }

    /// Parse a config from TOML text. Unset keys take their defaults.
    pub fn from_toml(raw: &str) -> color_eyre::Result<Self> {
        toml::from_str(raw).wrap_err("parsing config")
    }

    /// Path to the config file, if a config directory can be resolved.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "byeol").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Resolved accent theme.
    pub fn theme(&self) -> ColorTheme {
        ColorTheme::from_name(&self.theme).unwrap_or_default()
    }

    /// Frame interval for the driver loop.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.clamp(1, MAX_FPS)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.reduce_motion);
        assert_eq!(config.fps, 60);
        assert_eq!(config.theme(), ColorTheme::Azure);
        assert_eq!(config.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_parse_full() {
        let config = Config::from_toml(
            "reduce_motion = true\nfps = 30\ntheme = \"viridian\"\n",
        )
        .unwrap();
        assert!(config.reduce_motion);
        assert_eq!(config.fps, 30);
        assert_eq!(config.theme(), ColorTheme::Viridian);
        assert_eq!(config.frame_interval(), Duration::from_millis(33));
    }

    #[test]
    fn test_partial_file_takes_defaults() {
        let config = Config::from_toml("fps = 24\n").unwrap();
        assert!(!config.reduce_motion);
        assert_eq!(config.fps, 24);
        assert_eq!(config.theme(), ColorTheme::Azure);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config::from_toml("theme = \"plaid\"\n").unwrap();
        assert_eq!(config.theme(), ColorTheme::Azure);
    }

    #[test]
    fn test_fps_clamped() {
        let config = Config::from_toml("fps = 0\n").unwrap();
        assert_eq!(config.frame_interval(), Duration::from_millis(1000));
        let config = Config::from_toml("fps = 500\n").unwrap();
        assert_eq!(config.frame_interval(), Duration::from_millis(8));
    }

    #[test]
    fn test_malformed_file_errors() {
        assert!(Config::from_toml("fps = \"fast\"\n").is_err());
    }
}
