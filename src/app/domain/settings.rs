use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::platform::detect_system_dark_mode;

/// Longest section-jump animation accepted from the config file.
pub const MAX_SCROLL_DURATION_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub enum ThemeMode {
    Light,
    Dark,
    SystemDefault,
}

/// Where the active configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    Fallback(PathBuf, AppError),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!(path = %path.display(), "loaded config"),
            ConfigSource::Defaults => tracing::debug!("no config file, using defaults"),
            ConfigSource::Fallback(path, e) => {
                tracing::warn!(path = %path.display(), "failed to load config: {}. Using defaults.", e)
            }
        }
    }
}

/// Read-only viewer configuration. Every field falls back to its default
/// when missing from the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_theme_mode")]
    pub theme_mode: ThemeMode,

    #[serde(default = "default_window_width")]
    pub window_width: i32,

    #[serde(default = "default_window_height")]
    pub window_height: i32,

    /// Animate jumps to a section instead of snapping.
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,

    #[serde(default = "default_scroll_duration_ms")]
    pub scroll_duration_ms: u64,

    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::SystemDefault
}

fn default_window_width() -> i32 {
    1024
}

fn default_window_height() -> i32 {
    768
}

fn default_smooth_scroll() -> bool {
    true
}

fn default_scroll_duration_ms() -> u64 {
    400
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            smooth_scroll: default_smooth_scroll(),
            scroll_duration_ms: default_scroll_duration_ms(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load the config file, or defaults if it is missing or unreadable.
    /// The returned source is logged by the caller once logging is set up,
    /// since the log level itself comes from this file.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_or_default(&Self::config_path())
    }

    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        match Self::load_from(path) {
            Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
            Err(AppError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                (Self::default(), ConfigSource::Defaults)
            }
            Err(e) => (Self::default(), ConfigSource::Fallback(path.to_path_buf(), e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: AppConfig = toml::from_str(contents)?;
        config.scroll_duration_ms = config.scroll_duration_ms.min(MAX_SCROLL_DURATION_MS);
        config.window_width = config.window_width.max(320);
        config.window_height = config.window_height.max(240);
        Ok(config)
    }

    /// Resolve the theme mode to a concrete dark/light choice.
    pub fn is_dark(&self) -> bool {
        match self.theme_mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::SystemDefault => detect_system_dark_mode(),
        }
    }

    /// Animation length for section jumps; zero means snap.
    pub fn scroll_duration_secs(&self) -> f64 {
        if self.smooth_scroll {
            self.scroll_duration_ms as f64 / 1000.0
        } else {
            0.0
        }
    }

    /// Config file path (cross-platform)
    pub fn config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("portfolio");
        path.push("config.toml");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme_mode, ThemeMode::SystemDefault);
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 768);
        assert!(config.smooth_scroll);
        assert_eq!(config.scroll_duration_ms, 400);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(AppConfig::parse("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config = AppConfig::parse("theme_mode = \"Dark\"\nsmooth_scroll = false\n").unwrap();
        assert_eq!(config.theme_mode, ThemeMode::Dark);
        assert!(!config.smooth_scroll);
        assert_eq!(config.window_width, 1024);
        assert!(config.is_dark());
        assert_eq!(config.scroll_duration_secs(), 0.0);
    }

    #[test]
    fn test_values_are_clamped() {
        let config =
            AppConfig::parse("scroll_duration_ms = 99999\nwindow_width = 10\nwindow_height = 10\n").unwrap();
        assert_eq!(config.scroll_duration_ms, MAX_SCROLL_DURATION_MS);
        assert_eq!(config.window_width, 320);
        assert_eq!(config.window_height, 240);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::parse("theme_mode = Purple").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "theme_mode = \"Light\"").unwrap();
        writeln!(file, "scroll_duration_ms = 250").unwrap();
        let config = AppConfig::load_from(file.path()).unwrap();
        assert!(!config.is_dark());
        assert_eq!(config.scroll_duration_secs(), 0.25);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_load_or_default_sources() {
        let dir = tempfile::tempdir().unwrap();

        let (config, source) = AppConfig::load_or_default(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Defaults));

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "window_width = \"wide\"").unwrap();
        let (config, source) = AppConfig::load_or_default(&bad);
        assert_eq!(config, AppConfig::default());
        assert!(matches!(source, ConfigSource::Fallback(_, AppError::Config(_))));

        let good = dir.path().join("good.toml");
        std::fs::write(&good, "window_width = 900").unwrap();
        let (config, source) = AppConfig::load_or_default(&good);
        assert_eq!(config.window_width, 900);
        assert!(matches!(source, ConfigSource::File(p) if p == good));
    }

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = AppConfig::config_path();
        assert!(path.ends_with("portfolio/config.toml"));
    }
}
