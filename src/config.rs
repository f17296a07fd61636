use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::i18n::Language;
use crate::tui::events::View;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Initial dashboard state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Language shown at startup (`en`, `el`, `zh`).
    pub language: Language,
    /// View selected at startup.
    pub start_view: View,
    /// Fixed RNG seed for reproducible scenarios. Entropy when unset.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file at the path; defaults in use.
    Missing(PathBuf),
    /// The file could not be read or parsed; defaults in use.
    Invalid(ConfigError),
}

impl AppConfig {
    /// Load `path`, falling back to defaults when it is missing or invalid.
    ///
    /// Runs before logging exists, so the outcome is returned for the caller
    /// to log rather than logged here.
    pub fn load_or_default(path: &Path) -> (Self, ConfigSource) {
        match Self::load_from(path) {
            Ok(Some(config)) => (config, ConfigSource::File(path.to_path_buf())),
            Ok(None) => (Self::default(), ConfigSource::Missing(path.to_path_buf())),
            Err(e) => (Self::default(), ConfigSource::Invalid(e)),
        }
    }

    /// Strict load: `Ok(None)` when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        toml::from_str(&contents)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("hospitality-ai").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tui.tick_rate_ms, 50);
        assert!(!config.tui.mouse_enabled);
        assert_eq!(config.dashboard.language, Language::English);
        assert_eq!(config.dashboard.start_view, View::GuestExperience);
        assert!(config.dashboard.seed.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[dashboard]\nlanguage = \"el\"\nstart_view = \"staff_performance\"\nseed = 42\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap().unwrap();
        assert_eq!(config.dashboard.language, Language::Greek);
        assert_eq!(config.dashboard.start_view, View::StaffPerformance);
        assert_eq!(config.dashboard.seed, Some(42));
        // Untouched sections keep defaults
        assert_eq!(config.tui.tick_rate_ms, 50);
    }

    #[test]
    fn test_load_from_invalid_language() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[dashboard]\nlanguage = \"fr\"\n").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_or_default_falls_back_on_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui\ntick_rate_ms = ").unwrap();

        let (config, source) = AppConfig::load_or_default(&path);
        assert!(matches!(source, ConfigSource::Invalid(ConfigError::Parse { .. })));
        assert_eq!(config.tui.tick_rate_ms, 50);

        let missing = dir.path().join("absent.toml");
        let (_, source) = AppConfig::load_or_default(&missing);
        assert!(matches!(source, ConfigSource::Missing(p) if p == missing));
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tui]\ntick_rate_ms = 200\n").unwrap();

        let (config, source) = AppConfig::load_or_default(&path);
        assert!(matches!(source, ConfigSource::File(_)));
        assert_eq!(config.tui.tick_rate_ms, 200);
    }

    #[test]
    fn test_tick_rate_never_zero() {
        let mut config = AppConfig::default();
        config.tui.tick_rate_ms = 0;
        assert_eq!(config.tick_rate(), std::time::Duration::from_millis(1));
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.dashboard.language = Language::Chinese;
        config.dashboard.seed = Some(7);
        let serialized = toml::to_string(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.dashboard.language, Language::Chinese);
        assert_eq!(deserialized.dashboard.seed, Some(7));
        assert_eq!(deserialized.tui.tick_rate_ms, config.tui.tick_rate_ms);
    }
}
