//! Configuration for the starfolio portfolio.
//!
//! Settings live in `config.toml` under the platform config directory. Every
//! field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use starfolio_core::{AnimationSpeed, ColorTheme};
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Config file name inside the config directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Errors raised while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixed seed for the starfield; random when absent.
    pub seed: Option<u64>,
    /// Animation speed.
    pub speed: AnimationSpeed,
    /// Accent colour.
    pub theme: ColorTheme,
    /// Draw drifting asteroids.
    pub show_asteroids: bool,
    /// Draw orbit rings around the hero badge.
    pub show_orbits: bool,
    /// Frame interval in milliseconds.
    pub tick_ms: u64,
    /// Year shown in the footer; the local clock's year when absent.
    pub year: Option<i32>,
    /// Portfolio content file; the built-in content when absent.
    pub content: Option<PathBuf>,
    /// Default log level (`trace` to `error`, or `off`), overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            speed: AnimationSpeed::default(),
            theme: ColorTheme::default(),
            show_asteroids: true,
            show_orbits: true,
            tick_ms: 33,
            year: None,
            content: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the platform config directory, falling back to defaults.
    pub fn load() -> ConfigResult<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load from an explicit file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tick_ms == 0 || self.tick_ms > 1000 {
            return Err(ConfigError::Invalid {
                field: "tick_ms",
                reason: format!("{} is outside 1..=1000", self.tick_ms),
            });
        }
        let level = self.log_level.trim();
        if level.is_empty() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: "must not be empty".to_string(),
            });
        }
        if let Err(err) = level.parse::<LevelFilter>() {
            return Err(ConfigError::Invalid {
                field: "log_level",
                reason: format!("{level:?}: {err}"),
            });
        }
        Ok(())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "am2rican5", "starfolio")
}

/// Path of the config file, if the platform has a config directory.
pub fn config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Directory for the log file, if the platform has a data directory.
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.speed, AnimationSpeed::Medium);
        assert!(config.show_asteroids && config.show_orbits);
        assert_eq!(config.tick_ms, 33);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            seed = 42
            speed = "fast"
            theme = "cyan"
            year = 2025
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.speed, AnimationSpeed::Fast);
        assert_eq!(config.theme, ColorTheme::Cyan);
        assert_eq!(config.year, Some(2025));
        assert_eq!(config.tick_ms, 33);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(toml::from_str::<Config>(r#"speed = "warp""#).is_err());
        assert!(toml::from_str::<Config>("stars = 80").is_err());
    }

    #[test]
    fn test_validate_tick() {
        let config = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "tick_ms",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_log_level() {
        for level in ["trace", "debug", "info", "warn", "error", "off", "WARN"] {
            let config = Config {
                log_level: level.to_string(),
                ..Config::default()
            };
            assert!(config.validate().is_ok(), "{level} should be accepted");
        }
        for level in ["loud", "", "starfolio=debug"] {
            let config = Config {
                log_level: level.to_string(),
                ..Config::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::Invalid {
                    field: "log_level",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("starfolio-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        let good = dir.join("good.toml");
        fs::write(&good, "show_asteroids = false\ntick_ms = 50\n").unwrap();
        let config = Config::load_from(&good).unwrap();
        assert!(!config.show_asteroids);
        assert_eq!(config.tick_ms, 50);

        let bad = dir.join("bad.toml");
        fs::write(&bad, "tick_ms = \"soon\"\n").unwrap();
        assert!(matches!(Config::load_from(&bad), Err(ConfigError::Parse { .. })));

        let missing = dir.join("missing.toml");
        assert!(matches!(Config::load_from(&missing), Err(ConfigError::Io { .. })));

        fs::remove_dir_all(&dir).unwrap();
    }
}
