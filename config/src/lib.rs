//! Configuration loading for Kivaw.
//!
//! ```toml
//! # ~/.kivaw/config.toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! ```
//!
//! A missing file is not an error. Raw TOML structs stay in this crate; callers
//! get a resolved [`UiOptions`].

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use kivaw_types::ui::UiOptions;

pub const ENV_ASCII: &str = "KIVAW_ASCII";
pub const ENV_HIGH_CONTRAST: &str = "KIVAW_HIGH_CONTRAST";
pub const ENV_REDUCED_MOTION: &str = "KIVAW_REDUCED_MOTION";

#[derive(Debug, Default, Deserialize)]
pub struct KivawConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs and labels.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable the screen fade-in.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl KivawConfig {
    /// Load `~/.kivaw/config.toml`, if there is one.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app.as_ref().map_or_else(UiOptions::default, |app| UiOptions {
            ascii_only: app.ascii_only,
            high_contrast: app.high_contrast,
            reduced_motion: app.reduced_motion,
        })
    }
}

/// UI flags set through `KIVAW_*` environment variables.
#[must_use]
pub fn ui_options_from_env() -> UiOptions {
    ui_options_from(|name| env::var(name).ok())
}

fn ui_options_from(lookup: impl Fn(&str) -> Option<String>) -> UiOptions {
    let flag = |name: &str| lookup(name).is_some_and(|raw| is_truthy(&raw));
    UiOptions {
        ascii_only: flag(ENV_ASCII),
        high_contrast: flag(ENV_HIGH_CONTRAST),
        reduced_motion: flag(ENV_REDUCED_MOTION),
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

/// `~/.kivaw/config.toml`
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    kivaw_dir().map(|dir| dir.join("config.toml"))
}

/// `~/.kivaw`, also the parent of the log directory.
#[must_use]
pub fn kivaw_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kivaw"))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn parse_empty_config() {
        let config: KivawConfig = toml::from_str("").unwrap();
        assert!(config.app.is_none());
        assert_eq!(config.ui_options(), UiOptions::default());
    }

    #[test]
    fn parse_app_config() {
        let toml_str = r"
[app]
ascii_only = true
high_contrast = false
reduced_motion = true
";
        let config: KivawConfig = toml::from_str(toml_str).unwrap();
        let options = config.ui_options();
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(options.reduced_motion);
    }

    #[test]
    fn missing_keys_default_to_false() {
        let config: KivawConfig = toml::from_str("[app]\nhigh_contrast = true\n").unwrap();
        let options = config.ui_options();
        assert!(options.high_contrast);
        assert!(!options.ascii_only);
        assert!(!options.reduced_motion);
    }

    #[test]
    fn load_from_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = KivawConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app]\nascii_only = true\n").unwrap();
        let loaded = KivawConfig::load_from(&path).unwrap().unwrap();
        assert!(loaded.ui_options().ascii_only);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nascii_only = true\n").unwrap();
        let err = KivawConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn load_from_rejects_wrong_types() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app]\nascii_only = \"sometimes\"\n").unwrap();
        assert!(KivawConfig::load_from(&path).is_err());
    }

    #[test]
    fn config_path_lives_under_kivaw_dir() {
        if let (Some(path), Some(dir)) = (config_path(), kivaw_dir()) {
            assert_eq!(path.parent(), Some(dir.as_path()));
            assert!(path.ends_with("config.toml"));
        }
    }

    #[test]
    fn truthy_values_are_accepted() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("TRUE"));
        assert!(is_truthy(" YeS "));
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("off"));
    }

    #[test]
    fn env_flags_resolve_independently() {
        let vars: HashMap<&str, &str> =
            HashMap::from([(ENV_ASCII, "yes"), (ENV_REDUCED_MOTION, "0")]);
        let options = ui_options_from(|name| vars.get(name).map(|v| (*v).to_string()));
        assert!(options.ascii_only);
        assert!(!options.high_contrast);
        assert!(!options.reduced_motion);
    }
}
