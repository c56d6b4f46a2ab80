//! TOML-based configuration for method-sql.
//!
//! Example configuration:
//! ```toml
//! [translators]
//! enabled = ["convert", "date"]  # dispatch order
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Unknown translator: {0}")]
    UnknownTranslator(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Translator chain configuration.
    pub translators: TranslatorSettings,

    /// Logging configuration.
    pub logging: LoggingSettings,
}

/// Built-in translator families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorKind {
    /// Value conversions (`Convert.To*`).
    Convert,
    /// Date-only arithmetic and composition.
    Date,
}

impl FromStr for TranslatorKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "convert" => Ok(TranslatorKind::Convert),
            "date" => Ok(TranslatorKind::Date),
            _ => Err(SettingsError::UnknownTranslator(s.to_string())),
        }
    }
}

/// Translator chain configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TranslatorSettings {
    /// Enabled translators, in dispatch order.
    pub enabled: Vec<String>,
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            enabled: vec!["convert".to_string(), "date".to_string()],
        }
    }
}

impl TranslatorSettings {
    /// Parse the enabled translator names.
    pub fn kinds(&self) -> Result<Vec<TranslatorKind>, SettingsError> {
        self.enabled.iter().map(|name| name.parse()).collect()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default log filter when `RUST_LOG` is unset (e.g., "warn", "debug").
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from TOML text and validate them.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.translators.kinds()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `METHOD_SQL_CONFIG`
    /// 2. `./method-sql.toml`
    /// 3. `~/.config/method-sql/config.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("METHOD_SQL_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("method-sql.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("method-sql").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config file found
        Ok(Settings::default())
    }
}
