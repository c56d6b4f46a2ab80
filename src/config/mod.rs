//! Configuration module for method-sql.
//!
//! Handles which translators run, in what order, and the default log level.

mod settings;

pub use settings::{LoggingSettings, Settings, SettingsError, TranslatorKind, TranslatorSettings};
