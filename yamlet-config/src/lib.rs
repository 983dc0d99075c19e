//! Shared configuration loader for the yamlet toolchain.
//!
//! `defaults/yamlet.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`YamletConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/yamlet.default.toml");

/// Top-level configuration consumed by yamlet applications.
#[derive(Debug, Clone, Deserialize)]
pub struct YamletConfig {
    pub convert: ConvertConfig,
    pub inspect: InspectConfig,
    pub logging: LoggingConfig,
}

/// Output selection and format-specific conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub default_format: String,
    pub json: JsonConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JsonConfig {
    pub pretty: bool,
}

/// Controls tree inspection output.
#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub treeviz: TreevizConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TreevizConfig {
    pub max_label_chars: usize,
    pub show_attributes: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// A tracing-subscriber filter directive, e.g. `yamlet=debug`
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<YamletConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<YamletConfig, ConfigError> {
    Loader::new().build()
}
