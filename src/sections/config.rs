//! Configuration loading
//!
//! `defaults/postcraft.default.toml` is embedded into the binary so that docs and runtime
//! behavior stay in sync. Callers layer user files and single-key overrides on top of those
//! defaults via [`Loader`] before deserializing into [`PostcraftConfig`].

use crate::sections::parsing::ParserOptions;
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/postcraft.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PostcraftConfig {
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
}

/// Mirrors [ParserOptions].
#[derive(Debug, Clone, Deserialize)]
pub struct ParsingConfig {
    pub coerce_lists: bool,
    pub fallback_title: String,
    pub untitled_title: String,
    pub bullet_marker: String,
}

impl ParsingConfig {
    pub fn to_options(&self) -> ParserOptions {
        ParserOptions {
            coerce_lists: self.coerce_lists,
            fallback_title: self.fallback_title.clone(),
            untitled_title: self.untitled_title.clone(),
            bullet_marker: self.bullet_marker.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
    pub heading_level: usize,
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

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PostcraftConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PostcraftConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parsing.to_options(), ParserOptions::default());
        assert_eq!(config.output.format, "markdown");
        assert_eq!(config.output.heading_level, 3);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "json")
            .expect("override to apply")
            .set_override("parsing.coerce_lists", false)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, "json");
        assert!(!config.parsing.coerce_lists);
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[parsing]\nfallback_title = \"Summary\"").expect("write config");

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.parsing.fallback_title, "Summary");
        assert_eq!(config.parsing.untitled_title, "Untitled");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/postcraft.toml")
            .build()
            .expect("config to build");
        assert_eq!(config.output.heading_level, 3);
    }

    #[test]
    fn missing_required_file_errors() {
        let result = Loader::new().with_file("/nonexistent/postcraft.toml").build();
        assert!(result.is_err());
    }
}
