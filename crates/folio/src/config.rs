//! Configuration types for the Folio toolchain.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`LanguageConfig`] - One source language the converter understands.
//!
//! Configured languages extend the built-in presets. An entry whose name
//! matches a built-in preset replaces it.
//!
//! # Example
//!
//! ```
//! # use folio::config::AppConfig;
//! let config = AppConfig::default();
//!
//! let language = config.language("javascript").unwrap();
//! assert_eq!(language.language(), "js");
//! ```

use serde::Deserialize;

use folio_convert::{BUILTIN_PRESETS, Converter, ConvertError, Preset};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Additional or overriding source languages.
    #[serde(default)]
    languages: Vec<LanguageConfig>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given language entries.
    pub fn new(languages: Vec<LanguageConfig>) -> Self {
        Self { languages }
    }

    /// Returns the configured language entries, without built-in presets.
    pub fn languages(&self) -> &[LanguageConfig] {
        &self.languages
    }

    /// Look up a language by name.
    ///
    /// Configured entries take precedence over built-in presets.
    pub fn language(&self, name: &str) -> Option<LanguageConfig> {
        self.languages
            .iter()
            .find(|language| language.name == name)
            .cloned()
            .or_else(|| Preset::find(name).map(LanguageConfig::from))
    }

    /// Look up the language handling files with `extension`.
    ///
    /// Configured entries take precedence over built-in presets. A built-in
    /// preset that was overridden by name is consulted through its
    /// replacement only.
    pub fn language_for_extension(&self, extension: &str) -> Option<LanguageConfig> {
        self.languages
            .iter()
            .find(|language| language.handles(extension))
            .cloned()
            .or_else(|| {
                BUILTIN_PRESETS
                    .iter()
                    .filter(|preset| !self.overrides(preset.name()))
                    .find(|preset| preset.extensions().iter().any(|e| *e == extension))
                    .copied()
                    .map(LanguageConfig::from)
            })
    }

    fn overrides(&self, name: &str) -> bool {
        self.languages.iter().any(|language| language.name == name)
    }
}

/// A source language: the pattern recognising documentation comments and
/// the language identifier attached to code blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageConfig {
    /// Name used to select the language, e.g. `javascript`.
    name: String,

    /// Regular expression with exactly one capture group holding the
    /// comment body.
    comment_pattern: String,

    /// Identifier written into `@code` blocks, e.g. `js`.
    language: String,

    /// File extensions, without the leading dot.
    #[serde(default)]
    extensions: Vec<String>,
}

impl LanguageConfig {
    /// Creates a new [`LanguageConfig`] without file extensions.
    pub fn new(
        name: impl Into<String>,
        comment_pattern: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            comment_pattern: comment_pattern.into(),
            language: language.into(),
            extensions: Vec::new(),
        }
    }

    /// Sets the file extensions handled by this language.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment_pattern(&self) -> &str {
        &self.comment_pattern
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether files with `extension` belong to this language.
    pub fn handles(&self, extension: &str) -> bool {
        self.extensions.iter().any(|candidate| candidate == extension)
    }

    /// Compile the converter for this language.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if the comment pattern is not a valid
    /// regular expression with exactly one capture group.
    pub fn converter(&self) -> Result<Converter, ConvertError> {
        Converter::new(&self.comment_pattern, self.language.as_str())
    }
}

impl From<Preset> for LanguageConfig {
    fn from(preset: Preset) -> Self {
        LanguageConfig::new(preset.name(), preset.comment_pattern(), preset.language())
            .with_extensions(preset.extensions().iter().copied())
    }
}
