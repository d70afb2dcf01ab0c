//! Folio - A literate documentation toolchain.
//!
//! Folio turns commented source files into documentation markup and
//! evaluates the markup's tag vocabulary into a typed document tree.

pub mod config;

mod error;

pub use folio_convert as convert;
pub use folio_core::{meta, node, signature, value};
pub use folio_eval::{Environment, ErrorCode, Invocation, Tag, Violation};

pub use error::FolioError;

use std::path::Path;

use log::{debug, info, trace};

use folio_convert::Converter;

use config::{AppConfig, LanguageConfig};

/// Entry point for converting sources and evaluating markup tags.
///
/// # Examples
///
/// ```rust
/// use folio::{Toolchain, config::AppConfig};
///
/// let toolchain = Toolchain::new(AppConfig::default());
///
/// let markup = toolchain
///     .convert("javascript", "// hello\n// world\n")
///     .expect("Failed to convert");
/// assert_eq!(markup, "hello\nworld");
/// ```
#[derive(Debug, Default)]
pub struct Toolchain {
    config: AppConfig,
}

impl Toolchain {
    /// Create a new toolchain with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including extra languages
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this toolchain was built with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve a language by name.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownLanguage`] when neither the configuration
    /// nor the built-in presets know `name`.
    pub fn language(&self, name: &str) -> Result<LanguageConfig, FolioError> {
        self.config
            .language(name)
            .ok_or_else(|| FolioError::UnknownLanguage(name.to_string()))
    }

    /// Build the converter for a language selected by name.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownLanguage`] for an unknown name, or
    /// [`FolioError::Convert`] when the configured comment pattern is unusable.
    pub fn converter(&self, name: &str) -> Result<Converter, FolioError> {
        let language = self.language(name)?;
        debug!(
            name = language.name(),
            pattern = language.comment_pattern(),
            language = language.language();
            "Building converter"
        );
        Ok(language.converter()?)
    }

    /// Build the converter for a file, selected by its extension.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::UnknownLanguage`] when the path has no extension
    /// or no language handles it.
    pub fn converter_for_path(&self, path: impl AsRef<Path>) -> Result<Converter, FolioError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();

        let language = self
            .config
            .language_for_extension(extension)
            .ok_or_else(|| FolioError::UnknownLanguage(path.display().to_string()))?;
        debug!(extension, name = language.name(); "Language selected by extension");

        Ok(language.converter()?)
    }

    /// Convert source text of the named language into markup.
    ///
    /// # Errors
    ///
    /// Returns `FolioError` when the language cannot be resolved or its
    /// converter cannot be built. Conversion itself does not fail.
    pub fn convert(&self, language: &str, source: &str) -> Result<String, FolioError> {
        info!(language; "Converting source");

        let markup = self.converter(language)?.convert(source);

        trace!(markup; "Converted markup");
        Ok(markup)
    }

    /// The tag evaluation environment.
    pub fn environment(&self) -> Environment {
        Environment::new()
    }
}
