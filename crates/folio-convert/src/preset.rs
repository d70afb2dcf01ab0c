//! Built-in converter configurations.
//!
//! Supporting another language takes one more [`Preset`] constant listed in
//! [`BUILTIN_PRESETS`]; no other code changes.

use crate::{converter::Converter, error::ConvertError};

/// A named comment pattern and language identifier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    name: &'static str,
    comment_pattern: &'static str,
    language: &'static str,
    extensions: &'static [&'static str],
}

/// `//` line comments, producing `js` code blocks.
pub const JAVASCRIPT: Preset = Preset::new(
    "javascript",
    r"^\s*//\s?(.*)$",
    "js",
    &["js", "mjs", "cjs"],
);

/// `#` line comments, producing `livescript` code blocks.
pub const LIVESCRIPT: Preset = Preset::new("livescript", r"^\s*#\s?(.*)$", "livescript", &["ls"]);

/// Every preset shipped with the converter.
pub const BUILTIN_PRESETS: &[Preset] = &[JAVASCRIPT, LIVESCRIPT];

impl Preset {
    pub const fn new(
        name: &'static str,
        comment_pattern: &'static str,
        language: &'static str,
        extensions: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            comment_pattern,
            language,
            extensions,
        }
    }

    /// Look up a built-in preset by name.
    pub fn find(name: &str) -> Option<Preset> {
        BUILTIN_PRESETS
            .iter()
            .copied()
            .find(|preset| preset.name == name)
    }

    /// Look up the built-in preset handling files with `extension`.
    pub fn for_extension(extension: &str) -> Option<Preset> {
        BUILTIN_PRESETS
            .iter()
            .copied()
            .find(|preset| preset.extensions.iter().any(|candidate| *candidate == extension))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn comment_pattern(&self) -> &'static str {
        self.comment_pattern
    }

    pub fn language(&self) -> &'static str {
        self.language
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        self.extensions
    }

    /// Build the converter described by this preset.
    ///
    /// # Errors
    ///
    /// Built-in presets always compile; the error exists for presets
    /// declared with [`Preset::new`].
    pub fn converter(&self) -> Result<Converter, ConvertError> {
        Converter::new(self.comment_pattern, self.language)
    }
}
