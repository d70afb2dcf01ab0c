//! Parsed declaration signatures.

use serde::Serialize;

/// The parts of a function or class signature.
///
/// `signature` is the text shown to readers; for classes with a parent list
/// it is trimmed down to the name and parameter group, with the parents kept
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    name: String,
    signature: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<String>,
}

impl Signature {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            parents: None,
        }
    }

    pub fn with_parents(mut self, parents: impl Into<String>) -> Self {
        self.parents = Some(parents.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Raw parent list text, for class signatures that declare one.
    pub fn parents(&self) -> Option<&str> {
        self.parents.as_deref()
    }
}
