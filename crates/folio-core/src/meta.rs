//! Metadata markers.
//!
//! A [`MetaEntry`] annotates the declaration it appears in. The evaluator
//! emits entries as [`Node::Meta`](crate::node::Node::Meta) children; the
//! document assembler later moves them into the declaration's metadata map
//! under [`MetaEntry::key`].

use std::{borrow::Cow, fmt, str::FromStr};

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// A key/value annotation with a typed payload per key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaEntry {
    Private,
    Public,
    Name(String),
    Type(String),
    Portability(String),
    Synopsis(String),
    Platform(String),
    Returns(String),
    Signature(String),
    Stability(Stability),
    Throws { name: Value, description: String },
    /// Arbitrary annotation from the generic `meta` tag.
    Custom { key: Value, value: Value },
}

impl MetaEntry {
    /// The metadata key this entry is stored under.
    ///
    /// Custom entries with a non-string key use the key's display form.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            MetaEntry::Private => Cow::Borrowed("private"),
            MetaEntry::Public => Cow::Borrowed("public"),
            MetaEntry::Name(_) => Cow::Borrowed("name"),
            MetaEntry::Type(_) => Cow::Borrowed("type"),
            MetaEntry::Portability(_) => Cow::Borrowed("portability"),
            MetaEntry::Synopsis(_) => Cow::Borrowed("synopsis"),
            MetaEntry::Platform(_) => Cow::Borrowed("platform"),
            MetaEntry::Returns(_) => Cow::Borrowed("returns"),
            MetaEntry::Signature(_) => Cow::Borrowed("signature"),
            MetaEntry::Stability(_) => Cow::Borrowed("stability"),
            MetaEntry::Throws { .. } => Cow::Borrowed("throws"),
            MetaEntry::Custom { key, .. } => match key {
                Value::String(s) | Value::Symbol(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            },
        }
    }

    /// The value stored under [`MetaEntry::key`].
    ///
    /// Visibility markers store `true`, stability its lowercase name and
    /// `throws` a record of `description` and `name`.
    pub fn value(&self) -> Value {
        match self {
            MetaEntry::Private | MetaEntry::Public => Value::Bool(true),
            MetaEntry::Name(text)
            | MetaEntry::Type(text)
            | MetaEntry::Portability(text)
            | MetaEntry::Synopsis(text)
            | MetaEntry::Platform(text)
            | MetaEntry::Returns(text)
            | MetaEntry::Signature(text) => Value::from(text.as_str()),
            MetaEntry::Stability(level) => Value::from(level.as_str()),
            MetaEntry::Throws { name, description } => Value::Record(IndexMap::from([
                ("description".to_string(), Value::from(description.as_str())),
                ("name".to_string(), name.clone()),
            ])),
            MetaEntry::Custom { value, .. } => value.clone(),
        }
    }
}

/// How settled an API is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Deprecated,
    Experimental,
    Unstable,
    Stable,
    Frozen,
    Locked,
}

impl Stability {
    /// All stability levels, from least to most settled.
    pub const ALL: [Stability; 6] = [
        Stability::Deprecated,
        Stability::Experimental,
        Stability::Unstable,
        Stability::Stable,
        Stability::Frozen,
        Stability::Locked,
    ];

    /// Returns the lowercase name of this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stability::Deprecated => "deprecated",
            Stability::Experimental => "experimental",
            Stability::Unstable => "unstable",
            Stability::Stable => "stable",
            Stability::Frozen => "frozen",
            Stability::Locked => "locked",
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = String;

    /// Parses a stability level, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "invalid stability `{s}`, valid values: deprecated, experimental, unstable, stable, frozen, locked"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stability_from_str_ignores_case() {
        assert_eq!("stable".parse::<Stability>(), Ok(Stability::Stable));
        assert_eq!("Stable".parse::<Stability>(), Ok(Stability::Stable));
        assert_eq!("STABLE".parse::<Stability>(), Ok(Stability::Stable));
        assert_eq!("Frozen".parse::<Stability>(), Ok(Stability::Frozen));
    }

    #[test]
    fn test_stability_rejects_unknown_levels() {
        let err = "alpha".parse::<Stability>().unwrap_err();
        assert!(err.contains("alpha"));
        assert!("".parse::<Stability>().is_err());
    }

    #[test]
    fn test_meta_keys() {
        assert_eq!(MetaEntry::Private.key(), "private");
        assert_eq!(MetaEntry::Stability(Stability::Locked).key(), "stability");
        assert_eq!(
            MetaEntry::Throws {
                name: Value::from("IOError"),
                description: String::new(),
            }
            .key(),
            "throws"
        );
    }

    #[test]
    fn test_meta_values() {
        assert_eq!(MetaEntry::Private.value(), Value::Bool(true));
        assert_eq!(MetaEntry::Public.value(), Value::Bool(true));
        assert_eq!(
            MetaEntry::Stability(Stability::Frozen).value(),
            Value::from("frozen")
        );
        assert_eq!(
            MetaEntry::Returns("number".to_string()).value(),
            Value::from("number")
        );

        let throws = MetaEntry::Throws {
            name: Value::Symbol("TypeError".to_string()),
            description: "when x is not a number".to_string(),
        };
        let Value::Record(fields) = throws.value() else {
            panic!("expected a record");
        };
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["description", "name"]);
        assert_eq!(fields["name"], Value::Symbol("TypeError".to_string()));
        assert_eq!(fields["description"], Value::from("when x is not a number"));

        let custom = MetaEntry::Custom {
            key: Value::from("since"),
            value: Value::from(1.2),
        };
        assert_eq!(custom.value(), Value::from(1.2));
    }

    #[test]
    fn test_custom_meta_key() {
        let entry = MetaEntry::Custom {
            key: Value::from("since"),
            value: Value::from("1.2"),
        };
        assert_eq!(entry.key(), "since");

        let entry = MetaEntry::Custom {
            key: Value::from(3.0),
            value: Value::from(true),
        };
        assert_eq!(entry.key(), "3");
    }
}
