//! Argument binding for tag invocations.
//!
//! An [`Invocation`] is the raw call site handed over by the markup
//! evaluator: positional values plus keyword values. [`Arguments::bind`]
//! matches it against a tag's declared parameters. Keywords bind by name
//! first, positional values then fill the remaining parameters in order.

use indexmap::IndexMap;

use folio_core::Value;

use crate::error::{ErrorCode, Result, Violation};

/// Arguments supplied to a single tag invocation, before binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Invocation {
    positional: Vec<Value>,
    keywords: Vec<(String, Value)>,
}

impl Invocation {
    /// Create an invocation without arguments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument.
    pub fn with_arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a keyword argument.
    ///
    /// Repeated keywords are kept so binding can reject them.
    pub fn with_keyword(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    /// Get the positional arguments.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Get the keyword arguments, in the order given.
    pub fn keywords(&self) -> &[(String, Value)] {
        &self.keywords
    }
}

/// Arguments bound to declared parameter names.
///
/// Handlers take values out by name. Taking moves the value, so every
/// argument is consumed at most once.
#[derive(Debug, Default)]
pub struct Arguments {
    bound: IndexMap<&'static str, Value>,
}

impl Arguments {
    /// Bind an invocation to the ordered parameter names of a tag.
    ///
    /// # Errors
    ///
    /// - [`ErrorCode::E102`] for a keyword that names no parameter, or more
    ///   positional values than there are unbound parameters
    /// - [`ErrorCode::E103`] for a parameter bound twice by keyword
    pub fn bind(parameters: &'static [&'static str], invocation: Invocation) -> Result<Self> {
        let mut bound = IndexMap::with_capacity(parameters.len());

        for (name, value) in invocation.keywords {
            let Some(parameter) = parameters.iter().copied().find(|p| *p == name) else {
                return Err(Violation::new(
                    ErrorCode::E102,
                    format!("unexpected keyword argument `{name}`"),
                )
                .with_help(expected_parameters(parameters)));
            };
            if bound.insert(parameter, value).is_some() {
                return Err(Violation::new(
                    ErrorCode::E103,
                    format!("argument `{parameter}` is given more than once"),
                ));
            }
        }

        let mut free = parameters.iter().filter(|p| !bound.contains_key(*p));
        let mut positional = Vec::with_capacity(invocation.positional.len());
        for value in invocation.positional {
            match free.next() {
                Some(parameter) => positional.push((*parameter, value)),
                None => {
                    return Err(Violation::new(
                        ErrorCode::E102,
                        format!(
                            "too many positional arguments, at most {} expected",
                            parameters.len()
                        ),
                    )
                    .with_help(expected_parameters(parameters)));
                }
            }
        }
        bound.extend(positional);

        Ok(Self { bound })
    }

    /// Whether the parameter was bound.
    pub fn contains(&self, name: &str) -> bool {
        self.bound.contains_key(name)
    }

    /// Take an optional argument of any shape.
    pub fn take_optional(&mut self, name: &str) -> Option<Value> {
        self.bound.shift_remove(name)
    }

    /// Take a required argument of any shape.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::E101`] when the parameter was not bound.
    pub fn take(&mut self, name: &str) -> Result<Value> {
        self.take_optional(name).ok_or_else(|| {
            Violation::new(ErrorCode::E101, format!("missing argument `{name}`"))
        })
    }

    /// Take a required argument and narrow it with a `Value` accessor.
    fn take_as<T>(
        &mut self,
        name: &str,
        narrow: impl FnOnce(&Value) -> std::result::Result<T, &'static str>,
    ) -> Result<T> {
        let value = self.take(name)?;
        narrow(&value).map_err(|reason| mismatch(name, reason, &value))
    }

    /// Take an optional argument, narrowing it when present.
    fn take_optional_as<T>(
        &mut self,
        name: &str,
        narrow: impl FnOnce(&Value) -> std::result::Result<T, &'static str>,
    ) -> Result<Option<T>> {
        self.take_optional(name)
            .map(|value| narrow(&value).map_err(|reason| mismatch(name, reason, &value)))
            .transpose()
    }

    /// Take a required string argument.
    pub fn take_string(&mut self, name: &str) -> Result<String> {
        self.take_as(name, |value| value.as_str().map(str::to_owned))
    }

    /// Take an optional string argument, falling back to `default`.
    pub fn take_string_or(&mut self, name: &str, default: &str) -> Result<String> {
        let value = self.take_optional_as(name, |value| value.as_str().map(str::to_owned))?;
        Ok(value.unwrap_or_else(|| default.to_string()))
    }

    /// Take an optional boolean argument, falling back to `default`.
    pub fn take_bool_or(&mut self, name: &str, default: bool) -> Result<bool> {
        Ok(self.take_optional_as(name, Value::as_bool)?.unwrap_or(default))
    }

    /// Take a required number argument.
    pub fn take_number(&mut self, name: &str) -> Result<f64> {
        self.take_as(name, Value::as_number)
    }

    /// Take a required sequence argument.
    pub fn take_list(&mut self, name: &str) -> Result<Vec<Value>> {
        self.take_as(name, |value| value.as_list().map(<[Value]>::to_vec))
    }

    /// Take a required symbol argument, returning its label.
    pub fn take_symbol(&mut self, name: &str) -> Result<String> {
        self.take_as(name, |value| value.as_symbol().map(str::to_owned))
    }
}

/// Build the E200 violation for an argument of the wrong shape.
///
/// `reason` is the accessor's message, e.g. "expected number value".
fn mismatch(name: &str, reason: &str, found: &Value) -> Violation {
    Violation::new(
        ErrorCode::E200,
        format!("argument `{name}` {reason}, found {}", found.type_name()),
    )
}

fn expected_parameters(parameters: &[&str]) -> String {
    if parameters.is_empty() {
        "this tag takes no arguments".to_string()
    } else {
        format!("expected parameters: {}", parameters.join(", "))
    }
}
