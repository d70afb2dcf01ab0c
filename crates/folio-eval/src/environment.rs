//! The tag evaluation environment.

use log::{debug, trace};

use folio_core::Value;

use crate::{
    arguments::{Arguments, Invocation},
    error::{ErrorCode, Result, Violation},
    handlers,
    tag::Tag,
};

/// Evaluates tag invocations into values and document nodes.
///
/// The environment holds no state between invocations; every handler is a
/// pure function of its arguments.
///
/// # Example
///
/// ```
/// # use folio_eval::{Environment, Invocation};
/// # use folio_core::Value;
/// let env = Environment::new();
///
/// let value = env
///     .invoke("code", Invocation::new().with_arg("js").with_arg("x = 1"))
///     .unwrap();
///
/// let Value::Node(node) = value else { unreachable!() };
/// assert_eq!(node.label(), "code");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Environment;

impl Environment {
    /// Create an environment with the full tag vocabulary.
    pub fn new() -> Self {
        Self
    }

    /// Resolve a markup tag name.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorCode::E100`] for a name outside the vocabulary.
    pub fn resolve(&self, name: &str) -> Result<Tag> {
        Tag::from_name(name).ok_or_else(|| {
            Violation::new(ErrorCode::E100, format!("unknown tag `{name}`")).with_tag(name)
        })
    }

    /// Bind arguments for `tag` and run its handler.
    pub fn apply(&self, tag: Tag, invocation: Invocation) -> Result<Value> {
        trace!(
            tag = tag.name(),
            positional = invocation.positional().len(),
            keywords = invocation.keywords().len();
            "Applying tag"
        );

        Arguments::bind(tag.parameters(), invocation)
            .and_then(|args| handlers::apply(tag, args))
            .map_err(|violation| violation.with_tag(tag.name()))
    }

    /// Resolve `name` and apply the tag to the invocation.
    ///
    /// # Errors
    ///
    /// Returns the contract [`Violation`] raised while resolving, binding or
    /// running the handler.
    pub fn invoke(&self, name: &str, invocation: Invocation) -> Result<Value> {
        let tag = self.resolve(name)?;
        self.apply(tag, invocation)
    }

    /// Invoke a sequence of tags in order, collecting their results.
    ///
    /// The first violation aborts the run.
    pub fn evaluate<'a, I>(&self, invocations: I) -> Result<Vec<Value>>
    where
        I: IntoIterator<Item = (&'a str, Invocation)>,
    {
        let values = invocations
            .into_iter()
            .map(|(name, invocation)| self.invoke(name, invocation))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|violation| {
                debug!(code = violation.code().as_str(), tag:? = violation.tag(); "Evaluation aborted");
            })?;

        debug!(values = values.len(); "Evaluation finished");
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_unknown_tag() {
        let err = Environment::new().resolve("blink").unwrap_err();

        assert_eq!(err.code(), ErrorCode::E100);
        assert_eq!(err.message(), "unknown tag `blink`");
        assert_eq!(err.tag(), Some("blink"));
    }

    #[test]
    fn test_violation_records_tag() {
        let err = Environment::new()
            .invoke("code", Invocation::new().with_arg("js"))
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::E101);
        assert_eq!(err.tag(), Some("code"));
    }

    #[test]
    fn test_evaluate_aborts_on_first_violation() {
        let err = Environment::new()
            .evaluate([
                ("private", Invocation::new()),
                ("nth", Invocation::new().with_arg(Value::empty_list()).with_arg(0.0)),
                ("blink", Invocation::new()),
            ])
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::E201);
        assert_eq!(err.tag(), Some("nth"));
    }
}
