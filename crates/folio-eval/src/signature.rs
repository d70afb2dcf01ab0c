//! Declaration signature parsing.
//!
//! A function-style signature is a name followed by a parenthesised
//! parameter group, e.g. `foo(a, b)`. Parentheses inside the group must be
//! balanced. Class-style signatures may add a trailing `< parent-list`.
//!
//! Signatures that do not have this shape are kept verbatim as both the
//! name and the signature; only an empty signature is rejected.

use winnow::{
    Parser as _,
    combinator::{alt, delimited, repeat},
    error::{ContextError, ErrMode},
    token::{take_till, take_while},
};

use folio_core::Signature;

use crate::error::{ErrorCode, Result, Violation};

type PResult<O> = std::result::Result<O, ErrMode<ContextError<&'static str>>>;

/// Parse everything up to and including the first parameter group.
///
/// Returns the raw name text and the group including its parentheses.
fn signature_head<'s>(input: &mut &'s str) -> PResult<(&'s str, &'s str)> {
    (take_till(0.., '('), parameter_group)
        .context("signature head")
        .parse_next(input)
}

/// Parse a balanced `( ... )` group, returning it verbatim.
fn parameter_group<'s>(input: &mut &'s str) -> PResult<&'s str> {
    delimited('(', parameter_contents, ')')
        .take()
        .parse_next(input)
}

fn parameter_contents(input: &mut &str) -> PResult<()> {
    repeat(
        0..,
        alt((
            take_while(1.., |c: char| c != '(' && c != ')').void(),
            parameter_group.void(),
        )),
    )
    .parse_next(input)
}

fn ensure_not_blank(signature: &str) -> Result<()> {
    if signature.trim().is_empty() {
        return Err(Violation::new(
            ErrorCode::E203,
            "declaration signature is empty",
        )
        .with_help("write the declared name, e.g. `name(arguments)`"));
    }
    Ok(())
}

/// Split a signature into its head and the text after the parameter group.
///
/// Returns `None` when there is no parameter group or the name is empty.
fn split_head(signature: &str) -> Option<(&str, &str, &str)> {
    let mut rest = signature;
    let (name, group) = signature_head.parse_next(&mut rest).ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some((name, group, rest))
}

/// Parse a function-style signature.
///
/// The name is the trimmed text before the first parameter group and the
/// signature is the input unchanged.
///
/// # Errors
///
/// Returns [`ErrorCode::E203`] for an empty or whitespace-only signature.
pub fn parse_function_signature(signature: &str) -> Result<Signature> {
    ensure_not_blank(signature)?;

    match split_head(signature) {
        Some((name, _, _)) => Ok(Signature::new(name, signature)),
        None => Ok(Signature::new(signature, signature)),
    }
}

/// Parse a class-style signature, `Name(params) < Parent, Other`.
///
/// With a parent list the signature is narrowed to the name and parameter
/// group; otherwise this behaves like [`parse_function_signature`].
///
/// # Errors
///
/// Returns [`ErrorCode::E203`] for an empty or whitespace-only signature.
pub fn parse_class_signature(signature: &str) -> Result<Signature> {
    ensure_not_blank(signature)?;

    let Some((name, group, rest)) = split_head(signature) else {
        return Ok(Signature::new(signature, signature));
    };

    let parents = rest
        .trim_start()
        .strip_prefix('<')
        .map(str::trim)
        .filter(|parents| !parents.is_empty());

    match parents {
        Some(parents) => Ok(Signature::new(name, format!("{name}{group}")).with_parents(parents)),
        None => Ok(Signature::new(name, signature)),
    }
}
