//! Untyped values exchanged with the markup evaluator.
//!
//! A [`Value`] is what arrives from a dynamically parsed markup tree before
//! any tag handler has validated it. Handlers narrow values through the
//! `as_*` accessors, which fail with a short description of the expected
//! shape.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::node::Node;

/// A dynamically shaped value bound to a tag argument.
///
/// Equality is structural: two sequences are equal when their elements are
/// pairwise equal, and nodes compare by label and payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<Value>),
    /// A bare tag label, as written in markup.
    Symbol(String),
    /// Named fields, in insertion order.
    Record(IndexMap<String, Value>),
    Node(Box<Node>),
}

impl Value {
    /// The empty sequence, used as the "nothing here" sentinel.
    pub fn empty_list() -> Self {
        Value::List(Vec::new())
    }

    /// Human readable name of the value's shape, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::List(_) => "sequence",
            Value::Symbol(_) => "symbol",
            Value::Record(_) => "record",
            Value::Node(_) => "node",
        }
    }

    /// Extract a string reference, returning an error if this is not a string value
    pub fn as_str(&self) -> Result<&str, &'static str> {
        if let Value::String(s) = self {
            Ok(s)
        } else {
            Err("expected string value")
        }
    }

    /// Extract a number, returning an error if this is not a number value
    pub fn as_number(&self) -> Result<f64, &'static str> {
        if let Value::Number(n) = self {
            Ok(*n)
        } else {
            Err("expected number value")
        }
    }

    /// Extract a boolean, returning an error if this is not a boolean value
    pub fn as_bool(&self) -> Result<bool, &'static str> {
        if let Value::Bool(b) = self {
            Ok(*b)
        } else {
            Err("expected boolean value")
        }
    }

    /// Extract the elements of a sequence, returning an error if this is not a sequence
    pub fn as_list(&self) -> Result<&[Value], &'static str> {
        if let Value::List(items) = self {
            Ok(items)
        } else {
            Err("expected sequence value")
        }
    }

    /// Extract the label of a symbol, returning an error if this is not a symbol
    pub fn as_symbol(&self) -> Result<&str, &'static str> {
        if let Value::Symbol(label) = self {
            Ok(label)
        } else {
            Err("expected symbol value")
        }
    }

    /// Borrow the document node, returning an error if this is not a node
    pub fn as_node(&self) -> Result<&Node, &'static str> {
        if let Value::Node(node) = self {
            Ok(node)
        } else {
            Err("expected document node")
        }
    }

    /// Returns `true` for `false` and for the empty sequence.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Bool(b) => !b,
            Value::List(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Symbol(label) => write!(f, "{label}"),
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Node(node) => write!(f, "<{}>", node.label()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Value::Record(fields)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Node(Box::new(node))
    }
}
