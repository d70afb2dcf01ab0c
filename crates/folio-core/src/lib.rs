//! Folio Core Types
//!
//! This crate provides the document tree produced by evaluating Folio
//! documentation markup. It includes:
//!
//! - **Values**: Untyped data handed over by the markup evaluator ([`value::Value`])
//! - **Nodes**: One strongly typed variant per document label ([`node::Node`])
//! - **Metadata**: Typed metadata markers collected into declarations ([`meta::MetaEntry`])
//! - **Signatures**: Parsed declaration signatures ([`signature::Signature`])
//!
//! Nodes are immutable once constructed and own their children, so the
//! tree is always acyclic.

pub mod meta;
pub mod node;
pub mod signature;
pub mod value;

pub use meta::{MetaEntry, Stability};
pub use node::Node;
pub use signature::Signature;
pub use value::Value;
