//! Folio Tag Evaluation Environment
//!
//! This crate maps the closed tag vocabulary of the Folio documentation
//! markup to handlers that validate their arguments and build document
//! nodes from [`folio_core`].
//!
//! Evaluation of a tag invocation proceeds in three steps:
//!
//! 1. **Resolution**: the markup name is resolved to a [`Tag`]
//! 2. **Binding**: keyword and positional arguments are bound to the tag's
//!    declared parameters ([`Arguments`])
//! 3. **Handling**: the tag's handler checks the argument contract and
//!    produces a [`folio_core::Value`]
//!
//! Any failed check is reported as a [`Violation`] carrying an
//! [`ErrorCode`].
//!
//! # Example
//!
//! ```
//! use folio_core::{MetaEntry, Node, Stability, Value};
//! use folio_eval::{Environment, Invocation};
//!
//! let env = Environment::new();
//! let value = env.invoke("stability", Invocation::new().with_arg("Stable"))?;
//!
//! assert_eq!(
//!     value,
//!     Value::from(Node::Meta(MetaEntry::Stability(Stability::Stable)))
//! );
//! # Ok::<(), folio_eval::Violation>(())
//! ```

pub mod arguments;
mod environment;
pub mod error;
mod handlers;
pub mod signature;
pub mod tag;

pub use arguments::{Arguments, Invocation};
pub use environment::Environment;
pub use error::{ErrorCode, Violation};
pub use tag::Tag;
