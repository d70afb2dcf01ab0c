//! Contract violations raised by tag handlers.
//!
//! Every handler checks the shape of its bound arguments. When a check
//! fails it returns a [`Violation`]: a single diagnostic with an
//! [`ErrorCode`], a message, the tag it came from and optional help text.
//! Violations are fatal to the invocation and abort an evaluation run.
//!
//! # Example
//!
//! ```
//! # use folio_eval::error::{ErrorCode, Violation};
//!
//! let violation = Violation::new(ErrorCode::E201, "index 3 is out of range for a sequence of length 3")
//!     .with_tag("nth")
//!     .with_help("indices start at 0");
//!
//! assert_eq!(violation.to_string(), "error[E201]: index 3 is out of range for a sequence of length 3");
//! ```

mod error_code;
mod violation;

pub use error_code::ErrorCode;
pub use violation::Violation;

/// A type alias for `Result<T, Violation>`.
pub type Result<T> = std::result::Result<T, Violation>;
