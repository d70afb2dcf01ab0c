//! # Folio Convert
//!
//! Turns a commented source file into Folio documentation markup. Every line
//! is classified as documentation, code or blank; adjacent classifications
//! of a compatible kind are merged; the merged runs are rendered back as
//! markup text where code runs become `@code(...)` blocks.
//!
//! ## Usage
//!
//! ```
//! # use folio_convert::{JAVASCRIPT, ConvertError};
//!
//! fn main() -> Result<(), ConvertError> {
//!     let converter = JAVASCRIPT.converter()?;
//!     let markup = converter.convert("// Adds one.\nconst inc = x => x + 1;\n");
//!     assert_eq!(markup, "Adds one.\n@code(language: \"js\" \"const inc = x => x + 1;\")");
//!     Ok(())
//! }
//! ```

mod classification;
mod converter;
mod error;
mod preset;

pub use classification::{Assimilation, LineClassification, assimilate, classify, merge, render};
pub use converter::{Converter, convert, split_lines};
pub use error::ConvertError;
pub use preset::{BUILTIN_PRESETS, JAVASCRIPT, LIVESCRIPT, Preset};
