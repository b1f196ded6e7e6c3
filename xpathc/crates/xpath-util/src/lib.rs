//! xpath-util - Spans and diagnostics for XPath expressions
//!
//! This crate holds the pieces shared between the scanner and anything that
//! consumes its tokens:
//!
//! - [`span`] - half-open byte ranges into an expression
//! - [`diagnostic`] - span-anchored errors with bounded context rendering
//!
//! # Example
//!
//! ```
//! use xpath_util::{DiagnosticBuilder, Span};
//!
//! let err = DiagnosticBuilder::new("a = 'b", Span::new(4, 6)).unclosed_string();
//! assert_eq!(err.to_string(), "String literal was not closed.\na =  -->'b<-- ");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{DiagnosticBuilder, ErrorKind, XPathError};
pub use span::Span;
