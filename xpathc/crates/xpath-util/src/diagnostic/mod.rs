//! Diagnostic module - Error reporting for XPath expressions.
//!
//! An [`XPathError`] records the full expression text, the span of the
//! offending lexeme and a message. Rendering is a pure function of those
//! three values: the same inputs always produce the same text.
//!
//! # Examples
//!
//! ```
//! use xpath_util::diagnostic::{DiagnosticBuilder, ErrorKind};
//! use xpath_util::Span;
//!
//! let source = "foo ]";
//! let err = DiagnosticBuilder::new(source, Span::new(4, 5)).eof_expected("]");
//!
//! assert_eq!(err.kind(), ErrorKind::EofExpected);
//! assert_eq!(
//!     err.to_string(),
//!     "Expected end of the expression, found ']'.\nfoo  -->]<-- "
//! );
//! ```

mod builder;
mod codes;
mod render;

pub use builder::DiagnosticBuilder;
pub use codes::ErrorKind;
pub use render::{render_context, TRIM_MARKER, TRIM_SIZE};

use thiserror::Error;

use crate::Span;

/// An error in an XPath expression, anchored to a span of its source.
///
/// Displays as [`detailed_message`](XPathError::detailed_message).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{}", self.detailed_message())]
pub struct XPathError {
    kind: ErrorKind,
    message: String,
    expression: String,
    span: Span,
}

impl XPathError {
    /// Create a new error.
    ///
    /// The span is clamped to the expression length.
    pub fn new(
        kind: ErrorKind,
        expression: impl Into<String>,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        let expression = expression.into();
        let span = span.clamp_to(expression.len());
        Self {
            kind,
            message: message.into(),
            expression,
            span,
        }
    }

    /// The error category
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The bare message, without context
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The full expression the error refers to
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Start offset of the offending lexeme
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// End offset (exclusive) of the offending lexeme
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// The offending span
    pub fn span(&self) -> Span {
        self.span
    }

    /// The bounded context line; empty when the expression is empty.
    pub fn context(&self) -> String {
        render_context(&self.expression, self.span)
    }

    /// Message followed by the context line, separated by a newline.
    pub fn detailed_message(&self) -> String {
        let context = self.context();
        if context.is_empty() {
            return self.message.clone();
        }
        if self.message.is_empty() {
            return context;
        }
        format!("{}\n{}", self.message, context)
    }
}
