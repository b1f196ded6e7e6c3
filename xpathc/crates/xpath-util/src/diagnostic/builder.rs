//! Diagnostic builder for span-anchored expression errors.
//!
//! A [`DiagnosticBuilder`] holds only the expression text and a span. The
//! scanner hands one out for its current lexeme, and a parser can keep it
//! (or build its own) to raise grammar errors without holding the scanner.

use super::{ErrorKind, XPathError};
use crate::Span;

/// Builds [`XPathError`] values for one span of one expression.
///
/// # Examples
///
/// ```
/// use xpath_util::diagnostic::{DiagnosticBuilder, ErrorKind};
/// use xpath_util::Span;
///
/// let builder = DiagnosticBuilder::new("..[1]", Span::new(0, 2));
/// let err = builder.predicate_after_dot_dot();
/// assert_eq!(err.kind(), ErrorKind::PredicateAfterDotDot);
/// assert_eq!(err.span(), Span::new(0, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticBuilder<'a> {
    source: &'a str,
    span: Span,
}

impl<'a> DiagnosticBuilder<'a> {
    /// Create a builder for `span` within `source`.
    pub fn new(source: &'a str, span: Span) -> Self {
        Self { source, span }
    }

    /// The expression errors are reported against
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// The span errors are anchored to
    pub fn span(&self) -> Span {
        self.span
    }

    /// Same expression, different span.
    pub fn with_span(self, span: Span) -> Self {
        Self { span, ..self }
    }

    /// Build an error of any kind with a custom message.
    pub fn custom(&self, kind: ErrorKind, message: impl Into<String>) -> XPathError {
        XPathError::new(kind, self.source, self.span, message)
    }

    /// `token` does not fit the grammar here.
    pub fn unexpected_token(&self, token: &str) -> XPathError {
        self.custom(
            ErrorKind::UnexpectedToken,
            format!("Unexpected token '{}' in the expression.", token),
        )
    }

    /// A node test was required but `token` was found.
    pub fn node_test_expected(&self, token: &str) -> XPathError {
        self.custom(
            ErrorKind::NodeTestExpected,
            format!("Expected a node test, found '{}'.", token),
        )
    }

    /// Abbreviated step `.` followed by a predicate.
    pub fn predicate_after_dot(&self) -> XPathError {
        self.custom(
            ErrorKind::PredicateAfterDot,
            "Abbreviated step '.' cannot be followed by a predicate. \
             Use the full form 'self::node()[predicate]' instead.",
        )
    }

    /// Abbreviated step `..` followed by a predicate.
    pub fn predicate_after_dot_dot(&self) -> XPathError {
        self.custom(
            ErrorKind::PredicateAfterDotDot,
            "Abbreviated step '..' cannot be followed by a predicate. \
             Use the full form 'parent::node()[predicate]' instead.",
        )
    }

    /// Number literal with an exponent.
    pub fn scientific_notation(&self) -> XPathError {
        self.custom(
            ErrorKind::ScientificNotation,
            "Scientific notation is not allowed.",
        )
    }

    /// String literal without a closing quote.
    pub fn unclosed_string(&self) -> XPathError {
        self.custom(ErrorKind::UnclosedString, "String literal was not closed.")
    }

    /// Tokens remain after a complete expression.
    pub fn eof_expected(&self, token: &str) -> XPathError {
        self.custom(
            ErrorKind::EofExpected,
            format!("Expected end of the expression, found '{}'.", token),
        )
    }

    /// `expected` was required but `actual` was found.
    pub fn token_expected(&self, expected: &str, actual: &str) -> XPathError {
        self.custom(
            ErrorKind::TokenExpected,
            format!("Expected token '{}', found '{}'.", expected, actual),
        )
    }
}
