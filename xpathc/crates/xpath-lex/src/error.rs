//! Error types for the scanner.

use thiserror::Error;
use xpath_util::XPathError;

/// Errors returned by [`Scanner`](crate::Scanner) construction and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// The start offset does not point into the expression
    #[error("start offset {offset} is out of range for an expression of {len} bytes")]
    OffsetOutOfRange {
        /// Requested start offset
        offset: usize,
        /// Length of the expression in bytes
        len: usize,
    },

    /// An accessor was read while the current token has another kind
    #[error("invalid usage: {0}")]
    InvalidUsage(&'static str),

    /// The expression is lexically malformed
    #[error(transparent)]
    Syntax(#[from] XPathError),
}

/// Result type alias for scanner operations
pub type LexResult<T> = std::result::Result<T, LexError>;
