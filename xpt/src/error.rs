//! Error handling module for the xpt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use xpath_lex::{LexError, XPathError};

/// Main error type for the xpt CLI application.
#[derive(Error, Debug)]
pub enum XptError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when command arguments are inconsistent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The scanner could not be started or was misused.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The expression is lexically malformed.
    #[error(transparent)]
    Scan(#[from] XPathError),
}

/// Result type alias using XptError.
pub type Result<T> = std::result::Result<T, XptError>;
