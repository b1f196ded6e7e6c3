//! Common types and utilities for xpt commands.
//!
//! This module provides the output formats, expression input and token
//! rendering shared by the commands.

use std::path::Path;

use serde::Serialize;
use xpath_lex::{Payload, Token};

use crate::error::{Result, XptError};

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats for token listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One token per line
    Text,
    /// A JSON array of token records
    Json,
}

impl OutputFormat {
    /// Parse a string into an OutputFormat (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse a format name, failing with a validation error.
    pub fn resolve(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| XptError::Validation(format!("Unknown format: {}", s)))
    }
}

// ============================================================================
// Expression Input
// ============================================================================

/// Reads the expression from the command line or from a file.
///
/// Exactly one source must be given. A trailing line break in a file is
/// dropped.
pub fn read_expression(expression: Option<String>, file: Option<&Path>) -> Result<String> {
    match (expression, file) {
        (Some(expression), None) => Ok(expression),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)?;
            Ok(content.trim_end_matches(['\r', '\n']).to_string())
        },
        (Some(_), Some(_)) => Err(XptError::Validation(
            "Give either an expression or --file, not both".to_string(),
        )),
        (None, None) => Err(XptError::Validation(
            "No expression given; pass one or use --file".to_string(),
        )),
    }
}

// ============================================================================
// Token Rendering
// ============================================================================

/// Serializable view of one token.
#[derive(Debug, Serialize, PartialEq)]
pub struct TokenRecord<'a> {
    /// Token kind name
    pub kind: String,
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
    /// Lexeme as written
    pub text: &'a str,
    /// Namespace prefix of a name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<&'a str>,
    /// Local name of a name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    /// Whether a name is followed by `(`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_be_function: Option<bool>,
    /// Body of a string literal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    /// Axis name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis: Option<&'static str>,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        let mut record = TokenRecord {
            kind: token.kind.to_string(),
            start: token.span.start,
            end: token.span.end,
            text: token.text,
            prefix: None,
            name: None,
            can_be_function: None,
            value: None,
            axis: None,
        };
        match token.payload {
            Payload::Name {
                prefix,
                name,
                can_be_function,
            } => {
                record.prefix = Some(prefix);
                record.name = Some(name);
                record.can_be_function = Some(can_be_function);
            },
            Payload::String(value) => record.value = Some(value),
            Payload::Axis(axis) => record.axis = axis.name(),
            Payload::None => {},
        }
        record
    }
}

/// Renders tokens one per line, optionally prefixed with their spans.
pub fn render_text(tokens: &[Token<'_>], show_spans: bool) -> String {
    let mut out = String::new();
    for token in tokens {
        if show_spans {
            out.push_str(&format!("{:>9}  ", token.span.to_string()));
        }
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}

/// Renders tokens as a pretty-printed JSON array.
pub fn render_json(tokens: &[Token<'_>]) -> Result<String> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
