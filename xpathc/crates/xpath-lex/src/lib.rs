//! xpath-lex - Lexical scanner for XPath 1.0 expressions
//!
//! This crate turns an XPath expression into a stream of tokens for a
//! parser. The scanner is pull-based: it holds one current token, exposes
//! it through accessors, and moves on when asked.
//!
//! # Example Usage
//!
//! ```
//! use xpath_lex::{LexKind, Scanner};
//!
//! let mut scanner = Scanner::new("child::para[@type = 'warning']").unwrap();
//! assert_eq!(scanner.kind(), LexKind::Axis);
//!
//! // Or pull them all at once
//! let kinds: Vec<_> = xpath_lex::tokenize("2 * *")
//!     .unwrap()
//!     .into_iter()
//!     .map(|t| t.kind)
//!     .collect();
//! assert_eq!(kinds, [LexKind::Number, LexKind::Multiply, LexKind::Star, LexKind::Eof]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, axes, operators and token snapshots
//! - [`scanner`] - The scanner and its dispatch
//! - [`disambiguate`] - Operator versus operand classification
//! - [`cursor`] - Character cursor for expression traversal
//! - [`chars`] - Character classes
//! - [`error`] - Construction and usage errors
//!
//! # Tokens
//!
//! - **Operators**: `or`, `and`, `=`, `!=`, `<`, `<=`, `>`, `>=`, `+`, `-`,
//!   `*`, `div`, `mod`, `|`
//! - **Punctuation**: `..`, `::`, `//`, `(`, `)`, `[`, `]`, `.`, `@`, `,`,
//!   `*`, `/`, `$`, `}`
//! - **Literals**: numbers (`42`, `3.14`, `.5`) and strings (`'a'`, `"b"`)
//! - **Names**: `para`, `xs:integer`, `svg:*`, and axis names before `::`
//!
//! `*` and the keyword operators read as operators only after an operand;
//! see [`disambiguate`].
//!
//! # Errors
//!
//! Unterminated strings and numbers with an exponent are rejected with an
//! [`XPathError`] carrying the expression, the span and a rendered context
//! line. Grammar errors are built by the caller with
//! [`Scanner::diagnostics`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod disambiguate;
pub mod error;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use scanner::{tokenize, Scanner};
pub use token::{Axis, LexKind, Operator, Payload, Token};
pub use xpath_util::{DiagnosticBuilder, ErrorKind, Span, XPathError};

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(source: &str) -> Vec<LexKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_arithmetic() {
        let tokens = tokenize("1+2").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![LexKind::Number, LexKind::Plus, LexKind::Number, LexKind::Eof]
        );
        assert_eq!(tokens[0].text, "1");
        assert_eq!(tokens[2].text, "2");
    }

    #[test]
    fn test_keyword_operator_between_names() {
        let tokens = tokenize("a or b").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![LexKind::Name, LexKind::Or, LexKind::Name, LexKind::Eof]
        );
        assert_eq!(tokens[0].name(), Some("a"));
        assert_eq!(tokens[2].name(), Some("b"));
    }

    #[test]
    fn test_location_path() {
        assert_eq!(
            kinds("/child::doc//para[@id='x'][last()]"),
            vec![
                LexKind::Slash,
                LexKind::Axis,
                LexKind::DoubleColon,
                LexKind::Name,
                LexKind::DoubleSlash,
                LexKind::Name,
                LexKind::LBracket,
                LexKind::At,
                LexKind::Name,
                LexKind::Eq,
                LexKind::String,
                LexKind::RBracket,
                LexKind::LBracket,
                LexKind::Name,
                LexKind::LParens,
                LexKind::RParens,
                LexKind::RBracket,
                LexKind::Eof,
            ]
        );
    }

    #[test]
    fn test_variable_reference() {
        let tokens = tokenize("$x div $y").unwrap();
        assert_eq!(
            tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
            vec![
                LexKind::Dollar,
                LexKind::Name,
                LexKind::Divide,
                LexKind::Dollar,
                LexKind::Name,
                LexKind::Eof,
            ]
        );
    }

    #[test]
    fn test_mod_as_element_name() {
        assert_eq!(
            kinds("mod mod mod"),
            vec![LexKind::Name, LexKind::Modulo, LexKind::Name, LexKind::Eof]
        );
    }

    #[test]
    fn test_union_of_paths() {
        assert_eq!(
            kinds("a | b/c"),
            vec![
                LexKind::Name,
                LexKind::Union,
                LexKind::Name,
                LexKind::Slash,
                LexKind::Name,
                LexKind::Eof,
            ]
        );
    }

    #[test]
    fn test_predicate_after_dot_dot_from_scanner_span() {
        let mut scanner = Scanner::new("..[").unwrap();
        assert_eq!(scanner.kind(), LexKind::DoubleDot);
        let at_dot_dot = scanner.diagnostics();
        assert_eq!(scanner.advance().unwrap(), LexKind::LBracket);

        let err = at_dot_dot.predicate_after_dot_dot();
        assert_eq!(err.kind(), ErrorKind::PredicateAfterDotDot);
        assert_eq!(err.span(), Span::new(0, 2));
        assert_eq!(err.context(), " -->..<-- [");
    }

    #[test]
    fn test_eof_expected_uses_raw_value() {
        let mut scanner = Scanner::new("1 2").unwrap();
        scanner.advance().unwrap();
        let err = scanner.diagnostics().eof_expected(scanner.raw_value());
        assert_eq!(err.message(), "Expected end of the expression, found '2'.");
    }

    #[test]
    fn test_token_expected_at_eof() {
        let mut scanner = Scanner::new("f(").unwrap();
        scanner.advance().unwrap();
        scanner.advance().unwrap();
        let err = scanner.diagnostics().token_expected(")", scanner.raw_value());
        assert_eq!(err.message(), "Expected token ')', found '<eof>'.");
        assert_eq!(err.span(), Span::new(2, 2));
        assert_eq!(err.context(), "f(");
    }

    proptest! {
        #[test]
        fn test_property_advance_terminates(source in "[ -~\t\r\n]{1,80}") {
            let Ok(mut scanner) = Scanner::new(&source) else {
                return Ok(());
            };
            let mut steps = 0;
            while scanner.kind() != LexKind::Eof {
                steps += 1;
                prop_assert!(steps <= source.len() + 1);
                if scanner.advance().is_err() {
                    break;
                }
            }
        }

        #[test]
        fn test_property_spans_reconstruct_source(source in "[ -~\t\r\n]{1,80}") {
            let Ok(tokens) = tokenize(&source) else {
                return Ok(());
            };
            let mut rebuilt = String::new();
            let mut end = 0;
            for token in &tokens {
                let gap = &source[end..token.span.start];
                prop_assert!(gap.chars().all(chars::is_whitespace));
                rebuilt.push_str(gap);
                if token.kind != LexKind::Eof {
                    rebuilt.push_str(token.text);
                }
                end = token.span.end;
            }
            prop_assert_eq!(rebuilt, source);
        }

        #[test]
        fn test_property_ncnames_scan_as_one_name(input in "[a-zA-Z_][a-zA-Z0-9_.-]{0,40}") {
            let tokens = tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, LexKind::Name);
            prop_assert_eq!(tokens[0].name(), Some(input.as_str()));
        }

        #[test]
        fn test_property_decimals_scan_as_one_number(input in "[0-9]{1,20}(\\.[0-9]{0,10})?") {
            let tokens = tokenize(&input).unwrap();
            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(tokens[0].kind, LexKind::Number);
        }
    }
}
