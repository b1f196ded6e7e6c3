//! Error kinds for categorizing expression diagnostics.
//!
//! Every [`XPathError`](super::XPathError) carries an [`ErrorKind`], so
//! callers can branch on the failure without matching message text.
//!
//! # Examples
//!
//! ```
//! use xpath_util::diagnostic::ErrorKind;
//!
//! assert_eq!(ErrorKind::UnclosedString.code(), "XP0006");
//! assert!(ErrorKind::UnclosedString.is_lexical());
//! assert!(!ErrorKind::EofExpected.is_lexical());
//! ```

use std::fmt;

/// The category of an expression diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A token that does not fit the grammar at this position
    UnexpectedToken,
    /// A step is missing its node test
    NodeTestExpected,
    /// `.` directly followed by a predicate
    PredicateAfterDot,
    /// `..` directly followed by a predicate
    PredicateAfterDotDot,
    /// A number literal with an exponent
    ScientificNotation,
    /// A string literal without its closing quote
    UnclosedString,
    /// Trailing tokens after a complete expression
    EofExpected,
    /// A specific token was required
    TokenExpected,
}

impl ErrorKind {
    /// All kinds, in code order.
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::UnexpectedToken,
        ErrorKind::NodeTestExpected,
        ErrorKind::PredicateAfterDot,
        ErrorKind::PredicateAfterDotDot,
        ErrorKind::ScientificNotation,
        ErrorKind::UnclosedString,
        ErrorKind::EofExpected,
        ErrorKind::TokenExpected,
    ];

    /// Stable diagnostic code, `XP` followed by four digits.
    pub const fn code(self) -> &'static str {
        match self {
            ErrorKind::UnexpectedToken => "XP0001",
            ErrorKind::NodeTestExpected => "XP0002",
            ErrorKind::PredicateAfterDot => "XP0003",
            ErrorKind::PredicateAfterDotDot => "XP0004",
            ErrorKind::ScientificNotation => "XP0005",
            ErrorKind::UnclosedString => "XP0006",
            ErrorKind::EofExpected => "XP0007",
            ErrorKind::TokenExpected => "XP0008",
        }
    }

    /// Short snake_case name, used in machine-readable output.
    pub const fn name(self) -> &'static str {
        match self {
            ErrorKind::UnexpectedToken => "unexpected_token",
            ErrorKind::NodeTestExpected => "node_test_expected",
            ErrorKind::PredicateAfterDot => "predicate_after_dot",
            ErrorKind::PredicateAfterDotDot => "predicate_after_dot_dot",
            ErrorKind::ScientificNotation => "scientific_notation",
            ErrorKind::UnclosedString => "unclosed_string",
            ErrorKind::EofExpected => "eof_expected",
            ErrorKind::TokenExpected => "token_expected",
        }
    }

    /// True for the kinds the scanner raises on its own.
    pub const fn is_lexical(self) -> bool {
        matches!(
            self,
            ErrorKind::ScientificNotation | ErrorKind::UnclosedString
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let codes: HashSet<_> = ErrorKind::ALL.iter().map(|k| k.code()).collect();
        assert_eq!(codes.len(), ErrorKind::ALL.len());
    }

    #[test]
    fn test_codes_are_well_formed() {
        for kind in ErrorKind::ALL {
            let code = kind.code();
            assert!(code.starts_with("XP"));
            assert_eq!(code.len(), 6);
            assert!(code[2..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_only_two_lexical_kinds() {
        let lexical: Vec<_> = ErrorKind::ALL.iter().filter(|k| k.is_lexical()).collect();
        assert_eq!(
            lexical,
            vec![&ErrorKind::ScientificNotation, &ErrorKind::UnclosedString]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ErrorKind::TokenExpected.to_string(),
            "token_expected[XP0008]"
        );
    }
}
