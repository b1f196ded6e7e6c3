//! Operator disambiguation.
//!
//! XPath reuses `*` both as the name-test wildcard and as multiplication,
//! and `or`, `and`, `div`, `mod` are both operators and legal element
//! names. Which one a token is depends only on the token before it: after
//! an operand an operator is expected, anywhere else an operand is.
//!
//! ```text
//! a * b      Name  Multiply Name
//! * | a      Star  Union    Name
//! a/and      Name  Slash    Name("and")
//! ```

use crate::token::LexKind;

/// Returns true if the grammar expects an operand after `prev`.
///
/// `None` is the start of the expression. `Unknown` is treated the same
/// way, so recovery after a bad character does not invent operators.
///
/// # Example
///
/// ```
/// use xpath_lex::disambiguate::expects_operand;
/// use xpath_lex::LexKind;
///
/// assert!(expects_operand(None));
/// assert!(expects_operand(Some(LexKind::Slash)));
/// assert!(!expects_operand(Some(LexKind::Name)));
/// assert!(!expects_operand(Some(LexKind::RParens)));
/// ```
pub fn expects_operand(prev: Option<LexKind>) -> bool {
    let Some(prev) = prev else {
        return true;
    };
    prev.is_operator()
        || matches!(
            prev,
            LexKind::Unknown
                | LexKind::Slash
                | LexKind::DoubleSlash
                | LexKind::At
                | LexKind::DoubleColon
                | LexKind::LParens
                | LexKind::LBracket
                | LexKind::Comma
                | LexKind::Dollar
        )
}

/// Operator spelled by an unqualified keyword name, if any.
///
/// # Example
///
/// ```
/// use xpath_lex::disambiguate::keyword_operator;
/// use xpath_lex::LexKind;
///
/// assert_eq!(keyword_operator("div"), Some(LexKind::Divide));
/// assert_eq!(keyword_operator("divide"), None);
/// ```
pub fn keyword_operator(name: &str) -> Option<LexKind> {
    if name.len() > 3 {
        return None;
    }
    match name {
        "or" => Some(LexKind::Or),
        "and" => Some(LexKind::And),
        "div" => Some(LexKind::Divide),
        "mod" => Some(LexKind::Modulo),
        _ => None,
    }
}

/// Final kind of a freshly scanned `Star` or `Name`.
///
/// `spelling` and `prefix` are only consulted for `Name` candidates; any
/// other candidate kind is returned unchanged.
///
/// # Example
///
/// ```
/// use xpath_lex::disambiguate::disambiguate;
/// use xpath_lex::LexKind;
///
/// let after_name = Some(LexKind::Name);
/// assert_eq!(disambiguate(LexKind::Star, "*", "", after_name), LexKind::Multiply);
/// assert_eq!(disambiguate(LexKind::Star, "*", "", None), LexKind::Star);
/// assert_eq!(disambiguate(LexKind::Name, "or", "", after_name), LexKind::Or);
/// assert_eq!(disambiguate(LexKind::Name, "or", "x", after_name), LexKind::Name);
/// ```
pub fn disambiguate(
    candidate: LexKind,
    spelling: &str,
    prefix: &str,
    prev: Option<LexKind>,
) -> LexKind {
    let op = match candidate {
        LexKind::Star => LexKind::Multiply,
        LexKind::Name if prefix.is_empty() => match keyword_operator(spelling) {
            Some(op) => op,
            None => return candidate,
        },
        _ => return candidate,
    };

    if expects_operand(prev) {
        candidate
    } else {
        op
    }
}
