//! ASCII character classes used by the scanner.
//!
//! Classification is deliberately ASCII-only: anything outside these
//! classes is scanned as an `Unknown` token.

/// Whitespace between tokens: space, tab, CR and LF.
///
/// # Example
///
/// ```
/// use xpath_lex::chars::is_whitespace;
///
/// assert!(is_whitespace('\t'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// First character of a name: ASCII letter or underscore.
///
/// # Example
///
/// ```
/// use xpath_lex::chars::is_name_start;
///
/// assert!(is_name_start('_'));
/// assert!(!is_name_start('-'));
/// assert!(!is_name_start('1'));
/// ```
#[inline]
pub fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Subsequent character of a name: name start, digit, `-` or `.`.
#[inline]
pub fn is_name_char(c: char) -> bool {
    is_name_start(c) || c.is_ascii_digit() || c == '-' || c == '.'
}
