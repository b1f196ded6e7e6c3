//! Character cursor for traversing an expression.
//!
//! This module provides the `Cursor` struct which maintains the byte
//! position while walking an expression. It handles UTF-8 correctly: a
//! multi-byte character is always consumed whole.

use crate::chars::is_whitespace;

/// A cursor for traversing an expression character by character.
///
/// # Example
///
/// ```
/// use xpath_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a/b");
///
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), '/');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The expression being traversed.
    source: &'a str,

    /// Current byte position in the expression.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the current character, or '\0' at the end of the expression.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("");
    /// assert_eq!(cursor.current_char(), '\0');
    /// ```
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character `offset` bytes ahead of the current position.
    ///
    /// Returns '\0' past the end, or when the offset lands inside a
    /// multi-byte character.
    #[inline]
    pub fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Returns the character at the given byte offset from the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("::");
    /// assert_eq!(cursor.peek_char(1), ':');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    /// Advances the cursor past the current character.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.source.len() {
            return;
        }

        let b = self.source.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
            return;
        }

        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    /// Advances while `pred` holds for the current character.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while !self.is_at_end() && pred(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the expression.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected character if present.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("<=");
    /// assert!(cursor.match_char('<'));
    /// assert!(!cursor.match_char('<'));
    /// assert_eq!(cursor.current_char(), '=');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips space, tab, CR and LF.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\r\n@");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_char(), '@');
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    /// Returns the current byte position.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor to `position`.
    ///
    /// Callers must pass a character boundary no greater than the length.
    #[inline]
    pub fn set_position(&mut self, position: usize) {
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }

    /// Returns the source from `start` to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("para[1]");
    /// cursor.eat_while(|c| c.is_ascii_alphabetic());
    /// assert_eq!(cursor.slice_from(0), "para");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full expression.
    pub fn source(&self) -> &'a str {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("éa");
        assert_eq!(cursor.current_char(), 'é');
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), 'a');
    }

    #[test]
    fn test_char_at_inside_multibyte_is_nul() {
        let cursor = Cursor::new("é");
        assert_eq!(cursor.char_at(1), '\0');
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_match_char_does_not_match_nul_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_skip_whitespace_stops_at_other_space() {
        let mut cursor = Cursor::new(" \u{a0}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.current_char(), '\u{a0}');
    }

    #[test]
    fn test_set_position_and_remaining() {
        let mut cursor = Cursor::new("a/b/c");
        cursor.set_position(2);
        assert_eq!(cursor.remaining(), "b/c");
        assert_eq!(cursor.source(), "a/b/c");
    }
}
