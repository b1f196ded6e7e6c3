//! Operator and punctuation lexing.
//!
//! This module handles the symbols that need lookahead: `.`, `:`, `*`,
//! `/`, `!`, `<` and `>`.

use xpath_util::XPathError;

use crate::chars::is_digit;
use crate::disambiguate::disambiguate;
use crate::token::LexKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes dot, double dot, or a number with a leading dot.
    ///
    /// Handles: `.`, `..`, `.5`
    pub(crate) fn lex_dot(&mut self) -> Result<LexKind, XPathError> {
        if is_digit(self.cursor.peek_char(1)) {
            return self.lex_number();
        }

        self.cursor.advance();
        if self.cursor.match_char('.') {
            Ok(LexKind::DoubleDot)
        } else {
            Ok(LexKind::Dot)
        }
    }

    /// Lexes the axis separator. A lone colon is not a token.
    ///
    /// Handles: `::`
    pub(crate) fn lex_colon(&mut self) -> LexKind {
        self.cursor.advance();
        if self.cursor.match_char(':') {
            LexKind::DoubleColon
        } else {
            LexKind::Unknown
        }
    }

    /// Lexes the wildcard, which reads as multiplication after an operand.
    pub(crate) fn lex_star(&mut self) -> LexKind {
        self.cursor.advance();
        disambiguate(LexKind::Star, "*", "", self.prev_kind)
    }

    /// Handles: `/`, `//`
    pub(crate) fn lex_slash(&mut self) -> LexKind {
        self.cursor.advance();
        if self.cursor.match_char('/') {
            LexKind::DoubleSlash
        } else {
            LexKind::Slash
        }
    }

    /// Handles: `!=`. A lone `!` is not a token.
    pub(crate) fn lex_bang(&mut self) -> LexKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            LexKind::Ne
        } else {
            LexKind::Unknown
        }
    }

    /// Handles: `<`, `<=`
    pub(crate) fn lex_less(&mut self) -> LexKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            LexKind::Le
        } else {
            LexKind::Lt
        }
    }

    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> LexKind {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            LexKind::Ge
        } else {
            LexKind::Gt
        }
    }
}
