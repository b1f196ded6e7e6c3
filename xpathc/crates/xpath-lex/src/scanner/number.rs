//! Number literal lexing.

use xpath_util::XPathError;

use crate::chars::is_digit;
use crate::token::LexKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a number literal.
    ///
    /// Accepts `digits`, `digits.`, `digits.digits` and `.digits`. An
    /// exponent is consumed so the diagnostic covers the whole lexeme, then
    /// rejected.
    pub(crate) fn lex_number(&mut self) -> Result<LexKind, XPathError> {
        self.cursor.eat_while(is_digit);
        if self.cursor.match_char('.') {
            self.cursor.eat_while(is_digit);
        }

        if matches!(self.cursor.current_char(), 'e' | 'E') {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            self.cursor.eat_while(is_digit);
            return Err(self.diagnostics().scientific_notation());
        }

        Ok(LexKind::Number)
    }
}
