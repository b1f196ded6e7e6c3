//! String literal lexing.
//!
//! XPath 1.0 string literals have no escapes: the body runs to the next
//! occurrence of the opening quote.

use xpath_util::{Span, XPathError};

use crate::token::LexKind;
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a string literal delimited by `quote`.
    pub(crate) fn lex_string(&mut self, quote: char) -> Result<LexKind, XPathError> {
        self.cursor.advance();
        let body_start = self.cursor.position();

        let Some(len) = self.cursor.remaining().find(quote) else {
            let end = self.source().len();
            self.cursor.set_position(end);
            return Err(self
                .diagnostics()
                .with_span(Span::new(self.lex_start, end))
                .unclosed_string());
        };

        self.value = &self.source()[body_start..body_start + len];
        self.cursor.set_position(body_start + len);
        self.cursor.advance();
        Ok(LexKind::String)
    }
}

#[cfg(test)]
mod tests {
    use xpath_util::{ErrorKind, Span};

    use crate::token::LexKind;
    use crate::{LexError, Scanner};

    #[test]
    fn test_double_and_single_quotes() {
        let scanner = Scanner::new("\"it's\"").unwrap();
        assert_eq!(scanner.kind(), LexKind::String);
        assert_eq!(scanner.value().unwrap(), "it's");
        assert_eq!(scanner.raw_value(), "\"it's\"");

        let scanner = Scanner::new("'say \"hi\"'").unwrap();
        assert_eq!(scanner.value().unwrap(), "say \"hi\"");
    }

    #[test]
    fn test_empty_string() {
        let scanner = Scanner::new("''").unwrap();
        assert_eq!(scanner.value().unwrap(), "");
        assert_eq!(scanner.span(), Span::new(0, 2));
    }

    #[test]
    fn test_no_escapes() {
        let mut scanner = Scanner::new(r#""a\"b""#).unwrap();
        assert_eq!(scanner.value().unwrap(), "a\\");
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
    }

    #[test]
    fn test_non_ascii_body() {
        let scanner = Scanner::new("'héllo'").unwrap();
        assert_eq!(scanner.value().unwrap(), "héllo");
        assert_eq!(scanner.span(), Span::new(0, 8));
    }

    #[test]
    fn test_unclosed_string_spans_to_end() {
        let Err(LexError::Syntax(err)) = Scanner::new("'abc") else {
            panic!("expected a syntax error");
        };
        assert_eq!(err.kind(), ErrorKind::UnclosedString);
        assert_eq!(err.span(), Span::new(0, 4));
        assert_eq!(err.message(), "String literal was not closed.");
    }

    #[test]
    fn test_unclosed_string_mid_expression() {
        let mut scanner = Scanner::new("a = \"b'").unwrap();
        scanner.advance().unwrap();
        let err = scanner.advance().unwrap_err();
        assert_eq!(err.span(), Span::new(4, 7));
        assert_eq!(err.context(), "a =  -->\"b'<-- ");
    }
}
