//! Name, qualified name and axis lexing.

use crate::chars::{is_name_char, is_name_start, is_whitespace};
use crate::disambiguate::disambiguate;
use crate::token::{Axis, LexKind};
use crate::Scanner;

impl<'a> Scanner<'a> {
    /// Lexes a name starting at a name-start character.
    ///
    /// Handles: `local`, `prefix:local`, `prefix:*`, and `axis::` where the
    /// `::` is left for the next token.
    pub(crate) fn lex_name(&mut self) -> LexKind {
        let first = self.eat_ncname();

        if self.cursor.current_char() == ':' {
            let after = self.cursor.peek_char(1);
            if is_name_start(after) {
                self.cursor.advance();
                self.prefix = first;
                self.name = self.eat_ncname();
                return self.finish_name();
            }
            if after == '*' {
                self.cursor.advance();
                let star = self.cursor.position();
                self.cursor.advance();
                self.prefix = first;
                self.name = &self.source()[star..star + 1];
                return self.finish_name();
            }
        }

        self.name = first;
        if self.at_axis_separator() {
            let axis = Axis::from_name(first);
            if axis != Axis::Unknown {
                self.axis = axis;
                self.name = "";
                return LexKind::Axis;
            }
        }
        self.finish_name()
    }

    fn eat_ncname(&mut self) -> &'a str {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.eat_while(is_name_char);
        self.cursor.slice_from(start)
    }

    /// `::` follows, possibly after whitespace.
    fn at_axis_separator(&self) -> bool {
        self.cursor
            .remaining()
            .trim_start_matches(is_whitespace)
            .starts_with("::")
    }

    fn finish_name(&mut self) -> LexKind {
        self.can_be_function = self.cursor.current_char() == '(';

        let kind = disambiguate(LexKind::Name, self.name, self.prefix, self.prev_kind);
        if kind != LexKind::Name {
            self.name = "";
            self.can_be_function = false;
        }
        kind
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Axis, LexKind};
    use crate::{LexError, Scanner};

    #[test]
    fn test_simple_name() {
        let scanner = Scanner::new("para").unwrap();
        assert_eq!(scanner.kind(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "para");
        assert_eq!(scanner.prefix().unwrap(), "");
        assert!(!scanner.can_be_function().unwrap());
    }

    #[test]
    fn test_name_characters() {
        let scanner = Scanner::new("_a-b.c9 ").unwrap();
        assert_eq!(scanner.name().unwrap(), "_a-b.c9");
    }

    #[test]
    fn test_qualified_name() {
        let scanner = Scanner::new("xs:integer").unwrap();
        assert_eq!(scanner.prefix().unwrap(), "xs");
        assert_eq!(scanner.name().unwrap(), "integer");
        assert_eq!(scanner.raw_value(), "xs:integer");
    }

    #[test]
    fn test_qualified_wildcard() {
        let mut scanner = Scanner::new("svg:*/x").unwrap();
        assert_eq!(scanner.kind(), LexKind::Name);
        assert_eq!(scanner.prefix().unwrap(), "svg");
        assert_eq!(scanner.name().unwrap(), "*");
        assert_eq!(scanner.advance().unwrap(), LexKind::Slash);
    }

    #[test]
    fn test_colon_not_followed_by_name() {
        let mut scanner = Scanner::new("a: b").unwrap();
        assert_eq!(scanner.name().unwrap(), "a");
        assert_eq!(scanner.prefix().unwrap(), "");
        assert_eq!(scanner.advance().unwrap(), LexKind::Unknown);
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
    }

    #[test]
    fn test_can_be_function() {
        let scanner = Scanner::new("count(x)").unwrap();
        assert!(scanner.can_be_function().unwrap());

        let scanner = Scanner::new("count (x)").unwrap();
        assert!(!scanner.can_be_function().unwrap());

        let scanner = Scanner::new("fn:string()").unwrap();
        assert!(scanner.can_be_function().unwrap());
        assert_eq!(scanner.prefix().unwrap(), "fn");
    }

    #[test]
    fn test_axis() {
        let mut scanner = Scanner::new("child::para").unwrap();
        assert_eq!(scanner.kind(), LexKind::Axis);
        assert_eq!(scanner.axis().unwrap(), Axis::Child);
        assert!(matches!(scanner.name(), Err(LexError::InvalidUsage(_))));
        assert_eq!(scanner.advance().unwrap(), LexKind::DoubleColon);
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
    }

    #[test]
    fn test_axis_with_whitespace_before_separator() {
        let mut scanner = Scanner::new("ancestor-or-self ::node()").unwrap();
        assert_eq!(scanner.axis().unwrap(), Axis::AncestorOrSelf);
        assert_eq!(scanner.span().len(), "ancestor-or-self".len());
        assert_eq!(scanner.advance().unwrap(), LexKind::DoubleColon);
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
        assert!(scanner.can_be_function().unwrap());
    }

    #[test]
    fn test_self_axis() {
        let scanner = Scanner::new("self::*").unwrap();
        assert_eq!(scanner.axis().unwrap(), Axis::Self_);
    }

    #[test]
    fn test_unknown_axis_stays_name() {
        let mut scanner = Scanner::new("sibling::x").unwrap();
        assert_eq!(scanner.kind(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "sibling");
        assert_eq!(scanner.advance().unwrap(), LexKind::DoubleColon);
    }

    #[test]
    fn test_axis_name_without_separator_is_name() {
        let scanner = Scanner::new("child").unwrap();
        assert_eq!(scanner.kind(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "child");
    }

    #[test]
    fn test_keyword_names() {
        let scanner = Scanner::new("or").unwrap();
        assert_eq!(scanner.kind(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "or");

        let mut scanner = Scanner::new("a or b").unwrap();
        assert_eq!(scanner.advance().unwrap(), LexKind::Or);
        assert!(matches!(scanner.name(), Err(LexError::InvalidUsage(_))));
        assert_eq!(scanner.raw_value(), "or");
    }

    #[test]
    fn test_keyword_after_slash_is_name() {
        let mut scanner = Scanner::new("x/div").unwrap();
        scanner.advance().unwrap();
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "div");
    }

    #[test]
    fn test_qualified_keyword_is_name() {
        let mut scanner = Scanner::new("a p:mod").unwrap();
        assert_eq!(scanner.advance().unwrap(), LexKind::Name);
        assert_eq!(scanner.name().unwrap(), "mod");
    }
}
