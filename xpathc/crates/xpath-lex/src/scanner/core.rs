//! Core scanner implementation.
//!
//! This module contains the `Scanner` struct, its current-token accessors
//! and the character dispatch.

use tracing::{debug, trace};
use xpath_util::{DiagnosticBuilder, Span, XPathError};

use crate::cursor::Cursor;
use crate::error::{LexError, LexResult};
use crate::token::{Axis, LexKind, Payload, Token};

/// Scanner for XPath expressions.
///
/// The scanner always holds one current token. Read it through the
/// accessors, then call [`advance`](Scanner::advance) to move on. The first
/// token is scanned by the constructor.
///
/// # Example
///
/// ```
/// use xpath_lex::{LexKind, Scanner};
///
/// let mut scanner = Scanner::new("a or b").unwrap();
/// assert_eq!(scanner.kind(), LexKind::Name);
/// assert_eq!(scanner.name().unwrap(), "a");
///
/// assert_eq!(scanner.advance().unwrap(), LexKind::Or);
/// assert_eq!(scanner.advance().unwrap(), LexKind::Name);
/// assert_eq!(scanner.advance().unwrap(), LexKind::Eof);
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    /// Character cursor over the expression.
    pub(crate) cursor: Cursor<'a>,

    /// Kind of the current token.
    pub(crate) kind: LexKind,

    /// Start of the current token (byte offset).
    pub(crate) lex_start: usize,

    /// End of the previous token.
    pub(crate) prev_lex_end: usize,

    /// Kind of the previous token; `None` before the first token.
    pub(crate) prev_kind: Option<LexKind>,

    pub(crate) name: &'a str,
    pub(crate) prefix: &'a str,
    pub(crate) value: &'a str,
    pub(crate) can_be_function: bool,
    pub(crate) axis: Axis,

    /// Error to hand out on the next iterator step.
    pub(crate) pending: Option<XPathError>,

    /// The iterator has yielded `Eof` or an error.
    pub(crate) exhausted: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned on the first token of `source`.
    pub fn new(source: &'a str) -> LexResult<Self> {
        Self::with_offset(source, 0)
    }

    /// Creates a scanner positioned on the first token at or after `start`.
    ///
    /// Fails with [`LexError::OffsetOutOfRange`] unless `start` is a
    /// character boundary strictly inside `source`, and with
    /// [`LexError::Syntax`] if the first token is malformed.
    pub fn with_offset(source: &'a str, start: usize) -> LexResult<Self> {
        if start >= source.len() || !source.is_char_boundary(start) {
            return Err(LexError::OffsetOutOfRange {
                offset: start,
                len: source.len(),
            });
        }

        let mut cursor = Cursor::new(source);
        cursor.set_position(start);

        let mut scanner = Self {
            cursor,
            kind: LexKind::Unknown,
            lex_start: start,
            prev_lex_end: start,
            prev_kind: None,
            name: "",
            prefix: "",
            value: "",
            can_be_function: false,
            axis: Axis::Unknown,
            pending: None,
            exhausted: false,
        };
        scanner.next_lex(None)?;
        Ok(scanner)
    }

    /// Moves to the next token and returns its kind.
    ///
    /// Once the current token is `Eof`, further calls return `Eof` and
    /// leave the scanner untouched.
    pub fn advance(&mut self) -> Result<LexKind, XPathError> {
        if self.kind == LexKind::Eof {
            return Ok(LexKind::Eof);
        }
        let prev = Some(self.kind);
        self.next_lex(prev)?;
        Ok(self.kind)
    }

    fn next_lex(&mut self, prev: Option<LexKind>) -> Result<(), XPathError> {
        self.prev_lex_end = self.cursor.position();
        self.prev_kind = prev;
        self.name = "";
        self.prefix = "";
        self.value = "";
        self.can_be_function = false;
        self.axis = Axis::Unknown;

        self.cursor.skip_whitespace();
        self.lex_start = self.cursor.position();

        match self.dispatch() {
            Ok(kind) => {
                self.kind = kind;
                trace!(kind = ?kind, start = self.lex_start, end = self.cursor.position(), "token");
                Ok(())
            },
            Err(err) => {
                self.kind = LexKind::Unknown;
                debug!(kind = %err.kind(), span = %err.span(), "lexical error");
                Err(err)
            },
        }
    }

    fn dispatch(&mut self) -> Result<LexKind, XPathError> {
        if self.cursor.is_at_end() {
            return Ok(LexKind::Eof);
        }

        let kind = match self.cursor.current_char() {
            '(' => self.single(LexKind::LParens),
            ')' => self.single(LexKind::RParens),
            '[' => self.single(LexKind::LBracket),
            ']' => self.single(LexKind::RBracket),
            '@' => self.single(LexKind::At),
            ',' => self.single(LexKind::Comma),
            '$' => self.single(LexKind::Dollar),
            '}' => self.single(LexKind::RBrace),
            '|' => self.single(LexKind::Union),
            '+' => self.single(LexKind::Plus),
            '-' => self.single(LexKind::Minus),
            '=' => self.single(LexKind::Eq),
            '.' => self.lex_dot()?,
            ':' => self.lex_colon(),
            '*' => self.lex_star(),
            '/' => self.lex_slash(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            quote @ ('"' | '\'') => self.lex_string(quote)?,
            c if crate::chars::is_digit(c) => self.lex_number()?,
            c if crate::chars::is_name_start(c) => self.lex_name(),
            _ => self.single(LexKind::Unknown),
        };
        Ok(kind)
    }

    /// Consumes one character as a token of `kind`.
    fn single(&mut self, kind: LexKind) -> LexKind {
        self.cursor.advance();
        kind
    }

    /// Span-anchored error constructors for the current token.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::{LexKind, Scanner};
    ///
    /// let mut scanner = Scanner::new("a b").unwrap();
    /// scanner.advance().unwrap();
    /// let err = scanner.diagnostics().eof_expected(scanner.raw_value());
    /// assert_eq!(err.span(), scanner.span());
    /// ```
    pub fn diagnostics(&self) -> DiagnosticBuilder<'a> {
        DiagnosticBuilder::new(self.source(), self.span())
    }

    // ===== Current token =====

    /// The full expression
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Kind of the current token
    pub fn kind(&self) -> LexKind {
        self.kind
    }

    /// Start offset of the current token
    pub fn lex_start(&self) -> usize {
        self.lex_start
    }

    /// Length in bytes of the current token
    pub fn lex_size(&self) -> usize {
        self.cursor.position() - self.lex_start
    }

    /// End offset of the previous token
    pub fn prev_lex_end(&self) -> usize {
        self.prev_lex_end
    }

    /// Kind of the previous token, `None` on the first token
    pub fn prev_kind(&self) -> Option<LexKind> {
        self.prev_kind
    }

    /// Span of the current token
    pub fn span(&self) -> Span {
        Span::new(self.lex_start, self.cursor.position())
    }

    /// The current lexeme as written, or `<eof>` at the end.
    pub fn raw_value(&self) -> &'a str {
        if self.kind == LexKind::Eof {
            "<eof>"
        } else {
            self.cursor.slice_from(self.lex_start)
        }
    }

    /// Resolved axis of an `Axis` token.
    pub fn axis(&self) -> LexResult<Axis> {
        if self.kind != LexKind::Axis || self.axis == Axis::Unknown {
            return Err(LexError::InvalidUsage("not an axis"));
        }
        Ok(self.axis)
    }

    /// Local name of a `Name` token.
    pub fn name(&self) -> LexResult<&'a str> {
        self.expect_kind(LexKind::Name, "not a name")?;
        Ok(self.name)
    }

    /// Prefix of a `Name` token; empty when unqualified.
    pub fn prefix(&self) -> LexResult<&'a str> {
        self.expect_kind(LexKind::Name, "not a name")?;
        Ok(self.prefix)
    }

    /// Body of a `String` token, without quotes.
    pub fn value(&self) -> LexResult<&'a str> {
        self.expect_kind(LexKind::String, "not a string value")?;
        Ok(self.value)
    }

    /// Whether a `Name` token is immediately followed by `(`.
    pub fn can_be_function(&self) -> LexResult<bool> {
        self.expect_kind(LexKind::Name, "not a name")?;
        Ok(self.can_be_function)
    }

    fn expect_kind(&self, kind: LexKind, message: &'static str) -> LexResult<()> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(LexError::InvalidUsage(message))
        }
    }

    /// Snapshot of the current token.
    pub fn token(&self) -> Token<'a> {
        let payload = match self.kind {
            LexKind::Name => Payload::Name {
                prefix: self.prefix,
                name: self.name,
                can_be_function: self.can_be_function,
            },
            LexKind::String => Payload::String(self.value),
            LexKind::Axis => Payload::Axis(self.axis),
            _ => Payload::None,
        };
        Token {
            kind: self.kind,
            span: self.span(),
            text: self.raw_value(),
            payload,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token<'a>, XPathError>;

    /// Yields the current token, then advances. The `Eof` token is yielded
    /// once; a lexical error is yielded after the last good token and ends
    /// the iteration.
    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            self.exhausted = true;
            return Some(Err(err));
        }
        if self.exhausted {
            return None;
        }

        let token = self.token();
        if token.kind == LexKind::Eof {
            self.exhausted = true;
        } else if let Err(err) = self.advance() {
            self.pending = Some(err);
        }
        Some(Ok(token))
    }
}

/// Scans `source` to the end and collects every token, `Eof` included.
///
/// # Example
///
/// ```
/// use xpath_lex::{tokenize, LexKind};
///
/// let kinds: Vec<_> = tokenize("1+2").unwrap().iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [LexKind::Number, LexKind::Plus, LexKind::Number, LexKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token<'_>>> {
    let scanner = Scanner::new(source)?;
    let tokens = scanner.collect::<Result<Vec<_>, _>>()?;
    Ok(tokens)
}
