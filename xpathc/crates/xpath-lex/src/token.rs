//! Token kind definitions.
//!
//! This module defines the closed sets the scanner classifies into:
//! [`LexKind`] for lexical kinds, [`Axis`] for step axes and [`Operator`]
//! for the semantic operator a parser maps operator tokens to. A [`Token`]
//! is a snapshot of the scanner's current token.

use std::fmt;

use xpath_util::Span;

use crate::error::{LexError, LexResult};

/// Lexical kind of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexKind {
    // ===== Operators =====
    /// `or`
    Or,
    /// `and`
    And,
    /// `=`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*` in operator position
    Multiply,
    /// `div`
    Divide,
    /// `mod`
    Modulo,
    /// Negation; assigned by parsers, never produced by the scanner
    UnaryMinus,
    /// `|`
    Union,

    // ===== Structural symbols =====
    /// `..`
    DoubleDot,
    /// `::`
    DoubleColon,
    /// `//`
    DoubleSlash,
    /// `(`
    LParens,
    /// `)`
    RParens,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `.`
    Dot,
    /// `@`
    At,
    /// `,`
    Comma,
    /// `*` in operand position (name test wildcard)
    Star,
    /// `/`
    Slash,
    /// `$`
    Dollar,
    /// `}`
    RBrace,

    // ===== Literals =====
    /// Number literal
    Number,
    /// Quoted string literal
    String,
    /// Name, optionally qualified with a prefix
    Name,

    // ===== Special =====
    /// Axis name followed by `::`
    Axis,
    /// End of the expression
    Eof,
    /// Unrecognized character, such as a lone `:` or `!`
    Unknown,
}

impl LexKind {
    /// Returns true for the 15 operator kinds.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::LexKind;
    ///
    /// assert!(LexKind::Divide.is_operator());
    /// assert!(!LexKind::Star.is_operator());
    /// ```
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            LexKind::Or
                | LexKind::And
                | LexKind::Eq
                | LexKind::Ne
                | LexKind::Lt
                | LexKind::Le
                | LexKind::Gt
                | LexKind::Ge
                | LexKind::Plus
                | LexKind::Minus
                | LexKind::Multiply
                | LexKind::Divide
                | LexKind::Modulo
                | LexKind::UnaryMinus
                | LexKind::Union
        )
    }

    /// Fixed display form for kinds whose printed form is not the lexeme.
    ///
    /// Fails for kinds without a canonical form (operators, numbers,
    /// axes, unknown characters, two-character symbols); render those
    /// from the raw lexeme instead.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::LexKind;
    ///
    /// assert_eq!(LexKind::Eof.describe().unwrap(), "<eof>");
    /// assert_eq!(LexKind::RBracket.describe().unwrap(), "]");
    /// assert!(LexKind::Number.describe().is_err());
    /// ```
    pub fn describe(self) -> LexResult<&'static str> {
        let text = match self {
            LexKind::Eof => "<eof>",
            LexKind::Name => "<name>",
            LexKind::String => "<string literal>",
            LexKind::LParens => "(",
            LexKind::RParens => ")",
            LexKind::LBracket => "[",
            LexKind::RBracket => "]",
            LexKind::Dot => ".",
            LexKind::At => "@",
            LexKind::Comma => ",",
            LexKind::Star => "*",
            LexKind::Slash => "/",
            LexKind::Dollar => "$",
            LexKind::RBrace => "}",
            _ => return Err(LexError::InvalidUsage("token kind has no fixed display form")),
        };
        Ok(text)
    }
}

impl fmt::Display for LexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Step axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// `ancestor`
    Ancestor,
    /// `ancestor-or-self`
    AncestorOrSelf,
    /// `attribute`
    Attribute,
    /// `child`
    Child,
    /// `descendant`
    Descendant,
    /// `descendant-or-self`
    DescendantOrSelf,
    /// `following`
    Following,
    /// `following-sibling`
    FollowingSibling,
    /// `namespace`
    Namespace,
    /// `parent`
    Parent,
    /// `preceding`
    Preceding,
    /// `preceding-sibling`
    PrecedingSibling,
    /// `self`
    Self_,
    /// Leading `/` of an absolute path; has no spelling
    Root,
    /// Not an axis
    #[default]
    Unknown,
}

impl Axis {
    /// Axes that can be spelled in an expression.
    pub const NAMED: [Axis; 13] = [
        Axis::Ancestor,
        Axis::AncestorOrSelf,
        Axis::Attribute,
        Axis::Child,
        Axis::Descendant,
        Axis::DescendantOrSelf,
        Axis::Following,
        Axis::FollowingSibling,
        Axis::Namespace,
        Axis::Parent,
        Axis::Preceding,
        Axis::PrecedingSibling,
        Axis::Self_,
    ];

    /// Resolve an axis spelling; `Unknown` when `name` is not an axis.
    ///
    /// # Example
    ///
    /// ```
    /// use xpath_lex::Axis;
    ///
    /// assert_eq!(Axis::from_name("following-sibling"), Axis::FollowingSibling);
    /// assert_eq!(Axis::from_name("para"), Axis::Unknown);
    /// ```
    pub fn from_name(name: &str) -> Axis {
        match name {
            "ancestor" => Axis::Ancestor,
            "ancestor-or-self" => Axis::AncestorOrSelf,
            "attribute" => Axis::Attribute,
            "child" => Axis::Child,
            "descendant" => Axis::Descendant,
            "descendant-or-self" => Axis::DescendantOrSelf,
            "following" => Axis::Following,
            "following-sibling" => Axis::FollowingSibling,
            "namespace" => Axis::Namespace,
            "parent" => Axis::Parent,
            "preceding" => Axis::Preceding,
            "preceding-sibling" => Axis::PrecedingSibling,
            "self" => Axis::Self_,
            _ => Axis::Unknown,
        }
    }

    /// The spelling of this axis, if it has one.
    pub const fn name(self) -> Option<&'static str> {
        let name = match self {
            Axis::Ancestor => "ancestor",
            Axis::AncestorOrSelf => "ancestor-or-self",
            Axis::Attribute => "attribute",
            Axis::Child => "child",
            Axis::Descendant => "descendant",
            Axis::DescendantOrSelf => "descendant-or-self",
            Axis::Following => "following",
            Axis::FollowingSibling => "following-sibling",
            Axis::Namespace => "namespace",
            Axis::Parent => "parent",
            Axis::Preceding => "preceding",
            Axis::PrecedingSibling => "preceding-sibling",
            Axis::Self_ => "self",
            Axis::Root | Axis::Unknown => return None,
        };
        Some(name)
    }
}

/// Semantic operator.
///
/// Mirrors the operator subset of [`LexKind`], so a parser can hold an
/// operator without re-testing the lexical kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical or
    Or,
    /// Logical and
    And,
    /// Equality
    Eq,
    /// Inequality
    Ne,
    /// Less than
    Lt,
    /// Less than or equal
    Le,
    /// Greater than
    Gt,
    /// Greater than or equal
    Ge,
    /// Addition
    Plus,
    /// Subtraction
    Minus,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Remainder
    Modulo,
    /// Negation
    UnaryMinus,
    /// Node-set union
    Union,
}

impl Operator {
    /// The operator as written in an expression.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Or => "or",
            Operator::And => "and",
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Plus => "+",
            Operator::Minus | Operator::UnaryMinus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "div",
            Operator::Modulo => "mod",
            Operator::Union => "|",
        }
    }
}

impl TryFrom<LexKind> for Operator {
    type Error = LexError;

    fn try_from(kind: LexKind) -> LexResult<Self> {
        let op = match kind {
            LexKind::Or => Operator::Or,
            LexKind::And => Operator::And,
            LexKind::Eq => Operator::Eq,
            LexKind::Ne => Operator::Ne,
            LexKind::Lt => Operator::Lt,
            LexKind::Le => Operator::Le,
            LexKind::Gt => Operator::Gt,
            LexKind::Ge => Operator::Ge,
            LexKind::Plus => Operator::Plus,
            LexKind::Minus => Operator::Minus,
            LexKind::Multiply => Operator::Multiply,
            LexKind::Divide => Operator::Divide,
            LexKind::Modulo => Operator::Modulo,
            LexKind::UnaryMinus => Operator::UnaryMinus,
            LexKind::Union => Operator::Union,
            _ => return Err(LexError::InvalidUsage("token kind is not an operator")),
        };
        Ok(op)
    }
}

impl From<Operator> for LexKind {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Or => LexKind::Or,
            Operator::And => LexKind::And,
            Operator::Eq => LexKind::Eq,
            Operator::Ne => LexKind::Ne,
            Operator::Lt => LexKind::Lt,
            Operator::Le => LexKind::Le,
            Operator::Gt => LexKind::Gt,
            Operator::Ge => LexKind::Ge,
            Operator::Plus => LexKind::Plus,
            Operator::Minus => LexKind::Minus,
            Operator::Multiply => LexKind::Multiply,
            Operator::Divide => LexKind::Divide,
            Operator::Modulo => LexKind::Modulo,
            Operator::UnaryMinus => LexKind::UnaryMinus,
            Operator::Union => LexKind::Union,
        }
    }
}

/// Kind-specific data carried by a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Payload<'a> {
    /// No payload
    None,
    /// Resolved axis of an `Axis` token
    Axis(Axis),
    /// Parts of a `Name` token
    Name {
        /// Namespace prefix, empty when unqualified
        prefix: &'a str,
        /// Local name, `*` for a `prefix:*` test
        name: &'a str,
        /// The name is immediately followed by `(`
        can_be_function: bool,
    },
    /// Body of a `String` token, quotes stripped
    String(&'a str),
}

/// Snapshot of one scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Lexical kind
    pub kind: LexKind,
    /// Location of the lexeme
    pub span: Span,
    /// The lexeme as written, or `<eof>`
    pub text: &'a str,
    /// Kind-specific data
    pub payload: Payload<'a>,
}

impl<'a> Token<'a> {
    /// Local name of a `Name` token
    pub fn name(&self) -> Option<&'a str> {
        match self.payload {
            Payload::Name { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Prefix of a `Name` token, empty when unqualified
    pub fn prefix(&self) -> Option<&'a str> {
        match self.payload {
            Payload::Name { prefix, .. } => Some(prefix),
            _ => None,
        }
    }

    /// Body of a `String` token
    pub fn value(&self) -> Option<&'a str> {
        match self.payload {
            Payload::String(value) => Some(value),
            _ => None,
        }
    }

    /// Axis of an `Axis` token
    pub fn axis(&self) -> Option<Axis> {
        match self.payload {
            Payload::Axis(axis) => Some(axis),
            _ => None,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload {
            Payload::Name { prefix, name, .. } if !prefix.is_empty() => {
                write!(f, "{}({}:{})", self.kind, prefix, name)
            },
            Payload::String(value) => write!(f, "{}({:?})", self.kind, value),
            Payload::Axis(axis) => write!(f, "{}({})", self.kind, axis.name().unwrap_or("?")),
            _ if self.kind == LexKind::Eof => write!(f, "{}", self.kind),
            _ => write!(f, "{}({})", self.kind, self.text),
        }
    }
}
