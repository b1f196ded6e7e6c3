//! Span module - Expression location tracking.
//!
//! A [`Span`] is a half-open byte range `[start, end)` into an XPath
//! expression string. Scanners produce one span per token; diagnostics
//! carry the span of the offending lexeme.
//!
//! # Examples
//!
//! ```
//! use xpath_util::span::Span;
//!
//! let span = Span::new(2, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.slice("a[@id]"), Some("@id"));
//! ```

/// Half-open byte range into an expression.
///
/// # Examples
///
/// ```
/// use xpath_util::span::Span;
///
/// let span = Span::new(10, 20);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset, not less than `start`
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use xpath_util::span::Span;
    ///
    /// assert!(Span::new(3, 3).is_empty());
    /// assert!(!Span::new(3, 4).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Clamp the span so it lies within a text of `len` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use xpath_util::span::Span;
    ///
    /// assert_eq!(Span::new(4, 40).clamp_to(10), Span::new(4, 10));
    /// assert_eq!(Span::new(12, 40).clamp_to(10), Span::new(10, 10));
    /// ```
    #[inline]
    pub fn clamp_to(self, len: usize) -> Span {
        let end = self.end.min(len);
        Span {
            start: self.start.min(end),
            end,
        }
    }

    /// Returns the text covered by this span, or `None` if the span is out
    /// of bounds or splits a character.
    #[inline]
    pub fn slice(self, text: &str) -> Option<&str> {
        text.get(self.start..self.end)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
