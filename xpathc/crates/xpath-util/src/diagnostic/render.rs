//! Bounded context rendering for expression diagnostics.
//!
//! The context line shows the expression split into three zones around the
//! error span:
//!
//! ```text
//! ...text before the span -->span text<-- text after the span...
//! ```
//!
//! Each zone is limited to [`TRIM_SIZE`] characters. The text before keeps
//! its tail, the text after keeps its head, and an overlong span keeps
//! `TRIM_SIZE / 2` characters from each end.

use crate::Span;

/// Maximum number of characters shown per zone.
pub const TRIM_SIZE: usize = 32;

/// Marker inserted where characters were elided.
pub const TRIM_MARKER: &str = "...";

const SPAN_OPEN: &str = " -->";
const SPAN_CLOSE: &str = "<-- ";

/// Which part of an overlong zone is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Trim {
    /// Drop the head, keep the tail
    Left,
    /// Keep the head, drop the tail
    Right,
    /// Keep both ends, drop the middle
    Middle,
}

fn push_trimmed(out: &mut String, text: &str, trim: Trim) {
    let count = text.chars().count();
    if count <= TRIM_SIZE {
        out.push_str(text);
        return;
    }

    match trim {
        Trim::Left => {
            out.push_str(TRIM_MARKER);
            out.extend(text.chars().skip(count - TRIM_SIZE));
        },
        Trim::Right => {
            out.extend(text.chars().take(TRIM_SIZE));
            out.push_str(TRIM_MARKER);
        },
        Trim::Middle => {
            let half = TRIM_SIZE / 2;
            out.extend(text.chars().take(half));
            out.push_str(TRIM_MARKER);
            out.extend(text.chars().skip(count - half));
        },
    }
}

/// Render the context line for `span` within `source`.
///
/// Returns an empty string for an empty source. The span is clamped to
/// the source; a span that splits a character renders that zone empty.
///
/// # Examples
///
/// ```
/// use xpath_util::diagnostic::render_context;
/// use xpath_util::Span;
///
/// assert_eq!(render_context("a + 'b", Span::new(4, 6)), "a +  -->'b<-- ");
/// assert_eq!(render_context("", Span::default()), "");
/// ```
pub fn render_context(source: &str, span: Span) -> String {
    if source.is_empty() {
        return String::new();
    }

    let span = span.clamp_to(source.len());
    let before = source.get(..span.start).unwrap_or_default();
    let after = source.get(span.end..).unwrap_or_default();

    let mut out = String::with_capacity(3 * TRIM_SIZE + 16);
    push_trimmed(&mut out, before, Trim::Left);

    if !span.is_empty() {
        out.push_str(SPAN_OPEN);
        push_trimmed(&mut out, span.slice(source).unwrap_or_default(), Trim::Middle);
        out.push_str(SPAN_CLOSE);
    }

    push_trimmed(&mut out, after, Trim::Right);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trimmed(text: &str, trim: Trim) -> String {
        let mut out = String::new();
        push_trimmed(&mut out, text, trim);
        out
    }

    #[test]
    fn test_short_zones_are_untouched() {
        for trim in [Trim::Left, Trim::Right, Trim::Middle] {
            assert_eq!(trimmed("abc", trim), "abc");
            assert_eq!(trimmed(&"x".repeat(TRIM_SIZE), trim), "x".repeat(TRIM_SIZE));
        }
    }

    #[test]
    fn test_left_trim_keeps_tail() {
        let text = format!("{}{}", "a".repeat(10), "b".repeat(32));
        assert_eq!(trimmed(&text, Trim::Left), format!("...{}", "b".repeat(32)));
    }

    #[test]
    fn test_right_trim_keeps_head() {
        let text = format!("{}{}", "a".repeat(32), "b".repeat(10));
        assert_eq!(trimmed(&text, Trim::Right), format!("{}...", "a".repeat(32)));
    }

    #[test]
    fn test_middle_trim_keeps_both_ends() {
        let text = format!("{}{}{}", "a".repeat(16), "m".repeat(20), "z".repeat(16));
        assert_eq!(
            trimmed(&text, Trim::Middle),
            format!("{}...{}", "a".repeat(16), "z".repeat(16))
        );
    }

    #[test]
    fn test_trim_counts_characters_not_bytes() {
        let text = "é".repeat(33);
        let out = trimmed(&text, Trim::Right);
        assert_eq!(out, format!("{}...", "é".repeat(32)));
    }

    #[test]
    fn test_context_marks_span() {
        assert_eq!(render_context("1e10", Span::new(0, 4)), " -->1e10<-- ");
        assert_eq!(render_context("a | b", Span::new(2, 3)), "a  -->|<--  b");
    }

    #[test]
    fn test_zero_length_span_has_no_markers() {
        assert_eq!(render_context("a/b", Span::new(1, 1)), "a/b");
        assert_eq!(render_context("a/b", Span::new(3, 3)), "a/b");
    }

    #[test]
    fn test_empty_source_has_no_context() {
        assert_eq!(render_context("", Span::new(0, 0)), "");
        assert_eq!(render_context("", Span::new(0, 5)), "");
    }

    #[test]
    fn test_long_prefix_gets_single_leading_ellipsis() {
        let source = format!("{}$", "p".repeat(40));
        let out = render_context(&source, Span::new(40, 41));
        assert_eq!(out, format!("...{} -->$<-- ", "p".repeat(32)));
        assert_eq!(out.matches(TRIM_MARKER).count(), 1);
    }

    #[test]
    fn test_long_suffix_gets_single_trailing_ellipsis() {
        let source = format!("${}", "s".repeat(40));
        let out = render_context(&source, Span::new(0, 1));
        assert_eq!(out, format!(" -->$<-- {}...", "s".repeat(32)));
    }

    #[test]
    fn test_long_span_is_elided_in_the_middle() {
        let body = format!("{}{}{}", "h".repeat(16), "m".repeat(10), "t".repeat(16));
        let source = format!("'{}", body);
        let out = render_context(&source, Span::new(0, source.len()));
        assert_eq!(
            out,
            format!(" -->'{}...{}<-- ", "h".repeat(15), "t".repeat(16))
        );
    }

    #[test]
    fn test_out_of_range_span_is_clamped() {
        assert_eq!(render_context("abc", Span::new(1, 99)), "a -->bc<-- ");
        assert_eq!(render_context("abc", Span::new(50, 99)), "abc");
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let source = "count(//item[@price > 10]) div 3";
        let span = Span::new(13, 19);
        assert_eq!(render_context(source, span), render_context(source, span));
    }
}
