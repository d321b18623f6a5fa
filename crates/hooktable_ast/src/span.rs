//! Byte spans into the source buffer.

use std::ops::Range;

/// A span representing a range in source text.
///
/// Uses byte offsets (0-indexed) for efficient slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Span {
    /// Start byte offset (0-indexed, inclusive).
    pub start: u32,
    /// End byte offset (0-indexed, exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the span as a `usize` range suitable for slicing.
    #[inline]
    pub const fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// Returns the source text covered by this span.
    ///
    /// Out-of-bounds or non-boundary spans yield `None` rather than panicking.
    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(15));
        assert!(!span.contains(5));
        assert!(!span.contains(20));
    }

    #[test]
    fn test_empty_span() {
        let span = Span::new(5, 5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[test]
    fn test_span_contains_start() {
        let span = Span::new(10, 20);
        assert!(span.contains(10)); // Start is inclusive
    }

    #[test]
    fn test_span_slice() {
        let source = "| [push](url) |";
        let span = Span::new(3, 7);
        assert_eq!(span.slice(source), Some("push"));
        assert_eq!(span.range(), 3..7);
    }

    #[test]
    fn test_span_slice_out_of_bounds() {
        let span = Span::new(3, 100);
        assert_eq!(span.slice("short"), None);
    }

    #[test]
    fn test_span_slice_not_char_boundary() {
        // "é" is two bytes; offset 1 splits it.
        let span = Span::new(1, 2);
        assert_eq!(span.slice("é"), None);
    }
}
