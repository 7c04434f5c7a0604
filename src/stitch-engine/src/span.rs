//! Match spans and grapheme-aware boundary checks.
//!
//! Spans are byte ranges into the document. Byte offsets produced by
//! substring search always sit on `char` boundaries, but a `char` boundary
//! can still fall inside a user-perceived character (an emoji with a skin
//! tone modifier, a combining accent sequence). [`GraphemeBoundaries`]
//! lets matchers reject candidate spans that would bisect such a cluster.

use unicode_segmentation::UnicodeSegmentation;

/// A half-open byte range `[start, end)` into a document, denoting exactly
/// the text a replacement substitutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan {
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl MatchSpan {
    /// Creates a new span. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Length of the matched text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span is a pure insertion point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the matched text within `content`.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds for `content` or does not lie on
    /// `char` boundaries, which cannot happen for spans produced by the
    /// matchers in this crate.
    pub fn slice<'a>(&self, content: &'a str) -> &'a str {
        &content[self.start..self.end]
    }
}

/// Sorted byte offsets of the extended grapheme cluster boundaries of a
/// document, including `0` and the document length.
///
/// Built once per matcher invocation so each candidate span costs a binary
/// search rather than a re-segmentation.
pub(crate) struct GraphemeBoundaries(Vec<usize>);

impl GraphemeBoundaries {
    /// Segments `content` and records every cluster boundary.
    pub(crate) fn of(content: &str) -> Self {
        let mut offsets: Vec<usize> = content.grapheme_indices(true).map(|(i, _)| i).collect();
        offsets.push(content.len());
        Self(offsets)
    }

    /// Whether `offset` falls on a cluster boundary.
    pub(crate) fn contains(&self, offset: usize) -> bool {
        self.0.binary_search(&offset).is_ok()
    }

    /// Whether both endpoints of `span` fall on cluster boundaries.
    pub(crate) fn aligns(&self, span: MatchSpan) -> bool {
        self.contains(span.start) && self.contains(span.end)
    }
}
