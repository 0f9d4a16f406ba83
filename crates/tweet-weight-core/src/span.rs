//! Entity spans in code-point space.
//!
//! Extractors find entities with byte offsets (that is what `regex` and
//! `unicode-segmentation` report) and convert them to code-point indices
//! through [`CodePointMap`] before handing them to the scanner.

use std::collections::HashMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A URL or emoji occurrence: the half-open code-point range `start..end`
/// and the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Span {
    /// Code-point index of the first character.
    pub start: usize,
    /// Code-point index one past the last character.
    pub end: usize,
    /// The matched text.
    pub text: String,
}

impl Span {
    /// Number of code points covered.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers nothing.
    pub const fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// First code point of the matched text.
    pub fn first_char(&self) -> Option<char> {
        self.text.chars().next()
    }
}

/// Spans from one extractor keyed by their start index.
///
/// Keys are unique because a single extractor never produces overlapping
/// spans.
#[derive(Debug, Clone, Default)]
pub struct SpanIndex {
    by_start: HashMap<usize, Span>,
}

impl SpanIndex {
    /// Index `spans` by start position.
    pub fn new(spans: impl IntoIterator<Item = Span>) -> Self {
        Self {
            by_start: spans.into_iter().map(|span| (span.start, span)).collect(),
        }
    }

    /// The span starting at code-point `index`, if any.
    pub fn starting_at(&self, index: usize) -> Option<&Span> {
        self.by_start.get(&index)
    }

    /// Number of indexed spans.
    pub fn len(&self) -> usize {
        self.by_start.len()
    }

    /// Whether no spans are indexed.
    pub fn is_empty(&self) -> bool {
        self.by_start.is_empty()
    }
}

/// Byte offset to code-point index conversion for one string.
pub(crate) struct CodePointMap {
    byte_starts: Vec<usize>,
}

impl CodePointMap {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            byte_starts: text.char_indices().map(|(byte, _)| byte).collect(),
        }
    }

    /// Code-point index of the character starting at `byte`.
    ///
    /// `byte` must lie on a char boundary; the string length maps to the
    /// number of code points.
    pub(crate) fn char_index(&self, byte: usize) -> usize {
        match self.byte_starts.binary_search(&byte) {
            Ok(idx) | Err(idx) => idx,
        }
    }

    /// Build a [`Span`] from a byte range of `text`.
    pub(crate) fn span(&self, text: &str, start: usize, end: usize) -> Span {
        Span {
            start: self.char_index(start),
            end: self.char_index(end),
            text: text[start..end].to_string(),
        }
    }
}
