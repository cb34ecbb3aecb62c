//! Tokenized segment representation

use serde::{Deserialize, Serialize};

/// A tokenized EDIFACT segment: tag plus ordered composite elements.
///
/// Elements are kept verbatim as produced by the tokenizer; the sub-element
/// separator is left unsplit for the decoders to interpret. A segment is
/// immutable once tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Segment tag (e.g. "NAD", "DTM")
    pub tag: String,

    /// Composite elements following the tag, in source order
    pub elements: Vec<String>,
}

impl Segment {
    /// Create a new segment
    pub fn new(tag: impl Into<String>, elements: Vec<String>) -> Self {
        Self {
            tag: tag.into(),
            elements,
        }
    }

    /// Segment tag
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All composite elements
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Element at a fixed position, absent beyond the last element
    pub fn element(&self, index: usize) -> Option<&str> {
        self.elements.get(index).map(String::as_str)
    }

    /// Last composite element, if any
    pub fn last_element(&self) -> Option<&str> {
        self.elements.last().map(String::as_str)
    }

    /// The elements re-joined with the element separator.
    ///
    /// Several location rules address the segment as one qualifier-prefixed
    /// composite with the element separator still embedded in it; this
    /// reconstructs that view, the same way item-line decoding re-joins its
    /// fields on the sub-element separator.
    pub fn joined_elements(&self, separator: char) -> String {
        self.elements.join(&separator.to_string())
    }
}
