//! Fixed separator profile and sub-element helpers
//!
//! One trading-partner profile is handled: the default EDIFACT separators,
//! assumed rather than discovered from a service-string-advice segment.
//! Release (escape) characters are not honored.

/// Segment terminator for this profile
pub const SEGMENT_TERMINATOR: char = '\'';
/// Element separator for this profile
pub const ELEMENT_SEPARATOR: char = '+';
/// Sub-element (component) separator for this profile
pub const SUB_ELEMENT_SEPARATOR: char = ':';

/// Separators used when tokenizing an interchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Segment terminator (default '\'')
    pub segment: char,
    /// Element separator (default '+')
    pub element: char,
    /// Sub-element separator (default ':')
    pub sub_element: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            segment: SEGMENT_TERMINATOR,
            element: ELEMENT_SEPARATOR,
            sub_element: SUB_ELEMENT_SEPARATOR,
        }
    }
}

/// The sub-element before the first separator, or the whole composite when
/// no separator is present.
pub fn leading_sub(composite: &str) -> &str {
    composite
        .split(SUB_ELEMENT_SEPARATOR)
        .next()
        .unwrap_or(composite)
}

/// The sub-element after the last separator, or the whole composite when
/// no separator is present.
pub fn trailing_sub(composite: &str) -> &str {
    composite
        .rsplit(SUB_ELEMENT_SEPARATOR)
        .next()
        .unwrap_or(composite)
}

/// The second sub-element, absent when the composite has fewer than two.
pub fn second_sub(composite: &str) -> Option<&str> {
    composite.split(SUB_ELEMENT_SEPARATOR).nth(1)
}

/// Sub-element separators rendered as literal spaces.
pub fn subs_as_spaces(composite: &str) -> String {
    composite.replace(SUB_ELEMENT_SEPARATOR, " ")
}
