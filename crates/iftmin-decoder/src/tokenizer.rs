//! Segment tokenizer
//!
//! Splits raw interchange text into an ordered sequence of segments. Line
//! breaks are stripped wherever they occur, so wrapped files tokenize the
//! same as single-line ones. No release-character handling: an escape
//! indicator before a separator is not honored.

use crate::syntax::Separators;
use iftmin_records::Segment;
use tracing::trace;

/// Tokenize interchange text with the default separator profile.
///
/// Empty input yields an empty sequence. Segments with unrecognized tags
/// are retained; downstream decoders ignore them.
pub fn tokenize(text: &str) -> Vec<Segment> {
    tokenize_with(text, Separators::default())
}

/// Tokenize interchange text with an explicit separator profile.
pub fn tokenize_with(text: &str, separators: Separators) -> Vec<Segment> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '\n' && *c != '\r')
        .collect();

    let mut segments = Vec::new();
    for raw in cleaned.split(separators.segment) {
        if raw.is_empty() {
            continue;
        }
        let mut chunks = raw.split(separators.element);
        let tag = chunks.next().unwrap_or("").trim().to_string();
        let elements: Vec<String> = chunks.map(str::to_string).collect();
        trace!(tag = %tag, element_count = elements.len(), "tokenized segment");
        segments.push(Segment::new(tag, elements));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_simple_segment() {
        let segments = tokenize("BGM+87+1027214650005003+9'");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tag(), "BGM");
        assert_eq!(segments[0].elements(), ["87", "1027214650005003", "9"]);
    }

    #[test]
    fn test_tokenize_keeps_sub_elements_unsplit() {
        let segments = tokenize("DTM+9:202510130023:203'");
        assert_eq!(segments[0].element(0), Some("9:202510130023:203"));
    }

    #[test]
    fn test_tokenize_strips_line_breaks() {
        let wrapped = "BGM+87+10272'\r\nDTM+9:202510130023:203'\nCNT+2:6'";
        let segments = tokenize(wrapped);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].tag(), "DTM");
    }

    #[test]
    fn test_tokenize_line_break_inside_segment() {
        // A wrap mid-segment must not split the segment
        let segments = tokenize("BGM+87+10272\n14650005003+9'");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].element(1), Some("1027214650005003"));
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n  ").is_empty());
    }

    #[test]
    fn test_tokenize_discards_empty_fragments() {
        let segments = tokenize("''BGM+87''");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].tag(), "BGM");
    }

    #[test]
    fn test_tokenize_retains_unrecognized_tags() {
        let segments = tokenize("TSR+1+5+4'M OA+141:0'");
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].tag(), "TSR");
        assert_eq!(segments[1].tag(), "M OA");
    }

    #[test]
    fn test_tokenize_no_escape_handling() {
        // "?" before a separator is kept literally and does not protect it
        let segments = tokenize("NAD+CN++X++No?:2 K?:1'");
        assert_eq!(segments[0].element(4), Some("No?:2 K?:1"));
    }

    #[test]
    fn test_tokenize_empty_elements_preserved() {
        let segments = tokenize("TOD++PP'");
        assert_eq!(segments[0].elements(), ["", "PP"]);
    }
}
