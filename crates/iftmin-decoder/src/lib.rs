//! # iftmin-decoder
//!
//! EDIFACT IFTMIN segment tokenizer and semantic extractors.
//!
//! The decoder turns one interchange text into an [`Interchange`] record:
//! tokenize into segments, run the header/counts/party passes over the
//! whole sequence, then partition on grouping segments and decode each
//! shipment group with its item list.
//!
//! Decoding is best-effort and synchronous. There is no error type here:
//! malformed or missing data degrades to absent fields, and any input
//! (including empty or non-conforming text) produces a possibly sparse
//! result. Callers treat every record field as optional.

/// Control-count extraction.
pub mod counts;
/// Interchange/message header extraction.
pub mod header;
/// Item-line / product-reference pairing.
pub mod items;
/// Numeric leniency helpers (decimal comma, truncating counts).
pub mod numeric;
/// Party extraction.
pub mod parties;
/// Shipment grouping and per-group extraction.
pub mod shipments;
/// Fixed separator profile.
pub mod syntax;
/// Date/time normalization with passthrough.
pub mod timestamp;
/// Raw text to segment sequence.
pub mod tokenizer;

pub use syntax::Separators;
pub use tokenizer::tokenize;

use iftmin_records::Interchange;
use tracing::debug;

/// Decode one complete interchange text.
///
/// Independent texts decode independently; callers concatenate results.
pub fn decode(text: &str) -> Interchange {
    let segments = tokenize(text);
    debug!(segment_count = segments.len(), "tokenized interchange");

    let header = header::decode_header(&segments);
    let counts = counts::decode_counts(&segments);
    let parties = parties::decode_parties(&segments);
    let shipments: Vec<_> = shipments::shipment_groups(&segments)
        .into_iter()
        .map(shipments::decode_shipment)
        .collect();

    debug!(
        shipment_count = shipments.len(),
        party_count = parties.len(),
        "decoded interchange"
    );

    Interchange {
        segments,
        header,
        counts,
        parties,
        shipments,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_decodes_to_empty_result() {
        let interchange = decode("");
        assert!(interchange.segments.is_empty());
        assert!(interchange.shipments.is_empty());
        assert!(interchange.parties.is_empty());
        assert_eq!(interchange.header, Default::default());
    }

    #[test]
    fn test_non_conforming_text_decodes_sparse() {
        let interchange = decode("this is not an interchange at all");
        assert_eq!(interchange.segments.len(), 1);
        assert!(interchange.shipments.is_empty());
        assert!(interchange.header.manifest_number.is_none());
    }

    #[test]
    fn test_segments_retained_on_the_record() {
        let interchange = decode("BGM+87+123+9'ZZZ+unknown'");
        assert_eq!(interchange.segments.len(), 2);
        assert_eq!(interchange.segments[1].tag(), "ZZZ");
    }
}
