//! Header decoding pass
//!
//! One pass over the whole segment sequence. Later occurrences of a
//! singleton segment overwrite earlier ones.

use crate::syntax::{ELEMENT_SEPARATOR, SUB_ELEMENT_SEPARATOR, leading_sub, second_sub};
use crate::timestamp;
use iftmin_records::{Header, Segment};

/// Extract interchange/message identity, dates, currency, terms, and
/// warehouse from the segment sequence.
pub fn decode_header(segments: &[Segment]) -> Header {
    let mut header = Header::default();
    for segment in segments {
        match segment.tag() {
            "UNB" => decode_interchange_identity(segment, &mut header),
            "UNH" => {
                header.message_ref = segment.element(0).map(str::to_string);
                header.message_type = segment.element(1).map(str::to_string);
            }
            "BGM" => {
                header.document_type = segment.element(0).map(str::to_string);
                header.manifest_number = segment.element(1).map(str::to_string);
                header.message_function = segment.element(2).map(str::to_string);
            }
            "DTM" => decode_header_date(segment, &mut header),
            "CUX" => {
                if let Some(composite) = segment.element(0) {
                    let currency = second_sub(composite).unwrap_or(composite);
                    header.currency = Some(currency.to_string());
                }
            }
            "TOD" => {
                if let Some(terms) = segment.element(1) {
                    header.terms = Some(terms.to_string());
                }
            }
            "LOC" => {
                if let Some(warehouse) = decode_warehouse(segment) {
                    header.warehouse = Some(warehouse);
                }
            }
            _ => {}
        }
    }
    header
}

fn decode_interchange_identity(segment: &Segment, header: &mut Header) {
    header.syntax_id = segment.element(0).map(str::to_string);
    header.sender = segment.element(1).map(|v| leading_sub(v).to_string());
    header.receiver = segment.element(2).map(|v| leading_sub(v).to_string());
    if let Some(stamp) = segment.element(3) {
        if stamp.contains(SUB_ELEMENT_SEPARATOR) {
            header.interchange_datetime = Some(
                timestamp::interchange_stamp(stamp).unwrap_or_else(|| stamp.to_string()),
            );
        }
    }
    header.interchange_control = segment.element(4).map(str::to_string);
}

/// Date composites are `code:value:format`; only codes 9 (message
/// datetime) and 10 (shipment date) land in the header.
fn decode_header_date(segment: &Segment, header: &mut Header) {
    let Some(composite) = segment.element(0) else {
        return;
    };
    let mut subs = composite.split(SUB_ELEMENT_SEPARATOR);
    let (Some(code), Some(value)) = (subs.next(), subs.next()) else {
        return;
    };
    let format_code = subs.next().unwrap_or("");
    let target = match code {
        "9" => &mut header.message_datetime,
        "10" => &mut header.shipment_date,
        _ => return,
    };
    *target = Some(timestamp::reformat_lossy(value, format_code));
}

/// Warehouse comes from a 198-qualified location composite, addressed with
/// the element separator still embedded in it.
///
/// Two distinct paths: the literal `198+WTAM` composite is mapped directly,
/// while any other 198-prefixed composite is split on the embedded element
/// separator and its second token taken. The paths are not equivalent and
/// are kept separate on purpose.
fn decode_warehouse(segment: &Segment) -> Option<String> {
    let composite = segment.joined_elements(ELEMENT_SEPARATOR);
    if composite == "198+WTAM" {
        return Some("WTAM".to_string());
    }
    if composite.starts_with("198") {
        return composite
            .split(ELEMENT_SEPARATOR)
            .nth(1)
            .map(str::to_string);
    }
    None
}
