//! Control-count decoding pass

use crate::numeric::{parse_count, parse_decimal};
use crate::syntax::SUB_ELEMENT_SEPARATOR;
use iftmin_records::{CountTotals, Segment};

/// Extract aggregate totals from count segments.
///
/// Composites are `qualifier:value`. Unknown qualifiers are ignored; a
/// non-numeric or missing value yields zero for the integer fields and
/// leaves the weight/value fields absent.
pub fn decode_counts(segments: &[Segment]) -> CountTotals {
    let mut totals = CountTotals::default();
    for segment in segments.iter().filter(|s| s.tag() == "CNT") {
        let Some(composite) = segment.element(0) else {
            continue;
        };
        let mut subs = composite.split(SUB_ELEMENT_SEPARATOR);
        let qualifier = subs.next().unwrap_or_default();
        let value = subs.next();
        match qualifier {
            "2" => totals.line_count = Some(parse_count(value.unwrap_or_default())),
            "7" => totals.total_gross_weight_kg = value.and_then(parse_decimal),
            "8" => totals.shipment_count = Some(parse_count(value.unwrap_or_default())),
            "12" => totals.total_value = value.and_then(parse_decimal),
            _ => {}
        }
    }
    totals
}
