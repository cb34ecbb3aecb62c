//! Shipment grouping and per-group decoding
//!
//! Groups are anchored on GID segments: each group spans from one GID up
//! to (excluding) the next, the last running to the end of the message.
//! Within a group, repeats overwrite earlier values.

use crate::items::extract_items;
use crate::numeric::parse_decimal;
use crate::syntax::{ELEMENT_SEPARATOR, SUB_ELEMENT_SEPARATOR, subs_as_spaces, trailing_sub};
use crate::timestamp;
use iftmin_records::{Consignee, Dimensions, Segment, Shipment};
use tracing::trace;

/// Tag of the grouping segment that anchors shipment boundaries
pub const GROUPING_TAG: &str = "GID";

/// Partition the sequence into per-shipment slices.
///
/// Zero grouping segments yield an empty list, not an error.
pub fn shipment_groups(segments: &[Segment]) -> Vec<&[Segment]> {
    let starts: Vec<usize> = segments
        .iter()
        .enumerate()
        .filter(|(_, s)| s.tag() == GROUPING_TAG)
        .map(|(index, _)| index)
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(segments.len());
            &segments[start..end]
        })
        .collect()
}

/// Decode one shipment group into a record.
pub fn decode_shipment(group: &[Segment]) -> Shipment {
    let mut shipment = Shipment::default();
    for segment in group {
        match segment.tag() {
            GROUPING_TAG => decode_packages(segment, &mut shipment),
            "TMD" => {
                if let Some(composite) = segment.element(0) {
                    shipment.transport_mode = Some(trailing_sub(composite).to_string());
                }
            }
            "LOC" => decode_location(segment, &mut shipment),
            "MOA" => decode_monetary(segment, &mut shipment),
            "FTX" => decode_free_text(segment, &mut shipment),
            "NAD" => {
                if segment.element(0) == Some("CN") {
                    shipment.consignee = Some(decode_consignee(segment));
                }
            }
            "MEA" => decode_measurement(segment, &mut shipment),
            "DIM" => decode_dimensions(segment, &mut shipment),
            "DTM" => decode_shipment_date(segment, &mut shipment),
            "RFF" => decode_reference(segment, &mut shipment),
            _ => {}
        }
    }
    shipment.items = extract_items(group);
    trace!(
        packages = ?shipment.packages,
        item_count = shipment.items.len(),
        "decoded shipment group"
    );
    shipment
}

/// The grouping composite is `sequence` then `quantity:unit`; the quantity
/// truncates to the package count.
fn decode_packages(segment: &Segment, shipment: &mut Shipment) {
    if let Some(composite) = segment.element(1) {
        if let Some((quantity, _unit)) = composite.split_once(SUB_ELEMENT_SEPARATOR) {
            if let Some(parsed) = parse_decimal(quantity) {
                shipment.packages = Some(parsed as i64);
            }
        }
    }
}

/// Locations are addressed as one qualifier-prefixed composite with the
/// element separator still embedded; the value is the last
/// separator-delimited token.
fn decode_location(segment: &Segment, shipment: &mut Shipment) {
    let composite = segment.joined_elements(ELEMENT_SEPARATOR);
    if composite.is_empty() {
        return;
    }
    let value = composite
        .rsplit(ELEMENT_SEPARATOR)
        .next()
        .unwrap_or_default()
        .to_string();
    if composite.starts_with('7') {
        shipment.destination_city = Some(value);
    } else if composite.starts_with("25") {
        shipment.destination_country = Some(value);
    } else if composite.starts_with("193") {
        shipment.route = Some(value);
    }
}

/// Monetary composites are `qualifier:amount`; unparseable amounts are
/// omitted from the mapping.
fn decode_monetary(segment: &Segment, shipment: &mut Shipment) {
    let Some(composite) = segment.element(0) else {
        return;
    };
    let mut subs = composite.split(SUB_ELEMENT_SEPARATOR);
    let qualifier = subs.next().unwrap_or_default();
    if let Some(amount) = subs.next().and_then(parse_decimal) {
        shipment.monetary.insert(qualifier.to_string(), amount);
    }
}

fn decode_free_text(segment: &Segment, shipment: &mut Shipment) {
    let text = || Some(segment.element(2).unwrap_or_default().trim().to_string());
    match segment.element(0) {
        Some("AAR") => shipment.terms.delivery_terms = text(),
        Some("AAH") => shipment.terms.reason_for_export = text(),
        _ => {}
    }
}

/// Consignee name spans two elements, space-joined when the second is
/// present, with stray element separators and spaces trimmed off the ends.
fn decode_consignee(segment: &Segment) -> Consignee {
    let name = segment.element(2).unwrap_or_default();
    let extra = segment.element(3).unwrap_or_default();
    let full = if extra.is_empty() {
        name.to_string()
    } else {
        format!("{name} {extra}")
    };
    Consignee {
        name: Some(full.trim_matches(|c| c == '+' || c == ' ').to_string()),
        street: segment.element(4).map(subs_as_spaces),
        city: segment.element(5).map(str::to_string),
        state: segment.element(6).map(str::to_string),
        postal_code: segment.element(7).map(str::to_string),
        country: segment.element(8).map(str::to_string),
    }
}

/// Weights come as `unit:value` in the last composite; WT is gross, WX is
/// declared. Without a sub-element separator there the value stays unset.
fn decode_measurement(segment: &Segment, shipment: &mut Shipment) {
    let subject = segment.element(0);
    if subject != Some("WT") && subject != Some("WX") {
        return;
    }
    let Some(last) = segment.last_element() else {
        return;
    };
    if let Some((_unit, raw)) = last.rsplit_once(SUB_ELEMENT_SEPARATOR) {
        let value = parse_decimal(raw);
        if subject == Some("WT") {
            shipment.weights.gross_kg = value;
        } else {
            shipment.weights.declared_kg = value;
        }
    }
}

/// Dimension composites are `unit:length:width:height`; anything shorter
/// leaves the dimensions unset.
fn decode_dimensions(segment: &Segment, shipment: &mut Shipment) {
    let Some(composite) = segment.element(1) else {
        return;
    };
    let parts: Vec<&str> = composite.split(SUB_ELEMENT_SEPARATOR).collect();
    if parts.len() >= 4 {
        shipment.dimensions = Some(Dimensions {
            length_cm: parse_decimal(parts[1]),
            width_cm: parse_decimal(parts[2]),
            height_cm: parse_decimal(parts[3]),
        });
    }
}

/// Same format table as the header dates, but shipment-scoped codes:
/// 17 scheduled delivery, 200 pickup, 3 invoice date.
fn decode_shipment_date(segment: &Segment, shipment: &mut Shipment) {
    let Some(composite) = segment.element(0) else {
        return;
    };
    let mut subs = composite.split(SUB_ELEMENT_SEPARATOR);
    let (Some(code), Some(value)) = (subs.next(), subs.next()) else {
        return;
    };
    let format_code = subs.next().unwrap_or("");
    let target = match code {
        "17" => &mut shipment.dates.scheduled_delivery,
        "200" => &mut shipment.dates.pickup_time,
        "3" => &mut shipment.dates.invoice_date,
        _ => return,
    };
    *target = Some(timestamp::reformat_lossy(value, format_code));
}

/// Reference dispatch by prefix qualifier: CR tracking, TB order, TE
/// phone. Product references belong to item extraction and VAT to the
/// party pass; neither is handled here.
fn decode_reference(segment: &Segment, shipment: &mut Shipment) {
    let Some(composite) = segment.element(0) else {
        return;
    };
    if let Some(value) = composite.strip_prefix("CR:") {
        shipment.refs.tracking = Some(value.to_string());
    } else if let Some(value) = composite.strip_prefix("TB:") {
        shipment.refs.order_id = Some(value.to_string());
    } else if let Some(value) = composite.strip_prefix("TE:") {
        shipment.refs.phone = Some(value.to_string());
    }
}
