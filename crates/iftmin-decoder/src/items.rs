//! Item-line / product-reference pairing
//!
//! Items come as an item-line segment (PCI) whose trailing reference
//! segment (RFF with qualifier VP) completes it. The pairing protocol is a
//! single pending slot: an item-line arms it, the next product reference
//! within the group emits and clears it. The slot holds at most one line,
//! so a second item-line before a reference silently drops the first.

use crate::numeric::parse_decimal;
use crate::syntax::SUB_ELEMENT_SEPARATOR;
use iftmin_records::{Item, Segment};
use tracing::trace;

/// Tag of the item-line segment
pub const ITEM_LINE_TAG: &str = "PCI";
/// Reference prefix that completes a pending item
pub const PRODUCT_REF_PREFIX: &str = "VP:";

/// The pending-item slot: idle, or holding a line that awaits its
/// product reference.
#[derive(Debug, Default, PartialEq)]
enum PendingLine {
    #[default]
    Idle,
    Awaiting(Item),
}

/// Extract the ordered item list from one shipment group.
///
/// An item-line with no following product reference before the next
/// item-line or the group end is dropped, never emitted. A product
/// reference with no pending line emits an item holding only the
/// reference.
pub fn extract_items(group: &[Segment]) -> Vec<Item> {
    let mut items = Vec::new();
    let mut pending = PendingLine::Idle;

    for segment in group {
        match segment.tag() {
            ITEM_LINE_TAG if !segment.elements().is_empty() => {
                if let PendingLine::Awaiting(_) = pending {
                    trace!("item line replaced before its reference arrived; dropping");
                }
                pending = PendingLine::Awaiting(decode_item_line(segment));
            }
            "RFF" => {
                let Some(reference) = segment
                    .element(0)
                    .and_then(|c| c.strip_prefix(PRODUCT_REF_PREFIX))
                else {
                    continue;
                };
                let mut item = match std::mem::take(&mut pending) {
                    PendingLine::Awaiting(item) => item,
                    PendingLine::Idle => Item::default(),
                };
                item.product_ref = Some(reference.to_string());
                items.push(item);
            }
            _ => {}
        }
    }
    items
}

/// Positional extraction over the re-joined field list: the full list is
/// the composites joined on the sub-element separator and re-split, with
/// quantity, unit of measure, and unit price at the 4th-, 3rd-, and
/// 2nd-to-last positions.
fn decode_item_line(segment: &Segment) -> Item {
    let joined = segment
        .elements()
        .join(&SUB_ELEMENT_SEPARATOR.to_string());
    let fields: Vec<&str> = joined.split(SUB_ELEMENT_SEPARATOR).collect();
    let len = fields.len();
    Item {
        quantity: (len >= 4).then(|| fields[len - 4]).and_then(parse_decimal),
        unit_of_measure: (len >= 3).then(|| fields[len - 3].to_string()),
        unit_price: (len >= 2).then(|| fields[len - 2]).and_then(parse_decimal),
        product_ref: None,
    }
}
