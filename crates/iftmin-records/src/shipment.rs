//! Per-shipment records and item rows

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shipment group: everything between a grouping segment and the next
/// one (or the end of the message).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    /// Number of packages, truncated to a whole count
    pub packages: Option<i64>,

    /// Transport mode or movement code
    pub transport_mode: Option<String>,

    /// Destination city (location qualifier 7)
    pub destination_city: Option<String>,

    /// Destination country (location qualifier 25)
    pub destination_country: Option<String>,

    /// Routing code (location qualifier 193)
    pub route: Option<String>,

    /// Monetary amounts keyed by amount-type qualifier
    pub monetary: BTreeMap<String, f64>,

    /// Free-text commercial terms
    pub terms: ShipmentTerms,

    /// Consignee name and address
    pub consignee: Option<Consignee>,

    /// Gross and declared weights
    pub weights: Weights,

    /// Package dimensions in centimeters, set only when the measurement
    /// composite carries all of unit, length, width, and height
    pub dimensions: Option<Dimensions>,

    /// Shipment-scoped dates
    pub dates: ShipmentDates,

    /// Shipment-scoped references
    pub refs: ShipmentRefs,

    /// Item rows in source order
    pub items: Vec<Item>,
}

/// Delivery terms and export reason from free-text segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentTerms {
    /// Delivery terms (free-text subject AAR)
    pub delivery_terms: Option<String>,

    /// Reason for export (free-text subject AAH)
    pub reason_for_export: Option<String>,
}

/// Consignee name and address from the CN-qualified name/address segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Consignee {
    /// Name, both name lines space-joined and trimmed
    pub name: Option<String>,

    /// Street, sub-element separators rendered as spaces
    pub street: Option<String>,

    /// City name
    pub city: Option<String>,

    /// Country sub-entity (state/province)
    pub state: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// Country code
    pub country: Option<String>,
}

/// Gross and declared weights in kilograms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Gross weight (measurement subject WT)
    pub gross_kg: Option<f64>,

    /// Declared weight (measurement subject WX)
    pub declared_kg: Option<f64>,
}

/// Package dimensions in centimeters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in centimeters
    pub length_cm: Option<f64>,

    /// Width in centimeters
    pub width_cm: Option<f64>,

    /// Height in centimeters
    pub height_cm: Option<f64>,
}

/// Shipment-scoped dates, normalized when parseable, raw otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentDates {
    /// Scheduled delivery date (date code 17)
    pub scheduled_delivery: Option<String>,

    /// Pickup date/time (date code 200)
    pub pickup_time: Option<String>,

    /// Invoice date (date code 3)
    pub invoice_date: Option<String>,
}

/// Shipment-scoped reference values, dispatched by reference qualifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRefs {
    /// Carrier tracking reference (qualifier CR)
    pub tracking: Option<String>,

    /// Buyer order identifier (qualifier TB)
    pub order_id: Option<String>,

    /// Contact phone number (qualifier TE)
    pub phone: Option<String>,
}

/// One item row: an item-line segment paired with its trailing
/// product-reference segment.
///
/// An item is complete only once the reference is observed; a pending line
/// that never receives one is dropped, and a reference with no pending line
/// yields an item carrying only the reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Ordered quantity
    pub quantity: Option<f64>,

    /// Unit of measure code
    pub unit_of_measure: Option<String>,

    /// Unit price in the document currency
    pub unit_price: Option<f64>,

    /// Product reference (qualifier VP)
    pub product_ref: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipment_defaults_sparse() {
        let shipment = Shipment::default();
        assert!(shipment.packages.is_none());
        assert!(shipment.monetary.is_empty());
        assert!(shipment.consignee.is_none());
        assert!(shipment.dimensions.is_none());
        assert!(shipment.items.is_empty());
    }

    #[test]
    fn test_item_defaults_sparse() {
        let item = Item::default();
        assert!(item.quantity.is_none());
        assert!(item.product_ref.is_none());
    }
}
