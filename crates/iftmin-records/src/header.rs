//! Interchange header fields and aggregate totals

use serde::{Deserialize, Serialize};

/// Identity, date, and commercial-term fields taken from the interchange
/// and message envelope area.
///
/// Every field is optional: a missing or malformed segment leaves the
/// field absent rather than failing the decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Syntax identifier composite from the interchange header
    pub syntax_id: Option<String>,

    /// Sender identification (code-list qualifier stripped)
    pub sender: Option<String>,

    /// Receiver identification (code-list qualifier stripped)
    pub receiver: Option<String>,

    /// Interchange preparation date/time, rendered `YYYY-MM-DD HH:MM`
    /// when parseable, raw otherwise
    pub interchange_datetime: Option<String>,

    /// Interchange control reference
    pub interchange_control: Option<String>,

    /// Message reference number
    pub message_ref: Option<String>,

    /// Message type composite (type, version, release, agency)
    pub message_type: Option<String>,

    /// Document/message name code
    pub document_type: Option<String>,

    /// Manifest (document) number
    pub manifest_number: Option<String>,

    /// Message function code
    pub message_function: Option<String>,

    /// Message date/time (date code 9), normalized when parseable
    pub message_datetime: Option<String>,

    /// Shipment date (date code 10), normalized when parseable
    pub shipment_date: Option<String>,

    /// Reference currency
    pub currency: Option<String>,

    /// Terms of delivery or transport code
    pub terms: Option<String>,

    /// Dispatch warehouse code (location qualifier 198)
    pub warehouse: Option<String>,
}

/// Aggregate totals from the control-count segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountTotals {
    /// Number of line items (count qualifier 2)
    pub line_count: Option<i64>,

    /// Number of shipments (count qualifier 8)
    pub shipment_count: Option<i64>,

    /// Total gross weight in kilograms (count qualifier 7)
    pub total_gross_weight_kg: Option<f64>,

    /// Total declared value (count qualifier 12)
    pub total_value: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults_to_all_absent() {
        let header = Header::default();
        assert!(header.sender.is_none());
        assert!(header.manifest_number.is_none());
        assert!(header.warehouse.is_none());
    }

    #[test]
    fn test_count_totals_default() {
        let totals = CountTotals::default();
        assert!(totals.line_count.is_none());
        assert!(totals.total_value.is_none());
    }
}
