//! # iftmin-records
//!
//! Typed record model for decoded IFTMIN interchanges.
//!
//! This crate holds the plain-data output of the decoder: a tokenized
//! segment sequence plus the derived header, count totals, parties,
//! shipments, and items. Records carry no decoding logic and every field a
//! segment may or may not supply is optional.

/// Interchange-level header fields and aggregate count totals.
pub mod header;
/// The decoded-message container.
pub mod interchange;
/// Named parties and their contact/reference details.
pub mod party;
/// Tokenized segment with bounds-safe element access.
pub mod segment;
/// Per-shipment records and item rows.
pub mod shipment;

pub use header::{CountTotals, Header};
pub use interchange::Interchange;
pub use party::Party;
pub use segment::Segment;
pub use shipment::{
    Consignee, Dimensions, Item, Shipment, ShipmentDates, ShipmentRefs, ShipmentTerms, Weights,
};
