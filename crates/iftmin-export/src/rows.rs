//! Flattened export rows
//!
//! One summary row per interchange, and one shipment row per
//! (shipment, item) pair with the header context columns repeated. A
//! shipment without items still yields one row with empty item columns.

use iftmin_records::{Interchange, Shipment};

/// A row type with a fixed column set, writable as one CSV record.
pub trait FlatRow {
    /// Column names in output order
    fn headers() -> &'static [&'static str];

    /// Cell values in column order; absent fields are empty strings
    fn to_record(&self) -> Vec<String>;
}

/// One row per decoded interchange
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryRow {
    pub source: String,
    pub manifest_number: Option<String>,
    pub sender: Option<String>,
    pub receiver: Option<String>,
    pub interchange_datetime: Option<String>,
    pub message_datetime: Option<String>,
    pub shipment_date: Option<String>,
    pub currency: Option<String>,
    pub terms: Option<String>,
    pub warehouse: Option<String>,
    pub line_count: Option<i64>,
    pub shipment_count: Option<i64>,
    pub total_gross_weight_kg: Option<f64>,
    pub total_value: Option<f64>,
    pub shipments_found: usize,
}

/// One row per (shipment, item) pair
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipmentRow {
    pub source: String,
    pub manifest_number: Option<String>,
    pub shipment_index: usize,
    pub warehouse: Option<String>,
    pub currency: Option<String>,
    pub destination_city: Option<String>,
    pub destination_country: Option<String>,
    pub route: Option<String>,
    pub packages: Option<i64>,
    pub gross_kg: Option<f64>,
    pub declared_kg: Option<f64>,
    pub length_cm: Option<f64>,
    pub width_cm: Option<f64>,
    pub height_cm: Option<f64>,
    pub scheduled_delivery: Option<String>,
    pub pickup_time: Option<String>,
    pub invoice_date: Option<String>,
    pub order_id: Option<String>,
    pub tracking: Option<String>,
    pub phone: Option<String>,
    pub consignee_name: Option<String>,
    pub consignee_street: Option<String>,
    pub consignee_zip: Option<String>,
    pub consignee_city: Option<String>,
    pub consignee_state: Option<String>,
    pub consignee_country: Option<String>,
    pub amount_zzz: Option<f64>,
    pub amount_40: Option<f64>,
    pub product_ref: Option<String>,
    pub quantity: Option<f64>,
    pub unit_of_measure: Option<String>,
    pub unit_price: Option<f64>,
    pub delivery_terms: Option<String>,
    pub reason_for_export: Option<String>,
}

/// Flatten one interchange into its summary row.
pub fn summary_row(interchange: &Interchange, source: impl Into<String>) -> SummaryRow {
    let header = &interchange.header;
    let counts = &interchange.counts;
    SummaryRow {
        source: source.into(),
        manifest_number: header.manifest_number.clone(),
        sender: header.sender.clone(),
        receiver: header.receiver.clone(),
        interchange_datetime: header.interchange_datetime.clone(),
        message_datetime: header.message_datetime.clone(),
        shipment_date: header.shipment_date.clone(),
        currency: header.currency.clone(),
        terms: header.terms.clone(),
        warehouse: header.warehouse.clone(),
        line_count: counts.line_count,
        shipment_count: counts.shipment_count,
        total_gross_weight_kg: counts.total_gross_weight_kg,
        total_value: counts.total_value,
        shipments_found: interchange.shipments.len(),
    }
}

/// Flatten one interchange into shipment/item rows.
pub fn shipment_rows(interchange: &Interchange, source: &str) -> Vec<ShipmentRow> {
    let mut rows = Vec::new();
    for (index, shipment) in interchange.shipments.iter().enumerate() {
        let base = base_row(interchange, shipment, source, index + 1);
        if shipment.items.is_empty() {
            rows.push(base);
            continue;
        }
        for item in &shipment.items {
            let mut row = base.clone();
            row.product_ref = item.product_ref.clone();
            row.quantity = item.quantity;
            row.unit_of_measure = item.unit_of_measure.clone();
            row.unit_price = item.unit_price;
            rows.push(row);
        }
    }
    rows
}

fn base_row(
    interchange: &Interchange,
    shipment: &Shipment,
    source: &str,
    shipment_index: usize,
) -> ShipmentRow {
    let header = &interchange.header;
    let consignee = shipment.consignee.as_ref();
    let dimensions = shipment.dimensions.as_ref();
    ShipmentRow {
        source: source.to_string(),
        manifest_number: header.manifest_number.clone(),
        shipment_index,
        warehouse: header.warehouse.clone(),
        currency: header.currency.clone(),
        destination_city: shipment.destination_city.clone(),
        destination_country: shipment.destination_country.clone(),
        route: shipment.route.clone(),
        packages: shipment.packages,
        gross_kg: shipment.weights.gross_kg,
        declared_kg: shipment.weights.declared_kg,
        length_cm: dimensions.and_then(|d| d.length_cm),
        width_cm: dimensions.and_then(|d| d.width_cm),
        height_cm: dimensions.and_then(|d| d.height_cm),
        scheduled_delivery: shipment.dates.scheduled_delivery.clone(),
        pickup_time: shipment.dates.pickup_time.clone(),
        invoice_date: shipment.dates.invoice_date.clone(),
        order_id: shipment.refs.order_id.clone(),
        tracking: shipment.refs.tracking.clone(),
        phone: shipment.refs.phone.clone(),
        consignee_name: consignee.and_then(|c| c.name.clone()),
        consignee_street: consignee.and_then(|c| c.street.clone()),
        consignee_zip: consignee.and_then(|c| c.postal_code.clone()),
        consignee_city: consignee.and_then(|c| c.city.clone()),
        consignee_state: consignee.and_then(|c| c.state.clone()),
        consignee_country: consignee.and_then(|c| c.country.clone()),
        amount_zzz: shipment.monetary.get("ZZZ").copied(),
        amount_40: shipment.monetary.get("40").copied(),
        product_ref: None,
        quantity: None,
        unit_of_measure: None,
        unit_price: None,
        delivery_terms: shipment.terms.delivery_terms.clone(),
        reason_for_export: shipment.terms.reason_for_export.clone(),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn count(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl FlatRow for SummaryRow {
    fn headers() -> &'static [&'static str] {
        &[
            "source",
            "manifest_number",
            "sender",
            "receiver",
            "interchange_datetime",
            "message_datetime",
            "shipment_date",
            "currency",
            "terms",
            "warehouse",
            "line_count",
            "shipment_count",
            "total_gross_weight_kg",
            "total_value",
            "shipments_found",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            text(&self.manifest_number),
            text(&self.sender),
            text(&self.receiver),
            text(&self.interchange_datetime),
            text(&self.message_datetime),
            text(&self.shipment_date),
            text(&self.currency),
            text(&self.terms),
            text(&self.warehouse),
            count(self.line_count),
            count(self.shipment_count),
            number(self.total_gross_weight_kg),
            number(self.total_value),
            self.shipments_found.to_string(),
        ]
    }
}

impl FlatRow for ShipmentRow {
    fn headers() -> &'static [&'static str] {
        &[
            "source",
            "manifest_number",
            "shipment_index",
            "warehouse",
            "currency",
            "destination_city",
            "destination_country",
            "route",
            "packages",
            "gross_kg",
            "declared_kg",
            "length_cm",
            "width_cm",
            "height_cm",
            "scheduled_delivery",
            "pickup_time",
            "invoice_date",
            "order_id",
            "tracking",
            "phone",
            "consignee_name",
            "consignee_street",
            "consignee_zip",
            "consignee_city",
            "consignee_state",
            "consignee_country",
            "amount_zzz",
            "amount_40",
            "product_ref",
            "quantity",
            "unit_of_measure",
            "unit_price",
            "delivery_terms",
            "reason_for_export",
        ]
    }

    fn to_record(&self) -> Vec<String> {
        vec![
            self.source.clone(),
            text(&self.manifest_number),
            self.shipment_index.to_string(),
            text(&self.warehouse),
            text(&self.currency),
            text(&self.destination_city),
            text(&self.destination_country),
            text(&self.route),
            count(self.packages),
            number(self.gross_kg),
            number(self.declared_kg),
            number(self.length_cm),
            number(self.width_cm),
            number(self.height_cm),
            text(&self.scheduled_delivery),
            text(&self.pickup_time),
            text(&self.invoice_date),
            text(&self.order_id),
            text(&self.tracking),
            text(&self.phone),
            text(&self.consignee_name),
            text(&self.consignee_street),
            text(&self.consignee_zip),
            text(&self.consignee_city),
            text(&self.consignee_state),
            text(&self.consignee_country),
            number(self.amount_zzz),
            number(self.amount_40),
            text(&self.product_ref),
            number(self.quantity),
            text(&self.unit_of_measure),
            number(self.unit_price),
            text(&self.delivery_terms),
            text(&self.reason_for_export),
        ]
    }
}
