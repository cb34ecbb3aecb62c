//! Party records keyed by role qualifier

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named party from a name/address segment, keyed in the interchange by
/// its role qualifier (consignor, invoicee, consignee, ...).
///
/// Two synthetic parties exist alongside the name/address ones: a "CTA"
/// party aggregating contact role and phone, and an "IV" party carrying a
/// VAT registration in its reference map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Party {
    /// Role qualifier this party was keyed under
    pub qualifier: String,

    /// Party identification (code-list qualifier stripped)
    pub party_id: Option<String>,

    /// Party name, sub-element separators rendered as spaces
    pub name: Option<String>,

    /// Street address, sub-element separators rendered as spaces
    pub address: Option<String>,

    /// City name
    pub city: Option<String>,

    /// Country sub-entity (state/province)
    pub state: Option<String>,

    /// Postal code
    pub postal_code: Option<String>,

    /// Country code
    pub country: Option<String>,

    /// Contact function code (synthetic "CTA" party)
    pub contact_role: Option<String>,

    /// Phone number from a communication segment (synthetic "CTA" party)
    pub phone: Option<String>,

    /// Qualified references attached to this party (e.g. "VAT")
    pub references: BTreeMap<String, String>,
}

impl Party {
    /// Create an empty party for the given role qualifier
    pub fn for_qualifier(qualifier: impl Into<String>) -> Self {
        Self {
            qualifier: qualifier.into(),
            ..Self::default()
        }
    }
}
