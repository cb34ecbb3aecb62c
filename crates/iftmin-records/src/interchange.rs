//! Decoded interchange container

use crate::header::{CountTotals, Header};
use crate::party::Party;
use crate::segment::Segment;
use crate::shipment::Shipment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decoded IFTMIN message: the tokenized segment sequence plus every
/// record derived from it. Built once by the decoder, read-only after.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Interchange {
    /// Tokenized segments in source order, unrecognized tags included
    pub segments: Vec<Segment>,

    /// Interchange and message identity, dates, commercial terms
    pub header: Header,

    /// Aggregate totals from control-count segments
    pub counts: CountTotals,

    /// Parties keyed by role qualifier (plus synthetic CTA/IV entries)
    pub parties: BTreeMap<String, Party>,

    /// Shipment groups in source order
    pub shipments: Vec<Shipment>,
}

impl Interchange {
    /// Total number of item rows across all shipments
    pub fn item_count(&self) -> usize {
        self.shipments.iter().map(|s| s.items.len()).sum()
    }

    /// Look up a party by role qualifier
    pub fn party(&self, qualifier: &str) -> Option<&Party> {
        self.parties.get(qualifier)
    }
}
