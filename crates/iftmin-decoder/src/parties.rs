//! Party decoding pass
//!
//! One pass over the whole sequence. Name/address records are keyed by
//! role qualifier and replaced wholesale on repeat. Contact role and phone
//! aggregate on a synthetic "CTA" party; the phone attaches to whichever
//! contact segment was last seen, with no structural check of the pairing.
//! A VAT-qualified reference lands on a synthetic "IV" party.

use crate::syntax::{leading_sub, subs_as_spaces};
use iftmin_records::{Party, Segment};
use std::collections::BTreeMap;

/// Qualifier key of the synthetic contact party
pub const CONTACT_PARTY: &str = "CTA";
/// Qualifier key of the synthetic invoicee/VAT party
pub const VAT_PARTY: &str = "IV";

/// Extract all parties from the segment sequence, keyed by role qualifier.
pub fn decode_parties(segments: &[Segment]) -> BTreeMap<String, Party> {
    let mut parties: BTreeMap<String, Party> = BTreeMap::new();
    for segment in segments {
        match segment.tag() {
            "NAD" => {
                if let Some(qualifier) = segment.element(0) {
                    parties.insert(qualifier.to_string(), decode_name_address(segment, qualifier));
                }
            }
            "CTA" => {
                if let Some(role) = segment.element(0) {
                    synthetic(&mut parties, CONTACT_PARTY).contact_role = Some(role.to_string());
                }
            }
            "COM" => {
                if let Some(composite) = segment.element(0) {
                    let phone = leading_sub(composite).to_string();
                    synthetic(&mut parties, CONTACT_PARTY).phone = Some(phone);
                }
            }
            "RFF" => {
                if let Some(vat) = segment.element(0).and_then(|c| c.strip_prefix("VA:")) {
                    synthetic(&mut parties, VAT_PARTY)
                        .references
                        .insert("VAT".to_string(), vat.to_string());
                }
            }
            _ => {}
        }
    }
    parties
}

fn decode_name_address(segment: &Segment, qualifier: &str) -> Party {
    Party {
        qualifier: qualifier.to_string(),
        party_id: segment.element(1).map(|v| leading_sub(v).to_string()),
        name: segment.element(3).map(subs_as_spaces),
        address: segment.element(4).map(subs_as_spaces),
        city: segment.element(5).map(str::to_string),
        state: segment.element(6).map(str::to_string),
        postal_code: segment.element(7).map(str::to_string),
        country: segment.element(8).map(str::to_string),
        ..Party::default()
    }
}

fn synthetic<'a>(parties: &'a mut BTreeMap<String, Party>, qualifier: &str) -> &'a mut Party {
    parties
        .entry(qualifier.to_string())
        .or_insert_with(|| Party::for_qualifier(qualifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::tokenize;

    #[test]
    fn test_name_address_positions() {
        let segments = tokenize(
            "NAD+IV+5450534005821::9++AMAZON EU SARL:SUCCURSALE FRANCAISE\
             +67 BOULEVARD DU GENERAL LECLERC+CLICHY++92110+FR'",
        );
        let parties = decode_parties(&segments);
        let party = &parties["IV"];
        assert_eq!(party.party_id.as_deref(), Some("5450534005821"));
        assert_eq!(
            party.name.as_deref(),
            Some("AMAZON EU SARL SUCCURSALE FRANCAISE")
        );
        assert_eq!(
            party.address.as_deref(),
            Some("67 BOULEVARD DU GENERAL LECLERC")
        );
        assert_eq!(party.city.as_deref(), Some("CLICHY"));
        assert_eq!(party.state.as_deref(), Some(""));
        assert_eq!(party.postal_code.as_deref(), Some("92110"));
        assert_eq!(party.country.as_deref(), Some("FR"));
    }

    #[test]
    fn test_short_composite_absent_gracefully() {
        let segments = tokenize("NAD+SE+0000000000000::9+n/a'");
        let parties = decode_parties(&segments);
        let party = &parties["SE"];
        assert_eq!(party.party_id.as_deref(), Some("0000000000000"));
        assert!(party.name.is_none());
        assert!(party.country.is_none());
    }

    #[test]
    fn test_repeat_replaces_record_wholesale() {
        let segments = tokenize("NAD+CN+++First'NAD+CN+++Second'");
        let parties = decode_parties(&segments);
        assert_eq!(parties["CN"].name.as_deref(), Some("Second"));
        assert_eq!(parties.len(), 1);
    }

    #[test]
    fn test_repeat_discards_earlier_references() {
        // A fresh name/address record replaces the keyed entry wholesale,
        // including references attached before it
        let segments = tokenize("RFF+VA:FR12487773327'NAD+IV+5450534005821::9'");
        let parties = decode_parties(&segments);
        assert!(parties["IV"].references.is_empty());
        assert_eq!(parties["IV"].party_id.as_deref(), Some("5450534005821"));
    }

    #[test]
    fn test_contact_and_phone_aggregate() {
        let segments = tokenize("CTA+TR'COM+0161081000:TE'");
        let parties = decode_parties(&segments);
        let contact = &parties[CONTACT_PARTY];
        assert_eq!(contact.contact_role.as_deref(), Some("TR"));
        assert_eq!(contact.phone.as_deref(), Some("0161081000"));
    }

    #[test]
    fn test_phone_attaches_to_last_seen_contact() {
        // No structural pairing: the second CTA wins, the phone follows it
        let segments = tokenize("CTA+TR'CTA+IC'COM+5551234:TE'");
        let parties = decode_parties(&segments);
        let contact = &parties[CONTACT_PARTY];
        assert_eq!(contact.contact_role.as_deref(), Some("IC"));
        assert_eq!(contact.phone.as_deref(), Some("5551234"));
    }

    #[test]
    fn test_vat_reference() {
        let segments = tokenize("RFF+VA:FR12487773327'");
        let parties = decode_parties(&segments);
        assert_eq!(
            parties[VAT_PARTY].references.get("VAT").map(String::as_str),
            Some("FR12487773327")
        );
    }

    #[test]
    fn test_vat_attaches_to_existing_invoicee() {
        let segments = tokenize("NAD+IV+5450534005821::9'RFF+VA:FR12487773327'");
        let parties = decode_parties(&segments);
        let party = &parties["IV"];
        assert_eq!(party.party_id.as_deref(), Some("5450534005821"));
        assert_eq!(
            party.references.get("VAT").map(String::as_str),
            Some("FR12487773327")
        );
    }

    #[test]
    fn test_other_references_ignored() {
        let segments = tokenize("RFF+ADJ:UNKW'RFF+CN:1027214650005003'");
        assert!(decode_parties(&segments).is_empty());
    }
}
