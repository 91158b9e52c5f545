use log::warn;

use crate::assessment::{typology_definition, TypologyId};

use super::insights::{insight_table, PairingInsight};
use super::{PairingError, Result};

/// Look up the authored insight for two partners' categories in the same
/// typology. The pair is unordered: (A, B) and (B, A) resolve to the same
/// entry via a canonical lexicographically sorted key, so the table stores
/// each pair once.
///
/// `MissingPairingData` is a content-authoring gap, not a user error;
/// callers should fall back to generic copy rather than surface it.
pub fn resolve_pairing(
    typology: TypologyId,
    category_a: &str,
    category_b: &str,
) -> Result<&'static PairingInsight> {
    let definition = typology_definition(typology);
    for category in [category_a, category_b] {
        if !definition.contains_category(category) {
            return Err(PairingError::UnknownCategory {
                typology,
                category: category.to_string(),
            });
        }
    }

    let key = canonical_key(category_a, category_b);
    match insight_table(typology).get(&key) {
        Some(insight) => Ok(insight),
        None => {
            warn!(
                "Missing pairing insight for {}: {} + {} (content gap)",
                typology, key.0, key.1
            );
            Err(PairingError::MissingPairingData {
                typology,
                a: key.0,
                b: key.1,
            })
        }
    }
}

fn canonical_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
