use serde::{Deserialize, Serialize};

/// One checkout action: who borrowed which item and when.
///
/// This is the payload an entry carries. The ledger is agnostic to its
/// semantics beyond hashing it; content validation (non-empty borrower,
/// known item) belongs to the service layer.
///
/// Field declaration order is canonical: [`canonical_bytes`] serializes
/// fields in exactly this order, independent of any map iteration order,
/// so the same logical event always hashes identically.
///
/// [`canonical_bytes`]: CheckoutEvent::canonical_bytes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutEvent {
    /// Stable identifier of the borrowed item.
    pub item_id: String,
    /// Identifier of the borrower.
    pub borrower: String,
    /// Date of the checkout, as supplied by the caller.
    pub checkout_date: String,
    /// Marks the sentinel entry that anchors the chain.
    pub is_genesis: bool,
}

impl CheckoutEvent {
    /// A real checkout event.
    pub fn new(
        item_id: impl Into<String>,
        borrower: impl Into<String>,
        checkout_date: impl Into<String>,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            borrower: borrower.into(),
            checkout_date: checkout_date.into(),
            is_genesis: false,
        }
    }

    /// The sentinel payload for the genesis entry: no borrower, no item.
    pub fn genesis() -> Self {
        Self {
            item_id: String::new(),
            borrower: String::new(),
            checkout_date: String::new(),
            is_genesis: true,
        }
    }

    /// Canonical JSON bytes for digest computation.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        // A derived serializer over strings and a bool cannot fail.
        serde_json::to_vec(self).unwrap_or_default()
    }
}
