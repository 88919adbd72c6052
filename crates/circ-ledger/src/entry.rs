use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use circ_chain::entry_digest;
use circ_types::{CheckoutEvent, EntryHash};

/// One immutable record in the circulation ledger.
///
/// An entry binds a checkout event to its chain position: the content hash
/// covers the position, timestamp, payload, and previous hash, so any
/// retroactive edit to a stored entry is detectable by recomputation.
/// Entries are never mutated after construction, only appended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Chain position, contiguous from 0 (genesis).
    pub position: u64,
    /// RFC 3339 creation time, captured once at construction.
    pub timestamp: String,
    /// The checkout event this entry records.
    pub payload: CheckoutEvent,
    /// Digest over (position, timestamp, payload, prev_hash).
    pub content_hash: EntryHash,
    /// The previous entry's content hash; `None` for genesis.
    pub prev_hash: Option<EntryHash>,
}

impl LedgerEntry {
    /// The sentinel first entry anchoring a new chain.
    pub(crate) fn genesis() -> Self {
        Self::build(0, None, CheckoutEvent::genesis())
    }

    /// The entry following `prev`, carrying `payload`.
    ///
    /// Sets `position = prev.position + 1`, links `prev_hash`, stamps the
    /// current time, and computes the content hash. Cannot fail.
    pub fn next(prev: &LedgerEntry, payload: CheckoutEvent) -> Self {
        Self::build(prev.position + 1, Some(prev.content_hash), payload)
    }

    fn build(position: u64, prev_hash: Option<EntryHash>, payload: CheckoutEvent) -> Self {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let content_hash = entry_digest(
            position,
            &timestamp,
            &payload.canonical_bytes(),
            prev_hash.as_ref(),
        );
        Self {
            position,
            timestamp,
            payload,
            content_hash,
            prev_hash,
        }
    }

    /// Recompute this entry's digest from its current field values.
    pub fn computed_hash(&self) -> EntryHash {
        entry_digest(
            self.position,
            &self.timestamp,
            &self.payload.canonical_bytes(),
            self.prev_hash.as_ref(),
        )
    }

    /// Pure check: does `expected` match the digest recomputed from this
    /// entry's current fields? The stored hash is never touched.
    pub fn matches_hash(&self, expected: &EntryHash) -> bool {
        self.computed_hash() == *expected
    }

    /// Returns `true` for the sentinel entry.
    pub fn is_genesis(&self) -> bool {
        self.payload.is_genesis
    }
}
