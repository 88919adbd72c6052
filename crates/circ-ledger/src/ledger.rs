use circ_types::CheckoutEvent;

use crate::audit::ChainAuditor;
use crate::entry::LedgerEntry;
use crate::error::ChainError;

/// Append-only, tamper-evident sequence of checkout entries.
///
/// The ledger exclusively owns its entries. It is created with exactly one
/// genesis entry, grows monotonically via [`append`], and never shrinks or
/// reorders. There is no closed or frozen state.
///
/// [`append`]: Ledger::append
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    /// Create a ledger containing only the sentinel genesis entry.
    ///
    /// This is the sole way to start a chain.
    pub fn create_genesis() -> Self {
        Self {
            entries: vec![LedgerEntry::genesis()],
        }
    }

    /// Append a checkout event to the chain.
    ///
    /// Builds the candidate entry from the current tail, validates it with
    /// the chain-validity check, and commits it. On rejection the ledger is
    /// left exactly as it was.
    pub fn append(&mut self, payload: CheckoutEvent) -> Result<(), ChainError> {
        let candidate = LedgerEntry::next(self.tail(), payload);
        self.append_entry(candidate)
    }

    /// Validate a pre-built candidate entry against the current tail and
    /// commit it. This is the only mutation path for the ledger.
    pub fn append_entry(&mut self, entry: LedgerEntry) -> Result<(), ChainError> {
        if let Err(error) = Self::is_valid(&entry, self.tail()) {
            tracing::warn!(%error, position = entry.position, "rejected candidate entry");
            return Err(error);
        }
        self.entries.push(entry);
        tracing::debug!(position = self.tail().position, "entry committed");
        Ok(())
    }

    /// The chain-validity check: three independent sub-checks, all of which
    /// must pass for `candidate` to extend `tail`.
    fn is_valid(candidate: &LedgerEntry, tail: &LedgerEntry) -> Result<(), ChainError> {
        if candidate.prev_hash != Some(tail.content_hash) {
            return Err(ChainError::LinkageMismatch {
                position: candidate.position,
            });
        }
        if !candidate.matches_hash(&candidate.content_hash) {
            return Err(ChainError::HashMismatch {
                position: candidate.position,
            });
        }
        if candidate.position != tail.position + 1 {
            return Err(ChainError::PositionGap {
                expected: tail.position + 1,
                found: candidate.position,
            });
        }
        Ok(())
    }

    /// The most recently appended entry.
    pub fn tail(&self) -> &LedgerEntry {
        match self.entries.last() {
            Some(entry) => entry,
            // The constructor seeds genesis and nothing ever removes entries.
            None => unreachable!("ledger constructed without genesis"),
        }
    }

    /// All entries in position order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    /// Number of entries, including genesis.
    pub fn len(&self) -> u64 {
        self.entries.len() as u64
    }

    /// Always `false`: a ledger holds at least its genesis entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only copy of all entries in position order, for serialization
    /// to external callers. Internal storage is never aliased mutably.
    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.entries.clone()
    }

    /// Re-verify the whole chain from genesis to tail.
    ///
    /// Returns `false` on the first violation. Callers that need the
    /// violating positions run [`ChainAuditor::audit`] on a snapshot.
    pub fn full_chain_valid(&self) -> bool {
        ChainAuditor::audit(&self.entries).is_valid()
    }
}
