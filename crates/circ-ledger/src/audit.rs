use crate::entry::LedgerEntry;
use crate::error::ChainError;

/// Result of a full-chain audit.
///
/// Collects every violation found rather than stopping at the first, so an
/// auditor can report all tampered positions in one pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditReport {
    pub entry_count: u64,
    pub violations: Vec<ChainError>,
}

impl AuditReport {
    /// Returns `true` if every sub-check passed for every entry.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The first violating position, if any.
    pub fn first_violation(&self) -> Option<&ChainError> {
        self.violations.first()
    }
}

/// Full-chain integrity auditor.
///
/// Walks every adjacent pair from genesis to tail and applies the same
/// three sub-checks used at append time: previous-hash linkage, stored-hash
/// self-consistency, and position contiguity. Detects retroactive tampering
/// with already-stored entries, which append-time validation alone cannot.
pub struct ChainAuditor;

impl ChainAuditor {
    /// Audit an ordered entry sequence.
    ///
    /// Accepts a slice so external auditors can verify a [`snapshot`] (or
    /// any deserialized copy) without access to the owning ledger.
    ///
    /// [`snapshot`]: crate::Ledger::snapshot
    pub fn audit(entries: &[LedgerEntry]) -> AuditReport {
        let mut violations = Vec::new();

        if let Some(genesis) = entries.first() {
            if genesis.position != 0 {
                violations.push(ChainError::PositionGap {
                    expected: 0,
                    found: genesis.position,
                });
            }
            // A genesis entry carrying a previous hash is a broken link.
            if genesis.prev_hash.is_some() {
                violations.push(ChainError::LinkageMismatch {
                    position: genesis.position,
                });
            }
            if !genesis.matches_hash(&genesis.content_hash) {
                violations.push(ChainError::HashMismatch {
                    position: genesis.position,
                });
            }
        }

        for pair in entries.windows(2) {
            let (prev, entry) = (&pair[0], &pair[1]);

            if entry.prev_hash != Some(prev.content_hash) {
                violations.push(ChainError::LinkageMismatch {
                    position: entry.position,
                });
            }
            if !entry.matches_hash(&entry.content_hash) {
                violations.push(ChainError::HashMismatch {
                    position: entry.position,
                });
            }
            if entry.position != prev.position + 1 {
                violations.push(ChainError::PositionGap {
                    expected: prev.position + 1,
                    found: entry.position,
                });
            }
        }

        AuditReport {
            entry_count: entries.len() as u64,
            violations,
        }
    }
}
