/// Chain-validity failures.
///
/// All variants are recoverable-by-caller: a rejected append leaves the
/// ledger unchanged, and the variant tells the caller which sub-check
/// failed for logging and metrics.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The candidate's previous-hash does not match the tail's content hash.
    #[error("previous-hash link mismatch at position {position}")]
    LinkageMismatch { position: u64 },

    /// The entry's stored hash does not match the digest recomputed from
    /// its fields (corruption between construction and validation, or
    /// tampering with a stored entry).
    #[error("content hash mismatch at position {position}")]
    HashMismatch { position: u64 },

    /// The candidate's position is not exactly the tail's position + 1.
    #[error("position gap: expected {expected}, found {found}")]
    PositionGap { expected: u64, found: u64 },
}

impl ChainError {
    /// The position the violation was detected at.
    pub fn position(&self) -> u64 {
        match self {
            Self::LinkageMismatch { position } | Self::HashMismatch { position } => *position,
            Self::PositionGap { found, .. } => *found,
        }
    }

    /// Stable machine-readable kind, for wire bodies and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::LinkageMismatch { .. } => "linkage_mismatch",
            Self::HashMismatch { .. } => "hash_mismatch",
            Self::PositionGap { .. } => "position_gap",
        }
    }
}
