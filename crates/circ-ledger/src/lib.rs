//! Append-only, tamper-evident ledger of checkout events.
//!
//! This crate is the heart of the system. It provides:
//! - [`LedgerEntry`] — one immutable record with hash-linked chain metadata
//! - [`Ledger`] — the ordered entry sequence with its append protocol
//! - [`ChainAuditor`] — full-chain re-verification from genesis to tail
//! - [`ChainError`] — the chain-validity failure taxonomy
//!
//! The ledger is single-process, single-writer, in-memory. Callers that
//! serve concurrent requests wrap it in a mutual-exclusion boundary; both
//! [`Ledger::append`] and the audit are indivisible under such a wrapper.

pub mod audit;
pub mod entry;
pub mod error;
pub mod ledger;

pub use audit::{AuditReport, ChainAuditor};
pub use entry::LedgerEntry;
pub use error::ChainError;
pub use ledger::Ledger;
