//! Hashing primitives for the circulation ledger.
//!
//! This crate owns every digest the system computes:
//! - [`ContentHasher`] — domain-separated BLAKE3 hashing
//! - [`entry_digest`] — the canonical content digest over an entry's fields
//! - [`derive_item_id`] — stable catalog item identifier derivation

pub mod digest;
pub mod hasher;

pub use digest::{derive_item_id, entry_digest};
pub use hasher::ContentHasher;
