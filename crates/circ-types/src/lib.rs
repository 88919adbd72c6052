//! Foundation types for the circulation ledger.
//!
//! This crate provides the digest, payload, and catalog types used
//! throughout the workspace. Every other crate depends on `circ-types`.
//!
//! # Key Types
//!
//! - [`EntryHash`] — Content digest binding a ledger entry's fields together
//! - [`CheckoutEvent`] — The domain event carried by an entry
//! - [`ItemId`] — Stable identifier derived from immutable item metadata
//! - [`CatalogItem`] — A lendable item in the catalog

pub mod error;
pub mod event;
pub mod hash;
pub mod item;

pub use error::TypeError;
pub use event::CheckoutEvent;
pub use hash::EntryHash;
pub use item::{CatalogItem, ItemId};
