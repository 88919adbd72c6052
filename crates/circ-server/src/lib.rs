//! HTTP service for the circulation ledger.
//!
//! Decodes checkout requests, appends them to the tamper-evident ledger,
//! serves chain snapshots and audits, and keeps the item catalog. The
//! ledger core never sees HTTP; this crate is the thin I/O glue around it.

pub mod catalog;
pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use catalog::Catalog;
pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::CircServer;
pub use state::AppState;
