use std::sync::{Arc, RwLock};

use circ_ledger::Ledger;

use crate::catalog::Catalog;
use crate::error::{ServerError, ServerResult};

/// Shared application state, constructed once at the composition root and
/// cloned into handlers.
///
/// The ledger is a synchronous single-writer structure; the lock is its
/// mutual-exclusion boundary: one append at a time, readers concurrent
/// with no writer. Both appends and audits run entirely inside one guard
/// scope, so each is indivisible from the callers' perspective.
#[derive(Clone)]
pub struct AppState {
    ledger: Arc<RwLock<Ledger>>,
    catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            ledger: Arc::new(RwLock::new(Ledger::create_genesis())),
            catalog: Arc::new(RwLock::new(Catalog::new())),
        }
    }

    /// Run `f` under the ledger read lock.
    pub fn with_ledger<T>(&self, f: impl FnOnce(&Ledger) -> T) -> ServerResult<T> {
        let guard = self
            .ledger
            .read()
            .map_err(|_| ServerError::Internal("ledger lock poisoned".into()))?;
        Ok(f(&guard))
    }

    /// Run `f` under the ledger write lock.
    pub fn with_ledger_mut<T>(&self, f: impl FnOnce(&mut Ledger) -> T) -> ServerResult<T> {
        let mut guard = self
            .ledger
            .write()
            .map_err(|_| ServerError::Internal("ledger lock poisoned".into()))?;
        Ok(f(&mut guard))
    }

    /// Run `f` under the catalog read lock.
    pub fn with_catalog<T>(&self, f: impl FnOnce(&Catalog) -> T) -> ServerResult<T> {
        let guard = self
            .catalog
            .read()
            .map_err(|_| ServerError::Internal("catalog lock poisoned".into()))?;
        Ok(f(&guard))
    }

    /// Run `f` under the catalog write lock.
    pub fn with_catalog_mut<T>(&self, f: impl FnOnce(&mut Catalog) -> T) -> ServerResult<T> {
        let mut guard = self
            .catalog
            .write()
            .map_err(|_| ServerError::Internal("catalog lock poisoned".into()))?;
        Ok(f(&mut guard))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
