use std::collections::BTreeMap;

use circ_chain::derive_item_id;
use circ_protocol::RegisterItemRequest;
use circ_types::{CatalogItem, ItemId};

/// In-memory registry of lendable items, keyed by their derived id.
///
/// Identifier derivation is stateless and separate from chain integrity:
/// the same ISBN and publish date always map to the same id, so
/// registration is idempotent.
#[derive(Default)]
pub struct Catalog {
    items: BTreeMap<ItemId, CatalogItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item, deriving its stable id from immutable metadata.
    /// Re-registering the same item returns the existing record.
    pub fn register(&mut self, request: RegisterItemRequest) -> CatalogItem {
        let id = derive_item_id(&request.isbn, &request.publish_date);
        self.items
            .entry(id)
            .or_insert(CatalogItem {
                id,
                title: request.title,
                author: request.author,
                publish_date: request.publish_date,
                isbn: request.isbn,
            })
            .clone()
    }

    pub fn get(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.get(id)
    }

    /// All items in id order.
    pub fn list(&self) -> Vec<CatalogItem> {
        self.items.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
