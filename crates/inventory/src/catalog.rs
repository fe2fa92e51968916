//! The client's in-memory copy of the item collection.

use stockroom_core::{Entity, ItemId};

use crate::item::InventoryItem;

/// Ordered item collection, mutated only after the backend confirms a change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCatalog {
    items: Vec<InventoryItem>,
}

impl ItemCatalog {
    pub fn new(items: Vec<InventoryItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Replace the whole collection after a fetch.
    pub fn replace_all(&mut self, items: Vec<InventoryItem>) {
        tracing::debug!(count = items.len(), "catalog replaced");
        self.items = items;
    }

    /// Store a created or updated item. An existing copy is replaced in place
    /// so table order does not jump; new items are appended.
    pub fn upsert(&mut self, item: InventoryItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(slot) => {
                tracing::debug!(item_id = %item.id, "catalog item updated");
                *slot = item;
            }
            None => {
                tracing::debug!(item_id = %item.id, "catalog item added");
                self.items.push(item);
            }
        }
    }

    /// Drop an item after a confirmed delete.
    pub fn remove(&mut self, id: &ItemId) -> Option<InventoryItem> {
        let pos = self.items.iter().position(|i| &i.id == id)?;
        tracing::debug!(item_id = %id, "catalog item removed");
        Some(self.items.remove(pos))
    }

    /// Set an item's quantity, e.g. after an update request is approved.
    /// Returns `false` if the item is not in the catalog.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: f64) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity = Some(quantity);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<InventoryItem> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = InventoryItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
