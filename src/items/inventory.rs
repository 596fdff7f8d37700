use super::types::Item;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capacity-bounded bag of unequipped items.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    capacity: usize,
}

impl Inventory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    /// Adds `item`, or hands it back when the inventory is full.
    pub fn add(&mut self, item: Item) -> Result<(), Item> {
        if self.is_full() {
            return Err(item);
        }
        self.items.push(item);
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Puts `item` where the item with `id` sits and returns the old one.
    /// Hands `item` back when no such item exists. Never changes the length,
    /// so it works on a full inventory.
    pub fn swap(&mut self, id: Uuid, item: Item) -> Result<Item, Item> {
        match self.items.iter_mut().find(|held| held.id == id) {
            Some(held) => Ok(std::mem::replace(held, item)),
            None => Err(item),
        }
    }

    pub fn get(&self, id: Uuid) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Empties the inventory, handing every item to the caller.
    pub fn take_all(&mut self) -> Vec<Item> {
        std::mem::take(&mut self.items)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
