//! # Inventory
//!
//! Items collected from chests, in pickup order, with a clamped selection
//! cursor for the inventory screen.

use crate::Item;
use serde::{Deserialize, Serialize};

/// The player's items and inventory-screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
    selected: usize,
    open: bool,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the highlighted item. Always `0` for an empty inventory.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.items.get(self.selected)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens a closed inventory screen or closes an open one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Appends an item; display order is pickup order.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Moves the cursor up one entry, stopping at the first item.
    pub fn select_prev(&mut self) -> usize {
        self.selected = self.selected.saturating_sub(1);
        self.selected
    }

    /// Moves the cursor down one entry, stopping at the last item.
    pub fn select_next(&mut self) -> usize {
        self.selected = (self.selected + 1).min(self.last_index());
        self.selected
    }

    /// Removes and returns the highlighted item, keeping the cursor in range.
    pub fn take_selected(&mut self) -> Option<Item> {
        if self.selected >= self.items.len() {
            return None;
        }
        let item = self.items.remove(self.selected);
        self.selected = self.selected.min(self.last_index());
        Some(item)
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}
