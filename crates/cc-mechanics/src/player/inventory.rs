//! Items and the three-slot inventory.

use serde::{Deserialize, Serialize};

/// Number of slots in the player's pack.
pub const INVENTORY_CAPACITY: usize = 3;

/// Hit points restored by a health potion, up to the player's maximum.
pub const HEALTH_POTION_HEAL: i32 = 50;

/// Attack power granted by a strength elixir.
pub const STRENGTH_ELIXIR_BONUS: i32 = 20;

/// A consumable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Restores hit points.
    HealthPotion,
    /// Permanently raises attack power.
    StrengthElixir,
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HealthPotion => write!(f, "Health Potion"),
            Self::StrengthElixir => write!(f, "Strength Elixir"),
        }
    }
}

/// An ordered pack holding at most [`INVENTORY_CAPACITY`] items.
///
/// Duplicates are allowed. Removing an item shifts the later items one
/// slot towards the front.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item. Returns false, leaving the pack untouched, when full.
    pub fn add(&mut self, item: Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Take the item at a 0-based slot out of the pack.
    pub fn remove(&mut self, slot: usize) -> Option<Item> {
        if slot < self.items.len() {
            Some(self.items.remove(slot))
        } else {
            None
        }
    }

    /// The items in slot order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether every slot is free.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every slot is taken.
    pub fn is_full(&self) -> bool {
        self.items.len() >= INVENTORY_CAPACITY
    }
}
