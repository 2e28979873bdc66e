//! The player character.
//!
//! Holds hit points, attack power, block and the pack for the whole run.
//! Hit points may drop below zero from damage; every other change keeps
//! `hp <= max_hp`.

pub mod inventory;

pub use inventory::{
    HEALTH_POTION_HEAL, INVENTORY_CAPACITY, Inventory, Item, STRENGTH_ELIXIR_BONUS,
};

use serde::{Deserialize, Serialize};

use crate::error::MechResult;
use crate::io::{ChoiceSource, Presenter};
use crate::report::Report;

/// Hit points (and maximum) of a fresh character.
pub const BASE_HP: i32 = 150;

/// Attack power of a fresh character.
pub const BASE_ATK_PWR: i32 = 20;

/// A point-in-time copy of the player's numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSnapshot {
    /// Character name.
    pub name: String,
    /// Current hit points.
    pub hp: i32,
    /// Maximum hit points.
    pub max_hp: i32,
    /// Attack power.
    pub atk_pwr: i32,
    /// Damage the player can still absorb.
    pub block: i32,
    /// Items in the pack.
    pub items: Vec<Item>,
}

/// What happened when the player opened the pack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemUse {
    /// Nothing to use.
    Empty,
    /// Closed without using anything.
    Closed,
    /// The slot number was not valid.
    Invalid,
    /// The item was consumed.
    Used(Item),
}

/// The adventurer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    pub(crate) hp: i32,
    pub(crate) max_hp: i32,
    pub(crate) atk_pwr: i32,
    pub(crate) block: i32,
    inventory: Inventory,
}

impl Player {
    /// Create a character with the base stats and an empty pack.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_stats(name, BASE_HP, BASE_HP, BASE_ATK_PWR)
    }

    /// Create a character with explicit stats. `hp` is capped at `max_hp`.
    pub fn with_stats(name: impl Into<String>, hp: i32, max_hp: i32, atk_pwr: i32) -> Self {
        let max_hp = max_hp.max(0);
        Self {
            name: name.into(),
            hp: hp.min(max_hp),
            max_hp,
            atk_pwr: atk_pwr.max(0),
            block: 0,
            inventory: Inventory::new(),
        }
    }

    /// Character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current hit points. May be negative after a killing blow.
    pub fn hp(&self) -> i32 {
        self.hp
    }

    /// Maximum hit points.
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Attack power.
    pub fn atk_pwr(&self) -> i32 {
        self.atk_pwr
    }

    /// Remaining block.
    pub fn block(&self) -> i32 {
        self.block
    }

    /// The pack.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Whether the player still stands.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Copy out the current numbers.
    pub fn stats(&self) -> StatSnapshot {
        StatSnapshot {
            name: self.name.clone(),
            hp: self.hp,
            max_hp: self.max_hp,
            atk_pwr: self.atk_pwr,
            block: self.block,
            items: self.inventory.items().to_vec(),
        }
    }

    /// Restore hit points, never above the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.max_hp);
    }

    /// Refill hit points to the maximum.
    pub fn restore_hp(&mut self) {
        self.hp = self.max_hp;
    }

    /// Change maximum hit points (floored at 0), pulling `hp` down with it.
    pub fn adjust_max_hp(&mut self, delta: i32) {
        self.max_hp = (self.max_hp + delta).max(0);
        self.hp = self.hp.min(self.max_hp);
    }

    /// Change attack power, floored at 0.
    pub fn adjust_atk_pwr(&mut self, delta: i32) {
        self.atk_pwr = (self.atk_pwr + delta).max(0);
    }

    /// Raise block by `gain`. Returns the new total.
    pub fn add_block(&mut self, gain: i32) -> i32 {
        self.block += gain.max(0);
        self.block
    }

    /// Drop any leftover block.
    pub fn reset_block(&mut self) {
        self.block = 0;
    }

    /// Put an item in the pack, reporting whether it fit.
    pub fn add_item<P: Presenter + ?Sized>(&mut self, item: Item, presenter: &mut P) -> bool {
        let added = self.inventory.add(item);
        if added {
            tracing::debug!(%item, slots = self.inventory.len(), "item added");
            presenter.report(&Report::ItemAdded(item));
        } else {
            tracing::debug!(%item, "inventory full");
            presenter.report(&Report::InventoryFull(item));
        }
        added
    }

    /// Open the pack, let the player pick a slot, and consume that item.
    ///
    /// 0 closes the pack. Any other number outside the occupied slots is
    /// reported as invalid and nothing changes.
    pub fn use_item<I, P>(&mut self, input: &mut I, presenter: &mut P) -> MechResult<ItemUse>
    where
        I: ChoiceSource + ?Sized,
        P: Presenter + ?Sized,
    {
        if self.inventory.is_empty() {
            presenter.report(&Report::InventoryEmpty);
            return Ok(ItemUse::Empty);
        }

        presenter.report(&Report::InventoryListing(self.inventory.items().to_vec()));

        let choice = input.read_choice()?;
        if choice == Some(0) {
            presenter.report(&Report::InventoryClosed);
            return Ok(ItemUse::Closed);
        }

        let slot = choice
            .and_then(|c| c.checked_sub(1))
            .and_then(|c| usize::try_from(c).ok());
        let Some(item) = slot.and_then(|s| self.inventory.remove(s)) else {
            tracing::warn!(?choice, "invalid inventory slot");
            presenter.report(&Report::InvalidItemChoice { choice });
            return Ok(ItemUse::Invalid);
        };

        self.apply_item(item);
        tracing::debug!(%item, hp = self.hp, atk_pwr = self.atk_pwr, "item used");
        presenter.report(&Report::ItemUsed {
            item,
            stats: self.stats(),
        });
        Ok(ItemUse::Used(item))
    }

    fn apply_item(&mut self, item: Item) {
        match item {
            Item::HealthPotion => self.heal(HEALTH_POTION_HEAL),
            Item::StrengthElixir => self.adjust_atk_pwr(STRENGTH_ELIXIR_BONUS),
        }
    }
}
