//! Events the mechanics engine reports to its presenter.

use crate::combat::CombatResult;
use crate::damage::DamageReport;
use crate::player::{Item, StatSnapshot};

/// Something that happened in combat or in the player's pack.
///
/// Reports carry numbers, never prose; wording is up to the presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// The player's current stats.
    Stats(StatSnapshot),
    /// An item went into the pack.
    ItemAdded(Item),
    /// The pack was full, so the item was left behind.
    InventoryFull(Item),
    /// The player opened an empty pack.
    InventoryEmpty,
    /// The pack's contents in slot order; the presenter shows them 1-based
    /// with 0 to close.
    InventoryListing(Vec<Item>),
    /// The player closed the pack without using anything.
    InventoryClosed,
    /// The player picked a slot that does not exist.
    InvalidItemChoice {
        /// What was entered, or `None` if it was not a number.
        choice: Option<i64>,
    },
    /// An item was consumed.
    ItemUsed {
        /// The consumed item.
        item: Item,
        /// The player's stats after the effect.
        stats: StatSnapshot,
    },
    /// A fight begins.
    CombatStarted {
        /// The opposing monster.
        monster: String,
    },
    /// Both combatants' hit points at the top of a turn.
    Standoff {
        /// Player hit points.
        player_hp: i32,
        /// The opposing monster.
        monster: String,
        /// Monster hit points.
        monster_hp: i32,
    },
    /// The engine is waiting for a combat action.
    ActionPrompt,
    /// The player struck the monster.
    PlayerAttacked {
        /// The d20 result.
        roll: i32,
        /// Roll plus attack power.
        damage: i32,
        /// The struck monster.
        monster: String,
        /// Monster hit points after the blow.
        monster_hp: i32,
    },
    /// The player raised their guard.
    PlayerBlocked {
        /// The d20 result added to block.
        roll: i32,
        /// Block total after the gain.
        block: i32,
    },
    /// The combat action was not one of the four actions.
    InvalidAction {
        /// What was entered, or `None` if it was not a number.
        choice: Option<i64>,
    },
    /// The player broke off the fight.
    PlayerExited {
        /// The monster left behind.
        monster: String,
    },
    /// The monster struck back.
    MonsterAttacked {
        /// The attacking monster.
        monster: String,
        /// The d20 result.
        roll: i32,
        /// Roll plus the monster's attack power.
        damage: i32,
    },
    /// How an incoming blow split between block and hit points.
    Damage(DamageReport),
    /// The fight is over.
    CombatEnded {
        /// The opposing monster.
        monster: String,
        /// How it ended.
        result: CombatResult,
    },
}
