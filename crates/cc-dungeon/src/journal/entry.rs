//! Journal entry types.

use cc_mechanics::{CombatResult, Item};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::roll::RollKind;
use crate::room::Room;
use crate::run::RunOutcome;

/// A single entry in the run journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum JournalEntry {
    /// The player reached a room for the first time.
    RoomEntered {
        /// The room.
        room: Room,
        /// When the room was reached.
        timestamp: DateTime<Utc>,
    },
    /// An item was found.
    ItemFound {
        /// The item.
        item: Item,
        /// False if the pack was full and the item was left behind.
        kept: bool,
        /// When it was found.
        timestamp: DateTime<Utc>,
    },
    /// A flee, prayer or deception roll.
    Roll {
        /// Which check.
        kind: RollKind,
        /// The d20.
        roll: i32,
        /// The band it fell in.
        outcome: String,
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A narrative event changed the player's stats.
    StatsChanged {
        /// What caused the change.
        cause: String,
        /// Hit points afterwards.
        hp: i32,
        /// Maximum hit points afterwards.
        max_hp: i32,
        /// Attack power afterwards.
        atk_pwr: i32,
        /// When it happened.
        timestamp: DateTime<Utc>,
    },
    /// A fight finished.
    Combat {
        /// The opposing monster.
        monster: String,
        /// How it ended.
        result: CombatResult,
        /// Turns taken.
        rounds: u32,
        /// Player hit points at the end.
        player_hp: i32,
        /// When it ended.
        timestamp: DateTime<Utc>,
    },
    /// The run ended.
    Ended {
        /// How it ended.
        outcome: RunOutcome,
        /// When it ended.
        timestamp: DateTime<Utc>,
    },
}

impl JournalEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::RoomEntered { timestamp, .. }
            | Self::ItemFound { timestamp, .. }
            | Self::Roll { timestamp, .. }
            | Self::StatsChanged { timestamp, .. }
            | Self::Combat { timestamp, .. }
            | Self::Ended { timestamp, .. } => *timestamp,
        }
    }
}
