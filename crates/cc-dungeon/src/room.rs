//! The rooms of the crypt and their menus.
//!
//! Rooms are numbered from 1 and visited strictly in order. Every menu
//! lists the room's own moves first, then view stats, open the pack and
//! leave the crypt.

use serde::{Deserialize, Serialize};

/// One room of the crypt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    /// A musty chamber with a hallway leading on; a goblin guards a chest.
    GreatChamber,
    /// An orc stands between the player and the stairs.
    OrcBarracks,
    /// An altar to a forgotten god. No monster.
    ForgottenShrine,
    /// A phantom hides among the mirrors.
    HallOfMirrors,
    /// The necromancer's lair. Winning here ends the run.
    NecromancerSanctum,
}

/// A room-specific move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomAction {
    /// Go on to the next room.
    MoveOn,
    /// Search the chamber: take the potion, then face the goblin.
    ExploreChamber,
    /// Fight the room's monster.
    Fight,
    /// Try to slip past the monster (flee roll).
    Flee,
    /// Pray at the altar (prayer roll), then go on.
    Pray,
    /// Try to trick the monster (deception roll).
    Deceive,
}

/// One entry in a room's menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomOption {
    /// A move that may progress the run.
    Act(RoomAction),
    /// Show the player's stats.
    ViewStats,
    /// Open the pack.
    Inventory,
    /// Leave the crypt and end the run.
    ExitGame,
}

impl Room {
    /// All rooms in visiting order.
    pub const ALL: [Self; 5] = [
        Self::GreatChamber,
        Self::OrcBarracks,
        Self::ForgottenShrine,
        Self::HallOfMirrors,
        Self::NecromancerSanctum,
    ];

    /// Look up a room by its 1-based number.
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// The room's 1-based number.
    pub fn number(self) -> u32 {
        match self {
            Self::GreatChamber => 1,
            Self::OrcBarracks => 2,
            Self::ForgottenShrine => 3,
            Self::HallOfMirrors => 4,
            Self::NecromancerSanctum => 5,
        }
    }

    /// Whether this is the boss room.
    pub fn is_final(self) -> bool {
        self == Self::NecromancerSanctum
    }

    /// The room-specific moves, in menu order.
    pub fn actions(self) -> &'static [RoomAction] {
        match self {
            Self::GreatChamber => &[RoomAction::MoveOn, RoomAction::ExploreChamber],
            Self::OrcBarracks => &[RoomAction::Fight, RoomAction::Flee],
            Self::ForgottenShrine => &[RoomAction::Pray, RoomAction::MoveOn],
            Self::HallOfMirrors => &[RoomAction::Fight, RoomAction::Deceive],
            Self::NecromancerSanctum => &[RoomAction::Fight],
        }
    }

    /// The full menu, numbered from 1 in this order.
    pub fn menu(self) -> Vec<RoomOption> {
        self.actions()
            .iter()
            .map(|a| RoomOption::Act(*a))
            .chain([
                RoomOption::ViewStats,
                RoomOption::Inventory,
                RoomOption::ExitGame,
            ])
            .collect()
    }

    /// Resolve a 1-based menu choice.
    pub fn option(self, choice: Option<i64>) -> Option<RoomOption> {
        let index = usize::try_from(choice?.checked_sub(1)?).ok()?;
        self.menu().get(index).copied()
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GreatChamber => write!(f, "Great Chamber"),
            Self::OrcBarracks => write!(f, "Orc Barracks"),
            Self::ForgottenShrine => write!(f, "Forgotten Shrine"),
            Self::HallOfMirrors => write!(f, "Hall of Mirrors"),
            Self::NecromancerSanctum => write!(f, "Necromancer's Sanctum"),
        }
    }
}
