//! Flee, prayer and deception rolls.
//!
//! Each check is a single d20 whose value falls into one of three bands.

use serde::{Deserialize, Serialize};

/// Which check a roll was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollKind {
    /// Slipping past a monster.
    Flee,
    /// Praying at the shrine.
    Prayer,
    /// Tricking a monster.
    Deception,
}

impl std::fmt::Display for RollKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flee => write!(f, "Flee"),
            Self::Prayer => write!(f, "Prayer"),
            Self::Deception => write!(f, "Deception"),
        }
    }
}

/// Result of a flee roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FleeOutcome {
    /// 1-5: the player slips away clean and finds an elixir.
    CleanEscape,
    /// 6-14: the player gets through but takes a hit.
    Grazed,
    /// 15-20: the monster catches the player, strikes first, and a fight follows.
    Caught,
}

impl FleeOutcome {
    /// Band a d20 result.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=5 => Self::CleanEscape,
            6..=14 => Self::Grazed,
            _ => Self::Caught,
        }
    }
}

impl std::fmt::Display for FleeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CleanEscape => write!(f, "Clean Escape"),
            Self::Grazed => write!(f, "Grazed"),
            Self::Caught => write!(f, "Caught"),
        }
    }
}

/// Max hp lost to a blessing.
pub const BLESSING_MAX_HP_COST: i32 = 5;
/// Attack power gained from a blessing.
pub const BLESSING_ATK_BONUS: i32 = 10;
/// Max hp lost to a curse.
pub const CURSE_MAX_HP_COST: i32 = 10;
/// Attack power lost to a curse.
pub const CURSE_ATK_COST: i32 = 5;

/// Result of a prayer roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrayerOutcome {
    /// 14-20: max hp -5, attack +10, hp refilled.
    Blessing,
    /// 8-13: nothing happens.
    Silence,
    /// 1-7: max hp -10, attack -5.
    Curse,
}

impl PrayerOutcome {
    /// Band a d20 result.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=7 => Self::Curse,
            8..=13 => Self::Silence,
            _ => Self::Blessing,
        }
    }
}

impl std::fmt::Display for PrayerOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blessing => write!(f, "Blessing"),
            Self::Silence => write!(f, "Silence"),
            Self::Curse => write!(f, "Curse"),
        }
    }
}

/// Attack power the monster gains when a deception is seen through.
pub const SEEN_THROUGH_ATK_BONUS: i32 = 5;
/// Hit points the monster gains when a deception is seen through.
pub const SEEN_THROUGH_HP_BONUS: i32 = 10;

/// Result of a deception roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeceptionOutcome {
    /// 12-20: the monster is fooled and the fight is skipped.
    Fooled,
    /// 6-11: the monster attacks as normal.
    Suspicious,
    /// 1-5: the monster is enraged (+5 attack, +10 hp) and attacks.
    SeenThrough,
}

impl DeceptionOutcome {
    /// Band a d20 result.
    pub fn from_roll(roll: i32) -> Self {
        match roll {
            ..=5 => Self::SeenThrough,
            6..=11 => Self::Suspicious,
            _ => Self::Fooled,
        }
    }
}

impl std::fmt::Display for DeceptionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fooled => write!(f, "Fooled"),
            Self::Suspicious => write!(f, "Suspicious"),
            Self::SeenThrough => write!(f, "Seen Through"),
        }
    }
}
