//! Monsters.

use serde::{Deserialize, Serialize};

/// A creature guarding a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Display name.
    pub name: String,
    /// Hit points. The encounter ends once this reaches 0 or below.
    pub hp: i32,
    /// Added to every d20 the monster rolls to hit.
    pub atk_pwr: i32,
}

impl Monster {
    /// Create a monster.
    pub fn new(name: impl Into<String>, hp: i32, atk_pwr: i32) -> Self {
        Self {
            name: name.into(),
            hp,
            atk_pwr: atk_pwr.max(0),
        }
    }

    /// Whether the monster can still fight.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Strengthen the monster in place.
    pub fn empower(&mut self, atk_bonus: i32, hp_bonus: i32) {
        self.atk_pwr = (self.atk_pwr + atk_bonus).max(0);
        self.hp += hp_bonus;
    }
}

impl std::fmt::Display for Monster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (HP {}, ATK {})", self.name, self.hp, self.atk_pwr)
    }
}
