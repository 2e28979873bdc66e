//! Combat actions.

/// An action the player can take on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    /// Strike for d20 + attack power.
    Attack,
    /// Add a d20 to block.
    Block,
    /// Open the pack. Costs the turn even if nothing is used.
    UseItem,
    /// Leave the fight.
    Exit,
}

impl PlayerAction {
    /// All actions in menu order.
    pub const ALL: [Self; 4] = [Self::Attack, Self::Block, Self::UseItem, Self::Exit];

    /// Map a menu number (1-4) to an action.
    pub fn from_choice(choice: Option<i64>) -> Option<Self> {
        match choice? {
            1 => Some(Self::Attack),
            2 => Some(Self::Block),
            3 => Some(Self::UseItem),
            4 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The menu number of this action.
    pub fn number(self) -> i64 {
        match self {
            Self::Attack => 1,
            Self::Block => 2,
            Self::UseItem => 3,
            Self::Exit => 4,
        }
    }
}

impl std::fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Attack => write!(f, "Attack"),
            Self::Block => write!(f, "Block"),
            Self::UseItem => write!(f, "Use Item"),
            Self::Exit => write!(f, "Exit Combat"),
        }
    }
}
