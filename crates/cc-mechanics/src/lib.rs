//! Combat mechanics for Cryptcrawl.
//!
//! Provides the d20 die, the player and monster stat blocks, the bounded
//! inventory, the block-absorbing damage resolver and the turn-based
//! combat loop. Input and output go through the [`ChoiceSource`] and
//! [`Presenter`] traits so the engine never touches the console itself.

pub mod combat;
pub mod damage;
pub mod dice;
pub mod error;
pub mod io;
pub mod monster;
pub mod player;
pub mod report;

pub use combat::{Combat, CombatResult, CombatState, PlayerAction};
pub use damage::{DamageReport, apply_damage};
pub use dice::{DieRoller, RandomDie, ScriptedDie};
pub use error::{MechError, MechResult};
pub use io::{ChoiceSource, Presenter, RecordingPresenter, ScriptedInput};
pub use monster::Monster;
pub use player::{Inventory, Item, ItemUse, Player, StatSnapshot};
pub use report::Report;
