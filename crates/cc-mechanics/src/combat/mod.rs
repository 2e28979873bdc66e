//! Turn-based combat between the player and one monster.
//!
//! Each turn the player picks an action, then the monster strikes back
//! if it is still standing. The loop ends when either side drops to 0 hp
//! or the player walks away.

pub mod action;

pub use action::PlayerAction;

use serde::{Deserialize, Serialize};

use crate::damage::apply_damage;
use crate::dice::DieRoller;
use crate::error::MechResult;
use crate::io::{ChoiceSource, Presenter};
use crate::monster::Monster;
use crate::player::Player;
use crate::report::Report;

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatResult {
    /// The monster fell and the player still stands.
    Won,
    /// The player dropped to 0 hp or below.
    Died,
    /// The player chose to leave, whatever the hit points.
    Exited,
}

impl std::fmt::Display for CombatResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Won => write!(f, "Won"),
            Self::Died => write!(f, "Died"),
            Self::Exited => write!(f, "Exited"),
        }
    }
}

/// Where a fight stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    /// Both sides still fighting.
    InProgress,
    /// Finished with a result.
    Over(CombatResult),
}

/// One encounter. Borrows both combatants for its lifetime.
#[derive(Debug)]
pub struct Combat<'a> {
    player: &'a mut Player,
    monster: &'a mut Monster,
    round: u32,
    state: CombatState,
}

impl<'a> Combat<'a> {
    /// Set up a fight. If either side is already down it is over at once.
    pub fn new(player: &'a mut Player, monster: &'a mut Monster) -> Self {
        let mut combat = Self {
            player,
            monster,
            round: 0,
            state: CombatState::InProgress,
        };
        combat.state = combat.classify();
        combat
    }

    /// Current state.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Turns taken so far.
    pub fn rounds(&self) -> u32 {
        self.round
    }

    /// The player.
    pub fn player(&self) -> &Player {
        self.player
    }

    /// The monster.
    pub fn monster(&self) -> &Monster {
        self.monster
    }

    /// Fight until a terminal state is reached.
    pub fn run<D, I, P>(
        &mut self,
        die: &mut D,
        input: &mut I,
        presenter: &mut P,
    ) -> MechResult<CombatResult>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        P: Presenter + ?Sized,
    {
        tracing::info!(
            monster = %self.monster.name,
            player_hp = self.player.hp,
            monster_hp = self.monster.hp,
            "combat started"
        );
        presenter.report(&Report::CombatStarted {
            monster: self.monster.name.clone(),
        });

        loop {
            if let CombatState::Over(result) = self.state {
                tracing::info!(
                    monster = %self.monster.name,
                    %result,
                    rounds = self.round,
                    player_hp = self.player.hp,
                    "combat ended"
                );
                presenter.report(&Report::CombatEnded {
                    monster: self.monster.name.clone(),
                    result,
                });
                return Ok(result);
            }
            self.take_turn(die, input, presenter)?;
        }
    }

    /// Play one turn: the player's action, then the monster's reply.
    ///
    /// An unrecognised action is reported and the monster still strikes.
    /// Does nothing once the fight is over.
    pub fn take_turn<D, I, P>(
        &mut self,
        die: &mut D,
        input: &mut I,
        presenter: &mut P,
    ) -> MechResult<CombatState>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        P: Presenter + ?Sized,
    {
        if self.state != CombatState::InProgress {
            return Ok(self.state);
        }

        self.round += 1;
        presenter.report(&Report::Standoff {
            player_hp: self.player.hp,
            monster: self.monster.name.clone(),
            monster_hp: self.monster.hp,
        });
        presenter.report(&Report::ActionPrompt);

        let choice = input.read_choice()?;
        match PlayerAction::from_choice(choice) {
            Some(PlayerAction::Attack) => {
                let roll = die.roll_d20();
                let damage = roll + self.player.atk_pwr;
                self.monster.hp -= damage;
                tracing::debug!(round = self.round, roll, damage, "player attacks");
                presenter.report(&Report::PlayerAttacked {
                    roll,
                    damage,
                    monster: self.monster.name.clone(),
                    monster_hp: self.monster.hp,
                });
            }
            Some(PlayerAction::Block) => {
                let roll = die.roll_d20();
                let block = self.player.add_block(roll);
                tracing::debug!(round = self.round, roll, block, "player blocks");
                presenter.report(&Report::PlayerBlocked { roll, block });
            }
            Some(PlayerAction::UseItem) => {
                self.player.use_item(input, presenter)?;
            }
            Some(PlayerAction::Exit) => {
                tracing::debug!(round = self.round, "player leaves combat");
                presenter.report(&Report::PlayerExited {
                    monster: self.monster.name.clone(),
                });
                self.state = CombatState::Over(CombatResult::Exited);
                return Ok(self.state);
            }
            None => {
                tracing::warn!(?choice, "invalid combat action");
                presenter.report(&Report::InvalidAction { choice });
            }
        }

        if self.monster.is_alive() {
            let roll = die.roll_d20();
            let damage = roll + self.monster.atk_pwr;
            presenter.report(&Report::MonsterAttacked {
                monster: self.monster.name.clone(),
                roll,
                damage,
            });
            let hit = apply_damage(self.player, damage);
            presenter.report(&Report::Damage(hit));
        }

        self.state = self.classify();
        Ok(self.state)
    }

    fn classify(&self) -> CombatState {
        if self.player.is_alive() && self.monster.is_alive() {
            CombatState::InProgress
        } else if self.player.is_alive() {
            CombatState::Over(CombatResult::Won)
        } else {
            CombatState::Over(CombatResult::Died)
        }
    }
}
