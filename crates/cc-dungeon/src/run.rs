//! A single run through the crypt.
//!
//! `DungeonRun` owns the player and the monster roster. Each call to
//! [`DungeonRun::step`] shows the current room's menu, reads one choice
//! and resolves it; [`DungeonRun::play`] repeats that until the run ends.

use cc_mechanics::{
    ChoiceSource, Combat, CombatResult, DieRoller, Item, Player, Report, apply_damage,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::DungeonConfig;
use crate::error::DungeonResult;
use crate::event::{DungeonEvent, Narrator};
use crate::journal::{Journal, JournalEntry};
use crate::roll::{
    BLESSING_ATK_BONUS, BLESSING_MAX_HP_COST, CURSE_ATK_COST, CURSE_MAX_HP_COST,
    DeceptionOutcome, FleeOutcome, PrayerOutcome, RollKind, SEEN_THROUGH_ATK_BONUS,
    SEEN_THROUGH_HP_BONUS,
};
use crate::room::{Room, RoomAction, RoomOption};
use crate::roster::Roster;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The necromancer fell.
    Victory,
    /// The player was killed.
    Slain {
        /// The killer.
        by: String,
    },
    /// The player walked out of a fight.
    FledCombat {
        /// The monster left behind.
        from: String,
    },
    /// The player chose to leave the crypt from a room menu.
    LeftDungeon,
    /// The player never went in.
    StayedOutside,
    /// The room counter pointed past the known rooms.
    WanderedOff,
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Victory => write!(f, "Victory"),
            Self::Slain { by } => write!(f, "Slain by the {by}"),
            Self::FledCombat { from } => write!(f, "Fled from the {from}"),
            Self::LeftDungeon => write!(f, "Left the crypt"),
            Self::StayedOutside => write!(f, "Stayed outside"),
            Self::WanderedOff => write!(f, "Wandered out of the crypt"),
        }
    }
}

/// An interactive run through the crypt.
#[derive(Debug, Clone)]
pub struct DungeonRun {
    player: Player,
    roster: Roster,
    config: DungeonConfig,
    current_room: u32,
    journaled_room: u32,
    outcome: Option<RunOutcome>,
    journal: Journal,
}

impl DungeonRun {
    /// Start a run in room 1 against the standard roster.
    pub fn new(player: Player, config: DungeonConfig) -> Self {
        Self::with_roster(player, Roster::standard(), config)
    }

    /// Start a run in room 1 against a custom roster.
    pub fn with_roster(player: Player, roster: Roster, config: DungeonConfig) -> Self {
        Self {
            player,
            roster,
            config,
            current_room: 1,
            journaled_room: 0,
            outcome: None,
            journal: Journal::new(),
        }
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The monsters still waiting.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The current room number (1-based).
    pub fn current_room(&self) -> u32 {
        self.current_room
    }

    /// Whether the run has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// How the run ended, once it has.
    pub fn outcome(&self) -> Option<&RunOutcome> {
        self.outcome.as_ref()
    }

    /// Everything recorded so far.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Ask to enter, then play room by room until the run ends.
    pub fn play<D, I, N>(
        &mut self,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<RunOutcome>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        if self.enter(input, narrator)? {
            while !self.is_over() {
                self.step(die, input, narrator)?;
            }
            narrator.narrate(&DungeonEvent::Farewell {
                name: self.player.name().to_string(),
            });
        }
        Ok(self.outcome.clone().unwrap_or(RunOutcome::LeftDungeon))
    }

    /// Greet the player and ask whether to go in. "yes" enters.
    pub fn enter<I, N>(&mut self, input: &mut I, narrator: &mut N) -> DungeonResult<bool>
    where
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        narrator.narrate(&DungeonEvent::Welcome {
            name: self.player.name().to_string(),
        });
        narrator.report(&Report::Stats(self.player.stats()));
        narrator.narrate(&DungeonEvent::CryptEntrance);

        let answer = input.read_confirmation()?;
        if answer.trim().eq_ignore_ascii_case("yes") {
            narrator.narrate(&DungeonEvent::EnteredCrypt);
            Ok(true)
        } else {
            self.finish(RunOutcome::StayedOutside, narrator);
            Ok(false)
        }
    }

    /// Show the current room's menu, read one choice and resolve it.
    ///
    /// Viewing stats, opening the pack and invalid choices leave the
    /// room unchanged, so the next step shows the same menu again.
    pub fn step<D, I, N>(
        &mut self,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<()>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        if self.is_over() {
            return Ok(());
        }

        let Some(room) = Room::from_number(self.current_room) else {
            tracing::warn!(room = self.current_room, "no such room");
            self.finish(RunOutcome::WanderedOff, narrator);
            return Ok(());
        };

        if self.journaled_room < self.current_room {
            self.journaled_room = self.current_room;
            tracing::info!(%room, number = room.number(), "entered room");
            self.journal.append(JournalEntry::RoomEntered {
                room,
                timestamp: Utc::now(),
            });
        }

        narrator.narrate(&DungeonEvent::RoomIntro { room });
        let choice = input.read_choice()?;
        let Some(option) = room.option(choice) else {
            tracing::warn!(%room, ?choice, "invalid room choice");
            narrator.narrate(&DungeonEvent::InvalidChoice { room, choice });
            return Ok(());
        };

        match option {
            RoomOption::ViewStats => narrator.report(&Report::Stats(self.player.stats())),
            RoomOption::Inventory => {
                self.player.use_item(input, narrator)?;
            }
            RoomOption::ExitGame => self.finish(RunOutcome::LeftDungeon, narrator),
            RoomOption::Act(action) => self.act(room, action, die, input, narrator)?,
        }
        Ok(())
    }

    fn act<D, I, N>(
        &mut self,
        room: Room,
        action: RoomAction,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<()>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        match action {
            RoomAction::MoveOn => {
                if room == Room::ForgottenShrine {
                    narrator.narrate(&DungeonEvent::WalkedPast);
                }
                self.advance(narrator);
            }
            RoomAction::ExploreChamber => {
                if let Some(guardian) = self.roster.get(room) {
                    narrator.narrate(&DungeonEvent::ChamberSearched {
                        monster: guardian.name.clone(),
                    });
                }
                self.grant(Item::HealthPotion, narrator);
                self.fight(room, die, input, narrator)?;
            }
            RoomAction::Fight => self.fight(room, die, input, narrator)?,
            RoomAction::Flee => self.flee(room, die, input, narrator)?,
            RoomAction::Pray => {
                self.pray(die, narrator);
                self.advance(narrator);
            }
            RoomAction::Deceive => self.deceive(room, die, input, narrator)?,
        }
        Ok(())
    }

    fn fight<D, I, N>(
        &mut self,
        room: Room,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<()>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        if self.config.reset_block {
            self.player.reset_block();
        }

        let Some(monster) = self.roster.get_mut(room) else {
            tracing::warn!(%room, "nothing to fight here");
            self.advance(narrator);
            return Ok(());
        };

        let (result, rounds, name) = {
            let mut combat = Combat::new(&mut self.player, monster);
            let result = combat.run(die, input, narrator)?;
            (result, combat.rounds(), combat.monster().name.clone())
        };

        self.journal.append(JournalEntry::Combat {
            monster: name.clone(),
            result,
            rounds,
            player_hp: self.player.hp(),
            timestamp: Utc::now(),
        });

        match result {
            CombatResult::Won if room.is_final() => self.finish(RunOutcome::Victory, narrator),
            CombatResult::Won => {
                narrator.narrate(&DungeonEvent::MonsterDefeated { monster: name });
                self.advance(narrator);
            }
            CombatResult::Died => self.finish(RunOutcome::Slain { by: name }, narrator),
            CombatResult::Exited => self.finish(RunOutcome::FledCombat { from: name }, narrator),
        }
        Ok(())
    }

    fn flee<D, I, N>(
        &mut self,
        room: Room,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<()>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        let Some(monster) = self.roster.get(room).cloned() else {
            self.advance(narrator);
            return Ok(());
        };

        let roll = die.roll_d20();
        let outcome = FleeOutcome::from_roll(roll);
        tracing::info!(roll, %outcome, monster = %monster.name, "flee roll");
        self.record_roll(RollKind::Flee, roll, outcome.to_string());
        narrator.narrate(&DungeonEvent::FleeRolled {
            monster: monster.name.clone(),
            roll,
            outcome,
        });

        match outcome {
            FleeOutcome::CleanEscape => {
                self.grant(Item::StrengthElixir, narrator);
                self.advance(narrator);
            }
            FleeOutcome::Grazed => {
                let hit = apply_damage(&mut self.player, monster.atk_pwr);
                narrator.report(&Report::Damage(hit));
                if self.player.is_alive() {
                    self.advance(narrator);
                } else {
                    self.finish(RunOutcome::Slain { by: monster.name }, narrator);
                }
            }
            FleeOutcome::Caught => {
                let strike = die.roll_d20();
                let damage = strike + monster.atk_pwr;
                narrator.report(&Report::MonsterAttacked {
                    monster: monster.name.clone(),
                    roll: strike,
                    damage,
                });
                let hit = apply_damage(&mut self.player, damage);
                narrator.report(&Report::Damage(hit));
                if self.player.is_alive() {
                    self.fight(room, die, input, narrator)?;
                } else {
                    self.finish(RunOutcome::Slain { by: monster.name }, narrator);
                }
            }
        }
        Ok(())
    }

    fn pray<D, N>(&mut self, die: &mut D, narrator: &mut N)
    where
        D: DieRoller + ?Sized,
        N: Narrator + ?Sized,
    {
        let roll = die.roll_d20();
        let outcome = PrayerOutcome::from_roll(roll);
        match outcome {
            PrayerOutcome::Blessing => {
                self.player.adjust_max_hp(-BLESSING_MAX_HP_COST);
                self.player.adjust_atk_pwr(BLESSING_ATK_BONUS);
                self.player.restore_hp();
            }
            PrayerOutcome::Curse => {
                self.player.adjust_max_hp(-CURSE_MAX_HP_COST);
                self.player.adjust_atk_pwr(-CURSE_ATK_COST);
            }
            PrayerOutcome::Silence => {}
        }

        tracing::info!(roll, %outcome, "prayer roll");
        self.record_roll(RollKind::Prayer, roll, outcome.to_string());
        if outcome != PrayerOutcome::Silence {
            self.journal.append(JournalEntry::StatsChanged {
                cause: outcome.to_string(),
                hp: self.player.hp(),
                max_hp: self.player.max_hp(),
                atk_pwr: self.player.atk_pwr(),
                timestamp: Utc::now(),
            });
        }
        narrator.narrate(&DungeonEvent::PrayerRolled {
            roll,
            outcome,
            stats: self.player.stats(),
        });
    }

    fn deceive<D, I, N>(
        &mut self,
        room: Room,
        die: &mut D,
        input: &mut I,
        narrator: &mut N,
    ) -> DungeonResult<()>
    where
        D: DieRoller + ?Sized,
        I: ChoiceSource + ?Sized,
        N: Narrator + ?Sized,
    {
        let Some(name) = self.roster.get(room).map(|m| m.name.clone()) else {
            self.advance(narrator);
            return Ok(());
        };

        let roll = die.roll_d20();
        let outcome = DeceptionOutcome::from_roll(roll);
        tracing::info!(roll, %outcome, monster = %name, "deception roll");
        self.record_roll(RollKind::Deception, roll, outcome.to_string());
        narrator.narrate(&DungeonEvent::DeceptionRolled {
            monster: name,
            roll,
            outcome,
        });

        match outcome {
            DeceptionOutcome::Fooled => self.advance(narrator),
            DeceptionOutcome::SeenThrough => {
                if let Some(monster) = self.roster.get_mut(room) {
                    monster.empower(SEEN_THROUGH_ATK_BONUS, SEEN_THROUGH_HP_BONUS);
                    narrator.narrate(&DungeonEvent::MonsterEnraged {
                        monster: monster.clone(),
                    });
                }
                self.fight(room, die, input, narrator)?;
            }
            DeceptionOutcome::Suspicious => self.fight(room, die, input, narrator)?,
        }
        Ok(())
    }

    fn grant<N: Narrator + ?Sized>(&mut self, item: Item, narrator: &mut N) {
        let kept = self.player.add_item(item, narrator);
        self.journal.append(JournalEntry::ItemFound {
            item,
            kept,
            timestamp: Utc::now(),
        });
    }

    fn record_roll(&mut self, kind: RollKind, roll: i32, outcome: String) {
        self.journal.append(JournalEntry::Roll {
            kind,
            roll,
            outcome,
            timestamp: Utc::now(),
        });
    }

    fn advance<N: Narrator + ?Sized>(&mut self, narrator: &mut N) {
        self.current_room += 1;
        tracing::debug!(to = self.current_room, "moving on");
        narrator.narrate(&DungeonEvent::Advanced {
            to: self.current_room,
        });
    }

    fn finish<N: Narrator + ?Sized>(&mut self, outcome: RunOutcome, narrator: &mut N) {
        tracing::info!(%outcome, room = self.current_room, hp = self.player.hp(), "run ended");
        self.journal.append(JournalEntry::Ended {
            outcome: outcome.clone(),
            timestamp: Utc::now(),
        });
        narrator.narrate(&DungeonEvent::RunEnded {
            outcome: outcome.clone(),
        });
        self.outcome = Some(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecordingNarrator;
    use cc_mechanics::{Monster, ScriptedDie, ScriptedInput};

    /// A run already standing in `room`.
    fn run_at(room: u32, player: Player) -> DungeonRun {
        let mut run = DungeonRun::new(player, DungeonConfig::default());
        run.current_room = room;
        run
    }

    /// Step until the run ends.
    fn drive(run: &mut DungeonRun, rolls: &[i32], choices: &[i64]) -> RecordingNarrator {
        let mut die = ScriptedDie::new(rolls.iter().copied());
        let mut input = ScriptedInput::choices(choices.iter().copied());
        let mut narrator = RecordingNarrator::new();
        while !run.is_over() {
            run.step(&mut die, &mut input, &mut narrator).unwrap();
        }
        narrator
    }

    #[test]
    fn view_stats_keeps_the_room() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let mut die = ScriptedDie::default();
        let mut input = ScriptedInput::choices([3, 3]);
        let mut narrator = RecordingNarrator::new();

        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.current_room(), 1);
        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.current_room(), 1);

        assert_eq!(narrator.intros(Room::GreatChamber), 2);
        let stats = narrator
            .reports()
            .filter(|r| matches!(r, Report::Stats(_)))
            .count();
        assert_eq!(stats, 2);
        assert!(!run.is_over());
    }

    #[test]
    fn menu_reappears_until_exit() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let narrator = drive(&mut run, &[], &[3, 4, 5]);
        assert_eq!(narrator.intros(Room::GreatChamber), 3);
        assert_eq!(run.outcome(), Some(&RunOutcome::LeftDungeon));
        assert_eq!(run.current_room(), 1);
    }

    #[test]
    fn invalid_menu_choice_is_narrated() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let narrator = drive(&mut run, &[], &[9, 5]);
        assert!(narrator.events().any(|e| *e
            == DungeonEvent::InvalidChoice {
                room: Room::GreatChamber,
                choice: Some(9),
            }));
        assert_eq!(narrator.intros(Room::GreatChamber), 2);
    }

    #[test]
    fn empty_pack_from_the_menu() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let narrator = drive(&mut run, &[], &[4, 5]);
        assert!(narrator.reports().any(|r| *r == Report::InventoryEmpty));
        assert_eq!(run.current_room(), 1);
    }

    #[test]
    fn hallway_moves_on() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let narrator = drive(&mut run, &[], &[1, 5]);
        assert_eq!(run.current_room(), 2);
        assert_eq!(narrator.intros(Room::OrcBarracks), 1);
    }

    #[test]
    fn exploring_finds_a_potion_and_a_goblin() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        // Search, attack twice: 20 + 20 = 40, goblin hits 1 + 10, 20 + 20 = 40.
        drive(&mut run, &[20, 1, 20], &[2, 1, 1, 5]);

        assert_eq!(run.current_room(), 2);
        assert_eq!(run.player().hp(), 139);
        assert_eq!(run.player().inventory().items(), &[Item::HealthPotion]);
        assert_eq!(run.outcome(), Some(&RunOutcome::LeftDungeon));
    }

    #[test]
    fn leaving_a_fight_ends_the_run() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let narrator = drive(&mut run, &[], &[2, 4]);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::FledCombat {
                from: "Goblin".to_string()
            })
        );
        assert!(narrator.events().any(|e| matches!(e, DungeonEvent::ChamberSearched { .. })));
    }

    #[test]
    fn clean_escape_grants_an_elixir() {
        let mut run = run_at(2, Player::new("Ada"));
        drive(&mut run, &[3], &[2, 5]);
        assert_eq!(run.current_room(), 3);
        assert_eq!(run.player().inventory().items(), &[Item::StrengthElixir]);
        assert_eq!(run.player().hp(), 150);

        let entries = run.journal().entries();
        assert!(entries.iter().any(|e| matches!(
            e,
            JournalEntry::Roll {
                kind: RollKind::Flee,
                roll: 3,
                ..
            }
        )));
        assert!(entries.iter().any(|e| matches!(
            e,
            JournalEntry::ItemFound {
                item: Item::StrengthElixir,
                kept: true,
                ..
            }
        )));
    }

    #[test]
    fn grazed_escape_costs_the_orcs_attack() {
        let mut run = run_at(2, Player::new("Ada"));
        drive(&mut run, &[10], &[2, 5]);
        assert_eq!(run.current_room(), 3);
        assert_eq!(run.player().hp(), 135);
    }

    #[test]
    fn grazed_escape_can_kill() {
        let mut run = run_at(2, Player::with_stats("Ada", 10, 150, 20));
        drive(&mut run, &[14], &[2]);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Slain {
                by: "Orc".to_string()
            })
        );
        assert_eq!(run.current_room(), 2);
    }

    #[test]
    fn caught_fleeing_takes_a_free_hit_then_fights() {
        let mut run = run_at(2, Player::new("Ada"));
        // Caught on 18, free strike 10 + 15, then leave the fight.
        let narrator = drive(&mut run, &[18, 10], &[2, 4]);
        assert_eq!(run.player().hp(), 125);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::FledCombat {
                from: "Orc".to_string()
            })
        );
        assert!(narrator.reports().any(|r| matches!(r, Report::CombatStarted { .. })));
    }

    #[test]
    fn caught_and_killed_before_the_fight() {
        let mut run = run_at(2, Player::with_stats("Ada", 20, 150, 20));
        let narrator = drive(&mut run, &[15, 10], &[2]);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Slain {
                by: "Orc".to_string()
            })
        );
        assert!(!narrator.reports().any(|r| matches!(r, Report::CombatStarted { .. })));
    }

    #[test]
    fn blessing() {
        let mut run = run_at(3, Player::with_stats("Ada", 80, 150, 20));
        drive(&mut run, &[14], &[1, 5]);
        let p = run.player();
        assert_eq!(p.max_hp(), 145);
        assert_eq!(p.atk_pwr(), 30);
        assert_eq!(p.hp(), 145);
        assert_eq!(run.current_room(), 4);
        assert!(run.journal().entries().iter().any(|e| matches!(
            e,
            JournalEntry::StatsChanged {
                hp: 145,
                max_hp: 145,
                atk_pwr: 30,
                ..
            }
        )));
    }

    #[test]
    fn curse_clamps_hp() {
        let mut run = run_at(3, Player::new("Ada"));
        drive(&mut run, &[7], &[1, 5]);
        let p = run.player();
        assert_eq!(p.max_hp(), 140);
        assert_eq!(p.hp(), 140);
        assert_eq!(p.atk_pwr(), 15);
    }

    #[test]
    fn curse_leaves_low_hp_alone() {
        let mut run = run_at(3, Player::with_stats("Ada", 100, 150, 20));
        drive(&mut run, &[1], &[1, 5]);
        assert_eq!(run.player().hp(), 100);
        assert_eq!(run.player().max_hp(), 140);
    }

    #[test]
    fn silent_prayer_changes_nothing() {
        let mut run = run_at(3, Player::new("Ada"));
        drive(&mut run, &[10], &[1, 5]);
        assert_eq!(run.player().stats(), Player::new("Ada").stats());
        assert_eq!(run.current_room(), 4);
        assert!(
            !run.journal()
                .entries()
                .iter()
                .any(|e| matches!(e, JournalEntry::StatsChanged { .. }))
        );
    }

    #[test]
    fn walking_past_the_altar() {
        let mut run = run_at(3, Player::new("Ada"));
        let narrator = drive(&mut run, &[], &[2, 5]);
        assert_eq!(run.current_room(), 4);
        assert!(narrator.events().any(|e| *e == DungeonEvent::WalkedPast));
    }

    #[test]
    fn fooled_phantom_is_bypassed() {
        let mut run = run_at(4, Player::new("Ada"));
        let narrator = drive(&mut run, &[12], &[2, 4]);
        assert_eq!(run.current_room(), 5);
        assert_eq!(run.roster().get(Room::HallOfMirrors).map(|m| m.hp), Some(50));
        assert!(!narrator.reports().any(|r| matches!(r, Report::CombatStarted { .. })));
    }

    #[test]
    fn seen_through_enrages_the_phantom() {
        let mut run = run_at(4, Player::new("Ada"));
        let narrator = drive(&mut run, &[5], &[2, 4]);
        assert_eq!(
            run.roster().get(Room::HallOfMirrors),
            Some(&Monster::new("Phantom", 60, 15))
        );
        assert!(narrator.events().any(|e| matches!(e, DungeonEvent::MonsterEnraged { .. })));
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::FledCombat {
                from: "Phantom".to_string()
            })
        );
    }

    #[test]
    fn suspicious_phantom_fights_as_normal() {
        let mut run = run_at(4, Player::new("Ada"));
        drive(&mut run, &[8], &[2, 4]);
        assert_eq!(run.roster().get(Room::HallOfMirrors).map(|m| m.hp), Some(50));
        assert!(matches!(run.outcome(), Some(RunOutcome::FledCombat { .. })));
    }

    #[test]
    fn phantom_scenario_moves_on_to_the_sanctum() {
        let mut run = run_at(4, Player::new("Ada"));
        drive(&mut run, &[15, 5, 8], &[1, 1, 1, 4]);
        assert_eq!(run.player().hp(), 135);
        assert_eq!(run.current_room(), 5);
        assert_eq!(run.outcome(), Some(&RunOutcome::LeftDungeon));
        assert!(run.journal().entries().iter().any(|e| matches!(
            e,
            JournalEntry::Combat {
                result: CombatResult::Won,
                rounds: 2,
                player_hp: 135,
                ..
            }
        )));
    }

    #[test]
    fn slaying_the_necromancer_wins() {
        let mut roster = Roster::standard();
        roster.insert(Room::NecromancerSanctum, Monster::new("Necromancer", 10, 25));
        let mut run = DungeonRun::with_roster(Player::new("Ada"), roster, DungeonConfig::default());
        run.current_room = 5;

        drive(&mut run, &[1], &[1, 1]);
        assert_eq!(run.outcome(), Some(&RunOutcome::Victory));
        assert_eq!(run.current_room(), 5);
    }

    #[test]
    fn dying_ends_the_run() {
        let mut run = run_at(5, Player::with_stats("Ada", 10, 150, 20));
        // Attack for 1 + 20, necromancer answers 15 + 25.
        drive(&mut run, &[1, 15], &[1, 1]);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::Slain {
                by: "Necromancer".to_string()
            })
        );
        assert_eq!(run.player().hp(), -30);
    }

    #[test]
    fn unknown_room_ends_gracefully() {
        let mut run = run_at(6, Player::new("Ada"));
        let narrator = drive(&mut run, &[], &[]);
        assert_eq!(run.outcome(), Some(&RunOutcome::WanderedOff));
        assert_eq!(narrator.events().count(), 1);
    }

    #[test]
    fn block_left_after_leaving_a_fight() {
        let mut run = run_at(2, Player::new("Ada"));
        // Block 12 against the orc, orc hits 1 + 15 = 16, leave.
        drive(&mut run, &[12, 1], &[1, 2, 4]);
        assert_eq!(run.player().block(), 0);
        assert_eq!(run.player().hp(), 146);

        let mut run = run_at(2, Player::new("Ada"));
        drive(&mut run, &[20, 1], &[1, 2, 4]);
        assert_eq!(run.player().block(), 4);
    }

    #[test]
    fn block_carries_between_fights_by_default() {
        let mut roster = Roster::standard();
        roster.insert(Room::GreatChamber, Monster::new("Goblin", 21, 0));
        let mut run = DungeonRun::with_roster(Player::new("Ada"), roster, DungeonConfig::default());

        // Goblin: block 20, goblin hits 1, attack 1 + 20 kills it.
        // Orc: block is still there when the fight opens, then leave at once.
        let mut die = ScriptedDie::new([20, 1, 1]);
        let mut input = ScriptedInput::choices([2, 2, 1]);
        let mut narrator = RecordingNarrator::new();
        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.current_room(), 2);
        assert_eq!(run.player().block(), 19);

        let mut input = ScriptedInput::choices([1, 4]);
        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.player().block(), 19);
        assert_eq!(
            run.outcome(),
            Some(&RunOutcome::FledCombat {
                from: "Orc".to_string()
            })
        );
    }

    #[test]
    fn block_reset_is_configurable() {
        let mut roster = Roster::standard();
        roster.insert(Room::GreatChamber, Monster::new("Goblin", 21, 0));
        let config = DungeonConfig::default().with_block_reset(true);
        let mut run = DungeonRun::with_roster(Player::new("Ada"), roster, config);

        // Goblin: block 20, goblin hits 1, attack 1 + 20 kills it.
        // Orc: block is cleared before the fight, then leave at once.
        let mut die = ScriptedDie::new([20, 1, 1]);
        let mut input = ScriptedInput::choices([2, 2, 1, 1]);
        let mut narrator = RecordingNarrator::new();
        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.current_room(), 2);
        assert_eq!(run.player().block(), 19);

        let mut input = ScriptedInput::choices([1, 4]);
        run.step(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(run.player().block(), 0);
    }

    #[test]
    fn rooms_are_journaled_once() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        drive(&mut run, &[], &[3, 3, 1, 3, 5]);
        let rooms: Vec<Room> = run
            .journal()
            .entries()
            .iter()
            .filter_map(|e| match e {
                JournalEntry::RoomEntered { room, .. } => Some(*room),
                _ => None,
            })
            .collect();
        assert_eq!(rooms, vec![Room::GreatChamber, Room::OrcBarracks]);
    }

    #[test]
    fn play_from_the_door() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let mut die = ScriptedDie::default();
        let mut input = ScriptedInput::new(["yes", "3", "5"]);
        let mut narrator = RecordingNarrator::new();

        let outcome = run.play(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(outcome, RunOutcome::LeftDungeon);
        assert!(narrator.events().any(|e| *e == DungeonEvent::EnteredCrypt));
        assert!(narrator.events().any(|e| *e
            == DungeonEvent::Farewell {
                name: "Ada".to_string()
            }));
    }

    #[test]
    fn staying_outside() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let mut die = ScriptedDie::default();
        let mut input = ScriptedInput::new(["no"]);
        let mut narrator = RecordingNarrator::new();

        let outcome = run.play(&mut die, &mut input, &mut narrator).unwrap();
        assert_eq!(outcome, RunOutcome::StayedOutside);
        assert_eq!(narrator.intros(Room::GreatChamber), 0);
    }

    #[test]
    fn closed_input_stops_the_run() {
        let mut run = DungeonRun::new(Player::new("Ada"), DungeonConfig::default());
        let mut die = ScriptedDie::default();
        let mut input = ScriptedInput::new(["yes", "1"]);
        let mut narrator = RecordingNarrator::new();

        let err = run.play(&mut die, &mut input, &mut narrator).unwrap_err();
        assert!(err.is_input_closed());
        assert_eq!(run.current_room(), 2);
        assert!(!run.is_over());
    }

    #[test]
    fn outcome_display() {
        assert_eq!(RunOutcome::Victory.to_string(), "Victory");
        assert_eq!(
            RunOutcome::Slain {
                by: "Orc".to_string()
            }
            .to_string(),
            "Slain by the Orc"
        );
    }
}
