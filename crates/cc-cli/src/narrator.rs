//! Console rendering of combat reports and dungeon events.
//!
//! All of the game's prose lives here. Damage is red, healing green,
//! rolls yellow and headings bold.

use std::fmt::Display;
use std::io::{self, Write};

use cc_dungeon::{
    DeceptionOutcome, DungeonEvent, FleeOutcome, Narrator, PrayerOutcome, Room, RoomAction,
    RoomOption, RunOutcome,
};
use cc_mechanics::{
    CombatResult, DamageReport, Item, PlayerAction, Presenter, Report, StatSnapshot,
};
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

/// Menu label for one room option.
pub fn option_label(room: Room, option: RoomOption) -> &'static str {
    match option {
        RoomOption::ViewStats => "View stats",
        RoomOption::Inventory => "Open inventory",
        RoomOption::ExitGame => "Leave the crypt",
        RoomOption::Act(action) => match (room, action) {
            (Room::GreatChamber, RoomAction::MoveOn) => "Move down the hallway",
            (_, RoomAction::MoveOn) => "Walk past",
            (_, RoomAction::ExploreChamber) => "Explore the chamber",
            (Room::OrcBarracks, RoomAction::Fight) => "Fight the Orc",
            (Room::HallOfMirrors, RoomAction::Fight) => "Fight the Phantom",
            (Room::NecromancerSanctum, RoomAction::Fight) => "Fight the Necromancer",
            (_, RoomAction::Fight) => "Fight",
            (_, RoomAction::Flee) => "Try to slip past",
            (_, RoomAction::Pray) => "Pray at the altar",
            (_, RoomAction::Deceive) => "Pretend to be a reflection",
        },
    }
}

fn describe(room: Room) -> &'static str {
    match room {
        Room::GreatChamber => {
            "You enter a large, dark and musty chamber. In front of you looms a long and \
             narrow hallway. Do you head down the hallway or explore the chamber first?"
        }
        Room::OrcBarracks => {
            "Rusted bunks line the walls of the old barracks. An Orc rises from its meal \
             and blocks the stairs down."
        }
        Room::ForgottenShrine => {
            "A cracked altar to a forgotten god stands in the middle of the room. A few \
             candles still flicker on it."
        }
        Room::HallOfMirrors => {
            "Mirrors cover every wall. One of the reflections moves when you do not: a \
             Phantom!"
        }
        Room::NecromancerSanctum => {
            "You enter the final room and face off against a powerful Necromancer!"
        }
    }
}

/// Writes everything the game has to say to `W`.
pub struct ConsoleNarrator<W> {
    out: W,
}

impl ConsoleNarrator<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleNarrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// The title and the name prompt.
    pub fn ask_name(&mut self) {
        self.line("Welcome to Cryptcrawl, a simple dungeon crawl!".bold());
        self.prompt("Please enter the name of your character: ");
    }

    // The output helpers below ignore write errors.
    fn line(&mut self, text: impl Display) {
        let _ = writeln!(self.out, "{text}");
    }

    fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Text with no trailing newline, flushed at once.
    fn prompt(&mut self, text: impl Display) {
        let _ = write!(self.out, "{text}");
        let _ = self.out.flush();
    }

    fn stats(&mut self, s: &StatSnapshot) {
        self.line(format!(
            "You currently have {} HP and {} attack power.",
            s.hp, s.atk_pwr
        ));

        let pack = if s.items.is_empty() {
            "empty".to_string()
        } else {
            s.items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Adventurer", s.name.as_str()]);
        table.add_row(vec!["HP".to_string(), format!("{}/{}", s.hp, s.max_hp)]);
        table.add_row(vec!["Attack".to_string(), s.atk_pwr.to_string()]);
        table.add_row(vec!["Block".to_string(), s.block.to_string()]);
        table.add_row(vec!["Pack".to_string(), pack]);
        self.line(table);
    }

    fn room_intro(&mut self, room: Room) {
        self.blank();
        self.line(format!("== Room {}: {room} ==", room.number()).bold());
        self.line(describe(room));
        for (i, option) in room.menu().into_iter().enumerate() {
            self.line(format!("{}: {}", i + 1, option_label(room, option)));
        }
        self.prompt("> ");
    }

    fn damage(&mut self, d: &DamageReport) {
        if d.absorbed > 0 {
            self.line(format!(
                "Your guard absorbs {} damage ({} block left).",
                d.absorbed, d.block_left
            ));
        }
        if d.taken > 0 {
            self.line(format!("You take {} damage. HP: {}", d.taken, d.hp_left).red());
        } else {
            self.line("You take no damage.");
        }
    }

    fn run_ended(&mut self, outcome: &RunOutcome) {
        match outcome {
            RunOutcome::Victory => self.line(
                "The Necromancer crumbles to dust. You have conquered the crypt!"
                    .green()
                    .bold(),
            ),
            RunOutcome::Slain { by } => {
                self.line(format!("You have been defeated by the {by}! Game Over.").red().bold());
            }
            RunOutcome::FledCombat { from } => {
                self.line(format!("You turn and run from the {from}. Your adventure ends here."));
            }
            RunOutcome::LeftDungeon => self.line("You have exited the dungeon."),
            RunOutcome::StayedOutside => self.line(
                "You decide to stay outside and miss out on the adventure that awaits inside the crypt.",
            ),
            RunOutcome::WanderedOff => {
                self.line("You wander into the dark and lose your way out of the crypt.");
            }
        }
    }
}

impl<W: Write> Presenter for ConsoleNarrator<W> {
    fn report(&mut self, report: &Report) {
        match report {
            Report::Stats(stats) => self.stats(stats),
            Report::ItemAdded(item) => {
                self.line(format!("You have added {item} to your inventory.").green());
            }
            Report::InventoryFull(item) => {
                self.line(format!("Your inventory is full! You cannot add {item}.").yellow());
            }
            Report::InventoryEmpty => self.line("Your inventory is empty!"),
            Report::InventoryListing(items) => {
                self.line("Your Inventory:".bold());
                for (i, item) in items.iter().enumerate() {
                    self.line(format!("{}: {item}", i + 1));
                }
                self.line("0: Close Inventory");
                self.prompt("> ");
            }
            Report::InventoryClosed => self.line("You close your inventory."),
            Report::InvalidItemChoice { .. } => {
                self.line("Invalid choice! Please select a valid item number.".yellow());
            }
            Report::ItemUsed { item, stats } => {
                let effect = match item {
                    Item::HealthPotion => format!("HP: {}/{}", stats.hp, stats.max_hp),
                    Item::StrengthElixir => format!("Attack power: {}", stats.atk_pwr),
                };
                self.line(format!("You drink the {item}. {effect}").green());
            }
            Report::CombatStarted { monster } => {
                self.blank();
                self.line(format!("You are fighting a {monster}!").bold());
            }
            Report::Standoff {
                player_hp,
                monster,
                monster_hp,
            } => {
                let standoff = format!("Player HP: {player_hp} | {monster} HP: {monster_hp}");
                self.blank();
                self.line(standoff);
            }
            Report::ActionPrompt => {
                self.line("Choose your action:");
                for action in PlayerAction::ALL {
                    self.line(format!("{}: {action}", action.number()));
                }
                self.prompt("> ");
            }
            Report::PlayerAttacked {
                roll,
                damage,
                monster,
                monster_hp,
            } => {
                self.line(format!(
                    "You roll a {} and strike the {monster} for {damage} damage. ({monster} HP: {monster_hp})",
                    roll.to_string().yellow()
                ));
            }
            Report::PlayerBlocked { roll, block } => {
                self.line(format!(
                    "You roll a {} and raise your guard. Block: {block}",
                    roll.to_string().yellow()
                ));
            }
            Report::InvalidAction { .. } => {
                self.line("Invalid choice! Please select a valid action number.".yellow());
            }
            Report::PlayerExited { monster } => {
                self.line(format!("You back away from the {monster}."));
            }
            Report::MonsterAttacked {
                monster,
                roll,
                damage,
            } => {
                self.line(format!(
                    "The {monster} attacks you! (roll {}, {damage} damage)",
                    roll.to_string().yellow()
                ));
            }
            Report::Damage(d) => self.damage(d),
            Report::CombatEnded { monster, result } => match result {
                CombatResult::Won => self.line(format!("The {monster} falls!").green()),
                CombatResult::Died => self.line(format!("The {monster} stands over you.").red()),
                CombatResult::Exited => {}
            },
        }
    }
}

impl<W: Write> Narrator for ConsoleNarrator<W> {
    fn narrate(&mut self, event: &DungeonEvent) {
        match event {
            DungeonEvent::Welcome { name } => {
                self.line(format!(
                    "Welcome, {name}! You are a brave adventurer embarking on a quest."
                ));
            }
            DungeonEvent::CryptEntrance => self.prompt(
                "You find yourself standing in front of a dark and ominous crypt. \
                 Do you wish to enter? (yes/no) ",
            ),
            DungeonEvent::EnteredCrypt => self.line(
                "You step into the crypt and the door slams shut behind you. You are now trapped inside!",
            ),
            DungeonEvent::RoomIntro { room } => self.room_intro(*room),
            DungeonEvent::InvalidChoice { .. } => {
                self.line("Invalid choice! Please select a valid option.".yellow());
            }
            DungeonEvent::ChamberSearched { monster } => self.line(format!(
                "You explore the chamber and find a health potion hidden in a chest! But something \
                 in the shadows seems upset that you took what wasn't yours. You are confronted by a {monster}!"
            )),
            DungeonEvent::FleeRolled {
                monster,
                roll,
                outcome,
            } => {
                self.line(format!(
                    "You try to slip past the {monster}... you rolled {}.",
                    roll.to_string().yellow()
                ));
                match outcome {
                    FleeOutcome::CleanEscape => self.line(
                        "You slip by unseen and snatch a vial from the weapon rack on your way out!",
                    ),
                    FleeOutcome::Grazed => self.line(format!(
                        "You make it past, but the {monster} catches you with a glancing blow."
                    )),
                    FleeOutcome::Caught => {
                        self.line(format!("The {monster} blocks your path and strikes first!"));
                    }
                }
            }
            DungeonEvent::PrayerRolled {
                roll,
                outcome,
                stats,
            } => {
                self.line(format!(
                    "You kneel at the altar and pray... you rolled {}.",
                    roll.to_string().yellow()
                ));
                match outcome {
                    PrayerOutcome::Blessing => self.line(
                        format!(
                            "A warm light washes over you. You feel stronger, though something was \
                             taken in return. HP: {}/{}, attack power: {}",
                            stats.hp, stats.max_hp, stats.atk_pwr
                        )
                        .green(),
                    ),
                    PrayerOutcome::Silence => {
                        self.line("Nothing answers. The candles keep flickering.");
                    }
                    PrayerOutcome::Curse => self.line(
                        format!(
                            "A cold wind snuffs out the candles and you feel drained. HP: {}/{}, \
                             attack power: {}",
                            stats.hp, stats.max_hp, stats.atk_pwr
                        )
                        .red(),
                    ),
                }
            }
            DungeonEvent::WalkedPast => {
                self.line("You leave the altar undisturbed and walk on.");
            }
            DungeonEvent::DeceptionRolled {
                monster,
                roll,
                outcome,
            } => {
                self.line(format!(
                    "You stand still and try to pass for another reflection... you rolled {}.",
                    roll.to_string().yellow()
                ));
                match outcome {
                    DeceptionOutcome::Fooled => {
                        self.line(format!("The {monster} drifts past you, fooled."));
                    }
                    DeceptionOutcome::Suspicious => {
                        self.line(format!("The {monster} is not convinced and attacks!"));
                    }
                    DeceptionOutcome::SeenThrough => {
                        self.line(format!("The {monster} sees right through you!").red());
                    }
                }
            }
            DungeonEvent::MonsterEnraged { monster } => {
                self.line(format!("The {} shrieks with rage: {monster}", monster.name).red());
            }
            DungeonEvent::MonsterDefeated { monster } => self.line(
                format!("You have defeated the {monster} and continue on to the next room.")
                    .green(),
            ),
            DungeonEvent::Advanced { .. } => {
                self.line("You cautiously make your way onward...".dimmed());
            }
            DungeonEvent::RunEnded { outcome } => self.run_ended(outcome),
            DungeonEvent::Farewell { name } => {
                self.blank();
                self.line(format!("Thanks for playing, {name}!").bold());
            }
        }
    }
}
