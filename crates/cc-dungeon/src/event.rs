//! Narrative events and the narrator that renders them.

use cc_mechanics::{Monster, Presenter, Report, StatSnapshot};

use crate::roll::{DeceptionOutcome, FleeOutcome, PrayerOutcome};
use crate::room::Room;
use crate::run::RunOutcome;

/// Something that happened at the dungeon level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DungeonEvent {
    /// The adventurer arrives.
    Welcome {
        /// Character name.
        name: String,
    },
    /// The crypt door awaits a yes/no.
    CryptEntrance,
    /// The player went in; the door shut behind them.
    EnteredCrypt,
    /// A room's description and menu should be shown.
    RoomIntro {
        /// The room.
        room: Room,
    },
    /// The menu choice did not match an option.
    InvalidChoice {
        /// The room whose menu was shown.
        room: Room,
        /// What was entered, or `None` if it was not a number.
        choice: Option<i64>,
    },
    /// The chamber was searched and its guardian woke up.
    ChamberSearched {
        /// The guardian.
        monster: String,
    },
    /// A flee roll was made.
    FleeRolled {
        /// The monster being fled.
        monster: String,
        /// The d20.
        roll: i32,
        /// Its band.
        outcome: FleeOutcome,
    },
    /// A prayer roll was made.
    PrayerRolled {
        /// The d20.
        roll: i32,
        /// Its band.
        outcome: PrayerOutcome,
        /// The player's stats afterwards.
        stats: StatSnapshot,
    },
    /// The player walked past the altar.
    WalkedPast,
    /// A deception roll was made.
    DeceptionRolled {
        /// The monster being tricked.
        monster: String,
        /// The d20.
        roll: i32,
        /// Its band.
        outcome: DeceptionOutcome,
    },
    /// A monster was strengthened before the fight.
    MonsterEnraged {
        /// The monster after the boost.
        monster: Monster,
    },
    /// A monster fell and the way on is open.
    MonsterDefeated {
        /// The fallen monster.
        monster: String,
    },
    /// The player moved on to another room.
    Advanced {
        /// The new room number.
        to: u32,
    },
    /// The run is over.
    RunEnded {
        /// How it ended.
        outcome: RunOutcome,
    },
    /// Parting words once play stops.
    Farewell {
        /// Character name.
        name: String,
    },
}

/// Renders dungeon events as well as mechanics reports.
pub trait Narrator: Presenter {
    /// Render one dungeon event.
    fn narrate(&mut self, event: &DungeonEvent);
}

/// One thing a [`RecordingNarrator`] heard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Heard {
    /// A mechanics report.
    Report(Report),
    /// A dungeon event.
    Event(DungeonEvent),
}

/// A narrator that keeps everything it is told, in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNarrator {
    /// Everything heard, oldest first.
    pub heard: Vec<Heard>,
}

impl RecordingNarrator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The dungeon events heard so far.
    pub fn events(&self) -> impl Iterator<Item = &DungeonEvent> {
        self.heard.iter().filter_map(|h| match h {
            Heard::Event(e) => Some(e),
            Heard::Report(_) => None,
        })
    }

    /// The mechanics reports heard so far.
    pub fn reports(&self) -> impl Iterator<Item = &Report> {
        self.heard.iter().filter_map(|h| match h {
            Heard::Report(r) => Some(r),
            Heard::Event(_) => None,
        })
    }

    /// How many times a room's menu was shown.
    pub fn intros(&self, room: Room) -> usize {
        self.events()
            .filter(|e| **e == DungeonEvent::RoomIntro { room })
            .count()
    }
}

impl Presenter for RecordingNarrator {
    fn report(&mut self, report: &Report) {
        self.heard.push(Heard::Report(report.clone()));
    }
}

impl Narrator for RecordingNarrator {
    fn narrate(&mut self, event: &DungeonEvent) {
        self.heard.push(Heard::Event(event.clone()));
    }
}
