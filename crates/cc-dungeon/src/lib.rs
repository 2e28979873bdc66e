//! Room-by-room progression through the crypt.
//!
//! A [`DungeonRun`] walks the player through five rooms in order. Each
//! room offers a menu of moves; some start a fight, some roll a d20 for
//! a flee, prayer or deception check. Everything that happens is sent to
//! a [`Narrator`] and recorded in the run's [`Journal`].

pub mod config;
pub mod error;
pub mod event;
pub mod journal;
pub mod roll;
pub mod room;
pub mod roster;
pub mod run;

pub use config::DungeonConfig;
pub use error::{DungeonError, DungeonResult};
pub use event::{DungeonEvent, Heard, Narrator, RecordingNarrator};
pub use journal::{Journal, JournalEntry};
pub use roll::{DeceptionOutcome, FleeOutcome, PrayerOutcome, RollKind};
pub use room::{Room, RoomAction, RoomOption};
pub use roster::Roster;
pub use run::{DungeonRun, RunOutcome};
