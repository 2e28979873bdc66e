//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;
use crate::error::{DungeonError, DungeonResult};

/// A chronological log of run events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export in a named format: `markdown`/`md`, `text`/`txt` or `json`.
    pub fn export(&self, format: &str) -> DungeonResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.export_markdown()),
            "text" | "txt" => Ok(self.export_text()),
            "json" => self.export_json(),
            other => Err(DungeonError::UnknownFormat(other.to_string())),
        }
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Crypt Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::RoomEntered { room, .. } => {
                    out.push_str(&format!("## Room {}: {room}\n\n", room.number()));
                }
                JournalEntry::ItemFound { item, kept, .. } => {
                    if *kept {
                        out.push_str(&format!("*Found* {item}\n\n"));
                    } else {
                        out.push_str(&format!("*Found* {item} (pack full, left behind)\n\n"));
                    }
                }
                JournalEntry::Roll {
                    kind,
                    roll,
                    outcome,
                    ..
                } => {
                    out.push_str(&format!("**{kind}** roll {roll}: {outcome}\n\n"));
                }
                JournalEntry::StatsChanged {
                    cause,
                    hp,
                    max_hp,
                    atk_pwr,
                    ..
                } => {
                    out.push_str(&format!("*{cause}*: HP {hp}/{max_hp}, ATK {atk_pwr}\n\n"));
                }
                JournalEntry::Combat {
                    monster,
                    result,
                    rounds,
                    player_hp,
                    ..
                } => {
                    out.push_str(&format!(
                        "**Combat** vs {monster}: {result} after {rounds} round{} (HP {player_hp})\n\n",
                        if *rounds == 1 { "" } else { "s" }
                    ));
                }
                JournalEntry::Ended { outcome, .. } => {
                    out.push_str(&format!("---\n\n**Outcome**: {outcome}\n"));
                }
            }
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Crypt Journal\n=============\n\n");
        for entry in &self.entries {
            let time = entry.timestamp().format("%H:%M:%S");
            match entry {
                JournalEntry::RoomEntered { room, .. } => {
                    out.push_str(&format!("[{time}] Room {}: {room}\n", room.number()));
                }
                JournalEntry::ItemFound { item, kept, .. } => {
                    let note = if *kept { "" } else { " (left behind)" };
                    out.push_str(&format!("[{time}] Found {item}{note}\n"));
                }
                JournalEntry::Roll {
                    kind,
                    roll,
                    outcome,
                    ..
                } => {
                    out.push_str(&format!("[{time}] {kind} roll {roll}: {outcome}\n"));
                }
                JournalEntry::StatsChanged {
                    cause,
                    hp,
                    max_hp,
                    atk_pwr,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{time}] {cause}: HP {hp}/{max_hp}, ATK {atk_pwr}\n"
                    ));
                }
                JournalEntry::Combat {
                    monster,
                    result,
                    rounds,
                    player_hp,
                    ..
                } => {
                    out.push_str(&format!(
                        "[{time}] Combat vs {monster}: {result}, {rounds} rounds, HP {player_hp}\n"
                    ));
                }
                JournalEntry::Ended { outcome, .. } => {
                    out.push_str(&format!("[{time}] Outcome: {outcome}\n"));
                }
            }
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> DungeonResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::RollKind;
    use crate::room::Room;
    use crate::run::RunOutcome;
    use cc_mechanics::{CombatResult, Item};
    use chrono::Utc;

    fn sample() -> Journal {
        let mut j = Journal::new();
        j.append(JournalEntry::RoomEntered {
            room: Room::OrcBarracks,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Roll {
            kind: RollKind::Flee,
            roll: 3,
            outcome: "Clean Escape".to_string(),
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::ItemFound {
            item: Item::StrengthElixir,
            kept: true,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::StatsChanged {
            cause: "Blessing".to_string(),
            hp: 145,
            max_hp: 145,
            atk_pwr: 30,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Combat {
            monster: "Phantom".to_string(),
            result: CombatResult::Won,
            rounds: 1,
            player_hp: 135,
            timestamp: Utc::now(),
        });
        j.append(JournalEntry::Ended {
            outcome: RunOutcome::Victory,
            timestamp: Utc::now(),
        });
        j
    }

    #[test]
    fn empty_journal() {
        let j = Journal::new();
        assert!(j.is_empty());
        assert_eq!(j.len(), 0);
        assert_eq!(j.export_markdown(), "# Crypt Journal\n\n");
    }

    #[test]
    fn markdown_export() {
        let md = sample().export_markdown();
        assert!(md.starts_with("# Crypt Journal"));
        assert!(md.contains("## Room 2: Orc Barracks"));
        assert!(md.contains("**Flee** roll 3: Clean Escape"));
        assert!(md.contains("*Found* Strength Elixir"));
        assert!(md.contains("*Blessing*: HP 145/145, ATK 30"));
        assert!(md.contains("**Combat** vs Phantom: Won after 1 round (HP 135)"));
        assert!(md.contains("**Outcome**: Victory"));
    }

    #[test]
    fn text_export() {
        let txt = sample().export_text();
        assert!(txt.starts_with("Crypt Journal\n"));
        assert!(txt.contains("Room 2: Orc Barracks"));
        assert!(txt.contains("] Blessing: HP 145/145, ATK 30\n"));
        assert!(txt.contains("Combat vs Phantom: Won, 1 rounds, HP 135"));
    }

    #[test]
    fn json_round_trip() {
        let j = sample();
        let json = j.export("json").unwrap();
        let back: Vec<JournalEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, j.entries());
    }

    #[test]
    fn export_by_name() {
        let j = sample();
        assert!(j.export("md").unwrap().starts_with("# Crypt Journal"));
        assert!(j.export("TXT").unwrap().starts_with("Crypt Journal"));
        assert!(matches!(
            j.export("yaml"),
            Err(DungeonError::UnknownFormat(f)) if f == "yaml"
        ));
    }
}
