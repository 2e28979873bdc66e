//! The monsters waiting in each room.

use std::collections::HashMap;

use cc_mechanics::Monster;

use crate::room::Room;

/// One monster per guarded room, created when the run starts.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    monsters: HashMap<Room, Monster>,
}

impl Roster {
    /// An empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// The crypt's standard line-up.
    pub fn standard() -> Self {
        let mut roster = Self::new();
        roster.insert(Room::GreatChamber, Monster::new("Goblin", 50, 10));
        roster.insert(Room::OrcBarracks, Monster::new("Orc", 80, 15));
        roster.insert(Room::HallOfMirrors, Monster::new("Phantom", 50, 10));
        roster.insert(Room::NecromancerSanctum, Monster::new("Necromancer", 150, 25));
        roster
    }

    /// Place (or replace) a room's monster.
    pub fn insert(&mut self, room: Room, monster: Monster) {
        self.monsters.insert(room, monster);
    }

    /// The monster guarding a room.
    pub fn get(&self, room: Room) -> Option<&Monster> {
        self.monsters.get(&room)
    }

    /// Mutable access to a room's monster.
    pub fn get_mut(&mut self, room: Room) -> Option<&mut Monster> {
        self.monsters.get_mut(&room)
    }
}
