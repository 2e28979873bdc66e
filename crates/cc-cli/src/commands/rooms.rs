use cc_dungeon::{Room, RoomOption, Roster};
use comfy_table::{ContentArrangement, Table};

use crate::narrator::option_label;

pub fn run() -> Result<(), String> {
    let roster = Roster::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Room", "Guardian", "Moves"]);

    for room in Room::ALL {
        let guardian = roster
            .get(room)
            .map_or_else(|| "none".to_string(), ToString::to_string);
        let moves = room
            .actions()
            .iter()
            .map(|a| option_label(room, RoomOption::Act(*a)))
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            room.number().to_string(),
            room.to_string(),
            guardian,
            moves,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} rooms", Room::ALL.len());

    Ok(())
}
