//! Play one run at the console.

use std::io;

use cc_dungeon::{DungeonConfig, DungeonEvent, DungeonRun, Narrator};
use cc_mechanics::{MechError, Player, RandomDie};

use crate::console::ConsoleInput;
use crate::narrator::ConsoleNarrator;

const DEFAULT_NAME: &str = "Adventurer";

pub fn run(
    seed: Option<u64>,
    name: Option<&str>,
    reset_block: bool,
    journal: Option<&str>,
) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock());
    let mut ui = ConsoleNarrator::stdout();

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            ui.ask_name();
            match input.read_line() {
                Ok(typed) if typed.is_empty() => DEFAULT_NAME.to_string(),
                Ok(typed) => typed,
                Err(MechError::InputClosed) => return Ok(()),
                Err(e) => return Err(e.to_string()),
            }
        }
    };

    let mut config = DungeonConfig::default().with_block_reset(reset_block);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut die = RandomDie::seeded(config.resolve_seed());
    tracing::info!(seed = die.seed(), "rolling with seed");

    let mut run = DungeonRun::new(Player::new(name), config);

    match run.play(&mut die, &mut input, &mut ui) {
        Ok(_) => {}
        Err(e) if e.is_input_closed() => {
            tracing::info!(room = run.current_room(), "input closed, leaving the crypt");
            ui.narrate(&DungeonEvent::Farewell {
                name: run.player().name().to_string(),
            });
        }
        Err(e) => return Err(e.to_string()),
    }

    if let Some(format) = journal {
        let text = run.journal().export(format).map_err(|e| e.to_string())?;
        println!();
        println!("{text}");
    }

    Ok(())
}
