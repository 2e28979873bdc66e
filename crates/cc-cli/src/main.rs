//! Console front end for Cryptcrawl, a turn-based crawl through a five-room crypt.

mod commands;
mod console;
mod narrator;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "crypt",
    about = "Cryptcrawl: a turn-based crawl through a five-room crypt",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions (rolls, turns, room changes) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter the crypt and play a run
    Play {
        /// RNG seed for a reproducible run (default: taken from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Character name (default: asked for on stdin)
        #[arg(short, long)]
        name: Option<String>,

        /// Clear leftover block before every fight
        #[arg(long)]
        reset_block: bool,

        /// Print the run journal afterwards in this format
        #[arg(short, long, value_parser = ["markdown", "text", "json"])]
        journal: Option<String>,
    },

    /// List the rooms and what waits in them
    Rooms,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Play {
            seed,
            name,
            reset_block,
            journal,
        } => commands::play::run(seed, name.as_deref(), reset_block, journal.as_deref()),
        Commands::Rooms => commands::rooms::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
