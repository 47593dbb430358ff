//! Command-line configuration.

use std::time::Duration;

use clap::Parser;

use crate::{transition::DEFAULT_TRANSITION_MS, types::Difficulty};

/// Command-line arguments for launching the game.
#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Settings {
    /// Skip the main menu and start straight away at this difficulty.
    #[arg(short, long, value_enum)]
    pub difficulty: Option<Difficulty>,
    /// Seed for the maze generator; the same seed replays the same sequence of mazes.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Length of the fade played after each move, in milliseconds.
    #[arg(
        long = "transition-ms",
        value_name = "MILLISECONDS",
        default_value_t = DEFAULT_TRANSITION_MS,
        value_parser = clap::value_parser!(u64).range(1..=5_000)
    )]
    pub transition_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: None,
            seed: None,
            transition_ms: DEFAULT_TRANSITION_MS,
        }
    }
}

impl Settings {
    /// Length of the fade played after each move.
    #[must_use]
    pub const fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
