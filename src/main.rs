//! This crate contains the source code for the binary for the game torchmaze.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use torchmaze::{App, Settings};

fn main() -> Result<()> {
    install()?;
    let settings = Settings::parse();

    let mut terminal = ratatui::init();
    let result = App::new(settings).and_then(|mut app| app.run(&mut terminal));
    ratatui::restore();

    result
}
