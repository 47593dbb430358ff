//! A torch-lit maze crawler for the terminal.
//!
//! The player explores a square labyrinth one room at a time, seeing only the walls and doorways
//! of the room they stand in. Mazes are built by the [`maze`] module: a randomised depth-first
//! carving guarantees that every room is reachable from the entrance, then a short relaxation
//! pass knocks down a few extra walls to open loops. The [`navigation`] module enforces the
//! movement rules on top of a finished maze; everything else is the terminal front end.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
mod events;
pub mod maze;
pub mod navigation;
mod session;
mod settings;
mod transition;
mod types;
mod ui;

pub use app::App;
pub use settings::Settings;
pub use types::Difficulty;
