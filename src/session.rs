//! Per-game session state.
//!
//! A [`Session`] bundles everything that lives exactly as long as one maze: the navigator, the
//! animations and a few counters for the status line. It is built fresh on every start or restart
//! and dropped when the player leaves the game.

use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr as _};
use rand::Rng;

use crate::{
    maze::{Direction, Grid},
    navigation::{MoveGate as _, MoveResult, Navigator},
    transition::{TorchFlicker, Transition},
    types::Difficulty,
};

/// State of one play-through.
#[derive(Clone, Debug)]
pub(crate) struct Session {
    /// Tier the maze was generated for.
    pub(crate) difficulty: Difficulty,
    /// Player position within the maze.
    pub(crate) navigator: Navigator,
    /// Fade played after each move; gates further moves while running.
    pub(crate) transition: Transition,
    /// Torch brightness animation.
    pub(crate) torch: TorchFlicker,
    /// Side the player last tried to walk towards, used to place the torch.
    pub(crate) facing: Direction,
    /// Successful moves so far.
    pub(crate) moves: usize,
}

impl Session {
    /// Generates a maze for `difficulty` and places the player at its start.
    ///
    /// # Errors
    ///
    /// This function returns an error if the maze cannot be generated.
    pub(crate) fn new<R: Rng + ?Sized>(
        difficulty: Difficulty,
        rng: &mut R,
        transition: Duration,
    ) -> Result<Self> {
        let grid = Grid::generate(difficulty.size(), rng)
            .wrap_err_with(|| format!("failed to generate {} maze", difficulty.label()))?;

        Ok(Self {
            difficulty,
            navigator: Navigator::new(grid),
            transition: Transition::new(transition),
            torch: TorchFlicker::default(),
            facing: Direction::Up,
            moves: 0,
        })
    }

    /// Handles a move request from the input layer.
    ///
    /// Requests arriving while a fade is still running are dropped without any effect. Otherwise
    /// the player turns towards `direction`, even if a wall then stops the move, and a successful
    /// move counts towards the total and starts a new fade.
    pub(crate) fn move_player(&mut self, direction: Direction) -> MoveResult {
        if self.transition.is_busy() {
            return MoveResult::Blocked;
        }

        self.facing = direction;
        let result = self.navigator.attempt_move(direction);
        if result.is_moved() {
            self.moves += 1;
            self.transition.start(direction);
        }

        result
    }

    /// Advances the animations by one frame.
    pub(crate) fn tick(&mut self) {
        self.transition.update();
        self.torch.advance();
    }

    /// Whether the player stands on the exit and the last fade has finished playing.
    pub(crate) fn is_complete(&self) -> bool {
        self.navigator.is_finished() && !self.transition.is_active()
    }
}
