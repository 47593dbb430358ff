//! Player navigation over a generated maze.
//!
//! The [`Navigator`] owns a finished [`Grid`] and the player's position within it, and decides
//! whether a requested move is legal. It never mutates the grid.

use std::collections::BTreeSet;

use crate::maze::{Cell, Direction, Grid, Position};

/// Outcome of a move attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// The player walked into a neighbouring room.
    Moved {
        /// Column of the room entered.
        x: usize,
        /// Row of the room entered.
        y: usize,
        /// Whether the room entered is the exit.
        reached_end: bool,
    },
    /// A wall, the grid boundary or a busy caller stopped the move. Nothing changed.
    Blocked,
}

impl MoveResult {
    /// Returns `true` for [`MoveResult::Moved`].
    #[must_use]
    pub const fn is_moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Something that can hold off player moves for a while, such as an in-flight room transition.
///
/// This trait lets the presentation layer veto moves without the navigator knowing anything about
/// timers or animations; [`Navigator::attempt_move_gated`] consults it before every move.
pub trait MoveGate {
    /// Returns `true` while moves must be rejected.
    fn is_busy(&self) -> bool;
}

impl MoveGate for bool {
    fn is_busy(&self) -> bool {
        *self
    }
}

/// The player's whereabouts in a maze.
///
/// This structure owns a finished [`Grid`] together with the room the player stands in and the
/// rooms entered so far. Moves only succeed through open walls and never leave the grid, and a
/// refused move leaves every field as it was.
#[derive(Clone, Debug)]
pub struct Navigator {
    /// The maze being explored.
    grid: Grid,
    /// Room the player currently stands in.
    position: Position,
    /// Rooms entered so far, the start included.
    ///
    /// This field only grows, and only feeds the minimap and the exploration counter; it plays no
    /// part in deciding whether a move is legal.
    visited: BTreeSet<Position>,
}

impl Navigator {
    /// Places a player on the start cell of `grid`.
    ///
    /// The start cell counts as visited from the outset.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let position = grid.start();

        Self {
            grid,
            position,
            visited: BTreeSet::from([position]),
        }
    }

    /// The maze being explored.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Room the player currently stands in.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Rooms entered so far.
    #[must_use]
    pub const fn visited(&self) -> &BTreeSet<Position> {
        &self.visited
    }

    /// Whether the player has been in the room at `position`.
    #[must_use]
    pub fn has_visited(&self, position: Position) -> bool {
        self.visited.contains(&position)
    }

    /// The room the player currently stands in.
    #[must_use]
    pub fn current_cell(&self) -> Option<&Cell> {
        self.grid.cell(self.position)
    }

    /// Whether the player stands on the exit.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current_cell().is_some_and(Cell::is_end)
    }

    /// Tries to walk one room in `direction`.
    ///
    /// The move goes through only if the current room has no wall on that side and the target
    /// stays inside the grid. A blocked attempt leaves the navigator untouched, so repeating it is
    /// harmless.
    pub fn attempt_move(&mut self, direction: Direction) -> MoveResult {
        let Some(cell) = self.grid.cell(self.position) else {
            return MoveResult::Blocked;
        };
        if cell.walls().contains(direction) {
            return MoveResult::Blocked;
        }
        let Some(next) = self.position.step(direction, self.grid.size()) else {
            return MoveResult::Blocked;
        };

        self.position = next;
        let _ = self.visited.insert(next);

        MoveResult::Moved {
            x: next.x,
            y: next.y,
            reached_end: self.grid.cell(next).is_some_and(Cell::is_end),
        }
    }

    /// Like [`attempt_move`](Navigator::attempt_move), but rejects the move outright while `gate`
    /// reports itself busy.
    pub fn attempt_move_gated<G: MoveGate + ?Sized>(
        &mut self,
        direction: Direction,
        gate: &G,
    ) -> MoveResult {
        if gate.is_busy() {
            return MoveResult::Blocked;
        }

        self.attempt_move(direction)
    }
}
