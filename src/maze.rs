//! Maze grid model and generator.
//!
//! This module contains the [`Grid`] type along with the cells, walls and directions it is built
//! from, and the two-phase generator: a randomised depth-first carving that yields a spanning tree
//! over every cell, followed by a bounded relaxation pass that knocks down a few extra walls to
//! introduce loops.

use color_eyre::eyre::{ensure, OptionExt as _, Result};
use rand::{seq::IndexedRandom as _, Rng};

/// Numerator of the ratio of relaxation rounds to the side of the grid.
const EXTRA_OPENING_NUMERATOR: usize = 3;

/// Denominator of the ratio of relaxation rounds to the side of the grid.
const EXTRA_OPENING_DENOMINATOR: usize = 10;

/// Chance that a relaxation round actually clears the wall it picked.
const EXTRA_OPENING_CHANCE: f64 = 0.3;

/// One of the four sides of a cell.
///
/// Directions double as movement commands for the player and as wall identifiers within a cell,
/// so every direction maps to a grid offset, to the opposite side and to a bit in [`Walls`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    /// Towards row zero.
    Up,
    /// Towards the last column.
    Right,
    /// Towards the last row.
    Down,
    /// Towards column zero.
    Left,
}

/// Per-direction geometry: column offset, row offset, opposite side and wall bit.
struct Step {
    /// Column delta when moving in this direction.
    dx: isize,
    /// Row delta when moving in this direction.
    dy: isize,
    /// The side of the neighbouring cell that faces back.
    opposite: Direction,
    /// Bit used by [`Walls`] to store this side.
    bit: u8,
}

impl Direction {
    /// Every direction, in the order neighbours are scanned during carving.
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Looks up the geometry of this direction.
    const fn step(self) -> Step {
        match self {
            Self::Up => Step {
                dx: 0,
                dy: -1,
                opposite: Self::Down,
                bit: 0b0001,
            },
            Self::Right => Step {
                dx: 1,
                dy: 0,
                opposite: Self::Left,
                bit: 0b0010,
            },
            Self::Down => Step {
                dx: 0,
                dy: 1,
                opposite: Self::Up,
                bit: 0b0100,
            },
            Self::Left => Step {
                dx: -1,
                dy: 0,
                opposite: Self::Right,
                bit: 0b1000,
            },
        }
    }

    /// Returns the `(dx, dy)` grid offset of this direction.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        let step = self.step();
        (step.dx, step.dy)
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.step().opposite
    }

    /// Human readable lowercase name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

/// Coordinates of a cell, `x` being the column and `y` the row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Column, growing to the right.
    pub x: usize,
    /// Row, growing downwards.
    pub y: usize,
}

impl Position {
    /// The top-left cell, where every maze starts.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Builds a position from a column and a row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring position in `direction`, or `None` if it would leave a grid of
    /// side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, size: usize) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        (x < size && y < size).then_some(Self { x, y })
    }
}

/// Bitmask of the walls still standing around a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    /// All four walls present.
    pub const ALL: Self = Self(0b1111);

    /// No walls at all.
    pub const NONE: Self = Self(0);

    /// Returns `true` if the wall on the `direction` side is present.
    #[must_use]
    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.step().bit != 0
    }

    /// Knocks down the wall on the `direction` side.
    fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.step().bit;
    }

    /// Number of open sides.
    #[must_use]
    pub const fn open_count(self) -> u32 {
        4 - self.0.count_ones()
    }
}

/// A single room of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Walls standing around this cell.
    walls: Walls,
    /// Carving bookkeeping; every cell ends up visited once generation completes.
    visited: bool,
    /// Set on the entrance cell only.
    is_start: bool,
    /// Set on the exit cell only.
    is_end: bool,
}

impl Cell {
    /// A fully walled, unvisited cell.
    const BLANK: Self = Self {
        walls: Walls::ALL,
        visited: false,
        is_start: false,
        is_end: false,
    };

    /// Walls standing around this cell.
    #[must_use]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Whether the carving walk reached this cell.
    #[must_use]
    pub const fn visited(&self) -> bool {
        self.visited
    }

    /// Whether this is the entrance.
    #[must_use]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    /// Whether this is the exit.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.is_end
    }
}

/// Tally of the relaxation pass that follows carving.
///
/// This structure records how the pass went: every round picks a cell and a side, then rolls a
/// chance gate, and only rounds that get through the gate may knock down a wall.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Relaxation {
    /// Rounds drawn, always `floor(size * 0.3)`.
    pub rounds: usize,
    /// Rounds that got through the chance gate.
    pub attempts: usize,
    /// Attempts that cleared a wall pair still standing, each one adding a loop to the maze.
    pub openings: usize,
}

/// A square maze of `size × size` cells.
///
/// Cells are kept in a flat, row-major arena and addressed through [`Position`]s; the grid is
/// read-only once [`Grid::generate`] returns. Walls are always removed in matching pairs, so the
/// side of a cell facing a neighbour is open exactly when the neighbour's facing side is open.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Length of a side, in cells.
    size: usize,
    /// Row-major cell storage of length `size * size`.
    cells: Vec<Cell>,
    /// Outcome of the relaxation pass.
    ///
    /// This field stays at its default until generation runs the pass, and is never touched
    /// afterwards.
    relaxation: Relaxation,
}

impl Grid {
    /// Generates a new maze of side `size`, drawing every random choice from `rng`.
    ///
    /// This function first carves a spanning tree with a randomised depth-first walk, so every
    /// cell is reachable from the origin through exactly one path. It then marks the origin as the
    /// start and `(size - 1, size - 1)` as the end, a single-cell maze being both at once, and
    /// finally runs the relaxation pass that knocks down a few more walls to open loops. The outer
    /// boundary is never breached and the same seed always yields the same grid.
    ///
    /// # Errors
    ///
    /// This function returns an error if `size` is zero or if `size * size` overflows. Both
    /// messages start with "invalid argument".
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Self::blank(size)?;

        grid.carve_passages(rng)?;
        grid.mark_endpoints()?;
        grid.relaxation = grid.add_extra_openings(rng, EXTRA_OPENING_CHANCE)?;

        Ok(grid)
    }

    /// Builds a grid of fully walled, unvisited cells.
    fn blank(size: usize) -> Result<Self> {
        ensure!(
            size > 0,
            "invalid argument: maze size must be at least 1, got {size}"
        );
        let area = size
            .checked_mul(size)
            .ok_or_eyre("invalid argument: maze size overflows the cell count")?;

        Ok(Self {
            size,
            cells: vec![Cell::BLANK; area],
            relaxation: Relaxation::default(),
        })
    }

    /// Length of a side, in cells.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Entrance of the maze, always the origin.
    #[must_use]
    pub const fn start(&self) -> Position {
        Position::ORIGIN
    }

    /// Exit of the maze, always the bottom-right corner.
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::new(self.size - 1, self.size - 1)
    }

    /// Maps a position to its slot in the arena.
    fn index(&self, position: Position) -> Option<usize> {
        (position.x < self.size && position.y < self.size)
            .then(|| position.y * self.size + position.x)
    }

    /// Returns the cell at `position`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.index(position).and_then(|index| self.cells.get(index))
    }

    /// Mutable access to the cell at `position`.
    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        self.index(position)
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Iterates over every cell together with its position, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, cell)| (Position::new(index % size, index / size), cell))
    }

    /// Returns `true` if a player standing on `position` can walk through its `direction` side.
    ///
    /// Both the wall flag and the grid boundary are checked.
    #[must_use]
    pub fn is_open(&self, position: Position, direction: Direction) -> bool {
        self.cell(position)
            .is_some_and(|cell| !cell.walls.contains(direction))
            && position.step(direction, self.size).is_some()
    }

    /// How the relaxation pass went while this grid was generated.
    #[must_use]
    pub const fn relaxation(&self) -> Relaxation {
        self.relaxation
    }

    /// Counts the passages between adjacent cells.
    ///
    /// A freshly carved tree has `size * size - 1` of them; every opening made by the relaxation
    /// pass adds one more.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|(position, _)| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&direction| self.is_open(position, direction))
                    .count()
            })
            .sum()
    }

    /// Knocks down the wall pair on the `direction` side of `position`.
    ///
    /// Nothing happens when the neighbour lies outside the grid, so the outer boundary is never
    /// breached. Returns `true` if the pair was standing before the call.
    fn open_wall(&mut self, position: Position, direction: Direction) -> Result<bool> {
        let Some(neighbour) = position.step(direction, self.size) else {
            return Ok(false);
        };

        let cell = self
            .cell_mut(position)
            .ok_or_eyre("failed to retrieve cell to open")?;
        let was_closed = cell.walls.contains(direction);
        cell.walls.remove(direction);

        self.cell_mut(neighbour)
            .ok_or_eyre("failed to retrieve neighbouring cell to open")?
            .walls
            .remove(direction.opposite());

        Ok(was_closed)
    }

    /// Carves a spanning tree with a randomised depth-first walk from the origin.
    ///
    /// The walk keeps an explicit stack of positions instead of recursing, so grids of any side
    /// are carved without growing the call stack. Each cell is entered exactly once.
    fn carve_passages<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let mut stack = Vec::with_capacity(self.cells.len());
        let mut current = Position::ORIGIN;

        self.cell_mut(current)
            .ok_or_eyre("failed to retrieve origin cell")?
            .visited = true;

        loop {
            let candidates: Vec<(Direction, Position)> = Direction::ALL
                .into_iter()
                .filter_map(|direction| {
                    current
                        .step(direction, self.size)
                        .map(|neighbour| (direction, neighbour))
                })
                .filter(|&(_, neighbour)| self.cell(neighbour).is_some_and(|cell| !cell.visited))
                .collect();

            if let Some(&(direction, neighbour)) = candidates.choose(rng) {
                let _ = self.open_wall(current, direction)?;
                stack.push(current);
                current = neighbour;
                self.cell_mut(current)
                    .ok_or_eyre("failed to retrieve carved cell")?
                    .visited = true;
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        Ok(())
    }

    /// Flags the entrance and the exit.
    fn mark_endpoints(&mut self) -> Result<()> {
        let (start, end) = (self.start(), self.end());

        self.cell_mut(start)
            .ok_or_eyre("failed to retrieve start cell")?
            .is_start = true;
        self.cell_mut(end)
            .ok_or_eyre("failed to retrieve end cell")?
            .is_end = true;

        Ok(())
    }

    /// Number of relaxation rounds drawn for a grid of side `size`.
    const fn relaxation_rounds(size: usize) -> usize {
        size * EXTRA_OPENING_NUMERATOR / EXTRA_OPENING_DENOMINATOR
    }

    /// Runs the relaxation pass over an already carved grid.
    ///
    /// There are `floor(size * 0.3)` rounds. Each one picks a random cell and a random side, then
    /// clears that wall pair with probability `chance`. Picks that are already open or that face
    /// the boundary change nothing and are not retried.
    fn add_extra_openings<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        chance: f64,
    ) -> Result<Relaxation> {
        let mut relaxation = Relaxation {
            rounds: Self::relaxation_rounds(self.size),
            ..Relaxation::default()
        };

        for _ in 0..relaxation.rounds {
            let position = Position::new(
                rng.random_range(0..self.size),
                rng.random_range(0..self.size),
            );
            let direction = *Direction::ALL
                .choose(rng)
                .ok_or_eyre("failed to pick a wall to relax")?;

            if rng.random_bool(chance) {
                relaxation.attempts += 1;
                if self.open_wall(position, direction)? {
                    relaxation.openings += 1;
                }
            }
        }

        Ok(relaxation)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Generates a grid from a fixed seed.
    fn seeded(size: usize, seed: u64) -> Grid {
        Grid::generate(size, &mut StdRng::seed_from_u64(seed)).expect("generation should succeed")
    }

    /// Counts the cells reachable from the origin through open walls.
    fn reachable_from_start(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.size() * grid.size()];
        let mut queue = VecDeque::from([grid.start()]);
        let mut count = 0;

        while let Some(position) = queue.pop_front() {
            let index = grid.index(position).expect("queued positions are in bounds");
            let slot = seen.get_mut(index).expect("index is within the arena");
            if *slot {
                continue;
            }
            *slot = true;
            count += 1;

            for direction in Direction::ALL {
                if grid.is_open(position, direction) {
                    queue.push_back(
                        position
                            .step(direction, grid.size())
                            .expect("open walls lead inside the grid"),
                    );
                }
            }
        }

        count
    }

    #[test]
    fn test_direction_table_is_consistent() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (odx, ody) = direction.opposite().offset();

            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!((dx + odx, dy + ody), (0, 0), "opposite offsets cancel out");
            assert_eq!(dx.abs() + dy.abs(), 1, "only von Neumann neighbours");
        }
    }

    #[test]
    fn test_position_step_respects_bounds() {
        let origin = Position::ORIGIN;

        assert_eq!(origin.step(Direction::Up, 3), None);
        assert_eq!(origin.step(Direction::Left, 3), None);
        assert_eq!(origin.step(Direction::Right, 3), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::Down, 3), Some(Position::new(0, 1)));
        assert_eq!(Position::new(2, 2).step(Direction::Right, 3), None);
        assert_eq!(Position::new(2, 2).step(Direction::Down, 3), None);
    }

    #[test]
    fn test_walls_bitmask() {
        let mut walls = Walls::ALL;
        assert_eq!(walls.open_count(), 0);

        walls.remove(Direction::Left);
        assert!(!walls.contains(Direction::Left));
        assert!(walls.contains(Direction::Up));
        assert!(walls.contains(Direction::Right));
        assert!(walls.contains(Direction::Down));
        assert_eq!(walls.open_count(), 1);

        walls.remove(Direction::Left);
        assert_eq!(walls.open_count(), 1, "removing twice is a no-op");
        assert_eq!(Walls::NONE.open_count(), 4);
    }

    #[test]
    fn test_generate_zero_size_is_rejected() {
        let err = Grid::generate(0, &mut StdRng::seed_from_u64(1))
            .expect_err("a zero-sized maze must be rejected");
        assert!(err.to_string().contains("invalid argument"), "got: {err}");

        let err = Grid::generate(usize::MAX, &mut StdRng::seed_from_u64(1))
            .expect_err("an overflowing cell count must be rejected");
        assert!(err.to_string().contains("invalid argument"), "got: {err}");
    }

    #[test]
    fn test_generate_single_cell() {
        let grid = seeded(1, 7);
        let cell = grid.cell(Position::ORIGIN).expect("single cell exists");

        assert_eq!(grid.size(), 1);
        assert_eq!(grid.start(), grid.end());
        assert!(cell.is_start());
        assert!(cell.is_end());
        assert_eq!(cell.walls(), Walls::ALL);
        assert_eq!(grid.passage_count(), 0);
    }

    #[test]
    fn test_every_cell_is_reachable() {
        for size in 1..=20 {
            for seed in 0..25 {
                let grid = seeded(size, seed);
                assert_eq!(
                    reachable_from_start(&grid),
                    size * size,
                    "size {size} seed {seed} left cells unreachable"
                );
                assert!(grid.cells().all(|(_, cell)| cell.visited()));
            }
        }
    }

    #[test]
    fn test_walls_are_symmetric() {
        for size in 1..=15 {
            for seed in 0..10 {
                let grid = seeded(size, seed);
                for (position, cell) in grid.cells() {
                    for direction in Direction::ALL {
                        let Some(neighbour) = position.step(direction, size) else {
                            continue;
                        };
                        let other = grid.cell(neighbour).expect("neighbour is in bounds");
                        assert_eq!(
                            cell.walls().contains(direction),
                            other.walls().contains(direction.opposite()),
                            "asymmetric wall between {position:?} and {neighbour:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_boundary_walls_stay_closed() {
        for size in 1..=20 {
            for seed in 0..10 {
                let grid = seeded(size, seed);
                for (position, cell) in grid.cells() {
                    for direction in Direction::ALL {
                        if position.step(direction, size).is_none() {
                            assert!(
                                cell.walls().contains(direction),
                                "boundary breached at {position:?} going {direction:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_start_and_end() {
        for size in 2..=12 {
            let grid = seeded(size, 3);
            let starts: Vec<Position> = grid
                .cells()
                .filter(|(_, cell)| cell.is_start())
                .map(|(position, _)| position)
                .collect();
            let ends: Vec<Position> = grid
                .cells()
                .filter(|(_, cell)| cell.is_end())
                .map(|(position, _)| position)
                .collect();

            assert_eq!(starts, vec![Position::ORIGIN]);
            assert_eq!(ends, vec![Position::new(size - 1, size - 1)]);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for size in [1, 5, 10, 15] {
            assert_eq!(seeded(size, 42), seeded(size, 42));
        }
        assert_ne!(seeded(15, 1), seeded(15, 2), "different seeds should differ");
    }

    #[test]
    fn test_carving_yields_a_spanning_tree() {
        for size in 1..=12 {
            let mut rng = StdRng::seed_from_u64(9);
            let mut grid = Grid::blank(size).expect("blank grid");
            grid.carve_passages(&mut rng).expect("carving succeeds");

            assert_eq!(grid.passage_count(), size * size - 1);
            assert_eq!(reachable_from_start(&grid), size * size);
        }
    }

    /// Carves a tree from `seed` without relaxing it.
    fn carved(size: usize, seed: u64) -> (Grid, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut grid = Grid::blank(size).expect("blank grid");
        grid.carve_passages(&mut rng).expect("carving succeeds");
        (grid, rng)
    }

    #[test]
    fn test_relaxation_round_count() {
        let expected = [0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6];
        for (size, rounds) in (1..=20).zip(expected) {
            assert_eq!(Grid::relaxation_rounds(size), rounds, "size {size}");
            assert_eq!(seeded(size, 11).relaxation().rounds, rounds, "size {size}");
        }
    }

    #[test]
    fn test_relaxation_tally_matches_passages() {
        for size in 1..=20 {
            for seed in 0..20 {
                let grid = seeded(size, seed);
                let relaxation = grid.relaxation();

                assert!(relaxation.attempts <= relaxation.rounds);
                assert!(relaxation.openings <= relaxation.attempts);
                assert_eq!(grid.passage_count(), size * size - 1 + relaxation.openings);
            }
        }
    }

    #[test]
    fn test_relaxation_opens_loops() {
        let mut looped = 0;
        for size in 1..=20 {
            for seed in 0..20 {
                let grid = seeded(size, seed);
                if grid.relaxation().openings > 0 {
                    assert!(grid.passage_count() > size * size - 1);
                    looped += 1;
                }
            }
        }

        assert!(looped > 0, "relaxation never opened a single loop");
    }

    #[test]
    fn test_relaxation_gate_drops_some_rounds() {
        let (mut rounds, mut attempts) = (0, 0);
        for size in 1..=20 {
            for seed in 0..20 {
                let relaxation = seeded(size, seed).relaxation();
                rounds += relaxation.rounds;
                attempts += relaxation.attempts;
            }
        }

        // 1080 rounds gated at 0.3 should let roughly 324 through.
        assert_eq!(rounds, 1080);
        assert!(
            (216..=432).contains(&attempts),
            "{attempts} of {rounds} rounds passed the gate"
        );
    }

    #[test]
    fn test_closed_gate_leaves_tree_untouched() {
        for size in [5, 10, 15, 20] {
            let (mut grid, mut rng) = carved(size, 3);
            let tree = grid.cells.clone();

            let relaxation = grid
                .add_extra_openings(&mut rng, 0.)
                .expect("relaxation succeeds");

            assert_eq!(relaxation.rounds, size * 3 / 10);
            assert_eq!(relaxation.attempts, 0);
            assert_eq!(relaxation.openings, 0);
            assert_eq!(grid.cells, tree);
        }
    }

    #[test]
    fn test_open_gate_attempts_every_round() {
        for seed in 0..10 {
            let (mut grid, mut rng) = carved(20, seed);

            let relaxation = grid
                .add_extra_openings(&mut rng, 1.)
                .expect("relaxation succeeds");

            assert_eq!(relaxation.attempts, relaxation.rounds);
            assert_eq!(grid.passage_count(), 20 * 20 - 1 + relaxation.openings);
        }
    }

    #[test]
    fn test_open_wall_outside_grid_is_noop() {
        let mut grid = Grid::blank(2).expect("blank grid");

        let opened = grid
            .open_wall(Position::ORIGIN, Direction::Up)
            .expect("opening succeeds");

        assert!(!opened);
        assert_eq!(
            grid.cell(Position::ORIGIN).expect("origin").walls(),
            Walls::ALL
        );
    }

    #[test]
    fn test_open_wall_clears_both_sides() {
        let mut grid = Grid::blank(2).expect("blank grid");

        assert!(grid
            .open_wall(Position::ORIGIN, Direction::Down)
            .expect("opening succeeds"));
        assert!(!grid
            .open_wall(Position::new(0, 1), Direction::Up)
            .expect("opening succeeds"));

        assert!(grid.is_open(Position::ORIGIN, Direction::Down));
        assert!(grid.is_open(Position::new(0, 1), Direction::Up));
        assert_eq!(grid.passage_count(), 1);
    }
}
