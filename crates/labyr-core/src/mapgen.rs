//! Random maze generation.
//!
//! Scatters walls at a given density and drops start/goal cells on free
//! floor. Mazes produced here are not guaranteed to be solvable, which is
//! exactly what search tests and benchmarks want.

use rand::Rng;

use crate::error::MazeError;
use crate::geom::Coord;
use crate::maze::Maze;
use crate::tile::Tile;

/// Parameters for [`MapGen::random_walls`].
#[derive(Debug, Clone)]
pub struct WallRule {
    /// Probability (0.0–1.0) that any given cell becomes a wall.
    pub density: f64,
    /// Keep the outer ring of cells free of walls.
    pub open_border: bool,
}

impl Default for WallRule {
    fn default() -> Self {
        Self {
            density: 0.3,
            open_border: false,
        }
    }
}

/// Maze generator owning a random number generator and the maze it edits.
pub struct MapGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MapGen<R> {
    /// Start from an all-floor maze of the given size.
    pub fn new(rows: i32, cols: i32, rng: R) -> Result<Self, MazeError> {
        Ok(Self {
            rng,
            maze: Maze::new(rows, cols)?,
        })
    }

    /// Start from an existing maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Turn floor cells into walls at random. Start and goal cells are
    /// never overwritten. Returns the number of walls placed.
    pub fn random_walls(&mut self, rule: &WallRule) -> usize {
        let b = self.maze.bounds();
        let mut placed = 0;
        for c in b {
            let on_border = c.row == b.min.row
                || c.col == b.min.col
                || c.row == b.max.row - 1
                || c.col == b.max.col - 1;
            if rule.open_border && on_border {
                continue;
            }
            if self.maze.tile(c) != Some(Tile::Traversable) {
                continue;
            }
            if self.rng.random::<f64>() < rule.density && self.maze.set(c, Tile::Wall).is_ok() {
                placed += 1;
            }
        }
        placed
    }

    /// Place start and goal on two distinct random passable cells,
    /// replacing any existing ones.
    ///
    /// Returns `None` (leaving the maze untouched) when fewer than two
    /// passable cells exist.
    pub fn random_endpoints(&mut self) -> Option<(Coord, Coord)> {
        let free: Vec<Coord> = self
            .maze
            .iter()
            .filter(|(_, t)| t.is_passable())
            .map(|(c, _)| c)
            .collect();
        if free.len() < 2 {
            return None;
        }
        let a = self.rng.random_range(0..free.len());
        let mut b = self.rng.random_range(0..free.len() - 1);
        if b >= a {
            b += 1;
        }
        let (start, goal) = (free[a], free[b]);
        self.maze.place(start, Tile::Start).ok()?;
        self.maze.place(goal, Tile::Goal).ok()?;
        Some((start, goal))
    }

    /// Consume the generator and return the maze.
    pub fn finish(self) -> Maze {
        self.maze
    }
}
