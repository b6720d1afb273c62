//! **labyr-core**: maze grid types.
//!
//! This crate provides the data every maze search works on: `(row, col)`
//! coordinates, the four tile kinds, an immutable-during-search rectangular
//! [`Maze`], its text format, and a random maze generator.

pub mod error;
pub mod geom;
pub mod mapgen;
pub mod maze;
pub mod parse;
pub mod tile;

pub use error::MazeError;
pub use geom::{Bounds, Coord};
pub use mapgen::{MapGen, WallRule};
pub use maze::Maze;
pub use tile::Tile;
