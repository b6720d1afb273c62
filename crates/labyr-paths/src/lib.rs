//! Shortest paths on maze grids, searched from both ends at once.
//!
//! The centrepiece is [`BidirectionalSearch`]: a breadth-first search grown
//! simultaneously from the start and the goal that returns both the
//! shortest path and the exact order in which cells were discovered, ready
//! for step-by-step playback.
//!
//! - **Bidirectional BFS** ([`BidirectionalSearch::search`], [`solve`])
//! - **Reference BFS** ([`bfs_path`], [`bfs_distances`])
//! - **Reachability** ([`reachable`], [`connected`])
//!
//! All searches work on any [`Pather`]; [`labyr_core::Maze`] implements it.

mod bfs;
mod bidir;
mod error;
mod outcome;
mod reach;
mod traits;
mod validate;

pub use bfs::{DistanceMap, UNREACHABLE, bfs_distances, bfs_path};
pub use bidir::{
    Balance, BidirectionalSearch, SearchOptions, bidirectional_search, search_maze, solve,
};
pub use error::SearchError;
pub use outcome::{SearchOutcome, SearchStats};
pub use reach::{connected, reachable};
pub use traits::{FnPather, Pather};
pub use validate::is_valid_path;
