use labyr_core::{Bounds, Coord, MazeError};
use thiserror::Error;

/// Rejected search input.
///
/// An unreachable goal is not an error: it is reported as an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("grid has no cells")]
    EmptyGrid,

    #[error("{coord} is outside the grid {bounds}")]
    OutOfBounds { coord: Coord, bounds: Bounds },

    #[error("endpoint {0} is a wall")]
    WallEndpoint(Coord),

    #[error(transparent)]
    Maze(#[from] MazeError),
}
