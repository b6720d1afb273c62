use thiserror::Error;

use crate::geom::Coord;

/// Errors raised while building, parsing or editing a [`Maze`](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// A maze needs at least one row and one column.
    #[error("maze must have at least one row and one column (got {rows}x{cols})")]
    Empty { rows: i32, cols: i32 },

    /// Row or column count does not fit in a coordinate.
    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    /// Serialized bounds must be anchored at the origin.
    #[error("maze bounds must start at (0, 0), got {0}")]
    NotAtOrigin(Coord),

    /// Serialized cell buffer does not match the bounds.
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// Rows have different widths.
    #[error("line {line} has {found} cells, expected {expected}")]
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A character that is not a maze glyph was found.
    #[error("invalid glyph {ch:?} at {at}")]
    InvalidGlyph { ch: char, at: Coord },

    /// More than one start cell in the text.
    #[error("second start cell at {at}")]
    DuplicateStart { at: Coord },

    /// More than one goal cell in the text.
    #[error("second goal cell at {at}")]
    DuplicateGoal { at: Coord },

    #[error("no start cell")]
    MissingStart,

    #[error("no goal cell")]
    MissingGoal,

    /// Coordinate outside the maze.
    #[error("{0} is outside the maze")]
    OutOfBounds(Coord),
}
