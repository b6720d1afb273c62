//! The [`Maze`] type: a rectangular grid of [`Tile`]s.

use std::fmt;

use crate::error::MazeError;
use crate::geom::{Bounds, BoundsIter, Coord};
use crate::tile::Tile;

/// A rectangular grid of tiles with at least one row and one column.
///
/// Storage is a flat row-major vector. A search only ever borrows a maze
/// immutably; the editing methods exist for whoever builds the maze
/// beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MazeRepr"))]
pub struct Maze {
    bounds: Bounds,
    cells: Vec<Tile>,
}

/// Unchecked wire form of a [`Maze`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MazeRepr {
    bounds: Bounds,
    cells: Vec<Tile>,
}

#[cfg(feature = "serde")]
impl TryFrom<MazeRepr> for Maze {
    type Error = MazeError;

    fn try_from(r: MazeRepr) -> Result<Self, MazeError> {
        let MazeRepr { bounds, cells } = r;
        if bounds.min != Coord::ZERO {
            return Err(MazeError::NotAtOrigin(bounds.min));
        }
        if bounds.is_empty() {
            return Err(MazeError::Empty {
                rows: bounds.rows(),
                cols: bounds.cols(),
            });
        }
        if cells.len() != bounds.len() {
            return Err(MazeError::CellCount {
                expected: bounds.len(),
                found: cells.len(),
            });
        }
        Ok(Self { bounds, cells })
    }
}

/// Bounds of a `rows` × `cols` grid, if both counts fit in `i32`.
fn dims(rows: usize, cols: usize) -> Result<Bounds, MazeError> {
    match (i32::try_from(rows), i32::try_from(cols)) {
        (Ok(r), Ok(c)) => Ok(Bounds::from_dims(r, c)),
        _ => Err(MazeError::TooLarge { rows, cols }),
    }
}

impl Maze {
    /// Create a `rows` × `cols` maze where every cell is traversable.
    pub fn new(rows: i32, cols: i32) -> Result<Self, MazeError> {
        let bounds = Bounds::from_dims(rows, cols);
        if bounds.is_empty() {
            return Err(MazeError::Empty { rows, cols });
        }
        Ok(Self {
            bounds,
            cells: vec![Tile::Traversable; bounds.len()],
        })
    }

    /// Build a maze from explicit rows. Every row must have the same,
    /// non-zero length.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty {
                rows: i32::try_from(rows.len()).unwrap_or(i32::MAX),
                cols: 0,
            });
        }
        let bounds = dims(rows.len(), width)?;
        let mut cells = Vec::with_capacity(width * rows.len());
        for (line, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::InconsistentWidth {
                    line,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { bounds, cells })
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    /// The rectangle covered by the maze.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `c` lies inside the maze.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// Tile at `c`, or `None` when out of bounds.
    #[inline]
    pub fn tile(&self, c: Coord) -> Option<Tile> {
        self.bounds.index_of(c).map(|i| self.cells[i])
    }

    /// Whether `c` is inside the maze and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.tile(c).is_some_and(Tile::is_passable)
    }

    /// First start cell in row-major order.
    pub fn start(&self) -> Option<Coord> {
        self.find(Tile::Start)
    }

    /// First goal cell in row-major order.
    pub fn goal(&self) -> Option<Coord> {
        self.find(Tile::Goal)
    }

    /// Both endpoints, or an error naming the one that is missing.
    pub fn endpoints(&self) -> Result<(Coord, Coord), MazeError> {
        let start = self.start().ok_or(MazeError::MissingStart)?;
        let goal = self.goal().ok_or(MazeError::MissingGoal)?;
        Ok((start, goal))
    }

    fn find(&self, tile: Tile) -> Option<Coord> {
        self.cells
            .iter()
            .position(|&t| t == tile)
            .map(|i| self.bounds.coord_at(i))
    }

    /// Overwrite the tile at `c` without any bookkeeping.
    pub fn set(&mut self, c: Coord, tile: Tile) -> Result<(), MazeError> {
        let i = self.bounds.index_of(c).ok_or(MazeError::OutOfBounds(c))?;
        self.cells[i] = tile;
        Ok(())
    }

    /// Editor-style placement: putting down a start (or goal) clears any
    /// previous start (or goal) back to floor, so at most one of each is
    /// present afterwards.
    pub fn place(&mut self, c: Coord, tile: Tile) -> Result<(), MazeError> {
        let i = self.bounds.index_of(c).ok_or(MazeError::OutOfBounds(c))?;
        if matches!(tile, Tile::Start | Tile::Goal) {
            for cell in self.cells.iter_mut().filter(|t| **t == tile) {
                *cell = Tile::Traversable;
            }
        }
        self.cells[i] = tile;
        Ok(())
    }

    /// Reset every cell to floor.
    pub fn clear(&mut self) {
        self.cells.fill(Tile::Traversable);
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|t| !t.is_passable()).count()
    }

    /// Row-major iterator over `(Coord, Tile)` pairs.
    pub fn iter(&self) -> MazeIter<'_> {
        MazeIter {
            maze: self,
            inner: self.bounds.iter(),
        }
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.cols() as usize;
        for (r, row) in self.cells.chunks(w).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for t in row {
                write!(f, "{}", t.to_char())?;
            }
        }
        Ok(())
    }
}

/// Iterator over `(Coord, Tile)` pairs in a [`Maze`].
pub struct MazeIter<'a> {
    maze: &'a Maze,
    inner: BoundsIter,
}

impl Iterator for MazeIter<'_> {
    type Item = (Coord, Tile);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let c = self.inner.next()?;
        let i = self.maze.bounds.index_of(c)?;
        Some((c, self.maze.cells[i]))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_all_floor() {
        let m = Maze::new(3, 4).unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.cols(), 4);
        assert!(m.iter().all(|(_, t)| t == Tile::Traversable));
        assert_eq!(m.start(), None);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert_eq!(Maze::new(0, 3), Err(MazeError::Empty { rows: 0, cols: 3 }));
        assert!(Maze::new(2, 0).is_err());
        assert!(Maze::from_rows(vec![]).is_err());
    }

    #[test]
    fn ragged_rows_rejected() {
        let rows = vec![
            vec![Tile::Traversable, Tile::Wall],
            vec![Tile::Traversable],
        ];
        assert_eq!(
            Maze::from_rows(rows),
            Err(MazeError::InconsistentWidth {
                line: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn oversized_dimensions_rejected() {
        let huge = 1usize << 31;
        assert_eq!(
            dims(huge, 3),
            Err(MazeError::TooLarge { rows: huge, cols: 3 })
        );
        assert_eq!(
            dims(2, huge),
            Err(MazeError::TooLarge { rows: 2, cols: huge })
        );
        assert_eq!(dims(2, 3), Ok(Bounds::from_dims(2, 3)));
    }

    #[test]
    fn out_of_bounds_queries() {
        let m = Maze::new(2, 2).unwrap();
        assert_eq!(m.tile(Coord::new(2, 0)), None);
        assert_eq!(m.tile(Coord::new(-1, 0)), None);
        assert!(!m.is_passable(Coord::new(0, 2)));
    }

    #[test]
    fn set_out_of_bounds_is_error() {
        let mut m = Maze::new(2, 2).unwrap();
        assert_eq!(
            m.set(Coord::new(5, 5), Tile::Wall),
            Err(MazeError::OutOfBounds(Coord::new(5, 5)))
        );
    }

    #[test]
    fn place_keeps_single_start_and_goal() {
        let mut m = Maze::new(3, 3).unwrap();
        m.place(Coord::new(0, 0), Tile::Start).unwrap();
        m.place(Coord::new(2, 2), Tile::Goal).unwrap();
        m.place(Coord::new(1, 1), Tile::Start).unwrap();
        assert_eq!(m.tile(Coord::new(0, 0)), Some(Tile::Traversable));
        assert_eq!(m.start(), Some(Coord::new(1, 1)));
        assert_eq!(m.endpoints(), Ok((Coord::new(1, 1), Coord::new(2, 2))));

        // Walling over the start removes it.
        m.place(Coord::new(1, 1), Tile::Wall).unwrap();
        assert_eq!(m.endpoints(), Err(MazeError::MissingStart));
    }

    #[test]
    fn clear_resets_everything() {
        let mut m = Maze::new(2, 2).unwrap();
        m.set(Coord::new(0, 1), Tile::Wall).unwrap();
        m.place(Coord::new(1, 1), Tile::Goal).unwrap();
        assert_eq!(m.wall_count(), 1);
        m.clear();
        assert_eq!(m.wall_count(), 0);
        assert_eq!(m.goal(), None);
    }

    #[test]
    fn display_renders_glyphs() {
        let mut m = Maze::new(2, 3).unwrap();
        m.set(Coord::new(0, 1), Tile::Wall).unwrap();
        m.place(Coord::new(0, 0), Tile::Start).unwrap();
        m.place(Coord::new(1, 2), Tile::Goal).unwrap();
        assert_eq!(m.to_string(), "S# \n  E");
    }
}
