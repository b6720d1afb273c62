use labyr_core::{Bounds, Coord, Maze};

/// Grid abstraction the searches run on.
///
/// Only [`bounds`](Pather::bounds) and [`is_passable`](Pather::is_passable)
/// are required. The default [`neighbors`](Pather::neighbors) yields
/// 4-connected passable cells in the order up, down, left, right, which is
/// what makes discovery traces deterministic.
pub trait Pather {
    /// Rectangle of cells that may be visited.
    fn bounds(&self) -> Bounds;

    /// Whether `c` can be walked on. Out-of-bounds cells must report `false`.
    fn is_passable(&self, c: Coord) -> bool;

    /// Append the passable neighbours of `c` into `buf`. The caller clears
    /// `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        buf.extend(c.neighbors_4().filter(|&n| self.is_passable(n)));
    }
}

impl Pather for Maze {
    #[inline]
    fn bounds(&self) -> Bounds {
        Maze::bounds(self)
    }

    #[inline]
    fn is_passable(&self, c: Coord) -> bool {
        Maze::is_passable(self, c)
    }
}

/// A [`Pather`] built from a rectangle and a passability predicate, for
/// callers that keep their own grid representation.
pub struct FnPather<F> {
    bounds: Bounds,
    passable: F,
}

impl<F: Fn(Coord) -> bool> FnPather<F> {
    pub fn new(bounds: Bounds, passable: F) -> Self {
        Self { bounds, passable }
    }
}

impl<F: Fn(Coord) -> bool> Pather for FnPather<F> {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn is_passable(&self, c: Coord) -> bool {
        self.bounds.contains(c) && (self.passable)(c)
    }
}
