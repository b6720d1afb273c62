//! Geometry primitives: [`Coord`] and [`Bounds`].
//!
//! Coordinates are `(row, col)` pairs. Rows grow downwards, columns grow to
//! the right, matching the way a maze is written out as text.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position in a maze.
///
/// Signed so that stepping off the edge of a grid yields a coordinate that
/// is simply out of bounds rather than an overflow.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Unit steps in neighbour order: up, down, left, right.
    pub const CARDINALS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(0, 1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// `self + rhs`, or `None` if either component overflows.
    #[inline]
    pub const fn checked_add(self, rhs: Coord) -> Option<Coord> {
        match (self.row.checked_add(rhs.row), self.col.checked_add(rhs.col)) {
            (Some(row), Some(col)) => Some(Coord::new(row, col)),
            _ => None,
        }
    }

    /// The axis-aligned neighbours, in the order up, down, left, right.
    /// Steps that would leave the `i32` range are skipped.
    #[inline]
    pub fn neighbors_4(self) -> impl Iterator<Item = Coord> {
        Self::CARDINALS.into_iter().filter_map(move |d| self.checked_add(d))
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// Whether `other` is exactly one 4-connected step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        matches!(
            (self.row.abs_diff(other.row), self.col.abs_diff(other.col)),
            (0, 1) | (1, 0)
        )
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    /// Bounds of a `rows` × `cols` grid anchored at the origin.
    #[inline]
    pub const fn from_dims(rows: i32, cols: i32) -> Self {
        Self {
            min: Coord::ZERO,
            max: Coord::new(rows, cols),
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.max.row.abs_diff(self.min.row) as usize * self.width()
    }

    /// Column count as `usize`, valid even when it exceeds `i32::MAX`.
    #[inline]
    fn width(self) -> usize {
        self.max.col.abs_diff(self.min.col) as usize
    }

    /// Whether the rectangle has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.row >= self.max.row || self.min.col >= self.max.col
    }

    /// Whether `c` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, c: Coord) -> bool {
        c.row >= self.min.row
            && c.row < self.max.row
            && c.col >= self.min.col
            && c.col < self.max.col
    }

    /// Row-major flat index of `c`, or `None` when out of bounds.
    #[inline]
    pub fn index_of(self, c: Coord) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        let r = c.row.abs_diff(self.min.row) as usize;
        let k = c.col.abs_diff(self.min.col) as usize;
        Some(r * self.width() + k)
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn coord_at(self, idx: usize) -> Coord {
        let w = self.width().max(1);
        // In-bounds results fit in i32 even when the offset alone does not.
        Coord::new(
            self.min.row.wrapping_add((idx / w) as i32),
            self.min.col.wrapping_add((idx % w) as i32),
        )
    }

    /// Row-major iterator over every coordinate.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Coord;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the coordinates in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    cur: Coord,
}

impl Iterator for BoundsIter {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Coord> {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.max.row {
            return None;
        }
        let c = self.cur;
        self.cur.col += 1;
        if self.cur.col >= self.bounds.max.col {
            self.cur.col = self.bounds.min.col;
            self.cur.row += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.row >= self.bounds.max.row {
            return (0, Some(0));
        }
        let w = self.bounds.cols() as usize;
        let rest_of_row = (self.bounds.max.col - self.cur.col) as usize;
        let rows_after = (self.bounds.max.row - self.cur.row - 1) as usize;
        let total = rest_of_row + rows_after * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(1, 2);
        let b = Coord::new(3, 4);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(b - a, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(0, 3));
    }

    #[test]
    fn neighbors_follow_up_down_left_right() {
        let n: Vec<Coord> = Coord::new(5, 5).neighbors_4().collect();
        assert_eq!(
            n,
            vec![
                Coord::new(4, 5),
                Coord::new(6, 5),
                Coord::new(5, 4),
                Coord::new(5, 6),
            ]
        );
    }

    #[test]
    fn neighbors_at_i32_edges_skip_overflow() {
        let n: Vec<Coord> = Coord::new(i32::MIN, i32::MAX).neighbors_4().collect();
        assert_eq!(
            n,
            vec![Coord::new(i32::MIN + 1, i32::MAX), Coord::new(i32::MIN, i32::MAX - 1)]
        );
        assert_eq!(Coord::new(0, i32::MAX).checked_add(Coord::new(0, 1)), None);
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(2, 2);
        assert!(c.is_adjacent(Coord::new(2, 3)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(Coord::new(3, 3)));
        assert!(!c.is_adjacent(c));
        assert!(!Coord::new(i32::MIN, 0).is_adjacent(Coord::new(i32::MAX, 0)));
    }

    #[test]
    fn coord_order_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn bounds_basics() {
        let b = Bounds::from_dims(2, 3);
        assert_eq!(b.rows(), 2);
        assert_eq!(b.cols(), 3);
        assert_eq!(b.len(), 6);
        assert!(b.contains(Coord::new(1, 2)));
        assert!(!b.contains(Coord::new(2, 0)));
        assert!(!b.contains(Coord::new(0, -1)));
    }

    #[test]
    fn index_round_trip() {
        let b = Bounds::from_dims(4, 7);
        for c in b {
            let i = b.index_of(c).unwrap();
            assert_eq!(b.coord_at(i), c);
        }
        assert_eq!(b.index_of(Coord::new(1, 0)), Some(7));
        assert_eq!(b.index_of(Coord::new(4, 0)), None);
    }

    #[test]
    fn iter_is_row_major_and_exact() {
        let b = Bounds::from_dims(2, 3);
        let it = b.iter();
        assert_eq!(it.len(), 6);
        let pts: Vec<_> = it.collect();
        assert_eq!(pts[0], Coord::new(0, 0));
        assert_eq!(pts[3], Coord::new(1, 0));
        assert_eq!(pts[5], Coord::new(1, 2));
    }

    #[test]
    fn index_near_i32_min() {
        let b = Bounds {
            min: Coord::new(i32::MIN, 0),
            max: Coord::new(i32::MIN + 2, 2),
        };
        assert_eq!(b.len(), 4);
        let last = Coord::new(i32::MIN + 1, 1);
        assert_eq!(b.index_of(last), Some(3));
        assert_eq!(b.coord_at(3), last);
    }

    #[test]
    fn empty_bounds() {
        let b = Bounds::from_dims(0, 5);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }
}
