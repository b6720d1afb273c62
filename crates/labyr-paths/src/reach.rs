//! Reachability by flood fill.

use labyr_core::Coord;

use crate::traits::Pather;

/// Every cell 4-connected to `from` through passable cells, `from` first.
///
/// Returns an empty vector when `from` is outside the grid. `from` itself is
/// included even if it is not passable.
pub fn reachable<P: Pather>(pather: &P, from: Coord) -> Vec<Coord> {
    let bounds = pather.bounds();
    let mut result = Vec::new();
    let Some(si) = bounds.index_of(from) else {
        return result;
    };

    let mut seen = vec![false; bounds.len()];
    let mut stack = vec![si];
    let mut nbuf = Vec::with_capacity(4);
    seen[si] = true;
    result.push(from);

    // Iterative DFS.
    while let Some(ci) = stack.pop() {
        nbuf.clear();
        pather.neighbors(bounds.coord_at(ci), &mut nbuf);
        for &np in nbuf.iter() {
            if let Some(ni) = bounds.index_of(np) {
                if !seen[ni] {
                    seen[ni] = true;
                    stack.push(ni);
                    result.push(np);
                }
            }
        }
    }

    result
}

/// Whether a path of passable cells links `a` and `b`.
pub fn connected<P: Pather>(pather: &P, a: Coord, b: Coord) -> bool {
    a == b || reachable(pather, a).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyr_core::Maze;

    #[test]
    fn flood_fill_stops_at_walls() {
        let m = Maze::parse("..#..\n..#..\n..#..").unwrap();
        let mut left = reachable(&m, Coord::new(1, 0));
        assert_eq!(left[0], Coord::new(1, 0));
        assert_eq!(left.len(), 6);
        left.sort();
        assert!(left.iter().all(|c| c.col < 2));
    }

    #[test]
    fn connectivity() {
        let m = Maze::parse("S.#\n#.#\n#.E").unwrap();
        assert!(connected(&m, Coord::new(0, 0), Coord::new(2, 2)));
        let m = Maze::parse("S#E").unwrap();
        assert!(!connected(&m, Coord::new(0, 0), Coord::new(0, 2)));
    }

    #[test]
    fn outside_is_empty() {
        let m = Maze::new(2, 2).unwrap();
        assert!(reachable(&m, Coord::new(-1, 0)).is_empty());
    }
}
