//! Plain single-source breadth-first search.
//!
//! Serves as the reference the bidirectional search is measured against,
//! and as a distance map for callers that want one.

use std::collections::VecDeque;

use labyr_core::{Bounds, Coord};

use crate::traits::Pather;

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Hop counts from one source cell.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    bounds: Bounds,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Distance to `c`, or [`UNREACHABLE`] if it was not reached or lies
    /// outside the grid.
    pub fn at(&self, c: Coord) -> i32 {
        match self.bounds.index_of(c) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// All reached cells with their distance, in row-major order.
    pub fn reached(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != UNREACHABLE)
            .map(|(i, &d)| (self.bounds.coord_at(i), d))
    }
}

/// Distance from `source` to every cell reachable from it.
pub fn bfs_distances<P: Pather>(pather: &P, source: Coord) -> DistanceMap {
    let bounds = pather.bounds();
    let mut dist = vec![UNREACHABLE; bounds.len()];
    let mut queue = VecDeque::new();
    if let Some(si) = bounds.index_of(source) {
        dist[si] = 0;
        queue.push_back(si);
    }

    let mut nbuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        nbuf.clear();
        pather.neighbors(bounds.coord_at(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }

    DistanceMap { bounds, dist }
}

/// A shortest path from `from` to `to` (both included), or `None` when `to`
/// cannot be reached or either endpoint is outside the grid.
pub fn bfs_path<P: Pather>(pather: &P, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    let bounds = pather.bounds();
    let si = bounds.index_of(from)?;
    let gi = bounds.index_of(to)?;

    let mut parent = vec![usize::MAX; bounds.len()];
    let mut seen = vec![false; bounds.len()];
    let mut queue = VecDeque::from([si]);
    seen[si] = true;

    let mut nbuf = Vec::with_capacity(4);
    'search: while let Some(ci) = queue.pop_front() {
        if ci == gi {
            break 'search;
        }
        nbuf.clear();
        pather.neighbors(bounds.coord_at(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if seen[ni] {
                continue;
            }
            seen[ni] = true;
            parent[ni] = ci;
            queue.push_back(ni);
        }
    }

    if !seen[gi] {
        return None;
    }
    let mut path = Vec::new();
    let mut ci = gi;
    while ci != usize::MAX {
        path.push(bounds.coord_at(ci));
        ci = parent[ci];
    }
    path.reverse();
    Some(path)
}
