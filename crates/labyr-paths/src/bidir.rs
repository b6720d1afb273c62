//! Bidirectional breadth-first search with a discovery trace.
//!
//! Two BFS trees grow at once, one rooted at the start and one at the goal.
//! Each round drains one full layer of a single direction; the search stops
//! the moment a newly discovered cell is already known to the other
//! direction, and the path is stitched together through that meeting cell.
//!
//! Besides the path, every search records the order in which cells were
//! first reached so that a front end can replay the exploration.

use std::collections::VecDeque;

use labyr_core::{Bounds, Coord, Maze};
use log::{debug, trace};

use crate::error::SearchError;
use crate::outcome::{SearchOutcome, SearchStats};
use crate::traits::Pather;

/// Predecessor of a search root.
const ROOT: usize = usize::MAX;

/// How the next direction to expand is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Balance {
    /// Expand whichever direction has fewer pending cells; ties go forward.
    #[default]
    SmallerFrontier,
    /// Forward and backward take turns one full layer at a time, forward
    /// first, regardless of frontier sizes.
    Alternate,
}

/// Tunables for [`BidirectionalSearch`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    pub balance: Balance,
    /// When the endpoints turn out to be disconnected, keep expanding the
    /// direction that still has a frontier so the discovery trace covers
    /// everything reachable from either endpoint. When `false` the search
    /// stops as soon as one frontier runs dry.
    pub exhaust_unreachable: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            balance: Balance::SmallerFrontier,
            exhaust_unreachable: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn opposite(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// Per-direction BFS state over flat cell indices.
struct Side {
    queue: VecDeque<usize>,
    visited: Vec<bool>,
    pred: Vec<usize>,
    layers: usize,
    marked: usize,
}

impl Side {
    fn rooted(len: usize, root: usize) -> Self {
        let mut side = Self {
            queue: VecDeque::new(),
            visited: vec![false; len],
            pred: vec![ROOT; len],
            layers: 0,
            marked: 0,
        };
        side.mark(root, ROOT);
        side
    }

    /// Record the single visit of `i` and queue it for the next layer.
    #[inline]
    fn mark(&mut self, i: usize, parent: usize) {
        self.visited[i] = true;
        self.pred[i] = parent;
        self.queue.push_back(i);
        self.marked += 1;
    }

    /// Indices from `from` back to this side's root, `from` first.
    fn chain(&self, from: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors((from != ROOT).then_some(from), |&i| {
            let p = self.pred[i];
            (p != ROOT).then_some(p)
        })
    }
}

/// Shortest-path search that grows from both endpoints at once.
#[derive(Debug, Clone, Default)]
pub struct BidirectionalSearch {
    options: SearchOptions,
}

impl BidirectionalSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Search from `start` to `goal` on `pather`.
    ///
    /// Both endpoints must lie inside `pather.bounds()`. They are used as
    /// seeds without checking that they are passable.
    pub fn search<P: Pather>(
        &self,
        pather: &P,
        start: Coord,
        goal: Coord,
    ) -> Result<SearchOutcome, SearchError> {
        let bounds = pather.bounds();
        if bounds.is_empty() {
            return Err(SearchError::EmptyGrid);
        }
        let si = bounds.index_of(start).ok_or(SearchError::OutOfBounds {
            coord: start,
            bounds,
        })?;
        let gi = bounds.index_of(goal).ok_or(SearchError::OutOfBounds {
            coord: goal,
            bounds,
        })?;

        debug!("bidirectional search {start} -> {goal} on {bounds}");
        if si == gi {
            return Ok(SearchOutcome::trivial(start));
        }

        let mut fwd = Side::rooted(bounds.len(), si);
        let mut bwd = Side::rooted(bounds.len(), gi);
        let mut discovered = vec![start, goal];
        let mut nbuf = Vec::with_capacity(4);
        let mut turn = Direction::Forward;

        let mut meeting = loop {
            if fwd.queue.is_empty() || bwd.queue.is_empty() {
                break None;
            }
            let dir = match self.options.balance {
                Balance::SmallerFrontier => {
                    if fwd.queue.len() <= bwd.queue.len() {
                        Direction::Forward
                    } else {
                        Direction::Backward
                    }
                }
                Balance::Alternate => {
                    let d = turn;
                    turn = turn.opposite();
                    d
                }
            };
            let (side, other) = match dir {
                Direction::Forward => (&mut fwd, &bwd),
                Direction::Backward => (&mut bwd, &fwd),
            };
            trace!("expanding {dir:?} layer of {} cells", side.queue.len());
            if let Some(m) = expand_layer(pather, bounds, side, other, &mut discovered, &mut nbuf) {
                break Some(m);
            }
        };

        if meeting.is_none() && self.options.exhaust_unreachable {
            // One side is exhausted; the other cannot reach it any more but
            // its remaining cells still belong in the trace.
            while meeting.is_none() && !fwd.queue.is_empty() {
                meeting = expand_layer(pather, bounds, &mut fwd, &bwd, &mut discovered, &mut nbuf);
            }
            while meeting.is_none() && !bwd.queue.is_empty() {
                meeting = expand_layer(pather, bounds, &mut bwd, &fwd, &mut discovered, &mut nbuf);
            }
        }

        let path = match meeting {
            Some(m) => join(bounds, &fwd, &bwd, m),
            None => Vec::new(),
        };
        let stats = SearchStats {
            forward_layers: fwd.layers,
            backward_layers: bwd.layers,
            forward_visited: fwd.marked,
            backward_visited: bwd.marked,
        };
        let meeting = meeting.map(|m| bounds.coord_at(m));
        match meeting {
            Some(m) => debug!(
                "met at {m}: {} hops, {} cells discovered",
                path.len() - 1,
                discovered.len()
            ),
            None => debug!("no path, {} cells discovered", discovered.len()),
        }

        Ok(SearchOutcome {
            discovered,
            path,
            meeting,
            stats,
        })
    }
}

/// Drain the current layer of `side`. Returns the index of the first cell
/// that `other` has already visited, stopping immediately when one is found.
fn expand_layer<P: Pather>(
    pather: &P,
    bounds: Bounds,
    side: &mut Side,
    other: &Side,
    discovered: &mut Vec<Coord>,
    nbuf: &mut Vec<Coord>,
) -> Option<usize> {
    side.layers += 1;
    for _ in 0..side.queue.len() {
        let Some(ci) = side.queue.pop_front() else {
            break;
        };
        nbuf.clear();
        pather.neighbors(bounds.coord_at(ci), nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index_of(np) else {
                continue;
            };
            if side.visited[ni] {
                continue;
            }
            side.mark(ni, ci);
            if other.visited[ni] {
                // Already in the trace from the other direction.
                return Some(ni);
            }
            discovered.push(np);
        }
    }
    None
}

/// Stitch start..m from the forward tree to the cells after m in the
/// backward tree.
fn join(bounds: Bounds, fwd: &Side, bwd: &Side, m: usize) -> Vec<Coord> {
    let mut path: Vec<Coord> = fwd.chain(m).map(|i| bounds.coord_at(i)).collect();
    path.reverse();
    path.extend(bwd.chain(bwd.pred[m]).map(|i| bounds.coord_at(i)));
    path
}

/// Search a maze with default options.
///
/// Unlike [`BidirectionalSearch::search`] this also rejects endpoints that
/// are walls.
pub fn bidirectional_search(
    maze: &Maze,
    start: Coord,
    goal: Coord,
) -> Result<SearchOutcome, SearchError> {
    search_maze(maze, start, goal, &SearchOptions::default())
}

/// Search a maze between explicit endpoints, rejecting wall endpoints.
pub fn search_maze(
    maze: &Maze,
    start: Coord,
    goal: Coord,
    options: &SearchOptions,
) -> Result<SearchOutcome, SearchError> {
    for c in [start, goal] {
        if maze.tile(c).is_some_and(|t| !t.is_passable()) {
            return Err(SearchError::WallEndpoint(c));
        }
    }
    BidirectionalSearch::new(options.clone()).search(maze, start, goal)
}

/// Search between the maze's own start and goal cells.
pub fn solve(maze: &Maze, options: &SearchOptions) -> Result<SearchOutcome, SearchError> {
    let (start, goal) = maze.endpoints()?;
    search_maze(maze, start, goal, options)
}
