use labyr_core::Coord;

/// Counters describing how much work one search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Full layers expanded from the start.
    pub forward_layers: usize,
    /// Full layers expanded from the goal.
    pub backward_layers: usize,
    /// Cells marked visited from the start, root included.
    pub forward_visited: usize,
    /// Cells marked visited from the goal, root included.
    pub backward_visited: usize,
}

/// Result of a bidirectional search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Every cell in the order it was first marked visited, merged across
    /// both directions. Starts with the start cell then the goal cell and
    /// holds no duplicates.
    pub discovered: Vec<Coord>,
    /// Start to goal inclusive, or empty when the goal cannot be reached.
    pub path: Vec<Coord>,
    /// Cell where the two searches met.
    pub meeting: Option<Coord>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Outcome when start and goal are the same cell.
    pub(crate) fn trivial(at: Coord) -> Self {
        Self {
            discovered: vec![at],
            path: vec![at],
            meeting: Some(at),
            stats: SearchStats {
                forward_visited: 1,
                backward_visited: 1,
                ..SearchStats::default()
            },
        }
    }

    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of steps along the path, `None` when no path exists.
    #[inline]
    pub fn hops(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }

    /// Split the discovery order into consecutive batches of at most
    /// `batch` cells, for frame-by-frame playback. A `batch` of zero is
    /// treated as one.
    pub fn discovery_frames(&self, batch: usize) -> std::slice::Chunks<'_, Coord> {
        self.discovered.chunks(batch.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_outcome() {
        let c = Coord::new(2, 3);
        let o = SearchOutcome::trivial(c);
        assert!(o.is_found());
        assert_eq!(o.hops(), Some(0));
        assert_eq!(o.discovered, vec![c]);
        assert_eq!(o.path, vec![c]);
    }

    #[test]
    fn empty_path_has_no_hops() {
        let o = SearchOutcome {
            discovered: vec![Coord::new(0, 0), Coord::new(0, 2)],
            path: Vec::new(),
            meeting: None,
            stats: SearchStats::default(),
        };
        assert!(!o.is_found());
        assert_eq!(o.hops(), None);
    }

    #[test]
    fn frames_cover_discovery_in_order() {
        let discovered: Vec<Coord> = (0..7).map(|i| Coord::new(0, i)).collect();
        let o = SearchOutcome {
            discovered: discovered.clone(),
            path: Vec::new(),
            meeting: None,
            stats: SearchStats::default(),
        };
        let frames: Vec<&[Coord]> = o.discovery_frames(3).collect();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2], &discovered[6..]);
        assert_eq!(frames.concat(), discovered);
        assert_eq!(o.discovery_frames(0).count(), 7);
    }
}
