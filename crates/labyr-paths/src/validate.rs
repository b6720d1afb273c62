use labyr_core::Coord;

use crate::traits::Pather;

/// Whether `path` is a walkable 4-connected route: every cell passable and
/// every consecutive pair exactly one axis step apart. An empty path is
/// trivially valid.
pub fn is_valid_path<P: Pather>(pather: &P, path: &[Coord]) -> bool {
    path.iter().all(|&c| pather.is_passable(c)) && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}
