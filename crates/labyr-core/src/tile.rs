//! The four cell kinds a maze is made of.

use std::fmt;

/// Content of a single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Impassable obstacle.
    Wall,
    /// Plain open floor.
    #[default]
    Traversable,
    /// Where the search starts. Passable.
    Start,
    /// Where the search ends. Passable.
    Goal,
}

impl Tile {
    /// Every tile except [`Tile::Wall`] can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }

    /// Glyph used by the text format.
    pub const fn to_char(self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Traversable => ' ',
            Tile::Start => 'S',
            Tile::Goal => 'E',
        }
    }

    /// Parse a text-format glyph. `.` is accepted as an alternative floor
    /// glyph and `G` as an alternative goal glyph.
    pub const fn from_char(ch: char) -> Option<Tile> {
        match ch {
            '#' => Some(Tile::Wall),
            ' ' | '.' => Some(Tile::Traversable),
            'S' => Some(Tile::Start),
            'E' | 'G' => Some(Tile::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
