//! Text format for mazes.
//!
//! One line per row, one glyph per cell (see [`Tile::from_char`]). Empty
//! lines before the first row and after the last row are ignored, and a
//! trailing `'\r'` is stripped from every line. Lines made only of spaces
//! are rows of floor, not blank lines.

use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Coord;
use crate::maze::Maze;
use crate::tile::Tile;

impl Maze {
    /// Parse a maze from its text form.
    ///
    /// At most one start and one goal may appear; a maze without them is
    /// accepted, use [`endpoints`](Maze::endpoints) to require them.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(MazeError::Empty { rows: 0, cols: 0 });
        };

        let mut rows = Vec::with_capacity(last - first + 1);
        let mut width = None;
        let mut start = None;
        let mut goal = None;

        for (y, line) in lines[first..=last].iter().enumerate() {
            let mut row = Vec::with_capacity(width.unwrap_or(0));
            for (x, ch) in line.chars().enumerate() {
                let at = Coord::new(saturate(y), saturate(x));
                let tile = Tile::from_char(ch).ok_or(MazeError::InvalidGlyph { ch, at })?;
                match tile {
                    Tile::Start if start.is_some() => return Err(MazeError::DuplicateStart { at }),
                    Tile::Goal if goal.is_some() => return Err(MazeError::DuplicateGoal { at }),
                    Tile::Start => start = Some(at),
                    Tile::Goal => goal = Some(at),
                    _ => {}
                }
                row.push(tile);
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(MazeError::InconsistentWidth {
                        line: y,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        Maze::from_rows(rows)
    }
}

/// Position for error reports; oversized mazes fail later in `from_rows`.
fn saturate(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S..#
#.#E#
#####";

    #[test]
    fn parse_and_size() {
        let m: Maze = ROOM.parse().unwrap();
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 5);
        assert_eq!(m.start(), Some(Coord::new(1, 1)));
        assert_eq!(m.goal(), Some(Coord::new(2, 3)));
        assert_eq!(m.tile(Coord::new(2, 2)), Some(Tile::Wall));
        assert_eq!(m.tile(Coord::new(1, 2)), Some(Tile::Traversable));
    }

    #[test]
    fn surrounding_empty_lines_and_crlf() {
        let m = Maze::parse("\n\nS.\r\n.E\r\n\n").unwrap();
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 2);
        assert_eq!(m.goal(), Some(Coord::new(1, 1)));
    }

    #[test]
    fn space_only_rows_are_floor() {
        let m = Maze::parse("S  \n   \n  E").unwrap();
        assert_eq!(m.rows(), 3);
        assert_eq!(m.tile(Coord::new(1, 1)), Some(Tile::Traversable));
    }

    #[test]
    fn display_round_trips() {
        let m = Maze::parse(ROOM).unwrap();
        let again = Maze::parse(&m.to_string()).unwrap();
        assert_eq!(m, again);
    }

    #[test]
    fn empty_input() {
        assert_eq!(Maze::parse(""), Err(MazeError::Empty { rows: 0, cols: 0 }));
        assert!(Maze::parse("\n\n").is_err());
    }

    #[test]
    fn inconsistent_width() {
        assert_eq!(
            Maze::parse("S.\n..E"),
            Err(MazeError::InconsistentWidth {
                line: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn invalid_glyph() {
        assert_eq!(
            Maze::parse("S.\n.x"),
            Err(MazeError::InvalidGlyph {
                ch: 'x',
                at: Coord::new(1, 1)
            })
        );
    }

    #[test]
    fn duplicate_endpoints() {
        assert_eq!(
            Maze::parse("S.S\n..E"),
            Err(MazeError::DuplicateStart {
                at: Coord::new(0, 2)
            })
        );
        assert_eq!(
            Maze::parse("SE\nG."),
            Err(MazeError::DuplicateGoal {
                at: Coord::new(1, 0)
            })
        );
    }
}
