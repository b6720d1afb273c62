//! Terminal rendering of a solved maze.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
};
use labyr_core::{Coord, Maze, Tile};
use labyr_paths::SearchOutcome;

/// What a cell shows once the search is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Wall,
    Floor,
    Start,
    Goal,
    Visited,
    Path,
}

impl Mark {
    fn glyph(self) -> char {
        match self {
            Mark::Wall => '#',
            Mark::Floor => ' ',
            Mark::Start => 'S',
            Mark::Goal => 'E',
            Mark::Visited => '.',
            Mark::Path => '*',
        }
    }

    fn color(self) -> Color {
        match self {
            Mark::Wall => rgb(0x1E3A5F),
            Mark::Floor => rgb(0xFFFFFF),
            Mark::Start => rgb(0x4CAF50),
            Mark::Goal => rgb(0xF44336),
            Mark::Visited => rgb(0xD6EAF8),
            Mark::Path => rgb(0xFFD700),
        }
    }
}

fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Draw `maze` with the outcome's discovered cells and path overlaid.
///
/// Endpoints and walls keep their own look; path cells win over visited
/// ones. With `color` each cell is two coloured blanks, otherwise one glyph.
pub fn draw(
    out: &mut impl Write,
    maze: &Maze,
    outcome: &SearchOutcome,
    color: bool,
) -> io::Result<()> {
    let visited: HashSet<Coord> = outcome.discovered.iter().copied().collect();
    let on_path: HashSet<Coord> = outcome.path.iter().copied().collect();

    for row in 0..maze.rows() {
        for col in 0..maze.cols() {
            let c = Coord::new(row, col);
            let mark = match maze.tile(c) {
                Some(Tile::Wall) | None => Mark::Wall,
                Some(Tile::Start) => Mark::Start,
                Some(Tile::Goal) => Mark::Goal,
                Some(Tile::Traversable) if on_path.contains(&c) => Mark::Path,
                Some(Tile::Traversable) if visited.contains(&c) => Mark::Visited,
                Some(Tile::Traversable) => Mark::Floor,
            };
            if color {
                queue!(out, SetBackgroundColor(mark.color()), Print("  "))?;
            } else {
                queue!(out, Print(mark.glyph()))?;
            }
        }
        if color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}
