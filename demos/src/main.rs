//! `maze-solve`: read or generate a maze, run the bidirectional search and
//! show what it explored.
//!
//! Run: cargo run --bin maze-solve -- --random 20x30 --seed 4

mod cli;
mod render;

use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use labyr_core::{Coord, MapGen, Maze, Tile, WallRule};
use labyr_paths::search_maze;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::{Cli, DEFAULT_DIMS};

fn load_maze(cli: &Cli) -> Result<Maze> {
    let maze = match &cli.maze {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Maze::parse(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => {
            let (rows, cols) = cli.random.unwrap_or(DEFAULT_DIMS);
            let seed = cli.seed.unwrap_or_else(rand::random);
            info!("generating {rows}x{cols} maze, density {}, seed {seed}", cli.density);
            let mut mg = MapGen::new(rows, cols, StdRng::seed_from_u64(seed))?;
            mg.random_endpoints()
                .context("maze too small for a start and a goal")?;
            mg.random_walls(&WallRule {
                density: cli.density,
                open_border: false,
            });
            mg.finish()
        }
    };

    Ok(maze)
}

/// Apply the `--start`/`--goal` overrides and return the cells to search
/// between. Both are resolved before the maze is edited, so a goal on the
/// start cell is searched as `start == goal` and drawn as the start.
fn place_endpoints(
    maze: &mut Maze,
    start: Option<Coord>,
    goal: Option<Coord>,
) -> Result<(Coord, Coord)> {
    let start = start
        .or_else(|| maze.start())
        .context("no start cell: add an 'S' or pass --start")?;
    let goal = goal
        .or_else(|| maze.goal())
        .context("no goal cell: add an 'E' or pass --goal")?;

    maze.place(start, Tile::Start).context("placing start")?;
    if goal == start {
        if let Some(old) = maze.goal() {
            maze.set(old, Tile::Traversable)?;
        }
    } else {
        maze.place(goal, Tile::Goal).context("placing goal")?;
    }
    Ok((start, goal))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    if !(0.0..=1.0).contains(&cli.density) {
        bail!("--density must be between 0 and 1, got {}", cli.density);
    }

    let mut maze = load_maze(&cli)?;
    let (start, goal) = place_endpoints(&mut maze, cli.start, cli.goal)?;
    let outcome = search_maze(&maze, start, goal, &cli.search_options())?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    render::draw(&mut io::stdout(), &maze, &outcome, !cli.no_color)?;

    if let Some(n) = cli.frames {
        for (i, frame) in outcome.discovery_frames(n).enumerate() {
            let cells: Vec<String> = frame.iter().map(ToString::to_string).collect();
            println!("frame {i}: {}", cells.join(" "));
        }
    }

    match outcome.hops() {
        Some(hops) => println!(
            "path found: {hops} hops, {} cells explored",
            outcome.discovered.len()
        ),
        None => println!("no path: {} cells explored", outcome.discovered.len()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goal_on_start_cell_is_a_trivial_search() {
        let mut maze = Maze::parse("S..\n..E").unwrap();
        let at = Coord::new(0, 0);
        let (s, g) = place_endpoints(&mut maze, None, Some(at)).unwrap();
        assert_eq!((s, g), (at, at));
        assert_eq!(maze.tile(at), Some(Tile::Start));
        assert_eq!(maze.goal(), None);

        let outcome = search_maze(&maze, s, g, &Default::default()).unwrap();
        assert_eq!(outcome.path, vec![at]);
        assert_eq!(outcome.hops(), Some(0));
    }

    #[test]
    fn overrides_move_the_endpoints() {
        let mut maze = Maze::parse("S..\n..E").unwrap();
        let (s, g) =
            place_endpoints(&mut maze, Some(Coord::new(1, 0)), Some(Coord::new(0, 2))).unwrap();
        assert_eq!((s, g), (Coord::new(1, 0), Coord::new(0, 2)));
        assert_eq!(maze.endpoints(), Ok((s, g)));
    }

    #[test]
    fn missing_endpoints_are_reported() {
        let mut maze = Maze::parse("...").unwrap();
        let err = place_endpoints(&mut maze, None, None).unwrap_err();
        assert!(err.to_string().contains("no start cell"));
        let off_grid = place_endpoints(&mut maze, Some(Coord::new(0, 5)), Some(Coord::new(0, 1)));
        assert!(off_grid.is_err());
    }
}
