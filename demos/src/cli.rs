//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use labyr_core::Coord;
use labyr_paths::{Balance, SearchOptions};

/// Size of the generated maze when no file is given.
pub const DEFAULT_DIMS: (i32, i32) = (20, 30);

/// Solve a maze with bidirectional breadth-first search.
#[derive(Debug, Parser)]
#[command(name = "maze-solve", version)]
pub struct Cli {
    /// Maze file: '#' wall, ' ' or '.' floor, 'S' start, 'E' goal.
    pub maze: Option<PathBuf>,

    /// Generate a random maze of ROWSxCOLS instead of reading a file.
    #[arg(long, value_name = "ROWSxCOLS", value_parser = parse_dims, conflicts_with = "maze")]
    pub random: Option<(i32, i32)>,

    /// Wall probability for generated mazes.
    #[arg(long, default_value_t = 0.3)]
    pub density: f64,

    /// Seed for generated mazes.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the start cell, as ROW,COL.
    #[arg(long, value_parser = parse_coord)]
    pub start: Option<Coord>,

    /// Override the goal cell, as ROW,COL.
    #[arg(long, value_parser = parse_coord)]
    pub goal: Option<Coord>,

    /// How the search picks which side to expand.
    #[arg(long, value_enum, default_value_t = BalanceArg::Smaller)]
    pub balance: BalanceArg,

    /// Stop as soon as one side runs out of cells instead of tracing both
    /// components.
    #[arg(long)]
    pub no_exhaust: bool,

    /// Print the outcome as JSON.
    #[arg(long)]
    pub json: bool,

    /// List the discovery order in batches of N cells.
    #[arg(long, value_name = "N")]
    pub frames: Option<usize>,

    /// Plain glyphs instead of colours.
    #[arg(long)]
    pub no_color: bool,

    /// More log output (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BalanceArg {
    /// Expand the side with the smaller frontier.
    Smaller,
    /// Alternate sides layer by layer.
    Alternate,
}

impl Cli {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            balance: match self.balance {
                BalanceArg::Smaller => Balance::SmallerFrontier,
                BalanceArg::Alternate => Balance::Alternate,
            },
            exhaust_unreachable: !self.no_exhaust,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn parse_dims(s: &str) -> Result<(i32, i32), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got {s:?}"))?;
    let rows: i32 = r.trim().parse().map_err(|e| format!("rows: {e}"))?;
    let cols: i32 = c.trim().parse().map_err(|e| format!("cols: {e}"))?;
    if rows <= 0 || cols <= 0 {
        return Err(format!("dimensions must be positive, got {rows}x{cols}"));
    }
    Ok((rows, cols))
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = r.trim().parse().map_err(|e| format!("row: {e}"))?;
    let col = c.trim().parse().map_err(|e| format!("col: {e}"))?;
    Ok(Coord::new(row, col))
}
