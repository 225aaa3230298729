//! mazer — generate a random maze and solve it with A*.
//!
//! Generates a grid with a start cell, an end cell, and a handful of
//! barriers, finds a shortest 8-connected route between start and end, and
//! prints the maze, the route overlay, and the step cost.

mod presenter;

use anyhow::Context;
use clap::Parser;
use log::info;
use gridmaze_core::{DEFAULT_BARRIERS, Maze, MazeGen, Point};
use gridmaze_paths::{AstarPather, Pather, PathFinder, manhattan};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generate a random maze and solve it with A*.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 6)]
    rows: i32,

    /// Number of columns.
    #[arg(long, default_value_t = 6)]
    cols: i32,

    /// Number of barrier cells.
    #[arg(long, default_value_t = DEFAULT_BARRIERS)]
    barriers: usize,

    /// RNG seed for a reproducible maze. Defaults to OS entropy.
    #[arg(long)]
    seed: Option<u64>,
}

/// Adapts a [`Maze`] to the pathfinding traits: 8-way movement through
/// non-barrier cells, manhattan estimate.
struct MazePather<'a> {
    maze: &'a Maze,
}

impl Pather for MazePather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.maze.neighbors(p, buf);
    }
}

impl AstarPather for MazePather<'_> {
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => rand::make_rng(),
    };
    let maze = MazeGen::new(rng)
        .generate(args.cols, args.rows, args.barriers)
        .context("maze generation failed")?;
    info!("maze generated: start={} end={}", maze.start(), maze.end());

    print!("{maze}");

    let mut finder = PathFinder::new();
    let path = finder
        .find(&MazePather { maze: &maze }, maze.start(), maze.end())
        .context("maze is unsolvable; rerun with a different seed")?;

    println!();
    print!("{}", presenter::render(&maze, &path));
    println!();
    println!("Path: {}", presenter::format_path(&path));
    println!("Cost: {}", path.cost());
    Ok(())
}
