//! Terminal demo: generate a maze, solve it, print the result.
//!
//! Run: cargo run --bin mazer -- --rows 15 --cols 41 --seed 7 --all

use std::error::Error;

use clap::Parser;
use mazer_core::{Coord, Grid};
use mazer_gen::MazeConfig;
use mazer_paths::{Algorithm, PathResult, Replay, find_path};

#[derive(Debug, Parser)]
#[command(name = "mazer", about = "Generate a perfect maze and search it")]
struct Args {
    /// Maze height; even values are rounded up to odd.
    #[arg(short, long, default_value_t = 21)]
    rows: i32,
    /// Maze width; even values are rounded up to odd.
    #[arg(short, long, default_value_t = 31)]
    cols: i32,
    /// Seed for a reproducible maze.
    #[arg(short, long)]
    seed: Option<u64>,
    /// A*, BFS or Best-First.
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    algorithm: Algorithm,
    /// Run every algorithm and print a comparison.
    #[arg(long)]
    all: bool,
    /// Print a replay frame every N steps.
    #[arg(long, value_name = "N")]
    replay: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        seed: args.seed,
    };
    let maze = config.generate()?;
    println!("{}\n", maze.grid);

    let algorithms = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm]
    };

    for algorithm in algorithms {
        let result = find_path(&maze.grid, maze.start, maze.end, algorithm)?;
        if let Some(every) = args.replay.filter(|&n| n > 0) {
            print_replay(&maze.grid, maze.start, maze.end, &result, every);
        }
        println!("{}\n", result.overlay(&maze.grid, maze.start, maze.end));
        println!("{}\n", summary(algorithm, &result));
    }
    Ok(())
}

fn print_replay(grid: &Grid, start: Coord, end: Coord, result: &PathResult, every: usize) {
    let replay = Replay::new(grid, start, end, result);
    let total = replay.len();
    for (i, frame) in replay.frames().enumerate() {
        let step = i + 1;
        if step % every == 0 || step == total {
            println!("step {step}/{total}\n{frame}\n");
        }
    }
}

fn summary(algorithm: Algorithm, result: &PathResult) -> String {
    match result.steps() {
        Some(steps) => format!(
            "{algorithm}: path of {steps} steps, {} cells expanded",
            result.visited.len()
        ),
        None => format!(
            "{algorithm}: no path, {} cells expanded",
            result.visited.len()
        ),
    }
}
