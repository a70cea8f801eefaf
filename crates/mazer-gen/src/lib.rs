//! Perfect-maze generation.
//!
//! [`generate_maze`] carves a maze with randomized recursive backtracking:
//! every room is connected to every other by exactly one simple path. The
//! random source is always supplied by the caller, either directly or via
//! a seed in [`MazeConfig`].

pub mod backtracker;
pub mod config;

pub use backtracker::{GenError, MAX_DIM, Maze, MazeGen, generate_maze, maze_dims, normalize};
pub use config::MazeConfig;
