//! **mazer-core** — the grid model shared by the maze generator and the
//! pathfinding engine.
//!
//! This crate has no behaviour beyond bookkeeping: coordinates, grid
//! dimensions with their packed-index encoding, the per-cell state tag and
//! the cell grid itself.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellState;
pub use geom::{Coord, Dims};
pub use grid::{Grid, GridError};
