//! Randomized recursive backtracking (randomized depth-first carving).
//!
//! Cells at odd (row, col) are rooms; the cells between two rooms are walls
//! that get knocked out when the carver moves from one room to the next.
//! The carver keeps an explicit stack instead of recursing, so large mazes
//! cannot overflow the call stack.

use mazer_core::{CellState, Coord, Dims, Grid};
use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Offsets from a room to the four rooms two steps away (up, down, left,
/// right).
const ROOM_STEPS: [(i32, i32); 4] = [(-2, 0), (2, 0), (0, -2), (0, 2)];

/// Largest side length accepted after normalization.
pub const MAX_DIM: i32 = 4095;

/// A generated maze: the carved grid plus its two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    pub grid: Grid,
    /// Always (1, 1).
    pub start: Coord,
    /// Always (rows - 2, cols - 2).
    pub end: Coord,
}

/// Errors raised before any grid is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenError {
    /// A dimension is below 3 once made odd.
    #[error("maze dimensions {rows}x{cols} are too small (need at least 3x3)")]
    InvalidDimensions { rows: i32, cols: i32 },
    /// A dimension exceeds [`MAX_DIM`] once made odd.
    #[error("maze dimensions {rows}x{cols} are too large (at most {max} per side)", max = MAX_DIM)]
    TooLarge { rows: i32, cols: i32 },
}

/// Round an even dimension up to the next odd value.
///
/// Never overflows: the largest even `i32` is one below `i32::MAX`.
#[inline]
pub fn normalize(n: i32) -> i32 {
    if n % 2 == 0 { n + 1 } else { n }
}

/// Normalized maze extent, or an error if it cannot hold a room or exceeds
/// [`MAX_DIM`] per side.
pub fn maze_dims(rows: i32, cols: i32) -> Result<Dims, GenError> {
    let (r, c) = (normalize(rows), normalize(cols));
    if r < 3 || c < 3 {
        return Err(GenError::InvalidDimensions { rows, cols });
    }
    if r > MAX_DIM || c > MAX_DIM {
        return Err(GenError::TooLarge { rows, cols });
    }
    Ok(Dims::new(r, c))
}

/// Maze generator owning its random source.
///
/// Pass a seeded RNG for reproducible output.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator drawing from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `rows` × `cols` maze (dimensions made odd first).
    pub fn generate(&mut self, rows: i32, cols: i32) -> Result<Maze, GenError> {
        let dims = maze_dims(rows, cols)?;
        let start = Coord::new(1, 1);
        let end = Coord::new(dims.rows - 2, dims.cols - 2);

        let mut grid = Grid::walls(dims);
        let carved = self.carve(&mut grid, start);

        grid.set(start, CellState::Path);
        grid.set(end, CellState::Path);

        log::debug!("carved {dims} maze: {carved} rooms, start {start}, end {end}");
        Ok(Maze { grid, start, end })
    }

    /// Carve a spanning tree of rooms into `grid`, starting at `origin`.
    ///
    /// Every room reachable in steps of two from `origin` is visited exactly
    /// once. Returns the number of rooms visited.
    pub fn carve(&mut self, grid: &mut Grid, origin: Coord) -> usize {
        let dims = grid.dims();
        let Some(origin_idx) = dims.index(origin) else {
            return 0;
        };
        let mut visited = vec![false; dims.len()];
        let mut stack = Vec::new();
        let mut candidates = Vec::with_capacity(4);

        grid.set(origin, CellState::Path);
        visited[origin_idx] = true;
        stack.push(origin);
        let mut rooms = 1;

        while let Some(&current) = stack.last() {
            candidates.clear();
            for (dr, dc) in ROOM_STEPS {
                let next = current.shift(dr, dc);
                if let Some(ni) = dims.index(next) {
                    if !visited[ni] {
                        candidates.push((next, ni));
                    }
                }
            }
            candidates.shuffle(&mut self.rng);

            let Some(&(next, ni)) = candidates.first() else {
                stack.pop();
                continue;
            };

            let between = Coord::new(
                (current.row + next.row) / 2,
                (current.col + next.col) / 2,
            );
            grid.set(between, CellState::Path);
            grid.set(next, CellState::Path);
            visited[ni] = true;
            stack.push(next);
            rooms += 1;
            log::trace!("carve {current} -> {next}");
        }

        rooms
    }
}

/// Generate a maze of (odd-normalized) `rows` × `cols` using `rng`.
pub fn generate_maze<R: Rng>(rows: i32, cols: i32, rng: R) -> Result<Maze, GenError> {
    MazeGen::with_rng(rng).generate(rows, cols)
}
