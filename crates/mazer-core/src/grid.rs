//! A rectangular grid of [`CellState`] values.
//!
//! [`Grid`] owns a flat row-major buffer addressed through [`Dims::index`].
//! It also has a plain-text form (one glyph per cell, one line per row) that
//! is handy for fixtures and terminal output.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::CellState;
use crate::geom::{Coord, Dims};

/// A 2D grid of [`CellState`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dims: Dims,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell set to `fill`.
    pub fn new(dims: Dims, fill: CellState) -> Self {
        Self {
            dims,
            cells: vec![fill; dims.len()],
        }
    }

    /// Create a grid of all walls.
    pub fn walls(dims: Dims) -> Self {
        Self::new(dims, CellState::Wall)
    }

    /// Parse the text form. See [`GridError`] for the failure cases.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.chars().count();

        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GridError::InconsistentSize {
                    row,
                    expected: cols,
                    found: line.chars().count(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let state = CellState::from_glyph(ch).ok_or(GridError::InvalidGlyph {
                    glyph: ch,
                    at: Coord::new(row as i32, col as i32),
                })?;
                cells.push(state);
            }
        }

        Ok(Self {
            dims: Dims::new(lines.len() as i32, cols as i32),
            cells,
        })
    }

    /// Grid extent.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.dims.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.dims.cols
    }

    /// Whether the grid contains the given coordinate.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.dims.contains(c)
    }

    /// Get the cell at a coordinate, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, c: Coord) -> Option<CellState> {
        self.dims.index(c).map(|i| self.cells[i])
    }

    /// Set the cell at a coordinate. Does nothing if out of bounds.
    #[inline]
    pub fn set(&mut self, c: Coord, state: CellState) {
        if let Some(i) = self.dims.index(c) {
            self.cells[i] = state;
        }
    }

    /// In-bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Coord) -> bool {
        self.at(c).is_some_and(CellState::is_passable)
    }

    /// Fill the entire grid with the given state.
    pub fn fill(&mut self, state: CellState) {
        self.cells.fill(state);
    }

    /// Count how many cells equal the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&s| s == state).count()
    }

    /// Iterate over `(Coord, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        self.dims.iter().zip(self.cells.iter().copied())
    }

    /// Raw row-major cell slice.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.dims.cols.max(1) as usize;
        for (i, row) in self.cells.chunks(cols).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for s in row {
                write!(f, "{}", s.glyph())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No non-blank lines.
    #[error("grid: empty input")]
    Empty,
    /// Lines have inconsistent widths.
    #[error("grid: row {row} has {found} cells, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character with no [`CellState`] mapping.
    #[error("grid contains invalid glyph \u{201c}{glyph}\u{201d} at {at}")]
    InvalidGlyph { glyph: char, at: Coord },
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
#####
#S..#
#.#.#
#..E#
#####";

    #[test]
    fn new_and_size() {
        let g = Grid::new(Dims::new(5, 10), CellState::Path);
        assert_eq!(g.rows(), 5);
        assert_eq!(g.cols(), 10);
        assert_eq!(g.cells().len(), 50);
        assert_eq!(g.count(CellState::Path), 50);
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::walls(Dims::new(4, 4));
        let c = Coord::new(2, 3);
        g.set(c, CellState::Path);
        assert_eq!(g.at(c), Some(CellState::Path));
        assert_eq!(g.at(Coord::new(0, 0)), Some(CellState::Wall));
        assert_eq!(g.at(Coord::new(10, 10)), None);
        g.set(Coord::new(-1, 0), CellState::Path);
        assert_eq!(g.count(CellState::Path), 1);
    }

    #[test]
    fn passable_excludes_walls_and_outside() {
        let g = Grid::parse(ROOM).unwrap();
        assert!(g.is_passable(Coord::new(1, 1)));
        assert!(g.is_passable(Coord::new(1, 2)));
        assert!(!g.is_passable(Coord::new(2, 2)));
        assert!(!g.is_passable(Coord::new(-1, 1)));
        assert!(!g.is_passable(Coord::new(1, 5)));
    }

    #[test]
    fn fill_and_count() {
        let mut g = Grid::new(Dims::new(5, 5), CellState::Path);
        g.fill(CellState::Wall);
        assert_eq!(g.count(CellState::Wall), 25);
        g.set(Coord::ZERO, CellState::Visited);
        assert_eq!(g.count(CellState::Wall), 24);
    }

    #[test]
    fn parse_and_display() {
        let g: Grid = ROOM.parse().unwrap();
        assert_eq!(g.dims(), Dims::new(5, 5));
        assert_eq!(g.at(Coord::new(1, 1)), Some(CellState::Start));
        assert_eq!(g.at(Coord::new(3, 3)), Some(CellState::End));
        assert_eq!(g.to_string(), ROOM);
    }

    #[test]
    fn iter_row_major() {
        let g = Grid::parse("#.\n.#").unwrap();
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], (Coord::new(0, 1), CellState::Path));
        assert_eq!(items[3], (Coord::new(1, 1), CellState::Wall));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::parse("\n\n"), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("###\n##"),
            Err(GridError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            Grid::parse("#.\n#x"),
            Err(GridError::InvalidGlyph {
                glyph: 'x',
                at: Coord::new(1, 1)
            })
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("#.#\n.S.").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
