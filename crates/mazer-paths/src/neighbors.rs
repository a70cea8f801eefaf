use mazer_core::{Coord, Grid};

use crate::traits::Pather;

/// Cached neighbor computation helper.
///
/// Enumerates the orthogonal neighbors of a cell (up, down, left, right),
/// filtered by a predicate, into a reused buffer.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the orthogonal neighbors of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        push_cardinal(c, keep, &mut self.buf);
        &self.buf
    }
}

/// Append the orthogonal neighbors of `c` that pass `keep` to `buf`.
pub(crate) fn push_cardinal(c: Coord, keep: impl Fn(Coord) -> bool, buf: &mut Vec<Coord>) {
    buf.extend(c.neighbors_4().into_iter().filter(|&n| keep(n)));
}

/// In-bounds, non-wall orthogonal neighbors of `c`, in the order up, down,
/// left, right. Same rule the searches expand with.
pub fn neighbors(c: Coord, grid: &Grid) -> Vec<Coord> {
    let mut buf = Vec::with_capacity(4);
    grid.neighbors(c, &mut buf);
    buf
}
