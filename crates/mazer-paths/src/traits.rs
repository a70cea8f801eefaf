use mazer_core::{Coord, Dims, Grid};

use crate::neighbors::push_cardinal;

/// Minimal pathfinding interface: an extent plus neighbor enumeration.
///
/// Every search is generic over this trait; [`Grid`] implements it with the
/// orthogonal, non-wall rule.
pub trait Pather {
    /// Extent used to key per-search records. Neighbors must lie inside it.
    fn dims(&self) -> Dims;

    /// Append the traversable neighbors of `c` into `buf`, in a fixed order.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

impl Pather for Grid {
    #[inline]
    fn dims(&self) -> Dims {
        Grid::dims(self)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        push_cardinal(c, |n| self.is_passable(n), buf);
    }
}
