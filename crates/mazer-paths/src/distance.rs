use mazer_core::Coord;

/// Manhattan (L1) distance between two cells.
///
/// This is the heuristic used by A* and best-first search. It never
/// overestimates on a unit-cost 4-connected grid, and it is consistent.
#[inline]
pub fn manhattan(a: Coord, b: Coord) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
