use mazer_core::Coord;

use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::record::{PathResult, SearchRecord};
use crate::traits::Pather;

/// Greedy best-first search from `start` to `end`.
///
/// The frontier is ranked by the Manhattan distance to `end` alone. Cells are
/// marked seen when queued and never re-linked, so the route is whatever the
/// greedy discovery tree produced; it is not guaranteed to be shortest.
pub fn best_first<P: Pather>(pather: &P, start: Coord, end: Coord) -> PathResult {
    let dims = pather.dims();
    let mut visited = Vec::new();
    if !dims.contains(start) {
        return PathResult::default();
    }

    let mut open = PriorityQueue::new(|a: &Coord, b: &Coord| {
        manhattan(*a, end) < manhattan(*b, end)
    });
    let mut record = SearchRecord::new(dims);
    record.root(start);
    open.enqueue(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.dequeue() {
        visited.push(current);

        if current == end {
            let path = record.reconstruct(end);
            return PathResult { path, visited };
        }

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            if !dims.contains(n) || record.is_seen(n) {
                continue;
            }
            record.link(n, current);
            open.enqueue(n);
        }
    }

    PathResult {
        path: Vec::new(),
        visited,
    }
}
