use std::collections::VecDeque;

use mazer_core::Coord;

use crate::record::{PathResult, SearchRecord};
use crate::traits::Pather;

/// Breadth-first search from `start` to `end`.
///
/// Strict FIFO frontier. A cell is marked seen when it is enqueued, so it is
/// never queued twice. Each step has cost 1, so the path is a shortest one.
pub fn bfs<P: Pather>(pather: &P, start: Coord, end: Coord) -> PathResult {
    let dims = pather.dims();
    let mut visited = Vec::new();
    if !dims.contains(start) {
        return PathResult::default();
    }

    let mut record = SearchRecord::new(dims);
    let mut queue: VecDeque<Coord> = VecDeque::new();
    record.root(start);
    queue.push_back(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = queue.pop_front() {
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
            queue.push_back(n);
        }
    }

    PathResult {
        path: Vec::new(),
        visited,
    }
}
