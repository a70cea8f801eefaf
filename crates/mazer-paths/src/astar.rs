use std::cell::Cell;

use mazer_core::Coord;

use crate::distance::manhattan;
use crate::queue::PriorityQueue;
use crate::record::{PathResult, SearchRecord};
use crate::traits::Pather;

/// Sentinel cost for cells with no known route from the start.
const UNREACHABLE: i32 = i32::MAX;

/// Shortest path from `start` to `end` using A* with the Manhattan heuristic.
///
/// The frontier is ranked by `g + h`, where `g` is read from the live cost
/// table at compare time. A neighbor is re-relaxed whenever a strictly
/// cheaper `g` is found. It is queued only if not already in the frontier;
/// if it is, the frontier is re-sorted against the new cost instead.
pub fn astar<P: Pather>(pather: &P, start: Coord, end: Coord) -> PathResult {
    let dims = pather.dims();
    let mut visited = Vec::new();
    let Some(start_idx) = dims.index(start) else {
        return PathResult::default();
    };

    let g: Vec<Cell<i32>> = vec![Cell::new(UNREACHABLE); dims.len()];
    let f = |c: &Coord| {
        let gc = dims.index(*c).map_or(UNREACHABLE, |i| g[i].get());
        gc.saturating_add(manhattan(*c, end))
    };
    let mut open = PriorityQueue::new(|a: &Coord, b: &Coord| f(a) < f(b));
    let mut record = SearchRecord::new(dims);

    g[start_idx].set(0);
    record.root(start);
    open.enqueue(start);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(current) = open.dequeue() {
        visited.push(current);

        if current == end {
            let path = record.reconstruct(end);
            return PathResult { path, visited };
        }

        let Some(ci) = dims.index(current) else {
            continue;
        };
        let tentative_g = g[ci].get().saturating_add(1);

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &n in nbuf.iter() {
            let Some(ni) = dims.index(n) else {
                continue;
            };
            if tentative_g >= g[ni].get() {
                continue;
            }
            record.link(n, current);
            g[ni].set(tentative_g);
            log::trace!("a*: relax {n} g={tentative_g}");

            if open.contains(|&p| p == n) {
                open.refresh();
            } else {
                open.enqueue(n);
            }
        }
    }

    PathResult {
        path: Vec::new(),
        visited,
    }
}
