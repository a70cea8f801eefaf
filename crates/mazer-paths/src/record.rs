use mazer_core::{Coord, Dims};

/// Outcome of one search: the route found and the expansion order.
///
/// `path` runs from start to end inclusive and is empty when the end is
/// unreachable. `visited` lists every expanded cell in dequeue order and is
/// populated either way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub path: Vec<Coord>,
    pub visited: Vec<Coord>,
}

impl PathResult {
    /// Whether a route to the end was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves along the path, or `None` if no path was found.
    #[inline]
    pub fn steps(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

// ---------------------------------------------------------------------------
// SearchRecord
// ---------------------------------------------------------------------------

/// Predecessor link of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Link {
    /// Not discovered yet.
    #[default]
    Unseen,
    /// The search origin; has no predecessor.
    Root,
    /// Discovered from the cell with this packed index.
    From(usize),
}

/// Best-known predecessor of every discovered cell, keyed by packed index.
///
/// Owned by a single search call and dropped when it returns.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    dims: Dims,
    links: Vec<Link>,
}

impl SearchRecord {
    /// Create an empty record covering `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            links: vec![Link::Unseen; dims.len()],
        }
    }

    /// Mark `c` as the search origin.
    pub fn root(&mut self, c: Coord) {
        if let Some(i) = self.dims.index(c) {
            self.links[i] = Link::Root;
        }
    }

    /// Record `from` as the predecessor of `c`, replacing any earlier link.
    pub fn link(&mut self, c: Coord, from: Coord) {
        if let (Some(i), Some(fi)) = (self.dims.index(c), self.dims.index(from)) {
            self.links[i] = Link::From(fi);
        }
    }

    /// The link stored for `c`. Out-of-range cells are [`Link::Unseen`].
    pub fn link_of(&self, c: Coord) -> Link {
        self.dims
            .index(c)
            .map_or(Link::Unseen, |i| self.links[i])
    }

    /// Whether `c` has been discovered.
    #[inline]
    pub fn is_seen(&self, c: Coord) -> bool {
        self.link_of(c) != Link::Unseen
    }

    /// Follow predecessor links from `end` back to the root and return the
    /// route in start-to-end order. Empty if `end` was never discovered.
    pub fn reconstruct(&self, end: Coord) -> Vec<Coord> {
        let Some(mut ci) = self.dims.index(end) else {
            return Vec::new();
        };
        let mut path = Vec::new();
        loop {
            match self.links[ci] {
                Link::Unseen => return Vec::new(),
                Link::Root => {
                    path.push(self.dims.coord(ci));
                    break;
                }
                Link::From(pi) => {
                    path.push(self.dims.coord(ci));
                    // A chain longer than the grid means the links loop.
                    if path.len() > self.links.len() {
                        return Vec::new();
                    }
                    ci = pi;
                }
            }
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_links() {
        let dims = Dims::new(3, 3);
        let mut rec = SearchRecord::new(dims);
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 1);
        let c = Coord::new(1, 1);
        rec.root(a);
        rec.link(b, a);
        rec.link(c, b);

        assert_eq!(rec.reconstruct(c), vec![a, b, c]);
        assert_eq!(rec.reconstruct(a), vec![a]);
    }

    #[test]
    fn undiscovered_end_gives_empty_path() {
        let mut rec = SearchRecord::new(Dims::new(2, 2));
        rec.root(Coord::ZERO);
        assert!(rec.reconstruct(Coord::new(1, 1)).is_empty());
        assert!(rec.reconstruct(Coord::new(5, 5)).is_empty());
    }

    #[test]
    fn relink_replaces_predecessor() {
        let mut rec = SearchRecord::new(Dims::new(1, 4));
        let cells: Vec<_> = (0..4).map(|c| Coord::new(0, c)).collect();
        rec.root(cells[0]);
        rec.link(cells[2], cells[0]);
        rec.link(cells[3], cells[2]);
        assert_eq!(rec.reconstruct(cells[3]).len(), 3);

        rec.link(cells[1], cells[0]);
        rec.link(cells[2], cells[1]);
        assert_eq!(rec.reconstruct(cells[3]), cells);
    }

    #[test]
    fn seen_and_link_of() {
        let mut rec = SearchRecord::new(Dims::new(2, 2));
        assert!(!rec.is_seen(Coord::ZERO));
        rec.root(Coord::ZERO);
        rec.link(Coord::new(0, 1), Coord::ZERO);
        assert_eq!(rec.link_of(Coord::ZERO), Link::Root);
        assert_eq!(rec.link_of(Coord::new(0, 1)), Link::From(0));
        assert_eq!(rec.link_of(Coord::new(9, 9)), Link::Unseen);
    }

    #[test]
    fn path_result_helpers() {
        let none = PathResult::default();
        assert!(!none.is_found());
        assert_eq!(none.steps(), None);

        let one = PathResult {
            path: vec![Coord::new(1, 1)],
            visited: vec![Coord::new(1, 1)],
        };
        assert!(one.is_found());
        assert_eq!(one.steps(), Some(0));
    }
}
