//! Single entry point over the three search strategies.

use std::fmt;
use std::str::FromStr;

use mazer_core::Coord;
use thiserror::Error;

use crate::astar::astar;
use crate::best_first::best_first;
use crate::bfs::bfs;
use crate::record::PathResult;
use crate::traits::Pather;

/// Search strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// A* with the Manhattan heuristic. Shortest path.
    #[default]
    AStar,
    /// Breadth-first search. Shortest path.
    Bfs,
    /// Greedy best-first search. Not necessarily shortest.
    BestFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::AStar, Algorithm::Bfs, Algorithm::BestFirst];

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Bfs => "BFS",
            Algorithm::BestFirst => "Best-First",
        }
    }

    /// Whether the strategy always returns a shortest path.
    pub const fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::BestFirst)
    }

    /// Run this strategy without boundary checks.
    pub fn search<P: Pather>(self, pather: &P, start: Coord, end: Coord) -> PathResult {
        match self {
            Algorithm::AStar => astar(pather, start, end),
            Algorithm::Bfs => bfs(pather, start, end),
            Algorithm::BestFirst => best_first(pather, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a*" | "astar" | "a-star" => Ok(Algorithm::AStar),
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "best-first" | "bestfirst" | "greedy" => Ok(Algorithm::BestFirst),
            _ => Err(SearchError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Requests the engine refuses to run.
///
/// An unreachable goal is not an error: it is an `Ok` result with an empty
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("unknown search algorithm {0:?}")]
    UnknownAlgorithm(String),
    #[error("start {0} is outside the grid")]
    StartOutOfBounds(Coord),
    #[error("end {0} is outside the grid")]
    EndOutOfBounds(Coord),
}

/// Find a route from `start` to `end` with the chosen strategy.
///
/// Both endpoints must lie inside the pather's extent.
pub fn find_path<P: Pather>(
    pather: &P,
    start: Coord,
    end: Coord,
    algorithm: Algorithm,
) -> Result<PathResult, SearchError> {
    let dims = pather.dims();
    if !dims.contains(start) {
        return Err(SearchError::StartOutOfBounds(start));
    }
    if !dims.contains(end) {
        return Err(SearchError::EndOutOfBounds(end));
    }

    let result = algorithm.search(pather, start, end);
    log::debug!(
        "{algorithm} {start} -> {end} on {dims}: expanded {}, path {}",
        result.visited.len(),
        result.path.len()
    );
    Ok(result)
}

/// [`find_path`] with the strategy given by name (see [`Algorithm`]'s
/// `FromStr`).
pub fn find_path_named<P: Pather>(
    pather: &P,
    start: Coord,
    end: Coord,
    algorithm: &str,
) -> Result<PathResult, SearchError> {
    let algorithm: Algorithm = algorithm.parse()?;
    find_path(pather, start, end, algorithm)
}
