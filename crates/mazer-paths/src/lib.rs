//! Pathfinding over maze grids.
//!
//! Three interchangeable strategies share one neighbor rule, one heuristic
//! and one result shape:
//!
//! - **A\*** shortest-path search ([`astar`])
//! - **Breadth-first** search ([`bfs`])
//! - **Greedy best-first** search ([`best_first`])
//!
//! Each returns a [`PathResult`]: the route (empty if unreachable) and the
//! order in which cells were expanded, which [`Replay`] turns into frames.
//! [`find_path`] is the checked entry point selected by [`Algorithm`].
//!
//! # Frontier policies
//!
//! | Strategy | Frontier | Ranking | Revisit |
//! |---|---|---|---|
//! | A* | [`PriorityQueue`] | `g + manhattan`, read at compare time | re-relax on strictly lower `g` |
//! | BFS | FIFO | insertion order | never |
//! | Best-first | [`PriorityQueue`] | `manhattan` only | never |

mod astar;
mod best_first;
mod bfs;
mod distance;
mod engine;
mod neighbors;
mod queue;
mod record;
mod replay;
mod traits;

pub use astar::astar;
pub use best_first::best_first;
pub use bfs::bfs;
pub use distance::manhattan;
pub use engine::{Algorithm, SearchError, find_path, find_path_named};
pub use neighbors::{Neighbors, neighbors};
pub use queue::PriorityQueue;
pub use record::{Link, PathResult, SearchRecord};
pub use replay::{Phase, Replay};
pub use traits::Pather;
