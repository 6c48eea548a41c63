//! Graph algorithm implementations
//!
//! Each algorithm is a pure function from a graph and its endpoints to a
//! [`Trace`](crate::trace::Trace). Shortest-path algorithms also have a
//! `*_run` form that returns the final distance tables alongside the trace.
//! - `bfs`, `dfs`: unweighted traversals
//! - `dijkstra`, `astar`: single-source shortest paths with non-negative weights
//! - `bellman_ford`: single-source shortest paths with negative-cycle detection
//! - `floyd_warshall`: all-pairs shortest paths
//! - `shared`: adjacency and distance tables used by several algorithms

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod shared;

pub use astar::{a_star, a_star_run};
pub use bellman_ford::{bellman_ford, bellman_ford_run, BellmanFordRun, NEGATIVE_CYCLE_DESCRIPTION};
pub use bfs::bfs;
pub use dfs::dfs;
pub use dijkstra::{dijkstra, dijkstra_run};
pub use floyd_warshall::{floyd_warshall, floyd_warshall_run, FloydWarshallRun};
pub use shared::{DistanceMatrix, Distances, ShortestPathRun};
