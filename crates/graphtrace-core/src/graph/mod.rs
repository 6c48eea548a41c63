//! Graph model read by every algorithm
//!
//! - `types`: nodes, edges and their presentational statuses
//! - `model`: the read-only graph and its adjacency queries
//! - `build`: canonical ids and construction from matrices, edge lists, or randomness

pub mod build;
pub mod model;
pub mod types;

pub use build::{canonical_edge_id, canonical_node_id, random_graph, GraphBuilder};
pub use model::Graph;
pub use types::{Edge, EdgeStatus, Node, NodeStatus};
