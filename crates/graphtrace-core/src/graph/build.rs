//! Graph construction paths
//!
//! Every path that creates nodes or edges goes through [`canonical_node_id`]
//! and [`canonical_edge_id`], so ids generated here always match the ids
//! hosts look up later.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::Graph;
use super::types::{Edge, Node};
use crate::config::{LayoutConfig, RandomGraphConfig};
use crate::error::{Result, TraceError};

/// Id of the node at canonical position `index`
pub fn canonical_node_id(index: usize) -> String {
    format!("n{}", index)
}

/// Id of the edge between the nodes at positions `a` and `b`.
///
/// Undirected edges sort their endpoints so `(2, 1)` and `(1, 2)` share an id.
pub fn canonical_edge_id(a: usize, b: usize, directed: bool) -> String {
    if directed {
        format!("e{}-{}", a, b)
    } else {
        format!("e{}-{}", a.min(b), a.max(b))
    }
}

/// Position of node `index` out of `count` on a circle
pub fn circular_position(index: usize, count: usize, layout: &LayoutConfig) -> (f64, f64) {
    if count == 0 {
        return (layout.center_x, layout.center_y);
    }
    let angle = 2.0 * std::f64::consts::PI * index as f64 / count as f64;
    (
        layout.center_x + layout.radius * angle.cos(),
        layout.center_y + layout.radius * angle.sin(),
    )
}

/// Incremental graph construction with canonical ids
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    directed: bool,
    layout: LayoutConfig,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    pub fn new(directed: bool) -> Self {
        GraphBuilder {
            directed,
            layout: LayoutConfig::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Replace the node list with `count` canonical nodes `n0..n{count-1}`
    /// placed on a circle
    pub fn with_nodes(mut self, count: usize) -> Self {
        self.nodes = (0..count)
            .map(|i| {
                let (x, y) = circular_position(i, count, &self.layout);
                Node::new(canonical_node_id(i), x, y).with_label(i.to_string())
            })
            .collect();
        self
    }

    /// Append an arbitrary node
    pub fn node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Append an edge between canonical nodes `source` and `target`
    pub fn edge(mut self, source: usize, target: usize, weight: Option<f64>) -> Self {
        self.edges.push(Edge::new(
            canonical_edge_id(source, target, self.directed),
            canonical_node_id(source),
            canonical_node_id(target),
            weight,
        ));
        self
    }

    /// Set the A* heuristic of the node at `index`; ignored when out of range
    pub fn heuristic(mut self, index: usize, value: f64) -> Self {
        if let Some(node) = self.nodes.get_mut(index) {
            node.heuristic = Some(value);
        }
        self
    }

    pub fn build(self) -> Graph {
        Graph::new(self.nodes, self.edges, self.directed)
    }
}

impl Graph {
    /// Build a graph from a square adjacency matrix.
    ///
    /// A non-zero entry `matrix[i][j]` becomes an edge `n{i} -> n{j}` with
    /// that weight, so negative weights survive. Undirected graphs read only the upper triangle
    /// (including the diagonal) so each pair yields one edge.
    pub fn from_adjacency_matrix(
        matrix: &[Vec<f64>],
        directed: bool,
        layout: &LayoutConfig,
    ) -> Result<Graph> {
        let size = matrix.len();
        if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(TraceError::InvalidMatrix {
                reason: format!(
                    "row {} has {} entries, expected {}",
                    row,
                    cells.len(),
                    size
                ),
            });
        }

        let mut builder = GraphBuilder::new(directed)
            .with_layout(*layout)
            .with_nodes(size);
        for (i, row) in matrix.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if value != 0.0 && (directed || i <= j) {
                    builder = builder.edge(i, j, Some(value));
                }
            }
        }

        let graph = builder.build();
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edges().len(),
            directed,
            "built graph from adjacency matrix"
        );
        Ok(graph)
    }

    /// Build a graph of `node_count` canonical nodes from `(source, target,
    /// weight)` index triples
    pub fn from_edge_list(
        node_count: usize,
        edges: &[(usize, usize, Option<f64>)],
        directed: bool,
        layout: &LayoutConfig,
    ) -> Result<Graph> {
        let mut builder = GraphBuilder::new(directed)
            .with_layout(*layout)
            .with_nodes(node_count);
        for &(source, target, weight) in edges {
            if source >= node_count || target >= node_count {
                return Err(TraceError::InvalidGraph {
                    reason: format!(
                        "edge {}-{} is out of range for {} nodes",
                        source, target, node_count
                    ),
                });
            }
            builder = builder.edge(source, target, weight);
        }
        Ok(builder.build())
    }

    /// Weighted adjacency matrix in canonical node order.
    ///
    /// Missing weights count as 1. Undirected graphs are mirrored. Edges with
    /// unknown endpoints are skipped.
    pub fn to_adjacency_matrix(&self) -> Vec<Vec<f64>> {
        let size = self.node_count();
        let mut matrix = vec![vec![0.0; size]; size];
        for edge in self.edges() {
            let (Some(i), Some(j)) = (self.node_index(&edge.source), self.node_index(&edge.target))
            else {
                continue;
            };
            matrix[i][j] = edge.cost();
            if !self.is_directed() && i != j {
                matrix[j][i] = edge.cost();
            }
        }
        matrix
    }
}

/// Generate a reproducible random undirected graph.
///
/// Each pair `i < j` is connected with probability `edge_probability`, with
/// an integer weight drawn uniformly from `1..=max_weight`. Nodes sit on the
/// layout circle, moved to the centre given in `config`.
pub fn random_graph(
    node_count: usize,
    config: &RandomGraphConfig,
    layout: &LayoutConfig,
    seed: u64,
) -> Result<Graph> {
    let p = config.edge_probability;
    if !(0.0..=1.0).contains(&p) {
        crate::bail_invalid!("edge probability", p);
    }
    let max_weight = config.max_weight.max(1);

    let mut rng = StdRng::seed_from_u64(seed);
    let layout = LayoutConfig {
        center_x: config.center_x,
        center_y: config.center_y,
        ..*layout
    };
    let mut builder = GraphBuilder::undirected()
        .with_layout(layout)
        .with_nodes(node_count);
    for i in 0..node_count {
        for j in (i + 1)..node_count {
            if rng.random_bool(p) {
                let weight = rng.random_range(1..=max_weight);
                builder = builder.edge(i, j, Some(f64::from(weight)));
            }
        }
    }

    let graph = builder.build();
    tracing::debug!(
        nodes = node_count,
        edges = graph.edges().len(),
        seed,
        "generated random graph"
    );
    Ok(graph)
}
