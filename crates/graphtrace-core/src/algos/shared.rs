use serde::Serialize;
use std::collections::{HashMap, HashSet};

use crate::graph::{Edge, Graph};
use crate::trace::Trace;

/// Node-id membership and neighbor lookups that skip dangling references
pub(crate) struct Adjacency<'a> {
    graph: &'a Graph,
    known: HashSet<&'a str>,
}

impl<'a> Adjacency<'a> {
    pub(crate) fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            known: graph.nodes().iter().map(|n| n.id.as_str()).collect(),
        }
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.known.contains(id)
    }

    /// Incident edges of `id` whose opposite endpoint exists, in edge order
    pub(crate) fn neighbors(&self, id: &'a str) -> Vec<(&'a Edge, &'a str)> {
        self.graph
            .incident_edges(id)
            .filter(|(_, other)| self.known.contains(other))
            .collect()
    }

    /// True when both endpoints of `edge` exist
    pub(crate) fn is_well_formed(&self, edge: &Edge) -> bool {
        self.contains(&edge.source) && self.contains(&edge.target)
    }
}

/// Tentative distance lookup where absence means unreachable
pub(crate) fn distance_of(table: &HashMap<&str, f64>, id: &str) -> f64 {
    table.get(id).copied().unwrap_or(f64::INFINITY)
}

/// Final single-source distances in canonical node order.
///
/// Unreachable nodes hold `f64::INFINITY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distances {
    entries: Vec<(String, f64)>,
}

impl Distances {
    pub(crate) fn collect(graph: &Graph, table: &HashMap<&str, f64>) -> Self {
        Distances {
            entries: graph
                .nodes()
                .iter()
                .map(|n| (n.id.clone(), distance_of(table, &n.id)))
                .collect(),
        }
    }

    /// Distance to `id`; `None` when the node is not in the graph
    pub fn get(&self, id: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(node_id, _)| node_id == id)
            .map(|(_, d)| *d)
    }

    pub fn is_reachable(&self, id: &str) -> bool {
        self.get(id).is_some_and(f64::is_finite)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(id, d)| (id.as_str(), *d))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trace plus final distances from Dijkstra or A*
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPathRun {
    pub trace: Trace,
    pub distances: Distances,
}

/// All-pairs distances in canonical node order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    ids: Vec<String>,
    values: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    pub(crate) fn new(ids: Vec<String>, values: Vec<Vec<f64>>) -> Self {
        Self { ids, values }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn size(&self) -> usize {
        self.ids.len()
    }

    /// Distance from `from` to `to`; `None` when either id is unknown
    pub fn get(&self, from: &str, to: &str) -> Option<f64> {
        let i = self.ids.iter().position(|id| id == from)?;
        let j = self.ids.iter().position(|id| id == to)?;
        Some(self.values[i][j])
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.values
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (0..i).all(|j| self.values[i][j] == self.values[j][i]))
    }
}
