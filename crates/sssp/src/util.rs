use std::collections::HashMap;

use graph::{VertexId, WeightedGraph};

use crate::INF;

/// `0` for the source, [`INF`] for every other vertex.
pub(crate) fn initial_distances<T>(
    graph: &WeightedGraph<T>,
    source: VertexId,
) -> HashMap<VertexId, f64> {
    graph
        .iter()
        .map(|v| (v.id(), if v.id() == source { 0.0 } else { INF }))
        .collect()
}

/// Shortest-path forest under construction: one edge per relaxed vertex,
/// pointing at its current predecessor.
pub(crate) struct ForestBuilder<T> {
    forest: WeightedGraph<T>,
    predecessor: HashMap<VertexId, VertexId>,
}

impl<T: Clone> ForestBuilder<T> {
    pub(crate) fn new(graph: &WeightedGraph<T>) -> Self {
        Self {
            forest: graph.without_edges(),
            predecessor: HashMap::new(),
        }
    }
}

impl<T> ForestBuilder<T> {
    /// Replaces the edge recorded for `vertex` (if any) with `vertex -> via`.
    pub(crate) fn relax(&mut self, vertex: VertexId, via: VertexId, weight: f64) {
        if let Some(stale) = self.predecessor.insert(vertex, via) {
            self.forest.remove_edge(vertex, stale);
        }
        self.forest.add_edge(vertex, via, weight);
    }

    pub(crate) fn finish(self) -> WeightedGraph<T> {
        self.forest
    }
}
