use std::collections::{HashMap, hash_map};
use std::ops::Deref;

use crate::{Graph, GraphError, VertexId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedEdge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
}

/// A [`Graph`] with one `f64` weight per directed edge.
///
/// Every edge mutation goes through this type, so the weight index always
/// covers exactly the edge set of the underlying graph. Read-only access to
/// the graph is available through `Deref`.
#[derive(Clone, Debug)]
pub struct WeightedGraph<T> {
    graph: Graph<T>,
    weights: HashMap<(VertexId, VertexId), f64>,
}

impl<T> Default for WeightedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for WeightedGraph<T> {
    type Target = Graph<T>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<T> WeightedGraph<T> {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            weights: HashMap::new(),
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            graph: Graph::with_capacity(vertex_count),
            weights: HashMap::new(),
        }
    }

    #[inline]
    pub fn as_graph(&self) -> &Graph<T> {
        &self.graph
    }

    pub fn add_vertex(&mut self, id: VertexId, data: T) -> bool {
        self.graph.add_vertex(id, data)
    }

    pub fn vertex_data_mut(&mut self, id: VertexId) -> Result<&mut T, GraphError> {
        self.graph.vertex_data_mut(id)
    }

    /// The weight is recorded only if the underlying insertion succeeds.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> bool {
        if !self.graph.add_edge(from, to) {
            return false;
        }
        self.weights.insert((from, to), weight);
        true
    }

    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if !self.graph.remove_edge(from, to) {
            return false;
        }
        self.weights.remove(&(from, to));
        true
    }

    pub fn set_weight(&mut self, from: VertexId, to: VertexId, weight: f64) -> bool {
        match self.weights.get_mut(&(from, to)) {
            Some(slot) => {
                *slot = weight;
                true
            }
            None => false,
        }
    }

    pub fn weight(&self, from: VertexId, to: VertexId) -> Result<f64, GraphError> {
        self.weights
            .get(&(from, to))
            .copied()
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    pub fn edges(&self) -> WeightedEdges<'_> {
        WeightedEdges {
            inner: self.weights.iter(),
        }
    }

    pub fn clear(&mut self) {
        self.graph.clear();
        self.weights.clear();
    }

    pub fn clear_edges(&mut self) {
        self.graph.clear_edges();
        self.weights.clear();
    }

    pub fn without_edges(&self) -> Self
    where
        T: Clone,
    {
        Self {
            graph: self.graph.without_edges(),
            weights: HashMap::new(),
        }
    }
}

impl<T> From<Graph<T>> for WeightedGraph<T> {
    /// Every existing edge receives weight `0.0`.
    fn from(graph: Graph<T>) -> Self {
        let weights = graph.edges().map(|edge| (edge, 0.0)).collect();
        Self { graph, weights }
    }
}

pub struct WeightedEdges<'a> {
    inner: hash_map::Iter<'a, (VertexId, VertexId), f64>,
}

impl Iterator for WeightedEdges<'_> {
    type Item = WeightedEdge;

    fn next(&mut self) -> Option<Self::Item> {
        let (&(from, to), &weight) = self.inner.next()?;
        Some(WeightedEdge { from, to, weight })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for WeightedEdges<'_> {}
