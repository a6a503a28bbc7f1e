use std::collections::HashMap;

use graph::{VertexId, WeightedGraph};

use crate::INF;

/// Output of a single-source shortest-path run.
///
/// The forest holds every vertex of the input graph. A vertex reached by a
/// relaxation has exactly one outgoing edge, pointing to its predecessor and
/// carrying the weight of the relaxing edge. `distances` maps every input
/// vertex to its distance, or [`INF`] when unreachable.
#[derive(Clone, Debug)]
pub struct ShortestPathResult<T> {
    source: Option<VertexId>,
    forest: WeightedGraph<T>,
    distances: HashMap<VertexId, f64>,
}

impl<T> Default for ShortestPathResult<T> {
    fn default() -> Self {
        Self {
            source: None,
            forest: WeightedGraph::new(),
            distances: HashMap::new(),
        }
    }
}

impl<T> ShortestPathResult<T> {
    pub(crate) fn new(
        source: VertexId,
        forest: WeightedGraph<T>,
        distances: HashMap<VertexId, f64>,
    ) -> Self {
        Self {
            source: Some(source),
            forest,
            distances,
        }
    }

    /// `None` for the empty result.
    #[inline]
    pub fn source(&self) -> Option<VertexId> {
        self.source
    }

    #[inline]
    pub fn forest(&self) -> &WeightedGraph<T> {
        &self.forest
    }

    #[inline]
    pub fn distances(&self) -> &HashMap<VertexId, f64> {
        &self.distances
    }

    #[inline]
    pub fn distance(&self, id: VertexId) -> Option<f64> {
        self.distances.get(&id).copied()
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance(id).is_some_and(|d| d < INF)
    }

    /// True for the result of an absent source or a detected negative cycle.
    pub fn is_empty(&self) -> bool {
        self.forest.is_empty() && self.distances.is_empty()
    }

    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.forest.vertex(id).ok()?.neighbours().next()
    }

    /// Vertices from the source to `target` along the forest, inclusive.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut cur = target;
        while let Some(prev) = self.predecessor(cur) {
            if path.len() > self.forest.vertex_count() {
                return None;
            }
            path.push(prev);
            cur = prev;
        }
        if Some(cur) != self.source {
            return None;
        }
        path.reverse();
        Some(path)
    }

    pub fn into_parts(self) -> (WeightedGraph<T>, HashMap<VertexId, f64>) {
        (self.forest, self.distances)
    }
}
