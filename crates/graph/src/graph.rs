use std::collections::{HashMap, HashSet, hash_map, hash_set};

use crate::{GraphError, VertexId};

/// A vertex owned by a [`Graph`].
///
/// Neighbours are stored by identifier and resolved through the owning graph,
/// so a cloned graph never points back into the storage it was cloned from.
#[derive(Clone, Debug)]
pub struct Vertex<T> {
    id: VertexId,
    data: T,
    neighbours: HashSet<VertexId>,
    in_degree: usize,
}

impl<T> Vertex<T> {
    fn new(id: VertexId, data: T) -> Self {
        Self {
            id,
            data,
            neighbours: HashSet::new(),
            in_degree: 0,
        }
    }

    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    #[inline]
    pub fn neighbours(&self) -> Neighbours<'_> {
        Neighbours {
            inner: self.neighbours.iter(),
        }
    }

    #[inline]
    pub fn has_neighbour(&self, id: VertexId) -> bool {
        self.neighbours.contains(&id)
    }

    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    #[inline]
    pub fn out_degree(&self) -> usize {
        self.neighbours.len()
    }
}

/// A directed graph over caller-assigned vertex identifiers.
///
/// - At most one edge per ordered pair `(from, to)`.
/// - In-degrees and the edge count are maintained on every mutation.
/// - Iteration order over vertices and neighbours is unspecified.
#[derive(Clone, Debug)]
pub struct Graph<T> {
    vertices: HashMap<VertexId, Vertex<T>>,
    edge_count: usize,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: HashMap::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Returns `false` and leaves the graph untouched if `id` is taken.
    pub fn add_vertex(&mut self, id: VertexId, data: T) -> bool {
        match self.vertices.entry(id) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(Vertex::new(id, data));
                true
            }
        }
    }

    /// Returns `false` if either endpoint is missing or the edge already exists.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if !self.vertices.contains_key(&to) {
            return false;
        }
        let Some(tail) = self.vertices.get_mut(&from) else {
            return false;
        };
        if !tail.neighbours.insert(to) {
            return false;
        }
        if let Some(head) = self.vertices.get_mut(&to) {
            head.in_degree += 1;
        }
        self.edge_count += 1;
        true
    }

    /// Returns `false` if either endpoint or the edge is missing.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> bool {
        if !self.vertices.contains_key(&to) {
            return false;
        }
        let Some(tail) = self.vertices.get_mut(&from) else {
            return false;
        };
        if !tail.neighbours.remove(&to) {
            return false;
        }
        if let Some(head) = self.vertices.get_mut(&to) {
            head.in_degree -= 1;
        }
        self.edge_count -= 1;
        true
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex<T>, GraphError> {
        self.vertices.get(&id).ok_or(GraphError::VertexNotFound(id))
    }

    pub fn vertex_data_mut(&mut self, id: VertexId) -> Result<&mut T, GraphError> {
        self.vertices
            .get_mut(&id)
            .map(|vertex| &mut vertex.data)
            .ok_or(GraphError::VertexNotFound(id))
    }

    #[inline]
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertices.contains_key(&id)
    }

    #[inline]
    pub fn contains_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertices
            .get(&from)
            .is_some_and(|vertex| vertex.neighbours.contains(&to))
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edge_count = 0;
    }

    pub fn clear_edges(&mut self) {
        for vertex in self.vertices.values_mut() {
            vertex.neighbours.clear();
            vertex.in_degree = 0;
        }
        self.edge_count = 0;
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the vertices in unspecified order.
    ///
    /// The iterator borrows the graph, so it cannot be mutated mid-pass.
    pub fn iter(&self) -> Vertices<'_, T> {
        Vertices {
            inner: self.vertices.values(),
        }
    }

    pub fn edges(&self) -> Edges<'_, T> {
        Edges {
            vertices: self.vertices.values(),
            current: None,
        }
    }

    /// Identifiers of all vertices with in-degree 0.
    pub fn sources(&self) -> Vec<VertexId> {
        self.vertices
            .values()
            .filter(|vertex| vertex.in_degree == 0)
            .map(|vertex| vertex.id)
            .collect()
    }

    /// A copy with every vertex (payload cloned) and no edges.
    pub fn without_edges(&self) -> Self
    where
        T: Clone,
    {
        let mut graph = Self::with_capacity(self.vertex_count());
        for vertex in self.vertices.values() {
            graph.add_vertex(vertex.id, vertex.data.clone());
        }
        graph
    }
}

impl<'a, T> IntoIterator for &'a Graph<T> {
    type Item = &'a Vertex<T>;
    type IntoIter = Vertices<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct Vertices<'a, T> {
    inner: hash_map::Values<'a, VertexId, Vertex<T>>,
}

impl<'a, T> Iterator for Vertices<'a, T> {
    type Item = &'a Vertex<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Vertices<'_, T> {}

pub struct Neighbours<'a> {
    inner: hash_set::Iter<'a, VertexId>,
}

impl Iterator for Neighbours<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Neighbours<'_> {}

pub struct Edges<'a, T> {
    vertices: hash_map::Values<'a, VertexId, Vertex<T>>,
    current: Option<(VertexId, hash_set::Iter<'a, VertexId>)>,
}

impl<T> Iterator for Edges<'_, T> {
    type Item = (VertexId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((from, neighbours)) = &mut self.current {
                if let Some(&to) = neighbours.next() {
                    return Some((*from, to));
                }
            }
            let vertex = self.vertices.next()?;
            self.current = Some((vertex.id, vertex.neighbours.iter()));
        }
    }
}
