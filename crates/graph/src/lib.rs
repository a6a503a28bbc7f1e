mod error;
mod graph;
pub mod traversal;
mod weighted;

pub use error::GraphError;
pub use graph::{Edges, Graph, Neighbours, Vertex, Vertices};
pub use traversal::{bfs, dfs, topological_sort};
pub use weighted::{WeightedEdge, WeightedEdges, WeightedGraph};

pub type VertexId = usize;
