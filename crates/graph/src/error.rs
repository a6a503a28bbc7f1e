use crate::VertexId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {0} does not exist")]
    VertexNotFound(VertexId),
    #[error("edge from vertex {from} to vertex {to} does not exist")]
    EdgeNotFound { from: VertexId, to: VertexId },
}
