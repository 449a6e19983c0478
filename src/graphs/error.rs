use thiserror::Error;

/// Errors raised while building one of the adjacency graphs in this crate.
///
/// Traversal itself never fails; these only come from constructors that
/// take raw edge lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },
}
