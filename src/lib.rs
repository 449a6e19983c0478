//! Lazy, canonical-order traversal of every edge of a graph.
//!
//! A graph exposes its forward adjacency through [`Adjacency`]. An
//! [`EdgeIterator`] walks that adjacency with nothing but a
//! [`Position`] of state, producing each edge exactly once: directed edges
//! as stored, undirected edges as `(min, max)` from their smaller endpoint.
//!
//! ```
//! use edgewalk::{Adjacency, AdjacencyLists};
//!
//! let g = AdjacencyLists::undirected(3, [(0, 1), (2, 1)]).unwrap();
//! let edges = g.edges();
//!
//! assert_eq!(edges.pass().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);
//! assert!(edges == vec![(1, 2), (0, 1)]);
//! ```

pub mod graphs;

pub use graphs::{
    adjacency::{Adjacency, Edge},
    adjacency_lists::AdjacencyLists,
    csr::CSR,
    edge_iter::{EdgeIterator, Pass, Position},
    error::GraphError,
    parallel::PARALLEL_THRESHOLD,
};
