pub mod adjacency;
pub mod adjacency_lists;
pub mod csr;
pub mod edge_eq;
pub mod edge_iter;
pub mod error;
pub mod parallel;
