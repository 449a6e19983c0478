use crate::graphs::adjacency::{Adjacency, Edge};

/// Compressed Sparse Row (CSR) representation of a directed graph.
///
/// Vertices are numbered from zero up to `vertex_count - 1`.
/// Outgoing neighbors of a vertex `u` are stored in a contiguous,
/// ascending, duplicate-free segment of the indices array.
/// The segment for `u` is given by the half open range
/// `offsets[u]` up to `offsets[u + 1]`.
///
/// The length of `offsets` is `vertex_count + 1`.
/// `offsets[0]` is always zero.
/// `offsets[vertex_count]` is always equal to `indices.len`.
/// The length of `indices` is equal to the number of directed edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CSR {
    /// Row offsets for the CSR layout.
    offsets: Box<[usize]>,

    /// Concatenated, per-row sorted destination vertices.
    indices: Box<[usize]>,
}

impl Default for CSR {
    /// Empty CSR graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            offsets: Box::from([0]),
            indices: Box::new([]),
        }
    }
}

impl From<Vec<Edge>> for CSR {
    /// Build a CSR graph from a list of directed edges.
    ///
    /// The vertex set is the integers from zero up to the largest
    /// endpoint in the edge list. Parallel edges collapse into one.
    fn from(mut edges: Vec<Edge>) -> Self {
        let Some(largest) = edges
            .iter()
            .map(|&(source, destination)| source.max(destination))
            .max()
        else {
            return Self::default();
        };

        // sort by (source, destination) so every row is contiguous and ascending.
        edges.sort_unstable();
        edges.dedup();

        let vertex_count = largest + 1;

        // count the row lengths, then prefix sum them into offsets.
        let mut offsets = vec![0usize; vertex_count + 1];
        for &(source, _) in &edges {
            offsets[source + 1] += 1;
        }
        for vertex in 0..vertex_count {
            offsets[vertex + 1] += offsets[vertex];
        }

        let indices: Box<[usize]> = edges.iter().map(|&(_, destination)| destination).collect();

        debug_assert_eq!(offsets[vertex_count], indices.len());

        CSR {
            offsets: offsets.into_boxed_slice(),
            indices,
        }
    }
}

impl CSR {
    /// Returns the half open range of indices for the outgoing neighbors of a vertex.
    ///
    /// On success this returns start and end such that the neighbors
    /// of vertex are `indices[start..end]`.
    /// Returns None when vertex is out of range.
    #[inline]
    pub fn neighbor_range(&self, vertex: usize) -> Option<(usize, usize)> {
        let start = *self.offsets.get(vertex)?;
        // CSR is closed by an additional offset marking the length of the indices.
        let end = *self.offsets.get(vertex + 1)?;
        Some((start, end))
    }
}

impl Adjacency for CSR {
    /// Number of vertices.
    #[inline]
    fn vertex_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Number of edges.
    #[inline]
    fn edge_count(&self) -> usize {
        self.indices.len()
    }

    /// Outgoing neighbors of a vertex, or an empty slice when out of range.
    #[inline]
    fn forward_adjacency(&self, vertex: usize) -> &[usize] {
        match self.neighbor_range(vertex) {
            Some((start, end)) => &self.indices[start..end],
            None => &[],
        }
    }

    #[inline]
    fn is_directed(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_and_has_consistent_invariants() {
        let csr = CSR::default();

        // basic counts
        assert_eq!(csr.vertex_count(), 0, "default has no vertices");
        assert_eq!(csr.edge_count(), 0, "default has no edges");
        assert!(csr.forward_adjacency(0).is_empty());

        // internal layout
        assert_eq!(csr.offsets.as_ref(), &[0], "offsets for empty graph");
        assert!(csr.indices.is_empty(), "indices must be empty");
    }

    #[test]
    fn from_empty_vec_matches_default() {
        let from_empty = CSR::from(Vec::<Edge>::new());

        assert_eq!(from_empty, CSR::default());
    }

    #[test]
    fn single_loop_at_zero_layout_and_queries() {
        let csr = CSR::from(vec![(0, 0)]);

        // layout
        assert_eq!(csr.vertex_count(), 1, "only vertex 0 exists");
        assert_eq!(csr.edge_count(), 1, "exactly one edge");
        assert_eq!(csr.offsets.as_ref(), &[0, 1], "CSR offsets for one vertex");
        assert_eq!(csr.indices.as_ref(), &[0], "single edge 0 -> 0");

        // neighbor range
        assert_eq!(csr.neighbor_range(0), Some((0, 1)));
        assert_eq!(csr.neighbor_range(1), None, "vertex 1 is out of range");

        assert!(csr.has_edge(0, 0));
        assert!(!csr.has_edge(0, 1));
    }

    #[test]
    fn single_loop_at_one_with_gap_at_zero() {
        let csr = CSR::from(vec![(1, 1)]);

        // layout
        assert_eq!(csr.vertex_count(), 2, "vertices 0 and 1 exist");
        assert_eq!(csr.edge_count(), 1, "exactly one edge");

        // vertex 0 has no outgoing edges
        assert_eq!(csr.neighbor_range(0), Some((0, 0)));
        // vertex 1 has the single edge
        assert_eq!(csr.neighbor_range(1), Some((0, 1)));

        assert!(csr.forward_adjacency(0).is_empty());
        assert_eq!(csr.forward_adjacency(1), &[1]);
    }

    #[test]
    fn destination_only_vertices_are_in_range() {
        // vertex 3 only ever appears as a destination.
        let csr = CSR::from(vec![(0, 3)]);

        assert_eq!(csr.vertex_count(), 4);
        assert_eq!(csr.offsets.as_ref(), &[0, 1, 1, 1, 1]);
        assert!(csr.forward_adjacency(3).is_empty());
    }

    #[test]
    fn rows_are_sorted_and_deduplicated() {
        let csr = CSR::from(vec![(2, 1), (0, 2), (0, 1), (0, 2), (2, 0)]);

        assert_eq!(csr.vertex_count(), 3);
        assert_eq!(csr.edge_count(), 4, "parallel 0 -> 2 collapses");
        assert_eq!(csr.offsets.as_ref(), &[0, 2, 2, 4]);
        assert_eq!(csr.indices.as_ref(), &[1, 2, 0, 1]);

        assert_eq!(csr.forward_adjacency(0), &[1, 2]);
        assert!(csr.forward_adjacency(1).is_empty());
        assert_eq!(csr.forward_adjacency(2), &[0, 1]);
        assert_eq!(csr.neighbor_range(3), None);
    }

    #[test]
    fn row_lengths_sum_to_edge_count() {
        let csr = CSR::from(vec![(0, 0), (1, 0), (1, 1), (2, 1)]);

        let total: usize = (0..csr.vertex_count())
            .map(|v| csr.forward_adjacency(v).len())
            .sum();

        assert_eq!(total, csr.edge_count());
        assert!(csr.is_directed());
    }
}
