use crate::graphs::edge_iter::EdgeIterator;

/// An edge as a `(source, destination)` pair of vertex ids.
///
/// For undirected graphs the pair is presented canonically,
/// with `source <= destination`.
pub type Edge = (usize, usize);

/// Read-only adjacency access to a finite graph.
///
/// Vertices are the integers from zero up to `vertex_count - 1`.
/// Every vertex owns a forward adjacency: an ascending, duplicate-free
/// slice of neighbor ids.
///
/// For undirected graphs the relation is symmetric: `w` appears in the
/// adjacency of `v` exactly when `v` appears in the adjacency of `w`,
/// and a self-loop appears once. Directed graphs record outgoing edges only.
///
/// Implementations are trusted. Nothing in this crate checks that the
/// adjacency is sorted, duplicate-free, or symmetric.
pub trait Adjacency {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges.
    ///
    /// Must equal the number of edges produced by one full pass of
    /// [`EdgeIterator`] over this graph.
    fn edge_count(&self) -> usize;

    /// Ascending, duplicate-free neighbors of `vertex`.
    ///
    /// Returns an empty slice when `vertex` is out of range.
    fn forward_adjacency(&self, vertex: usize) -> &[usize];

    /// Returns true for directed graphs.
    fn is_directed(&self) -> bool;

    /// Returns true when the graph has an edge from `source` to `destination`.
    ///
    /// For undirected graphs the order of the endpoints does not matter,
    /// since the adjacency is symmetric.
    fn has_edge(&self, source: usize, destination: usize) -> bool {
        self.forward_adjacency(source)
            .binary_search(&destination)
            .is_ok()
    }

    /// Lazy view over every edge of the graph in canonical order.
    fn edges(&self) -> EdgeIterator<'_, Self>
    where
        Self: Sized,
    {
        EdgeIterator::new(self)
    }
}

impl<A: Adjacency + ?Sized> Adjacency for &A {
    #[inline]
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    #[inline]
    fn forward_adjacency(&self, vertex: usize) -> &[usize] {
        (**self).forward_adjacency(vertex)
    }

    #[inline]
    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    #[inline]
    fn has_edge(&self, source: usize, destination: usize) -> bool {
        (**self).has_edge(source, destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal collaborator that only provides the required methods.
    struct Rows {
        rows: Vec<Vec<usize>>,
        edges: usize,
        directed: bool,
    }

    impl Adjacency for Rows {
        fn vertex_count(&self) -> usize {
            self.rows.len()
        }

        fn edge_count(&self) -> usize {
            self.edges
        }

        fn forward_adjacency(&self, vertex: usize) -> &[usize] {
            self.rows.get(vertex).map(Vec::as_slice).unwrap_or(&[])
        }

        fn is_directed(&self) -> bool {
            self.directed
        }
    }

    #[test]
    fn default_has_edge_searches_forward_adjacency() {
        let g = Rows {
            rows: vec![vec![1, 3], vec![], vec![], vec![]],
            edges: 2,
            directed: true,
        };

        assert!(g.has_edge(0, 1));
        assert!(g.has_edge(0, 3));
        assert!(!g.has_edge(0, 2));
        assert!(!g.has_edge(1, 0), "directed edges are one way");
        assert!(!g.has_edge(9, 0), "out of range source has no edges");
    }

    fn describe<A: Adjacency>(graph: A) -> (usize, usize, bool, bool) {
        (
            graph.vertex_count(),
            graph.edge_count(),
            graph.is_directed(),
            graph.has_edge(1, 0),
        )
    }

    #[test]
    fn reference_forwards_to_the_graph() {
        let g = Rows {
            rows: vec![vec![1], vec![0]],
            edges: 1,
            directed: false,
        };

        assert_eq!(describe(&g), (2, 1, false, true));
        assert_eq!(<&Rows as Adjacency>::forward_adjacency(&&g, 1), &[0]);
    }

    #[test]
    fn trait_objects_can_be_traversed() {
        let g = Rows {
            rows: vec![vec![0, 1], vec![0]],
            edges: 2,
            directed: false,
        };
        let object: &dyn Adjacency = &g;

        let edges: Vec<Edge> = EdgeIterator::new(object).pass().collect();
        assert_eq!(edges, vec![(0, 0), (0, 1)]);
    }
}
