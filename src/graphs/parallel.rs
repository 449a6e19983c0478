use rayon::iter::{IntoParallelIterator, ParallelIterator};

use crate::graphs::{
    adjacency::{Adjacency, Edge},
    edge_iter::EdgeIterator,
};

/// Below this many vertices a sequential pass is cheaper than splitting rows
/// across threads.
pub const PARALLEL_THRESHOLD: usize = 1024;

impl<'g, G> EdgeIterator<'g, G>
where
    G: Adjacency + Sync + ?Sized,
{
    /// Collects every edge in the same canonical order as a pass.
    ///
    /// Large graphs are split by source vertex across the rayon pool,
    /// small ones fall back to [`EdgeIterator::pass`].
    pub fn collect_parallel(&self) -> Vec<Edge> {
        let graph = self.graph();
        let vertex_count = graph.vertex_count();

        if vertex_count < PARALLEL_THRESHOLD {
            return self.pass().collect();
        }

        (0..vertex_count)
            .into_par_iter()
            .flat_map_iter(|source| self.row(source))
            .collect()
    }

    /// Acceptable edges of one source vertex, in adjacency order.
    fn row(&self, source: usize) -> impl Iterator<Item = Edge> + 'g {
        let edges = *self;
        self.graph()
            .forward_adjacency(source)
            .iter()
            .filter(move |&&destination| edges.accepts(source, destination))
            .map(move |&destination| (source, destination))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::{adjacency_lists::AdjacencyLists, csr::CSR};

    #[test]
    fn small_graphs_match_a_pass() {
        let g = AdjacencyLists::undirected(4, [(0, 1), (1, 2), (3, 3)]).unwrap();

        assert_eq!(g.edges().collect_parallel(), vec![(0, 1), (1, 2), (3, 3)]);
    }

    #[test]
    fn row_filters_smaller_neighbors_of_undirected_graphs() {
        let g = AdjacencyLists::undirected(4, [(0, 2), (1, 2), (2, 3), (2, 2)]).unwrap();

        let row: Vec<_> = g.edges().row(2).collect();
        assert_eq!(row, vec![(2, 2), (2, 3)]);
    }

    #[test]
    fn large_graphs_match_a_pass() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5041_5241_4C4C_454C);
        let vertex_count = PARALLEL_THRESHOLD * 3;

        let edges: Vec<Edge> = (0..vertex_count * 4)
            .map(|_| {
                (
                    rng.random_range(0..vertex_count),
                    rng.random_range(0..vertex_count),
                )
            })
            .collect();

        let undirected = AdjacencyLists::undirected(vertex_count, edges.iter().copied()).unwrap();
        let parallel = undirected.edges().collect_parallel();
        assert_eq!(parallel, undirected.edges().pass().collect::<Vec<_>>());
        assert_eq!(parallel.len(), undirected.edge_count());

        let csr = CSR::from(edges);
        let parallel = csr.edges().collect_parallel();
        assert_eq!(parallel, csr.edges().pass().collect::<Vec<_>>());
        assert_eq!(parallel.len(), csr.edge_count());
    }
}
