use crate::graphs::{
    adjacency::{Adjacency, Edge},
    error::GraphError,
};

/// Graph stored as one boxed neighbor slice per vertex.
///
/// Vertices are numbered from zero up to `vertex_count - 1`.
/// The neighbors of each vertex are kept ascending and duplicate-free.
/// For undirected graphs both endpoints of an edge list each other,
/// and a self-loop is listed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyLists {
    /// Forward adjacency of every vertex.
    lists: Box<[Box<[usize]>]>,

    /// Number of edges, counting each undirected edge once.
    edge_count: usize,

    directed: bool,
}

impl Default for AdjacencyLists {
    /// Empty undirected graph with no vertices and no edges.
    fn default() -> Self {
        Self {
            lists: Box::new([]),
            edge_count: 0,
            directed: false,
        }
    }
}

impl AdjacencyLists {
    /// Builds a directed graph on `vertex_count` vertices.
    ///
    /// Parallel edges collapse into one.
    pub fn directed(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        Self::build(vertex_count, edges, true)
    }

    /// Builds an undirected graph on `vertex_count` vertices.
    ///
    /// `(u, v)` and `(v, u)` describe the same edge, and parallel edges
    /// collapse into one.
    pub fn undirected(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        Self::build(vertex_count, edges, false)
    }

    /// Wraps per-vertex neighbor lists as they are.
    ///
    /// The lists are trusted: they must be ascending and duplicate-free,
    /// and symmetric when `directed` is false. Nothing is checked.
    pub fn from_sorted_lists(lists: Vec<Vec<usize>>, directed: bool) -> Self {
        let lists: Box<[Box<[usize]>]> = lists.into_iter().map(Vec::into_boxed_slice).collect();
        let edge_count = count_edges(&lists, directed);

        Self {
            lists,
            edge_count,
            directed,
        }
    }

    /// Appends `extra` isolated vertices after the last one.
    pub fn with_isolated(self, extra: usize) -> Self {
        let mut lists = self.lists.into_vec();
        lists.resize_with(lists.len() + extra, Default::default);

        Self {
            lists: lists.into_boxed_slice(),
            ..self
        }
    }

    /// Number of entries in the forward adjacency of `vertex`.
    pub fn degree(&self, vertex: usize) -> usize {
        self.forward_adjacency(vertex).len()
    }

    fn build(
        vertex_count: usize,
        edges: impl IntoIterator<Item = Edge>,
        directed: bool,
    ) -> Result<Self, GraphError> {
        let mut lists: Vec<Vec<usize>> = vec![Vec::new(); vertex_count];

        for (source, destination) in edges {
            for vertex in [source, destination] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex,
                        vertex_count,
                    });
                }
            }

            lists[source].push(destination);
            if !directed && source != destination {
                lists[destination].push(source);
            }
        }

        for list in &mut lists {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self::from_sorted_lists(lists, directed))
    }
}

/// Directed graphs count every entry. Undirected graphs store each
/// non-loop edge twice and each loop once.
fn count_edges(lists: &[Box<[usize]>], directed: bool) -> usize {
    let entries: usize = lists.iter().map(|list| list.len()).sum();
    if directed {
        return entries;
    }

    let loops = lists
        .iter()
        .enumerate()
        .filter(|(vertex, list)| list.binary_search(vertex).is_ok())
        .count();

    (entries + loops) / 2
}

impl Adjacency for AdjacencyLists {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    fn forward_adjacency(&self, vertex: usize) -> &[usize] {
        self.lists.get(vertex).map(|list| &list[..]).unwrap_or(&[])
    }

    #[inline]
    fn is_directed(&self) -> bool {
        self.directed
    }
}
