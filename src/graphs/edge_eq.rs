//! Equality and membership between an [`EdgeIterator`] and other edge
//! collections.
//!
//! Two kinds of comparison exist:
//!
//! - Against a foreign collection of edges (a slice, `Vec`, `HashSet` or
//!   `BTreeSet`): the collection is equal when it has exactly
//!   `edge_count` entries and every entry is an edge of the graph. The
//!   collection must not hold duplicates, otherwise a collection that
//!   repeats one edge and misses another can compare equal.
//! - Against another `EdgeIterator`: the graphs must declare the same edge
//!   count and have identical adjacency up to the smaller vertex count.
//!   Vertices past that bound must be isolated, so trailing isolated
//!   vertices do not affect equality.
//!
//! None of these traverse the graph.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use tracing::debug;

use crate::graphs::{
    adjacency::{Adjacency, Edge},
    edge_iter::EdgeIterator,
};

impl<'g, G: Adjacency + ?Sized> EdgeIterator<'g, G> {
    /// Returns true when `edge` is an edge of the graph.
    ///
    /// Delegates to [`Adjacency::has_edge`].
    #[inline]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.graph().has_edge(edge.0, edge.1)
    }

    /// Compares against a duplicate-free collection of edges.
    ///
    /// Equal when the collection has `edge_count` entries, all of which
    /// are edges of the graph.
    pub fn eq_edges<'a, I>(&self, edges: I) -> bool
    where
        I: IntoIterator<Item = &'a Edge>,
        I::IntoIter: ExactSizeIterator,
    {
        let mut edges = edges.into_iter();

        if edges.len() != self.len() {
            debug!(
                expected = self.len(),
                found = edges.len(),
                "edge collection size differs from edge count"
            );
            return false;
        }

        match edges.find(|edge| !self.contains(edge)) {
            Some(missing) => {
                debug!(?missing, "edge collection holds an edge the graph lacks");
                false
            }
            None => true,
        }
    }

    /// Compares the adjacency of two graphs.
    ///
    /// Equal when the declared edge counts match, the adjacency of every
    /// vertex below the smaller vertex count is identical, and every vertex
    /// past it is isolated.
    pub fn eq_graph<H: Adjacency + ?Sized>(&self, other: &EdgeIterator<'_, H>) -> bool {
        let (left, right) = (self.graph(), other.graph());

        if left.edge_count() != right.edge_count() {
            debug!(
                left = left.edge_count(),
                right = right.edge_count(),
                "edge counts differ"
            );
            return false;
        }

        let shared = left.vertex_count().min(right.vertex_count());
        if let Some(vertex) =
            (0..shared).find(|&v| left.forward_adjacency(v) != right.forward_adjacency(v))
        {
            debug!(vertex, "adjacency differs");
            return false;
        }

        let tail_isolated = isolated_from(left, shared) && isolated_from(right, shared);
        if !tail_isolated {
            debug!(shared, "vertices past the shared range are not isolated");
        }

        tail_isolated
    }
}

/// Returns true when every vertex from `start` on has an empty adjacency.
fn isolated_from<A: Adjacency + ?Sized>(graph: &A, start: usize) -> bool {
    (start..graph.vertex_count()).all(|vertex| graph.forward_adjacency(vertex).is_empty())
}

impl<'g, 'h, G, H> PartialEq<EdgeIterator<'h, H>> for EdgeIterator<'g, G>
where
    G: Adjacency + ?Sized,
    H: Adjacency + ?Sized,
{
    fn eq(&self, other: &EdgeIterator<'h, H>) -> bool {
        self.eq_graph(other)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<[Edge]> for EdgeIterator<'g, G> {
    fn eq(&self, other: &[Edge]) -> bool {
        self.eq_edges(other)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<Vec<Edge>> for EdgeIterator<'g, G> {
    fn eq(&self, other: &Vec<Edge>) -> bool {
        self.eq_edges(other)
    }
}

impl<'g, G: Adjacency + ?Sized, S: BuildHasher> PartialEq<HashSet<Edge, S>> for EdgeIterator<'g, G> {
    fn eq(&self, other: &HashSet<Edge, S>) -> bool {
        self.eq_edges(other)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<BTreeSet<Edge>> for EdgeIterator<'g, G> {
    fn eq(&self, other: &BTreeSet<Edge>) -> bool {
        self.eq_edges(other)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<EdgeIterator<'g, G>> for [Edge] {
    fn eq(&self, other: &EdgeIterator<'g, G>) -> bool {
        other.eq_edges(self)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<EdgeIterator<'g, G>> for Vec<Edge> {
    fn eq(&self, other: &EdgeIterator<'g, G>) -> bool {
        other.eq_edges(self)
    }
}

impl<'g, G: Adjacency + ?Sized, S: BuildHasher> PartialEq<EdgeIterator<'g, G>> for HashSet<Edge, S> {
    fn eq(&self, other: &EdgeIterator<'g, G>) -> bool {
        other.eq_edges(self)
    }
}

impl<'g, G: Adjacency + ?Sized> PartialEq<EdgeIterator<'g, G>> for BTreeSet<Edge> {
    fn eq(&self, other: &EdgeIterator<'g, G>) -> bool {
        other.eq_edges(self)
    }
}
