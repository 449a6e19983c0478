use std::fmt;
use std::iter::FusedIterator;

use tracing::trace;

use crate::graphs::adjacency::{Adjacency, Edge};

/// Resumable traversal position: a source vertex and an offset into its
/// forward adjacency.
///
/// Positions are plain values. Advancing produces a new position and leaves
/// the old one untouched, so a captured position can be inspected or resumed
/// later as long as the graph has not changed.
///
/// Exhaustion is represented by `None` in an `Option<Position>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Vertex whose adjacency is being scanned.
    pub source: usize,
    /// Offset into `forward_adjacency(source)`.
    pub index: usize,
}

impl Position {
    pub fn new(source: usize, index: usize) -> Self {
        Self { source, index }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.index)
    }
}

/// Lazy view over every edge of a graph, in canonical lexicographic order.
///
/// The iterator is a shared reference to the graph and nothing else.
/// Each call to [`EdgeIterator::start`] or [`EdgeIterator::pass`] begins a
/// fresh, independent pass.
///
/// Edges come out non-decreasing by source and, within one source,
/// non-decreasing by destination. For undirected graphs each edge `{u, v}`
/// is produced once as `(min, max)`, when the traversal reaches the smaller
/// endpoint.
pub struct EdgeIterator<'g, G: ?Sized> {
    graph: &'g G,
}

impl<'g, G: ?Sized> Clone for EdgeIterator<'g, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'g, G: ?Sized> Copy for EdgeIterator<'g, G> {}

impl<'g, G: Adjacency + ?Sized> EdgeIterator<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    /// The graph this iterator walks.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Number of edges one full pass produces, as declared by the graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first edge, or `None` when the graph has no edges.
    ///
    /// This is the first vertex with a non-empty adjacency at offset zero.
    /// For undirected graphs no neighbor of that vertex can be smaller than
    /// it: such a neighbor would itself have a non-empty adjacency by
    /// symmetry and would have been found first.
    pub fn start(&self) -> Option<Position> {
        let first = (0..self.graph.vertex_count())
            .find(|&vertex| !self.graph.forward_adjacency(vertex).is_empty())
            .map(|source| Position::new(source, 0));

        trace!(
            first = ?first,
            edge_count = self.graph.edge_count(),
            "edge pass started"
        );

        first
    }

    /// Emits the edge at `position` and finds the position of the next one.
    ///
    /// `position` must come from [`EdgeIterator::start`] or a previous call
    /// to `advance` on the same, unmodified graph. Any other position gives
    /// unspecified results and may panic.
    pub fn advance(&self, position: Position) -> (Edge, Option<Position>) {
        let Position { source, index } = position;
        let destination = self.graph.forward_adjacency(source)[index];

        debug_assert!(
            self.accepts(source, destination),
            "position {position} does not hold a canonical edge"
        );

        ((source, destination), self.seek(source, index + 1))
    }

    /// Starts a new pass as a std iterator.
    pub fn pass(&self) -> Pass<'g, G> {
        Pass::resume(*self, self.start())
    }

    /// Returns true when `(source, destination)` may be emitted.
    ///
    /// Directed graphs emit every adjacency entry. Undirected graphs only
    /// emit the entry stored at the smaller endpoint.
    #[inline]
    pub(crate) fn accepts(&self, source: usize, destination: usize) -> bool {
        self.graph.is_directed() || destination >= source
    }

    /// First acceptable position at or after `(source, index)`.
    fn seek(&self, mut source: usize, mut index: usize) -> Option<Position> {
        let vertex_count = self.graph.vertex_count();

        while source < vertex_count {
            let neighbors = self.graph.forward_adjacency(source);
            let rest = neighbors.get(index..).unwrap_or(&[]);

            if let Some(offset) = rest
                .iter()
                .position(|&destination| self.accepts(source, destination))
            {
                return Some(Position::new(source, index + offset));
            }

            source += 1;
            index = 0;
        }

        None
    }
}

impl<'g, G: Adjacency + ?Sized> fmt::Display for EdgeIterator<'g, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeIterator with {} edges", self.len())
    }
}

impl<'g, G: Adjacency + ?Sized> fmt::Debug for EdgeIterator<'g, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeIterator")
            .field("vertex_count", &self.graph.vertex_count())
            .field("edge_count", &self.graph.edge_count())
            .field("directed", &self.graph.is_directed())
            .finish()
    }
}

impl<'a, 'g, G: Adjacency + ?Sized> IntoIterator for &'a EdgeIterator<'g, G> {
    type Item = Edge;
    type IntoIter = Pass<'g, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.pass()
    }
}

impl<'g, G: Adjacency + ?Sized> IntoIterator for EdgeIterator<'g, G> {
    type Item = Edge;
    type IntoIter = Pass<'g, G>;

    fn into_iter(self) -> Self::IntoIter {
        self.pass()
    }
}

/// One pass over the edges of a graph.
///
/// Thin adapter that threads a [`Position`] through
/// [`EdgeIterator::advance`].
pub struct Pass<'g, G: ?Sized> {
    edges: EdgeIterator<'g, G>,
    position: Option<Position>,
    emitted: usize,
}

impl<'g, G: Adjacency + ?Sized> Pass<'g, G> {
    /// Continues a pass from a captured position.
    pub fn resume(edges: EdgeIterator<'g, G>, position: Option<Position>) -> Self {
        Self {
            edges,
            position,
            emitted: 0,
        }
    }

    /// Position of the next edge, or `None` once the pass is exhausted.
    #[inline]
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Number of edges this pass has produced so far.
    #[inline]
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl<'g, G: Adjacency + ?Sized> Iterator for Pass<'g, G> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let position = self.position?;
        let (edge, next) = self.edges.advance(position);

        self.position = next;
        self.emitted += 1;

        if next.is_none() {
            trace!(
                emitted = self.emitted,
                declared = self.edges.len(),
                "edge pass exhausted"
            );
        }

        Some(edge)
    }
}

impl<'g, G: Adjacency + ?Sized> FusedIterator for Pass<'g, G> {}

impl<'g, G: Adjacency + ?Sized> fmt::Debug for Pass<'g, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pass")
            .field("position", &self.position)
            .field("emitted", &self.emitted)
            .finish()
    }
}
