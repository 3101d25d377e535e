use itertools::Itertools;

use super::Colour;
use super::VertexId;
use crate::containers::KeyedVec;
use crate::graph::Graph;

/// A complete colouring of a graph, i.e. every vertex has received a colour.
///
/// It is produced by the solver when an attempt succeeds; it takes ownership of the colours so it
/// outlives the session which found it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Colouring {
    colours: KeyedVec<VertexId, Colour>,
}

impl Colouring {
    pub(crate) fn new(colours: KeyedVec<VertexId, Colour>) -> Self {
        Self { colours }
    }

    pub fn num_vertices(&self) -> usize {
        self.colours.len()
    }

    /// Returns the colour of `vertex`.
    ///
    /// Panics if `vertex` is not a vertex of the coloured graph.
    pub fn colour_of(&self, vertex: VertexId) -> Colour {
        self.colours[vertex]
    }

    /// Iterates over the vertices and their colours in index order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId, Colour)> + '_ {
        self.colours
            .enumerate()
            .map(|(vertex, &colour)| (vertex, colour))
    }

    /// The number of distinct colours which are used; this can be lower than the number of
    /// colours which were available.
    pub fn num_colours_used(&self) -> usize {
        self.colours.iter().unique().count()
    }

    /// Returns true iff `graph` has the same vertices and no edge connects two vertices with the
    /// same colour.
    pub fn is_proper(&self, graph: &Graph) -> bool {
        self.colours.len() == graph.num_vertices()
            && graph
                .edges()
                .all(|(u, v)| self.colour_of(u) != self.colour_of(v))
    }
}

impl std::fmt::Display for Colouring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vertex, colour) in self.iter() {
            writeln!(f, "Region {} -> Colour {colour}", vertex.id)?;
        }
        Ok(())
    }
}
