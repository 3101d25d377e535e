use std::collections::VecDeque;

use crate::basic_types::VertexId;
use crate::graph::Graph;

/// A directed arc `(from, to)` along an edge of the graph; revising it checks the domain of
/// `from` against the domain of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arc {
    pub from: VertexId,
    pub to: VertexId,
}

impl Arc {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        Arc { from, to }
    }
}

impl std::fmt::Display for Arc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

/// The first-in first-out queue of arcs which still need to be revised.
///
/// An arc can be present several times; revising an arc which is already consistent is harmless.
#[derive(Debug, Default, Clone)]
pub(crate) struct ArcQueue {
    arcs: VecDeque<Arc>,
}

impl ArcQueue {
    /// Enqueues every arc of `graph`: for each vertex in index order, the arcs towards its
    /// neighbours in neighbour order. Returns the number of enqueued arcs.
    pub(crate) fn enqueue_all_arcs(&mut self, graph: &Graph) -> usize {
        let num_before = self.arcs.len();
        for from in graph.vertices() {
            self.arcs.extend(
                graph
                    .neighbours(from)
                    .iter()
                    .map(|&to| Arc::new(from, to)),
            );
        }
        self.arcs.len() - num_before
    }

    pub(crate) fn enqueue(&mut self, arc: Arc) {
        self.arcs.push_back(arc);
    }

    pub(crate) fn pop(&mut self) -> Option<Arc> {
        self.arcs.pop_front()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.arcs.len()
    }

    pub(crate) fn clear(&mut self) {
        self.arcs.clear();
    }
}
