use crate::basic_types::VertexId;
use crate::engine::Assignment;
use crate::engine::DomainStore;

/// The context provided to a [`VariableSelector`](super::variable_selection::VariableSelector);
/// it gives read-only access to the domains and the current (partial) assignment.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    domains: &'a DomainStore,
    assignment: &'a Assignment,
}

impl<'a> SelectionContext<'a> {
    pub fn new(domains: &'a DomainStore, assignment: &'a Assignment) -> Self {
        SelectionContext {
            domains,
            assignment,
        }
    }

    /// Returns the number of colours in the domain of `vertex`.
    pub fn get_size_of_domain(&self, vertex: VertexId) -> usize {
        self.domains.size_of_domain(vertex)
    }

    /// Iterates over the unassigned vertices in index order.
    pub fn unassigned_vertices(&self) -> impl Iterator<Item = VertexId> + 'a {
        self.assignment.unassigned_vertices()
    }
}
