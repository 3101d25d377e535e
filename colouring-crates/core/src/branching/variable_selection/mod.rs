//! Provides the [`VariableSelector`] trait which is required for variable selectors to implement;
//! the main method in this trait is [`VariableSelector::select_variable`].
mod minimum_remaining_values;

pub use minimum_remaining_values::MinimumRemainingValues;

use crate::basic_types::VertexId;
use crate::branching::SelectionContext;

/// A trait containing the interface for variable selectors, specifying the appropriate hooks into
/// the search.
pub trait VariableSelector {
    /// Determines which unassigned vertex to colour next given the current state of the domains
    /// and the assignment. Returns [`None`] exactly when every vertex is assigned.
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VertexId>;
}
