//! Contains structures which determine the order in which search visits the vertices.
//!
//! A [`VariableSelector`] picks the next unassigned vertex based on the information in a
//! [`SelectionContext`]; the colours of the selected vertex are then tried in domain order. The
//! default selector is [`MinimumRemainingValues`], which uses a [`TieBreaker`] to choose between
//! vertices with equally small domains.
mod selection_context;
pub mod tie_breaking;
pub mod variable_selection;

pub use selection_context::SelectionContext;
#[cfg(doc)]
use tie_breaking::TieBreaker;
#[cfg(doc)]
use variable_selection::MinimumRemainingValues;
#[cfg(doc)]
use variable_selection::VariableSelector;
