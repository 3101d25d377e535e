use crate::basic_types::Colour;
use crate::basic_types::VertexId;
use crate::engine::DomainStore;

/// The outcome of revising the arc `(xi, xj)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionOutcome {
    /// No value of `xi` is supported; the domain of `xi` is left as it was.
    Wiped,
    /// Every value of `xi` is supported.
    Unchanged,
    /// Some, but not all, values of `xi` were removed.
    Reduced,
}

/// Removes the colours of `xi` which are not supported by `xj`.
///
/// A colour `a` is supported if the domain of `xj` contains some colour `b != a`, so `a` is only
/// removed when the domain of `xj` is empty or is exactly `{a}`. With two or more colours in the
/// domain of `xj` nothing is ever removed.
pub fn revise(domains: &mut DomainStore, xi: VertexId, xj: VertexId) -> RevisionOutcome {
    let supporting = domains.domain(xj);
    let retained = domains
        .domain(xi)
        .iter()
        .copied()
        .filter(|&a| supporting.iter().any(|&b| b != a))
        .collect::<Vec<Colour>>();

    if retained.is_empty() {
        RevisionOutcome::Wiped
    } else if retained.len() == domains.size_of_domain(xi) {
        RevisionOutcome::Unchanged
    } else {
        domains.replace(xi, retained);
        RevisionOutcome::Reduced
    }
}
