//! Contains the state of a single colouring attempt and the procedures which operate on it.
//!
//! A [`ColouringSession`] owns a [`DomainStore`] and an [`Assignment`]; [`ArcConsistency`]
//! filters the domains before search, after which [`BacktrackingSearch`] extends the assignment
//! to a proper colouring.
pub mod arc_consistency;
mod assignment;
mod domain_store;
pub(crate) mod search;
mod session;
mod solver_options;
pub(crate) mod solver_statistics;

pub use arc_consistency::ArcConsistency;
pub use assignment::Assignment;
pub use domain_store::DomainStore;
pub use search::BacktrackingSearch;
pub use session::ColouringSession;
pub use solver_options::SolverOptions;
pub use solver_statistics::ArcConsistencyStatistics;
pub use solver_statistics::SearchStatistics;
pub use solver_statistics::SessionStatistics;
pub use solver_statistics::SolverStatistics;
