//! # Colouring
//! A solver for the graph colouring problem: every vertex (a region of a map) should receive a
//! colour such that no two adjacent vertices share a colour.
//!
//! Every vertex is a variable whose domain is the set of available colours `{0, ..., k - 1}`, and
//! every edge is a not-equal constraint. An attempt with a fixed `k` first runs arc-consistency
//! preprocessing (AC-3), which can refute the attempt without search, after which backtracking
//! search with the minimum-remaining-values heuristic decides the attempt.
//!
//! # Using the solver
//! The [`ColouringSolver`] is the main interaction point. It can decide whether a [`Graph`] can
//! be coloured with a given number of colours:
//! ```rust
//! # use colouring_core::ColouringSolver;
//! # use colouring_core::Graph;
//! # use colouring_core::results::SatisfactionResult;
//! // A triangle with a tail
//! let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
//! let mut solver = ColouringSolver::default();
//!
//! assert!(!solver.solve_with_k_colours(&graph, 2).is_satisfiable());
//!
//! let result = solver.solve_with_k_colours(&graph, 3);
//! if let SatisfactionResult::Satisfiable(colouring) = result {
//!     assert!(colouring.is_proper(&graph));
//! }
//! ```
//!
//! It can also find the smallest number of colours using
//! [`ColouringSolver::find_minimum_colouring`], which tries increasing numbers of colours until
//! an attempt succeeds.
//!
//! The behaviour of the solver is determined by the [`options::SolverOptions`]; the statistics of
//! all of its attempts can be logged using [`ColouringSolver::log_statistics`] once statistic
//! logging has been configured with [`statistics::configure_statistic_logging`].
pub(crate) mod basic_types;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod graph;
pub mod statistics;

pub(crate) mod colouring_asserts;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
//
// Example:
// `use colouring_core::ColouringSolver;`
// vs.
// `use colouring_core::api::ColouringSolver;`
mod api;

pub use api::*;

pub use crate::api::solver::ColouringSolver;
pub use crate::basic_types::Colour;
pub use crate::basic_types::Colouring;
pub use crate::basic_types::EmptyDomain;
pub use crate::basic_types::PropagationStatus;
pub use crate::basic_types::VertexId;
pub use crate::graph::AdjacencyList;
pub use crate::graph::Graph;
pub use crate::graph::GraphError;
