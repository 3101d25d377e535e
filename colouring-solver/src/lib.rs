//! # Colouring Solver
//! A solver for map colouring: the regions of a map are the vertices of a graph, and two regions
//! which share a border are connected by an edge. The solver finds the smallest number of colours
//! with which every region can be coloured such that no two neighbouring regions have the same
//! colour.
//!
//! The solving is done by [`colouring_core`], which is re-exported by this crate; the binary
//! `colouring-solver` reads DIMACS `.col` instances or generates random maps.
//! ```rust
//! # use colouring_solver::ColouringSolver;
//! # use colouring_solver::Graph;
//! let graph = Graph::complete(3);
//! let mut solver = ColouringSolver::default();
//!
//! let result = solver.find_minimum_colouring(&graph, None);
//! assert_eq!(result.num_colours(), Some(3));
//! ```
pub use colouring_core::*;
