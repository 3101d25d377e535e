#[cfg(doc)]
use crate::ColouringSolver;

/// Options for the [`ColouringSolver`] which determine how it behaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Whether arc-consistency preprocessing is run before search. When it refutes an attempt,
    /// search is not started.
    pub use_arc_consistency: bool,
    /// Whether the start and the result of the preprocessing and search stages are reported
    /// through the `log` facade at `info` level. This has no effect on the result.
    pub verbose: bool,
}

impl Default for SolverOptions {
    fn default() -> Self {
        SolverOptions {
            use_arc_consistency: true,
            verbose: false,
        }
    }
}
