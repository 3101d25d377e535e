use crate::basic_types::Colouring;
use crate::basic_types::VertexId;
#[cfg(doc)]
use crate::ColouringSolver;

/// The result of a call to [`ColouringSolver::solve_with_k_colours`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Indicates that a proper colouring was found using the available colours.
    Satisfiable(Colouring),
    /// Indicates that no proper colouring exists with the available colours; the cause states
    /// which part of the solver proved this.
    Unsatisfiable(UnsatisfiableCause),
}

/// The reason why an attempt with a fixed number of colours failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnsatisfiableCause {
    /// Arc-consistency preprocessing emptied the domain of `vertex`; search was not started.
    ArcConsistencyWipeout { vertex: VertexId },
    /// Backtracking search explored the whole search space.
    SearchExhausted,
}

impl SatisfactionResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatisfactionResult::Satisfiable(_))
    }

    /// Returns the colouring if one was found.
    pub fn colouring(&self) -> Option<&Colouring> {
        match self {
            SatisfactionResult::Satisfiable(colouring) => Some(colouring),
            SatisfactionResult::Unsatisfiable(_) => None,
        }
    }

    pub fn into_colouring(self) -> Option<Colouring> {
        match self {
            SatisfactionResult::Satisfiable(colouring) => Some(colouring),
            SatisfactionResult::Unsatisfiable(_) => None,
        }
    }
}

impl std::fmt::Display for UnsatisfiableCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsatisfiableCause::ArcConsistencyWipeout { vertex } => {
                write!(f, "arc consistency wiped out the domain of {vertex}")
            }
            UnsatisfiableCause::SearchExhausted => write!(f, "search space exhausted"),
        }
    }
}

/// The result of a call to [`ColouringSolver::find_minimum_colouring`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SweepResult {
    /// The graph was coloured with `num_colours` colours, and every smaller number of colours
    /// was refuted.
    Coloured {
        num_colours: u32,
        colouring: Colouring,
    },
    /// Every number of colours up to and including `max_colours` was refuted.
    NoColouringFound { max_colours: u32 },
}

impl SweepResult {
    pub fn colouring(&self) -> Option<&Colouring> {
        match self {
            SweepResult::Coloured { colouring, .. } => Some(colouring),
            SweepResult::NoColouringFound { .. } => None,
        }
    }

    /// The smallest number of colours with which a colouring was found.
    pub fn num_colours(&self) -> Option<u32> {
        match self {
            SweepResult::Coloured { num_colours, .. } => Some(*num_colours),
            SweepResult::NoColouringFound { .. } => None,
        }
    }
}
