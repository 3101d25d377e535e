mod outputs;
pub(crate) mod solver;

pub mod results {
    //! Contains the outputs of solving using the [`ColouringSolver`].
    //!
    //! We differentiate between 2 different types of results:
    //! - For an attempt with a **fixed** number of colours ([`SatisfactionResult`]), which is
    //!   either a [`Colouring`] or an [`UnsatisfiableCause`]
    //! - For the search for the **smallest** number of colours ([`SweepResult`])
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::api::outputs::SweepResult;
    pub use crate::api::outputs::UnsatisfiableCause;
    pub use crate::basic_types::Colouring;
    #[cfg(doc)]
    use crate::ColouringSolver;
}

pub mod options {
    //! Contains the options which can be passed to the [`ColouringSolver`].
    //!
    //! These influence the following aspects:
    //! - Whether arc-consistency preprocessing is run before search
    //! - Whether the stages of every attempt are reported
    pub use crate::engine::SolverOptions;
    #[cfg(doc)]
    use crate::ColouringSolver;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::colouring_asserts::*;
    pub use crate::colouring_assert_advanced;
    pub use crate::colouring_assert_eq_simple;
    pub use crate::colouring_assert_moderate;
    pub use crate::colouring_assert_simple;
}
