use log::debug;
use log::info;

use crate::engine::ColouringSession;
use crate::engine::SolverStatistics;
use crate::graph::Graph;
use crate::options::SolverOptions;
use crate::results::SatisfactionResult;
use crate::results::SweepResult;
use crate::results::UnsatisfiableCause;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// The main interaction point of the solver: it decides whether a [`Graph`] can be coloured with a
/// given number of colours, and finds the smallest such number.
///
/// Every attempt runs in its own [`ColouringSession`], so attempts do not influence each other;
/// only the statistics are accumulated across attempts.
///
/// # Example
/// ```rust
/// # use colouring_core::ColouringSolver;
/// # use colouring_core::Graph;
/// # use colouring_core::results::SweepResult;
/// // A cycle of odd length needs three colours
/// let graph = Graph::cycle(5);
/// let mut solver = ColouringSolver::default();
///
/// assert!(!solver.solve_with_k_colours(&graph, 2).is_satisfiable());
///
/// match solver.find_minimum_colouring(&graph, None) {
///     SweepResult::Coloured { num_colours, colouring } => {
///         assert_eq!(num_colours, 3);
///         assert!(colouring.is_proper(&graph));
///     }
///     SweepResult::NoColouringFound { .. } => panic!("every graph can be coloured"),
/// }
/// ```
#[allow(
    missing_copy_implementations,
    reason = "a solver accumulates statistics and should not be copied implicitly"
)]
#[derive(Debug, Default)]
pub struct ColouringSolver {
    options: SolverOptions,
    statistics: SolverStatistics,
}

impl ColouringSolver {
    /// Creates a solver with the provided [`SolverOptions`].
    pub fn with_options(options: SolverOptions) -> Self {
        ColouringSolver {
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// The statistics accumulated over all attempts of this solver.
    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Decides whether `graph` can be coloured with `num_colours` colours.
    pub fn solve_with_k_colours(&mut self, graph: &Graph, num_colours: u32) -> SatisfactionResult {
        let mut session = ColouringSession::new(graph, num_colours);
        let result = session.solve(&self.options);

        let session_statistics = session.statistics();
        self.statistics.num_attempts += 1;
        self.statistics
            .arc_consistency
            .accumulate(&session_statistics.arc_consistency);
        self.statistics
            .search
            .accumulate(&session_statistics.search);

        match &result {
            SatisfactionResult::Satisfiable(_) => self.statistics.num_satisfiable += 1,
            SatisfactionResult::Unsatisfiable(UnsatisfiableCause::ArcConsistencyWipeout {
                ..
            }) => self.statistics.num_refuted_by_propagation += 1,
            SatisfactionResult::Unsatisfiable(UnsatisfiableCause::SearchExhausted) => {
                self.statistics.num_refuted_by_search += 1
            }
        }

        result
    }

    /// Tries increasing numbers of colours until `graph` can be coloured.
    ///
    /// The first attempt uses a single colour, or none if the graph has no vertices. The last
    /// attempt uses `max_colours` colours, which defaults to the number of vertices; with that many
    /// colours every graph can be coloured.
    pub fn find_minimum_colouring(
        &mut self,
        graph: &Graph,
        max_colours: Option<u32>,
    ) -> SweepResult {
        let max_colours =
            max_colours.unwrap_or_else(|| u32::try_from(graph.num_vertices()).unwrap_or(u32::MAX));
        let lower_bound = if graph.is_empty() { 0 } else { 1 };

        for num_colours in lower_bound..=max_colours {
            if self.options.verbose {
                info!("Trying k = {num_colours}");
            } else {
                debug!("Trying k = {num_colours}");
            }

            match self.solve_with_k_colours(graph, num_colours) {
                SatisfactionResult::Satisfiable(colouring) => {
                    return SweepResult::Coloured {
                        num_colours,
                        colouring,
                    };
                }
                SatisfactionResult::Unsatisfiable(cause) => {
                    debug!("No colouring with {num_colours} colours: {cause}");
                }
            }
        }

        SweepResult::NoColouringFound { max_colours }
    }

    /// Logs the statistics currently present in the solver; does nothing if statistic logging has
    /// not been configured.
    pub fn log_statistics(&self) {
        if !should_log_statistics() {
            return;
        }
        self.statistics.log(StatisticLogger::new(["colouring"]));
        log_statistic_postfix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_are_counted_by_outcome() {
        let graph = Graph::cycle(5);
        let mut solver = ColouringSolver::default();

        let _ = solver.solve_with_k_colours(&graph, 1);
        let _ = solver.solve_with_k_colours(&graph, 2);
        let _ = solver.solve_with_k_colours(&graph, 3);

        let statistics = solver.statistics();
        assert_eq!(statistics.num_attempts, 3);
        assert_eq!(statistics.num_refuted_by_propagation, 1);
        assert_eq!(statistics.num_refuted_by_search, 1);
        assert_eq!(statistics.num_satisfiable, 1);
    }

    #[test]
    fn attempts_do_not_share_state() {
        let graph = Graph::complete(3);
        let mut solver = ColouringSolver::default();

        let _ = solver.solve_with_k_colours(&graph, 2);
        let result = solver.solve_with_k_colours(&graph, 3);

        assert!(result.is_satisfiable());
    }

    #[test]
    fn the_minimum_for_a_complete_graph_is_its_size() {
        let graph = Graph::complete(4);
        let mut solver = ColouringSolver::default();

        let result = solver.find_minimum_colouring(&graph, None);

        assert_eq!(result.num_colours(), Some(4));
        assert_eq!(solver.statistics().num_attempts, 4);
    }

    #[test]
    fn a_graph_without_edges_is_coloured_with_one_colour() {
        let graph = Graph::new(4);
        let mut solver = ColouringSolver::default();

        let result = solver.find_minimum_colouring(&graph, None);

        assert_eq!(result.num_colours(), Some(1));
        assert_eq!(result.colouring().map(|c| c.num_colours_used()), Some(1));
    }

    #[test]
    fn a_graph_without_vertices_needs_no_colours() {
        let graph = Graph::new(0);
        let mut solver = ColouringSolver::default();

        let result = solver.find_minimum_colouring(&graph, None);

        assert_eq!(result.num_colours(), Some(0));
    }

    #[test]
    fn the_sweep_stops_at_the_maximum() {
        let graph = Graph::complete(4);
        let mut solver = ColouringSolver::default();

        let result = solver.find_minimum_colouring(&graph, Some(2));

        assert_eq!(result, SweepResult::NoColouringFound { max_colours: 2 });
        assert_eq!(solver.statistics().num_attempts, 2);
    }

    #[test]
    fn disabling_arc_consistency_gives_the_same_minimum() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5)]).unwrap();
        let mut with_propagation = ColouringSolver::default();
        let mut without_propagation = ColouringSolver::with_options(SolverOptions {
            use_arc_consistency: false,
            ..Default::default()
        });

        let expected = with_propagation.find_minimum_colouring(&graph, None);
        let actual = without_propagation.find_minimum_colouring(&graph, None);

        assert_eq!(expected.num_colours(), Some(3));
        assert_eq!(actual.num_colours(), expected.num_colours());
        assert_eq!(
            without_propagation.statistics().num_refuted_by_propagation,
            0
        );
    }
}
