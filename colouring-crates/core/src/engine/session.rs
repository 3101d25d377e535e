use log::debug;
use log::info;
use log::warn;

use super::arc_consistency::revise;
use super::arc_consistency::RevisionOutcome;
use super::solver_statistics::SessionStatistics;
use super::ArcConsistency;
use super::Assignment;
use super::BacktrackingSearch;
use super::DomainStore;
use super::SolverOptions;
use crate::basic_types::Colour;
use crate::basic_types::PropagationStatus;
use crate::basic_types::VertexId;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::variable_selection::MinimumRemainingValues;
use crate::colouring_assert_advanced;
use crate::colouring_assert_simple;
use crate::graph::Graph;
use crate::results::SatisfactionResult;
use crate::results::UnsatisfiableCause;

type DefaultSelector = MinimumRemainingValues<InOrderTieBreaker<VertexId, usize>>;

/// The state of a single attempt to colour `graph` with `num_colours` colours.
///
/// A session owns the domains and the assignment of the attempt; a new session is created for
/// every number of colours, so no state is shared between attempts. The graph is only borrowed
/// and never modified.
#[derive(Debug)]
pub struct ColouringSession<'graph> {
    graph: &'graph Graph,
    num_colours: u32,
    domains: DomainStore,
    assignment: Assignment,
    arc_consistency: ArcConsistency,
    search: BacktrackingSearch<DefaultSelector>,
}

impl<'graph> ColouringSession<'graph> {
    /// Creates a session in which every domain is `{0, ..., num_colours - 1}` and no vertex is
    /// assigned.
    pub fn new(graph: &'graph Graph, num_colours: u32) -> Self {
        ColouringSession {
            graph,
            num_colours,
            domains: DomainStore::new(graph.num_vertices(), num_colours),
            assignment: Assignment::new(graph.num_vertices()),
            arc_consistency: ArcConsistency::default(),
            search: BacktrackingSearch::new(MinimumRemainingValues::new()),
        }
    }

    pub fn graph(&self) -> &'graph Graph {
        self.graph
    }

    pub fn num_colours(&self) -> u32 {
        self.num_colours
    }

    pub fn domains(&self) -> &DomainStore {
        &self.domains
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn statistics(&self) -> SessionStatistics {
        SessionStatistics {
            arc_consistency: *self.arc_consistency.statistics(),
            search: *self.search.statistics(),
        }
    }

    /// Revises the arc `(xi, xj)`, see [`revise`].
    pub fn revise(&mut self, xi: VertexId, xj: VertexId) -> RevisionOutcome {
        revise(&mut self.domains, xi, xj)
    }

    /// Runs arc-consistency propagation on the current domains.
    pub fn propagate(&mut self) -> PropagationStatus {
        self.arc_consistency.propagate(self.graph, &mut self.domains)
    }

    /// Selects the unassigned vertex with the smallest domain, preferring the lowest index.
    pub fn select_unassigned_variable(&mut self) -> Option<VertexId> {
        self.search
            .select_unassigned_variable(&self.domains, &self.assignment)
    }

    /// Returns true iff no neighbour of `vertex` is currently coloured with `colour`.
    pub fn is_consistent(&mut self, vertex: VertexId, colour: Colour) -> bool {
        self.search
            .is_consistent(self.graph, &self.assignment, vertex, colour)
    }

    /// Runs backtracking search from the current assignment using the current domains.
    pub fn search(&mut self) -> bool {
        self.search
            .search(self.graph, &self.domains, &mut self.assignment)
    }

    /// Decides whether the graph can be coloured with the colours of this session.
    ///
    /// The domains are reset to all colours; then, if enabled, arc consistency is run and a
    /// wipe-out ends the attempt without search. Otherwise the assignment is reset and search
    /// decides the attempt.
    pub fn solve(&mut self, options: &SolverOptions) -> SatisfactionResult {
        if self.num_colours == 0 && !self.graph.is_empty() {
            warn!(
                "Attempting to colour a graph with {} vertices using 0 colours",
                self.graph.num_vertices()
            );
        }

        self.domains
            .reset(self.graph.num_vertices(), self.num_colours);

        if options.use_arc_consistency {
            if options.verbose {
                info!("AC-3 preprocessing started");
            }
            let status = self.propagate();
            if options.verbose {
                match status {
                    Ok(()) => info!("AC-3 preprocessing result: consistent"),
                    Err(empty_domain) => info!(
                        "AC-3 preprocessing result: wipe-out of {}",
                        empty_domain.vertex
                    ),
                }
            }
            if let Err(empty_domain) = status {
                debug!(
                    "Colouring with {} colours refuted by arc consistency ({empty_domain})",
                    self.num_colours
                );
                return SatisfactionResult::Unsatisfiable(
                    UnsatisfiableCause::ArcConsistencyWipeout {
                        vertex: empty_domain.vertex,
                    },
                );
            }
        } else if options.verbose {
            info!("AC-3 preprocessing skipped");
        }

        self.assignment.reset();
        if options.verbose {
            info!("Backtracking started");
        }
        let found = self.search();
        if options.verbose {
            if found {
                info!("Backtracking result: solution found");
            } else {
                info!("Backtracking result: no solution");
            }
        }
        debug!(
            "Colouring with {} colours: {} after {} decisions and {} backtracks",
            self.num_colours,
            if found { "satisfiable" } else { "unsatisfiable" },
            self.search.statistics().num_decisions,
            self.search.statistics().num_backtracks,
        );

        if !found {
            return SatisfactionResult::Unsatisfiable(UnsatisfiableCause::SearchExhausted);
        }

        colouring_assert_simple!(
            self.assignment.is_complete(),
            "search succeeded with an incomplete assignment"
        );
        match self.assignment.to_colouring() {
            Some(colouring) => {
                colouring_assert_advanced!(colouring.is_proper(self.graph));
                SatisfactionResult::Satisfiable(colouring)
            }
            None => SatisfactionResult::Unsatisfiable(UnsatisfiableCause::SearchExhausted),
        }
    }
}
