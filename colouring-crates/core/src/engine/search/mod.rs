//! Chronological backtracking search over the colours of the vertices.
//!
//! The search only reads the domains; it never filters the domains of the neighbours of an
//! assigned vertex. Consistency of a colour is checked against the colours of the already
//! assigned neighbours, which is sufficient for the result to be a proper colouring.
use log::trace;

use super::solver_statistics::SearchStatistics;
use super::Assignment;
use super::DomainStore;
use crate::basic_types::Colour;
use crate::basic_types::VertexId;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::colouring_assert_moderate;
use crate::colouring_assert_simple;
use crate::graph::Graph;

/// Depth-first search which assigns one vertex per level, selected by a [`VariableSelector`].
///
/// The recursion depth is bounded by the number of vertices.
#[derive(Debug)]
pub struct BacktrackingSearch<Selector> {
    variable_selector: Selector,
    statistics: SearchStatistics,
}

impl<Selector: VariableSelector> BacktrackingSearch<Selector> {
    pub fn new(variable_selector: Selector) -> Self {
        BacktrackingSearch {
            variable_selector,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the next vertex to colour, or [`None`] if every vertex has a colour.
    pub fn select_unassigned_variable(
        &mut self,
        domains: &DomainStore,
        assignment: &Assignment,
    ) -> Option<VertexId> {
        let context = SelectionContext::new(domains, assignment);
        self.variable_selector.select_variable(&context)
    }

    /// Returns true iff no neighbour of `vertex` currently has `colour`; unassigned neighbours
    /// never block a colour.
    pub fn is_consistent(
        &mut self,
        graph: &Graph,
        assignment: &Assignment,
        vertex: VertexId,
        colour: Colour,
    ) -> bool {
        self.statistics.num_consistency_checks += 1;
        graph
            .neighbours(vertex)
            .iter()
            .all(|&neighbour| assignment.colour_of(neighbour) != Some(colour))
    }

    /// Extends `assignment` to a complete and consistent assignment using the colours in
    /// `domains`.
    ///
    /// Returns false if the search space below the current assignment is exhausted; in that case
    /// `assignment` is restored to the state it had when this method was called.
    pub fn search(
        &mut self,
        graph: &Graph,
        domains: &DomainStore,
        assignment: &mut Assignment,
    ) -> bool {
        colouring_assert_simple!(domains.num_domains() == graph.num_vertices());
        colouring_assert_simple!(assignment.num_vertices() == graph.num_vertices());

        if assignment.is_complete() {
            return true;
        }

        let Some(vertex) = self.select_unassigned_variable(domains, assignment) else {
            return false;
        };

        for &colour in domains.domain(vertex) {
            if !self.is_consistent(graph, assignment, vertex, colour) {
                continue;
            }

            colouring_assert_moderate!(!assignment.is_assigned(vertex));
            assignment.assign(vertex, colour);
            self.statistics.num_decisions += 1;
            trace!("Assigned {vertex} := {colour} at depth {}", assignment.num_assigned());

            if self.search(graph, domains, assignment) {
                return true;
            }

            assignment.unassign(vertex);
            self.statistics.num_backtracks += 1;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::variable_selection::MinimumRemainingValues;

    fn x(id: u32) -> VertexId {
        VertexId::new(id)
    }

    fn search_for(graph: &Graph, num_colours: u32) -> (bool, Assignment, SearchStatistics) {
        let domains = DomainStore::new(graph.num_vertices(), num_colours);
        let mut assignment = Assignment::new(graph.num_vertices());
        let mut search = BacktrackingSearch::new(MinimumRemainingValues::new());

        let found = search.search(graph, &domains, &mut assignment);
        (found, assignment, *search.statistics())
    }

    #[test]
    fn unassigned_neighbours_do_not_block() {
        let graph = Graph::from_edges(2, [(0, 1)]).unwrap();
        let assignment = Assignment::new(2);
        let mut search = BacktrackingSearch::new(MinimumRemainingValues::new());

        assert!(search.is_consistent(&graph, &assignment, x(0), 0));
    }

    #[test]
    fn an_assigned_neighbour_blocks_its_colour() {
        let graph = Graph::from_edges(3, [(0, 1)]).unwrap();
        let mut assignment = Assignment::new(3);
        assignment.assign(x(1), 2);
        assignment.assign(x(2), 0);
        let mut search = BacktrackingSearch::new(MinimumRemainingValues::new());

        assert!(!search.is_consistent(&graph, &assignment, x(0), 2));
        // v2 is not a neighbour of v0
        assert!(search.is_consistent(&graph, &assignment, x(0), 0));
    }

    #[test]
    fn an_even_cycle_is_coloured_with_two_colours() {
        let graph = Graph::cycle(6);
        let (found, assignment, _) = search_for(&graph, 2);

        assert!(found);
        let colouring = assignment.to_colouring().unwrap();
        assert!(colouring.is_proper(&graph));
    }

    #[test]
    fn an_odd_cycle_is_not_two_colourable() {
        let graph = Graph::cycle(5);
        let (found, assignment, statistics) = search_for(&graph, 2);

        assert!(!found);
        assert_eq!(assignment.num_assigned(), 0);
        assert_eq!(statistics.num_decisions, statistics.num_backtracks);
    }

    #[test]
    fn the_first_colour_in_domain_order_is_tried_first() {
        let graph = Graph::new(1);
        let (found, assignment, statistics) = search_for(&graph, 3);

        assert!(found);
        assert_eq!(assignment.colour_of(x(0)), Some(0));
        assert_eq!(statistics.num_decisions, 1);
    }

    #[test]
    fn an_empty_domain_makes_search_fail_without_decisions() {
        let graph = Graph::new(2);
        let (found, _, statistics) = search_for(&graph, 0);

        assert!(!found);
        assert_eq!(statistics.num_decisions, 0);
        assert_eq!(statistics.num_consistency_checks, 0);
    }

    #[test]
    fn a_single_empty_domain_is_selected_first_and_fails() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let mut domains = DomainStore::new(4, 2);
        domains.replace(x(2), vec![]);
        let mut assignment = Assignment::new(4);
        let mut search = BacktrackingSearch::new(MinimumRemainingValues::new());

        assert_eq!(
            search.select_unassigned_variable(&domains, &assignment),
            Some(x(2))
        );

        let found = search.search(&graph, &domains, &mut assignment);

        assert!(!found);
        assert_eq!(assignment.num_assigned(), 0);
        assert_eq!(search.statistics().num_decisions, 0);
        assert_eq!(search.statistics().num_consistency_checks, 0);
    }

    #[test]
    fn a_graph_without_vertices_is_vacuously_coloured() {
        let graph = Graph::new(0);
        let (found, assignment, statistics) = search_for(&graph, 0);

        assert!(found);
        assert!(assignment.is_complete());
        assert_eq!(statistics.num_decisions, 0);
    }

    #[test]
    fn search_skips_colours_of_assigned_neighbours() {
        // Star with centre 0: after colouring the centre with 0, all leaves must take 1
        let graph = Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        let (found, assignment, statistics) = search_for(&graph, 2);

        assert!(found);
        assert_eq!(assignment.colour_of(x(0)), Some(0));
        assert!((1..4).all(|id| assignment.colour_of(x(id)) == Some(1)));
        assert_eq!(statistics.num_backtracks, 0);
    }
}
