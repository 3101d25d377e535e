use crate::basic_types::VertexId;
use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::colouring_assert_eq_simple;

/// A [`VariableSelector`] which selects the unassigned vertex with the fewest colours left in its
/// domain (the "minimum remaining values" heuristic).
///
/// Vertices are offered to the [`TieBreaker`] in index order; the default [`InOrderTieBreaker`]
/// therefore selects the lowest index among the vertices with the smallest domain. A custom
/// tie-breaker can be provided through [`MinimumRemainingValues::with_tie_breaker`].
pub struct MinimumRemainingValues<TieBreaking> {
    tie_breaker: TieBreaking,
}

impl<TieBreaking> std::fmt::Debug for MinimumRemainingValues<TieBreaking> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MinimumRemainingValues").finish()
    }
}

impl MinimumRemainingValues<InOrderTieBreaker<VertexId, usize>> {
    pub fn new() -> Self {
        Self {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MinimumRemainingValues<InOrderTieBreaker<VertexId, usize>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<TieBreaking: TieBreaker<VertexId, usize>> MinimumRemainingValues<TieBreaking> {
    pub fn with_tie_breaker(tie_breaker: TieBreaking) -> Self {
        colouring_assert_eq_simple!(
            tie_breaker.get_direction(),
            Direction::Minimum,
            "The provided tie-breaker to MinimumRemainingValues attempts to find the Maximum value
             instead of the Minimum value, please ensure that you have passed the correct tie-breaker");
        Self { tie_breaker }
    }
}

impl<TieBreaking> VariableSelector for MinimumRemainingValues<TieBreaking>
where
    TieBreaking: TieBreaker<VertexId, usize>,
{
    fn select_variable(&mut self, context: &SelectionContext) -> Option<VertexId> {
        context.unassigned_vertices().for_each(|vertex| {
            self.tie_breaker
                .consider(vertex, context.get_size_of_domain(vertex));
        });
        self.tie_breaker.select()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Assignment;
    use crate::engine::DomainStore;

    fn x(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn the_smallest_domain_is_selected() {
        let mut domains = DomainStore::new(3, 3);
        domains.replace(x(2), vec![0, 1]);
        let assignment = Assignment::new(3);
        let mut strategy = MinimumRemainingValues::new();

        let context = SelectionContext::new(&domains, &assignment);

        assert_eq!(strategy.select_variable(&context), Some(x(2)));
    }

    #[test]
    fn ties_are_broken_by_the_lowest_index() {
        let mut domains = DomainStore::new(4, 3);
        domains.replace(x(3), vec![1]);
        domains.replace(x(1), vec![2]);
        let assignment = Assignment::new(4);
        let mut strategy = MinimumRemainingValues::new();

        let context = SelectionContext::new(&domains, &assignment);

        assert_eq!(strategy.select_variable(&context), Some(x(1)));
    }

    #[test]
    fn assigned_vertices_are_not_selected() {
        let mut domains = DomainStore::new(3, 3);
        domains.replace(x(0), vec![0]);
        let mut assignment = Assignment::new(3);
        assignment.assign(x(0), 0);
        let mut strategy = MinimumRemainingValues::new();

        let context = SelectionContext::new(&domains, &assignment);

        assert_eq!(strategy.select_variable(&context), Some(x(1)));
    }

    #[test]
    fn nothing_is_selected_when_everything_is_assigned() {
        let domains = DomainStore::new(2, 2);
        let mut assignment = Assignment::new(2);
        assignment.assign(x(0), 0);
        assignment.assign(x(1), 1);
        let mut strategy = MinimumRemainingValues::new();

        let context = SelectionContext::new(&domains, &assignment);

        assert_eq!(strategy.select_variable(&context), None);
    }

    #[test]
    fn a_provided_tie_breaker_is_used() {
        let mut domains = DomainStore::new(4, 3);
        domains.replace(x(3), vec![0]);
        domains.replace(x(2), vec![1]);
        let assignment = Assignment::new(4);
        let mut strategy =
            MinimumRemainingValues::with_tie_breaker(InOrderTieBreaker::new(Direction::Minimum));

        let context = SelectionContext::new(&domains, &assignment);

        assert_eq!(strategy.select_variable(&context), Some(x(2)));
        assert_eq!(strategy.select_variable(&context), Some(x(2)));
    }

    #[test]
    fn selection_is_deterministic() {
        let mut domains = DomainStore::new(5, 4);
        domains.replace(x(4), vec![0, 3]);
        domains.replace(x(2), vec![1, 2]);
        let assignment = Assignment::new(5);
        let mut strategy = MinimumRemainingValues::new();

        let context = SelectionContext::new(&domains, &assignment);
        let selections = (0..10)
            .map(|_| strategy.select_variable(&context))
            .collect::<Vec<_>>();

        assert!(selections.iter().all(|&selected| selected == Some(x(2))));
    }
}
