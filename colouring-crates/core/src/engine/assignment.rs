use crate::basic_types::Colour;
use crate::basic_types::Colouring;
use crate::basic_types::VertexId;
use crate::containers::KeyedVec;

/// The (partial) colouring which is built up by search; a vertex without a colour is unassigned.
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    colours: KeyedVec<VertexId, Option<Colour>>,
    num_assigned: usize,
}

impl Assignment {
    /// Creates an assignment over `num_vertices` vertices in which no vertex has a colour.
    pub fn new(num_vertices: usize) -> Self {
        Assignment {
            colours: KeyedVec::filled(num_vertices, None),
            num_assigned: 0,
        }
    }

    /// Unassigns every vertex.
    pub fn reset(&mut self) {
        self.colours.fill(None);
        self.num_assigned = 0;
    }

    pub fn num_vertices(&self) -> usize {
        self.colours.len()
    }

    pub fn colour_of(&self, vertex: VertexId) -> Option<Colour> {
        self.colours[vertex]
    }

    pub fn is_assigned(&self, vertex: VertexId) -> bool {
        self.colours[vertex].is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.colours.len()
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn unassigned_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.colours
            .enumerate()
            .filter(|(_, colour)| colour.is_none())
            .map(|(vertex, _)| vertex)
    }

    pub(crate) fn assign(&mut self, vertex: VertexId, colour: Colour) {
        if self.colours[vertex].replace(colour).is_none() {
            self.num_assigned += 1;
        }
    }

    pub(crate) fn unassign(&mut self, vertex: VertexId) {
        if self.colours[vertex].take().is_some() {
            self.num_assigned -= 1;
        }
    }

    /// Converts a complete assignment into a [`Colouring`]; returns `None` if some vertex is still
    /// unassigned.
    pub fn to_colouring(&self) -> Option<Colouring> {
        self.colours
            .iter()
            .copied()
            .collect::<Option<KeyedVec<VertexId, Colour>>>()
            .map(Colouring::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigning_and_unassigning_tracks_completeness() {
        let mut assignment = Assignment::new(2);
        assignment.assign(VertexId::new(0), 1);
        assert!(!assignment.is_complete());

        assignment.assign(VertexId::new(1), 0);
        assert!(assignment.is_complete());

        assignment.unassign(VertexId::new(0));
        assert_eq!(assignment.num_assigned(), 1);
        assert_eq!(
            assignment.unassigned_vertices().collect::<Vec<_>>(),
            vec![VertexId::new(0)]
        );
    }

    #[test]
    fn reassigning_does_not_count_twice() {
        let mut assignment = Assignment::new(1);
        assignment.assign(VertexId::new(0), 1);
        assignment.assign(VertexId::new(0), 2);

        assert_eq!(assignment.num_assigned(), 1);
        assert_eq!(assignment.colour_of(VertexId::new(0)), Some(2));
    }

    #[test]
    fn partial_assignment_is_not_a_colouring() {
        let mut assignment = Assignment::new(2);
        assignment.assign(VertexId::new(1), 0);

        assert!(assignment.to_colouring().is_none());
    }

    #[test]
    fn empty_assignment_is_complete() {
        let assignment = Assignment::new(0);

        assert!(assignment.is_complete());
        assert_eq!(assignment.to_colouring().map(|c| c.num_vertices()), Some(0));
    }
}
