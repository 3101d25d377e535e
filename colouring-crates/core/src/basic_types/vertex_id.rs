use crate::colouring_assert_simple;
use crate::containers::StorageKey;

/// The identifier of a vertex (a region) of the graph; it is also the variable of the colouring
/// problem, so it indexes both the domains and the assignment.
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct VertexId {
    pub id: u32,
}

impl VertexId {
    pub fn new(id: u32) -> Self {
        VertexId { id }
    }
}

impl StorageKey for VertexId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        colouring_assert_simple!(u32::try_from(index).is_ok());
        VertexId { id: index as u32 }
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.id)
    }
}

impl std::fmt::Debug for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.id)
    }
}
