use super::VertexId;

/// The result of running arc-consistency propagation. Propagation either reaches a fixed point or
/// wipes out the domain of a vertex, in which case the current number of colours cannot be
/// achieved.
pub type PropagationStatus = Result<(), EmptyDomain>;

/// Signals that the domain of `vertex` became empty during propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyDomain {
    pub vertex: VertexId,
}

impl std::fmt::Display for EmptyDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "the domain of {} is empty", self.vertex)
    }
}
