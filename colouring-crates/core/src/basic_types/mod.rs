mod colouring;
mod propagation_status;
mod vertex_id;

pub use colouring::Colouring;
pub use propagation_status::EmptyDomain;
pub use propagation_status::PropagationStatus;
pub use vertex_id::VertexId;

/// A colour is a value in `[0, k)` for the number of colours `k` of the current attempt.
pub type Colour = u32;
