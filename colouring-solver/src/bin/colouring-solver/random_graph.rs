use colouring_solver::Graph;
use colouring_solver::GraphError;
use rand::Rng;

/// The number of vertices of a generated graph when none is given.
pub(crate) const DEFAULT_NUM_VERTICES: std::ops::RangeInclusive<usize> = 6..=12;

/// Generates a graph in which every pair of distinct vertices is connected with a probability of
/// `edge_probability` percent.
///
/// The pairs `(i, j)` with `i < j` are visited in lexicographic order, and for each a number is
/// drawn uniformly from `1..=100`; the edge is added if that number is at most
/// `edge_probability`.
pub(crate) fn generate_random_graph(
    rng: &mut impl Rng,
    num_vertices: usize,
    edge_probability: u32,
) -> Result<Graph, GraphError> {
    let mut graph = Graph::new(num_vertices);

    for i in 0..num_vertices as u32 {
        for j in i + 1..num_vertices as u32 {
            if rng.gen_range(1..=100) <= edge_probability {
                let _ = graph.add_edge(i, j)?;
            }
        }
    }

    Ok(graph)
}
