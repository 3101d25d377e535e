use crate::basic_types::Colour;
use crate::basic_types::VertexId;
use crate::colouring_assert_moderate;
use crate::containers::KeyedVec;

/// The candidate colours of every vertex for a single attempt.
///
/// Every domain is an ordered sequence of distinct colours in `[0, k)`; the order is the order in
/// which search tries the colours. Only arc-consistency filtering shrinks a domain.
#[derive(Clone, Debug, Default)]
pub struct DomainStore {
    domains: KeyedVec<VertexId, Vec<Colour>>,
    num_colours: u32,
}

impl DomainStore {
    /// Creates a store in which each of the `num_vertices` domains is `{0, ..., num_colours - 1}`.
    pub fn new(num_vertices: usize, num_colours: u32) -> Self {
        let mut store = DomainStore::default();
        store.reset(num_vertices, num_colours);
        store
    }

    /// Resets every domain to `{0, ..., num_colours - 1}`, discarding all filtering.
    pub fn reset(&mut self, num_vertices: usize, num_colours: u32) {
        self.num_colours = num_colours;
        self.domains = KeyedVec::filled(num_vertices, (0..num_colours).collect());
    }

    pub fn num_colours(&self) -> u32 {
        self.num_colours
    }

    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn domain(&self, vertex: VertexId) -> &[Colour] {
        &self.domains[vertex]
    }

    pub fn size_of_domain(&self, vertex: VertexId) -> usize {
        self.domains[vertex].len()
    }

    pub fn contains(&self, vertex: VertexId, colour: Colour) -> bool {
        self.domains[vertex].contains(&colour)
    }

    /// Replaces the domain of `vertex` by `filtered`, which has to be a subsequence of the current
    /// domain.
    pub(crate) fn replace(&mut self, vertex: VertexId, filtered: Vec<Colour>) {
        colouring_assert_moderate!(
            filtered.iter().all(|colour| self.contains(vertex, *colour)),
            "a domain can only shrink"
        );
        self.domains[vertex] = filtered;
    }
}
