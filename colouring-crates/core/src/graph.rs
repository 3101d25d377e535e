//! The undirected graph which is coloured by the solver.
//!
//! The solver assumes that the adjacency relation is symmetric and free of self-loops; the
//! constructors in this module are the place where that assumption is enforced, the solving
//! engine itself never re-checks it.
use thiserror::Error;

use crate::basic_types::VertexId;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {vertex} is out of range for a graph with {num_vertices} vertices")]
    VertexOutOfRange { vertex: u32, num_vertices: usize },
    #[error("{0} cannot be adjacent to itself")]
    SelfLoop(VertexId),
    #[error("{from} lists {to} as a neighbour but {to} does not list {from}")]
    AsymmetricAdjacency { from: VertexId, to: VertexId },
}

/// An undirected graph over the vertices `0..num_vertices`.
///
/// The neighbours of a vertex are stored in insertion order, which determines the order in which
/// arcs are processed during propagation.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    adjacency: KeyedVec<VertexId, Vec<VertexId>>,
    /// Every edge once, stored with the smallest endpoint first
    edges: HashSet<(VertexId, VertexId)>,
}

impl Graph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            adjacency: KeyedVec::filled(num_vertices, Vec::new()),
            edges: HashSet::default(),
        }
    }

    /// Creates a graph from a list of undirected edges.
    pub fn from_edges(
        num_vertices: usize,
        edges: impl IntoIterator<Item = (u32, u32)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Graph::new(num_vertices);
        for (u, v) in edges {
            let _ = graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Creates a graph from per-vertex neighbour lists, keeping the order of every list.
    ///
    /// The lists have to describe a symmetric relation without self-loops; repeated entries in a
    /// list are ignored.
    pub fn from_adjacency_lists(lists: Vec<Vec<u32>>) -> Result<Self, GraphError> {
        let num_vertices = lists.len();
        let mut directed: HashSet<(VertexId, VertexId)> = HashSet::default();
        let mut adjacency: KeyedVec<VertexId, Vec<VertexId>> = KeyedVec::default();

        for (index, list) in lists.into_iter().enumerate() {
            let vertex = VertexId::create_from_index(index);
            let mut neighbours = Vec::with_capacity(list.len());
            for id in list {
                let neighbour = checked_vertex(id, num_vertices)?;
                if neighbour == vertex {
                    return Err(GraphError::SelfLoop(vertex));
                }
                if directed.insert((vertex, neighbour)) {
                    neighbours.push(neighbour);
                }
            }
            let _ = adjacency.push(neighbours);
        }

        let mut edges = HashSet::default();
        for (from, neighbours) in adjacency.enumerate() {
            for &to in neighbours.iter() {
                if !directed.contains(&(to, from)) {
                    return Err(GraphError::AsymmetricAdjacency { from, to });
                }
                let _ = edges.insert(normalise(from, to));
            }
        }

        Ok(Graph { adjacency, edges })
    }

    /// The complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut graph = Graph::new(n);
        for u in 0..n {
            for v in u + 1..n {
                graph.insert_edge(VertexId::create_from_index(u), VertexId::create_from_index(v));
            }
        }
        graph
    }

    /// The cycle `0 - 1 - ... - (n - 1) - 0`; for `n < 3` this degenerates to a path.
    pub fn cycle(n: usize) -> Self {
        let mut graph = Graph::new(n);
        for u in 0..n {
            let v = (u + 1) % n;
            if u != v {
                graph.insert_edge(VertexId::create_from_index(u), VertexId::create_from_index(v));
            }
        }
        graph
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// Returns whether the edge was new; adding an existing edge leaves the graph unchanged.
    pub fn add_edge(&mut self, u: u32, v: u32) -> Result<bool, GraphError> {
        let u = checked_vertex(u, self.num_vertices())?;
        let v = checked_vertex(v, self.num_vertices())?;
        if u == v {
            return Err(GraphError::SelfLoop(u));
        }
        if self.has_edge(u, v) {
            return Ok(false);
        }
        self.insert_edge(u, v);
        Ok(true)
    }

    fn insert_edge(&mut self, u: VertexId, v: VertexId) {
        if self.edges.insert(normalise(u, v)) {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        self.adjacency.keys()
    }

    pub fn neighbours(&self, vertex: VertexId) -> &[VertexId] {
        &self.adjacency[vertex]
    }

    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency[vertex].len()
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges.contains(&normalise(u, v))
    }

    /// Iterates over every edge once as `(u, v)` with `u < v`, ordered by `u` and then by the
    /// neighbour order of `u`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.enumerate().flat_map(|(u, neighbours)| {
            neighbours
                .iter()
                .filter(move |&&v| u < v)
                .map(move |&v| (u, v))
        })
    }

    /// Displays the graph as one `Region i: n1 n2 ...` line per vertex.
    pub fn display_adjacency(&self) -> AdjacencyList<'_> {
        AdjacencyList { graph: self }
    }
}

/// See [`Graph::display_adjacency`].
#[derive(Debug, Clone, Copy)]
pub struct AdjacencyList<'a> {
    graph: &'a Graph,
}

impl std::fmt::Display for AdjacencyList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (vertex, neighbours) in self.graph.adjacency.enumerate() {
            write!(f, "Region {}:", vertex.id)?;
            for neighbour in neighbours {
                write!(f, " {}", neighbour.id)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn checked_vertex(id: u32, num_vertices: usize) -> Result<VertexId, GraphError> {
    if (id as usize) < num_vertices {
        Ok(VertexId::new(id))
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: id,
            num_vertices,
        })
    }
}

fn normalise(u: VertexId, v: VertexId) -> (VertexId, VertexId) {
    if u < v {
        (u, v)
    } else {
        (v, u)
    }
}
