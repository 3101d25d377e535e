//! This module provides a parser for the DIMACS graph colouring (`.col`) file format.
//!
//! A file consists of lines of the following kinds:
//!  - `c <text>` is a comment and is ignored,
//!  - `p edge <num vertices> <num edges>` is the header, which should occur exactly once and
//!    before any edge,
//!  - `e <u> <v>` is an undirected edge between the vertices `u` and `v`, which are numbered from
//!    1.
//!
//! Empty lines are ignored. An edge which occurs more than once (in either orientation) is only
//! added once, but is counted every time towards the number of edges stated in the header.
use std::io::BufRead;
use std::io::BufReader;
use std::io::Read;
use std::str::FromStr;

use colouring_solver::Graph;
use colouring_solver::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum DimacsParseError {
    #[error("failed to read file")]
    Io(#[from] std::io::Error),

    #[error("missing dimacs header")]
    MissingHeader,

    #[error("'{0}' is an invalid header")]
    InvalidHeader(String),

    #[error("multiple dimacs headers found")]
    DuplicateHeader,

    #[error("line {line}: '{content}' is an invalid edge")]
    InvalidEdge { line: usize, content: String },

    #[error("line {line}: unexpected line '{content}'")]
    UnexpectedLine { line: usize, content: String },

    #[error("expected to parse {expected} edges, but parsed {parsed}")]
    IncorrectEdgeCount { expected: usize, parsed: usize },

    #[error("the edges do not form a valid graph: {0}")]
    InvalidGraph(#[from] GraphError),
}

/// Parses a `.col` file into a [`Graph`]; the vertices of the graph are numbered from 0.
pub(crate) fn parse_col(source: impl Read) -> Result<Graph, DimacsParseError> {
    let reader = BufReader::new(source);
    let mut parser = ColParser::default();

    for (index, line) in reader.lines().enumerate() {
        parser.parse_line(index + 1, &line?)?;
    }

    parser.complete()
}

#[derive(Debug, Default)]
struct ColParser {
    header: Option<ColHeader>,
    graph: Option<Graph>,
    parsed_edges: usize,
}

impl ColParser {
    fn parse_line(&mut self, line_number: usize, line: &str) -> Result<(), DimacsParseError> {
        let line = line.trim();

        match line.chars().next() {
            None | Some('c') => Ok(()),
            Some('p') => self.init_graph(line),
            Some('e') => self.add_edge(line_number, line),
            Some(_) => Err(DimacsParseError::UnexpectedLine {
                line: line_number,
                content: line.to_owned(),
            }),
        }
    }

    fn init_graph(&mut self, line: &str) -> Result<(), DimacsParseError> {
        if self.header.is_some() {
            return Err(DimacsParseError::DuplicateHeader);
        }

        let header = line.parse::<ColHeader>()?;
        self.graph = Some(Graph::new(header.num_vertices));
        self.header = Some(header);

        Ok(())
    }

    fn add_edge(&mut self, line_number: usize, line: &str) -> Result<(), DimacsParseError> {
        let graph = self.graph.as_mut().ok_or(DimacsParseError::MissingHeader)?;

        let invalid_edge = || DimacsParseError::InvalidEdge {
            line: line_number,
            content: line.to_owned(),
        };

        let mut components = line.split_whitespace().skip(1);
        let (Some(u), Some(v), None) = (components.next(), components.next(), components.next())
        else {
            return Err(invalid_edge());
        };

        let u = parse_vertex(u).ok_or_else(invalid_edge)?;
        let v = parse_vertex(v).ok_or_else(invalid_edge)?;

        let _ = graph.add_edge(u, v)?;
        self.parsed_edges += 1;

        Ok(())
    }

    fn complete(self) -> Result<Graph, DimacsParseError> {
        let (Some(header), Some(graph)) = (self.header, self.graph) else {
            return Err(DimacsParseError::MissingHeader);
        };

        if header.num_edges != self.parsed_edges {
            return Err(DimacsParseError::IncorrectEdgeCount {
                expected: header.num_edges,
                parsed: self.parsed_edges,
            });
        }

        Ok(graph)
    }
}

/// Converts a 1-based DIMACS vertex to a 0-based vertex.
fn parse_vertex(component: &str) -> Option<u32> {
    component.parse::<u32>().ok()?.checked_sub(1)
}

#[derive(Debug, Clone, Copy)]
struct ColHeader {
    num_vertices: usize,
    num_edges: usize,
}

impl FromStr for ColHeader {
    type Err = DimacsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut components = s.split_whitespace();

        if components.next() != Some("p") || !matches!(components.next(), Some("edge" | "col")) {
            return Err(DimacsParseError::InvalidHeader(s.to_owned()));
        }

        // Vertices are identified by a `u32`
        let num_vertices = next_header_component::<u32>(&mut components, s)? as usize;
        let num_edges = next_header_component::<usize>(&mut components, s)?;

        if components.next().is_some() {
            return Err(DimacsParseError::InvalidHeader(s.to_owned()));
        }

        Ok(Self {
            num_vertices,
            num_edges,
        })
    }
}

fn next_header_component<'a, Num: FromStr>(
    components: &mut impl Iterator<Item = &'a str>,
    header: &str,
) -> Result<Num, DimacsParseError> {
    components
        .next()
        .ok_or_else(|| DimacsParseError::InvalidHeader(header.to_owned()))?
        .parse::<Num>()
        .map_err(|_| DimacsParseError::InvalidHeader(header.to_owned()))
}

#[cfg(test)]
mod tests {
    use colouring_solver::VertexId;

    use super::*;

    fn parse(source: &str) -> Result<Graph, DimacsParseError> {
        parse_col(source.as_bytes())
    }

    fn x(id: u32) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn basic_instance_is_read() {
        let graph = parse("p edge 3 2\ne 1 2\ne 2 3\n").unwrap();

        assert_eq!(graph.num_vertices(), 3);
        assert_eq!(graph.num_edges(), 2);
        assert!(graph.has_edge(x(0), x(1)));
        assert!(graph.has_edge(x(1), x(2)));
        assert!(!graph.has_edge(x(0), x(2)));
    }

    #[test]
    fn comments_and_empty_lines_are_ignored() {
        let source = "c a triangle\n\np edge 3 3\ne 1 2\nc between the edges\ne 2 3\n\ne 3 1";
        let graph = parse(source).unwrap();

        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn whitespace_is_ignored() {
        let graph = parse("  p   edge 2    1 \n\te  2   1  \n").unwrap();

        assert!(graph.has_edge(x(0), x(1)));
    }

    #[test]
    fn neighbour_order_follows_the_file() {
        let graph = parse("p edge 4 3\ne 1 4\ne 1 2\ne 1 3\n").unwrap();

        assert_eq!(graph.neighbours(x(0)), &[x(3), x(1), x(2)]);
    }

    #[test]
    fn repeated_edges_are_added_once() {
        let graph = parse("p edge 2 2\ne 1 2\ne 2 1\n").unwrap();

        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.degree(x(0)), 1);
    }

    #[test]
    fn col_header_is_accepted() {
        let graph = parse("p col 2 0\n").unwrap();

        assert_eq!(graph.num_vertices(), 2);
    }

    #[test]
    fn missing_header_is_an_error() {
        assert!(matches!(
            parse("e 1 2\n"),
            Err(DimacsParseError::MissingHeader)
        ));
        assert!(matches!(parse(""), Err(DimacsParseError::MissingHeader)));
    }

    #[test]
    fn duplicate_header_is_an_error() {
        assert!(matches!(
            parse("p edge 2 0\np edge 2 0\n"),
            Err(DimacsParseError::DuplicateHeader)
        ));
    }

    #[test]
    fn invalid_header_is_an_error() {
        for source in ["p cnf 2 1\n", "p edge 2\n", "p edge two 1\n", "p edge 2 1 3\n"] {
            assert!(
                matches!(parse(source), Err(DimacsParseError::InvalidHeader(_))),
                "{source:?} should be rejected"
            );
        }
    }

    #[test]
    fn too_many_vertices_is_an_invalid_header() {
        let result = parse("p edge 4294967296 0\n");

        assert!(matches!(result, Err(DimacsParseError::InvalidHeader(_))));
    }

    #[test]
    fn invalid_edge_reports_the_line() {
        let result = parse("c comment\np edge 3 1\ne 1\n");

        assert!(matches!(
            result,
            Err(DimacsParseError::InvalidEdge { line: 3, .. })
        ));
    }

    #[test]
    fn vertex_zero_is_an_invalid_edge() {
        assert!(matches!(
            parse("p edge 2 1\ne 0 1\n"),
            Err(DimacsParseError::InvalidEdge { .. })
        ));
    }

    #[test]
    fn out_of_range_vertex_is_an_invalid_graph() {
        assert!(matches!(
            parse("p edge 2 1\ne 1 3\n"),
            Err(DimacsParseError::InvalidGraph(
                GraphError::VertexOutOfRange { .. }
            ))
        ));
    }

    #[test]
    fn self_loop_is_an_invalid_graph() {
        assert!(matches!(
            parse("p edge 2 1\ne 2 2\n"),
            Err(DimacsParseError::InvalidGraph(GraphError::SelfLoop(_)))
        ));
    }

    #[test]
    fn incorrect_edge_count_is_an_error() {
        let result = parse("p edge 3 3\ne 1 2\ne 2 3\n");

        assert!(matches!(
            result,
            Err(DimacsParseError::IncorrectEdgeCount {
                expected: 3,
                parsed: 2
            })
        ));
    }

    #[test]
    fn unexpected_line_is_an_error() {
        assert!(matches!(
            parse("p edge 2 0\nn 1 5\n"),
            Err(DimacsParseError::UnexpectedLine { line: 2, .. })
        ));
    }
}
