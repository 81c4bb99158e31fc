//! # EdgeList
//!
//! The EdgeList-Format consists of a header `p <d|u> <n> <m>`, followed by `m` non-comment-lines
//! `u v w` representing an edge `(u - 1, v - 1)` with weight `w`.

use std::{io::Lines, str::FromStr};

use tracing::debug;

use super::*;

/// Header token for directed graphs
const DIRECTED: &str = "d";
/// Header token for undirected graphs
const UNDIRECTED: &str = "u";

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            comment_identifier: "c".to_string(),
        }
    }
}

impl EdgeListReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn set_comment_identifier<S: Into<String>>(&mut self, c: S) {
        self.comment_identifier = c.into();
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> Self {
        self.set_comment_identifier(c);
        self
    }
}

impl<G> GraphReader<G> for EdgeListReader
where
    G: GraphEdgeEditing,
    G::Weight: FromStr,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = EdgeListLines {
            lines: reader.lines(),
            comment_identifier: &self.comment_identifier,
        };

        let header = lines
            .next_non_comment_line()?
            .ok_or(io_error!(ErrorKind::NotFound, "Header not found"))?;
        let (directed, n, m) = parse_header(&header)?;

        let mut graph = G::new(n, directed, true);
        let mut edges_read: NumEdges = 0;
        while let Some(line) = lines.next_non_comment_line()? {
            let mut parts = line.split_whitespace();

            let u: Node = parse_next_value!(parts, "Source node");
            let v: Node = parse_next_value!(parts, "Target node");
            let weight: G::Weight = parse_next_value!(parts, "Weight");

            raise_error_unless!(
                (1..=n).contains(&u) && (1..=n).contains(&v),
                ErrorKind::InvalidData,
                format!("Edge ({u}, {v}) is out of range for {n} nodes")
            );
            raise_error_unless!(
                edges_read < m,
                ErrorKind::InvalidData,
                format!("More than the announced {m} edges found")
            );

            graph
                .insert_edge(u - 1, v - 1, weight)
                .map_err(|e| io_error!(ErrorKind::InvalidData, e))?;
            edges_read += 1;
        }

        raise_error_unless!(
            edges_read == m,
            ErrorKind::InvalidData,
            format!("Expected {m} edges but found {edges_read}")
        );

        debug!(n, m, directed, "read edge list");
        Ok(graph)
    }
}

/// Parses `p <d|u> <n> <m>`
fn parse_header(line: &str) -> Result<(bool, NumNodes, NumEdges)> {
    let mut parts = line.split_whitespace();

    raise_error_unless!(
        parts.next() == Some("p"),
        ErrorKind::InvalidData,
        "Invalid header found"
    );

    let directed = match parts.next() {
        Some(DIRECTED) => true,
        Some(UNDIRECTED) => false,
        _ => {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Graph kind must be `{DIRECTED}` or `{UNDIRECTED}`")
            ));
        }
    };

    let n = parse_next_value!(parts, "Header>Number of nodes");
    let m = parse_next_value!(parts, "Header>Number of edges");

    raise_error_unless!(
        parts.next().is_none(),
        ErrorKind::InvalidData,
        "Header is longer than expected"
    );

    Ok((directed, n, m))
}

/// Lines of an edge list without comments and blank lines
struct EdgeListLines<'a, R> {
    lines: Lines<R>,
    comment_identifier: &'a str,
}

impl<R: BufRead> EdgeListLines<'_, R> {
    /// Returns the next non-comment-line if it exists or propagate an error
    fn next_non_comment_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line))
                    if line.starts_with(self.comment_identifier) || line.trim().is_empty() =>
                {
                    continue;
                }
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }
}

/// Trait for creating graphs with a default EdgeListReader
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphEdgeEditing,
    G::Weight: FromStr,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<Self> {
        EdgeListReader::default().try_read_graph(reader)
    }
}

/// A writer for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListWriter {
    /// Optional comment written as the first line
    comment: Option<String>,
}

impl EdgeListWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `c <comment>` before the header
    pub fn comment<S: Into<String>>(mut self, comment: S) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl<G: WeightedAdjacencyList> GraphWriter<G> for EdgeListWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        if let Some(comment) = &self.comment {
            writeln!(writer, "c {comment}")?;
        }

        let kind = if graph.is_directed() {
            DIRECTED
        } else {
            UNDIRECTED
        };
        writeln!(
            writer,
            "p {kind} {} {}",
            graph.number_of_nodes(),
            graph.number_of_edges()
        )?;

        for WeightedEdge { u, v, weight } in graph.logical_edges() {
            writeln!(writer, "{} {} {weight}", u + 1, v + 1)?;
        }

        Ok(())
    }
}

/// Trait for writing a graph in the EdgeList-Format with default settings
pub trait EdgeListWrite {
    /// Tries to write the graph to a writer
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_edge_list_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_edge_list(writer)
    }
}

impl<G: WeightedAdjacencyList> EdgeListWrite for G {
    fn try_write_edge_list<W: Write>(&self, writer: W) -> Result<()> {
        EdgeListWriter::default().try_write_graph(self, writer)
    }
}
