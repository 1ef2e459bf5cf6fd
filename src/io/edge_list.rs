//! # EdgeList
//!
//! The EdgeList-Format consists of lines `u v`, each describing the undirected edge between the
//! nodes with integer ids `u` and `v`. Ids need neither be dense nor start at zero.
//!
//! Lines that do not consist of exactly two integer tokens are skipped by default;
//! a [`EdgeListReader::strict`] reader rejects them instead. Blank lines and comment lines
//! (see [`EdgeListReader::comment_identifier`]) are always ignored.
//!
//! # Example
//! ```
//! use lexgraphs::{prelude::*, io::*};
//!
//! let input = "10 20\n20 30\nnot an edge\n";
//! let LabeledGraph { graph, labels } = AdjArrayUndir::try_read_edge_list(input.as_bytes()).unwrap();
//!
//! assert_eq!(graph.number_of_nodes(), 3);
//! assert_eq!(graph.ordered_edges(true), vec![Edge(0, 1), Edge(1, 2)]);
//! assert_eq!(labels.label_of(2), Some(30));
//! ```

use tracing::debug;

use super::*;

/// A GraphReader for the EdgeList-Format
#[derive(Debug, Clone, Default)]
pub struct EdgeListReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: Option<String>,
    /// Reject malformed lines instead of skipping them
    strict: bool,
}

impl EdgeListReader {
    /// Creates a new (default) reader: no comments, malformed lines are skipped
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> EdgeListReader {
        self.comment_identifier = Some(c.into());
        self
    }

    /// If `strict`, malformed lines produce an [`ErrorKind::InvalidData`] error
    pub fn strict(mut self, strict: bool) -> EdgeListReader {
        self.strict = strict;
        self
    }

    fn is_comment(&self, line: &str) -> bool {
        self.comment_identifier
            .as_deref()
            .is_some_and(|c| line.starts_with(c))
    }
}

/// Parses a line consisting of exactly two integer tokens
fn parse_edge_line(line: &str) -> Option<(RawLabel, RawLabel)> {
    let mut parts = line.split_whitespace();

    let u = parts.next()?.parse().ok()?;
    let v = parts.next()?.parse().ok()?;

    parts.next().is_none().then_some((u, v))
}

impl<G: GraphFromScratch> GraphReader<G> for EdgeListReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<LabeledGraph<G>> {
        let mut raw_edges = Vec::new();
        let mut skipped = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() || self.is_comment(&line) {
                continue;
            }

            let edge = parse_edge_line(&line);
            raise_error_unless!(
                edge.is_some() || !self.strict,
                ErrorKind::InvalidData,
                format!("Line {}: expected two integer node ids, found {line:?}", line_no + 1)
            );

            match edge {
                Some(edge) => raw_edges.push(edge),
                None => skipped += 1,
            }
        }

        let labels = NodeLabels::from_labels(raw_edges.iter().flat_map(|&(u, v)| [u, v]));
        raise_error_unless!(
            labels.number_of_labels() < INVALID_NODE as usize,
            ErrorKind::InvalidData,
            "Too many distinct node ids"
        );

        debug!(
            edges = raw_edges.len(),
            nodes = labels.len(),
            skipped,
            "read edge list"
        );

        let graph = G::from_edges(
            labels.len(),
            raw_edges.into_iter().filter_map(|(u, v)| {
                Some(Edge(labels.node_of(u)?, labels.node_of(v)?))
            }),
        );

        Ok(LabeledGraph { graph, labels })
    }
}

/// Trait for creating graphs form an EdgeListReader.
/// Used as shorthand for default EdgeListReader settings
pub trait EdgeListRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<LabeledGraph<Self>>;

    /// Tries to read the graph from a given file
    fn try_read_edge_list_file<P: AsRef<Path>>(path: P) -> Result<LabeledGraph<Self>> {
        Self::try_read_edge_list(BufReader::new(File::open(path)?))
    }
}

impl<G> EdgeListRead for G
where
    G: GraphFromScratch,
{
    fn try_read_edge_list<R: BufRead>(reader: R) -> Result<LabeledGraph<Self>> {
        EdgeListReader::default().try_read_graph(reader)
    }
}
