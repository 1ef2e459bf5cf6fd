//! Errors reported by the recognition algorithms.
//!
//! Reading graphs reports plain `std::io::Error`s (see [`io`](crate::io)); the algorithms
//! themselves only fail if their input violates a precondition.

use thiserror::Error;

use crate::node::NumNodes;

/// Precondition violations of the recognition pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognitionError {
    /// Lex-BFS (and everything built on top of it) requires at least one node.
    #[error("graph has no nodes")]
    EmptyGraph,

    /// A supplied vertex ordering is not a permutation of `0..n`.
    #[error("ordering is not a permutation of 0..{expected} (found {found} entries)")]
    InvalidOrdering {
        /// Number of nodes of the graph
        expected: NumNodes,
        /// Number of entries in the ordering
        found: usize,
    },
}

/// Result type alias for recognition operations.
pub type Result<T> = std::result::Result<T, RecognitionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(RecognitionError::EmptyGraph.to_string(), "graph has no nodes");
        assert_eq!(
            RecognitionError::InvalidOrdering {
                expected: 3,
                found: 2
            }
            .to_string(),
            "ordering is not a permutation of 0..3 (found 2 entries)"
        );
    }
}
