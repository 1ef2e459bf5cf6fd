/*!
# IO

Utilities for reading graphs from text files.

## Input Formats

Currently supported input formats:
- **EdgeList**: one edge `u v` per line, where `u` and `v` are arbitrary integers
  (see [`EdgeListReader`]).

Input ids are mapped onto the dense node range `0..n` while reading; the mapping is returned
alongside the graph as part of a [`LabeledGraph`].

## Traits

[`GraphReader`] is implemented by readers for a specific format, [`EdgeListRead`] is a
shorthand on the graph types for reading with default settings.
*/

pub mod edge_list;

use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Result},
    path::Path,
};

use crate::{prelude::*, utils::*};

pub use edge_list::*;

/// A graph over dense nodes together with the raw labels its nodes had in the input
#[derive(Clone)]
pub struct LabeledGraph<G> {
    /// The graph over nodes `0..n`
    pub graph: G,
    /// Raw input label of every node
    pub labels: NodeLabels,
}

/// Trait for types that can read graphs in a specific format.
///
/// This trait provides both a low-level method to read from any
/// [`BufRead`] instance and a convenience wrapper to read directly
/// from files.
pub trait GraphReader<G> {
    /// Reads a graph from the given reader according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if reading fails or the input is rejected by the settings in `self`.
    fn try_read_graph<R>(&self, reader: R) -> Result<LabeledGraph<G>>
    where
        R: BufRead;

    /// Reads a graph from a file according to the settings in `self`.
    ///
    /// Internally wraps the file in a buffered reader.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or if its contents
    /// are rejected (see [`GraphReader::try_read_graph`]).
    fn try_read_graph_file<P>(&self, path: P) -> Result<LabeledGraph<G>>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

use io_error;
use raise_error_unless;
