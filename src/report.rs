//! Printable results of a classification run.
//!
//! Orderings are reported in terms of the raw input labels (see [`NodeLabels`]), so the output
//! refers to the ids of the input file rather than to dense nodes.

use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::{node::Node, utils::*};

/// Result of one task as it is presented to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// A vertex ordering, given as raw input labels
    Ordering(Vec<RawLabel>),
    /// A yes/no answer
    Verdict(bool),
}

impl Report {
    /// Translates an ordering of dense nodes back into raw labels.
    /// ** Panics if a node has no label **
    ///
    /// # Example
    /// ```
    /// use lexgraphs::{report::Report, utils::NodeLabels};
    ///
    /// let labels = NodeLabels::from_labels([7, 3, 5]);
    /// assert_eq!(Report::ordering(&labels, &[2, 0, 1]).to_string(), "[7, 3, 5]");
    /// ```
    pub fn ordering(labels: &NodeLabels, order: &[Node]) -> Self {
        Self::Ordering(labels.labels_of(order.iter().copied()).collect())
    }
}

impl From<bool> for Report {
    fn from(value: bool) -> Self {
        Self::Verdict(value)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Report::Ordering(order) => write!(f, "[{}]", order.iter().join(", ")),
            Report::Verdict(verdict) => write!(f, "{verdict}"),
        }
    }
}
