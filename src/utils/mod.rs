/*!
# Utilities

Helpers that are not algorithms themselves, most importantly [`NodeLabels`], which
maps arbitrary integer ids of an input file onto the dense node range `0..n`
used by every graph in this crate.
*/

pub mod node_labels;

pub use node_labels::{NodeLabels, RawLabel};
