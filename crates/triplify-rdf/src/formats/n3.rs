//! Notation3 serializer.

use super::{FormatOptions, turtle};
use crate::graph::Graph;

/// Serialize the graph as Notation3.
///
/// The graphs produced here only use the subset of N3 that is also
/// valid Turtle, so the two serializations are identical text.
pub fn n3(graph: &Graph, options: &FormatOptions) -> String {
    turtle(graph, options)
}
