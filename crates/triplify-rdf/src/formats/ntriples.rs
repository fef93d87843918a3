//! N-Triples serializer.

use triplify_model::{TripleObject, vocab};

use super::escape_literal;
use crate::graph::Graph;

/// Serialize the graph as N-Triples, one statement per line in graph
/// order. Simple literals carry no datatype marker per RDF 1.1.
pub fn n_triples(graph: &Graph) -> String {
    let mut out = String::new();
    for triple in graph.iter() {
        let object = match &triple.object {
            TripleObject::Resource(uri) => format!("<{uri}>"),
            TripleObject::Literal { value, datatype } => {
                let quoted = format!("\"{}\"", escape_literal(value));
                if datatype.as_str() == vocab::xsd::STRING {
                    quoted
                } else {
                    format!("{quoted}^^<{datatype}>")
                }
            }
        };
        out.push_str(&format!(
            "<{}> <{}> {} .\n",
            triple.subject, triple.predicate, object
        ));
    }
    out
}
