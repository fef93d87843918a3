//! JSON-LD serializer.

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use triplify_model::{TripleObject, local_name, vocab};

use super::FormatOptions;
use crate::graph::Graph;

/// Build the JSON-LD document as a [`serde_json::Value`].
///
/// The document is `{"@context": ..., "@graph": [...]}` with one node
/// per subject in first-seen order. Property keys are predicate local
/// names; repeated properties collect into arrays.
pub fn json_ld_value(graph: &Graph, options: &FormatOptions) -> Value {
    let mut context = Map::new();
    context.insert("@base".to_string(), Value::String(options.base_uri.clone()));
    for (prefix, ns) in &options.prefixes {
        context.insert(prefix.clone(), Value::String(ns.clone()));
    }

    let mut nodes = Vec::new();
    for (subject, statements) in graph.group_by_subject() {
        let mut node = Map::new();
        node.insert("@id".to_string(), Value::String(subject.to_string()));
        for triple in statements {
            let key = property_key(&triple.predicate);
            let value = object_value(&triple.object);
            match node.get_mut(&key) {
                Some(Value::Array(values)) => values.push(value),
                Some(existing) => {
                    let first = existing.take();
                    *existing = Value::Array(vec![first, value]);
                }
                None => {
                    node.insert(key, value);
                }
            }
        }
        nodes.push(Value::Object(node));
    }

    let mut root = Map::new();
    root.insert("@context".to_string(), Value::Object(context));
    root.insert("@graph".to_string(), Value::Array(nodes));
    Value::Object(root)
}

/// Serialize the graph as pretty-printed JSON-LD.
pub fn json_ld(graph: &Graph, options: &FormatOptions) -> Result<String> {
    serde_json::to_string_pretty(&json_ld_value(graph, options)).context("serialize json-ld")
}

/// Property key for a predicate. Falls back to the full URI when the
/// local name is empty or would collide with a `@` keyword.
fn property_key(predicate: &str) -> String {
    let local = local_name(predicate);
    if local.is_empty() || local.starts_with('@') {
        predicate.to_string()
    } else {
        local.to_string()
    }
}

fn object_value(object: &TripleObject) -> Value {
    match object {
        TripleObject::Resource(uri) => json!({ "@id": uri }),
        TripleObject::Literal { value, datatype } => {
            if datatype.as_str() == vocab::xsd::STRING {
                Value::String(value.clone())
            } else {
                json!({ "@value": value, "@type": datatype })
            }
        }
    }
}
