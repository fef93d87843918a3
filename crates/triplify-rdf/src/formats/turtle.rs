//! Turtle serializer.

use std::collections::BTreeSet;

use triplify_model::{TripleObject, vocab};

use super::{FormatOptions, escape_literal};
use crate::graph::Graph;

/// Serialize the graph as Turtle.
///
/// Statements are grouped by subject in first-seen order with `;`
/// continuations. Only prefixes the graph actually uses are declared.
pub fn turtle(graph: &Graph, options: &FormatOptions) -> String {
    let mut out = String::new();
    let prefixes = used_prefixes(graph, options);
    for (prefix, ns) in &prefixes {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    if !prefixes.is_empty() {
        out.push('\n');
    }

    let groups = graph.group_by_subject();
    for (position, (subject, statements)) in groups.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let last = statements.len() - 1;
        for (row, triple) in statements.iter().enumerate() {
            let predicate = term(&triple.predicate, options);
            let object = object_term(&triple.object, options);
            let end = if row == last { " ." } else { " ;" };
            if row == 0 {
                out.push_str(&format!("<{subject}> {predicate} {object}{end}\n"));
            } else {
                out.push_str(&format!("    {predicate} {object}{end}\n"));
            }
        }
    }
    out
}

fn object_term(object: &TripleObject, options: &FormatOptions) -> String {
    match object {
        TripleObject::Resource(uri) => term(uri, options),
        TripleObject::Literal { value, datatype } => {
            let quoted = format!("\"{}\"", escape_literal(value));
            if datatype.as_str() == vocab::xsd::STRING {
                quoted
            } else {
                format!("{quoted}^^{}", term(datatype, options))
            }
        }
    }
}

fn term(uri: &str, options: &FormatOptions) -> String {
    match compact(uri, options) {
        Some((_, name)) => name,
        None => format!("<{uri}>"),
    }
}

/// Compact a URI into `prefix:local` form against the options table.
/// Local names keep to `[A-Za-z0-9_-]` so the output stays parseable.
fn compact(uri: &str, options: &FormatOptions) -> Option<(usize, String)> {
    for (index, (prefix, ns)) in options.prefixes.iter().enumerate() {
        if let Some(local) = uri.strip_prefix(ns.as_str()) {
            if !local.is_empty() && local.chars().all(is_local_char) {
                return Some((index, format!("{prefix}:{local}")));
            }
        }
    }
    None
}

fn is_local_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '-'
}

/// Prefixes referenced by at least one term, in table order.
fn used_prefixes<'a>(graph: &Graph, options: &'a FormatOptions) -> Vec<(&'a str, &'a str)> {
    let mut used = BTreeSet::new();
    {
        let mut note = |uri: &str| {
            if let Some((index, _)) = compact(uri, options) {
                used.insert(index);
            }
        };
        for triple in graph.iter() {
            note(&triple.predicate);
            match &triple.object {
                TripleObject::Resource(uri) => note(uri),
                TripleObject::Literal { datatype, .. } => {
                    if datatype.as_str() != vocab::xsd::STRING {
                        note(datatype);
                    }
                }
            }
        }
    }
    used.into_iter()
        .map(|index| {
            let (prefix, ns) = &options.prefixes[index];
            (prefix.as_str(), ns.as_str())
        })
        .collect()
}
