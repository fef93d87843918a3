//! RDF/XML serializer.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use triplify_model::{TripleObject, vocab};

use super::FormatOptions;
use crate::graph::Graph;

/// Serialize the graph as RDF/XML.
///
/// Property elements need QNames, so predicates are qualified against
/// the configured prefixes first and otherwise split at their last `/`
/// or `#` under a generated `ns{N}` prefix. Predicates with no
/// XML-safe local name are skipped with a warning.
pub fn rdf_xml(graph: &Graph, options: &FormatOptions) -> Result<String> {
    let namespaces = collect_namespaces(graph, options);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .context("write xml declaration")?;

    let mut root = BytesStart::new("rdf:RDF");
    root.push_attribute(("xmlns:rdf", vocab::rdf::NS));
    for (prefix, ns) in &namespaces.order {
        if prefix != "rdf" {
            root.push_attribute((format!("xmlns:{prefix}").as_str(), ns.as_str()));
        }
    }
    root.push_attribute(("xml:base", options.base_uri.as_str()));
    writer
        .write_event(Event::Start(root))
        .context("write rdf:RDF")?;

    for (subject, statements) in graph.group_by_subject() {
        let mut description = BytesStart::new("rdf:Description");
        description.push_attribute(("rdf:about", subject));
        writer
            .write_event(Event::Start(description))
            .context("write rdf:Description")?;

        for triple in statements {
            let Some((ns, local)) = split_predicate(&triple.predicate, options) else {
                tracing::warn!(
                    predicate = %triple.predicate,
                    "Skipping predicate with no XML-safe name"
                );
                continue;
            };
            let Some(prefix) = namespaces.by_ns.get(&ns) else {
                continue;
            };
            let name = format!("{prefix}:{local}");
            match &triple.object {
                TripleObject::Resource(uri) => {
                    let mut element = BytesStart::new(name.as_str());
                    element.push_attribute(("rdf:resource", uri.as_str()));
                    writer
                        .write_event(Event::Empty(element))
                        .context("write resource property")?;
                }
                TripleObject::Literal { value, datatype } => {
                    let mut element = BytesStart::new(name.as_str());
                    if datatype.as_str() != vocab::xsd::STRING {
                        element.push_attribute(("rdf:datatype", datatype.as_str()));
                    }
                    writer
                        .write_event(Event::Start(element))
                        .context("write literal property")?;
                    writer
                        .write_event(Event::Text(BytesText::new(value)))
                        .context("write literal value")?;
                    writer
                        .write_event(Event::End(BytesEnd::new(name.as_str())))
                        .context("close literal property")?;
                }
            }
        }

        writer
            .write_event(Event::End(BytesEnd::new("rdf:Description")))
            .context("close rdf:Description")?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("rdf:RDF")))
        .context("close rdf:RDF")?;

    String::from_utf8(writer.into_inner()).context("rdf xml output is not valid utf-8")
}

struct Namespaces {
    /// Namespace URI to prefix.
    by_ns: BTreeMap<String, String>,
    /// Declaration order: configured prefixes keep their names,
    /// fallbacks get `ns1`, `ns2` and so on as they appear.
    order: Vec<(String, String)>,
}

fn collect_namespaces(graph: &Graph, options: &FormatOptions) -> Namespaces {
    let mut by_ns = BTreeMap::new();
    let mut order = Vec::new();
    let mut generated = 0usize;
    for triple in graph.iter() {
        let Some((ns, _)) = split_predicate(&triple.predicate, options) else {
            continue;
        };
        if by_ns.contains_key(&ns) {
            continue;
        }
        let prefix = match options.prefixes.iter().find(|(_, n)| *n == ns) {
            Some((prefix, _)) => prefix.clone(),
            None => {
                generated += 1;
                format!("ns{generated}")
            }
        };
        by_ns.insert(ns.clone(), prefix.clone());
        order.push((prefix, ns));
    }
    Namespaces { by_ns, order }
}

/// Split a predicate URI into namespace and XML-safe local name.
fn split_predicate(uri: &str, options: &FormatOptions) -> Option<(String, String)> {
    for (_, ns) in &options.prefixes {
        if let Some(local) = uri.strip_prefix(ns.as_str()) {
            if is_xml_name(local) {
                return Some((ns.clone(), local.to_string()));
            }
        }
    }
    let cut = uri.rfind(['#', '/'])?;
    let (ns, local) = uri.split_at(cut + 1);
    if is_xml_name(local) {
        Some((ns.to_string(), local.to_string()))
    } else {
        None
    }
}

fn is_xml_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-' || ch == '.')
}
