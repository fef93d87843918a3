//! URI shape checks and the headline graph summary.

use std::collections::BTreeSet;

use serde::Serialize;

use triplify_model::TripleObject;

use crate::graph::Graph;

/// Whether a term looks like a resolvable HTTP(S) URI: right scheme, no
/// embedded whitespace.
pub fn is_http_uri(value: &str) -> bool {
    (value.starts_with("http://") || value.starts_with("https://"))
        && !value.contains(char::is_whitespace)
}

/// Terms that do not look like resolvable HTTP(S) URIs.
///
/// Lists are deduplicated and sorted. Literal objects are never flagged;
/// only resource objects are expected to be URIs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UriReport {
    pub bad_subjects: Vec<String>,
    pub bad_predicates: Vec<String>,
    pub bad_objects: Vec<String>,
}

impl UriReport {
    pub fn check(graph: &Graph) -> Self {
        let mut bad_subjects = BTreeSet::new();
        let mut bad_predicates = BTreeSet::new();
        let mut bad_objects = BTreeSet::new();

        for triple in graph.iter() {
            if !is_http_uri(&triple.subject) {
                bad_subjects.insert(triple.subject.clone());
            }
            if !is_http_uri(&triple.predicate) {
                bad_predicates.insert(triple.predicate.clone());
            }
            if let TripleObject::Resource(uri) = &triple.object {
                if !is_http_uri(uri) {
                    bad_objects.insert(uri.clone());
                }
            }
        }

        UriReport {
            bad_subjects: bad_subjects.into_iter().collect(),
            bad_predicates: bad_predicates.into_iter().collect(),
            bad_objects: bad_objects.into_iter().collect(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.bad_subjects.is_empty()
            && self.bad_predicates.is_empty()
            && self.bad_objects.is_empty()
    }
}

/// Headline numbers for one graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSummary {
    pub triple_count: usize,
    pub subject_count: usize,
    pub predicate_count: usize,
    pub object_count: usize,
    pub is_valid: bool,
}

impl GraphSummary {
    pub fn of(graph: &Graph) -> Self {
        let mut objects = BTreeSet::new();
        for triple in graph.iter() {
            objects.insert((triple.object.lexical(), triple.object.datatype()));
        }

        GraphSummary {
            triple_count: graph.len(),
            subject_count: graph.subjects().len(),
            predicate_count: graph.predicates().len(),
            object_count: objects.len(),
            is_valid: UriReport::check(graph).is_clean(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphSummary, UriReport};
    use crate::graph::Graph;
    use triplify_model::{Triple, vocab::foaf, vocab::xsd};

    #[test]
    fn clean_graph_passes() {
        let graph = Graph::from_triples(vec![Triple::literal(
            "http://example.org/entity_1",
            foaf::NAME,
            "Ana",
            xsd::STRING,
        )]);
        let report = UriReport::check(&graph);
        assert!(report.is_clean());
        assert!(GraphSummary::of(&graph).is_valid);
    }

    #[test]
    fn non_http_terms_are_flagged_once_each() {
        let graph = Graph::from_triples(vec![
            Triple::literal("urn:thing:1", foaf::NAME, "Ana", xsd::STRING),
            Triple::literal("urn:thing:1", foaf::NAME, "Luis", xsd::STRING),
            Triple::resource("http://example.org/entity_1", foaf::NAME, "not a uri"),
        ]);
        let report = UriReport::check(&graph);

        assert_eq!(report.bad_subjects, vec!["urn:thing:1"]);
        assert!(report.bad_predicates.is_empty());
        assert_eq!(report.bad_objects, vec!["not a uri"]);
        assert!(!report.is_clean());
        assert!(!GraphSummary::of(&graph).is_valid);
    }

    #[test]
    fn literal_objects_are_never_flagged() {
        let graph = Graph::from_triples(vec![Triple::literal(
            "http://example.org/entity_1",
            foaf::NAME,
            "just text",
            xsd::STRING,
        )]);
        assert!(UriReport::check(&graph).is_clean());
    }

    #[test]
    fn summary_counts_distinct_terms() {
        let graph = Graph::from_triples(vec![
            Triple::literal("http://example.org/entity_1", foaf::NAME, "Ana", xsd::STRING),
            Triple::literal("http://example.org/entity_1", foaf::AGE, "33", xsd::INTEGER),
            Triple::literal("http://example.org/entity_2", foaf::NAME, "Ana", xsd::STRING),
        ]);
        let summary = GraphSummary::of(&graph);

        assert_eq!(summary.triple_count, 3);
        assert_eq!(summary.subject_count, 2);
        assert_eq!(summary.predicate_count, 2);
        assert_eq!(summary.object_count, 2);
    }
}
