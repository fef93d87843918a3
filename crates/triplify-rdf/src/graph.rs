//! In-memory triple graph with stable ordering.

use std::collections::{BTreeMap, BTreeSet};

use triplify_model::Triple;

/// An ordered collection of triples.
///
/// Insertion order is kept; `subjects()`, `predicates()`, and
/// `group_by_subject()` report first-seen order, so everything derived
/// from a graph (statistics, serializations) is stable across runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    pub fn from_triples(triples: Vec<Triple>) -> Self {
        Graph { triples }
    }

    pub fn push(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triple> {
        self.triples.iter()
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Unique subjects in first-seen order.
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut subjects = Vec::new();
        for triple in &self.triples {
            if seen.insert(triple.subject.as_str()) {
                subjects.push(triple.subject.as_str());
            }
        }
        subjects
    }

    /// Unique predicates in first-seen order.
    pub fn predicates(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut predicates = Vec::new();
        for triple in &self.triples {
            if seen.insert(triple.predicate.as_str()) {
                predicates.push(triple.predicate.as_str());
            }
        }
        predicates
    }

    pub fn triples_for_subject(&self, subject: &str) -> Vec<&Triple> {
        self.triples
            .iter()
            .filter(|triple| triple.subject == subject)
            .collect()
    }

    /// Triples grouped by subject, subjects in first-seen order and
    /// triples within a subject in insertion order.
    pub fn group_by_subject(&self) -> Vec<(&str, Vec<&Triple>)> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: BTreeMap<&str, Vec<&Triple>> = BTreeMap::new();
        for triple in &self.triples {
            let entry = groups.entry(triple.subject.as_str()).or_default();
            if entry.is_empty() {
                order.push(triple.subject.as_str());
            }
            entry.push(triple);
        }
        order
            .into_iter()
            .map(|subject| {
                let group = groups.remove(subject).unwrap_or_default();
                (subject, group)
            })
            .collect()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
