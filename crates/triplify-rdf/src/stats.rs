//! Aggregate statistics over a graph.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::graph::Graph;

/// Counts and frequency tables for one graph.
///
/// `predicate_frequency` and `datatype_frequency` are `BTreeMap`s so the
/// serialized form lists keys in a stable order. Datatype numbers cover
/// literals only; resource objects carry no datatype.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphStatistics {
    pub total_triples: usize,
    pub unique_subjects: usize,
    pub unique_predicates: usize,
    pub unique_objects: usize,
    pub unique_datatypes: usize,
    pub predicate_frequency: BTreeMap<String, usize>,
    pub datatype_frequency: BTreeMap<String, usize>,
    pub avg_triples_per_subject: f64,
}

impl GraphStatistics {
    /// Compute statistics for `graph`. An empty graph yields the zeroed
    /// struct.
    pub fn compute(graph: &Graph) -> Self {
        let mut subjects = BTreeSet::new();
        let mut objects = BTreeSet::new();
        let mut predicate_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut datatype_frequency: BTreeMap<String, usize> = BTreeMap::new();

        for triple in graph.iter() {
            subjects.insert(triple.subject.as_str());
            objects.insert((triple.object.lexical(), triple.object.datatype()));
            *predicate_frequency
                .entry(triple.predicate.clone())
                .or_default() += 1;
            if let Some(datatype) = triple.object.datatype() {
                *datatype_frequency.entry(datatype.to_string()).or_default() += 1;
            }
        }

        let avg_triples_per_subject = if subjects.is_empty() {
            0.0
        } else {
            graph.len() as f64 / subjects.len() as f64
        };

        GraphStatistics {
            total_triples: graph.len(),
            unique_subjects: subjects.len(),
            unique_predicates: predicate_frequency.len(),
            unique_objects: objects.len(),
            unique_datatypes: datatype_frequency.len(),
            predicate_frequency,
            datatype_frequency,
            avg_triples_per_subject,
        }
    }
}
