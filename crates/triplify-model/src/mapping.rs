use crate::template::{PredicateSpec, Template};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A resolved column: where it points and how sure the engine was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappedColumn {
    pub spec: PredicateSpec,
    /// False when the mapping was supplied by the user rather than inferred.
    pub auto_mapped: bool,
    /// Similarity score in `[0.0, 1.0]` that produced this mapping.
    pub confidence: f32,
}

impl MappedColumn {
    pub fn auto(spec: PredicateSpec, confidence: f32) -> Self {
        MappedColumn {
            spec,
            auto_mapped: true,
            confidence,
        }
    }

    pub fn manual(spec: PredicateSpec) -> Self {
        MappedColumn {
            spec,
            auto_mapped: false,
            confidence: 1.0,
        }
    }
}

/// Column mappings for one table, keyed by the original header text.
///
/// Backed by a `BTreeMap` so iteration and serialized output are
/// deterministic regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub columns: BTreeMap<String, MappedColumn>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, header: impl Into<String>, column: MappedColumn) {
        self.columns.insert(header.into(), column);
    }

    pub fn get(&self, header: &str) -> Option<&MappedColumn> {
        self.columns.get(header)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MappedColumn)> {
        self.columns
            .iter()
            .map(|(header, column)| (header.as_str(), column))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// Aggregate quality numbers for one mapping run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MappingStatistics {
    pub total_columns: usize,
    pub mapped_columns: usize,
    pub unmapped_columns: usize,
    /// Mappings whose confidence is strictly above the high-confidence bar.
    pub high_confidence_mappings: usize,
    /// `mapped / total * 100`; zero for a header-less table.
    pub mapping_percentage: f32,
}

/// Everything the engine produced for one set of headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    pub mapping: ColumnMapping,
    /// Name of the template that was applied.
    pub template_used: String,
    /// The applied template, echoed back for display.
    pub template_info: Template,
    pub statistics: MappingStatistics,
    /// Every template name the catalog offers, in catalog order.
    pub available_templates: Vec<String>,
}
