//! Mapping engine: headers in, confidence-scored column mappings out.

use triplify_model::{
    ColumnKey, ColumnMapping, MappedColumn, MappingResult, MappingStatistics, Template,
};

use crate::catalog::TemplateCatalog;
use crate::score::{MatchThresholds, best_match};
use crate::select::suggest_template;

/// Engine for mapping CSV headers to RDF predicates through a catalog.
///
/// The engine owns an immutable catalog and a set of thresholds; every
/// operation is a pure function of its inputs, so one engine can serve any
/// number of independent requests.
#[derive(Debug, Clone)]
pub struct MappingEngine {
    catalog: TemplateCatalog,
    thresholds: MatchThresholds,
}

impl MappingEngine {
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            thresholds: MatchThresholds::default(),
        }
    }

    pub fn with_thresholds(catalog: TemplateCatalog, thresholds: MatchThresholds) -> Self {
        Self {
            catalog,
            thresholds,
        }
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn thresholds(&self) -> &MatchThresholds {
        &self.thresholds
    }

    /// Map headers against one named template.
    ///
    /// Returns `None` when the template is not in the catalog. Headers
    /// whose best score does not clear the accept threshold are simply
    /// absent from the mapping; they never appear with a zero confidence.
    pub fn auto_map(&self, headers: &[String], template_name: &str) -> Option<ColumnMapping> {
        let template = self.catalog.get(template_name)?;
        Some(self.map_against(template, headers))
    }

    /// Map headers end to end: resolve a template, map, and attach
    /// statistics. Total for every input.
    ///
    /// An explicit `template_name` is used when the catalog knows it;
    /// an unknown name degrades to the suggestion instead of failing, as
    /// does `None`.
    pub fn map_headers(&self, headers: &[String], template_name: Option<&str>) -> MappingResult {
        let template = template_name
            .and_then(|name| {
                let found = self.catalog.get(name);
                if found.is_none() {
                    tracing::warn!(template = %name, "Unknown template, using suggestion instead");
                }
                found
            })
            .unwrap_or_else(|| suggest_template(&self.catalog, headers, &self.thresholds));

        let mapping = self.map_against(template, headers);
        let statistics = self.compute_statistics(&mapping, headers.len());
        tracing::debug!(
            template = %template.name,
            mapped = statistics.mapped_columns,
            total = statistics.total_columns,
            "Mapped headers"
        );

        MappingResult {
            mapping,
            template_used: template.name.clone(),
            template_info: template.clone(),
            statistics,
            available_templates: self.catalog.names(),
        }
    }

    /// Suggested template for a header set (the selector, using this
    /// engine's catalog and thresholds).
    pub fn suggest(&self, headers: &[String]) -> &Template {
        suggest_template(&self.catalog, headers, &self.thresholds)
    }

    /// Aggregate quality numbers for a mapping over `total_columns`
    /// headers.
    pub fn compute_statistics(
        &self,
        mapping: &ColumnMapping,
        total_columns: usize,
    ) -> MappingStatistics {
        let mapped_columns = mapping.len();
        let high_confidence_mappings = mapping
            .iter()
            .filter(|(_, column)| column.confidence > self.thresholds.high_confidence)
            .count();
        let mapping_percentage = if total_columns == 0 {
            0.0
        } else {
            mapped_columns as f32 / total_columns as f32 * 100.0
        };
        MappingStatistics {
            total_columns,
            mapped_columns,
            unmapped_columns: total_columns.saturating_sub(mapped_columns),
            high_confidence_mappings,
            mapping_percentage,
        }
    }

    fn map_against(&self, template: &Template, headers: &[String]) -> ColumnMapping {
        let mut mapping = ColumnMapping::new();
        for header in headers {
            let key = ColumnKey::normalize(header);
            if let Some(spec) = template.entry(&key) {
                mapping.insert(header.clone(), MappedColumn::auto(spec.clone(), 1.0));
                continue;
            }
            if let Some((spec, score)) = best_match(template, &key, self.thresholds.accept) {
                mapping.insert(header.clone(), MappedColumn::auto(spec.clone(), score));
            }
        }
        mapping
    }
}

impl Default for MappingEngine {
    fn default() -> Self {
        Self::new(TemplateCatalog::builtin())
    }
}
