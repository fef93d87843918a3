//! One-call header mapping for CSV files.

use std::path::Path;

use anyhow::Result;

use triplify_map::MappingEngine;
use triplify_model::MappingResult;

use crate::csv_table::read_csv_table;

/// Read `path` and propose a column mapping for its header row.
///
/// `template_name` selects a catalog template explicitly; `None` lets the
/// engine pick the best-fitting one from the headers.
pub fn map_csv_file(path: &Path, template_name: Option<&str>) -> Result<MappingResult> {
    let table = read_csv_table(path)?;
    if table.headers.is_empty() {
        tracing::warn!(path = %path.display(), "CSV file has no header row");
    }

    let engine = MappingEngine::default();
    let result = engine.map_headers(&table.headers, template_name);
    tracing::info!(
        path = %path.display(),
        template = %result.template_used,
        mapped = result.statistics.mapped_columns,
        total = result.statistics.total_columns,
        "Mapped CSV headers"
    );
    Ok(result)
}
