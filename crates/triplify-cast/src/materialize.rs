//! Row materialization: applying a column mapping to table data.

use triplify_model::{ColumnMapping, Triple};

use crate::coerce::coerce_value;
use crate::options::CastOptions;

/// Turn table rows into triples under `mapping`.
///
/// Row `i` (0-based) becomes subject `{base_uri}entity_{i+1}`. Columns are
/// visited in header order; unmapped columns and empty cells contribute
/// nothing. The output sequence is fully determined by the input.
pub fn materialize(
    headers: &[String],
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    options: &CastOptions,
) -> Vec<Triple> {
    let mut triples = Vec::new();
    for (row_index, row) in rows.iter().enumerate() {
        let subject = format!("{}entity_{}", options.base_uri, row_index + 1);
        for (col_index, header) in headers.iter().enumerate() {
            let Some(column) = mapping.get(header) else {
                continue;
            };
            let Some(cell) = row.get(col_index) else {
                continue;
            };
            let value = cell.trim();
            if value.is_empty() {
                continue;
            }
            triples.push(Triple {
                subject: subject.clone(),
                predicate: column.spec.predicate.clone(),
                object: coerce_value(value, &column.spec.datatype, options),
            });
        }
    }
    tracing::debug!(
        rows = rows.len(),
        triples = triples.len(),
        "Materialized triples"
    );
    triples
}
