//! One-call conversion from mapped rows to a serialized graph.

use anyhow::Result;

use triplify_cast::{CastOptions, materialize};
use triplify_model::ColumnMapping;

use crate::formats::{ExportBundle, FormatOptions, export_all};
use crate::graph::Graph;
use crate::validate::GraphSummary;

/// Settings for a full conversion: how rows become triples and how the
/// graph is serialized.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub cast: CastOptions,
    pub formats: FormatOptions,
}

impl ConvertOptions {
    /// Use `base_uri` both for minted subjects and in serializer output.
    pub fn with_base_uri(base_uri: impl Into<String>) -> Self {
        let base_uri = base_uri.into();
        ConvertOptions {
            cast: CastOptions::new(base_uri.clone()),
            formats: FormatOptions {
                base_uri,
                ..FormatOptions::default()
            },
        }
    }
}

/// A completed conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub graph: Graph,
    pub formats: ExportBundle,
    pub summary: GraphSummary,
}

/// Materialize mapped rows into a graph, serialize it in every format,
/// and summarize the result.
pub fn convert(
    headers: &[String],
    rows: &[Vec<String>],
    mapping: &ColumnMapping,
    options: &ConvertOptions,
) -> Result<Conversion> {
    let graph = Graph::from_triples(materialize(headers, rows, mapping, &options.cast));
    let formats = export_all(&graph, &options.formats)?;
    let summary = GraphSummary::of(&graph);
    tracing::info!(
        rows = rows.len(),
        triples = graph.len(),
        subjects = summary.subject_count,
        "Converted table to RDF"
    );
    Ok(Conversion {
        graph,
        formats,
        summary,
    })
}
