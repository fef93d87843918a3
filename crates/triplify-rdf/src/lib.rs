//! RDF graph assembly and output.
//!
//! This crate takes the triples produced by `triplify-cast` and turns
//! them into deliverables: a [`Graph`] with deterministic iteration
//! order, serializers for Turtle, RDF/XML, N-Triples, Notation3, and
//! JSON-LD, triple-pattern queries, URI validation, and graph
//! statistics. [`convert`] bundles the whole pipeline behind one call.

#![deny(unsafe_code)]

pub mod convert;
pub mod formats;
pub mod graph;
pub mod query;
pub mod stats;
pub mod validate;

pub use convert::{Conversion, ConvertOptions, convert};
pub use formats::{ExportBundle, FormatOptions, RdfFormat, export_all, serialize};
pub use graph::Graph;
pub use query::{Bindings, QueryError, QueryOutcome, TermPattern, TriplePattern, execute, run_query};
pub use stats::GraphStatistics;
pub use validate::{GraphSummary, UriReport, is_http_uri};
