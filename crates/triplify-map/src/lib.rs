//! Column-to-predicate mapping: a template catalog, a similarity scorer,
//! and an engine that turns CSV headers into a confidence-scored
//! [`triplify_model::ColumnMapping`].

#![deny(unsafe_code)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod repository;
pub mod score;
pub mod select;

pub use catalog::TemplateCatalog;
pub use engine::MappingEngine;
pub use error::MapError;
pub use repository::{MappingMetadata, MappingRepository, StoredMapping};
pub use score::{MatchThresholds, SUBSTRING_SCORE, similarity};
pub use select::{EXACT_CONTRIBUTION, suggest_template};
