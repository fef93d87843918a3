//! Materializes table rows into RDF triples.
//!
//! Takes the headers and rows of a CSV table plus a column mapping and
//! produces one typed triple per mapped, non-empty cell. Coercion is total:
//! a cell that does not parse as its declared datatype becomes a plain
//! string literal rather than an error, so one bad value never aborts a
//! conversion.

#![deny(unsafe_code)]

pub mod coerce;
pub mod materialize;
pub mod options;

pub use coerce::coerce_value;
pub use materialize::materialize;
pub use options::{CastOptions, DEFAULT_TRUTHY_TOKENS};
