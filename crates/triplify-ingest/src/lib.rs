//! CSV ingestion for the CSV-to-RDF pipeline.
//!
//! Loads delimited files into an in-memory [`CsvTable`] (header row plus
//! uniformly sized data rows) and offers a one-call path from a file to a
//! proposed column mapping.

#![deny(unsafe_code)]

pub mod csv_table;
pub mod mapping;

pub use csv_table::{CsvTable, read_csv_str, read_csv_table};
pub use mapping::map_csv_file;
