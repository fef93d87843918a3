#![deny(unsafe_code)]

pub mod datatype;
pub mod key;
pub mod mapping;
pub mod template;
pub mod triple;
pub mod vocab;

pub use datatype::Datatype;
pub use key::ColumnKey;
pub use mapping::{ColumnMapping, MappedColumn, MappingResult, MappingStatistics};
pub use template::{PredicateSpec, Template, TemplateEntry, local_name};
pub use triple::{Triple, TripleObject};
