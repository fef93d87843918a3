use crate::datatype::Datatype;
use crate::key::ColumnKey;
use serde::{Deserialize, Serialize};

/// Target predicate plus literal datatype for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicateSpec {
    /// Full predicate URI, e.g. `http://xmlns.com/foaf/0.1/name`.
    pub predicate: String,
    pub datatype: Datatype,
}

impl PredicateSpec {
    pub fn new(predicate: impl Into<String>, datatype_uri: &str) -> Self {
        PredicateSpec {
            predicate: predicate.into(),
            datatype: Datatype::from_uri(datatype_uri),
        }
    }

    /// Local name of the predicate: the segment after the last `/` or `#`.
    pub fn local_name(&self) -> &str {
        local_name(&self.predicate)
    }
}

/// Local name of a URI: the segment after the last `/` or `#`.
pub fn local_name(uri: &str) -> &str {
    uri.rsplit(['/', '#']).next().unwrap_or(uri)
}

/// One catalog row: a normalized key and the predicate it maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub key: ColumnKey,
    pub spec: PredicateSpec,
}

/// A named set of column-to-predicate mappings.
///
/// Entries keep their registration order; that order is the deterministic
/// tie-break when several entries score equally against a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    pub label: String,
    pub description: String,
    pub entries: Vec<TemplateEntry>,
}

impl Template {
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Template {
            name: name.into(),
            label: label.into(),
            description: description.into(),
            entries: Vec::new(),
        }
    }

    /// Register an entry; the header is normalized into its key form.
    pub fn with_entry(
        mut self,
        header: &str,
        predicate: impl Into<String>,
        datatype_uri: &str,
    ) -> Self {
        self.entries.push(TemplateEntry {
            key: ColumnKey::normalize(header),
            spec: PredicateSpec::new(predicate, datatype_uri),
        });
        self
    }

    /// Exact-key lookup.
    pub fn entry(&self, key: &ColumnKey) -> Option<&PredicateSpec> {
        self.entries
            .iter()
            .find(|entry| &entry.key == key)
            .map(|entry| &entry.spec)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ColumnKey> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
