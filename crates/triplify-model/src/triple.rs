use serde::{Deserialize, Serialize};
use std::fmt;

/// Object position of a statement: a resource URI or a typed literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TripleObject {
    /// Reference to another resource.
    Resource(String),
    /// Literal value with its full datatype URI.
    Literal { value: String, datatype: String },
}

impl TripleObject {
    pub fn resource(uri: impl Into<String>) -> Self {
        TripleObject::Resource(uri.into())
    }

    pub fn literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        TripleObject::Literal {
            value: value.into(),
            datatype: datatype.into(),
        }
    }

    /// The lexical form: the URI for resources, the value for literals.
    pub fn lexical(&self) -> &str {
        match self {
            TripleObject::Resource(uri) => uri,
            TripleObject::Literal { value, .. } => value,
        }
    }

    pub fn datatype(&self) -> Option<&str> {
        match self {
            TripleObject::Resource(_) => None,
            TripleObject::Literal { datatype, .. } => Some(datatype),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TripleObject::Literal { .. })
    }
}

/// One RDF statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: TripleObject,
}

impl Triple {
    pub fn resource(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: TripleObject::Resource(object.into()),
        }
    }

    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: impl Into<String>,
        datatype: impl Into<String>,
    ) -> Self {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: TripleObject::Literal {
                value: value.into(),
                datatype: datatype.into(),
            },
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            TripleObject::Resource(uri) => {
                write!(f, "<{}> <{}> <{}>", self.subject, self.predicate, uri)
            }
            TripleObject::Literal { value, datatype } => {
                write!(
                    f,
                    "<{}> <{}> \"{}\"^^<{}>",
                    self.subject, self.predicate, value, datatype
                )
            }
        }
    }
}
