use crate::vocab::xsd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal datatype declared for a mapped column.
///
/// The XSD types the materializer treats specially get dedicated variants;
/// any other datatype URI round-trips through [`Datatype::Other`] unchanged.
/// Serializes as the full datatype URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Datatype {
    String,
    Integer,
    Decimal,
    Boolean,
    AnyUri,
    Other(String),
}

impl Datatype {
    pub fn from_uri(uri: &str) -> Self {
        match uri {
            xsd::STRING => Datatype::String,
            xsd::INTEGER => Datatype::Integer,
            xsd::DECIMAL => Datatype::Decimal,
            xsd::BOOLEAN => Datatype::Boolean,
            xsd::ANY_URI => Datatype::AnyUri,
            other => Datatype::Other(other.to_string()),
        }
    }

    /// The full datatype URI.
    pub fn uri(&self) -> &str {
        match self {
            Datatype::String => xsd::STRING,
            Datatype::Integer => xsd::INTEGER,
            Datatype::Decimal => xsd::DECIMAL,
            Datatype::Boolean => xsd::BOOLEAN,
            Datatype::AnyUri => xsd::ANY_URI,
            Datatype::Other(uri) => uri,
        }
    }
}

impl From<String> for Datatype {
    fn from(uri: String) -> Self {
        Datatype::from_uri(&uri)
    }
}

impl From<Datatype> for String {
    fn from(datatype: Datatype) -> Self {
        match datatype {
            Datatype::Other(uri) => uri,
            known => known.uri().to_string(),
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri())
    }
}
