//! RDF serialization formats.
//!
//! All serializers are pure functions of the triple sequence and the
//! [`FormatOptions`]; identical input produces byte-identical output.

mod jsonld;
mod n3;
mod ntriples;
mod rdfxml;
mod turtle;

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::Serialize;

use triplify_model::vocab;

use crate::graph::Graph;

pub use jsonld::{json_ld, json_ld_value};
pub use n3::n3;
pub use ntriples::n_triples;
pub use rdfxml::rdf_xml;
pub use turtle::turtle;

/// Target serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    Turtle,
    RdfXml,
    NTriples,
    N3,
    JsonLd,
}

impl RdfFormat {
    pub const ALL: [RdfFormat; 5] = [
        RdfFormat::Turtle,
        RdfFormat::RdfXml,
        RdfFormat::NTriples,
        RdfFormat::N3,
        RdfFormat::JsonLd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::RdfXml => "rdf-xml",
            RdfFormat::NTriples => "n-triples",
            RdfFormat::N3 => "n3",
            RdfFormat::JsonLd => "json-ld",
        }
    }

    /// Conventional file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::RdfXml => "rdf",
            RdfFormat::NTriples => "nt",
            RdfFormat::N3 => "n3",
            RdfFormat::JsonLd => "jsonld",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RdfFormat {
    type Err = String;

    /// Parse a format name, accepting the common aliases and extensions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "rdf-xml" | "rdf/xml" | "rdfxml" | "rdf" | "xml" => Ok(RdfFormat::RdfXml),
            "n-triples" | "ntriples" | "nt" => Ok(RdfFormat::NTriples),
            "n3" | "notation3" => Ok(RdfFormat::N3),
            "json-ld" | "jsonld" => Ok(RdfFormat::JsonLd),
            other => Err(format!("unknown RDF format: {other}")),
        }
    }
}

/// Shared serializer settings.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Base URI, emitted where the format has a place for it.
    pub base_uri: String,
    /// Prefix and namespace pairs used for compaction, in emission order.
    pub prefixes: Vec<(String, String)>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            base_uri: vocab::DEFAULT_BASE_URI.to_string(),
            prefixes: vocab::PREFIXES
                .iter()
                .map(|(prefix, ns)| ((*prefix).to_string(), (*ns).to_string()))
                .collect(),
        }
    }
}

/// Escape a literal value for Turtle and N-Triples output.
pub(crate) fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Serialize `graph` in one format.
pub fn serialize(graph: &Graph, format: RdfFormat, options: &FormatOptions) -> Result<String> {
    match format {
        RdfFormat::Turtle => Ok(turtle(graph, options)),
        RdfFormat::RdfXml => rdf_xml(graph, options),
        RdfFormat::NTriples => Ok(n_triples(graph)),
        RdfFormat::N3 => Ok(n3(graph, options)),
        RdfFormat::JsonLd => json_ld(graph, options),
    }
}

/// Every supported serialization of one graph.
#[derive(Debug, Clone, Serialize)]
pub struct ExportBundle {
    pub turtle: String,
    pub rdf_xml: String,
    pub n_triples: String,
    pub n3: String,
    pub json_ld: String,
}

/// Serialize `graph` in every format at once.
pub fn export_all(graph: &Graph, options: &FormatOptions) -> Result<ExportBundle> {
    Ok(ExportBundle {
        turtle: turtle(graph, options),
        rdf_xml: rdf_xml(graph, options)?,
        n_triples: n_triples(graph),
        n3: n3(graph, options),
        json_ld: json_ld(graph, options)?,
    })
}

#[cfg(test)]
mod tests {
    use super::{FormatOptions, RdfFormat, escape_literal};

    #[test]
    fn format_names_round_trip() {
        for format in RdfFormat::ALL {
            let parsed: RdfFormat = format.as_str().parse().expect("parse format name");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn extensions_parse_back_too() {
        for format in RdfFormat::ALL {
            let parsed: RdfFormat = format.extension().parse().expect("parse extension");
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn unknown_format_is_an_error() {
        assert!("trig".parse::<RdfFormat>().is_err());
    }

    #[test]
    fn default_options_carry_the_vocab_prefixes() {
        let options = FormatOptions::default();
        assert_eq!(options.base_uri, "http://example.org/");
        assert!(options.prefixes.iter().any(|(p, _)| p == "foaf"));
    }

    #[test]
    fn escaping_covers_quotes_and_newlines() {
        assert_eq!(escape_literal("say \"hi\"\n"), "say \\\"hi\\\"\\n");
        assert_eq!(escape_literal("back\\slash"), "back\\\\slash");
    }
}
