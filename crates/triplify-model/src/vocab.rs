//! Vocabulary and namespace constants shared across the conversion
//! pipeline. The built-in templates and all serializers reference
//! predicates and datatypes through this module so the URIs live in
//! exactly one place.

/// Base URI for synthesized entity subjects when none is configured.
pub const DEFAULT_BASE_URI: &str = "http://example.org/";

/// Prefix table used by the serializers, in fixed emission order.
pub const PREFIXES: [(&str, &str); 6] = [
    ("rdf", rdf::NS),
    ("rdfs", rdfs::NS),
    ("xsd", xsd::NS),
    ("foaf", foaf::NS),
    ("schema", schema::NS),
    ("dcterms", dcterms::NS),
];

/// RDF vocabulary constants.
pub mod rdf {
    /// Namespace URI.
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type URI.
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
}

/// RDFS vocabulary constants.
pub mod rdfs {
    /// Namespace URI.
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label URI.
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
}

/// XSD datatype constants.
pub mod xsd {
    /// Namespace URI.
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string URI.
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer URI.
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal URI.
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:boolean URI.
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:date URI.
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime URI.
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:anyURI URI.
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

/// FOAF vocabulary constants used by the persona template.
pub mod foaf {
    /// Namespace URI.
    pub const NS: &str = "http://xmlns.com/foaf/0.1/";

    /// foaf:name URI.
    pub const NAME: &str = "http://xmlns.com/foaf/0.1/name";

    /// foaf:email URI.
    pub const EMAIL: &str = "http://xmlns.com/foaf/0.1/email";

    /// foaf:age URI.
    pub const AGE: &str = "http://xmlns.com/foaf/0.1/age";

    /// foaf:phone URI.
    pub const PHONE: &str = "http://xmlns.com/foaf/0.1/phone";

    /// foaf:organization URI.
    pub const ORGANIZATION: &str = "http://xmlns.com/foaf/0.1/organization";
}

/// schema.org constants used by the built-in templates.
pub mod schema {
    /// Namespace URI.
    pub const NS: &str = "http://schema.org/";

    /// schema:identifier URI.
    pub const IDENTIFIER: &str = "http://schema.org/identifier";

    /// schema:url URI.
    pub const URL: &str = "http://schema.org/url";

    /// schema:dateCreated URI.
    pub const DATE_CREATED: &str = "http://schema.org/dateCreated";

    /// schema:addressLocality URI.
    pub const ADDRESS_LOCALITY: &str = "http://schema.org/addressLocality";
}

/// Dublin Core terms used by the general template.
pub mod dcterms {
    /// Namespace URI.
    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcterms:description URI.
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}
