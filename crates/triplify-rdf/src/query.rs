//! Elementary triple-pattern queries.
//!
//! A pattern is three terms in subject, predicate, object position, each a
//! variable (`?name`), an IRI (`<uri>`), or a quoted literal (`"text"`).
//! Full SPARQL is out of scope; this covers the single-pattern lookups the
//! conversion output needs.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::graph::Graph;

/// Parse failure for a textual pattern.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("malformed pattern: {message}")]
    Malformed { message: String },
}

fn malformed(message: impl Into<String>) -> QueryError {
    QueryError::Malformed {
        message: message.into(),
    }
}

/// One position of a triple pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermPattern {
    /// `?name`: matches anything and binds it.
    Variable(String),
    /// `<uri>`: matches subjects, predicates, and resource objects.
    Iri(String),
    /// `"text"`: matches literal values.
    Literal(String),
}

impl TermPattern {
    pub fn variable(name: impl Into<String>) -> Self {
        TermPattern::Variable(name.into())
    }

    pub fn iri(uri: impl Into<String>) -> Self {
        TermPattern::Iri(uri.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        TermPattern::Literal(text.into())
    }
}

/// A subject/predicate/object pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriplePattern {
    pub subject: TermPattern,
    pub predicate: TermPattern,
    pub object: TermPattern,
}

impl TriplePattern {
    pub fn new(subject: TermPattern, predicate: TermPattern, object: TermPattern) -> Self {
        TriplePattern {
            subject,
            predicate,
            object,
        }
    }

    /// Parse a pattern like `?s <http://xmlns.com/foaf/0.1/name> "Ana"`,
    /// with an optional trailing `.`.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        let mut trimmed = input.trim();
        if let Some(stripped) = trimmed.strip_suffix('.') {
            trimmed = stripped.trim_end();
        }
        if trimmed.is_empty() {
            return Err(malformed("empty pattern"));
        }

        let tokens = tokenize(trimmed)?;
        if tokens.len() != 3 {
            return Err(malformed(format!(
                "expected subject, predicate and object, found {} terms",
                tokens.len()
            )));
        }

        Ok(TriplePattern {
            subject: parse_term(&tokens[0])?,
            predicate: parse_term(&tokens[1])?,
            object: parse_term(&tokens[2])?,
        })
    }
}

fn tokenize(input: &str) -> Result<Vec<String>, QueryError> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
        } else if ch == '"' {
            chars.next();
            let mut token = String::from('"');
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(malformed("unterminated string literal"));
            }
            token.push('"');
            tokens.push(token);
        } else if ch == '<' {
            chars.next();
            let mut token = String::from('<');
            let mut closed = false;
            for c in chars.by_ref() {
                if c == '>' {
                    closed = true;
                    break;
                }
                token.push(c);
            }
            if !closed {
                return Err(malformed("unterminated IRI"));
            }
            token.push('>');
            tokens.push(token);
        } else {
            let mut token = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                token.push(c);
                chars.next();
            }
            tokens.push(token);
        }
    }
    Ok(tokens)
}

fn parse_term(token: &str) -> Result<TermPattern, QueryError> {
    if let Some(name) = token.strip_prefix('?') {
        if name.is_empty() {
            return Err(malformed("variable is missing a name"));
        }
        return Ok(TermPattern::Variable(name.to_string()));
    }
    if let Some(rest) = token.strip_prefix('<') {
        let uri = rest.strip_suffix('>').unwrap_or(rest);
        if uri.is_empty() {
            return Err(malformed("empty IRI"));
        }
        return Ok(TermPattern::Iri(uri.to_string()));
    }
    if let Some(rest) = token.strip_prefix('"') {
        let text = rest.strip_suffix('"').unwrap_or(rest);
        return Ok(TermPattern::Literal(text.to_string()));
    }
    Err(malformed(format!("unrecognized term: {token}")))
}

/// Variable name to matched lexical form, for one solution.
pub type Bindings = BTreeMap<String, String>;

fn term_matches(
    pattern: &TermPattern,
    lexical: &str,
    is_literal: bool,
    bindings: &mut Bindings,
) -> bool {
    match pattern {
        TermPattern::Variable(name) => match bindings.get(name) {
            Some(bound) => bound == lexical,
            None => {
                bindings.insert(name.clone(), lexical.to_string());
                true
            }
        },
        TermPattern::Iri(uri) => !is_literal && lexical == uri,
        TermPattern::Literal(text) => is_literal && lexical == text,
    }
}

/// Match `pattern` against every triple, in graph order.
///
/// A variable used in more than one position must match the same lexical
/// form in all of them.
pub fn execute(graph: &Graph, pattern: &TriplePattern) -> Vec<Bindings> {
    let mut results = Vec::new();
    for triple in graph.iter() {
        let mut bindings = Bindings::new();
        if !term_matches(&pattern.subject, &triple.subject, false, &mut bindings) {
            continue;
        }
        if !term_matches(&pattern.predicate, &triple.predicate, false, &mut bindings) {
            continue;
        }
        let object_matches = term_matches(
            &pattern.object,
            triple.object.lexical(),
            triple.object.is_literal(),
            &mut bindings,
        );
        if object_matches {
            results.push(bindings);
        }
    }
    results
}

/// Result of a textual query: solutions plus an optional parse diagnostic.
///
/// A malformed query is reported here rather than failing the caller; the
/// binding list is empty in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOutcome {
    pub bindings: Vec<Bindings>,
    pub error: Option<String>,
}

pub fn run_query(graph: &Graph, input: &str) -> QueryOutcome {
    match TriplePattern::parse(input) {
        Ok(pattern) => QueryOutcome {
            bindings: execute(graph, &pattern),
            error: None,
        },
        Err(error) => {
            tracing::warn!(%error, query = input, "Rejected malformed query");
            QueryOutcome {
                bindings: Vec::new(),
                error: Some(error.to_string()),
            }
        }
    }
}

/// Ready-made patterns for the common lookups.
pub mod patterns {
    use super::{TermPattern, TriplePattern};

    /// `?s ?p ?o`: every triple.
    pub fn all_triples() -> TriplePattern {
        TriplePattern::new(
            TermPattern::variable("s"),
            TermPattern::variable("p"),
            TermPattern::variable("o"),
        )
    }

    /// `?s <predicate> ?o`: every use of one predicate.
    pub fn by_predicate(predicate: &str) -> TriplePattern {
        TriplePattern::new(
            TermPattern::variable("s"),
            TermPattern::iri(predicate),
            TermPattern::variable("o"),
        )
    }

    /// `<subject> ?p ?o`: every property of one subject.
    pub fn subject_properties(subject: &str) -> TriplePattern {
        TriplePattern::new(
            TermPattern::iri(subject),
            TermPattern::variable("p"),
            TermPattern::variable("o"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{TermPattern, TriplePattern};

    #[test]
    fn parses_all_three_term_kinds() {
        let pattern = TriplePattern::parse("?who <http://xmlns.com/foaf/0.1/name> \"Ana\"")
            .expect("valid pattern");
        assert_eq!(pattern.subject, TermPattern::variable("who"));
        assert_eq!(
            pattern.predicate,
            TermPattern::iri("http://xmlns.com/foaf/0.1/name")
        );
        assert_eq!(pattern.object, TermPattern::literal("Ana"));
    }

    #[test]
    fn trailing_dot_is_optional() {
        let with_dot = TriplePattern::parse("?s ?p ?o .").expect("valid pattern");
        let without = TriplePattern::parse("?s ?p ?o").expect("valid pattern");
        assert_eq!(with_dot, without);
    }

    #[test]
    fn literals_may_contain_spaces() {
        let pattern = TriplePattern::parse("?s ?p \"Juan Pérez\"").expect("valid pattern");
        assert_eq!(pattern.object, TermPattern::literal("Juan Pérez"));
    }

    #[test]
    fn wrong_arity_is_malformed() {
        assert!(TriplePattern::parse("?s ?p").is_err());
        assert!(TriplePattern::parse("?s ?p ?o ?extra").is_err());
        assert!(TriplePattern::parse("").is_err());
    }

    #[test]
    fn unterminated_terms_are_malformed() {
        assert!(TriplePattern::parse("?s ?p \"open").is_err());
        assert!(TriplePattern::parse("?s <http://example.org ?o").is_err());
        assert!(TriplePattern::parse("?s ? ?o").is_err());
    }

    #[test]
    fn bare_words_are_rejected() {
        assert!(TriplePattern::parse("subject ?p ?o").is_err());
    }
}
