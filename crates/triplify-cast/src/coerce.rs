//! Datatype coercion for cell values.

use triplify_model::{Datatype, TripleObject, vocab::xsd};

use crate::options::CastOptions;

/// Coerce one non-empty cell value according to its declared datatype.
///
/// Total: a value that does not parse as the declared type degrades to a
/// plain string literal instead of failing the row.
pub fn coerce_value(value: &str, datatype: &Datatype, options: &CastOptions) -> TripleObject {
    match datatype {
        Datatype::String => TripleObject::literal(value, xsd::STRING),
        Datatype::Integer => match value.parse::<i64>() {
            Ok(parsed) => TripleObject::literal(parsed.to_string(), xsd::INTEGER),
            Err(_) => string_fallback(value, datatype),
        },
        Datatype::Decimal => match value.parse::<f64>() {
            // Rust's float Display never emits trailing zeros, so the
            // parsed form is already the canonical lexical one.
            Ok(parsed) if parsed.is_finite() => {
                TripleObject::literal(parsed.to_string(), xsd::DECIMAL)
            }
            _ => string_fallback(value, datatype),
        },
        Datatype::Boolean => {
            let lexical = if options.is_truthy(value) { "true" } else { "false" };
            TripleObject::literal(lexical, xsd::BOOLEAN)
        }
        Datatype::AnyUri => {
            if value.starts_with("http") {
                TripleObject::resource(value)
            } else {
                TripleObject::literal(value, xsd::ANY_URI)
            }
        }
        Datatype::Other(uri) => TripleObject::literal(value, uri.clone()),
    }
}

fn string_fallback(value: &str, datatype: &Datatype) -> TripleObject {
    tracing::debug!(value, declared = %datatype, "Kept as string after failed coercion");
    TripleObject::literal(value, xsd::STRING)
}

#[cfg(test)]
mod tests {
    use super::coerce_value;
    use crate::options::CastOptions;
    use triplify_model::{Datatype, TripleObject, vocab::xsd};

    fn coerce(value: &str, datatype: Datatype) -> TripleObject {
        coerce_value(value, &datatype, &CastOptions::default())
    }

    #[test]
    fn integers_parse_to_canonical_form() {
        assert_eq!(
            coerce("+0030", Datatype::Integer),
            TripleObject::literal("30", xsd::INTEGER)
        );
    }

    #[test]
    fn unparseable_integer_falls_back_to_string() {
        assert_eq!(
            coerce("thirty", Datatype::Integer),
            TripleObject::literal("thirty", xsd::STRING)
        );
    }

    #[test]
    fn decimals_lose_trailing_zeros() {
        assert_eq!(
            coerce("30.500", Datatype::Decimal),
            TripleObject::literal("30.5", xsd::DECIMAL)
        );
        assert_eq!(
            coerce("30", Datatype::Decimal),
            TripleObject::literal("30", xsd::DECIMAL)
        );
    }

    #[test]
    fn non_finite_decimals_fall_back_to_string() {
        assert_eq!(
            coerce("inf", Datatype::Decimal),
            TripleObject::literal("inf", xsd::STRING)
        );
        assert_eq!(
            coerce("NaN", Datatype::Decimal),
            TripleObject::literal("NaN", xsd::STRING)
        );
    }

    #[test]
    fn booleans_never_fail() {
        assert_eq!(
            coerce("Sí", Datatype::Boolean),
            TripleObject::literal("true", xsd::BOOLEAN)
        );
        assert_eq!(
            coerce("whatever", Datatype::Boolean),
            TripleObject::literal("false", xsd::BOOLEAN)
        );
    }

    #[test]
    fn http_values_become_resources() {
        assert_eq!(
            coerce("https://example.org/x", Datatype::AnyUri),
            TripleObject::resource("https://example.org/x")
        );
        assert_eq!(
            coerce("ftp://example.org/x", Datatype::AnyUri),
            TripleObject::literal("ftp://example.org/x", xsd::ANY_URI)
        );
    }

    #[test]
    fn other_datatypes_pass_through_unchanged() {
        assert_eq!(
            coerce("2024-01-01", Datatype::Other(xsd::DATE.to_string())),
            TripleObject::literal("2024-01-01", xsd::DATE)
        );
    }
}
