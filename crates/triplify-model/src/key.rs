use serde::{Deserialize, Serialize};
use std::fmt;

/// A column header reduced to its canonical `snake_case` form.
///
/// Header matching happens purely on normalized keys, so `"First Name"`,
/// `"first-name"` and `"FIRST_NAME"` all compare equal. Keys deserialize
/// through the same normalization, so stored mappings cannot smuggle in a
/// non-canonical key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Normalize a raw header: Unicode lowercase, every run of characters
    /// outside `[a-z0-9]` collapses to a single `_`, with no leading or
    /// trailing `_`. Idempotent; an all-separator header yields the empty
    /// key.
    pub fn normalize(raw: &str) -> Self {
        let mut key = String::with_capacity(raw.len());
        for ch in raw.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                key.push(ch);
            } else if !key.is_empty() && !key.ends_with('_') {
                key.push('_');
            }
        }
        if key.ends_with('_') {
            key.pop();
        }
        ColumnKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `_`-separated tokens of the key, used for set-overlap scoring.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split('_').filter(|token| !token.is_empty())
    }
}

impl From<String> for ColumnKey {
    fn from(raw: String) -> Self {
        ColumnKey::normalize(&raw)
    }
}

impl From<&str> for ColumnKey {
    fn from(raw: &str) -> Self {
        ColumnKey::normalize(raw)
    }
}

impl From<ColumnKey> for String {
    fn from(key: ColumnKey) -> Self {
        key.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::ColumnKey;

    fn norm(raw: &str) -> String {
        ColumnKey::normalize(raw).as_str().to_string()
    }

    #[test]
    fn lowercases_and_replaces_separators() {
        assert_eq!(norm("First Name"), "first_name");
        assert_eq!(norm("first-name"), "first_name");
        assert_eq!(norm("FIRST_NAME"), "first_name");
        assert_eq!(norm("Email Address!"), "email_address");
    }

    #[test]
    fn collapses_runs_and_trims_edges() {
        assert_eq!(norm("  name  "), "name");
        assert_eq!(norm("user--id"), "user_id");
        assert_eq!(norm("a- _b"), "a_b");
        assert_eq!(norm("__company__"), "company");
    }

    #[test]
    fn non_ascii_becomes_separator() {
        assert_eq!(norm("Año"), "a_o");
        assert_eq!(norm("Nombre Completo"), "nombre_completo");
    }

    #[test]
    fn degenerate_headers_yield_empty_key() {
        assert!(ColumnKey::normalize("").is_empty());
        assert!(ColumnKey::normalize("!!!").is_empty());
        assert!(ColumnKey::normalize("  ").is_empty());
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in ["First Name", "Año", "user--id", "phone_number", ""] {
            let once = ColumnKey::normalize(raw);
            let twice = ColumnKey::normalize(once.as_str());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn tokens_skip_empty_segments() {
        let key = ColumnKey::normalize("home phone number");
        let tokens: Vec<&str> = key.tokens().collect();
        assert_eq!(tokens, vec!["home", "phone", "number"]);
        assert_eq!(ColumnKey::normalize("").tokens().count(), 0);
    }

    #[test]
    fn deserializes_through_normalization() {
        let key: ColumnKey = serde_json::from_str("\"First Name\"").expect("deserialize key");
        assert_eq!(key.as_str(), "first_name");
        let json = serde_json::to_string(&key).expect("serialize key");
        assert_eq!(json, "\"first_name\"");
    }
}
