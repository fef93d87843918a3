//! Settings for triple materialization.

use triplify_model::vocab::DEFAULT_BASE_URI;

/// Lowercased cell values read as boolean true; anything else is false.
pub const DEFAULT_TRUTHY_TOKENS: [&str; 4] = ["true", "1", "yes", "sí"];

/// How rows become triples: subject base URI and the boolean vocabulary.
#[derive(Debug, Clone)]
pub struct CastOptions {
    /// Base URI for generated subjects (`{base_uri}entity_{n}`).
    pub base_uri: String,
    /// Values treated as true after lowercasing and trimming.
    pub truthy_tokens: Vec<String>,
}

impl CastOptions {
    pub fn new(base_uri: impl Into<String>) -> Self {
        CastOptions {
            base_uri: base_uri.into(),
            ..CastOptions::default()
        }
    }

    pub fn is_truthy(&self, value: &str) -> bool {
        let lowered = value.to_lowercase();
        self.truthy_tokens.iter().any(|token| token == &lowered)
    }
}

impl Default for CastOptions {
    fn default() -> Self {
        CastOptions {
            base_uri: DEFAULT_BASE_URI.to_string(),
            truthy_tokens: DEFAULT_TRUTHY_TOKENS
                .iter()
                .map(|token| (*token).to_string())
                .collect(),
        }
    }
}
