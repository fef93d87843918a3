//! Built-in and user-defined template catalogs.

use triplify_model::{Template, vocab};

use crate::error::MapError;

/// An ordered, validated collection of templates.
///
/// Template order is registration order; the selector uses it as the
/// deterministic tie-break. The designated fallback template is applied
/// when no template scores well enough for a header set.
#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
    fallback: String,
}

impl TemplateCatalog {
    /// Validate and build a catalog: at least one template, unique names,
    /// and a fallback that is actually registered.
    pub fn new(templates: Vec<Template>, fallback: impl Into<String>) -> Result<Self, MapError> {
        let fallback = fallback.into();
        if templates.is_empty() {
            return Err(MapError::EmptyCatalog);
        }
        for (i, template) in templates.iter().enumerate() {
            if templates[..i].iter().any(|other| other.name == template.name) {
                return Err(MapError::DuplicateTemplate {
                    name: template.name.clone(),
                });
            }
        }
        if !templates.iter().any(|template| template.name == fallback) {
            return Err(MapError::UnknownFallback { name: fallback });
        }
        Ok(Self {
            templates,
            fallback,
        })
    }

    /// The catalog used when no custom templates are supplied: `personas`
    /// for person-shaped tables, `general` for everything else (and as the
    /// fallback).
    pub fn builtin() -> Self {
        let personas = Template::new("personas", "Personas", "Mapping tuned for person records")
            .with_entry("name", vocab::foaf::NAME, vocab::xsd::STRING)
            .with_entry("email", vocab::foaf::EMAIL, vocab::xsd::STRING)
            .with_entry("age", vocab::foaf::AGE, vocab::xsd::INTEGER)
            .with_entry("city", vocab::schema::ADDRESS_LOCALITY, vocab::xsd::STRING)
            .with_entry("phone", vocab::foaf::PHONE, vocab::xsd::STRING)
            .with_entry("company", vocab::foaf::ORGANIZATION, vocab::xsd::STRING);

        let general = Template::new("general", "General", "Generic mapping for tabular data")
            .with_entry("id", vocab::schema::IDENTIFIER, vocab::xsd::STRING)
            .with_entry("name", vocab::rdfs::LABEL, vocab::xsd::STRING)
            .with_entry("description", vocab::dcterms::DESCRIPTION, vocab::xsd::STRING)
            .with_entry("date", vocab::schema::DATE_CREATED, vocab::xsd::DATE)
            .with_entry("url", vocab::schema::URL, vocab::xsd::ANY_URI);

        // Hand-maintained, so the Vec is built directly; names are unique
        // and the fallback is present by construction.
        Self {
            templates: vec![personas, general],
            fallback: "general".to_string(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.name == name)
    }

    /// All templates in registration order.
    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    /// Template names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.templates
            .iter()
            .map(|template| template.name.clone())
            .collect()
    }

    /// The fallback template; its presence is validated at construction.
    pub fn fallback(&self) -> &Template {
        self.get(&self.fallback).unwrap_or(&self.templates[0])
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::TemplateCatalog;
    use crate::error::MapError;
    use triplify_model::{ColumnKey, Template, vocab};

    #[test]
    fn builtin_registers_personas_then_general() {
        let catalog = TemplateCatalog::builtin();
        assert_eq!(catalog.names(), vec!["personas", "general"]);
        assert_eq!(catalog.fallback().name, "general");

        let personas = catalog.get("personas").expect("personas template");
        assert_eq!(personas.entries.len(), 6);
        let age = personas
            .entry(&ColumnKey::normalize("age"))
            .expect("age entry");
        assert_eq!(age.predicate, vocab::foaf::AGE);
        assert_eq!(age.datatype.uri(), vocab::xsd::INTEGER);

        let general = catalog.get("general").expect("general template");
        assert_eq!(general.entries.len(), 5);
        let url = general
            .entry(&ColumnKey::normalize("url"))
            .expect("url entry");
        assert_eq!(url.predicate, vocab::schema::URL);
        assert_eq!(url.datatype.uri(), vocab::xsd::ANY_URI);
    }

    #[test]
    fn unknown_template_is_none() {
        assert!(TemplateCatalog::builtin().get("missing").is_none());
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = TemplateCatalog::new(
            vec![Template::new("a", "A", ""), Template::new("a", "A again", "")],
            "a",
        )
        .expect_err("duplicate should fail");
        assert!(matches!(err, MapError::DuplicateTemplate { name } if name == "a"));
    }

    #[test]
    fn rejects_unregistered_fallback() {
        let err = TemplateCatalog::new(vec![Template::new("a", "A", "")], "b")
            .expect_err("fallback should fail");
        assert!(matches!(err, MapError::UnknownFallback { name } if name == "b"));
    }

    #[test]
    fn rejects_empty_catalog() {
        let err = TemplateCatalog::new(vec![], "a").expect_err("empty should fail");
        assert!(matches!(err, MapError::EmptyCatalog));
    }
}
