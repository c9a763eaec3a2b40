//! Configuration constants, namespace table and validation functions.

use std::sync::LazyLock;

use chrono::NaiveDate;
use oxrdf::NamedNode;
use regex::Regex;
use serde::Deserialize;

use crate::error::{GraphError, Result};

/// Namespace of the locale-neutral (Work level) entities.
pub const ABSTRACT_NAMESPACE: &str = "http://www.semanticweb.org/knorri/ontologies/2024/11/gdpr#";

/// Namespace of the per-locale realizations (Expression level).
pub const CONCRETE_NAMESPACE: &str = "http://www.semanticweb.org/knorri/ontologies/2024/11/rgdpr#";

/// European Legislation Identifier ontology.
pub const ELI_NAMESPACE: &str = "http://data.europa.eu/eli/ontology#";

/// Key of the top-level EU resource when the manifest does not name one.
pub const DEFAULT_ROOT: &str = "GDPR";

/// Prefix a national article designator is matched against (`art_12`).
pub const ARTICLE_KEY_PREFIX: &str = "art_";

/// Locale pattern: jurisdiction, optionally followed by `_` and a language.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LOCALE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}(?:_[a-z]{2})?$").expect("valid regex"));

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate a locale code.
///
/// # Examples
/// ```
/// use lexgraph::config::validate_locale;
///
/// assert!(validate_locale("eu_en").is_ok());
/// assert!(validate_locale("pt").is_ok());
/// assert!(validate_locale("EU-EN").is_err());
/// ```
pub fn validate_locale(code: &str) -> Result<()> {
    if LOCALE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(GraphError::InvalidLocale(code.to_string()))
    }
}

/// Validate and parse a date (YYYY-MM-DD).
///
/// # Examples
/// ```
/// use lexgraph::config::validate_date;
///
/// assert!(validate_date("2016-04-27").is_ok());
/// assert!(validate_date("27-04-2016").is_err());
/// assert!(validate_date("2016-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<NaiveDate> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(GraphError::InvalidDate(date_str.to_string()));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| GraphError::InvalidDate(date_str.to_string()))
}

/// Build a named node, mapping IRI errors into [`GraphError::InvalidIri`].
pub fn named_node(iri: String) -> Result<NamedNode> {
    NamedNode::new(iri.clone()).map_err(|source| GraphError::InvalidIri { iri, source })
}

/// Immutable namespace table shared by every stage of a run.
///
/// Every base is checked once on construction; node IRIs are then built by
/// appending a local name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "NamespaceOverrides")]
pub struct Namespaces {
    abstract_base: String,
    concrete_base: String,
    eli: String,
}

/// Raw manifest form of [`Namespaces`], every field optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NamespaceOverrides {
    #[serde(rename = "abstract")]
    abstract_base: Option<String>,
    #[serde(rename = "concrete")]
    concrete_base: Option<String>,
    eli: Option<String>,
}

impl TryFrom<NamespaceOverrides> for Namespaces {
    type Error = GraphError;

    fn try_from(raw: NamespaceOverrides) -> Result<Self> {
        Self::new(
            raw.abstract_base.as_deref().unwrap_or(ABSTRACT_NAMESPACE),
            raw.concrete_base.as_deref().unwrap_or(CONCRETE_NAMESPACE),
            raw.eli.as_deref().unwrap_or(ELI_NAMESPACE),
        )
    }
}

impl Namespaces {
    /// Create a namespace table, validating every base.
    pub fn new(
        abstract_base: impl Into<String>,
        concrete_base: impl Into<String>,
        eli: impl Into<String>,
    ) -> Result<Self> {
        let namespaces = Self {
            abstract_base: abstract_base.into(),
            concrete_base: concrete_base.into(),
            eli: eli.into(),
        };
        for base in [
            &namespaces.abstract_base,
            &namespaces.concrete_base,
            &namespaces.eli,
        ] {
            named_node(format!("{base}x"))?;
        }
        Ok(namespaces)
    }

    #[must_use]
    pub fn abstract_base(&self) -> &str {
        &self.abstract_base
    }

    #[must_use]
    pub fn concrete_base(&self) -> &str {
        &self.concrete_base
    }

    #[must_use]
    pub fn eli(&self) -> &str {
        &self.eli
    }

    /// IRI of a locale-neutral entity.
    pub fn abstract_node(&self, local: &str) -> Result<NamedNode> {
        named_node(format!("{}{local}", self.abstract_base))
    }

    /// IRI of a per-locale realization.
    pub fn concrete_node(&self, local: &str) -> Result<NamedNode> {
        named_node(format!("{}{local}", self.concrete_base))
    }

    /// IRI of an ELI ontology term.
    pub fn eli_node(&self, local: &str) -> Result<NamedNode> {
        named_node(format!("{}{local}", self.eli))
    }
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            abstract_base: ABSTRACT_NAMESPACE.to_string(),
            concrete_base: CONCRETE_NAMESPACE.to_string(),
            eli: ELI_NAMESPACE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_locale() {
        assert!(validate_locale("eu_en").is_ok());
        assert!(validate_locale("pt_pt").is_ok());
        assert!(validate_locale("de").is_ok());
        assert!(validate_locale("").is_err());
        assert!(validate_locale("eu_eng").is_err());
        assert!(validate_locale("eu-en").is_err());
        assert!(validate_locale("EU_EN").is_err());
    }

    #[test]
    fn test_validate_date() {
        let date = validate_date("2016-04-27").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2016, 4, 27).unwrap());
        assert!(validate_date("2016-02-30").is_err());
        assert!(validate_date("2016-4-27").is_err());
    }

    #[test]
    fn test_namespaces_default_builds_nodes() {
        let ns = Namespaces::default();
        let node = ns.concrete_node("cpt_I_eu_en").unwrap();
        assert_eq!(node.as_str(), format!("{CONCRETE_NAMESPACE}cpt_I_eu_en"));
        assert_eq!(ns.eli_node("title").unwrap().as_str(), format!("{ELI_NAMESPACE}title"));
    }

    #[test]
    fn test_namespaces_reject_invalid_base() {
        let result = Namespaces::new("not an iri ", CONCRETE_NAMESPACE, ELI_NAMESPACE);
        assert!(matches!(result, Err(GraphError::InvalidIri { .. })));
    }

    #[test]
    fn test_invalid_local_name_is_reported() {
        let ns = Namespaces::default();
        assert!(ns.abstract_node("cpt I").is_err());
    }

    #[test]
    fn test_namespace_overrides_fill_defaults() {
        let ns: Namespaces =
            serde_yaml_ng::from_str("abstract: \"http://example.org/law#\"\n").unwrap();
        assert_eq!(ns.abstract_base(), "http://example.org/law#");
        assert_eq!(ns.concrete_base(), CONCRETE_NAMESPACE);
        assert_eq!(ns.eli(), ELI_NAMESPACE);
    }
}
