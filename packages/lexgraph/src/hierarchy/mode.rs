//! Realization modes and the per-mode policy that drives the walk.
//!
//! The same structural walk runs four times with different identifier
//! suffixes, namespaces and link sets:
//!
//! | mode               | namespace | suffix               | counterpart link          |
//! |--------------------|-----------|----------------------|---------------------------|
//! | `Abstract`         | abstract  | none                 | `is_realized_by` each EU locale |
//! | `Concrete`         | concrete  | `_<locale>`          | `realizes` abstract node  |
//! | `NationalAbstract` | abstract  | `_abstract_<locale>` | `is_realized_by` national concrete |
//! | `NationalConcrete` | concrete  | `_<locale>`          | `realizes` national abstract |

use oxrdf::NamedNode;

use crate::config::Namespaces;
use crate::corpus::ArticleIndex;
use crate::error::Result;
use crate::identifier::{strip_locale, swap_locale};
use crate::types::Locale;

/// Marker inserted between path key and locale for national abstract nodes.
pub const NATIONAL_ABSTRACT_MARKER: &str = "abstract";

/// Which family of nodes a walk produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realization {
    /// Jurisdiction- and language-neutral Work.
    Abstract,
    /// EU text in one language.
    Concrete,
    /// Work of a national law, scoped to its own locale.
    NationalAbstract,
    /// National law text, linked to the EU articles it transposes.
    NationalConcrete,
}

impl Realization {
    /// Whether nodes of this mode are language realizations.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        matches!(self, Self::Concrete | Self::NationalConcrete)
    }
}

/// Target of the transposition links of a national corpus.
#[derive(Debug, Clone, Copy)]
pub struct Transposition<'a> {
    pub index: &'a ArticleIndex,
    /// EU locale whose concrete articles are linked.
    pub target: &'a Locale,
}

/// Per-mode parameters of the walk.
#[derive(Debug, Clone)]
pub struct ModePolicy<'a> {
    realization: Realization,
    namespaces: &'a Namespaces,
    locale: Option<Locale>,
    realized_in: Vec<Locale>,
    siblings: Vec<Locale>,
    transposition: Option<Transposition<'a>>,
}

impl<'a> ModePolicy<'a> {
    /// EU abstract mode, realized in every given locale.
    #[must_use]
    pub fn eu_abstract(namespaces: &'a Namespaces, locales: &[Locale]) -> Self {
        Self {
            realization: Realization::Abstract,
            namespaces,
            locale: None,
            realized_in: locales.to_vec(),
            siblings: Vec::new(),
            transposition: None,
        }
    }

    /// EU concrete mode for one locale; every other locale is a translation.
    #[must_use]
    pub fn eu_concrete(namespaces: &'a Namespaces, locale: &Locale, locales: &[Locale]) -> Self {
        Self {
            realization: Realization::Concrete,
            namespaces,
            locale: Some(locale.clone()),
            realized_in: Vec::new(),
            siblings: locales.iter().filter(|l| *l != locale).cloned().collect(),
            transposition: None,
        }
    }

    /// National abstract mode.
    #[must_use]
    pub fn national_abstract(namespaces: &'a Namespaces, locale: &Locale) -> Self {
        Self {
            realization: Realization::NationalAbstract,
            namespaces,
            locale: Some(locale.clone()),
            realized_in: vec![locale.clone()],
            siblings: Vec::new(),
            transposition: None,
        }
    }

    /// National concrete mode, optionally linking articles to the EU text.
    #[must_use]
    pub fn national_concrete(
        namespaces: &'a Namespaces,
        locale: &Locale,
        transposition: Option<Transposition<'a>>,
    ) -> Self {
        Self {
            realization: Realization::NationalConcrete,
            namespaces,
            locale: Some(locale.clone()),
            realized_in: Vec::new(),
            siblings: Vec::new(),
            transposition,
        }
    }

    #[must_use]
    pub fn realization(&self) -> Realization {
        self.realization
    }

    #[must_use]
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    /// Locale token appended to path keys (`eu_en`, `abstract_pt_pt`, or empty).
    #[must_use]
    pub fn token(&self) -> String {
        match (&self.realization, &self.locale) {
            (Realization::NationalAbstract, Some(locale)) => {
                format!("{NATIONAL_ABSTRACT_MARKER}_{locale}")
            }
            (Realization::Abstract, _) | (_, None) => String::new(),
            (_, Some(locale)) => locale.to_string(),
        }
    }

    /// Suffix appended to path keys, including the leading `_`.
    #[must_use]
    pub fn suffix(&self) -> String {
        let token = self.token();
        if token.is_empty() {
            token
        } else {
            format!("_{token}")
        }
    }

    /// Local name of the node with the given path key.
    #[must_use]
    pub fn local_id(&self, key: &str) -> String {
        format!("{key}{}", self.suffix())
    }

    /// IRI of a node of this mode given its local name.
    pub fn node(&self, local: &str) -> Result<NamedNode> {
        if self.realization.is_concrete() {
            self.namespaces.concrete_node(local)
        } else {
            self.namespaces.abstract_node(local)
        }
    }

    /// Nodes on the other side of the Work/Expression split.
    ///
    /// Abstract modes point at their realizations, concrete modes at the Work
    /// they realize.
    pub fn counterparts(&self, local: &str) -> Result<Vec<NamedNode>> {
        let key = strip_locale(local, &self.token());
        match self.realization {
            Realization::Abstract | Realization::NationalAbstract => self
                .realized_in
                .iter()
                .map(|locale| self.namespaces.concrete_node(&format!("{key}_{locale}")))
                .collect(),
            Realization::Concrete => Ok(vec![self.namespaces.abstract_node(key)?]),
            Realization::NationalConcrete => match &self.locale {
                Some(locale) => Ok(vec![self.namespaces.abstract_node(&format!(
                    "{key}_{NATIONAL_ABSTRACT_MARKER}_{locale}"
                ))?]),
                None => Ok(Vec::new()),
            },
        }
    }

    /// Sibling-locale translations of a node (EU concrete mode only).
    pub fn translations(&self, local: &str) -> Result<Vec<NamedNode>> {
        let token = self.token();
        self.siblings
            .iter()
            .map(|sibling| {
                self.namespaces
                    .concrete_node(&swap_locale(local, &token, sibling.as_str()))
            })
            .collect()
    }

    /// Concrete EU article a national designator resolves to.
    pub fn implemented_article(&self, designator: &str) -> Result<Option<NamedNode>> {
        let Some(transposition) = self.transposition else {
            return Ok(None);
        };
        transposition
            .index
            .resolve(designator)
            .map(|key| {
                self.namespaces
                    .concrete_node(&format!("{key}_{}", transposition.target))
            })
            .transpose()
    }

    /// Whether children copy every `is_part_of` target of their parent.
    #[must_use]
    pub fn inherits_ancestry(&self) -> bool {
        self.realization.is_concrete()
    }

    /// Whether literal attributes are emitted.
    #[must_use]
    pub fn emits_attributes(&self) -> bool {
        self.realization.is_concrete()
    }

    /// Whether this mode produces transposition links at all.
    #[must_use]
    pub fn has_transposition(&self) -> bool {
        self.transposition.is_some()
    }
}
