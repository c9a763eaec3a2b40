//! Fixed predicate and class vocabulary of the graph.

use oxrdf::NamedNode;

use crate::config::Namespaces;
use crate::error::Result;
use crate::types::Level;

/// ELI predicates and classes resolved against a namespace table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub is_part_of: NamedNode,
    pub has_part: NamedNode,
    pub realizes: NamedNode,
    pub is_realized_by: NamedNode,
    pub is_translation_of: NamedNode,
    pub has_translation: NamedNode,
    pub ensures_implementation_of: NamedNode,
    pub implementation_ensured_by: NamedNode,
    pub description: NamedNode,
    pub title: NamedNode,
    pub title_alternative: NamedNode,
    pub number: NamedNode,
    pub language: NamedNode,
    pub date_document: NamedNode,

    pub legal_resource: NamedNode,
    pub legal_resource_subdivision: NamedNode,
    pub legal_expression: NamedNode,

    levels: Vec<(Level, NamedNode)>,
}

impl Vocabulary {
    /// Resolve every term against the given namespaces.
    pub fn new(namespaces: &Namespaces) -> Result<Self> {
        let eli = |local: &str| namespaces.eli_node(local);
        let levels = Level::ALL
            .into_iter()
            .map(|level| Ok((level, namespaces.abstract_node(level.class_name())?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            is_part_of: eli("is_part_of")?,
            has_part: eli("has_part")?,
            realizes: eli("realizes")?,
            is_realized_by: eli("is_realized_by")?,
            is_translation_of: eli("is_translation_of")?,
            has_translation: eli("has_translation")?,
            ensures_implementation_of: eli("ensures_implementation_of")?,
            implementation_ensured_by: eli("implementation_ensured_by")?,
            description: eli("description")?,
            title: eli("title")?,
            title_alternative: eli("title_alternative")?,
            number: eli("number")?,
            language: eli("language")?,
            date_document: eli("date_document")?,
            legal_resource: eli("LegalResource")?,
            legal_resource_subdivision: eli("LegalResourceSubdivision")?,
            legal_expression: eli("LegalExpression")?,
            levels,
        })
    }

    /// Ontology class of a structural level (`gdpr:Article`).
    #[must_use]
    pub fn level_class(&self, level: Level) -> &NamedNode {
        // Every level is resolved in `new`
        &self.levels[level as usize].1
    }

    /// All structural classes in document order.
    pub fn level_classes(&self) -> impl Iterator<Item = (Level, &NamedNode)> + '_ {
        self.levels.iter().map(|(level, node)| (*level, node))
    }
}
