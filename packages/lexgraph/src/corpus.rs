//! Article lookup table used to resolve `relatedArticles` designators.
//!
//! National articles name the EU articles they transpose by bare designator
//! ("5", "9a"). The table holds the path keys of every article of the target
//! corpus and maps a designator to exactly one of them.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::ARTICLE_KEY_PREFIX;
use crate::error::{GraphError, Result};
use crate::identifier::{child_path, last_component};
use crate::types::{ClassType, Content, Document, DocumentNode};

/// How a designator is matched against the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// The last path component must equal `art_<designator>`.
    #[default]
    Exact,
    /// First identifier containing `art_<designator>` anywhere.
    ///
    /// "1" also matches `art_10`; kept for reproducing older graphs.
    Substring,
}

/// Known article identifiers of one corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleIndex {
    identifiers: Vec<String>,
    policy: MatchPolicy,
}

impl ArticleIndex {
    /// Create an index from a flat list of article path keys.
    #[must_use]
    pub fn from_identifiers(identifiers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            identifiers: identifiers.into_iter().map(Into::into).collect(),
            policy: MatchPolicy::default(),
        }
    }

    /// Create an index from every article of a document tree.
    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        Self::from_identifiers(collect_article_ids(document))
    }

    /// Load a lookup table written as a JSON array of path keys.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| GraphError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        let identifiers: Vec<String> =
            serde_json::from_str(&json).map_err(|source| GraphError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_identifiers(identifiers))
    }

    /// Set the match policy.
    #[must_use]
    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn identifiers(&self) -> &[String] {
        &self.identifiers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.identifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.identifiers.is_empty()
    }

    /// Resolve a designator to an article path key.
    ///
    /// Absent and ambiguous designators resolve to `None` with a warning.
    #[must_use]
    pub fn resolve(&self, designator: &str) -> Option<&str> {
        let designator = designator.trim();
        let pattern = format!("{ARTICLE_KEY_PREFIX}{designator}");
        if designator.is_empty() {
            return None;
        }

        match self.policy {
            MatchPolicy::Substring => {
                let found = self
                    .identifiers
                    .iter()
                    .find(|id| id.contains(&pattern))
                    .map(String::as_str);
                if found.is_none() {
                    tracing::warn!(designator = %designator, "No article matches related article");
                }
                found
            }
            MatchPolicy::Exact => {
                let mut matches = self
                    .identifiers
                    .iter()
                    .filter(|id| last_component(id) == pattern);
                match (matches.next(), matches.next()) {
                    (Some(found), None) => Some(found.as_str()),
                    (None, _) => {
                        tracing::warn!(designator = %designator, "No article matches related article");
                        None
                    }
                    (Some(first), Some(second)) => {
                        tracing::warn!(
                            designator = %designator,
                            first = %first,
                            second = %second,
                            "Ambiguous related article, no link emitted"
                        );
                        None
                    }
                }
            }
        }
    }
}

/// Path keys of every ARTICLE node in a document, in document order.
#[must_use]
pub fn collect_article_ids(document: &Document) -> Vec<String> {
    let mut ids = Vec::new();
    for (key, node) in document.entries().iter() {
        collect_from(node, &child_path(None, key), &mut ids);
    }
    ids
}

fn collect_from(node: &DocumentNode, path: &str, ids: &mut Vec<String>) {
    if node.class_type == ClassType::Article {
        ids.push(path.to_string());
    }
    if let Content::Children(children) = &node.content {
        for (key, child) in children.iter() {
            if child.class_type.level().is_some() {
                collect_from(child, &child_path(Some(path), key), ids);
            }
        }
    }
}
