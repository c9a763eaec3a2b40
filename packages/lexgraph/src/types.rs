//! Core data types: locales, structural levels and the input document model.
//!
//! Input documents are nested JSON trees produced by an external segmenter.
//! Every node carries a `classType` tag and a `content` field that is either
//! a mapping of child nodes, a plain string, or a `[designator, text]` pair.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::config::validate_locale;
use crate::error::{GraphError, Result};

/// A `<jurisdiction>_<language>` locale such as `eu_en` or `pt_pt`.
///
/// A bare jurisdiction (`pt`) is accepted as well; its language is then the
/// jurisdiction code itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Parse and validate a locale code.
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        validate_locale(&code)?;
        Ok(Self(code))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Jurisdiction half (`eu` in `eu_en`).
    #[must_use]
    pub fn jurisdiction(&self) -> &str {
        self.0.split('_').next().unwrap_or(&self.0)
    }

    /// Language half (`en` in `eu_en`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.rsplit('_').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = GraphError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

/// Structural levels of a legal document, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Part,
    Chapter,
    Section,
    Article,
    Point,
    SubPoint,
    SubSubPoint,
}

impl Level {
    /// All levels in document order.
    pub const ALL: [Level; 7] = [
        Self::Part,
        Self::Chapter,
        Self::Section,
        Self::Article,
        Self::Point,
        Self::SubPoint,
        Self::SubSubPoint,
    ];

    /// Local name of the level's ontology class.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        match self {
            Self::Part => "Part",
            Self::Chapter => "Chapter",
            Self::Section => "Section",
            Self::Article => "Article",
            Self::Point => "Point",
            Self::SubPoint => "SubPoint",
            Self::SubSubPoint => "SubSubPoint",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// The `classType` tag of a document node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClassType {
    #[serde(rename = "PART")]
    Part,
    #[serde(rename = "CHAPTER")]
    Chapter,
    #[serde(rename = "SECTION")]
    Section,
    #[serde(rename = "ARTICLE")]
    Article,
    #[serde(rename = "POINT")]
    Point,
    #[serde(rename = "SUBPOINT")]
    SubPoint,
    #[serde(rename = "SUBSUBPOINT")]
    SubSubPoint,
    /// Heading text of the enclosing unit ("General provisions").
    #[serde(rename = "TITLE")]
    Title,
    /// Designator line of the enclosing unit ("CHAPTER IV", "Article 12").
    #[serde(rename = "TITLE_ID")]
    TitleId,
    /// Any tag this crate does not process.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ClassType {
    /// Get the tag as it appears in documents.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Part => "PART",
            Self::Chapter => "CHAPTER",
            Self::Section => "SECTION",
            Self::Article => "ARTICLE",
            Self::Point => "POINT",
            Self::SubPoint => "SUBPOINT",
            Self::SubSubPoint => "SUBSUBPOINT",
            Self::Title => "TITLE",
            Self::TitleId => "TITLE_ID",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Structural level named by this tag, if any.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        match self {
            Self::Part => Some(Level::Part),
            Self::Chapter => Some(Level::Chapter),
            Self::Section => Some(Level::Section),
            Self::Article => Some(Level::Article),
            Self::Point => Some(Level::Point),
            Self::SubPoint => Some(Level::SubPoint),
            Self::SubSubPoint => Some(Level::SubSubPoint),
            Self::Title | Self::TitleId | Self::Unknown => None,
        }
    }
}

/// Ordered child mapping of a node. Insertion order is document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Children(Vec<(String, DocumentNode)>);

impl Children {
    /// Insert a child; a repeated key replaces the earlier node in place.
    pub fn insert(&mut self, key: String, node: DocumentNode) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = node;
        } else {
            self.0.push((key, node));
        }
    }

    /// Iterate over `(key, node)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentNode)> + '_ {
        self.0.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub fn first(&self) -> Option<(&str, &DocumentNode)> {
        self.0.first().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, DocumentNode)> for Children {
    fn from_iter<I: IntoIterator<Item = (String, DocumentNode)>>(iter: I) -> Self {
        let mut children = Self::default();
        for (key, node) in iter {
            children.insert(key, node);
        }
        children
    }
}

struct ChildrenVisitor;

impl<'de> Visitor<'de> for ChildrenVisitor {
    type Value = Children;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of keys to document nodes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Children, A::Error> {
        let mut children = Children::default();
        while let Some((key, node)) = map.next_entry::<String, DocumentNode>()? {
            children.insert(key, node);
        }
        Ok(children)
    }
}

impl<'de> Deserialize<'de> for Children {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(ChildrenVisitor)
    }
}

/// The `content` field of a node.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Nested child nodes.
    Children(Children),
    /// Leaf text.
    Text(String),
    /// `[designator, text]` pair used by the lowest leaf levels.
    Pair(String, String),
    /// Any other JSON shape. Only title flattening accepts it.
    Other(serde_json::Value),
}

impl Content {
    /// Short name of the shape, used in error messages.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Children(_) | Self::Other(serde_json::Value::Object(_)) => "mapping",
            Self::Text(_) => "text",
            Self::Pair(..) => "pair",
            Self::Other(serde_json::Value::Null) => "missing",
            Self::Other(serde_json::Value::Array(_)) => "list",
            Self::Other(_) => "scalar",
        }
    }
}

/// Dispatches on the JSON shape directly, so a bad child node fails with its
/// own location instead of demoting the whole mapping.
struct ContentVisitor;

impl<'de> Visitor<'de> for ContentVisitor {
    type Value = Content;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a mapping of child nodes, a string or a [designator, text] pair")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<Content, A::Error> {
        ChildrenVisitor.visit_map(map).map(Content::Children)
    }

    fn visit_str<E: de::Error>(self, text: &str) -> std::result::Result<Content, E> {
        Ok(Content::Text(text.to_string()))
    }

    fn visit_string<E: de::Error>(self, text: String) -> std::result::Result<Content, E> {
        Ok(Content::Text(text))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Content, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element::<serde_json::Value>()? {
            items.push(item);
        }
        match items.as_slice() {
            [serde_json::Value::String(designator), serde_json::Value::String(text)] => {
                Ok(Content::Pair(designator.clone(), text.clone()))
            }
            _ => Ok(Content::Other(serde_json::Value::Array(items))),
        }
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Content, E> {
        Ok(Content::default())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Content, E> {
        Ok(Content::default())
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> std::result::Result<Content, E> {
        Ok(Content::Other(value.into()))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> std::result::Result<Content, E> {
        Ok(Content::Other(value.into()))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> std::result::Result<Content, E> {
        Ok(Content::Other(value.into()))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> std::result::Result<Content, E> {
        Ok(Content::Other(value.into()))
    }
}

impl<'de> Deserialize<'de> for Content {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ContentVisitor)
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::Other(serde_json::Value::Null)
    }
}

/// A node of the input document tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocumentNode {
    #[serde(rename = "classType", default)]
    pub class_type: ClassType,

    #[serde(default)]
    pub content: Content,

    /// Designators of articles in another jurisdiction's corpus.
    #[serde(rename = "relatedArticles", default, deserialize_with = "designators")]
    pub related_articles: Vec<String>,
}

impl DocumentNode {
    /// Create a node with the given tag and content.
    #[must_use]
    pub fn new(class_type: ClassType, content: Content) -> Self {
        Self {
            class_type,
            content,
            related_articles: Vec::new(),
        }
    }

    /// Set the related article designators.
    #[must_use]
    pub fn with_related_articles(
        mut self,
        designators: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.related_articles = designators.into_iter().map(Into::into).collect();
        self
    }
}

/// Accept designators written either as strings or as bare numbers.
fn designators<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    let values = Vec::<serde_json::Value>::deserialize(deserializer)?;
    values
        .into_iter()
        .map(|value| match value {
            serde_json::Value::String(s) => Ok(s),
            serde_json::Value::Number(n) => Ok(n.to_string()),
            other => Err(de::Error::custom(format!(
                "relatedArticles entry must be a string or number, got {other}"
            ))),
        })
        .collect()
}

/// A complete document tree for one (jurisdiction, locale) pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Document {
    entries: Children,
}

impl Document {
    /// Create a document from its top-level entries.
    #[must_use]
    pub fn new(entries: Children) -> Self {
        Self { entries }
    }

    /// Parse a document from JSON text.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| GraphError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json).map_err(|source| GraphError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Top-level entries in document order.
    #[must_use]
    pub fn entries(&self) -> &Children {
        &self.entries
    }
}
