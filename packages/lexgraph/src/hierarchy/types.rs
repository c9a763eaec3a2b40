//! Types for the structural hierarchy walk.

use crate::types::{ClassType, Level};

/// Which attribute a level's `TITLE` child fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    /// `eli:title` (parts and chapters).
    Title,
    /// `eli:description` (sections and articles).
    Description,
}

/// How a level's designator is read from its heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberRule {
    /// Roman numerals ("CHAPTER IV" => "IV").
    Roman,
    /// All digits ("Article 12" => "12").
    Digits,
}

/// Declarative specification of a structural level.
///
/// Defines which children recurse and how the remaining child tags turn into
/// attributes of the node.
#[derive(Debug, Clone)]
pub struct LevelSpec {
    pub level: Level,

    /// Levels this level recurses into.
    pub children: Vec<Level>,

    /// Child tags holding the designator line (number and `title_alternative`).
    pub heading_types: Vec<ClassType>,

    /// Child tags holding the heading text.
    pub title_types: Vec<ClassType>,

    /// Child tags holding this unit's own introductory text.
    ///
    /// They describe the enclosing node instead of becoming nodes.
    pub intro_types: Vec<ClassType>,

    pub title_field: TitleField,

    pub number_rule: NumberRule,

    /// Whether string or pair content is a valid leaf body.
    pub accepts_text: bool,

    /// Whether `relatedArticles` on this level produce transposition links.
    pub carries_transposition: bool,
}

impl LevelSpec {
    /// Create a new level specification.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            children: Vec::new(),
            heading_types: Vec::new(),
            title_types: vec![ClassType::Title],
            intro_types: Vec::new(),
            title_field: TitleField::Description,
            number_rule: NumberRule::Digits,
            accepts_text: false,
            carries_transposition: false,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Level>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_heading_types(mut self, types: impl IntoIterator<Item = ClassType>) -> Self {
        self.heading_types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_title_types(mut self, types: impl IntoIterator<Item = ClassType>) -> Self {
        self.title_types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_intro_types(mut self, types: impl IntoIterator<Item = ClassType>) -> Self {
        self.intro_types = types.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_title_field(mut self, field: TitleField) -> Self {
        self.title_field = field;
        self
    }

    #[must_use]
    pub fn with_number_rule(mut self, rule: NumberRule) -> Self {
        self.number_rule = rule;
        self
    }

    #[must_use]
    pub fn with_text_content(mut self, accepts_text: bool) -> Self {
        self.accepts_text = accepts_text;
        self
    }

    #[must_use]
    pub fn with_transposition(mut self, carries: bool) -> Self {
        self.carries_transposition = carries;
        self
    }

    /// Structural level a child tag recurses into, if this level accepts it.
    #[must_use]
    pub fn child_level(&self, class_type: ClassType) -> Option<Level> {
        class_type
            .level()
            .filter(|level| self.children.contains(level))
    }
}

/// Context for the walk.
///
/// Carries state through the recursive descent.
#[derive(Debug, Clone)]
pub struct WalkContext {
    /// Label of the document being walked, used in diagnostics.
    pub document: String,

    /// Current depth below the document root (0 = top-level entries).
    pub depth: usize,
}

impl WalkContext {
    /// Create a new walk context.
    #[must_use]
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            depth: 0,
        }
    }

    /// Create a context one level deeper.
    #[must_use]
    pub fn descend(&self) -> Self {
        let mut new = self.clone();
        new.depth += 1;
        new
    }
}
