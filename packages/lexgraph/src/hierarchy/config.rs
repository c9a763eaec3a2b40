//! Configuration for the legal document hierarchy.

use super::registry::HierarchyRegistry;
use super::types::{NumberRule, TitleField};
use crate::types::{ClassType, Level};

/// Create the hierarchy registry for EU and national legal texts.
///
/// ```text
/// part
/// └── chapter ("CHAPTER IV" / title)
///     ├── section ("Section 1" / description)
///     │   └── article
///     └── article ("Article 12" / description, relatedArticles)
///         └── point ("1. text" or intro POINT + subpoints)
///             └── subpoint ("(a)" pair or text)
///                 └── subsubpoint ("(i)" pair or text)
/// ```
#[must_use]
pub fn create_legal_hierarchy() -> HierarchyRegistry {
    HierarchyRegistry::new(|spec| match spec.level {
        // National laws group chapters under parts; the PART line is its title
        Level::Part => spec
            .with_children([Level::Chapter])
            .with_heading_types([ClassType::TitleId])
            .with_title_types([ClassType::Title, ClassType::Part])
            .with_title_field(TitleField::Title)
            .with_number_rule(NumberRule::Roman),

        Level::Chapter => spec
            .with_children([Level::Section, Level::Article])
            .with_heading_types([ClassType::TitleId, ClassType::Chapter])
            .with_title_field(TitleField::Title)
            .with_number_rule(NumberRule::Roman),

        Level::Section => spec
            .with_children([Level::Article])
            .with_heading_types([ClassType::TitleId, ClassType::Section]),

        Level::Article => spec
            .with_children([Level::Point])
            .with_heading_types([ClassType::TitleId, ClassType::Article])
            .with_transposition(true),

        // Leaf levels: text bodies, or an intro line of their own tag plus children
        Level::Point => spec
            .with_children([Level::SubPoint])
            .with_intro_types([ClassType::Point])
            .with_text_content(true),

        Level::SubPoint => spec
            .with_children([Level::SubSubPoint])
            .with_intro_types([ClassType::SubPoint])
            .with_text_content(true),

        Level::SubSubPoint => spec
            .with_intro_types([ClassType::SubSubPoint])
            .with_text_content(true),
    })
}
