//! Graph walker that turns a document tree into triples.
//!
//! One recursive routine serves every structural level and every realization
//! mode; the level's [`LevelSpec`] and the run's [`ModePolicy`] decide what is
//! emitted. Each node goes through the same steps: self-loop guard, type,
//! Work/Expression link, containment, translations, transposition, then its
//! children.

use oxrdf::vocab::rdfs;
use oxrdf::{Literal, NamedNode, Term};

use super::mode::ModePolicy;
use super::registry::HierarchyRegistry;
use super::types::{LevelSpec, NumberRule, TitleField, WalkContext};
use crate::error::{GraphError, Result};
use crate::identifier::{child_path, designator_from_id, is_self_loop};
use crate::literal::{
    all_numbers, clean_designator, flatten, normalize, numbers_only, roman_numerals,
};
use crate::sink::TripleSink;
use crate::types::{Content, Document, DocumentNode, Level};
use crate::vocab::Vocabulary;

/// A node being processed: its identity and its parent.
struct Frame<'f> {
    key: &'f str,
    local: String,
    subject: NamedNode,
    parent: &'f NamedNode,
}

/// Walks document trees for one realization mode.
pub struct GraphWalker<'a, S: TripleSink> {
    sink: &'a mut S,
    vocab: &'a Vocabulary,
    hierarchy: &'a HierarchyRegistry,
    policy: &'a ModePolicy<'a>,
}

impl<'a, S: TripleSink> GraphWalker<'a, S> {
    /// Create a new walker.
    pub fn new(
        sink: &'a mut S,
        vocab: &'a Vocabulary,
        hierarchy: &'a HierarchyRegistry,
        policy: &'a ModePolicy<'a>,
    ) -> Self {
        Self {
            sink,
            vocab,
            hierarchy,
            policy,
        }
    }

    /// Emit the top-level resource of this mode and return its node.
    ///
    /// Abstract roots are `eli:LegalResource`s labelled with their key;
    /// concrete roots are `eli:LegalExpression`s carrying language and title.
    pub fn seed_root(&mut self, root_key: &str, title: Option<&str>) -> Result<NamedNode> {
        let local = self.policy.local_id(root_key);
        let subject = self.policy.node(&local)?;

        if self.policy.realization().is_concrete() {
            self.add_type(&subject, &self.vocab.legal_expression);
            self.add_language(&subject);
            if let Some(title) = title.map(normalize).filter(|t| !t.is_empty()) {
                self.add_literal(&subject, &self.vocab.title, &title);
            }
        } else {
            self.add_type(&subject, &self.vocab.legal_resource);
            self.sink.literal(
                subject.as_ref(),
                rdfs::LABEL,
                &Literal::new_simple_literal(root_key),
            );
        }
        self.link_counterparts(&subject, &local)?;

        Ok(subject)
    }

    /// Walk every top-level Part or Chapter of a document under `root`.
    pub fn walk_document(
        &mut self,
        document: &Document,
        root: &NamedNode,
        context: &WalkContext,
    ) -> Result<()> {
        for (key, node) in document.entries().iter() {
            match node.class_type.level() {
                Some(level @ (Level::Part | Level::Chapter)) => {
                    self.walk(level, node, &child_path(None, key), root, context)?;
                }
                _ => {
                    tracing::debug!(
                        document = %context.document,
                        key = %key,
                        class_type = node.class_type.as_str(),
                        depth = context.depth,
                        "Skipping top-level entry that is not a part or chapter"
                    );
                }
            }
        }
        Ok(())
    }

    /// Process one node at `level` whose path key is `key`.
    pub fn walk(
        &mut self,
        level: Level,
        node: &DocumentNode,
        key: &str,
        parent: &NamedNode,
        context: &WalkContext,
    ) -> Result<()> {
        let local = self.policy.local_id(key);
        if is_self_loop(&local, &self.policy.suffix()) {
            tracing::debug!(key = %key, depth = context.depth, "Skipping self-referencing node");
            return Ok(());
        }

        let spec = self.hierarchy.spec(level);

        let frame = Frame {
            key,
            subject: self.policy.node(&local)?,
            local,
            parent,
        };

        // Type, realization link and containment
        if self.policy.realization().is_concrete() {
            self.add_type(&frame.subject, &self.vocab.legal_expression);
            self.add_language(&frame.subject);
        } else {
            self.add_type(&frame.subject, self.vocab.level_class(level));
        }
        self.link_counterparts(&frame.subject, &frame.local)?;
        self.attach(&frame.subject, parent);

        for translation in self.policy.translations(&frame.local)? {
            self.sink.add(
                frame.subject.as_ref(),
                self.vocab.is_translation_of.as_ref(),
                translation.as_ref().into(),
            );
            self.sink.add(
                frame.subject.as_ref(),
                self.vocab.has_translation.as_ref(),
                translation.as_ref().into(),
            );
        }

        if spec.carries_transposition {
            self.link_transpositions(&frame.subject, node)?;
        }

        match &node.content {
            Content::Children(children) => {
                let child_context = context.descend();
                for (child_key, child) in children.iter() {
                    self.visit_child(spec, &frame, child_key, child, &child_context)?;
                }
            }
            Content::Text(_) | Content::Pair(..) if spec.accepts_text => {
                if self.policy.emits_attributes() {
                    self.describe(&frame, &node.content);
                }
            }
            other => {
                return Err(GraphError::MalformedDocument {
                    document: context.document.clone(),
                    key: key.to_string(),
                    level: level.to_string(),
                    found: other.shape().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Dispatch a child on its tag: recurse, or turn it into an attribute.
    fn visit_child(
        &mut self,
        spec: &LevelSpec,
        frame: &Frame<'_>,
        child_key: &str,
        child: &DocumentNode,
        context: &WalkContext,
    ) -> Result<()> {
        if let Some(child_level) = spec.child_level(child.class_type) {
            let path = child_path(Some(frame.key), child_key);
            return self.walk(child_level, child, &path, &frame.subject, context);
        }

        if !self.policy.emits_attributes() {
            return Ok(());
        }

        let class_type = child.class_type;
        if spec.intro_types.contains(&class_type) {
            self.describe(frame, &child.content);
        } else if spec.heading_types.contains(&class_type) {
            self.heading(spec, &frame.subject, &child.content);
        } else if spec.title_types.contains(&class_type) {
            let text = normalize(&flatten(&child.content));
            if !text.is_empty() {
                let predicate = match spec.title_field {
                    TitleField::Title => &self.vocab.title,
                    TitleField::Description => &self.vocab.description,
                };
                self.add_literal(&frame.subject, predicate, &text);
            }
        } else {
            tracing::debug!(
                key = %child_key,
                class_type = class_type.as_str(),
                level = %spec.level,
                depth = context.depth,
                "Ignoring child"
            );
        }
        Ok(())
    }

    /// Number and `title_alternative` from a designator line.
    fn heading(&mut self, spec: &LevelSpec, subject: &NamedNode, content: &Content) {
        let text = normalize(&flatten(content));
        let number = match spec.number_rule {
            NumberRule::Roman => roman_numerals(&text),
            NumberRule::Digits => all_numbers(&text),
        };
        if !number.is_empty() {
            self.add_literal(subject, &self.vocab.number, &number);
        }
        if !text.is_empty() {
            self.add_literal(subject, &self.vocab.title_alternative, &text);
        }
    }

    /// Description, number and derived `title_alternative` of a leaf body.
    fn describe(&mut self, frame: &Frame<'_>, content: &Content) {
        let (number, text) = match content {
            Content::Text(text) => (numbers_only(text), text.clone()),
            Content::Pair(designator, text) => (clean_designator(designator), text.clone()),
            other => {
                let text = flatten(other);
                (numbers_only(&text), text)
            }
        };

        let description = normalize(&text);
        if !description.is_empty() {
            self.add_literal(&frame.subject, &self.vocab.description, &description);
        }

        let number = if number.is_empty() {
            designator_from_id(&frame.local, &self.policy.token()).to_string()
        } else {
            number
        };
        if number.is_empty() {
            return;
        }
        self.add_literal(&frame.subject, &self.vocab.number, &number);

        let alternatives = self
            .sink
            .objects(frame.parent.as_ref(), self.vocab.title_alternative.as_ref());
        for alternative in alternatives {
            if let Term::Literal(alternative) = alternative {
                let value = format!("{}-{number}", alternative.value());
                self.add_literal(&frame.subject, &self.vocab.title_alternative, &value);
            }
        }
    }

    /// `is_part_of`/`has_part` to the parent, plus the parent's ancestors in
    /// concrete modes.
    ///
    /// Ancestors are read when the child is attached; targets the parent gains
    /// later are not propagated.
    fn attach(&mut self, subject: &NamedNode, parent: &NamedNode) {
        let vocab = self.vocab;
        self.sink.link(
            subject.as_ref(),
            vocab.is_part_of.as_ref(),
            vocab.has_part.as_ref(),
            parent.as_ref(),
        );

        if !self.policy.inherits_ancestry() {
            return;
        }
        for ancestor in self.sink.objects(parent.as_ref(), vocab.is_part_of.as_ref()) {
            if let Term::NamedNode(ancestor) = ancestor {
                self.sink.link(
                    subject.as_ref(),
                    vocab.is_part_of.as_ref(),
                    vocab.has_part.as_ref(),
                    ancestor.as_ref(),
                );
            }
        }
    }

    fn link_counterparts(&mut self, subject: &NamedNode, local: &str) -> Result<()> {
        let vocab = self.vocab;
        let (forward, backward) = if self.policy.realization().is_concrete() {
            (&vocab.realizes, &vocab.is_realized_by)
        } else {
            (&vocab.is_realized_by, &vocab.realizes)
        };
        for counterpart in self.policy.counterparts(local)? {
            self.sink.link(
                subject.as_ref(),
                forward.as_ref(),
                backward.as_ref(),
                counterpart.as_ref(),
            );
        }
        Ok(())
    }

    fn link_transpositions(&mut self, subject: &NamedNode, node: &DocumentNode) -> Result<()> {
        if !self.policy.has_transposition() {
            return Ok(());
        }
        let vocab = self.vocab;
        for designator in &node.related_articles {
            if let Some(target) = self.policy.implemented_article(designator)? {
                self.sink.link(
                    subject.as_ref(),
                    vocab.ensures_implementation_of.as_ref(),
                    vocab.implementation_ensured_by.as_ref(),
                    target.as_ref(),
                );
            }
        }
        Ok(())
    }

    fn add_type(&mut self, subject: &NamedNode, class: &NamedNode) {
        self.sink.add(
            subject.as_ref(),
            oxrdf::vocab::rdf::TYPE,
            class.as_ref().into(),
        );
    }

    /// `eli:language` carries the language half only (`pt` for `pt_pt`).
    fn add_language(&mut self, subject: &NamedNode) {
        if let Some(locale) = self.policy.locale() {
            let language = locale.language().to_string();
            self.add_literal(subject, &self.vocab.language, &language);
        }
    }

    fn add_literal(&mut self, subject: &NamedNode, predicate: &NamedNode, value: &str) {
        self.sink.literal(
            subject.as_ref(),
            predicate.as_ref(),
            &Literal::new_simple_literal(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Namespaces;
    use crate::corpus::ArticleIndex;
    use crate::hierarchy::{create_legal_hierarchy, Transposition};
    use crate::identifier::path_key;
    use crate::sink::GraphSink;
    use crate::types::Locale;
    use pretty_assertions::assert_eq;

    struct Fixture {
        ns: Namespaces,
        vocab: Vocabulary,
        hierarchy: HierarchyRegistry,
        locales: Vec<Locale>,
    }

    fn fixture() -> Fixture {
        let ns = Namespaces::default();
        let vocab = Vocabulary::new(&ns).unwrap();
        let locales = ["eu_en", "eu_de", "eu_it", "eu_pt"]
            .into_iter()
            .map(|c| Locale::new(c).unwrap())
            .collect();
        Fixture {
            ns,
            vocab,
            hierarchy: create_legal_hierarchy(),
            locales,
        }
    }

    fn node(json: &str) -> DocumentNode {
        serde_json::from_str(json).unwrap()
    }

    fn objects(sink: &GraphSink, subject: &NamedNode, predicate: &NamedNode) -> Vec<String> {
        let mut values: Vec<String> = sink
            .objects(subject.as_ref(), predicate.as_ref())
            .into_iter()
            .map(|term| match term {
                Term::NamedNode(n) => path_key(n.as_str()).to_string(),
                Term::Literal(l) => l.value().to_string(),
                other => other.to_string(),
            })
            .collect();
        values.sort();
        values
    }

    const ARTICLE: &str = r#"{
        "classType": "ARTICLE",
        "content": {
            "cpt_I.art_5.tid": {"classType": "TITLE_ID", "content": "Article 5"},
            "cpt_I.art_5.ttl": {"classType": "TITLE", "content": "Principles relating to processing"},
            "cpt_I.art_5.pt_1": {"classType": "POINT", "content": "1. Personal data shall be processed lawfully."},
            "cpt_I.art_5.pt_2": {"classType": "POINT", "content": {
                "cpt_I.art_5.pt_2.pt_2": {"classType": "POINT", "content": "2. The controller shall be:"},
                "cpt_I.art_5.pt_2.spt_a": {"classType": "SUBPOINT", "content": ["(a)", "responsible"]}
            }}
        }
    }"#;

    #[test]
    fn test_translation_web() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let mut sink = GraphSink::new();
        let parent = f.ns.concrete_node("cpt_I_eu_en").unwrap();
        let article = node(r#"{"classType": "ARTICLE", "content": {}}"#);

        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &article, "cpt_I.art_1", &parent, &WalkContext::new("eu_en"))
            .unwrap();

        let subject = f.ns.concrete_node("cpt_I.art_1_eu_en").unwrap();
        let expected = vec!["cpt_I.art_1_eu_de", "cpt_I.art_1_eu_it", "cpt_I.art_1_eu_pt"];
        assert_eq!(objects(&sink, &subject, &f.vocab.is_translation_of), expected);
        assert_eq!(objects(&sink, &subject, &f.vocab.has_translation), expected);
    }

    #[test]
    fn test_self_loop_emits_nothing() {
        let f = fixture();
        let point = node(
            r#"{"classType": "POINT", "content": {
                "x.spt_a": {"classType": "SUBPOINT", "content": ["(a)", "text"]}
            }}"#,
        );
        let parent = f.ns.concrete_node("cpt_I.art_1.pt_1_eu_en").unwrap();

        let concrete = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let abstract_mode = ModePolicy::eu_abstract(&f.ns, &f.locales);
        for policy in [&concrete, &abstract_mode] {
            let mut sink = GraphSink::new();
            GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, policy)
                .walk(
                    Level::Point,
                    &point,
                    "cpt_I.art_1.pt_1.pt_1",
                    &parent,
                    &WalkContext::new("eu_en"),
                )
                .unwrap();
            assert_eq!(sink.len(), 0);
        }
    }

    #[test]
    fn test_ancestor_inheritance_is_a_snapshot() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let mut sink = GraphSink::new();
        let chapter = f.ns.concrete_node("cpt_I_eu_en").unwrap();
        let root = f.ns.concrete_node("GDPR_eu_en").unwrap();
        let later = f.ns.concrete_node("LATER_eu_en").unwrap();
        sink.add(
            chapter.as_ref(),
            f.vocab.is_part_of.as_ref(),
            root.as_ref().into(),
        );

        let article = node(r#"{"classType": "ARTICLE", "content": {}}"#);
        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &article, "cpt_I.art_1", &chapter, &WalkContext::new("eu_en"))
            .unwrap();
        sink.add(
            chapter.as_ref(),
            f.vocab.is_part_of.as_ref(),
            later.as_ref().into(),
        );

        let subject = f.ns.concrete_node("cpt_I.art_1_eu_en").unwrap();
        assert_eq!(
            objects(&sink, &subject, &f.vocab.is_part_of),
            vec!["GDPR_eu_en", "cpt_I_eu_en"]
        );
        assert_eq!(
            objects(&sink, &root, &f.vocab.has_part),
            vec!["cpt_I.art_1_eu_en"]
        );
        assert!(objects(&sink, &later, &f.vocab.has_part).is_empty());
    }

    #[test]
    fn test_concrete_article_attributes() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let mut sink = GraphSink::new();
        let chapter = f.ns.concrete_node("cpt_I_eu_en").unwrap();

        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &node(ARTICLE), "cpt_I.art_5", &chapter, &WalkContext::new("eu_en"))
            .unwrap();

        let article = f.ns.concrete_node("cpt_I.art_5_eu_en").unwrap();
        assert_eq!(objects(&sink, &article, &f.vocab.number), vec!["5"]);
        assert_eq!(objects(&sink, &article, &f.vocab.title_alternative), vec!["Article 5"]);
        assert_eq!(
            objects(&sink, &article, &f.vocab.description),
            vec!["Principles relating to processing"]
        );
        assert_eq!(objects(&sink, &article, &f.vocab.language), vec!["en"]);

        let point = f.ns.concrete_node("cpt_I.art_5.pt_1_eu_en").unwrap();
        assert_eq!(objects(&sink, &point, &f.vocab.number), vec!["1"]);
        assert_eq!(objects(&sink, &point, &f.vocab.title_alternative), vec!["Article 5-1"]);
        assert_eq!(
            objects(&sink, &point, &f.vocab.is_part_of),
            vec!["cpt_I.art_5_eu_en", "cpt_I_eu_en"]
        );

        // Intro line describes the point itself
        let point = f.ns.concrete_node("cpt_I.art_5.pt_2_eu_en").unwrap();
        assert_eq!(
            objects(&sink, &point, &f.vocab.description),
            vec!["2. The controller shall be:"]
        );
        assert_eq!(objects(&sink, &point, &f.vocab.title_alternative), vec!["Article 5-2"]);
        let intro = f.ns.concrete_node("cpt_I.art_5.pt_2.pt_2_eu_en").unwrap();
        assert!(objects(&sink, &intro, &f.vocab.is_part_of).is_empty());

        let subpoint = f.ns.concrete_node("cpt_I.art_5.pt_2.spt_a_eu_en").unwrap();
        assert_eq!(objects(&sink, &subpoint, &f.vocab.number), vec!["a"]);
        assert_eq!(objects(&sink, &subpoint, &f.vocab.description), vec!["responsible"]);
        assert_eq!(
            objects(&sink, &subpoint, &f.vocab.title_alternative),
            vec!["Article 5-2-a"]
        );
        assert_eq!(
            objects(&sink, &subpoint, &f.vocab.is_part_of),
            vec!["cpt_I.art_5.pt_2_eu_en", "cpt_I.art_5_eu_en", "cpt_I_eu_en"]
        );
    }

    #[test]
    fn test_abstract_mode_emits_no_literals() {
        let f = fixture();
        let policy = ModePolicy::eu_abstract(&f.ns, &f.locales[..2]);
        let mut sink = GraphSink::new();
        let chapter = f.ns.abstract_node("cpt_I").unwrap();

        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &node(ARTICLE), "cpt_I.art_5", &chapter, &WalkContext::new("eu_en"))
            .unwrap();

        assert!(sink
            .graph()
            .iter()
            .all(|t| !matches!(t.object, oxrdf::TermRef::Literal(_))));

        let article = f.ns.abstract_node("cpt_I.art_5").unwrap();
        assert_eq!(
            objects(&sink, &article, &oxrdf::vocab::rdf::TYPE.into_owned()),
            vec!["Article"]
        );
        assert_eq!(
            objects(&sink, &article, &f.vocab.is_realized_by),
            vec!["cpt_I.art_5_eu_de", "cpt_I.art_5_eu_en"]
        );
        assert_eq!(
            objects(&sink, &article, &f.vocab.has_part),
            vec!["cpt_I.art_5.pt_1", "cpt_I.art_5.pt_2"]
        );
        // No ancestor copies in abstract mode
        let point = f.ns.abstract_node("cpt_I.art_5.pt_1").unwrap();
        assert_eq!(objects(&sink, &point, &f.vocab.is_part_of), vec!["cpt_I.art_5"]);
    }

    #[test]
    fn test_inverse_pairs_are_symmetric() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let mut sink = GraphSink::new();
        let chapter = f.ns.concrete_node("cpt_I_eu_en").unwrap();
        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &node(ARTICLE), "cpt_I.art_5", &chapter, &WalkContext::new("eu_en"))
            .unwrap();

        let pairs = [
            (&f.vocab.is_part_of, &f.vocab.has_part),
            (&f.vocab.realizes, &f.vocab.is_realized_by),
        ];
        for (forward, backward) in pairs {
            let triples: Vec<_> = sink
                .graph()
                .triples_for_predicate(forward.as_ref())
                .map(|t| t.into_owned())
                .collect();
            assert!(!triples.is_empty());
            for triple in triples {
                let oxrdf::NamedOrBlankNode::NamedNode(subject) = triple.subject else {
                    panic!("unexpected blank node");
                };
                let Term::NamedNode(object) = triple.object else {
                    panic!("unexpected literal");
                };
                assert!(sink
                    .objects(object.as_ref(), backward.as_ref())
                    .contains(&Term::from(subject)));
            }
        }
    }

    #[test]
    fn test_malformed_container_is_fatal() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales);
        let mut sink = GraphSink::new();
        let chapter = f.ns.concrete_node("cpt_I_eu_en").unwrap();
        let article = node(r#"{"classType": "ARTICLE", "content": "Article 1 text"}"#);

        let err = GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &article, "cpt_I.art_1", &chapter, &WalkContext::new("eu_en"))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphError::MalformedDocument { ref level, ref found, .. } if level == "Article" && found == "text"
        ));
    }

    #[test]
    fn test_unknown_child_is_ignored() {
        let f = fixture();
        let policy = ModePolicy::eu_concrete(&f.ns, &f.locales[0], &f.locales[..1]);
        let chapter = f.ns.concrete_node("cpt_I_eu_en").unwrap();
        let plain = node(r#"{"classType": "ARTICLE", "content": {}}"#);
        let with_unknown = node(
            r#"{"classType": "ARTICLE", "content": {
                "cpt_I.art_1.rec": {"classType": "RECITAL", "content": "Whereas"},
                "cpt_I.art_1.sub": {"classType": "SUBPOINT", "content": ["(a)", "misplaced"]}
            }}"#,
        );

        let mut counts = Vec::new();
        for article in [&plain, &with_unknown] {
            let mut sink = GraphSink::new();
            GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
                .walk(Level::Article, article, "cpt_I.art_1", &chapter, &WalkContext::new("eu_en"))
                .unwrap();
            counts.push(sink.len());
        }
        assert_eq!(counts[0], counts[1]);
    }

    #[test]
    fn test_transposition_links() {
        let f = fixture();
        let pt = Locale::new("pt_pt").unwrap();
        let index = ArticleIndex::from_identifiers(["cpt_II.art_5", "cpt_II.art_6"]);
        let policy = ModePolicy::national_concrete(
            &f.ns,
            &pt,
            Some(Transposition {
                index: &index,
                target: &f.locales[0],
            }),
        );
        let mut sink = GraphSink::new();
        let chapter = f.ns.concrete_node("cpt_I_pt_pt").unwrap();
        let article = node(
            r#"{"classType": "ARTICLE", "content": {}, "relatedArticles": ["5", "6", "99"]}"#,
        );

        GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &policy)
            .walk(Level::Article, &article, "cpt_I.art_1", &chapter, &WalkContext::new("pt_pt"))
            .unwrap();

        let subject = f.ns.concrete_node("cpt_I.art_1_pt_pt").unwrap();
        assert_eq!(
            objects(&sink, &subject, &f.vocab.ensures_implementation_of),
            vec!["cpt_II.art_5_eu_en", "cpt_II.art_6_eu_en"]
        );
        let eu_article = f.ns.concrete_node("cpt_II.art_5_eu_en").unwrap();
        assert_eq!(
            objects(&sink, &eu_article, &f.vocab.implementation_ensured_by),
            vec!["cpt_I.art_1_pt_pt"]
        );
        assert_eq!(
            objects(&sink, &subject, &f.vocab.realizes),
            vec!["cpt_I.art_1_abstract_pt_pt"]
        );
    }

    #[test]
    fn test_seed_roots() {
        let f = fixture();
        let mut sink = GraphSink::new();

        let abstract_mode = ModePolicy::eu_abstract(&f.ns, &f.locales[..2]);
        let root = GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &abstract_mode)
            .seed_root("GDPR", None)
            .unwrap();
        assert_eq!(objects(&sink, &root, &f.vocab.is_realized_by), vec!["GDPR_eu_de", "GDPR_eu_en"]);

        let concrete = ModePolicy::eu_concrete(&f.ns, &f.locales[1], &f.locales[..2]);
        let root = GraphWalker::new(&mut sink, &f.vocab, &f.hierarchy, &concrete)
            .seed_root("GDPR", Some("Datenschutz-Grundverordnung"))
            .unwrap();
        assert_eq!(objects(&sink, &root, &f.vocab.title), vec!["Datenschutz-Grundverordnung"]);
        assert_eq!(objects(&sink, &root, &f.vocab.language), vec!["de"]);
        assert_eq!(objects(&sink, &root, &f.vocab.realizes), vec!["GDPR"]);
    }
}
