//! Graph assembly: loads every corpus, then runs the walks in a fixed order.
//!
//! All documents and lookup tables are read before the first triple is
//! emitted, so a missing or undecodable input aborts the run with an empty
//! graph.

use chrono::NaiveDate;
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::{Literal, NamedNode};

use crate::config::{validate_date, Namespaces};
use crate::corpus::ArticleIndex;
use crate::error::{GraphError, Result};
use crate::hierarchy::{
    create_legal_hierarchy, GraphWalker, HierarchyRegistry, ModePolicy, Transposition, WalkContext,
};
use crate::manifest::{Manifest, NationalCorpus};
use crate::sink::{GraphSink, TripleSink};
use crate::types::{Document, Locale};
use crate::vocab::Vocabulary;

/// A document tree together with the locale and title it is published under.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub locale: Locale,
    pub title: Option<String>,
    pub document: Document,
}

impl LoadedCorpus {
    #[must_use]
    pub fn new(locale: Locale, title: Option<String>, document: Document) -> Self {
        Self {
            locale,
            title,
            document,
        }
    }
}

/// Accumulates the whole graph of a run.
pub struct GraphBuilder<'a> {
    namespaces: &'a Namespaces,
    vocab: Vocabulary,
    hierarchy: HierarchyRegistry,
    sink: GraphSink,
}

impl<'a> GraphBuilder<'a> {
    /// Create a builder with an empty graph.
    pub fn new(namespaces: &'a Namespaces) -> Result<Self> {
        Ok(Self {
            namespaces,
            vocab: Vocabulary::new(namespaces)?,
            hierarchy: create_legal_hierarchy(),
            sink: GraphSink::new(),
        })
    }

    /// Structural classes and the top-level resource.
    pub fn seed_schema(&mut self, root: &str) -> Result<()> {
        for (level, class) in self.vocab.level_classes() {
            self.sink.add(
                class.as_ref(),
                rdf::TYPE,
                self.vocab.legal_resource_subdivision.as_ref().into(),
            );
            self.sink.literal(
                class.as_ref(),
                rdfs::LABEL,
                &Literal::new_simple_literal(level.class_name()),
            );
        }

        let root_node = self.namespaces.abstract_node(root)?;
        self.sink.add(
            root_node.as_ref(),
            rdf::TYPE,
            self.vocab.legal_resource.as_ref().into(),
        );
        self.sink.literal(
            root_node.as_ref(),
            rdfs::LABEL,
            &Literal::new_simple_literal(root),
        );
        Ok(())
    }

    /// Abstract walk over the reference tree, then one concrete walk per
    /// language version.
    pub fn add_eu(
        &mut self,
        root: &str,
        date_document: Option<NaiveDate>,
        reference: &LoadedCorpus,
        corpora: &[LoadedCorpus],
    ) -> Result<()> {
        let locales: Vec<Locale> = corpora.iter().map(|c| c.locale.clone()).collect();

        tracing::info!(reference = %reference.locale, "Building abstract EU graph");
        let policy = ModePolicy::eu_abstract(self.namespaces, &locales);
        let root_node = self.walk(&policy, root, None, reference, "abstract")?;
        if let Some(date) = date_document {
            self.sink.literal(
                root_node.as_ref(),
                self.vocab.date_document.as_ref(),
                &Literal::new_typed_literal(date.format("%Y-%m-%d").to_string(), xsd::DATE),
            );
        }

        for corpus in corpora {
            tracing::info!(locale = %corpus.locale, "Building concrete EU graph");
            let policy = ModePolicy::eu_concrete(self.namespaces, &corpus.locale, &locales);
            self.walk(&policy, root, corpus.title.as_deref(), corpus, "concrete")?;
        }
        Ok(())
    }

    /// National abstract walk, then the national concrete walk carrying the
    /// transposition links towards `target`.
    pub fn add_national(
        &mut self,
        root: &str,
        corpus: &LoadedCorpus,
        index: &ArticleIndex,
        target: &Locale,
    ) -> Result<()> {
        tracing::info!(locale = %corpus.locale, articles = index.len(), "Building national graph");

        let policy = ModePolicy::national_abstract(self.namespaces, &corpus.locale);
        self.walk(&policy, root, None, corpus, "national abstract")?;

        let transposition = Transposition { index, target };
        let policy =
            ModePolicy::national_concrete(self.namespaces, &corpus.locale, Some(transposition));
        self.walk(&policy, root, corpus.title.as_deref(), corpus, "national concrete")?;
        Ok(())
    }

    fn walk(
        &mut self,
        policy: &ModePolicy<'_>,
        root: &str,
        title: Option<&str>,
        corpus: &LoadedCorpus,
        mode: &str,
    ) -> Result<NamedNode> {
        let mut walker = GraphWalker::new(&mut self.sink, &self.vocab, &self.hierarchy, policy);
        let root_node = walker.seed_root(root, title)?;
        let context = WalkContext::new(format!("{} ({mode})", corpus.locale));
        walker.walk_document(&corpus.document, &root_node, &context)?;
        Ok(root_node)
    }

    /// Number of triples so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sink.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sink.is_empty()
    }

    /// Hand over the finished graph.
    #[must_use]
    pub fn finish(self) -> GraphSink {
        self.sink
    }
}

struct LoadedNational<'m> {
    corpus: &'m NationalCorpus,
    loaded: LoadedCorpus,
    index: ArticleIndex,
}

/// Load every input of a manifest and build the complete graph.
pub fn build_graph(manifest: &Manifest) -> Result<GraphSink> {
    let eu = manifest
        .eu
        .corpora
        .iter()
        .map(|corpus| {
            let document = Document::load(&manifest.resolve(&corpus.path))?;
            Ok(LoadedCorpus::new(
                corpus.locale.clone(),
                corpus.title.clone(),
                document,
            ))
        })
        .collect::<Result<Vec<_>>>()?;

    let reference_locale = &manifest.reference_corpus()?.locale;
    let reference = find_loaded(&eu, reference_locale, "eu.reference_locale")?;
    let date_document = manifest
        .eu
        .date_document
        .as_deref()
        .map(validate_date)
        .transpose()?;

    let national = manifest
        .national
        .iter()
        .map(|corpus| {
            let document = Document::load(&manifest.resolve(&corpus.path))?;
            let index = match &corpus.articles {
                Some(path) => ArticleIndex::load(&manifest.resolve(path))?,
                None => {
                    let context = format!("national corpus {}", corpus.locale);
                    ArticleIndex::from_document(
                        &find_loaded(&eu, &corpus.implements, &context)?.document,
                    )
                }
            };
            Ok(LoadedNational {
                corpus,
                loaded: LoadedCorpus::new(corpus.locale.clone(), corpus.title.clone(), document),
                index: index.with_policy(corpus.match_policy),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut builder = GraphBuilder::new(&manifest.namespaces)?;
    builder.seed_schema(&manifest.eu.root)?;
    builder.add_eu(&manifest.eu.root, date_document, reference, &eu)?;
    for entry in &national {
        builder.add_national(
            &entry.corpus.root,
            &entry.loaded,
            &entry.index,
            &entry.corpus.implements,
        )?;
    }

    tracing::info!(triples = builder.len(), "Graph complete");
    Ok(builder.finish())
}

fn find_loaded<'c>(
    corpora: &'c [LoadedCorpus],
    locale: &Locale,
    context: &str,
) -> Result<&'c LoadedCorpus> {
    corpora
        .iter()
        .find(|corpus| &corpus.locale == locale)
        .ok_or_else(|| GraphError::UnknownLocale {
            locale: locale.to_string(),
            context: context.to_string(),
        })
}
