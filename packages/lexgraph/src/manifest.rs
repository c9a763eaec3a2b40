//! Run manifest: which corpora to load and where to write the graph.
//!
//! ```yaml
//! output: gdpr.ttl
//! format: turtle
//! eu:
//!   root: GDPR
//!   reference_locale: eu_en
//!   date_document: 2016-04-27
//!   corpora:
//!     - locale: eu_en
//!       path: eu/gdpr_en.json
//!       title: General Data Protection Regulation
//! national:
//!   - locale: pt_pt
//!     root: LEI58
//!     path: national/lei58_pt.json
//!     implements: eu_en
//! ```
//!
//! Relative paths are resolved against the directory holding the manifest.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::{validate_date, Namespaces, DEFAULT_ROOT};
use crate::corpus::MatchPolicy;
use crate::error::{GraphError, Result};
use crate::serializer::OutputFormat;
use crate::types::Locale;

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

/// A complete graph build.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub namespaces: Namespaces,
    /// Output file; defaults to `<root>.<extension>` next to the manifest.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub format: OutputFormat,
    pub eu: EuCorpora,
    #[serde(default)]
    pub national: Vec<NationalCorpus>,
    #[serde(skip)]
    base_dir: PathBuf,
}

/// The EU regulation in all its language versions.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EuCorpora {
    #[serde(default = "default_root")]
    pub root: String,
    /// Locale whose tree drives the abstract walk; the first corpus if unset.
    #[serde(default)]
    pub reference_locale: Option<Locale>,
    #[serde(default)]
    pub date_document: Option<String>,
    pub corpora: Vec<Corpus>,
}

/// One language version of the EU text.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Corpus {
    pub locale: Locale,
    pub path: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
}

/// A national law transposing the EU text.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NationalCorpus {
    pub locale: Locale,
    pub root: String,
    pub path: PathBuf,
    #[serde(default)]
    pub title: Option<String>,
    /// EU locale whose concrete articles receive the transposition links.
    pub implements: Locale,
    /// Article lookup table; derived from the `implements` corpus if unset.
    #[serde(default)]
    pub articles: Option<PathBuf>,
    #[serde(default)]
    pub match_policy: MatchPolicy,
}

impl Manifest {
    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path).map_err(|source| GraphError::MissingInput {
            path: path.to_path_buf(),
            source,
        })?;
        let mut manifest = Self::from_yaml_str(&yaml).map_err(|source| GraphError::Manifest {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest without validating it; paths resolve against the
    /// working directory.
    pub fn from_yaml_str(yaml: &str) -> std::result::Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(yaml)
    }

    /// Check cross references between the blocks.
    pub fn validate(&self) -> Result<()> {
        if self.eu.corpora.is_empty() {
            return Err(GraphError::EmptyCorpus);
        }

        if let Some(locale) = &self.eu.reference_locale {
            self.require_eu_locale(locale, "eu.reference_locale")?;
        }
        if let Some(date) = &self.eu.date_document {
            validate_date(date)?;
        }
        for national in &self.national {
            self.require_eu_locale(
                &national.implements,
                &format!("national corpus {}", national.locale),
            )?;
        }
        Ok(())
    }

    fn require_eu_locale(&self, locale: &Locale, context: &str) -> Result<()> {
        if self.eu_corpus(locale).is_some() {
            Ok(())
        } else {
            Err(GraphError::UnknownLocale {
                locale: locale.to_string(),
                context: context.to_string(),
            })
        }
    }

    /// EU corpus of a given locale.
    #[must_use]
    pub fn eu_corpus(&self, locale: &Locale) -> Option<&Corpus> {
        self.eu.corpora.iter().find(|corpus| &corpus.locale == locale)
    }

    /// Corpus whose tree is walked in abstract mode.
    pub fn reference_corpus(&self) -> Result<&Corpus> {
        match &self.eu.reference_locale {
            Some(locale) => self.eu_corpus(locale).ok_or_else(|| GraphError::UnknownLocale {
                locale: locale.to_string(),
                context: "eu.reference_locale".to_string(),
            }),
            None => self.eu.corpora.first().ok_or(GraphError::EmptyCorpus),
        }
    }

    /// Resolve a path from the manifest against its directory.
    #[must_use]
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Where the graph is written.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => self.resolve(output),
            None => self
                .base_dir
                .join(format!("{}.{}", self.eu.root, self.format.extension())),
        }
    }
}
