//! Lexgraph - Build a linked-data graph of EU and national legal texts.
//!
//! This crate walks nested JSON document trees of a regulation (one per
//! language version) and of the national laws transposing it, and emits an
//! RDF graph in the European Legislation Identifier (ELI) vocabulary:
//! locale-neutral Works, their per-language Expressions, translation links
//! and transposition links.
//!
//! # Example
//!
//! ```
//! use lexgraph::config;
//!
//! // Validate locale and date
//! assert!(config::validate_locale("eu_en").is_ok());
//! assert!(config::validate_date("2016-04-27").is_ok());
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace table, constants and validation
//! - [`types`]: Document model (nodes, class tags, locales)
//! - [`error`]: Error types and Result alias
//! - [`identifier`]: Path keys and locale suffixes
//! - [`literal`]: Designator and text extraction
//! - [`vocab`]: ELI predicates and structural classes
//! - [`sink`]: Triple set the walk writes into
//! - [`hierarchy`]: Per-level rules and the recursive walker
//! - [`corpus`]: Article lookup for transposition links
//! - [`manifest`]: Run description
//! - [`driver`]: Graph assembly
//! - [`serializer`]: Turtle and N-Triples output
//! - [`writer`]: Atomic file output
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod corpus;
pub mod driver;
pub mod error;
pub mod hierarchy;
pub mod identifier;
pub mod literal;
pub mod manifest;
pub mod serializer;
pub mod sink;
pub mod types;
pub mod vocab;
pub mod writer;

// Re-export main functions
pub use driver::{build_graph, GraphBuilder, LoadedCorpus};

// Re-export commonly used items
pub use config::{validate_date, validate_locale, Namespaces};
pub use corpus::{ArticleIndex, MatchPolicy};
pub use error::{GraphError, Result};
pub use manifest::Manifest;
pub use serializer::OutputFormat;
pub use sink::{GraphSink, TripleSink};
pub use types::{ClassType, Document, DocumentNode, Level, Locale};
