//! Error types for the graph builder.
//!
//! Structural skips and unresolved cross references are not errors; they are
//! logged and the walk continues. Everything in [`GraphError`] aborts the run
//! before any output is written.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the lexgraph library.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Invalid locale code.
    #[error("Invalid locale: '{0}'. Expected <jurisdiction>_<language> (e.g., eu_en)")]
    InvalidLocale(String),

    /// Invalid date format.
    #[error("Invalid date format: '{0}'. Expected YYYY-MM-DD (e.g., 2016-04-27)")]
    InvalidDate(String),

    /// A namespace or node key does not form a valid IRI.
    #[error("Invalid IRI '{iri}': {source}")]
    InvalidIri {
        iri: String,
        #[source]
        source: oxrdf::IriParseError,
    },

    /// A node's content has a shape its structural level cannot process.
    #[error("Malformed document {document}: {level} '{key}' has {found} content")]
    MalformedDocument {
        document: String,
        key: String,
        level: String,
        found: String,
    },

    /// An input file could not be read.
    #[error("Missing input file {}: {source}", .path.display())]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An input document is not valid JSON for the document model.
    #[error("Failed to decode {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The run manifest could not be decoded.
    #[error("Failed to decode manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// A locale is referenced that has no EU corpus.
    #[error("Unknown locale '{locale}' referenced by {context}")]
    UnknownLocale { locale: String, context: String },

    /// The manifest lists no EU corpora.
    #[error("No EU corpora configured")]
    EmptyCorpus,

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
