//! Serializers for the finished graph.
//!
//! Two formats are supported:
//! - **Turtle** ([`turtle`]): prefixed, grouped by subject, the default
//! - **N-Triples** ([`ntriples`]): one sorted triple per line, diff friendly
//!
//! Both outputs are deterministic for a given triple set.

pub mod ntriples;
pub mod turtle;

use clap::ValueEnum;
use oxrdf::vocab::{rdf, rdfs, xsd};
use oxrdf::Graph;
use serde::Deserialize;

use crate::config::Namespaces;

/// Interchange format of the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Turtle,
    #[value(name = "ntriples")]
    NTriples,
}

impl OutputFormat {
    /// Conventional file extension.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }
}

/// Prefix table used for compact output, most specific namespaces first.
#[must_use]
pub fn prefixes(namespaces: &Namespaces) -> Vec<(&str, &str)> {
    vec![
        ("gdpr", namespaces.abstract_base()),
        ("rgdpr", namespaces.concrete_base()),
        ("eli", namespaces.eli()),
        ("rdf", rdf_namespace()),
        ("rdfs", rdfs_namespace()),
        ("xsd", xsd_namespace()),
    ]
}

fn rdf_namespace() -> &'static str {
    rdf::TYPE.as_str().trim_end_matches("type")
}

fn rdfs_namespace() -> &'static str {
    rdfs::LABEL.as_str().trim_end_matches("label")
}

fn xsd_namespace() -> &'static str {
    xsd::STRING.as_str().trim_end_matches("string")
}

/// Render a graph in the given format.
#[must_use]
pub fn serialize(graph: &Graph, format: OutputFormat, namespaces: &Namespaces) -> String {
    match format {
        OutputFormat::Turtle => turtle::to_turtle(graph, &prefixes(namespaces)),
        OutputFormat::NTriples => ntriples::to_ntriples(graph),
    }
}
