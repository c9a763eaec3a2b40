//! Command-line interface for the graph builder.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::corpus::collect_article_ids;
use crate::driver::build_graph;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::serializer::OutputFormat;
use crate::sink::TripleSink;
use crate::types::Document;
use crate::writer::{save_graph, write_atomic};

/// Lexgraph - Build a linked-data graph of EU and national legal texts.
#[derive(Parser)]
#[command(name = "lexgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the graph described by a manifest.
    Build {
        /// Run manifest (YAML)
        manifest: PathBuf,

        /// Output file (default: taken from the manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format (default: taken from the manifest)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Extract the article lookup table of a document tree.
    Articles {
        /// Document tree (JSON)
        document: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            manifest,
            output,
            format,
        } => build_command(&manifest, output.as_deref(), format),
        Commands::Articles { document, output } => {
            articles_command(&document, output.as_deref())
        }
    }
}

/// Execute the build command.
fn build_command(
    manifest_path: &Path,
    output: Option<&Path>,
    format: Option<OutputFormat>,
) -> Result<()> {
    // Validate the manifest before loading any document
    let mut manifest = Manifest::load(manifest_path)?;
    if let Some(format) = format {
        manifest.format = format;
    }
    let output_path = output.map_or_else(|| manifest.output_path(), Path::to_path_buf);

    println!(
        "{} {} ({} EU, {} national)",
        style("Building").bold(),
        style(&manifest.eu.root).cyan(),
        style(manifest.eu.corpora.len()).green(),
        style(manifest.national.len()).green()
    );
    println!();

    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message("Walking documents...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let sink = match build_graph(&manifest) {
        Ok(sink) => sink,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.set_message("Serializing graph...");
    let saved = match save_graph(&sink, manifest.format, &manifest.namespaces, &output_path) {
        Ok(path) => path,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };

    pb.finish_and_clear();

    println!("  Triples: {}", sink.len());
    println!();
    println!("{} {}", style("Saved to:").green().bold(), saved.display());

    Ok(())
}

/// Execute the articles command.
fn articles_command(document_path: &Path, output: Option<&Path>) -> Result<()> {
    let document = Document::load(document_path)?;
    let ids = collect_article_ids(&document);
    let json = format!("{}\n", serde_json::to_string_pretty(&ids)?);

    match output {
        Some(path) => {
            let saved = write_atomic(&json, path)?;
            eprintln!(
                "{} {} articles to {}",
                style("Saved").green().bold(),
                ids.len(),
                saved.display()
            );
        }
        None => print!("{json}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_build() {
        let cli = Cli::parse_from(["lexgraph", "build", "gdpr.yaml"]);

        let Commands::Build {
            manifest,
            output,
            format,
        } = cli.command
        else {
            panic!("expected build command");
        };
        assert_eq!(manifest, PathBuf::from("gdpr.yaml"));
        assert!(output.is_none());
        assert!(format.is_none());
    }

    #[test]
    fn test_cli_parse_build_with_format() {
        let cli = Cli::parse_from([
            "lexgraph",
            "build",
            "gdpr.yaml",
            "--format",
            "ntriples",
            "-o",
            "out.nt",
        ]);

        let Commands::Build { output, format, .. } = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(format, Some(OutputFormat::NTriples));
        assert_eq!(output, Some(PathBuf::from("out.nt")));
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["lexgraph", "build", "gdpr.yaml", "--format", "rdfxml"]).is_err());
    }

    #[test]
    fn test_cli_parse_articles() {
        let cli = Cli::parse_from(["lexgraph", "articles", "gdpr_en.json"]);

        let Commands::Articles { document, output } = cli.command else {
            panic!("expected articles command");
        };
        assert_eq!(document, PathBuf::from("gdpr_en.json"));
        assert!(output.is_none());
    }
}
