//! The publish pipeline: lint, concatenate, convert, generate the site,
//! verify the artifacts.
//!
//! Each stage is a function so the binary can print reports between them
//! and stop at the first failing stage.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use packagegraph_conformance::validators::{artifacts, ontology::vocabulary, sources};
use packagegraph_conformance::{run_all, ConformanceReport};
use packagegraph_ontology::concat::{concatenate, merge_turtle_files};
use packagegraph_ontology::parser::load_file;
use packagegraph_ontology::Ontology;
use packagegraph_website::{generate, SiteDocument};

/// Name of the document holding the built-in `deb:`/`rpm:` vocabulary.
pub const BUILTIN_NAME: &str = "vocabulary";

/// Inputs of a build.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory of `*.ttl` sources.
    pub sources: PathBuf,
    /// Output directory.
    pub out: PathBuf,
    /// Name of the concatenated document.
    pub name: String,
    /// Public root URL of the site.
    pub base_url: String,
    /// Publish the built-in vocabulary as an extra document.
    pub builtin: bool,
}

/// What [`assemble`] produced.
#[derive(Debug)]
pub struct Assembled {
    /// The concatenated Turtle sources.
    pub merged: PathBuf,
    /// Names of the published documents.
    pub documents: Vec<String>,
    /// Triples in the concatenated document.
    pub triples: usize,
    /// Every file written, the concatenation included.
    pub files: Vec<PathBuf>,
}

/// Lints the sources, plus the built-in vocabulary when it will be published.
///
/// # Errors
///
/// Returns an error if the source directory cannot be listed.
pub fn lint(opts: &BuildOptions) -> Result<ConformanceReport> {
    let mut report = run_all(&opts.sources)?;
    if opts.builtin {
        report.extend(vocabulary::validate_builtin());
    }
    Ok(report)
}

/// Where the concatenated sources of document `name` are written.
pub fn merged_path(out: &Path, name: &str) -> PathBuf {
    out.join(name).join("source.ttl")
}

/// Concatenates the sources, parses the result, and writes the site with
/// all four serializations of every document.
///
/// # Errors
///
/// Returns an error if there are no sources, the concatenation cannot be
/// written or does not parse, or the site cannot be generated.
pub fn assemble(opts: &BuildOptions) -> Result<Assembled> {
    let files = sources::discover(&opts.sources)?;
    if files.is_empty() {
        bail!("no Turtle files found in {}", opts.sources.display());
    }

    let merged = merged_path(&opts.out, &opts.name);
    let dropped = merge_turtle_files(&files, &merged)
        .with_context(|| format!("Failed to concatenate sources into {}", merged.display()))?;
    tracing::info!(
        files = files.len(),
        duplicate_prefixes = dropped,
        path = %merged.display(),
        "concatenated sources"
    );

    let graph = concatenate(&files).context("Sources do not load together")?;
    let reloaded = load_file(&merged, "m")
        .with_context(|| format!("Concatenated file {} does not parse", merged.display()))?
        .graph;
    if reloaded.len() != graph.len() {
        bail!(
            "concatenated file {} holds {} triples, the sources hold {}",
            merged.display(),
            reloaded.len(),
            graph.len()
        );
    }
    let triples = graph.len();
    tracing::info!(triples, "parsed concatenated document");

    let mut documents = vec![SiteDocument::new(opts.name.clone(), graph)];
    if opts.builtin {
        documents.push(SiteDocument::new(BUILTIN_NAME, Ontology::full().to_graph()));
    }
    let names = documents.iter().map(|d| d.name.clone()).collect();

    let mut written = generate(&opts.out, &documents, &opts.base_url)?;
    tracing::info!(files = written.len(), out = %opts.out.display(), "site generated");
    written.insert(0, merged.clone());

    Ok(Assembled {
        merged,
        documents: names,
        triples,
        files: written,
    })
}

/// Verifies the published serializations of every document.
///
/// # Errors
///
/// Returns an error if an artifact exists but cannot be read.
pub fn verify(out: &Path, documents: &[String]) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for name in documents {
        report.extend(artifacts::validate(out, name)?);
    }
    Ok(report)
}
