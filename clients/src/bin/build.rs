//! `packagegraph-build` publishes the ontology sources as a static site.
//!
//! Stages, each of which stops the build on failure:
//! 1. lint the sources (skipped with `--skip-check`)
//! 2. concatenate them into one Turtle document and parse it back
//! 3. write the site with Turtle, N-Triples, JSON-LD and RDF/XML downloads
//! 4. verify the written serializations
//!
//! **Usage:**
//! ```text
//! packagegraph-build [--sources <dir>] [--out <dir>] [--name <name>]
//!                    [--base-url <url>] [--no-builtin] [--skip-check]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use packagegraph_clients::build::{self, BuildOptions};
use packagegraph_clients::logging::{self, LogFormat};
use packagegraph_clients::{output, DEFAULT_SOURCES};
use packagegraph_conformance::ConformanceReport;

/// Build the packagegraph ontology site.
#[derive(Parser)]
#[command(
    name = "packagegraph-build",
    about = "Build packagegraph ontology artifacts and the static site"
)]
struct Args {
    /// Directory of `*.ttl` sources.
    #[arg(long, default_value = DEFAULT_SOURCES)]
    sources: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Name of the concatenated document.
    #[arg(long, default_value = "packagegraph")]
    name: String,

    /// Public root URL, used in the sitemap.
    #[arg(long, default_value = "https://packagegraph.github.io")]
    base_url: String,

    /// Do not publish the built-in deb:/rpm: vocabulary.
    #[arg(long)]
    no_builtin: bool,

    /// Skip linting the sources.
    #[arg(long)]
    skip_check: bool,

    /// Log level or filter directive.
    #[arg(long, default_value = "info", env = "PACKAGEGRAPH_LOG")]
    log_level: String,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_format)?;

    let opts = BuildOptions {
        sources: args.sources,
        out: args.out,
        name: args.name,
        base_url: args.base_url,
        builtin: !args.no_builtin,
    };

    if args.skip_check {
        tracing::warn!("skipping source checks");
    } else {
        stage("Lint", &build::lint(&opts)?)?;
    }

    let built = build::assemble(&opts)?;
    println!(
        "Built {} document(s), {} files, {} triples in {}",
        built.documents.len(),
        built.files.len(),
        built.triples,
        opts.out.display()
    );

    stage("Verify", &build::verify(&opts.out, &built.documents)?)?;
    println!("Build PASSED.");
    Ok(())
}

/// Prints a stage report and fails the build when it has failures.
fn stage(title: &str, report: &ConformanceReport) -> Result<()> {
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    output::write_report(&mut io::stdout().lock(), report)?;
    println!();
    if !report.all_passed() {
        bail!("{title} stage failed with {} failure(s)", report.failure_count());
    }
    Ok(())
}
