//! `packagegraph-check` lints a directory of Turtle ontology sources.
//!
//! **Usage:**
//! ```text
//! packagegraph-check [--sources <dir>] [--json]
//! ```
//!
//! Exits non-zero if any check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use packagegraph_clients::{output, DEFAULT_SOURCES};
use packagegraph_conformance::run_all;
use packagegraph_conformance::validators::ontology::vocabulary;

/// Lint packagegraph ontology sources.
#[derive(Parser)]
#[command(
    name = "packagegraph-check",
    about = "Check Turtle ontology sources for syntax, prefix and consistency errors"
)]
struct Args {
    /// Directory of `*.ttl` sources.
    #[arg(long, default_value = DEFAULT_SOURCES)]
    sources: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut report = run_all(&args.sources)?;
    report.extend(vocabulary::validate_builtin());

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{json}");
    } else {
        println!("packagegraph Ontology Check");
        println!("===========================");
        println!();
        output::write_report(&mut io::stdout().lock(), &report)?;
    }

    if !report.all_passed() {
        if !args.json {
            eprintln!("Check FAILED.");
        }
        process::exit(1);
    }
    if !args.json {
        println!("Check PASSED.");
    }
    Ok(())
}
