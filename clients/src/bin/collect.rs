//! `packagegraph-collect` converts package repository metadata to RDF.
//!
//! **Usage:**
//! ```text
//! packagegraph-collect [options] debian --repo-url <url> --distribution <name>
//! packagegraph-collect [options] rpm --repo-url <url>
//! ```
//!
//! The graph is written to `--output`, or to stdout when omitted.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use packagegraph_clients::collect::{positive, resolve_config, seed_graph, write_graph, Overrides};
use packagegraph_clients::logging::{self, LogFormat};
use packagegraph_collector::debian::DebianCollector;
use packagegraph_collector::rpm::RpmCollector;
use packagegraph_collector::{CollectContext, Collector, HttpFetcher, Profiler};
use packagegraph_conformance::validators::ontology::vocabulary;
use packagegraph_ontology::serializer::RdfFormat;

/// Collect package repository metadata as RDF.
#[derive(Parser)]
#[command(
    name = "packagegraph-collect",
    about = "Convert Debian or RPM repository metadata into an RDF graph"
)]
struct Args {
    /// TOML file with collector settings.
    #[arg(long, global = true, env = "PACKAGEGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Output file (stdout when omitted).
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Output format: ttl, nt, jsonld or rdf.
    #[arg(long, global = true, default_value = "ttl")]
    format: RdfFormat,

    /// Turtle file from a previous run to add to.
    #[arg(long, global = true)]
    append: Option<PathBuf>,

    /// Process everything on the calling thread.
    #[arg(long, global = true, env = "PACKAGEGRAPH_NO_PARALLEL")]
    no_parallel: bool,

    /// Items per parallel chunk.
    #[arg(long, global = true, env = "PACKAGEGRAPH_CHUNK_SIZE", value_parser = positive)]
    chunk_size: Option<usize>,

    /// Worker threads.
    #[arg(long, global = true, env = "PACKAGEGRAPH_WORKERS", value_parser = positive)]
    workers: Option<usize>,

    /// Log step timings and a summary table.
    #[arg(long, global = true)]
    profile: bool,

    /// Log level or filter directive.
    #[arg(long, global = true, default_value = "info", env = "PACKAGEGRAPH_LOG")]
    log_level: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    source: Source,
}

#[derive(Subcommand)]
enum Source {
    /// An APT repository.
    Debian {
        /// Repository root, e.g. http://deb.debian.org/debian.
        #[arg(long)]
        repo_url: String,

        /// Distribution (suite or codename), e.g. bookworm.
        #[arg(long)]
        distribution: String,

        /// Archive component.
        #[arg(long, default_value = "main")]
        component: String,

        /// Architecture directory.
        #[arg(long, default_value = "binary-amd64")]
        arch: String,
    },
    /// A yum/dnf repository.
    Rpm {
        /// Repository root holding `repodata/`.
        #[arg(long)]
        repo_url: String,
    },
}

impl Source {
    fn collector(self) -> Box<dyn Collector> {
        match self {
            Source::Debian {
                repo_url,
                distribution,
                component,
                arch,
            } => {
                let mut collector = DebianCollector::new(repo_url, distribution);
                collector.component = component;
                collector.arch = arch;
                Box::new(collector)
            }
            Source::Rpm { repo_url } => Box::new(RpmCollector::new(repo_url)),
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(&args.log_level, args.log_format)?;

    let config = resolve_config(
        args.config.as_deref(),
        Overrides {
            no_parallel: args.no_parallel,
            chunk_size: args.chunk_size,
            workers: args.workers,
        },
    )?;
    tracing::debug!(?config, "collector configuration");

    let fetcher = HttpFetcher::new(&config.http)?;
    let runner = config.runner();
    let profiler = Profiler::new(args.profile);
    let ctx = CollectContext::new(&fetcher, &profiler, &runner);

    let mut graph = seed_graph(args.append.as_deref())?;
    let collector = args.source.collector();
    let summary = profiler.step(collector.name(), || collector.collect(&ctx, &mut graph))?;
    tracing::info!(
        collector = collector.name(),
        packages = summary.packages,
        triples_added = summary.triples_added,
        total_triples = graph.len(),
        "collection finished"
    );

    for result in vocabulary::validate_data(&graph).results {
        if result.is_warning() {
            tracing::warn!(details = ?result.details, "{}", result.message);
        }
    }

    profiler.step("serialize", || write_graph(&graph, args.format, args.output.as_deref()))?;
    profiler.report();
    Ok(())
}
