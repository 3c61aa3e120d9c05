//! Debian and RPM repository metadata collectors.
//!
//! A [`Collector`] reads one repository through a [`Fetch`] implementation
//! and adds `deb:` or `rpm:` triples to a [`Graph`]:
//!
//! - [`debian::DebianCollector`]: `Release`, `Packages.gz` and `Contents`
//!   indices of one distribution, component and architecture.
//! - [`rpm::RpmCollector`]: `repomd.xml` and the `primary`, `filelists` and
//!   `other` metadata it lists.
//!
//! Large inputs are split across worker threads by a [`ChunkRunner`]; each
//! step can be timed with a [`Profiler`].
//!
//! ```no_run
//! use packagegraph_collector::{
//!     debian::DebianCollector, CollectContext, Collector, CollectorConfig, HttpFetcher,
//! };
//! use packagegraph_ontology::Graph;
//!
//! # fn main() -> Result<(), packagegraph_collector::CollectError> {
//! let config = CollectorConfig::default();
//! let fetcher = HttpFetcher::new(&config.http)?;
//! let runner = config.runner();
//! let profiler = packagegraph_collector::Profiler::new(false);
//! let ctx = CollectContext::new(&fetcher, &profiler, &runner);
//!
//! let mut graph = packagegraph_collector::new_graph();
//! let summary = DebianCollector::new("http://deb.debian.org/debian", "bookworm")
//!     .collect(&ctx, &mut graph)?;
//! println!("{} packages, {} triples", summary.packages, summary.triples_added);
//! # let _: &Graph = &graph;
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod config;
pub mod debian;
pub mod error;
pub mod fetch;
pub mod parallel;
pub mod profiler;
pub mod rpm;

pub use config::{CollectorConfig, HttpSettings};
pub use error::CollectError;
pub use fetch::{Fetch, HttpFetcher};
pub use parallel::ChunkRunner;
pub use profiler::Profiler;

use packagegraph_ontology::model::iris::{OWL, RDF, RDFS, XSD};
use packagegraph_ontology::{Graph, Ontology};

/// What a collection run added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Packages processed.
    pub packages: usize,
    /// Triples added to the target graph.
    pub triples_added: usize,
}

/// Shared services for a collection run.
#[derive(Clone, Copy)]
pub struct CollectContext<'a> {
    /// Source of repository files.
    pub fetcher: &'a dyn Fetch,
    /// Step timer.
    pub profiler: &'a Profiler,
    /// Chunked processing strategy.
    pub runner: &'a ChunkRunner,
}

impl<'a> CollectContext<'a> {
    /// Bundles the services.
    #[must_use]
    pub fn new(fetcher: &'a dyn Fetch, profiler: &'a Profiler, runner: &'a ChunkRunner) -> Self {
        Self {
            fetcher,
            profiler,
            runner,
        }
    }
}

/// A repository metadata source.
pub trait Collector {
    /// Short name used in logs, e.g. `debian`.
    fn name(&self) -> &'static str;

    /// Reads the repository and adds its triples to `graph`.
    ///
    /// # Errors
    ///
    /// Returns a [`CollectError`] when required metadata cannot be fetched
    /// or parsed. Optional inputs that are missing are logged and skipped.
    fn collect(&self, ctx: &CollectContext<'_>, graph: &mut Graph) -> Result<CollectSummary, CollectError>;
}

/// An empty graph with the usual prefixes bound, ready for collection.
#[must_use]
pub fn new_graph() -> Graph {
    let mut graph = Graph::with_scope("g");
    for (prefix, ns) in [("rdf", RDF), ("rdfs", RDFS), ("owl", OWL), ("xsd", XSD)] {
        graph.bind_prefix(prefix, ns);
    }
    for module in &Ontology::full().namespaces {
        graph.bind_prefix(module.namespace.prefix, module.namespace.iri);
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_binds_vocabulary_prefixes() {
        let graph = new_graph();
        assert!(graph.is_empty());
        assert_eq!(
            graph.prefixes().get("deb").map(String::as_str),
            Some("http://packagegraph.github.io/ontology/debian#")
        );
        assert!(graph.prefixes().contains_key("rpm"));
        assert!(graph.prefixes().contains_key("owl"));
    }
}
