//! RPM (`repodata/`) repository collector.
//!
//! `repomd.xml` locates the metadata files. `primary` is required and
//! supplies packages and their capability relations; `filelists` and
//! `other` are optional and add installed files and changelogs to packages
//! known from `primary`.

pub mod filelists;
pub mod other;
pub mod primary;
pub mod repomd;
mod xml;

use std::collections::HashMap;

use indexmap::IndexMap;
use packagegraph_ontology::{Graph, Term};

use self::primary::PrimaryPackage;
use crate::error::CollectError;
use crate::fetch::{fetch_text, join_url};
use crate::{CollectContext, CollectSummary, Collector};

/// Collects every package of an RPM repository.
#[derive(Debug, Clone)]
pub struct RpmCollector {
    /// Repository root containing `repodata/`.
    pub repo_url: String,
}

impl RpmCollector {
    /// Creates a collector for the repository at `repo_url`.
    #[must_use]
    pub fn new(repo_url: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
        }
    }

    fn locations(&self, ctx: &CollectContext<'_>) -> Result<IndexMap<String, String>, CollectError> {
        let url = join_url(&self.repo_url, "repodata/repomd.xml");
        tracing::info!(%url, "fetching repomd.xml");
        let text = fetch_text(ctx.fetcher, &url)?;
        repomd::parse_repomd(&text).map_err(|source| CollectError::Xml { url, source })
    }

    /// Fetches and parses the metadata file of type `kind`, if listed.
    fn metadata<T>(
        &self,
        ctx: &CollectContext<'_>,
        locations: &IndexMap<String, String>,
        kind: &str,
        parse: impl FnOnce(&str) -> Result<T, quick_xml::Error>,
    ) -> Result<Option<T>, CollectError> {
        let Some(href) = locations.get(kind) else {
            tracing::warn!(kind, "repomd.xml does not list this metadata");
            return Ok(None);
        };
        let url = join_url(&self.repo_url, href);
        tracing::info!(%url, kind, "downloading metadata");
        let text = fetch_text(ctx.fetcher, &url)?;
        ctx.profiler.log(&format!("Decompressed to {} characters", text.len()));
        let parsed = parse(&text).map_err(|source| CollectError::Xml { url, source })?;
        Ok(Some(parsed))
    }
}

impl Collector for RpmCollector {
    fn name(&self) -> &'static str {
        "rpm"
    }

    fn collect(&self, ctx: &CollectContext<'_>, graph: &mut Graph) -> Result<CollectSummary, CollectError> {
        let before = graph.len();
        let locations = ctx.profiler.step("Fetch repomd.xml", || self.locations(ctx))?;
        if !locations.contains_key("primary") {
            return Err(CollectError::MissingMetadata("primary".to_owned()));
        }

        let packages = ctx
            .profiler
            .step("Download Primary Metadata", || {
                self.metadata(ctx, &locations, "primary", primary::parse_primary)
            })?
            .unwrap_or_default();
        tracing::info!(packages = packages.len(), "found package entries in primary metadata");

        let processed = ctx.profiler.step("Process Packages", || {
            ctx.runner.run(&packages, graph, |chunk, g| {
                for pkg in chunk {
                    primary::add_package(g, pkg);
                }
            })
        })?;

        let index = ctx.profiler.step("Build Package Map", || package_index(&packages));

        ctx.profiler.step("Process Filelists", || -> Result<(), CollectError> {
            if let Some(lists) = self.metadata(ctx, &locations, "filelists", filelists::parse_filelists)? {
                ctx.runner.run(&lists, graph, |chunk, g| filelists::add_files(g, chunk, &index))?;
            }
            Ok(())
        })?;

        ctx.profiler.step("Process Other Metadata", || -> Result<(), CollectError> {
            if let Some(logs) = self.metadata(ctx, &locations, "other", other::parse_other)? {
                ctx.runner.run(&logs, graph, |chunk, g| other::add_changelogs(g, chunk, &index))?;
            }
            Ok(())
        })?;

        Ok(CollectSummary {
            packages: processed,
            triples_added: graph.len().saturating_sub(before),
        })
    }
}

fn package_index(packages: &[PrimaryPackage]) -> HashMap<String, Term> {
    packages
        .iter()
        .filter(|p| !p.pkgid.is_empty())
        .map(|p| (p.pkgid.clone(), p.iri()))
        .collect()
}
