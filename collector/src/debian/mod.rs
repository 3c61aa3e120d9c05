//! Debian (APT) repository collector.
//!
//! Reads `dists/{dist}/Release`, the binary `Packages.gz` index of one
//! component and architecture, and the matching `Contents` index, and emits
//! `deb:` triples for the distribution, every package, its relationships and
//! the files it ships.

pub mod contents;
pub mod control;
pub mod dependency;
pub mod release;

use std::collections::HashMap;

use packagegraph_ontology::model::iris::{DEB, RDF_TYPE};
use packagegraph_ontology::{iri, Graph, Term};

use self::control::Stanza;
use self::release::ReleaseInfo;
use crate::error::CollectError;
use crate::fetch::{fetch_text, fetch_text_lossy, join_url};
use crate::{CollectContext, CollectSummary, Collector};

/// Collects one component and architecture of a Debian distribution.
#[derive(Debug, Clone)]
pub struct DebianCollector {
    /// Repository root, e.g. `http://deb.debian.org/debian`.
    pub repo_url: String,
    /// Suite or codename, e.g. `stable` or `bookworm`.
    pub distribution: String,
    /// Archive component, e.g. `main`.
    pub component: String,
    /// Binary index directory, e.g. `binary-amd64`.
    pub arch: String,
}

impl DebianCollector {
    /// Creates a collector for `component` = `main`, `arch` = `binary-amd64`.
    #[must_use]
    pub fn new(repo_url: impl Into<String>, distribution: impl Into<String>) -> Self {
        Self {
            repo_url: repo_url.into(),
            distribution: distribution.into(),
            component: "main".to_owned(),
            arch: "binary-amd64".to_owned(),
        }
    }

    fn dists_url(&self, path: &str) -> String {
        join_url(&self.repo_url, &format!("dists/{}/{path}", self.distribution))
    }

    /// Architecture name used by `Contents-{arch}` files: the last `-`
    /// separated part of [`arch`](Self::arch).
    #[must_use]
    pub fn contents_arch(&self) -> &str {
        self.arch.rsplit('-').next().unwrap_or(&self.arch)
    }

    /// Candidate Contents URLs, most specific first.
    #[must_use]
    pub fn contents_urls(&self) -> [String; 2] {
        let file = format!("Contents-{}.gz", self.contents_arch());
        [
            self.dists_url(&format!("{}/{file}", self.component)),
            self.dists_url(&file),
        ]
    }

    fn release(&self, ctx: &CollectContext<'_>) -> Result<ReleaseInfo, CollectError> {
        let url = self.dists_url("Release");
        tracing::info!(%url, "fetching Release");
        let text = fetch_text(ctx.fetcher, &url)?;
        release::parse_release(&text, &self.distribution)
    }

    fn packages(&self, ctx: &CollectContext<'_>) -> Result<Vec<Stanza>, CollectError> {
        let url = self.dists_url(&format!("{}/{}/Packages.gz", self.component, self.arch));
        tracing::info!(%url, "downloading package index");
        let text = ctx
            .profiler
            .step("Download Packages.gz", || fetch_text(ctx.fetcher, &url))?;
        ctx.profiler.log(&format!("Decompressed to {} characters", text.len()));
        let stanzas = ctx
            .profiler
            .step("Parse Package Entries", || control::parse_packages(&text));
        ctx.profiler.log(&format!("Parsed {} valid packages", stanzas.len()));
        Ok(stanzas)
    }

    fn contents(&self, ctx: &CollectContext<'_>) -> Option<String> {
        for url in self.contents_urls() {
            tracing::info!(%url, "downloading Contents index");
            match fetch_text_lossy(ctx.fetcher, &url) {
                Ok(text) => return Some(text),
                Err(e) if e.is_unavailable() => {
                    tracing::debug!(%url, error = %e, "Contents index not available here");
                }
                Err(e) => {
                    tracing::warn!(%url, error = %e, "cannot read Contents index");
                    return None;
                }
            }
        }
        tracing::warn!(
            distribution = %self.distribution,
            arch = self.contents_arch(),
            "no Contents index found; packages will have no file lists"
        );
        None
    }
}

impl Collector for DebianCollector {
    fn name(&self) -> &'static str {
        "debian"
    }

    fn collect(&self, ctx: &CollectContext<'_>, graph: &mut Graph) -> Result<CollectSummary, CollectError> {
        let before = graph.len();

        let info = ctx.profiler.step("Get Release Info", || self.release(ctx))?;
        tracing::info!(
            distribution = %self.distribution,
            origin = %info.origin,
            suite = %info.suite,
            codename = %info.codename,
            "resolved release"
        );
        ctx.profiler
            .step("Add Distribution Metadata", || release::add_distribution(graph, &info));

        let stanzas = ctx.profiler.step("Download Package Metadata", || self.packages(ctx))?;
        tracing::info!(packages = stanzas.len(), "found package entries");

        let suite = info.codename_iri();
        let processed = ctx.profiler.step("Process Packages", || {
            ctx.runner.run(&stanzas, graph, |chunk, g| {
                for stanza in chunk {
                    add_package(g, stanza, &suite);
                }
            })
        })?;

        ctx.profiler.step("Process Contents File", || -> Result<(), CollectError> {
            let Some(text) = self.contents(ctx) else {
                return Ok(());
            };
            let index = package_index(&stanzas);
            let lines: Vec<&str> = text.lines().collect();
            ctx.profiler.log(&format!("Split into {} lines", lines.len()));
            ctx.runner.run(&lines, graph, |chunk, g| contents::add_files(g, chunk, &index))?;
            Ok(())
        })?;

        Ok(CollectSummary {
            packages: processed,
            triples_added: graph.len().saturating_sub(before),
        })
    }
}

/// IRI of a package stanza: `deb:{quote(name-version)}`.
#[must_use]
pub fn package_iri(name: &str, version: &str) -> Term {
    Term::iri(format!("{DEB}{}", iri::quote(&format!("{name}-{version}"))))
}

/// Emits the triples for one stanza. Stanzas without `Package` or `Version`
/// are ignored.
pub fn add_package(graph: &mut Graph, stanza: &Stanza, suite: &Term) {
    let (Some(name), Some(version)) = (stanza.name(), stanza.version()) else {
        return;
    };
    let package = package_iri(name, version);
    graph.add(package.clone(), RDF_TYPE, Term::iri(format!("{DEB}DebianPackage")));
    graph.add(package.clone(), format!("{DEB}inSuite"), suite.clone());
    graph.add(package.clone(), format!("{DEB}name"), Term::literal(name));
    graph.add(package.clone(), format!("{DEB}version"), Term::literal(version));

    for (key, value) in stanza.fields() {
        if key == "Package" || key == "Version" || dependency::is_relation_field(key) {
            continue;
        }
        let Some(local) = field_property(key) else {
            continue;
        };
        graph.add(package.clone(), format!("{DEB}{local}"), Term::literal(value));
    }

    for (field, property) in dependency::RELATION_FIELDS {
        if let Some(value) = stanza.get(field) {
            let relations = dependency::parse_relations(value);
            dependency::add_relations(graph, &package, property, &relations);
        }
    }
}

/// Local name for a plain field: lowercase with `-` removed. Keys that would
/// not form a valid name yield `None`.
#[must_use]
pub fn field_property(key: &str) -> Option<String> {
    let local: String = key
        .chars()
        .filter(|c| *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    let valid = local.starts_with(|c: char| c.is_ascii_alphabetic())
        && local.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(local)
}

fn package_index(stanzas: &[Stanza]) -> HashMap<String, Term> {
    stanzas
        .iter()
        .filter_map(|s| Some((s.name()?.to_owned(), package_iri(s.name()?, s.version()?))))
        .collect()
}
