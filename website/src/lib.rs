//! packagegraph static site generator.
//!
//! Publishes ontology documents as a static site that Apache can serve with
//! HTTP content negotiation: browsers get an HTML page per document, RDF
//! clients get the serialization their `Accept` header asks for.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use packagegraph_ontology::Ontology;
//! use packagegraph_website::{generate, SiteDocument};
//!
//! let docs = [SiteDocument::new("packagegraph", Ontology::full().to_graph())];
//! generate(Path::new("public"), &docs, "https://packagegraph.github.io").expect("Website generation failed");
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   .htaccess
//!   sitemap.xml
//!   css/style.css
//!   <name>/
//!     index.html
//!     index.var
//!     <name>.ttl  <name>.nt  <name>.jsonld  <name>.rdf
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod extractor;
pub mod model;
pub mod negotiation;
pub mod renderer;
pub mod writer;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use packagegraph_ontology::serializer::{serialize, RdfFormat};

pub use model::SiteDocument;

use extractor::{document_breadcrumbs, document_view, home_breadcrumbs};
use renderer::{render_document_page, render_homepage, render_page, render_sitemap};
use writer::SiteWriter;

/// Generates the site for `documents` into `out_dir`.
///
/// `base_url` is the public root of the site, used in `sitemap.xml`.
/// Returns every file written.
///
/// # Errors
///
/// Returns an error if a document name is empty, repeated, or not a plain
/// path segment, if a graph cannot be serialized, or if any file cannot be
/// written.
pub fn generate(out_dir: &Path, documents: &[SiteDocument], base_url: &str) -> Result<Vec<PathBuf>> {
    check_names(documents)?;
    let views: Vec<_> = documents.iter().map(document_view).collect();
    let mut site = SiteWriter::new(out_dir);

    let home = render_page("packagegraph", &render_homepage(&views), &home_breadcrumbs());
    site.page("/", &home)?;

    for (doc, view) in documents.iter().zip(&views) {
        let name = &doc.name;
        let body = render_document_page(view);
        site.page(
            &format!("/{name}/"),
            &render_page(&view.title, &body, &document_breadcrumbs(&view.title)),
        )?;

        for format in RdfFormat::ALL {
            let text = serialize(&doc.graph, format)
                .with_context(|| format!("Cannot serialize {name} as {format}"))?;
            site.write(&format!("{name}/{name}.{}", format.extension()), &text)?;
        }
        site.write(&format!("{name}/index.var"), &negotiation::render_type_map(name))?;
    }

    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    site.write(".htaccess", &negotiation::render_htaccess(&names))?;
    let sitemap = render_sitemap(base_url, site.pages());
    site.write("sitemap.xml", &sitemap)?;
    site.write("css/style.css", style_css())?;

    Ok(site.into_files())
}

fn check_names(documents: &[SiteDocument]) -> Result<()> {
    let mut seen = HashSet::new();
    for doc in documents {
        let plain = !doc.name.is_empty()
            && !doc.name.starts_with('.')
            && doc
                .name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !plain {
            bail!("document name {:?} is not a plain path segment", doc.name);
        }
        if !seen.insert(doc.name.as_str()) {
            bail!("document name {:?} is used twice", doc.name);
        }
    }
    Ok(())
}

/// Returns the complete CSS stylesheet.
fn style_css() -> &'static str {
    include_str!("../static/css/style.css")
}
