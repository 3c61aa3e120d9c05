//! HTML page and sitemap rendering.
//!
//! Every string taken from an ontology goes through [`escape_html`] or
//! [`render_markdown`] before it reaches a page.

use std::collections::HashMap;

use packagegraph_ontology::iri::split;
use packagegraph_ontology::serializer::RdfFormat;
use pulldown_cmark::{html, Event, Options, Parser};

use crate::model::{BreadcrumbItem, DocumentView, TermEntry, TermKind};

/// Escapes HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders an `rdfs:comment` as Markdown. Raw HTML in the source is shown as text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
        .map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            other => other,
        });
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Wraps `body` in the site layout.
pub fn render_page(title: &str, body: &str, breadcrumbs: &[BreadcrumbItem]) -> String {
    let mut crumbs = String::new();
    for (i, item) in breadcrumbs.iter().enumerate() {
        if i > 0 {
            crumbs.push_str(" <span aria-hidden=\"true\">/</span> ");
        }
        if item.url.is_empty() {
            crumbs.push_str(&format!(
                "<span aria-current=\"page\">{}</span>",
                escape_html(&item.label)
            ));
        } else {
            crumbs.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&item.url),
                escape_html(&item.label)
            ));
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | packagegraph</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<header><a class="site-name" href="/">packagegraph</a></header>
<nav class="breadcrumbs" aria-label="Breadcrumb">{crumbs}</nav>
<main>
{body}
</main>
<footer><p>Generated from the packagegraph ontology sources.</p></footer>
</body>
</html>
"#,
        title = escape_html(title),
    )
}

/// The homepage: one row per document with its term counts.
pub fn render_homepage(views: &[DocumentView]) -> String {
    let mut rows = String::new();
    for view in views {
        rows.push_str(&format!(
            "<tr><td><a href=\"/{name}/\">{title}</a></td><td><code>{name}</code></td>\
             <td>{classes}</td><td>{properties}</td><td>{triples}</td></tr>\n",
            name = escape_html(&view.name),
            title = escape_html(&view.title),
            classes = view.classes.len(),
            properties = view.properties.len(),
            triples = view.triples,
        ));
    }
    format!(
        "<h1>packagegraph ontologies</h1>\n\
         <p>RDF vocabularies for package-management metadata.</p>\n\
         <table>\n<thead><tr><th>Ontology</th><th>Name</th><th>Classes</th>\
         <th>Properties</th><th>Triples</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    )
}

/// The page for one document.
pub fn render_document_page(view: &DocumentView) -> String {
    let anchors: HashMap<&str, &TermEntry> = view
        .classes
        .iter()
        .chain(&view.properties)
        .map(|t| (t.iri.as_str(), t))
        .collect();

    let mut html = format!("<h1>{}</h1>\n", escape_html(&view.title));
    if let Some(description) = &view.description {
        html.push_str(&render_markdown(description));
    }

    html.push_str("<section class=\"downloads\">\n<h2>Downloads</h2>\n<ul>\n");
    for format in RdfFormat::ALL {
        html.push_str(&format!(
            "<li><a href=\"{name}.{ext}\" type=\"{media}\">{label}</a></li>\n",
            name = escape_html(&view.name),
            ext = format.extension(),
            media = format.media_type(),
            label = format.name(),
        ));
    }
    html.push_str("</ul>\n</section>\n");

    html.push_str(&format!(
        "<section class=\"terms\">\n<h2>Classes ({})</h2>\n",
        view.classes.len()
    ));
    for class in &view.classes {
        render_term(&mut html, class, &anchors);
    }
    html.push_str("</section>\n");

    html.push_str(&format!(
        "<section class=\"terms\">\n<h2>Properties ({})</h2>\n",
        view.properties.len()
    ));
    for prop in &view.properties {
        render_term(&mut html, prop, &anchors);
    }
    html.push_str("</section>\n");
    html
}

fn render_term(html: &mut String, term: &TermEntry, anchors: &HashMap<&str, &TermEntry>) {
    html.push_str(&format!(
        "<article class=\"term\" id=\"{anchor}\">\n<h3>{label}</h3>\n<p class=\"iri\"><code>{iri}</code></p>\n",
        anchor = escape_html(&term.anchor()),
        label = escape_html(&term.label),
        iri = escape_html(&term.iri),
    ));
    if let Some(ty) = &term.property_type {
        html.push_str(&format!("<p class=\"kind\">{}</p>\n", escape_html(ty)));
    }
    if let Some(comment) = &term.comment {
        html.push_str(&render_markdown(comment));
    }

    let parent_label = match term.kind {
        TermKind::Class => "Subclass of",
        TermKind::Property => "Subproperty of",
    };
    let rows = [
        (parent_label, &term.parents),
        ("Domain", &term.domain),
        ("Range", &term.range),
    ];
    if rows.iter().any(|(_, targets)| !targets.is_empty()) {
        html.push_str("<dl>\n");
        for (label, targets) in rows {
            if targets.is_empty() {
                continue;
            }
            let links: Vec<String> = targets.iter().map(|t| link(t, anchors)).collect();
            html.push_str(&format!("<dt>{label}</dt><dd>{}</dd>\n", links.join(", ")));
        }
        html.push_str("</dl>\n");
    }
    html.push_str("</article>\n");
}

/// Links to the term's anchor when it is on this page, else to the IRI.
fn link(iri: &str, anchors: &HashMap<&str, &TermEntry>) -> String {
    match anchors.get(iri) {
        Some(term) => format!(
            "<a href=\"#{}\">{}</a>",
            escape_html(&term.anchor()),
            escape_html(&term.label)
        ),
        None => {
            let local = split(iri).map_or(iri, |(_, local)| local);
            format!(
                "<a href=\"{}\">{}</a>",
                escape_html(iri),
                escape_html(local)
            )
        }
    }
}

/// `sitemap.xml` for the given site-relative paths.
pub fn render_sitemap(base_url: &str, paths: &[String]) -> String {
    let base = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for path in paths {
        xml.push_str(&format!(
            "  <url><loc>{}{}</loc></url>\n",
            escape_html(base),
            escape_html(path)
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(local: &str, kind: TermKind) -> TermEntry {
        TermEntry {
            iri: format!("http://example.org/pkg#{local}"),
            local: local.to_string(),
            qualifier: None,
            label: local.to_string(),
            comment: None,
            kind,
            property_type: None,
            parents: Vec::new(),
            domain: Vec::new(),
            range: Vec::new(),
        }
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">&'"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;"
        );
    }

    #[test]
    fn markdown_renders_but_raw_html_does_not() {
        let html = render_markdown("A *package* <script>alert(1)</script>");
        assert!(html.contains("<em>package</em>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn document_page_links_local_and_external_terms() {
        let mut package = term("Package", TermKind::Class);
        package.parents = vec!["http://xmlns.com/foaf/0.1/Agent".to_string()];
        let mut depends = term("depends", TermKind::Property);
        depends.property_type = Some("ObjectProperty".to_string());
        depends.domain = vec![package.iri.clone()];
        let view = DocumentView {
            name: "pkg".to_string(),
            title: "Packages & more".to_string(),
            description: None,
            classes: vec![package],
            properties: vec![depends],
            triples: 5,
        };

        let html = render_document_page(&view);
        assert!(html.contains("<h1>Packages &amp; more</h1>"));
        assert!(html.contains("id=\"class-Package\""));
        assert!(html.contains("id=\"prop-depends\""));
        assert!(html.contains("<dt>Domain</dt><dd><a href=\"#class-Package\">Package</a></dd>"));
        assert!(html.contains("<a href=\"http://xmlns.com/foaf/0.1/Agent\">Agent</a>"));
        assert!(html.contains("href=\"pkg.jsonld\" type=\"application/ld+json\""));
    }

    #[test]
    fn sitemap_joins_base_and_paths() {
        let xml = render_sitemap("https://example.org/", &["/".to_string(), "/debian/".to_string()]);
        assert!(xml.contains("<loc>https://example.org/</loc>"));
        assert!(xml.contains("<loc>https://example.org/debian/</loc>"));
    }

    #[test]
    fn page_layout_escapes_title_and_marks_current_crumb() {
        let page = render_page(
            "<Debian>",
            "<p>body</p>",
            &[
                BreadcrumbItem { label: "Home".into(), url: "/".into() },
                BreadcrumbItem { label: "Debian".into(), url: String::new() },
            ],
        );
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>&lt;Debian&gt; | packagegraph</title>"));
        assert!(page.contains("<span aria-current=\"page\">Debian</span>"));
        assert!(page.contains("<p>body</p>"));
    }
}
