//! Apache content negotiation for published documents.
//!
//! Two mechanisms are written so the site works with either module enabled:
//! `mod_rewrite` rules in the root `.htaccess` that redirect by `Accept`
//! header, and a `mod_negotiation` type map (`index.var`) per document.

use packagegraph_ontology::serializer::RdfFormat;

/// Root `.htaccess` for the given document names.
///
/// A request for `/<name>` or `/<name>/` whose `Accept` header names one of
/// the RDF media types is redirected (303) to that serialization; anything
/// else falls through to the HTML page.
pub fn render_htaccess(names: &[&str]) -> String {
    let mut out = String::from(
        "# Content negotiation for packagegraph ontology documents.\n\
         Options -MultiViews\n\
         DirectoryIndex index.html\n\n",
    );
    for format in RdfFormat::ALL {
        out.push_str(&format!(
            "AddType {} .{}\n",
            format.media_type(),
            format.extension()
        ));
    }
    out.push_str("AddHandler type-map .var\n\nRewriteEngine On\n");

    for name in names {
        out.push('\n');
        let path = escape_regex(name);
        for format in RdfFormat::ALL {
            let pattern = escape_regex(format.media_type());
            out.push_str(&format!(
                "RewriteCond %{{HTTP_ACCEPT}} {pattern}\n\
                 RewriteRule ^{path}/?$ /{name}/{name}.{ext} [R=303,L]\n",
                ext = format.extension(),
            ));
        }
        out.push_str(&format!("RewriteRule ^{path}$ /{name}/ [R=301,L]\n"));
    }
    out
}

/// Backslash-escapes the regex metacharacters of a literal rule pattern.
fn escape_regex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '^' | '$' | '\\'
        ) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Type map listing the HTML page and every serialization of `name`.
pub fn render_type_map(name: &str) -> String {
    let mut out = format!("URI: {name}\n\nURI: index.html\nContent-Type: text/html; qs=1.0\n");
    for format in RdfFormat::ALL {
        out.push_str(&format!(
            "\nURI: {name}.{}\nContent-Type: {}; qs=0.9\n",
            format.extension(),
            format.media_type()
        ));
    }
    out
}
