//! Turtle parsing into an owned [`Graph`].
//!
//! Parsing is delegated to `sophia_turtle`; triples are copied into a
//! [`Graph`] whose blank nodes are relabelled `{scope}_{label}` so that
//! documents loaded under different scopes never share a blank node.
//!
//! Prefix declarations are not exposed by the streaming parser, so they are
//! recovered from the source text and bound on the resulting graph.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term as SophiaTerm, TermKind};
use sophia_api::triple::Triple as SophiaTriple;

use crate::graph::{Graph, Literal, Term};

/// A parsed Turtle document.
#[derive(Debug, Clone)]
pub struct Document {
    /// The parsed triples, with the declared prefixes bound.
    pub graph: Graph,
    /// Prefix declarations in source order, as `(prefix, namespace)`.
    pub prefixes: Vec<(String, String)>,
}

/// Errors raised while loading Turtle.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The text is not valid Turtle.
    #[error("{name}: {message}")]
    Syntax {
        /// File name, or the scope for in-memory text.
        name: String,
        /// Parser message.
        message: String,
    },
}

/// Parses Turtle `text`, labelling its blank nodes under `scope`.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if `text` is not valid Turtle.
pub fn parse_turtle(text: &str, scope: &str) -> Result<Document, ParseError> {
    let mut graph = Graph::with_scope(scope);
    let prefixes = declared_prefixes(text);
    for (prefix, ns) in &prefixes {
        graph.bind_prefix(prefix.clone(), ns.clone());
    }

    let mut skipped = 0usize;
    sophia_turtle::parser::turtle::parse_str(text)
        .for_each_triple(|t| {
            let subject = convert(t.s(), scope);
            let predicate = t.p().iri().map(|i| i.as_str().to_owned());
            let object = convert(t.o(), scope);
            match (subject, predicate, object) {
                (Some(s), Some(p), Some(o)) => {
                    graph.add(s, p, o);
                }
                _ => skipped += 1,
            }
        })
        .map_err(|e| ParseError::Syntax {
            name: scope.to_owned(),
            message: e.to_string(),
        })?;

    // Quoted triples and variables have no counterpart in Graph.
    if skipped > 0 {
        return Err(ParseError::Syntax {
            name: scope.to_owned(),
            message: format!("{skipped} triple(s) use RDF-star terms, which are not supported"),
        });
    }

    Ok(Document { graph, prefixes })
}

/// Reads and parses the Turtle file at `path`.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if the file cannot be read and
/// [`ParseError::Syntax`] if it is not valid Turtle; syntax errors are
/// reported against the file name.
pub fn load_file(path: &Path, scope: &str) -> Result<Document, ParseError> {
    let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_turtle(&text, scope).map_err(|e| match e {
        ParseError::Syntax { message, .. } => ParseError::Syntax {
            name: path.display().to_string(),
            message,
        },
        other => other,
    })
}

/// Extracts `@prefix` / `PREFIX` declarations from Turtle source text.
///
/// Declarations inside strings or comments are not distinguished; the
/// parser rejects the document in most such cases anyway.
#[must_use]
pub fn declared_prefixes(text: &str) -> Vec<(String, String)> {
    prefix_pattern()
        .captures_iter(text)
        .map(|c| {
            let prefix = c.get(1).map_or("", |m| m.as_str());
            let ns = c.get(2).map_or("", |m| m.as_str());
            (prefix.to_owned(), ns.to_owned())
        })
        .collect()
}

#[allow(clippy::expect_used)]
fn prefix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?mi)^\s*@?prefix\s+([A-Za-z][\w.\-]*)?:\s*<([^>]*)>")
            .expect("prefix pattern is a valid regex")
    })
}

fn convert<T: SophiaTerm>(t: T, scope: &str) -> Option<Term> {
    match t.kind() {
        TermKind::Iri => t.iri().map(|i| Term::Iri(i.as_str().to_owned())),
        TermKind::BlankNode => t
            .bnode_id()
            .map(|b| Term::BlankNode(format!("{scope}_{}", b.as_str()))),
        TermKind::Literal => {
            let value = t.lexical_form()?.to_string();
            if let Some(lang) = t.language_tag() {
                return Some(Term::Literal(Literal::lang(value, lang.as_str())));
            }
            match t.datatype() {
                Some(dt) => Some(Term::Literal(Literal::typed(value, dt.as_str()))),
                None => Some(Term::Literal(Literal::plain(value))),
            }
        }
        _ => None,
    }
}
