//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs, `_:label` blank nodes. Suitable for
//! streaming, bulk loading, and diff-friendly storage.

use super::{escape_iri, escape_string};
use crate::graph::{Graph, Term};

/// Serializes `graph` to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph.iter() {
        out.push_str(&term(&t.subject));
        out.push_str(" <");
        out.push_str(&escape_iri(&t.predicate));
        out.push_str("> ");
        out.push_str(&term(&t.object));
        out.push_str(" .\n");
    }
    out
}

/// Renders a single term in N-Triples syntax.
#[must_use]
pub fn term(t: &Term) -> String {
    match t {
        Term::Iri(iri) => format!("<{}>", escape_iri(iri)),
        Term::BlankNode(label) => format!("_:{label}"),
        Term::Literal(lit) => {
            let mut s = format!("\"{}\"", escape_string(&lit.value));
            if let Some(lang) = &lit.language {
                s.push('@');
                s.push_str(lang);
            } else if let Some(dt) = &lit.datatype {
                s.push_str(&format!("^^<{}>", escape_iri(dt)));
            }
            s
        }
    }
}
