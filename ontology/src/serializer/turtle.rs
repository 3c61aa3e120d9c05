//! Turtle 1.1 serializer.
//!
//! Produces a prefix block followed by one statement per subject, with
//! predicates separated by `;` and repeated objects by `,`.

use indexmap::IndexMap;

use super::{escape_iri, escape_string};
use crate::graph::{Graph, Literal, Term};
use crate::model::iris::RDF_TYPE;

/// Serializes `graph` to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 64 + 512);

    for (prefix, ns) in graph.prefixes() {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, escape_iri(ns)));
    }
    if !graph.prefixes().is_empty() {
        out.push('\n');
    }

    for (subject, pairs) in graph.by_subject() {
        let mut predicates: IndexMap<&str, Vec<&Term>> = IndexMap::new();
        // rdf:type first so the statement reads `<s> a C ; ...`
        for &(p, o) in &pairs {
            if p == RDF_TYPE {
                predicates.entry(p).or_default().push(o);
            }
        }
        for &(p, o) in &pairs {
            if p != RDF_TYPE {
                predicates.entry(p).or_default().push(o);
            }
        }

        out.push_str(&term(graph, subject));
        let last = predicates.len().saturating_sub(1);
        for (i, (predicate, objects)) in predicates.iter().enumerate() {
            let pred = if *predicate == RDF_TYPE {
                "a".to_string()
            } else {
                iri(graph, predicate)
            };
            let objs: Vec<String> = objects.iter().map(|o| term(graph, o)).collect();
            out.push_str(&format!(
                "\n  {} {}{}",
                pred,
                objs.join(" , "),
                if i == last { " ." } else { " ;" }
            ));
        }
        out.push_str("\n\n");
    }

    out
}

fn iri(graph: &Graph, iri: &str) -> String {
    graph
        .compact(iri)
        .unwrap_or_else(|| format!("<{}>", escape_iri(iri)))
}

fn term(graph: &Graph, t: &Term) -> String {
    match t {
        Term::Iri(i) => iri(graph, i),
        Term::BlankNode(label) => format!("_:{label}"),
        Term::Literal(lit) => literal(graph, lit),
    }
}

fn literal(graph: &Graph, lit: &Literal) -> String {
    let mut s = format!("\"{}\"", escape_string(&lit.value));
    if let Some(lang) = &lit.language {
        s.push('@');
        s.push_str(lang);
    } else if let Some(dt) = &lit.datatype {
        s.push_str("^^");
        s.push_str(&iri(graph, dt));
    }
    s
}
