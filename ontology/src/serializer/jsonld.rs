//! JSON-LD 1.1 serializer.
//!
//! Produces a single document with an `@context` built from the graph's
//! prefix bindings and a flat `@graph` array holding one node object per
//! subject. IRIs are compacted to `prefix:local` wherever a binding applies.

use serde_json::{json, Map, Value};

use crate::graph::{Graph, Term};
use crate::model::iris::RDF_TYPE;

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(graph: &Graph) -> Value {
    let mut context = Map::new();
    for (prefix, ns) in graph.prefixes() {
        if !prefix.is_empty() {
            context.insert(prefix.clone(), json!(ns));
        }
    }

    let mut nodes = Vec::new();
    for (subject, pairs) in graph.by_subject() {
        let mut node = Map::new();
        node.insert("@id".to_owned(), json!(node_id(graph, subject)));

        let types: Vec<Value> = pairs
            .iter()
            .filter(|(p, _)| *p == RDF_TYPE)
            .filter_map(|(_, o)| match o {
                Term::Iri(iri) => Some(json!(compact(graph, iri))),
                _ => None,
            })
            .collect();
        if !types.is_empty() {
            node.insert("@type".to_owned(), one_or_many(types));
        }

        let mut properties: Map<String, Value> = Map::new();
        for &(p, o) in &pairs {
            // Non-IRI types cannot live under @type; they stay ordinary values.
            if p == RDF_TYPE && matches!(o, Term::Iri(_)) {
                continue;
            }
            let key = compact(graph, p);
            let value = object(graph, o);
            match properties.get_mut(&key) {
                Some(Value::Array(values)) => values.push(value),
                _ => {
                    properties.insert(key, Value::Array(vec![value]));
                }
            }
        }
        for (key, values) in properties {
            let values = match values {
                Value::Array(values) => one_or_many(values),
                other => other,
            };
            node.insert(key, values);
        }

        nodes.push(Value::Object(node));
    }

    json!({
        "@context": Value::Object(context),
        "@graph": nodes
    })
}

fn compact(graph: &Graph, iri: &str) -> String {
    graph.compact(iri).unwrap_or_else(|| iri.to_owned())
}

fn node_id(graph: &Graph, t: &Term) -> String {
    match t {
        Term::Iri(iri) => compact(graph, iri),
        Term::BlankNode(label) => format!("_:{label}"),
        // Literal subjects are not valid RDF; render the lexical form.
        Term::Literal(lit) => lit.value.clone(),
    }
}

fn object(graph: &Graph, t: &Term) -> Value {
    match t {
        Term::Iri(_) | Term::BlankNode(_) => json!({ "@id": node_id(graph, t) }),
        Term::Literal(lit) => {
            let mut v = Map::new();
            v.insert("@value".to_owned(), json!(lit.value));
            if let Some(lang) = &lit.language {
                v.insert("@language".to_owned(), json!(lang));
            } else if let Some(dt) = &lit.datatype {
                v.insert("@type".to_owned(), json!(compact(graph, dt)));
            }
            Value::Object(v)
        }
    }
}

fn one_or_many(mut values: Vec<Value>) -> Value {
    if values.len() == 1 {
        values.remove(0)
    } else {
        Value::Array(values)
    }
}
