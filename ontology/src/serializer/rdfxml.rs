//! RDF/XML serializer.
//!
//! Writes one `rdf:Description` per subject. Predicates become property
//! elements, so every predicate IRI must split into a namespace and an XML
//! name; namespaces without a bound prefix are given generated `nsN` prefixes.

use indexmap::IndexMap;

use super::SerializeError;
use crate::graph::{Graph, Term};
use crate::iri;
use crate::model::iris::RDF;

/// Serializes `graph` to an RDF/XML string.
///
/// # Errors
///
/// Returns [`SerializeError::UnrepresentablePredicate`] if a predicate IRI
/// does not end in a valid XML name.
pub fn to_rdf_xml(graph: &Graph) -> Result<String, SerializeError> {
    // namespace IRI -> prefix
    let mut namespaces: IndexMap<String, String> = IndexMap::new();
    namespaces.insert(RDF.to_owned(), "rdf".to_owned());
    for (prefix, ns) in graph.prefixes() {
        if prefix.is_empty() || prefix == "rdf" || prefix == "xml" || !is_xml_name(prefix) {
            continue;
        }
        namespaces.entry(ns.clone()).or_insert_with(|| prefix.clone());
    }

    let mut qnames: IndexMap<&str, String> = IndexMap::new();
    for t in graph.iter() {
        if qnames.contains_key(t.predicate.as_str()) {
            continue;
        }
        let (ns, local) = iri::split(&t.predicate)
            .filter(|(_, local)| is_xml_name(local))
            .ok_or_else(|| SerializeError::UnrepresentablePredicate(t.predicate.clone()))?;
        if !namespaces.contains_key(ns) {
            let generated = unused_prefix(&namespaces);
            namespaces.insert(ns.to_owned(), generated);
        }
        let prefix = namespaces.get(ns).map_or("", String::as_str);
        qnames.insert(t.predicate.as_str(), format!("{prefix}:{local}"));
    }

    let mut out = String::with_capacity(graph.len() * 96 + 512);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rdf:RDF");
    for (ns, prefix) in &namespaces {
        out.push_str(&format!("\n   xmlns:{}=\"{}\"", prefix, escape_xml(ns)));
    }
    out.push_str(">\n");

    for (subject, pairs) in graph.by_subject() {
        match subject {
            Term::BlankNode(label) => {
                out.push_str(&format!("  <rdf:Description rdf:nodeID=\"{}\">\n", escape_xml(label)));
            }
            Term::Iri(i) => {
                out.push_str(&format!("  <rdf:Description rdf:about=\"{}\">\n", escape_xml(i)));
            }
            // Literal subjects cannot be expressed; skip them.
            Term::Literal(_) => continue,
        }
        for (predicate, object) in pairs {
            let qname = qnames
                .get(predicate)
                .ok_or_else(|| SerializeError::UnrepresentablePredicate(predicate.to_owned()))?;
            match object {
                Term::Iri(i) => out.push_str(&format!(
                    "    <{} rdf:resource=\"{}\"/>\n",
                    qname,
                    escape_xml(i)
                )),
                Term::BlankNode(label) => out.push_str(&format!(
                    "    <{} rdf:nodeID=\"{}\"/>\n",
                    qname,
                    escape_xml(label)
                )),
                Term::Literal(lit) => {
                    let attr = if let Some(lang) = &lit.language {
                        format!(" xml:lang=\"{}\"", escape_xml(lang))
                    } else if let Some(dt) = &lit.datatype {
                        format!(" rdf:datatype=\"{}\"", escape_xml(dt))
                    } else {
                        String::new()
                    };
                    out.push_str(&format!(
                        "    <{}{}>{}</{}>\n",
                        qname,
                        attr,
                        escape_xml(&lit.value),
                        qname
                    ));
                }
            }
        }
        out.push_str("  </rdf:Description>\n");
    }

    out.push_str("</rdf:RDF>\n");
    Ok(out)
}

/// Escapes text for XML content and double-quoted attributes.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\r' => out.push_str("&#13;"),
            c => out.push(c),
        }
    }
    out
}

/// The first `nsN` prefix, counting from the number of namespaces, that no
/// namespace uses yet.
fn unused_prefix(namespaces: &IndexMap<String, String>) -> String {
    (namespaces.len()..)
        .map(|n| format!("ns{n}"))
        .find(|candidate| !namespaces.values().any(|p| p == candidate))
        .unwrap_or_default()
}

fn is_xml_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Literal;
    use crate::model::iris::XSD_INTEGER;
    use crate::Ontology;

    #[test]
    fn declares_namespaces_and_descriptions() {
        let xml = to_rdf_xml(&Ontology::full().to_graph()).unwrap_or_default();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("xmlns:deb=\"http://packagegraph.github.io/ontology/debian#\""));
        assert!(xml.contains(
            "<rdf:Description rdf:about=\"http://packagegraph.github.io/ontology/debian#Suite\">"
        ));
        assert!(xml.contains("<rdf:type rdf:resource=\"http://www.w3.org/2002/07/owl#Class\"/>"));
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn generates_prefixes_for_unbound_namespaces() {
        let mut g = Graph::with_scope("x");
        let b = g.fresh_blank();
        g.add(Term::iri("http://example.org/s"), "http://example.org/vocab#count", Term::typed("3", XSD_INTEGER));
        g.add(b, "http://example.org/vocab#label", Term::Literal(Literal::lang("a<b", "en")));
        let xml = to_rdf_xml(&g).unwrap_or_default();
        assert!(xml.contains("xmlns:ns1=\"http://example.org/vocab#\""));
        assert!(xml.contains(
            "<ns1:count rdf:datatype=\"http://www.w3.org/2001/XMLSchema#integer\">3</ns1:count>"
        ));
        assert!(xml.contains("<rdf:Description rdf:nodeID=\"xb1\">"));
        assert!(xml.contains("<ns1:label xml:lang=\"en\">a&lt;b</ns1:label>"));
    }

    #[test]
    fn generated_prefixes_skip_ones_already_bound() {
        let mut g = Graph::new();
        g.bind_prefix("ns2", "http://bound.example/");
        g.add(Term::iri("http://bound.example/s"), "http://bound.example/p", Term::literal("a"));
        g.add(Term::iri("http://bound.example/s"), "http://other.example/q", Term::literal("b"));
        let xml = to_rdf_xml(&g).unwrap_or_default();
        assert_eq!(xml.matches("xmlns:ns2=").count(), 1);
        assert!(xml.contains("xmlns:ns2=\"http://bound.example/\""));
        assert!(xml.contains("xmlns:ns3=\"http://other.example/\""));
        assert!(xml.contains("<ns3:q>b</ns3:q>"));
    }

    #[test]
    fn rejects_predicates_without_local_name() {
        let mut g = Graph::new();
        g.add(Term::iri("http://example.org/s"), "http://example.org/p/123", Term::literal("x"));
        assert!(matches!(
            to_rdf_xml(&g),
            Err(SerializeError::UnrepresentablePredicate(_))
        ));
    }
}
