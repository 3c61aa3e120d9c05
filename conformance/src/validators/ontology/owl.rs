//! OWL structural checks on the merged graph.
//!
//! `rdfs:subClassOf`, `owl:disjointWith`, `rdfs:domain` and `rdfs:range`
//! targets must resolve. Only targets in a namespace that the graph itself
//! defines terms in are checked; references into external vocabularies are
//! taken on trust.

use std::collections::BTreeSet;

use packagegraph_ontology::iri::split;
use packagegraph_ontology::model::iris::{
    OWL_DISJOINT_WITH, OWL_THING, RDFS, RDFS_DOMAIN, RDFS_LITERAL, RDFS_RANGE, RDFS_SUBCLASS_OF,
    RDF_LANG_STRING, RDF_LIST, XSD,
};
use packagegraph_ontology::Graph;

use super::definitions::{declared, CLASS_TYPES, PROPERTY_TYPES};
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/owl";

const CHECKED_PREDICATES: [&str; 4] = [RDFS_SUBCLASS_OF, OWL_DISJOINT_WITH, RDFS_DOMAIN, RDFS_RANGE];

/// Datatypes declared in `graph` with `rdf:type rdfs:Datatype`.
fn declared_datatypes(graph: &Graph) -> BTreeSet<&str> {
    graph
        .subjects_of_type(&format!("{RDFS}Datatype"))
        .into_iter()
        .filter_map(|t| t.as_iri())
        .collect()
}

fn is_known_datatype(declared: &BTreeSet<&str>, iri: &str) -> bool {
    iri.starts_with(XSD)
        || [RDFS_LITERAL, RDF_LANG_STRING, RDF_LIST, OWL_THING].contains(&iri)
        || declared.contains(iri)
}

/// Checks class references in `graph`.
pub fn validate(graph: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let classes = declared(graph, &CLASS_TYPES);
    let properties = declared(graph, &PROPERTY_TYPES);
    let datatypes = declared_datatypes(graph);

    let local_namespaces: BTreeSet<&str> = classes
        .iter()
        .chain(&properties)
        .filter_map(|iri| split(iri).map(|(ns, _)| ns))
        .collect();

    let mut violations: Vec<String> = Vec::new();
    let mut checked = 0usize;
    for t in graph.iter() {
        if !CHECKED_PREDICATES.contains(&t.predicate.as_str()) {
            continue;
        }
        let Some(target) = t.object.as_iri() else {
            continue;
        };
        let Some((ns, _)) = split(target) else {
            continue;
        };
        if !local_namespaces.contains(ns) {
            continue;
        }
        checked += 1;
        let allows_datatype = t.predicate == RDFS_RANGE || t.predicate == RDFS_SUBCLASS_OF;
        if classes.contains(target) || (allows_datatype && is_known_datatype(&datatypes, target)) {
            continue;
        }
        let subject = t
            .subject
            .as_iri()
            .map_or_else(|| "_:blank".to_owned(), |iri| show(graph, iri));
        violations.push(format!(
            "{subject} {} {}: target is not a declared class",
            show(graph, &t.predicate),
            show(graph, target)
        ));
    }

    if violations.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("all {checked} local class references resolve"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} class references do not resolve", violations.len()),
            violations,
        ));
    }
    report
}

fn show(graph: &Graph, iri: &str) -> String {
    graph.compact(iri).unwrap_or_else(|| format!("<{iri}>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{DANGLING_REFERENCE, VALID_VOCABULARY};
    use packagegraph_ontology::parser::parse_turtle;

    #[test]
    fn valid_vocabulary_resolves() -> anyhow::Result<()> {
        let graph = parse_turtle(VALID_VOCABULARY, "v")?.graph;
        let report = validate(&graph);
        assert!(report.all_passed(), "{:#?}", report.results);
        // subClassOf, disjointWith, two domains, one local range
        assert_eq!(report.results[0].message, "all 5 local class references resolve");
        Ok(())
    }

    #[test]
    fn reports_dangling_local_targets_only() -> anyhow::Result<()> {
        let graph = parse_turtle(DANGLING_REFERENCE, "d")?.graph;
        let report = validate(&graph);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(
            report.results[0].details,
            [
                "pkg:Binary rdfs:subClassOf pkg:Artifact: target is not a declared class",
                "pkg:builtFrom rdfs:range pkg:Nothing: target is not a declared class",
            ]
        );
        Ok(())
    }

    #[test]
    fn declared_datatypes_are_valid_ranges_but_not_domains() -> anyhow::Result<()> {
        let ttl = "@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n\
                   @prefix owl: <http://www.w3.org/2002/07/owl#> .\n\
                   @prefix pkg: <http://example.org/pkg#> .\n\
                   pkg:Package a owl:Class .\n\
                   pkg:Version a rdfs:Datatype .\n\
                   pkg:version a owl:DatatypeProperty ; rdfs:domain pkg:Package ; rdfs:range pkg:Version .\n\
                   pkg:odd a owl:DatatypeProperty ; rdfs:domain pkg:Version .\n";
        let graph = parse_turtle(ttl, "t")?.graph;
        let report = validate(&graph);
        assert_eq!(
            report.results[0].details,
            ["pkg:odd rdfs:domain pkg:Version: target is not a declared class"]
        );
        Ok(())
    }
}

