//! Built-in `deb:`/`rpm:` vocabulary checks.
//!
//! [`validate_builtin`] works on the compiled-in model, no file I/O.
//! [`validate_data`] checks a collected graph against it.

use std::collections::{BTreeSet, HashSet};

use packagegraph_ontology::model::iris::{
    DEB, OWL_THING, RDFS_LITERAL, RDF_LANG_STRING, RDF_LIST, RDF_TYPE, RPM, XSD,
};
use packagegraph_ontology::{Graph, Ontology};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/vocabulary";

fn is_datatype(iri: &str) -> bool {
    iri.starts_with(XSD) || [RDFS_LITERAL, RDF_LANG_STRING, RDF_LIST, OWL_THING].contains(&iri)
}

/// Checks that the built-in vocabulary is internally consistent.
pub fn validate_builtin() -> ConformanceReport {
    check_ontology(Ontology::full())
}

fn check_ontology(ontology: &Ontology) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    let mut misplaced: Vec<String> = Vec::new();
    for module in &ontology.namespaces {
        let ns = module.namespace.iri;
        let ids = module
            .classes
            .iter()
            .map(|c| c.id)
            .chain(module.properties.iter().map(|p| p.id));
        for id in ids {
            if !seen.insert(id) {
                duplicates.push(id.to_owned());
            }
            if !id.starts_with(ns) || id.len() == ns.len() {
                misplaced.push(format!("{id} is not in namespace {ns}"));
            }
        }
    }

    if duplicates.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "{} namespaces, {} classes, {} properties, all IRIs unique",
                ontology.namespaces.len(),
                ontology.class_count(),
                ontology.property_count()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "duplicate term IRIs in the built-in vocabulary",
            duplicates,
        ));
    }
    if !misplaced.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "terms outside their namespace",
            misplaced,
        ));
    }

    let known_class = |iri: &str| ontology.find_class(iri).is_some();
    let mut violations: Vec<String> = Vec::new();
    for module in &ontology.namespaces {
        for class in &module.classes {
            for &parent in class.subclass_of {
                if !known_class(parent) && !is_datatype(parent) {
                    violations.push(format!("class {} has unknown subClassOf target {parent}", class.id));
                }
            }
            for &other in class.disjoint_with {
                if !known_class(other) {
                    violations.push(format!("class {} has unknown disjointWith target {other}", class.id));
                }
            }
        }
        for prop in &module.properties {
            if let Some(domain) = prop.domain {
                if !known_class(domain) && domain != OWL_THING {
                    violations.push(format!("property {} has unknown domain {domain}", prop.id));
                }
            }
            if !known_class(prop.range) && !is_datatype(prop.range) {
                violations.push(format!("property {} has unknown range {}", prop.id, prop.range));
            }
        }
    }

    if violations.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "all built-in class, domain and range references resolve",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "built-in vocabulary has unresolved references",
            violations,
        ));
    }
    report
}

/// Checks that every `deb:`/`rpm:` predicate and class used in `graph` is
/// declared by the built-in vocabulary.
///
/// Undeclared terms are a warning: the Debian collector emits unknown
/// control fields as ad hoc `deb:` properties.
pub fn validate_data(graph: &Graph) -> ConformanceReport {
    let ontology = Ontology::full();
    let ours = |iri: &str| iri.starts_with(DEB) || iri.starts_with(RPM);
    let show = |iri: &str| graph.compact(iri).unwrap_or_else(|| format!("<{iri}>"));

    let mut undeclared: BTreeSet<String> = BTreeSet::new();
    for t in graph.iter() {
        if ours(&t.predicate) && ontology.find_property(&t.predicate).is_none() {
            undeclared.insert(show(&t.predicate));
        }
        if t.predicate == RDF_TYPE {
            if let Some(class) = t.object.as_iri() {
                if ours(class) && ontology.find_class(class).is_none() {
                    undeclared.insert(show(class));
                }
            }
        }
    }

    let mut report = ConformanceReport::new();
    if undeclared.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "every deb:/rpm: term used is declared",
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{} undeclared deb:/rpm: terms used", undeclared.len()),
            undeclared.into_iter().collect(),
        ));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use packagegraph_ontology::Term;

    #[test]
    fn builtin_vocabulary_is_consistent() {
        let report = validate_builtin();
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "vocabulary failures: {failures:#?}");
    }

    #[test]
    fn data_with_declared_terms_passes() {
        let mut graph = Graph::with_scope("t");
        graph.bind_prefix("deb", DEB);
        let pkg = Term::iri(format!("{DEB}hello_2.10-3"));
        graph.add(pkg.clone(), RDF_TYPE, Term::iri(format!("{DEB}DebianPackage")));
        graph.add(pkg, format!("{DEB}packageName"), Term::literal("hello"));
        assert!(validate_data(&graph).all_passed());
        assert_eq!(validate_data(&graph).warning_count(), 0);
    }

    #[test]
    fn ad_hoc_terms_are_warnings() {
        let mut graph = Graph::with_scope("t");
        graph.bind_prefix("rpm", RPM);
        let pkg = Term::iri(format!("{RPM}hello-1-1.x86_64"));
        graph.add(pkg.clone(), RDF_TYPE, Term::iri(format!("{RPM}Gadget")));
        graph.add(pkg, format!("{RPM}homepage"), Term::literal("https://example.org"));
        let report = validate_data(&graph);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.results[0].details, ["rpm:Gadget", "rpm:homepage"]);
    }
}
