//! Builds the site model from ontology graphs.

use std::collections::{BTreeSet, HashMap, HashSet};

use packagegraph_ontology::iri::split;
use packagegraph_ontology::model::iris::{
    OWL_ANNOTATION_PROPERTY, OWL_CLASS, OWL_DATATYPE_PROPERTY, OWL_OBJECT_PROPERTY, OWL_ONTOLOGY,
    RDFS_CLASS, RDFS_COMMENT, RDFS_DOMAIN, RDFS_LABEL, RDFS_RANGE, RDFS_SUBCLASS_OF,
    RDFS_SUBPROPERTY_OF, RDF_PROPERTY,
};
use packagegraph_ontology::{Graph, Term};

use crate::model::{BreadcrumbItem, DocumentView, SiteDocument, TermEntry, TermKind};

/// Property types, most specific first.
const PROPERTY_TYPES: [&str; 4] = [
    OWL_OBJECT_PROPERTY,
    OWL_DATATYPE_PROPERTY,
    OWL_ANNOTATION_PROPERTY,
    RDF_PROPERTY,
];

/// Collects the classes and properties of `doc`.
pub fn document_view(doc: &SiteDocument) -> DocumentView {
    let graph = &doc.graph;
    let ontology = graph.subjects_of_type(OWL_ONTOLOGY).into_iter().next();

    let class_iris: BTreeSet<&str> = [RDFS_CLASS, OWL_CLASS]
        .iter()
        .flat_map(|ty| graph.subjects_of_type(ty))
        .filter_map(Term::as_iri)
        .collect();
    let mut classes: Vec<TermEntry> = class_iris
        .iter()
        .map(|iri| entry(graph, iri, TermKind::Class, None))
        .collect();

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut properties: Vec<TermEntry> = Vec::new();
    for ty in PROPERTY_TYPES {
        for iri in graph.subjects_of_type(ty).into_iter().filter_map(Term::as_iri) {
            if class_iris.contains(iri) || !seen.insert(iri) {
                continue;
            }
            let short = split(ty).map_or(ty, |(_, local)| local);
            properties.push(entry(graph, iri, TermKind::Property, Some(short)));
        }
    }

    classes.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    properties.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    qualify_clashes(graph, &mut classes);
    qualify_clashes(graph, &mut properties);

    DocumentView {
        name: doc.name.clone(),
        title: ontology
            .and_then(|o| literal(graph, o, RDFS_LABEL))
            .unwrap_or_else(|| doc.name.clone()),
        description: ontology.and_then(|o| literal(graph, o, RDFS_COMMENT)),
        classes,
        properties,
        triples: graph.len(),
    }
}

fn entry(graph: &Graph, iri: &str, kind: TermKind, property_type: Option<&str>) -> TermEntry {
    let subject = Term::iri(iri);
    let local = split(iri).map_or(iri, |(_, local)| local).to_owned();
    let parent_predicate = match kind {
        TermKind::Class => RDFS_SUBCLASS_OF,
        TermKind::Property => RDFS_SUBPROPERTY_OF,
    };
    TermEntry {
        iri: iri.to_owned(),
        label: literal(graph, &subject, RDFS_LABEL).unwrap_or_else(|| local.clone()),
        local,
        qualifier: None,
        comment: literal(graph, &subject, RDFS_COMMENT),
        kind,
        property_type: property_type.map(str::to_owned),
        parents: iris(graph, &subject, parent_predicate),
        domain: iris(graph, &subject, RDFS_DOMAIN),
        range: iris(graph, &subject, RDFS_RANGE),
    }
}

/// Qualifies entries whose local names repeat with their namespace prefix
/// (`ns` when none is bound), numbering further if that still collides.
fn qualify_clashes(graph: &Graph, entries: &mut [TermEntry]) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for e in entries.iter() {
        *counts.entry(e.local.as_str()).or_default() += 1;
    }
    let clashing: HashSet<String> = counts
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(local, _)| local.to_owned())
        .collect();

    let mut taken: HashSet<String> = entries
        .iter()
        .filter(|e| !clashing.contains(&e.local))
        .map(|e| e.local.clone())
        .collect();
    for e in entries.iter_mut().filter(|e| clashing.contains(&e.local)) {
        let base = graph
            .compact(&e.iri)
            .and_then(|c| c.split_once(':').map(|(p, _)| p.to_owned()))
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "ns".to_owned());
        let mut qualifier = base.clone();
        let mut n = 1;
        while !taken.insert(format!("{qualifier}-{}", e.local)) {
            n += 1;
            qualifier = format!("{base}{n}");
        }
        e.qualifier = Some(qualifier);
    }
}

/// The English or untagged literal of `(subject, predicate)`, else the first one.
fn literal(graph: &Graph, subject: &Term, predicate: &str) -> Option<String> {
    let literals: Vec<_> = graph
        .objects(subject, predicate)
        .into_iter()
        .filter_map(Term::as_literal)
        .collect();
    literals
        .iter()
        .find(|l| l.language.as_deref().map_or(true, |lang| lang.starts_with("en")))
        .or_else(|| literals.first())
        .map(|l| l.value.clone())
}

fn iris(graph: &Graph, subject: &Term, predicate: &str) -> Vec<String> {
    graph
        .objects(subject, predicate)
        .into_iter()
        .filter_map(Term::as_iri)
        .map(str::to_owned)
        .collect()
}

/// Breadcrumbs for the homepage.
pub fn home_breadcrumbs() -> Vec<BreadcrumbItem> {
    vec![BreadcrumbItem {
        label: "Home".to_string(),
        url: String::new(),
    }]
}

/// Breadcrumbs for a document page.
pub fn document_breadcrumbs(title: &str) -> Vec<BreadcrumbItem> {
    vec![
        BreadcrumbItem {
            label: "Home".to_string(),
            url: "/".to_string(),
        },
        BreadcrumbItem {
            label: title.to_string(),
            url: String::new(),
        },
    ]
}
