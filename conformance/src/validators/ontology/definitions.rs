//! Class and property inventory of the merged graph.

use std::collections::BTreeSet;

use packagegraph_ontology::model::iris::{
    OWL_ANNOTATION_PROPERTY, OWL_CLASS, OWL_DATATYPE_PROPERTY, OWL_OBJECT_PROPERTY, RDFS_CLASS,
    RDF_PROPERTY,
};
use packagegraph_ontology::Graph;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/definitions";

/// Types whose instances count as classes.
pub const CLASS_TYPES: [&str; 2] = [RDFS_CLASS, OWL_CLASS];

/// Types whose instances count as properties.
pub const PROPERTY_TYPES: [&str; 4] = [
    RDF_PROPERTY,
    OWL_OBJECT_PROPERTY,
    OWL_DATATYPE_PROPERTY,
    OWL_ANNOTATION_PROPERTY,
];

/// IRIs of the subjects typed with any of `types`, sorted.
pub fn declared(graph: &Graph, types: &[&str]) -> BTreeSet<String> {
    types
        .iter()
        .flat_map(|ty| graph.subjects_of_type(ty))
        .filter_map(|term| term.as_iri())
        .map(str::to_owned)
        .collect()
}

/// Counts the classes and properties `graph` defines.
///
/// A graph without any class is a warning: it is data, not a vocabulary.
pub fn validate(graph: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let classes = declared(graph, &CLASS_TYPES);
    let properties = declared(graph, &PROPERTY_TYPES);
    let show = |iri: &String| graph.compact(iri).unwrap_or_else(|| format!("<{iri}>"));

    if classes.is_empty() {
        report.push(TestResult::warn(VALIDATOR, "no classes are defined"));
    } else {
        report.push(TestResult::pass_with_details(
            VALIDATOR,
            format!("{} classes defined", classes.len()),
            classes.iter().map(&show).collect(),
        ));
    }
    report.push(TestResult::pass_with_details(
        VALIDATOR,
        format!("{} properties defined", properties.len()),
        properties.iter().map(&show).collect(),
    ));
    report
}
