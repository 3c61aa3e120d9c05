//! Debian relationship fields (`Depends`, `Breaks`, ...).

use std::sync::OnceLock;

use packagegraph_ontology::model::iris::{DEB, RDF_TYPE};
use packagegraph_ontology::{iri, Graph, Term};
use regex::Regex;

/// Relationship fields and the local name of the property linking a package
/// to each of its entries.
pub const RELATION_FIELDS: [(&str, &str); 9] = [
    ("Depends", "depends"),
    ("Pre-Depends", "predepends"),
    ("Recommends", "recommends"),
    ("Suggests", "suggests"),
    ("Breaks", "breaks"),
    ("Enhances", "enhances"),
    ("Conflicts", "conflicts"),
    ("Replaces", "replaces"),
    ("Provides", "provides"),
];

/// True if `field` is one of [`RELATION_FIELDS`].
#[must_use]
pub fn is_relation_field(field: &str) -> bool {
    RELATION_FIELDS.iter().any(|(f, _)| *f == field)
}

/// One entry of a relationship field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Target package name.
    pub name: String,
    /// Architecture qualifier after `:`, e.g. `any`.
    pub arch_qualifier: Option<String>,
    /// Version constraint without parentheses, e.g. `>= 2.34`.
    pub constraint: Option<String>,
}

/// Parses a relationship field value.
///
/// Entries are comma separated; of `a | b` alternatives only the first is
/// kept. Entries that do not start with a package name are skipped.
#[must_use]
pub fn parse_relations(value: &str) -> Vec<Relation> {
    value
        .split(',')
        .filter_map(|entry| {
            let first = entry.split('|').next()?.trim();
            let caps = relation_pattern().captures(first)?;
            Some(Relation {
                name: caps.get(1)?.as_str().to_owned(),
                arch_qualifier: caps.get(2).map(|m| m.as_str().to_owned()),
                constraint: caps.get(3).map(|m| normalize_space(m.as_str())),
            })
        })
        .collect()
}

/// Adds `package --deb:{property}--> [ a deb:Dependency ... ]` for each
/// relation.
pub fn add_relations(graph: &mut Graph, package: &Term, property: &str, relations: &[Relation]) {
    let predicate = format!("{DEB}{property}");
    for rel in relations {
        let node = graph.fresh_blank();
        graph.add(package.clone(), predicate.as_str(), node.clone());
        graph.add(node.clone(), RDF_TYPE, Term::iri(format!("{DEB}Dependency")));
        graph.add(
            node.clone(),
            format!("{DEB}onPackage"),
            Term::iri(format!("{DEB}package/{}", iri::quote(&rel.name))),
        );
        graph.add(node.clone(), format!("{DEB}packageName"), Term::literal(rel.name.as_str()));
        if let Some(constraint) = &rel.constraint {
            graph.add(node, format!("{DEB}versionConstraint"), Term::literal(constraint.as_str()));
        }
    }
}

#[allow(clippy::expect_used)]
fn relation_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9][A-Za-z0-9+.\-]*)(?::([A-Za-z0-9\-]+))?\s*(?:\(([^)]*)\))?")
            .expect("relation pattern is a valid regex")
    })
}

fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_constraints_and_qualifiers() {
        let rels = parse_relations("libc6 (>= 2.34), python3:any (>=3.11~), libstdc++6,  perl");
        assert_eq!(rels.len(), 4);
        assert_eq!(rels[0].name, "libc6");
        assert_eq!(rels[0].constraint.as_deref(), Some(">= 2.34"));
        assert_eq!(rels[1].name, "python3");
        assert_eq!(rels[1].arch_qualifier.as_deref(), Some("any"));
        assert_eq!(rels[1].constraint.as_deref(), Some(">=3.11~"));
        assert_eq!(rels[2].name, "libstdc++6");
        assert_eq!(rels[3].constraint, None);
    }

    #[test]
    fn keeps_first_alternative_only() {
        let rels = parse_relations("default-mta | mail-transport-agent, debconf (>= 0.5) | debconf-2.0");
        let names: Vec<_> = rels.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["default-mta", "debconf"]);
    }

    #[test]
    fn skips_empty_entries() {
        assert!(parse_relations("").is_empty());
        assert_eq!(parse_relations("a,,b").len(), 2);
    }

    #[test]
    fn every_relation_field_is_declared_in_the_vocabulary() {
        let ontology = packagegraph_ontology::Ontology::full();
        for (_, local) in RELATION_FIELDS {
            assert!(
                ontology.find_property(&format!("{DEB}{local}")).is_some(),
                "deb:{local} is not declared"
            );
        }
    }

    #[test]
    fn relation_nodes_carry_target_and_constraint() {
        let mut g = Graph::with_scope("d");
        let pkg = Term::iri(format!("{DEB}hello-2.10"));
        add_relations(&mut g, &pkg, "depends", &parse_relations("libc6 (>= 2.34)"));
        let node = Term::BlankNode("db1".to_owned());
        assert!(g.contains(&pkg, &format!("{DEB}depends"), &node));
        assert!(g.contains(&node, &format!("{DEB}onPackage"), &Term::iri(format!("{DEB}package/libc6"))));
        assert!(g.contains(&node, &format!("{DEB}versionConstraint"), &Term::literal(">= 2.34")));
        assert_eq!(g.len(), 5);
    }
}
