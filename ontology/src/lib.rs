//! packagegraph RDF model and package-metadata vocabulary.
//!
//! The `packagegraph-ontology` crate provides:
//!
//! - an owned, insertion-ordered RDF [`Graph`] with scoped blank nodes,
//! - a Turtle [`parser`] backed by `sophia_turtle`,
//! - serializers for Turtle, N-Triples, JSON-LD and RDF/XML,
//! - file [`concat`]enation for publishing a combined ontology,
//! - the Debian and RPM vocabulary that the repository collectors emit,
//!   encoded as typed Rust data.
//!
//! # Entry Point
//!
//! ```
//! let ontology = packagegraph_ontology::Ontology::full();
//! assert_eq!(ontology.namespaces.len(), 2);
//! ```
//!
//! # Serialization
//!
//! ```
//! use packagegraph_ontology::serializer::{serialize, RdfFormat};
//!
//! let graph = packagegraph_ontology::Ontology::full().to_graph();
//! let turtle = serialize(&graph, RdfFormat::Turtle).unwrap_or_default();
//! assert!(turtle.contains("deb:DebianPackage"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod concat;
pub mod graph;
pub mod iri;
pub mod model;
pub mod namespaces;
pub mod parser;
pub mod serializer;

pub use graph::{Graph, Literal, Term, Triple};
pub use model::{Class, Namespace, NamespaceModule, Ontology, Property, PropertyKind};

impl Ontology {
    /// Returns the complete packagegraph collector vocabulary.
    ///
    /// Assembly order: `deb → rpm`.
    #[must_use]
    pub fn full() -> &'static Ontology {
        static ONTOLOGY: std::sync::OnceLock<Ontology> = std::sync::OnceLock::new();
        ONTOLOGY.get_or_init(|| Ontology {
            version: "0.3.0",
            base_iri: "http://packagegraph.github.io/ontology/",
            namespaces: vec![namespaces::debian::module(), namespaces::rpm::module()],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_count() {
        assert_eq!(Ontology::full().namespaces.len(), 2);
    }

    #[test]
    fn class_count() {
        // deb: Distribution, Suite, DebianPackage, Dependency
        // rpm: RpmPackage, Dependency, Changelog
        assert_eq!(Ontology::full().class_count(), 7);
    }

    #[test]
    fn all_class_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::full().namespaces {
            for class in &module.classes {
                assert!(iris.insert(class.id), "Duplicate class IRI: {}", class.id);
            }
        }
    }

    #[test]
    fn all_property_iris_unique() {
        let mut iris = std::collections::HashSet::new();
        for module in &Ontology::full().namespaces {
            for prop in &module.properties {
                assert!(iris.insert(prop.id), "Duplicate property IRI: {}", prop.id);
            }
        }
    }

    #[test]
    fn every_term_lives_in_its_namespace() {
        for module in &Ontology::full().namespaces {
            let ns = module.namespace.iri;
            for class in &module.classes {
                assert!(class.id.starts_with(ns), "{} outside {}", class.id, ns);
            }
            for prop in &module.properties {
                assert!(prop.id.starts_with(ns), "{} outside {}", prop.id, ns);
            }
        }
    }
}
