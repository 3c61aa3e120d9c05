//! Core vocabulary model types.
//!
//! These types describe the packagegraph vocabulary as typed Rust data. All
//! instances are built as owned `Vec`s of `'static` string data. The top-level
//! entry point is [`Ontology::full()`](crate::Ontology::full).

use crate::graph::{Graph, Term};
use iris::*;

/// A vocabulary namespace (e.g. `deb:`, `rpm:`).
#[derive(Debug, Clone)]
pub struct Namespace {
    /// The prefix used in serializations (e.g., `"deb"`).
    pub prefix: &'static str,
    /// The full IRI of the namespace, including the trailing `#`.
    pub iri: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description of the namespace.
    pub comment: &'static str,
    /// Full IRIs of imported ontologies (`owl:imports`).
    pub imports: &'static [&'static str],
}

/// An OWL class definition.
#[derive(Debug, Clone)]
pub struct Class {
    /// Full IRI (e.g., `"http://packagegraph.github.io/ontology/debian#Suite"`).
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Full IRIs of parent classes (`rdfs:subClassOf`).
    pub subclass_of: &'static [&'static str],
    /// Full IRIs of mutually exclusive classes (`owl:disjointWith`).
    pub disjoint_with: &'static [&'static str],
}

/// Whether a property relates a resource to a literal or to another resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// `owl:DatatypeProperty`: relates a resource to an XSD literal.
    Datatype,
    /// `owl:ObjectProperty`: relates two resources.
    Object,
}

/// An OWL property definition.
#[derive(Debug, Clone)]
pub struct Property {
    /// Full IRI.
    pub id: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Description.
    pub comment: &'static str,
    /// Datatype or object property.
    pub kind: PropertyKind,
    /// Whether this is also an `owl:FunctionalProperty`.
    pub functional: bool,
    /// Full IRI of the domain class, or `None` if unspecified.
    pub domain: Option<&'static str>,
    /// Full IRI of the range class or XSD datatype.
    pub range: &'static str,
}

/// A complete namespace module: namespace metadata + classes + properties.
#[derive(Debug, Clone)]
pub struct NamespaceModule {
    /// Namespace metadata.
    pub namespace: Namespace,
    /// All OWL classes defined in this namespace.
    pub classes: Vec<Class>,
    /// All OWL properties defined in this namespace.
    pub properties: Vec<Property>,
}

/// The complete packagegraph collector vocabulary.
#[derive(Debug)]
pub struct Ontology {
    /// Vocabulary version.
    pub version: &'static str,
    /// Base IRI shared by all namespaces.
    pub base_iri: &'static str,
    /// All namespace modules in assembly order.
    pub namespaces: Vec<NamespaceModule>,
}

impl Ontology {
    /// Looks up a class by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_class(&self, iri: &str) -> Option<&Class> {
        self.namespaces
            .iter()
            .flat_map(|m| m.classes.iter())
            .find(|c| c.id == iri)
    }

    /// Looks up a property by its full IRI. Returns `None` if not found.
    #[must_use]
    pub fn find_property(&self, iri: &str) -> Option<&Property> {
        self.namespaces
            .iter()
            .flat_map(|m| m.properties.iter())
            .find(|p| p.id == iri)
    }

    /// Returns the module whose namespace IRI prefixes `iri`.
    #[must_use]
    pub fn module_for(&self, iri: &str) -> Option<&NamespaceModule> {
        self.namespaces
            .iter()
            .find(|m| iri.starts_with(m.namespace.iri))
    }

    /// Returns the total number of classes across all namespaces.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.classes.len()).sum()
    }

    /// Returns the total number of properties across all namespaces.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.namespaces.iter().map(|m| m.properties.len()).sum()
    }

    /// Renders the vocabulary as an OWL graph.
    ///
    /// Every namespace becomes an `owl:Ontology`; classes and properties carry
    /// labels, comments, hierarchy, domain and range.
    #[must_use]
    pub fn to_graph(&self) -> Graph {
        let mut g = Graph::with_scope("vocab");
        g.bind_prefix("owl", OWL);
        g.bind_prefix("rdf", RDF);
        g.bind_prefix("rdfs", RDFS);
        g.bind_prefix("xsd", XSD);
        for module in &self.namespaces {
            g.bind_prefix(module.namespace.prefix, module.namespace.iri);
        }

        let root = Term::iri(self.base_iri);
        g.add(root.clone(), RDF_TYPE, Term::iri(OWL_ONTOLOGY));
        g.add(root.clone(), RDFS_LABEL, Term::literal("packagegraph"));
        g.add(root, OWL_VERSION_INFO, Term::literal(self.version));

        for module in &self.namespaces {
            let ns = &module.namespace;
            // The ontology IRI is the namespace without its trailing '#'.
            let ns_node = Term::iri(ns.iri.trim_end_matches('#'));
            g.add(ns_node.clone(), RDF_TYPE, Term::iri(OWL_ONTOLOGY));
            g.add(ns_node.clone(), RDFS_LABEL, Term::literal(ns.label));
            g.add(ns_node.clone(), RDFS_COMMENT, Term::literal(ns.comment));
            g.add(ns_node.clone(), OWL_VERSION_INFO, Term::literal(self.version));
            for import in ns.imports {
                g.add(ns_node.clone(), OWL_IMPORTS, Term::iri(*import));
            }

            for class in &module.classes {
                let c = Term::iri(class.id);
                g.add(c.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
                g.add(c.clone(), RDFS_LABEL, Term::literal(class.label));
                g.add(c.clone(), RDFS_COMMENT, Term::literal(class.comment));
                g.add(c.clone(), RDFS_IS_DEFINED_BY, ns_node.clone());
                for parent in class.subclass_of {
                    g.add(c.clone(), RDFS_SUBCLASS_OF, Term::iri(*parent));
                }
                for other in class.disjoint_with {
                    g.add(c.clone(), OWL_DISJOINT_WITH, Term::iri(*other));
                }
            }

            for prop in &module.properties {
                let p = Term::iri(prop.id);
                let type_iri = match prop.kind {
                    PropertyKind::Datatype => OWL_DATATYPE_PROPERTY,
                    PropertyKind::Object => OWL_OBJECT_PROPERTY,
                };
                g.add(p.clone(), RDF_TYPE, Term::iri(type_iri));
                if prop.functional {
                    g.add(p.clone(), RDF_TYPE, Term::iri(OWL_FUNCTIONAL_PROPERTY));
                }
                g.add(p.clone(), RDFS_LABEL, Term::literal(prop.label));
                g.add(p.clone(), RDFS_COMMENT, Term::literal(prop.comment));
                g.add(p.clone(), RDFS_IS_DEFINED_BY, ns_node.clone());
                if let Some(domain) = prop.domain {
                    g.add(p.clone(), RDFS_DOMAIN, Term::iri(domain));
                }
                g.add(p, RDFS_RANGE, Term::iri(prop.range));
            }
        }
        g
    }
}

/// Standard IRI constants used across the workspace.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Debian package vocabulary namespace.
    pub const DEB: &str = "http://packagegraph.github.io/ontology/debian#";
    /// RPM package vocabulary namespace.
    pub const RPM: &str = "http://packagegraph.github.io/ontology/rpm#";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
    /// `rdf:List`.
    pub const RDF_LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";

    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:subPropertyOf`.
    pub const RDFS_SUBPROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";
    /// `rdfs:domain`.
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    /// `rdfs:range`.
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:Literal`.
    pub const RDFS_LITERAL: &str = "http://www.w3.org/2000/01/rdf-schema#Literal";

    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`.
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:disjointWith`.
    pub const OWL_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    /// `owl:imports`.
    pub const OWL_IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// `owl:sameAs`.
    pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:nonNegativeInteger`.
    pub const XSD_NON_NEGATIVE_INTEGER: &str =
        "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";
    /// `xsd:anyURI`.
    pub const XSD_ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ontology;

    #[test]
    fn finds_debian_package_class() {
        let ontology = Ontology::full();
        let class = ontology.find_class("http://packagegraph.github.io/ontology/debian#DebianPackage");
        assert!(class.is_some());
    }

    #[test]
    fn module_for_resolves_by_namespace() {
        let ontology = Ontology::full();
        let module = ontology.module_for("http://packagegraph.github.io/ontology/rpm#requires");
        assert_eq!(module.map(|m| m.namespace.prefix), Some("rpm"));
        assert!(ontology.module_for("http://example.org/other").is_none());
    }

    #[test]
    fn graph_declares_every_term() {
        let ontology = Ontology::full();
        let graph = ontology.to_graph();
        let classes = graph.subjects_of_type(iris::OWL_CLASS);
        assert_eq!(classes.len(), ontology.class_count());
        let object_props = graph.subjects_of_type(iris::OWL_OBJECT_PROPERTY).len();
        let datatype_props = graph.subjects_of_type(iris::OWL_DATATYPE_PROPERTY).len();
        assert_eq!(object_props + datatype_props, ontology.property_count());
    }
}
