//! Data model types for the website generator.

use packagegraph_ontology::Graph;

/// One ontology document to publish.
#[derive(Debug, Clone)]
pub struct SiteDocument {
    /// URL segment and file stem, e.g. `debian`.
    pub name: String,
    /// The document's triples.
    pub graph: Graph,
}

impl SiteDocument {
    /// Bundles a name and graph.
    pub fn new(name: impl Into<String>, graph: Graph) -> Self {
        Self {
            name: name.into(),
            graph,
        }
    }
}

/// Whether a term is a class or a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    /// `rdfs:Class` or `owl:Class`.
    Class,
    /// Any of the RDF/OWL property types.
    Property,
}

impl TermKind {
    /// Anchor prefix on the document page.
    pub fn anchor_prefix(self) -> &'static str {
        match self {
            TermKind::Class => "class",
            TermKind::Property => "prop",
        }
    }
}

/// A class or property as shown on a document page.
#[derive(Debug, Clone)]
pub struct TermEntry {
    /// Full IRI.
    pub iri: String,
    /// Local name, used for the anchor.
    pub local: String,
    /// Namespace prefix added to the anchor when another term of the same
    /// kind on the page shares the local name.
    pub qualifier: Option<String>,
    /// `rdfs:label`, or the local name.
    pub label: String,
    /// `rdfs:comment` as Markdown source, if any.
    pub comment: Option<String>,
    /// Class or property.
    pub kind: TermKind,
    /// Short name of the property type (`ObjectProperty`, ...), properties only.
    pub property_type: Option<String>,
    /// `rdfs:subClassOf` / `rdfs:subPropertyOf` targets.
    pub parents: Vec<String>,
    /// `rdfs:domain` targets.
    pub domain: Vec<String>,
    /// `rdfs:range` targets.
    pub range: Vec<String>,
}

impl TermEntry {
    /// `class-{local}` or `prop-{local}`, with the qualifier in between
    /// when set (`class-rpm-Dependency`).
    pub fn anchor(&self) -> String {
        match &self.qualifier {
            Some(q) => format!("{}-{q}-{}", self.kind.anchor_prefix(), self.local),
            None => format!("{}-{}", self.kind.anchor_prefix(), self.local),
        }
    }
}

/// Everything rendered on one document page.
#[derive(Debug, Clone)]
pub struct DocumentView {
    /// Document name.
    pub name: String,
    /// Ontology label, or the document name.
    pub title: String,
    /// Ontology comment, if any.
    pub description: Option<String>,
    /// Classes, sorted by label.
    pub classes: Vec<TermEntry>,
    /// Properties, sorted by label.
    pub properties: Vec<TermEntry>,
    /// Triple count.
    pub triples: usize,
}

/// A breadcrumb navigation item.
#[derive(Debug, Clone)]
pub struct BreadcrumbItem {
    /// Display label.
    pub label: String,
    /// URL; empty for the current page.
    pub url: String,
}
