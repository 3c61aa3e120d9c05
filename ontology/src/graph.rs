//! Owned, insertion-ordered RDF graph.
//!
//! A [`Graph`] is a set of [`Triple`]s plus the prefix bindings used when it
//! is serialized. Blank nodes are labelled inside a *scope*: every label
//! minted by [`Graph::fresh_blank`] starts with the graph's scope, so graphs
//! built in different scopes (one per worker chunk, one per parsed file) can
//! be merged without their blank nodes colliding.

use indexmap::{IndexMap, IndexSet};

use crate::model::iris::{RDF_TYPE, XSD_STRING};

/// An RDF literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    /// Lexical form.
    pub value: String,
    /// Datatype IRI. `None` means `xsd:string` (or `rdf:langString` when a
    /// language tag is present).
    pub datatype: Option<String>,
    /// Language tag, lowercase.
    pub language: Option<String>,
}

impl Literal {
    /// A plain string literal.
    #[must_use]
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: None,
        }
    }

    /// A typed literal. `xsd:string` is normalized to a plain literal.
    #[must_use]
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        let datatype = datatype.into();
        Self {
            value: value.into(),
            datatype: (datatype != XSD_STRING).then_some(datatype),
            language: None,
        }
    }

    /// A language-tagged string.
    #[must_use]
    pub fn lang(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: None,
            language: Some(language.into().to_ascii_lowercase()),
        }
    }
}

/// An RDF term in subject or object position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An absolute IRI.
    Iri(String),
    /// A blank node label (without the `_:` prefix).
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// An IRI term.
    #[must_use]
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A plain (`xsd:string`) literal term.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(Literal::plain(value))
    }

    /// A typed literal term.
    #[must_use]
    pub fn typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal(Literal::typed(value, datatype))
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// True for blank nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }
}

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object: any term.
    pub object: Term,
}

/// An insertion-ordered set of triples with prefix bindings.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: IndexSet<Triple>,
    prefixes: IndexMap<String, String>,
    scope: String,
    next_blank: u64,
}

impl Graph {
    /// Creates an empty graph with the empty blank-node scope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose fresh blank nodes are labelled `{scope}b{n}`.
    ///
    /// The scope should be alphanumeric so labels stay valid in every
    /// serialization.
    #[must_use]
    pub fn with_scope(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            ..Self::default()
        }
    }

    /// The blank-node scope of this graph.
    #[must_use]
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Binds `prefix` to `namespace` unless the prefix is already bound.
    ///
    /// Returns `true` if the binding was added.
    pub fn bind_prefix(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> bool {
        let prefix = prefix.into();
        if self.prefixes.contains_key(&prefix) {
            return false;
        }
        self.prefixes.insert(prefix, namespace.into());
        true
    }

    /// Prefix bindings in insertion order.
    #[must_use]
    pub fn prefixes(&self) -> &IndexMap<String, String> {
        &self.prefixes
    }

    /// Mints a blank node unique within this graph's scope.
    pub fn fresh_blank(&mut self) -> Term {
        self.next_blank += 1;
        Term::BlankNode(format!("{}b{}", self.scope, self.next_blank))
    }

    /// Adds a triple. Returns `true` if it was not already present.
    pub fn add(&mut self, subject: Term, predicate: impl Into<String>, object: Term) -> bool {
        self.insert(Triple {
            subject,
            predicate: predicate.into(),
            object,
        })
    }

    /// Inserts a triple. Returns `true` if it was not already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// True if the exact triple is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.triples.contains(&Triple {
            subject: subject.clone(),
            predicate: predicate.to_owned(),
            object: object.clone(),
        })
    }

    /// Iterates triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Absorbs `other`'s triples and prefix bindings.
    ///
    /// Existing prefix bindings win over `other`'s. Blank nodes are copied as
    /// they are, so `other` must come from a different scope.
    pub fn merge(&mut self, other: Graph) {
        for (prefix, ns) in other.prefixes {
            self.bind_prefix(prefix, ns);
        }
        self.triples.extend(other.triples);
    }

    /// Distinct subjects with an `rdf:type` of `class`, in insertion order.
    #[must_use]
    pub fn subjects_of_type(&self, class: &str) -> Vec<&Term> {
        let mut seen = IndexSet::new();
        for t in &self.triples {
            if t.predicate == RDF_TYPE && t.object.as_iri() == Some(class) {
                seen.insert(&t.subject);
            }
        }
        seen.into_iter().collect()
    }

    /// Objects of `(subject, predicate, ?)`.
    #[must_use]
    pub fn objects(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.triples
            .iter()
            .filter(|t| &t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
            .collect()
    }

    /// Groups triples by subject, preserving first-seen order.
    #[must_use]
    pub fn by_subject(&self) -> IndexMap<&Term, Vec<(&str, &Term)>> {
        let mut grouped: IndexMap<&Term, Vec<(&str, &Term)>> = IndexMap::new();
        for t in &self.triples {
            grouped
                .entry(&t.subject)
                .or_default()
                .push((t.predicate.as_str(), &t.object));
        }
        grouped
    }

    /// Shortens `iri` to `prefix:local` using the bound prefixes, if the
    /// local part is a plain name.
    #[must_use]
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()) && iri.len() > ns.len())
            .max_by_key(|(_, ns)| ns.len())
            .and_then(|(prefix, ns)| {
                let local = &iri[ns.len()..];
                is_plain_local_name(local).then(|| format!("{prefix}:{local}"))
            })
    }
}

/// Local names that serialize unescaped in Turtle, JSON-LD and RDF/XML.
fn is_plain_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    !local.ends_with('.')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
}
