//! Debian `Release` files and distribution metadata.

use packagegraph_ontology::model::iris::{DEB, OWL_SAME_AS, RDF_TYPE};
use packagegraph_ontology::{iri, Graph, Term};

use crate::error::CollectError;

/// The identity of a distribution release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    /// `Origin`, e.g. `Debian`.
    pub origin: String,
    /// `Suite`, e.g. `stable`.
    pub suite: String,
    /// `Codename`, e.g. `bookworm`.
    pub codename: String,
}

impl ReleaseInfo {
    /// IRI of the suite node, named after the codename.
    #[must_use]
    pub fn codename_iri(&self) -> Term {
        deb_node(&self.codename)
    }
}

/// Extracts `Origin`, `Suite` and `Codename` from a `Release` file.
///
/// # Errors
///
/// Returns [`CollectError::IncompleteRelease`] naming every missing field.
pub fn parse_release(text: &str, distribution: &str) -> Result<ReleaseInfo, CollectError> {
    let (mut origin, mut suite, mut codename) = (None, None, None);
    for line in text.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let slot = match key {
            "Origin" => &mut origin,
            "Suite" => &mut suite,
            "Codename" => &mut codename,
            _ => continue,
        };
        *slot = Some(value.trim().to_owned());
    }

    match (origin, suite, codename) {
        (Some(origin), Some(suite), Some(codename)) => Ok(ReleaseInfo {
            origin,
            suite,
            codename,
        }),
        (origin, suite, codename) => {
            let missing: Vec<&str> = [
                ("Origin", origin.is_none()),
                ("Suite", suite.is_none()),
                ("Codename", codename.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, absent)| absent.then_some(name))
            .collect();
            Err(CollectError::IncompleteRelease {
                distribution: distribution.to_owned(),
                missing: missing.join(", "),
            })
        }
    }
}

/// Adds the distribution, its suite, and the suite alias to `graph`.
pub fn add_distribution(graph: &mut Graph, info: &ReleaseInfo) {
    let dist = deb_node(&info.origin);
    let codename = info.codename_iri();
    graph.add(dist.clone(), RDF_TYPE, Term::iri(format!("{DEB}Distribution")));
    graph.add(codename.clone(), RDF_TYPE, Term::iri(format!("{DEB}Suite")));
    graph.add(codename.clone(), format!("{DEB}partOfDistribution"), dist);
    if info.suite != info.codename {
        graph.add(deb_node(&info.suite), OWL_SAME_AS, codename);
    }
}

fn deb_node(name: &str) -> Term {
    Term::iri(format!("{DEB}{}", iri::quote(name)))
}
