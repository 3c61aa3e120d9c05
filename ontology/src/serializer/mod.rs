//! Serializers for [`Graph`](crate::Graph)s.
//!
//! Four formats are supported, matching the published artifacts:
//! - **Turtle** ([`turtle`]): the source and canonical format, `.ttl`
//! - **N-Triples** ([`ntriples`]): for streaming/bulk loading, `.nt`
//! - **JSON-LD** ([`jsonld`]): for web clients, `.jsonld`
//! - **RDF/XML** ([`rdfxml`]): for legacy OWL tooling, `.rdf`

pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;

use std::fmt;
use std::str::FromStr;

use crate::Graph;

/// An RDF serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RdfFormat {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
    /// JSON-LD 1.1.
    JsonLd,
    /// RDF/XML.
    RdfXml,
}

impl RdfFormat {
    /// All formats, in publishing order.
    pub const ALL: [RdfFormat; 4] = [
        RdfFormat::Turtle,
        RdfFormat::NTriples,
        RdfFormat::JsonLd,
        RdfFormat::RdfXml,
    ];

    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::NTriples => "nt",
            RdfFormat::JsonLd => "jsonld",
            RdfFormat::RdfXml => "rdf",
        }
    }

    /// IANA media type, used for content negotiation.
    #[must_use]
    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::JsonLd => "application/ld+json",
            RdfFormat::RdfXml => "application/rdf+xml",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "Turtle",
            RdfFormat::NTriples => "N-Triples",
            RdfFormat::JsonLd => "JSON-LD",
            RdfFormat::RdfXml => "RDF/XML",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = SerializeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ttl" | "turtle" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "jsonld" | "json-ld" | "json" => Ok(RdfFormat::JsonLd),
            "rdf" | "xml" | "rdfxml" | "rdf/xml" | "owl" => Ok(RdfFormat::RdfXml),
            _ => Err(SerializeError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors raised while serializing a graph.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The requested format name is not recognised.
    #[error("unknown RDF format '{0}' (expected ttl, nt, jsonld or rdf)")]
    UnknownFormat(String),
    /// JSON encoding failed.
    #[error("failed to encode JSON-LD: {0}")]
    Json(#[from] serde_json::Error),
    /// RDF/XML can only express predicates whose IRI ends in an XML name.
    #[error("predicate <{0}> cannot be written as an RDF/XML element name")]
    UnrepresentablePredicate(String),
}

/// Serializes `graph` in `format`.
///
/// # Errors
///
/// Returns [`SerializeError::Json`] if JSON-LD encoding fails and
/// [`SerializeError::UnrepresentablePredicate`] for RDF/XML predicates
/// without a valid local name.
pub fn serialize(graph: &Graph, format: RdfFormat) -> Result<String, SerializeError> {
    match format {
        RdfFormat::Turtle => Ok(turtle::to_turtle(graph)),
        RdfFormat::NTriples => Ok(ntriples::to_ntriples(graph)),
        RdfFormat::JsonLd => Ok(serde_json::to_string_pretty(&jsonld::to_json_ld(graph))?),
        RdfFormat::RdfXml => rdfxml::to_rdf_xml(graph),
    }
}

/// Escapes a string for a double-quoted Turtle / N-Triples literal.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

/// Escapes characters that may not appear inside `<...>` IRI references.
pub(crate) fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        match c {
            '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            c if (c as u32) <= 0x20 => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_names_round_trip_through_from_str() {
        for format in RdfFormat::ALL {
            assert_eq!(format.extension().parse::<RdfFormat>().ok(), Some(format));
        }
        assert!("yaml".parse::<RdfFormat>().is_err());
    }

    #[test]
    fn escapes_control_characters() {
        assert_eq!(escape_string("a\"b\\c\nd\u{1}"), "a\\\"b\\\\c\\nd\\u0001");
    }

    #[test]
    fn escapes_iri_specials() {
        assert_eq!(escape_iri("http://x/a b"), "http://x/a\\u0020b");
    }
}
