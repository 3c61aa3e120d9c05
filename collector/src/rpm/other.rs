//! `other.xml`: package changelogs.

use std::collections::HashMap;

use packagegraph_ontology::model::iris::{RDF_TYPE, RPM, XSD_INTEGER};
use packagegraph_ontology::{Graph, Term};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::{attr, push_cdata, push_text};

/// One `<changelog>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogEntry {
    /// `author` attribute.
    pub author: Option<String>,
    /// `date` attribute, seconds since the epoch.
    pub date: Option<String>,
    /// Entry body.
    pub text: String,
}

/// The changelog of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageChangelog {
    /// Checksum of the package.
    pub pkgid: String,
    /// Entries in document order.
    pub entries: Vec<ChangelogEntry>,
}

/// Parses an `other.xml` document.
///
/// # Errors
///
/// Returns the parser error for malformed XML.
pub fn parse_other(xml: &str) -> Result<Vec<PackageChangelog>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut logs = Vec::new();
    let mut current: Option<PackageChangelog> = None;
    let mut entry: Option<ChangelogEntry> = None;
    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"package" => {
                    current = Some(PackageChangelog {
                        pkgid: attr(e, b"pkgid")?.unwrap_or_default(),
                        entries: Vec::new(),
                    });
                }
                b"changelog" => {
                    let new = ChangelogEntry {
                        author: attr(e, b"author")?,
                        date: attr(e, b"date")?,
                        text: String::new(),
                    };
                    if matches!(event, Event::Empty(_)) {
                        if let Some(log) = current.as_mut() {
                            log.entries.push(new);
                        }
                    } else {
                        entry = Some(new);
                    }
                }
                _ => {}
            },
            Event::Text(t) => {
                if let Some(entry) = entry.as_mut() {
                    push_text(&mut entry.text, t)?;
                }
            }
            Event::CData(t) => {
                if let Some(entry) = entry.as_mut() {
                    push_cdata(&mut entry.text, t);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"changelog" => {
                    if let (Some(done), Some(log)) = (entry.take(), current.as_mut()) {
                        log.entries.push(done);
                    }
                }
                b"package" => logs.extend(current.take()),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(logs)
}

/// Adds a `rpm:Changelog` node per entry to packages found in `packages`.
pub fn add_changelogs(graph: &mut Graph, logs: &[PackageChangelog], packages: &HashMap<String, Term>) {
    for log in logs {
        let Some(package) = packages.get(&log.pkgid) else {
            continue;
        };
        for entry in &log.entries {
            let node = graph.fresh_blank();
            graph.add(package.clone(), format!("{RPM}hasChangelog"), node.clone());
            graph.add(node.clone(), RDF_TYPE, Term::iri(format!("{RPM}Changelog")));
            if !entry.text.is_empty() {
                graph.add(node.clone(), format!("{RPM}changelogText"), Term::literal(entry.text.as_str()));
            }
            if let Some(author) = entry.author.as_deref().filter(|a| !a.is_empty()) {
                graph.add(node.clone(), format!("{RPM}changelogAuthor"), Term::literal(author));
            }
            if let Some(date) = entry.date.as_deref().filter(|d| !d.is_empty()) {
                let time = if date.parse::<i64>().is_ok() {
                    Term::typed(date, XSD_INTEGER)
                } else {
                    Term::literal(date)
                };
                graph.add(node, format!("{RPM}changelogTime"), time);
            }
        }
    }
}
