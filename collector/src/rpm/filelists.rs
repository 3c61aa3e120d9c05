//! `filelists.xml`: the files each package installs.

use std::collections::HashMap;

use packagegraph_ontology::model::iris::RPM;
use packagegraph_ontology::{Graph, Term};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::{attr, push_cdata, push_text};

/// The file list of one package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileList {
    /// Checksum of the package, matching `PrimaryPackage::pkgid`.
    pub pkgid: String,
    /// Paths, including directories and ghosts.
    pub files: Vec<String>,
}

/// Parses a `filelists.xml` document.
///
/// # Errors
///
/// Returns the parser error for malformed XML.
pub fn parse_filelists(xml: &str) -> Result<Vec<FileList>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut lists = Vec::new();
    let mut current: Option<FileList> = None;
    let mut in_file = false;
    let mut text = String::new();
    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"package" => {
                    current = Some(FileList {
                        pkgid: attr(&e, b"pkgid")?.unwrap_or_default(),
                        files: Vec::new(),
                    });
                }
                b"file" => {
                    in_file = true;
                    text.clear();
                }
                _ => {}
            },
            Event::Text(t) if in_file => push_text(&mut text, &t)?,
            Event::CData(t) if in_file => push_cdata(&mut text, &t),
            Event::End(e) => match e.local_name().as_ref() {
                b"file" => {
                    in_file = false;
                    if let Some(list) = current.as_mut() {
                        if !text.is_empty() {
                            list.files.push(std::mem::take(&mut text));
                        }
                    }
                }
                b"package" => lists.extend(current.take()),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(lists)
}

/// Adds `rpm:fileName` for every list whose package is in `packages`.
pub fn add_files(graph: &mut Graph, lists: &[FileList], packages: &HashMap<String, Term>) {
    let predicate = format!("{RPM}fileName");
    for list in lists {
        let Some(package) = packages.get(&list.pkgid) else {
            continue;
        };
        for file in &list.files {
            graph.add(package.clone(), predicate.as_str(), Term::literal(file.as_str()));
        }
    }
}
