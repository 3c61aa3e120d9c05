//! `primary.xml`: package identity, descriptions and capability relations.

use packagegraph_ontology::model::iris::{RDF_TYPE, RPM};
use packagegraph_ontology::{iri, Graph, Term};
use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::{attr, push_cdata, push_text};

/// The four capability lists of a package's `format` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    /// `rpm:requires`
    Requires,
    /// `rpm:provides`
    Provides,
    /// `rpm:conflicts`
    Conflicts,
    /// `rpm:obsoletes`
    Obsoletes,
}

impl RelationKind {
    /// Local name of the element and of the linking property.
    #[must_use]
    pub fn local_name(self) -> &'static str {
        match self {
            RelationKind::Requires => "requires",
            RelationKind::Provides => "provides",
            RelationKind::Conflicts => "conflicts",
            RelationKind::Obsoletes => "obsoletes",
        }
    }

    fn from_element(name: &[u8]) -> Option<Self> {
        match name {
            b"requires" => Some(RelationKind::Requires),
            b"provides" => Some(RelationKind::Provides),
            b"conflicts" => Some(RelationKind::Conflicts),
            b"obsoletes" => Some(RelationKind::Obsoletes),
            _ => None,
        }
    }
}

/// One `rpm:entry` of a capability list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RpmEntry {
    /// Capability name.
    pub name: String,
    /// Comparison flag (`EQ`, `LT`, `LE`, `GT`, `GE`).
    pub flags: Option<String>,
    /// Compared epoch.
    pub epoch: Option<String>,
    /// Compared version.
    pub ver: Option<String>,
    /// Compared release.
    pub rel: Option<String>,
}

impl RpmEntry {
    /// The compared version as `[epoch:]ver[-rel]`, if there is one.
    #[must_use]
    pub fn version_string(&self) -> Option<String> {
        let ver = self.ver.as_deref()?;
        let mut s = String::new();
        if let Some(epoch) = self.epoch.as_deref() {
            s.push_str(epoch);
            s.push(':');
        }
        s.push_str(ver);
        if let Some(rel) = self.rel.as_deref() {
            s.push('-');
            s.push_str(rel);
        }
        Some(s)
    }
}

/// A `<package type="rpm">` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrimaryPackage {
    /// Package name.
    pub name: String,
    /// Build architecture.
    pub arch: String,
    /// Epoch, `0` when unset.
    pub epoch: String,
    /// Upstream version.
    pub version: String,
    /// Release.
    pub release: String,
    /// Package checksum, used as `pkgid` by the other metadata files.
    pub pkgid: String,
    /// One-line summary.
    pub summary: String,
    /// Long description.
    pub description: String,
    /// Capability entries in document order.
    pub relations: Vec<(RelationKind, RpmEntry)>,
}

impl PrimaryPackage {
    /// IRI of this build: `rpm:{quote(name-version-release.arch)}`.
    #[must_use]
    pub fn iri(&self) -> Term {
        let id = format!("{}-{}-{}.{}", self.name, self.version, self.release, self.arch);
        Term::iri(format!("{RPM}{}", iri::quote(&id)))
    }
}

#[derive(Clone, Copy)]
enum Field {
    Name,
    Arch,
    Checksum,
    Summary,
    Description,
}

impl Field {
    fn from_element(name: &[u8]) -> Option<Self> {
        match name {
            b"name" => Some(Field::Name),
            b"arch" => Some(Field::Arch),
            b"checksum" => Some(Field::Checksum),
            b"summary" => Some(Field::Summary),
            b"description" => Some(Field::Description),
            _ => None,
        }
    }

    fn slot(self, pkg: &mut PrimaryPackage) -> &mut String {
        match self {
            Field::Name => &mut pkg.name,
            Field::Arch => &mut pkg.arch,
            Field::Checksum => &mut pkg.pkgid,
            Field::Summary => &mut pkg.summary,
            Field::Description => &mut pkg.description,
        }
    }
}

/// Parses the packages of a `primary.xml` document. Packages whose `type`
/// is not `rpm` are skipped.
///
/// # Errors
///
/// Returns the parser error for malformed XML.
pub fn parse_primary(xml: &str) -> Result<Vec<PrimaryPackage>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut packages = Vec::new();
    let mut current: Option<PrimaryPackage> = None;
    let mut field: Option<Field> = None;
    let mut relation: Option<RelationKind> = None;
    let mut in_format = false;
    let mut text = String::new();

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let empty = matches!(event, Event::Empty(_));
                let local = e.local_name();
                match local.as_ref() {
                    b"package" => {
                        let rpm = attr(e, b"type")?.map_or(true, |t| t == "rpm");
                        current = (rpm && !empty).then(PrimaryPackage::default);
                    }
                    b"format" => in_format = !empty,
                    b"version" if !in_format => {
                        if let Some(pkg) = current.as_mut() {
                            pkg.epoch = attr(e, b"epoch")?.unwrap_or_else(|| "0".to_owned());
                            pkg.version = attr(e, b"ver")?.unwrap_or_default();
                            pkg.release = attr(e, b"rel")?.unwrap_or_default();
                        }
                    }
                    b"entry" => {
                        if let (Some(kind), Some(pkg)) = (relation, current.as_mut()) {
                            let entry = RpmEntry {
                                name: attr(e, b"name")?.unwrap_or_default(),
                                flags: attr(e, b"flags")?,
                                epoch: attr(e, b"epoch")?,
                                ver: attr(e, b"ver")?,
                                rel: attr(e, b"rel")?,
                            };
                            if !entry.name.is_empty() {
                                pkg.relations.push((kind, entry));
                            }
                        }
                    }
                    name if in_format => {
                        if !empty {
                            relation = RelationKind::from_element(name).or(relation);
                        }
                    }
                    name if current.is_some() && !empty => {
                        field = Field::from_element(name);
                        text.clear();
                    }
                    _ => {}
                }
            }
            Event::Text(t) if field.is_some() => push_text(&mut text, t)?,
            Event::CData(t) if field.is_some() => push_cdata(&mut text, t),
            Event::End(e) => match e.local_name().as_ref() {
                b"package" => packages.extend(current.take()),
                b"format" => in_format = false,
                name if RelationKind::from_element(name).is_some() => relation = None,
                _ => {
                    if let (Some(f), Some(pkg)) = (field.take(), current.as_mut()) {
                        *f.slot(pkg) = std::mem::take(&mut text);
                    }
                }
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(packages)
}

/// Emits the triples for one package and its capability entries.
pub fn add_package(graph: &mut Graph, pkg: &PrimaryPackage) {
    let subject = pkg.iri();
    graph.add(subject.clone(), RDF_TYPE, Term::iri(format!("{RPM}RpmPackage")));
    for (local, value) in [
        ("name", &pkg.name),
        ("version", &pkg.version),
        ("release", &pkg.release),
        ("arch", &pkg.arch),
    ] {
        graph.add(subject.clone(), format!("{RPM}{local}"), Term::literal(value.as_str()));
    }
    if !pkg.epoch.is_empty() && pkg.epoch != "0" {
        graph.add(subject.clone(), format!("{RPM}epoch"), Term::literal(pkg.epoch.as_str()));
    }
    for (local, value) in [("summary", &pkg.summary), ("description", &pkg.description)] {
        if !value.is_empty() {
            graph.add(subject.clone(), format!("{RPM}{local}"), Term::literal(value.as_str()));
        }
    }

    for (kind, entry) in &pkg.relations {
        let node = graph.fresh_blank();
        graph.add(subject.clone(), format!("{RPM}{}", kind.local_name()), node.clone());
        graph.add(node.clone(), RDF_TYPE, Term::iri(format!("{RPM}Dependency")));
        graph.add(node.clone(), format!("{RPM}dependencyName"), Term::literal(entry.name.as_str()));
        graph.add(
            node.clone(),
            format!("{RPM}onPackage"),
            Term::iri(format!("{RPM}package/{}", iri::quote(&entry.name))),
        );
        if let Some(flags) = &entry.flags {
            graph.add(node.clone(), format!("{RPM}dependencyFlags"), Term::literal(flags.as_str()));
        }
        if let Some(version) = entry.version_string() {
            graph.add(node, format!("{RPM}dependencyVersion"), Term::literal(version));
        }
    }
}
