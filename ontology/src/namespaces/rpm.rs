//! `rpm:` namespace: RPM repository metadata.
//!
//! Terms emitted by the RPM collector from a repository's `repodata/`:
//! packages and their relations from `primary`, installed files from
//! `filelists`, and changelog entries from `other`.

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property, PropertyKind};

const RPM_PACKAGE: &str = "http://packagegraph.github.io/ontology/rpm#RpmPackage";
const DEPENDENCY: &str = "http://packagegraph.github.io/ontology/rpm#Dependency";
const CHANGELOG: &str = "http://packagegraph.github.io/ontology/rpm#Changelog";

/// Returns the `rpm:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "rpm",
            iri: RPM,
            label: "RPM package metadata",
            comment: "Vocabulary for RPM repositories described by `repomd.xml`: \
                      packages, their capability relations, file lists and changelogs.",
            imports: &[],
        },
        classes: classes(),
        properties: properties(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: RPM_PACKAGE,
            label: "RpmPackage",
            comment: "A package build identified by name, version, release and \
                      architecture.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[DEPENDENCY, CHANGELOG],
        },
        Class {
            id: DEPENDENCY,
            label: "Dependency",
            comment: "A capability entry (`rpm:entry`) of a requires, provides, \
                      conflicts or obsoletes list.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[CHANGELOG],
        },
        Class {
            id: CHANGELOG,
            label: "Changelog",
            comment: "One changelog entry from the `other` metadata.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
    ]
}

fn package_field(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        functional: true,
        domain: Some(RPM_PACKAGE),
        range: XSD_STRING,
    }
}

fn relation(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Object,
        functional: false,
        domain: Some(RPM_PACKAGE),
        range: DEPENDENCY,
    }
}

fn dependency_field(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        functional: true,
        domain: Some(DEPENDENCY),
        range: XSD_STRING,
    }
}

fn changelog_field(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        functional: true,
        domain: Some(CHANGELOG),
        range: XSD_STRING,
    }
}

fn properties() -> Vec<Property> {
    vec![
        package_field(
            "http://packagegraph.github.io/ontology/rpm#name",
            "name",
            "The package name.",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#epoch",
            "epoch",
            "The package epoch; omitted when `0`.",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#version",
            "version",
            "The upstream version.",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#release",
            "release",
            "The package release.",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#arch",
            "arch",
            "The build architecture (`x86_64`, `noarch`, ...).",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#summary",
            "summary",
            "One-line summary.",
        ),
        package_field(
            "http://packagegraph.github.io/ontology/rpm#description",
            "description",
            "Long description.",
        ),
        relation(
            "http://packagegraph.github.io/ontology/rpm#requires",
            "requires",
            "A capability this package requires.",
        ),
        relation(
            "http://packagegraph.github.io/ontology/rpm#provides",
            "provides",
            "A capability this package provides.",
        ),
        relation(
            "http://packagegraph.github.io/ontology/rpm#conflicts",
            "conflicts",
            "A capability this package conflicts with.",
        ),
        relation(
            "http://packagegraph.github.io/ontology/rpm#obsoletes",
            "obsoletes",
            "A capability this package obsoletes.",
        ),
        Property {
            id: "http://packagegraph.github.io/ontology/rpm#onPackage",
            label: "onPackage",
            comment: "The capability name as a version-less `rpm:package/{name}` resource.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(DEPENDENCY),
            range: OWL_THING,
        },
        dependency_field(
            "http://packagegraph.github.io/ontology/rpm#dependencyName",
            "dependencyName",
            "The capability name.",
        ),
        dependency_field(
            "http://packagegraph.github.io/ontology/rpm#dependencyFlags",
            "dependencyFlags",
            "The comparison flag (`EQ`, `LT`, `LE`, `GT`, `GE`).",
        ),
        dependency_field(
            "http://packagegraph.github.io/ontology/rpm#dependencyVersion",
            "dependencyVersion",
            "The compared version as `[epoch:]version[-release]`.",
        ),
        Property {
            id: "http://packagegraph.github.io/ontology/rpm#fileName",
            label: "fileName",
            comment: "A path installed by the package, from the `filelists` metadata.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some(RPM_PACKAGE),
            range: XSD_STRING,
        },
        Property {
            id: "http://packagegraph.github.io/ontology/rpm#hasChangelog",
            label: "hasChangelog",
            comment: "Links a package to one of its changelog entries.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some(RPM_PACKAGE),
            range: CHANGELOG,
        },
        changelog_field(
            "http://packagegraph.github.io/ontology/rpm#changelogText",
            "changelogText",
            "The changelog entry body.",
        ),
        changelog_field(
            "http://packagegraph.github.io/ontology/rpm#changelogAuthor",
            "changelogAuthor",
            "The changelog entry author line, including version-release.",
        ),
        Property {
            id: "http://packagegraph.github.io/ontology/rpm#changelogTime",
            label: "changelogTime",
            comment: "The changelog entry date in seconds since the Unix epoch.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some(CHANGELOG),
            range: XSD_INTEGER,
        },
    ]
}
