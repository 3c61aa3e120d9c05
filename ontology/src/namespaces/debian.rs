//! `deb:` namespace: Debian archive metadata.
//!
//! Terms emitted by the Debian collector: distributions and suites resolved
//! from a `Release` file, binary packages from `Packages` indices, their
//! dependency relations, and the file lists from `Contents` indices.
//!
//! Control fields without a dedicated term below are still emitted as
//! `deb:{field}` literals (lowercased, hyphens removed).

use crate::model::iris::*;
use crate::model::{Class, Namespace, NamespaceModule, Property, PropertyKind};

const DISTRIBUTION: &str = "http://packagegraph.github.io/ontology/debian#Distribution";
const SUITE: &str = "http://packagegraph.github.io/ontology/debian#Suite";
const DEBIAN_PACKAGE: &str = "http://packagegraph.github.io/ontology/debian#DebianPackage";
const DEPENDENCY: &str = "http://packagegraph.github.io/ontology/debian#Dependency";

/// Returns the `deb:` namespace module.
#[must_use]
pub fn module() -> NamespaceModule {
    NamespaceModule {
        namespace: Namespace {
            prefix: "deb",
            iri: DEB,
            label: "Debian package metadata",
            comment: "Vocabulary for Debian archives: distributions, suites, binary \
                      packages, package relationships and installed files, as published \
                      in `Release`, `Packages` and `Contents` indices.",
            imports: &[],
        },
        classes: classes(),
        properties: properties(),
    }
}

fn classes() -> Vec<Class> {
    vec![
        Class {
            id: DISTRIBUTION,
            label: "Distribution",
            comment: "A Debian-based distribution, identified by the `Origin` field \
                      of its archive `Release` file.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[SUITE, DEBIAN_PACKAGE],
        },
        Class {
            id: SUITE,
            label: "Suite",
            comment: "A release of a distribution, identified by its codename \
                      (e.g. `bookworm`). Symbolic suite names (`stable`) are linked \
                      to the codename with `owl:sameAs`.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[DEBIAN_PACKAGE],
        },
        Class {
            id: DEBIAN_PACKAGE,
            label: "DebianPackage",
            comment: "A binary package at a specific version, as listed in a \
                      `Packages` index.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[DEPENDENCY],
        },
        Class {
            id: DEPENDENCY,
            label: "Dependency",
            comment: "One clause of a package relationship field: the target \
                      package name and an optional version constraint.",
            subclass_of: &[OWL_THING],
            disjoint_with: &[],
        },
    ]
}

fn relation(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Object,
        functional: false,
        domain: Some(DEBIAN_PACKAGE),
        range: DEPENDENCY,
    }
}

fn field(id: &'static str, label: &'static str, comment: &'static str) -> Property {
    Property {
        id,
        label,
        comment,
        kind: PropertyKind::Datatype,
        functional: true,
        domain: Some(DEBIAN_PACKAGE),
        range: XSD_STRING,
    }
}

fn properties() -> Vec<Property> {
    vec![
        Property {
            id: "http://packagegraph.github.io/ontology/debian#partOfDistribution",
            label: "partOfDistribution",
            comment: "The distribution a suite belongs to.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(SUITE),
            range: DISTRIBUTION,
        },
        Property {
            id: "http://packagegraph.github.io/ontology/debian#inSuite",
            label: "inSuite",
            comment: "The suite whose archive lists this package.",
            kind: PropertyKind::Object,
            functional: false,
            domain: Some(DEBIAN_PACKAGE),
            range: SUITE,
        },
        field(
            "http://packagegraph.github.io/ontology/debian#name",
            "name",
            "The `Package` field: the binary package name.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#version",
            "version",
            "The `Version` field, including epoch and revision.",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#depends",
            "depends",
            "An absolute dependency (`Depends`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#predepends",
            "predepends",
            "A dependency that must be fully installed before unpacking (`Pre-Depends`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#recommends",
            "recommends",
            "A strong but not absolute dependency (`Recommends`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#suggests",
            "suggests",
            "A package that may enhance this one (`Suggests`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#breaks",
            "breaks",
            "A package this one breaks (`Breaks`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#enhances",
            "enhances",
            "A package this one enhances (`Enhances`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#conflicts",
            "conflicts",
            "A package that cannot be installed alongside this one (`Conflicts`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#replaces",
            "replaces",
            "A package whose files this one may overwrite (`Replaces`).",
        ),
        relation(
            "http://packagegraph.github.io/ontology/debian#provides",
            "provides",
            "A virtual package this one provides (`Provides`).",
        ),
        Property {
            id: "http://packagegraph.github.io/ontology/debian#onPackage",
            label: "onPackage",
            comment: "The package named by a dependency clause, as a version-less \
                      `deb:package/{name}` resource.",
            kind: PropertyKind::Object,
            functional: true,
            domain: Some(DEPENDENCY),
            range: OWL_THING,
        },
        Property {
            id: "http://packagegraph.github.io/ontology/debian#packageName",
            label: "packageName",
            comment: "The package name of a dependency clause as a literal.",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some(DEPENDENCY),
            range: XSD_STRING,
        },
        Property {
            id: "http://packagegraph.github.io/ontology/debian#versionConstraint",
            label: "versionConstraint",
            comment: "The parenthesised version restriction of a dependency clause \
                      (e.g. `>= 2.36`).",
            kind: PropertyKind::Datatype,
            functional: true,
            domain: Some(DEPENDENCY),
            range: XSD_STRING,
        },
        Property {
            id: "http://packagegraph.github.io/ontology/debian#fileName",
            label: "fileName",
            comment: "A path installed by the package, from the `Contents` index.",
            kind: PropertyKind::Datatype,
            functional: false,
            domain: Some(DEBIAN_PACKAGE),
            range: XSD_STRING,
        },
        field(
            "http://packagegraph.github.io/ontology/debian#architecture",
            "architecture",
            "The `Architecture` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#maintainer",
            "maintainer",
            "The `Maintainer` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#description",
            "description",
            "The `Description` field, synopsis and extended description.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#section",
            "section",
            "The `Section` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#priority",
            "priority",
            "The `Priority` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#filename",
            "filename",
            "The `Filename` field: archive-relative path of the `.deb`.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#size",
            "size",
            "The `Size` field: size of the `.deb` in bytes.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#installedsize",
            "installedsize",
            "The `Installed-Size` field, in KiB.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#md5sum",
            "md5sum",
            "The `MD5sum` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#sha256",
            "sha256",
            "The `SHA256` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#homepage",
            "homepage",
            "The `Homepage` field.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#source",
            "source",
            "The `Source` field, when the source package name differs.",
        ),
        field(
            "http://packagegraph.github.io/ontology/debian#multiarch",
            "multiarch",
            "The `Multi-Arch` field.",
        ),
    ]
}
