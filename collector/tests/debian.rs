//! Debian collector against a mock APT repository.

mod common;

use common::{gzip, Harness, MockRepo};
use packagegraph_collector::debian::{package_iri, DebianCollector};
use packagegraph_collector::{new_graph, CollectError, Collector};
use packagegraph_ontology::model::iris::{DEB, OWL_SAME_AS, RDF_TYPE};
use packagegraph_ontology::Term;

const RELEASE: &str = "\
Origin: Debian
Label: Debian
Suite: stable
Version: 12.5
Codename: bookworm
Architectures: amd64 arm64
Components: main contrib non-free-firmware
";

const PACKAGES: &str = "\
Package: hello
Version: 2.10-3
Installed-Size: 280
Maintainer: Santiago Vila <sanvila@debian.org>
Architecture: amd64
Depends: libc6 (>= 2.34)
Description: example package based on GNU hello
 The GNU hello program produces a familiar, friendly greeting.
Section: devel
Priority: optional

Package: libc6
Version: 2.36-9+deb12u4
Architecture: amd64
Pre-Depends: libgcc-s1
Breaks: hurd (<< 1:0.9.git20220301-2), nscd (<< 2.36)
Section: libs

Package: broken-entry
Description: has no version
";

const CONTENTS: &str = "\
FILE                                                    LOCATION
usr/bin/hello                                           devel/hello
usr/lib/x86_64-linux-gnu/libc.so.6                      libs/libc6
usr/share/doc/shared/README                             devel/hello,libs/libc6
usr/bin/unrelated                                       utils/unrelated
";

fn repo_with(release: &str, contents_path: Option<&str>) -> MockRepo {
    let mut repo = MockRepo::new();
    repo.serve("/dists/stable/Release", release)
        .serve("/dists/stable/main/binary-amd64/Packages.gz", gzip(PACKAGES));
    if let Some(path) = contents_path {
        repo.serve(path, gzip(CONTENTS));
    }
    repo
}

#[test]
fn collects_distribution_packages_and_files() {
    let repo = repo_with(RELEASE, Some("/dists/stable/main/Contents-amd64.gz"));
    let harness = Harness::sequential();
    let mut graph = new_graph();

    let summary = DebianCollector::new(repo.url(), "stable")
        .collect(&harness.ctx(), &mut graph)
        .expect("collect");

    assert_eq!(summary.packages, 2);
    assert_eq!(summary.triples_added, graph.len());

    let debian = Term::iri(format!("{DEB}Debian"));
    let bookworm = Term::iri(format!("{DEB}bookworm"));
    assert!(graph.contains(&debian, RDF_TYPE, &Term::iri(format!("{DEB}Distribution"))));
    assert!(graph.contains(&bookworm, &format!("{DEB}partOfDistribution"), &debian));
    assert!(graph.contains(&Term::iri(format!("{DEB}stable")), OWL_SAME_AS, &bookworm));

    let hello = package_iri("hello", "2.10-3");
    assert!(graph.contains(&hello, &format!("{DEB}inSuite"), &bookworm));
    assert!(graph.contains(&hello, &format!("{DEB}section"), &Term::literal("devel")));
    assert!(graph.contains(&hello, &format!("{DEB}fileName"), &Term::literal("usr/bin/hello")));
    assert!(graph.contains(
        &hello,
        &format!("{DEB}fileName"),
        &Term::literal("usr/share/doc/shared/README")
    ));

    let libc = package_iri("libc6", "2.36-9+deb12u4");
    assert_eq!(graph.objects(&libc, &format!("{DEB}breaks")).len(), 2);
    assert_eq!(graph.objects(&libc, &format!("{DEB}predepends")).len(), 1);
    assert!(graph.subjects_of_type(&format!("{DEB}DebianPackage")).len() == 2);
    assert!(harness.profiler.total("Process Packages").is_some());
}

#[test]
fn falls_back_to_distribution_level_contents() {
    let repo = repo_with(RELEASE, Some("/dists/stable/Contents-amd64.gz"));
    let harness = Harness::sequential();
    let mut graph = new_graph();
    DebianCollector::new(repo.url(), "stable")
        .collect(&harness.ctx(), &mut graph)
        .expect("collect");
    let hello = package_iri("hello", "2.10-3");
    assert_eq!(graph.objects(&hello, &format!("{DEB}fileName")).len(), 2);
}

#[test]
fn missing_contents_is_not_fatal() {
    let repo = repo_with(RELEASE, None);
    let harness = Harness::sequential();
    let mut graph = new_graph();
    let summary = DebianCollector::new(repo.url(), "stable")
        .collect(&harness.ctx(), &mut graph)
        .expect("collect");
    assert_eq!(summary.packages, 2);
    assert!(graph.iter().all(|t| t.predicate != format!("{DEB}fileName")));
}

#[test]
fn incomplete_release_aborts() {
    let repo = repo_with("Origin: Debian\nSuite: stable\n", None);
    let harness = Harness::sequential();
    let mut graph = new_graph();
    let err = DebianCollector::new(repo.url(), "stable").collect(&harness.ctx(), &mut graph);
    assert!(matches!(err, Err(CollectError::IncompleteRelease { .. })));
    assert!(graph.is_empty());
}

#[test]
fn missing_package_index_is_an_http_error() {
    let mut repo = MockRepo::new();
    repo.serve("/dists/stable/Release", RELEASE)
        .fail("/dists/stable/main/binary-amd64/Packages.gz", 404);
    let harness = Harness::sequential();
    let mut graph = new_graph();
    let err = DebianCollector::new(repo.url(), "stable").collect(&harness.ctx(), &mut graph);
    assert!(matches!(err, Err(CollectError::Status { status: 404, .. })));
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let repo = repo_with(RELEASE, Some("/dists/stable/main/Contents-amd64.gz"));
    let collector = DebianCollector::new(repo.url(), "stable");

    let sequential = Harness::sequential();
    let mut a = new_graph();
    collector.collect(&sequential.ctx(), &mut a).expect("sequential");

    let parallel = Harness::parallel(1);
    let mut b = new_graph();
    collector.collect(&parallel.ctx(), &mut b).expect("parallel");

    assert_eq!(a.len(), b.len());
    let non_blank = |g: &packagegraph_ontology::Graph| {
        g.iter()
            .filter(|t| !t.subject.is_blank() && !t.object.is_blank())
            .cloned()
            .collect::<Vec<_>>()
    };
    assert_eq!(non_blank(&a), non_blank(&b));
}
