//! `Contents-{arch}` indices: which package ships which file.

use std::collections::HashMap;

use packagegraph_ontology::model::iris::DEB;
use packagegraph_ontology::{Graph, Term};

/// Splits a Contents line into the file path and the package names.
///
/// The last whitespace-separated column lists `section/package` entries
/// separated by commas; everything before it is the path, which may itself
/// contain spaces. Header lines and lines with fewer than two columns yield
/// `None`.
#[must_use]
pub fn parse_line(line: &str) -> Option<(&str, Vec<&str>)> {
    let line = line.trim();
    let split = line.rfind(char::is_whitespace)?;
    let path = line[..split].trim_end();
    let locations = line[split..].trim_start();
    if path.is_empty() || (path == "FILE" && locations == "LOCATION") {
        return None;
    }
    let packages = locations
        .split(',')
        .filter_map(|loc| loc.rsplit('/').next())
        .filter(|name| !name.is_empty())
        .collect();
    Some((path, packages))
}

/// Adds `deb:fileName` for every listed package present in `packages`.
pub fn add_files(graph: &mut Graph, lines: &[&str], packages: &HashMap<String, Term>) {
    let predicate = format!("{DEB}fileName");
    for line in lines {
        let Some((path, names)) = parse_line(line) else {
            continue;
        };
        for name in names {
            if let Some(package) = packages.get(name) {
                graph.add(package.clone(), predicate.as_str(), Term::literal(path));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_path_from_locations() {
        assert_eq!(
            parse_line("usr/bin/hello                      devel/hello"),
            Some(("usr/bin/hello", vec!["hello"]))
        );
        assert_eq!(
            parse_line("usr/share/doc/a b/README  utils/a,admin/b"),
            Some(("usr/share/doc/a b/README", vec!["a", "b"]))
        );
    }

    #[test]
    fn skips_headers_and_short_lines() {
        assert_eq!(parse_line("FILE                                    LOCATION"), None);
        assert_eq!(parse_line("lonely"), None);
        assert_eq!(parse_line(""), None);
    }

    #[test]
    fn only_known_packages_get_files() {
        let mut packages = HashMap::new();
        packages.insert("hello".to_owned(), Term::iri(format!("{DEB}hello-2.10-3")));
        let mut g = Graph::new();
        add_files(
            &mut g,
            &["usr/bin/hello devel/hello", "usr/bin/bash shells/bash"],
            &packages,
        );
        assert_eq!(g.len(), 1);
        assert!(g.contains(
            &Term::iri(format!("{DEB}hello-2.10-3")),
            &format!("{DEB}fileName"),
            &Term::literal("usr/bin/hello")
        ));
    }
}
