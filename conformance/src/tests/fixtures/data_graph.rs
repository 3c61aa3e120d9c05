//! Instance data using the `pkg:` vocabulary.

/// Two packages and a maintainer.
pub const DATA_GRAPH: &str = r#"@prefix pkg: <http://example.org/pkg#> .
@prefix ex:  <http://example.org/data/> .

ex:hello
    a pkg:Package ;
    pkg:version "2.10-3" ;
    pkg:maintainer ex:sanvila ;
    pkg:note "Prints a greeting"@en .

ex:hello-src
    a pkg:SourcePackage ;
    pkg:version "2.10-3" .

ex:sanvila a pkg:Maintainer .
"#;
