//! Uses `dc:` without declaring it (lines 5 and 7).

/// Document with an undeclared prefix.
pub const UNDEFINED_PREFIX: &str = r#"@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix pkg:  <http://example.org/pkg#> .

pkg:hello
    dc:creator "GNU Project" ;
    rdfs:label "hello" ;
    dc:title "GNU hello" .
"#;
