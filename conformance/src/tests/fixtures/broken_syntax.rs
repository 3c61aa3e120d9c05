//! A statement missing its object.

/// Document that does not parse.
pub const BROKEN_SYNTAX: &str = r#"@prefix pkg: <http://example.org/pkg#> .

pkg:hello pkg:version .
"#;
