/// Prefixes and comments only.
pub const EMPTY_DOCUMENT: &str = r#"@prefix pkg: <http://example.org/pkg#> .

# nothing here yet
"#;
