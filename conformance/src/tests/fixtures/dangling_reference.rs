//! Class references that point at undeclared terms.
//!
//! `pkg:Artifact` and `pkg:Nothing` live in the locally defined `pkg:`
//! namespace but are never declared. `foaf:Agent` is external and
//! `xsd:string` is a datatype, so neither is reported.

/// Vocabulary with two dangling references.
pub const DANGLING_REFERENCE: &str = r#"@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix pkg:  <http://example.org/pkg#> .

pkg:Package
    a owl:Class ;
    rdfs:subClassOf foaf:Agent .

pkg:Binary
    a owl:Class ;
    rdfs:subClassOf pkg:Artifact .

pkg:builtFrom
    a owl:ObjectProperty ;
    rdfs:domain pkg:Binary ;
    rdfs:range pkg:Nothing .

pkg:version
    a owl:DatatypeProperty ;
    rdfs:range xsd:string .
"#;
