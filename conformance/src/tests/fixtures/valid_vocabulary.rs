//! A small, self-consistent package vocabulary.
//!
//! Three classes (one a subclass, one disjoint) and four properties, one of
//! each OWL property kind plus a plain `rdf:Property`.

/// Vocabulary in the `pkg:` namespace.
pub const VALID_VOCABULARY: &str = r#"@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix owl:  <http://www.w3.org/2002/07/owl#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix pkg:  <http://example.org/pkg#> .

<http://example.org/pkg>
    a owl:Ontology ;
    rdfs:label "Example package vocabulary" .

pkg:Package
    a owl:Class ;
    rdfs:label "Package" ;
    rdfs:comment "A unit of software *distribution*." .

pkg:SourcePackage
    a owl:Class ;
    rdfs:subClassOf pkg:Package ;
    rdfs:label "Source package" .

pkg:Maintainer
    a rdfs:Class ;
    owl:disjointWith pkg:Package ;
    rdfs:label "Maintainer" .

pkg:maintainer
    a owl:ObjectProperty ;
    rdfs:domain pkg:Package ;
    rdfs:range pkg:Maintainer .

pkg:version
    a owl:DatatypeProperty ;
    rdfs:domain pkg:Package ;
    rdfs:range xsd:string .

pkg:note
    a owl:AnnotationProperty .

pkg:homepage
    a rdf:Property ;
    rdfs:range rdfs:Resource .
"#;
