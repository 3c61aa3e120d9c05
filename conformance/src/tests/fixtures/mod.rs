//! Turtle fixtures for the conformance validators.
//!
//! Each constant is a complete document. The valid ones pass every
//! validator; the others each break exactly one rule.

mod broken_syntax;
mod dangling_reference;
mod data_graph;
mod empty_document;
mod undefined_prefix;
mod valid_vocabulary;

pub use broken_syntax::BROKEN_SYNTAX;
pub use dangling_reference::DANGLING_REFERENCE;
pub use data_graph::DATA_GRAPH;
pub use empty_document::EMPTY_DOCUMENT;
pub use undefined_prefix::UNDEFINED_PREFIX;
pub use valid_vocabulary::VALID_VOCABULARY;
