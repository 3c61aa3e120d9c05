//! Validators, grouped by what they inspect.

pub mod artifacts;
pub mod ontology;
pub mod sources;
pub mod turtle;
