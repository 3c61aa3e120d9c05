//! Checks on the merged graph and on the built-in vocabulary.

pub mod definitions;
pub mod owl;
pub mod vocabulary;
