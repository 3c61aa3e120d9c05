//! packagegraph vocabulary namespace modules.
//!
//! Each sub-module encodes one namespace of the collector vocabulary as Rust
//! static data. See [`crate::Ontology::full`] for the assembly order.

pub mod debian;
pub mod rpm;
