//! Per-file Turtle checks: syntax, joint loading, prefix usage.

pub mod consistency;
pub mod prefixes;
pub mod syntax;
