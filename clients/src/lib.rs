//! packagegraph command-line tools.
//!
//! | Binary | Purpose |
//! |--------|---------|
//! | `packagegraph-check` | Lint the Turtle sources |
//! | `packagegraph-build` | Lint, concatenate, convert, publish the site, verify |
//! | `packagegraph-collect` | Turn Debian or RPM repository metadata into RDF |
//!
//! The library holds what the binaries share so that it can be tested
//! without spawning processes.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod build;
pub mod collect;
pub mod logging;
pub mod output;

/// Directory of Turtle sources when none is given.
pub const DEFAULT_SOURCES: &str = "ontologies";
