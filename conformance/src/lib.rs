//! packagegraph conformance suite.
//!
//! Lints a directory of Turtle ontology sources before they are published,
//! checks the built-in `deb:`/`rpm:` vocabulary, and verifies the artifacts
//! a build wrote.
//!
//! # Checks
//!
//! | Validator | Scope |
//! |-----------|-------|
//! | `sources` | `*.ttl` files exist in the source directory |
//! | `turtle/syntax` | each file is Turtle 1.1 |
//! | `turtle/consistency` | all files load together and round-trip |
//! | `turtle/prefixes` | every prefixed name uses a declared prefix |
//! | `ontology/definitions` | class and property inventory |
//! | `ontology/owl` | local class references resolve |
//! | `ontology/vocabulary` | built-in vocabulary; collected data uses declared terms |
//! | `artifacts` | published serializations exist and agree |
//!
//! # Entry Point
//!
//! ```no_run
//! use packagegraph_conformance::run_all;
//! use std::path::Path;
//!
//! let report = run_all(Path::new("ontology/sources")).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod tests;
pub mod validators;

use std::path::Path;

pub use report::{ConformanceReport, Severity, TestResult};

/// Lints the Turtle sources in `sources`.
///
/// Validators run in this order:
/// 1. source discovery
/// 2. per-file syntax
/// 3. joint loading and Turtle round trip
/// 4. prefix usage
/// 5. class and property definitions
/// 6. OWL class references
///
/// Steps 2 to 6 are skipped when no sources are found.
///
/// # Errors
///
/// Returns an error only if the source directory cannot be listed.
pub fn run_all(sources: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let files = validators::sources::discover(sources)?;
    report.extend(validators::sources::validate(sources, &files));
    if files.is_empty() {
        return Ok(report);
    }

    report.extend(validators::turtle::syntax::validate(&files));
    let (combined, consistency) = validators::turtle::consistency::validate(&files);
    report.extend(consistency);
    report.extend(validators::turtle::prefixes::validate(&files));
    report.extend(validators::ontology::definitions::validate(&combined));
    report.extend(validators::ontology::owl::validate(&combined));

    Ok(report)
}
