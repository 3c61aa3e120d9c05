//! Turtle 1.1 syntax check, one result per file.

use std::path::PathBuf;

use packagegraph_ontology::parser::{load_file, ParseError};

use crate::report::{ConformanceReport, TestResult};
use crate::validators::sources::display_name;

const VALIDATOR: &str = "turtle/syntax";

/// Parses every file on its own.
///
/// A file that parses but holds no triples is a warning.
pub fn validate(files: &[PathBuf]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for (index, path) in files.iter().enumerate() {
        let name = display_name(path);
        match load_file(path, &format!("s{index}")) {
            Ok(doc) if doc.graph.is_empty() => {
                report.push(TestResult::warn(VALIDATOR, format!("{name} contains no triples")));
            }
            Ok(doc) => report.push(TestResult::pass(
                VALIDATOR,
                format!("{name} parses ({} triples)", doc.graph.len()),
            )),
            Err(ParseError::Syntax { message, .. }) => report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{name} is not valid Turtle"),
                vec![message],
            )),
            Err(err) => report.push(TestResult::fail(VALIDATOR, err.to_string())),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Severity;
    use crate::tests::fixtures::{BROKEN_SYNTAX, EMPTY_DOCUMENT, VALID_VOCABULARY};

    #[test]
    fn grades_each_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let good = dir.path().join("good.ttl");
        let empty = dir.path().join("empty.ttl");
        let broken = dir.path().join("broken.ttl");
        std::fs::write(&good, VALID_VOCABULARY)?;
        std::fs::write(&empty, EMPTY_DOCUMENT)?;
        std::fs::write(&broken, BROKEN_SYNTAX)?;

        let report = validate(&[good, empty, broken]);
        let severities: Vec<_> = report.results.iter().map(|r| r.severity).collect();
        assert_eq!(severities, [Severity::Pass, Severity::Warning, Severity::Failure]);
        assert!(report.results[0].message.starts_with("good.ttl parses ("));
        assert_eq!(report.results[2].details.len(), 1);
        Ok(())
    }

    #[test]
    fn unreadable_file_fails() {
        let report = validate(&[PathBuf::from("/nonexistent/gone.ttl")]);
        assert_eq!(report.failure_count(), 1);
    }
}
