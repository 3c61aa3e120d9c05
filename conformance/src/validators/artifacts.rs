//! Published artifact validator.
//!
//! A built document `name` lives in `<out>/<name>/` as `<name>.ttl`,
//! `<name>.nt`, `<name>.jsonld` and `<name>.rdf`. This checks:
//! - every serialization exists
//! - the N-Triples file is line-wise well formed
//! - N-Triples and Turtle hold the same number of triples
//! - the JSON-LD file is JSON with `@context` and `@graph`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use packagegraph_ontology::parser::load_file;
use packagegraph_ontology::serializer::RdfFormat;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts";

/// Where the `format` serialization of document `name` is written.
pub fn artifact_path(out_dir: &Path, name: &str, format: RdfFormat) -> PathBuf {
    out_dir
        .join(name)
        .join(format!("{name}.{}", format.extension()))
}

/// Validates the serializations of document `name` under `out_dir`.
///
/// # Errors
///
/// Returns an error if an existing artifact cannot be read.
pub fn validate(out_dir: &Path, name: &str) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let missing: Vec<String> = RdfFormat::ALL
        .iter()
        .map(|&f| artifact_path(out_dir, name, f))
        .filter(|p| !p.is_file())
        .map(|p| p.display().to_string())
        .collect();
    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}: all {} serializations present", RdfFormat::ALL.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}: {} serializations missing", missing.len()),
            missing,
        ));
    }

    let nt_count = validate_ntriples(out_dir, name, &mut report)?;
    validate_counts(out_dir, name, nt_count, &mut report);
    validate_jsonld(out_dir, name, &mut report)?;

    Ok(report)
}

/// Checks that each N-Triples line ends with ` .`. Returns the triple count.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
fn validate_ntriples(out_dir: &Path, name: &str, report: &mut ConformanceReport) -> Result<Option<usize>> {
    let nt_path = artifact_path(out_dir, name, RdfFormat::NTriples);
    if !nt_path.is_file() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(&nt_path)
        .with_context(|| format!("Failed to read {}", nt_path.display()))?;

    let mut malformed: Vec<String> = Vec::new();
    let mut count = 0usize;
    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.ends_with(" .") {
            count += 1;
        } else {
            malformed.push(format!("line {}: does not end with \" .\"", i + 1));
        }
    }

    if malformed.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}.nt is well formed ({count} triples)"),
        ));
    } else {
        let total = malformed.len();
        malformed.truncate(10);
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}.nt has {total} malformed lines"),
            malformed,
        ));
    }
    Ok(Some(count))
}

fn validate_counts(out_dir: &Path, name: &str, nt_count: Option<usize>, report: &mut ConformanceReport) {
    let ttl_path = artifact_path(out_dir, name, RdfFormat::Turtle);
    let (Some(nt_count), true) = (nt_count, ttl_path.is_file()) else {
        return;
    };
    match load_file(&ttl_path, "a") {
        Ok(doc) if doc.graph.len() == nt_count => report.push(TestResult::pass(
            VALIDATOR,
            format!("{name}.ttl and {name}.nt agree ({nt_count} triples)"),
        )),
        Ok(doc) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "{name}.ttl has {} triples but {name}.nt has {nt_count}",
                doc.graph.len()
            ),
        )),
        Err(err) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{name}.ttl does not parse"),
            vec![err.to_string()],
        )),
    }
}

/// # Errors
///
/// Returns an error if the file exists but cannot be read.
fn validate_jsonld(out_dir: &Path, name: &str, report: &mut ConformanceReport) -> Result<()> {
    let path = artifact_path(out_dir, name, RdfFormat::JsonLd);
    if !path.is_file() {
        return Ok(());
    }
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    match serde_json::from_str::<Value>(&content) {
        Ok(value) if value.get("@context").is_some() && value["@graph"].is_array() => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{name}.jsonld has @context and @graph"),
            ));
        }
        Ok(_) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}.jsonld lacks @context or @graph"),
        )),
        Err(err) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name}.jsonld is not valid JSON: {err}"),
        )),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::VALID_VOCABULARY;
    use packagegraph_ontology::parser::parse_turtle;
    use packagegraph_ontology::serializer::serialize;

    fn publish(out: &Path, name: &str) -> Result<()> {
        let graph = parse_turtle(VALID_VOCABULARY, "v")?.graph;
        std::fs::create_dir_all(out.join(name))?;
        for format in RdfFormat::ALL {
            std::fs::write(artifact_path(out, name, format), serialize(&graph, format)?)?;
        }
        Ok(())
    }

    #[test]
    fn complete_artifacts_pass() -> Result<()> {
        let out = tempfile::tempdir()?;
        publish(out.path(), "pkg")?;
        let report = validate(out.path(), "pkg")?;
        assert!(report.all_passed(), "{:#?}", report.results);
        assert_eq!(report.results.len(), 4);
        Ok(())
    }

    #[test]
    fn missing_file_and_count_mismatch_fail() -> Result<()> {
        let out = tempfile::tempdir()?;
        publish(out.path(), "pkg")?;
        std::fs::remove_file(artifact_path(out.path(), "pkg", RdfFormat::RdfXml))?;
        let nt = artifact_path(out.path(), "pkg", RdfFormat::NTriples);
        let mut content = std::fs::read_to_string(&nt)?;
        content.push_str("<http://example.org/x> <http://example.org/p> \"extra\" .\n");
        std::fs::write(&nt, content)?;

        let report = validate(out.path(), "pkg")?;
        assert_eq!(report.failure_count(), 2);
        assert!(report.results[0].details[0].ends_with("pkg.rdf"));
        Ok(())
    }

    #[test]
    fn malformed_ntriples_lines_are_listed() -> Result<()> {
        let out = tempfile::tempdir()?;
        publish(out.path(), "pkg")?;
        let nt = artifact_path(out.path(), "pkg", RdfFormat::NTriples);
        std::fs::write(&nt, "<http://example.org/x> <http://example.org/p> \"a\"\n")?;
        let report = validate(out.path(), "pkg")?;
        let nt_result = report
            .results
            .iter()
            .find(|r| r.message.starts_with("pkg.nt has"))
            .ok_or_else(|| anyhow::anyhow!("no N-Triples result"))?;
        assert_eq!(nt_result.details, ["line 1: does not end with \" .\""]);
        Ok(())
    }
}
