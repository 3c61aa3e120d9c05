//! Console rendering of conformance reports.

use std::io::{self, Write};

use packagegraph_conformance::ConformanceReport;

/// Writes one `[PASS|WARN|FAIL] validator — message` line per result,
/// each detail indented below it.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_results(out: &mut impl Write, report: &ConformanceReport) -> io::Result<()> {
    for result in &report.results {
        writeln!(
            out,
            "[{}] {} — {}",
            result.severity.tag(),
            result.validator,
            result.message
        )?;
        for detail in &result.details {
            writeln!(out, "       {detail}")?;
        }
    }
    Ok(())
}

/// The closing `Summary: ...` line.
pub fn summary_line(report: &ConformanceReport) -> String {
    let failed = report.failure_count();
    let warned = report.warning_count();
    let passed = report.results.len() - failed - warned;
    format!("Summary: {passed} passed, {warned} warnings, {failed} failed")
}

/// Writes the results followed by a blank line and the summary.
///
/// # Errors
///
/// Returns any error from `out`.
pub fn write_report(out: &mut impl Write, report: &ConformanceReport) -> io::Result<()> {
    write_results(out, report)?;
    writeln!(out)?;
    writeln!(out, "{}", summary_line(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use packagegraph_conformance::TestResult;

    #[test]
    fn renders_tags_details_and_summary() -> io::Result<()> {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("turtle/syntax", "debian.ttl parses (12 triples)"));
        report.push(TestResult::warn("ontology/definitions", "no classes are defined"));
        report.push(TestResult::fail_with_details(
            "turtle/prefixes",
            "rpm.ttl uses 1 undefined prefixes",
            vec!["`dc:` used on line(s) 4".to_string()],
        ));

        let mut buf = Vec::new();
        write_report(&mut buf, &report)?;
        let text = String::from_utf8_lossy(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "[PASS] turtle/syntax — debian.ttl parses (12 triples)");
        assert_eq!(lines[1], "[WARN] ontology/definitions — no classes are defined");
        assert_eq!(lines[2], "[FAIL] turtle/prefixes — rpm.ttl uses 1 undefined prefixes");
        assert_eq!(lines[3], "       `dc:` used on line(s) 4");
        assert_eq!(lines[5], "Summary: 1 passed, 1 warnings, 1 failed");
        Ok(())
    }
}
