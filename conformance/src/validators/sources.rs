//! Turtle source discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "sources";

/// Lists the `*.ttl` files directly inside `dir`, sorted by file name.
///
/// # Errors
///
/// Returns an error if `dir` cannot be read.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to list {}", dir.display()))?;
        let is_turtle = entry.path().extension().is_some_and(|ext| ext == "ttl");
        if entry.file_type().is_file() && is_turtle {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Reports on the files [`discover`] found in `dir`.
pub fn validate(dir: &Path, files: &[PathBuf]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    if files.is_empty() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("no Turtle files found in {}", dir.display()),
        ));
    } else {
        report.push(TestResult::pass_with_details(
            VALIDATOR,
            format!("found {} Turtle files in {}", files.len(), dir.display()),
            files.iter().map(|f| display_name(f)).collect(),
        ));
    }
    report
}

/// The file name of `path`, for messages.
pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_only_top_level_turtle_files_in_order() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("b.ttl"), "")?;
        std::fs::write(dir.path().join("a.ttl"), "")?;
        std::fs::write(dir.path().join("notes.md"), "")?;
        std::fs::create_dir(dir.path().join("nested"))?;
        std::fs::write(dir.path().join("nested").join("c.ttl"), "")?;

        let files = discover(dir.path())?;
        let names: Vec<_> = files.iter().map(|f| display_name(f)).collect();
        assert_eq!(names, ["a.ttl", "b.ttl"]);
        assert!(validate(dir.path(), &files).all_passed());
        Ok(())
    }

    #[test]
    fn empty_directory_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let files = discover(dir.path())?;
        let report = validate(dir.path(), &files);
        assert_eq!(report.failure_count(), 1);
        assert!(report.results[0].message.starts_with("no Turtle files found"));
        Ok(())
    }

    #[test]
    fn missing_directory_is_an_error() {
        assert!(discover(Path::new("/nonexistent/packagegraph-sources")).is_err());
    }
}
