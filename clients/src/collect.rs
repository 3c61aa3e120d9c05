//! Helpers for the collect binary: configuration layering, seeding from a
//! previous run, and writing the result.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use packagegraph_collector::{new_graph, CollectorConfig};
use packagegraph_ontology::parser::load_file;
use packagegraph_ontology::serializer::{serialize, RdfFormat};
use packagegraph_ontology::Graph;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Force sequential processing.
    pub no_parallel: bool,
    /// Chunk size, when given.
    pub chunk_size: Option<usize>,
    /// Worker count, when given.
    pub workers: Option<usize>,
}

/// Loads `path` (or the defaults) and applies `overrides` on top.
///
/// # Errors
///
/// Returns an error if the config file cannot be read or parsed.
pub fn resolve_config(path: Option<&Path>, overrides: Overrides) -> Result<CollectorConfig> {
    let mut config = match path {
        Some(path) => CollectorConfig::load(path)?,
        None => CollectorConfig::default(),
    };
    if overrides.no_parallel {
        config.parallel = false;
    }
    if let Some(size) = overrides.chunk_size {
        config.chunk_size = size;
    }
    if let Some(workers) = overrides.workers {
        config.workers = workers;
    }
    Ok(config)
}

/// `clap` value parser for counts that must be at least 1.
///
/// # Errors
///
/// Returns a message when `value` is not a positive integer.
pub fn positive(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// The graph a run starts from: empty, or the contents of `append`.
///
/// # Errors
///
/// Returns an error if `append` cannot be read or parsed.
pub fn seed_graph(append: Option<&Path>) -> Result<Graph> {
    let mut graph = new_graph();
    if let Some(path) = append {
        let previous = load_file(path, "prev")
            .with_context(|| format!("Cannot load {} to append to", path.display()))?;
        tracing::info!(
            path = %path.display(),
            triples = previous.graph.len(),
            "seeded graph from previous run"
        );
        graph.merge(previous.graph);
    }
    Ok(graph)
}

/// Serializes `graph` to `output`, or to stdout when `output` is `None`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_graph(graph: &Graph, format: RdfFormat, output: Option<&Path>) -> Result<()> {
    let text = serialize(graph, format).with_context(|| format!("Cannot serialize graph as {format}"))?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), %format, triples = graph.len(), "graph written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes()).context("Failed to write to stdout")?;
            stdout.flush().context("Failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use packagegraph_ontology::Term;

    #[test]
    fn cli_values_override_the_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("collector.toml");
        fs::write(&path, "chunk_size = 50\nworkers = 2\n")?;

        let from_file = resolve_config(Some(&path), Overrides::default())?;
        assert!(from_file.parallel);
        assert_eq!((from_file.chunk_size, from_file.workers), (50, 2));

        let overridden = resolve_config(
            Some(&path),
            Overrides {
                no_parallel: true,
                chunk_size: None,
                workers: Some(16),
            },
        )?;
        assert!(!overridden.parallel);
        assert_eq!((overridden.chunk_size, overridden.workers), (50, 16));
        Ok(())
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let path = Path::new("/nonexistent/collector.toml");
        assert!(resolve_config(Some(path), Overrides::default()).is_err());
    }

    #[test]
    fn positive_rejects_zero() {
        assert_eq!(positive("8"), Ok(8));
        assert!(positive("0").is_err());
        assert!(positive("-1").is_err());
    }

    #[test]
    fn appended_runs_accumulate() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("out/graph.ttl");

        let mut first = seed_graph(None)?;
        first.add(
            Term::iri("http://example.org/a"),
            "http://example.org/p",
            Term::literal("one"),
        );
        write_graph(&first, RdfFormat::Turtle, Some(&path))?;

        let mut second = seed_graph(Some(&path))?;
        assert_eq!(second.len(), 1);
        second.add(
            Term::iri("http://example.org/b"),
            "http://example.org/p",
            Term::literal("two"),
        );
        write_graph(&second, RdfFormat::Turtle, Some(&path))?;
        assert_eq!(seed_graph(Some(&path))?.len(), 2);
        Ok(())
    }
}
