//! Loads all sources into one graph and checks that the result round-trips
//! through Turtle.

use std::path::PathBuf;

use packagegraph_ontology::concat::concatenate_partial;
use packagegraph_ontology::parser::parse_turtle;
use packagegraph_ontology::serializer::turtle::to_turtle;
use packagegraph_ontology::Graph;

use crate::report::{ConformanceReport, TestResult};
use crate::validators::sources::display_name;

const VALIDATOR: &str = "turtle/consistency";

/// Merges `files` into one graph.
///
/// Files that fail to load are reported and left out; the returned graph
/// holds everything that did load, for the validators that follow.
pub fn validate(files: &[PathBuf]) -> (Graph, ConformanceReport) {
    let mut report = ConformanceReport::new();
    let (combined, failures) = concatenate_partial(files);
    let loaded = files.len() - failures.len();

    for (index, err) in failures {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} cannot be loaded with the other sources", display_name(&files[index])),
            vec![err.to_string()],
        ));
    }

    report.push(TestResult::pass(
        VALIDATOR,
        format!("loaded {loaded} of {} files ({} triples)", files.len(), combined.len()),
    ));

    match parse_turtle(&to_turtle(&combined), "rt") {
        Ok(doc) if doc.graph.len() == combined.len() => report.push(TestResult::pass(
            VALIDATOR,
            "combined graph re-parses from its Turtle serialization",
        )),
        Ok(doc) => report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "combined graph re-parses with {} triples, expected {}",
                doc.graph.len(),
                combined.len()
            ),
        )),
        Err(err) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            "combined graph does not re-parse from its Turtle serialization",
            vec![err.to_string()],
        )),
    }

    (combined, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packagegraph_ontology::parser::load_file;
    use crate::tests::fixtures::{BROKEN_SYNTAX, DATA_GRAPH, VALID_VOCABULARY};

    #[test]
    fn merges_files_and_round_trips() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let vocab = dir.path().join("vocab.ttl");
        let data = dir.path().join("data.ttl");
        std::fs::write(&vocab, VALID_VOCABULARY)?;
        std::fs::write(&data, DATA_GRAPH)?;

        let (graph, report) = validate(&[vocab.clone(), data.clone()]);
        assert!(report.all_passed(), "{:#?}", report.results);

        let separately = load_file(&vocab, "a")?.graph.len() + load_file(&data, "b")?.graph.len();
        assert_eq!(graph.len(), separately);
        assert!(report.results[0].message.starts_with("loaded 2 of 2 files"));
        Ok(())
    }

    #[test]
    fn bad_file_is_reported_and_skipped() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let vocab = dir.path().join("vocab.ttl");
        let broken = dir.path().join("broken.ttl");
        std::fs::write(&vocab, VALID_VOCABULARY)?;
        std::fs::write(&broken, BROKEN_SYNTAX)?;

        let (graph, report) = validate(&[vocab, broken]);
        assert_eq!(report.failure_count(), 1);
        assert!(!graph.is_empty());
        assert!(report.results.iter().any(|r| r.message.starts_with("loaded 1 of 2 files")));
        Ok(())
    }
}
