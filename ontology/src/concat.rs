//! Combining several Turtle files.
//!
//! [`concatenate`] parses each input under its own blank-node scope (`f0`,
//! `f1`, ...) so blank nodes from different files stay distinct after the
//! merge; prefix bindings from earlier files win. [`merge_turtle_files`] is
//! the textual counterpart used when publishing a combined source file; it
//! applies the same per-file scoping to blank-node labels.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::Graph;
use crate::parser::{declared_prefixes, load_file, ParseError};

/// Errors raised while merging Turtle files.
#[derive(Debug, thiserror::Error)]
pub enum ConcatError {
    /// An input failed to load.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The merged output could not be written.
    #[error("cannot write {}: {source}", path.display())]
    Write {
        /// Output path.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Blank-node scope of the file at `index` in a concatenation.
fn file_scope(index: usize) -> String {
    format!("f{index}")
}

/// Parses every file in `paths` and merges them into one graph.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn concatenate<P: AsRef<Path>>(paths: &[P]) -> Result<Graph, ParseError> {
    let (graph, failures) = concatenate_partial(paths);
    match failures.into_iter().next() {
        Some((_, err)) => Err(err),
        None => Ok(graph),
    }
}

/// Like [`concatenate`], but keeps going past files that fail to load.
///
/// Returns the merge of every file that loaded, and the index and error of
/// each file that did not.
pub fn concatenate_partial<P: AsRef<Path>>(paths: &[P]) -> (Graph, Vec<(usize, ParseError)>) {
    let mut combined = Graph::with_scope("merged");
    let mut failures = Vec::new();
    for (index, path) in paths.iter().enumerate() {
        match load_file(path.as_ref(), &file_scope(index)) {
            Ok(doc) => combined.merge(doc.graph),
            Err(err) => failures.push((index, err)),
        }
    }
    (combined, failures)
}

/// Merges the Turtle files in `inputs` textually and writes the result to
/// `output`.
///
/// Files are copied line by line. Blank-node labels are rewritten to
/// `_:f{index}_{label}` so that equal labels in different files stay
/// distinct nodes, as in [`concatenate`]. A prefix declaration is dropped
/// when it repeats the binding already in effect at that point of the
/// output. Parent directories of `output` are created as needed. Returns
/// the number of prefix declarations dropped.
///
/// # Errors
///
/// Returns [`ConcatError::Parse`] (as [`ParseError::Io`]) if an input is
/// unreadable and [`ConcatError::Write`] if the output cannot be written.
pub fn merge_turtle_files<P: AsRef<Path>>(inputs: &[P], output: &Path) -> Result<usize, ConcatError> {
    let write_err = |source| ConcatError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let mut out = BufWriter::new(File::create(output).map_err(write_err)?);

    let mut active: HashMap<String, String> = HashMap::new();
    let mut dropped = 0;
    for (index, input) in inputs.iter().enumerate() {
        let path = input.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = scope_blank_labels(&text, &file_scope(index));
        for line in text.lines() {
            if let Some((prefix, ns)) = declared_prefixes(line).pop() {
                if active.get(&prefix) == Some(&ns) {
                    dropped += 1;
                    continue;
                }
                active.insert(prefix, ns);
            }
            writeln!(out, "{line}").map_err(write_err)?;
        }
        if index + 1 < inputs.len() {
            writeln!(out).map_err(write_err)?;
        }
    }
    out.flush().map_err(write_err)?;
    Ok(dropped)
}

/// Rewrites every `_:label` in Turtle `text` to `_:{scope}_label`.
///
/// Comments, IRIs and string literals are copied untouched.
fn scope_blank_labels(text: &str, scope: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;
    while let Some(c) = rest.chars().next() {
        let after_name = prev.is_some_and(|p| is_name_char(p) || matches!(p, ':' | '\\'));
        if c == '_' && rest.starts_with("_:") && !after_name {
            let label = &rest[2..2 + label_len(&rest[2..])];
            out.push_str("_:");
            if !label.is_empty() {
                out.push_str(scope);
                out.push('_');
                out.push_str(label);
            }
            prev = label.chars().last().or(Some(':'));
            rest = &rest[2 + label.len()..];
            continue;
        }
        let len = match c {
            '#' => rest.find('\n').unwrap_or(rest.len()),
            '<' => rest.find('>').map_or(rest.len(), |i| i + 1),
            '"' | '\'' if prev != Some('\\') => string_len(rest, c as u8),
            _ => c.len_utf8(),
        };
        out.push_str(&rest[..len]);
        prev = rest[..len].chars().last();
        rest = &rest[len..];
    }
    out
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-')
}

/// Byte length of the blank-node label at the start of `s`.
fn label_len(s: &str) -> usize {
    let mut end = 0;
    for (i, c) in s.char_indices() {
        if is_name_char(c) || c == '.' {
            end = i + c.len_utf8();
        } else {
            break;
        }
    }
    // a trailing `.` ends the statement
    s[..end].trim_end_matches('.').len()
}

/// Byte length of the string literal (short or long form) opening `s`.
fn string_len(s: &str, quote: u8) -> usize {
    let bytes = s.as_bytes();
    let long = bytes.len() >= 3 && bytes[1] == quote && bytes[2] == quote;
    let mut i = if long { 3 } else { 1 };
    let end = loop {
        if i >= bytes.len() {
            break bytes.len();
        }
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote && !long => break i + 1,
            b if b == quote && bytes[i..].starts_with(&[quote; 3]) => break i + 3,
            b'\n' if !long => break i,
            _ => i += 1,
        }
    };
    let mut end = end.min(bytes.len());
    while !s.is_char_boundary(end) {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: &str = "@prefix ex: <http://example.org/> .\nex:a ex:p _:x .\n_:x ex:q \"1\" .\n";
    const B: &str = "@prefix ex: <http://example.org/other/> .\n@prefix b: <http://b.org/> .\nb:s b:p _:x .\n";

    fn write(dir: &Path, name: &str, body: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, body).unwrap_or_else(|e| panic!("{e}"));
        path
    }

    #[test]
    fn keeps_blank_nodes_from_different_files_apart() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let a = write(dir.path(), "a.ttl", A);
        let b = write(dir.path(), "b.ttl", B);
        let graph = concatenate(&[a, b]).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(graph.len(), 3);
        let blanks: std::collections::HashSet<_> = graph
            .iter()
            .filter(|t| t.object.is_blank())
            .map(|t| t.object.clone())
            .collect();
        assert_eq!(blanks.len(), 2);
        // first binding of `ex` wins
        assert_eq!(
            graph.prefixes().get("ex").map(String::as_str),
            Some("http://example.org/")
        );
        assert!(graph.prefixes().contains_key("b"));
    }

    #[test]
    fn merged_output_reparses() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let a = write(dir.path(), "a.ttl", A);
        let b = write(dir.path(), "b.ttl", B);
        let out = dir.path().join("nested").join("all.ttl");
        let dropped = merge_turtle_files(&[a, b], &out).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(dropped, 0);
        let text = std::fs::read_to_string(&out).unwrap_or_else(|e| panic!("{e}"));
        assert!(text.starts_with("@prefix ex: <http://example.org/> .\nex:a ex:p _:f0_x .\n"));
        assert!(text.contains("@prefix b: <http://b.org/> ."));
        assert!(text.contains("b:s b:p _:f1_x ."));
    }

    #[test]
    fn merged_file_keeps_shared_blank_labels_apart() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let a = write(dir.path(), "a.ttl", "@prefix ex: <http://example.org/> .\nex:a ex:p _:x .\n");
        let b = write(dir.path(), "b.ttl", "@prefix ex: <http://example.org/> .\nex:b ex:p _:x .\n");
        let out = dir.path().join("all.ttl");
        merge_turtle_files(&[&a, &b], &out).unwrap_or_else(|e| panic!("{e}"));

        let merged = load_file(&out, "m").unwrap_or_else(|e| panic!("{e}")).graph;
        let scoped = concatenate(&[&a, &b]).unwrap_or_else(|e| panic!("{e}"));
        let blanks = |g: &Graph| {
            g.iter()
                .filter(|t| t.object.is_blank())
                .map(|t| t.object.clone())
                .collect::<std::collections::HashSet<_>>()
                .len()
        };
        assert_eq!(merged.len(), scoped.len());
        assert_eq!(blanks(&merged), 2);
        assert_eq!(blanks(&merged), blanks(&scoped));
    }

    #[test]
    fn redeclares_a_prefix_bound_differently_in_between() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let a = write(dir.path(), "a.ttl", "@prefix ex: <http://x.org/> .\nex:a ex:p ex:o .\n");
        let b = write(dir.path(), "b.ttl", "@prefix ex: <http://y.org/> .\nex:b ex:p ex:o .\n");
        let c = write(dir.path(), "c.ttl", "@prefix ex: <http://x.org/> .\nex:c ex:p ex:o .\n");
        let out = dir.path().join("all.ttl");
        let dropped = merge_turtle_files(&[a, b, c], &out).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(dropped, 0);

        let merged = load_file(&out, "m").unwrap_or_else(|e| panic!("{e}")).graph;
        let c_subject = crate::Term::iri("http://x.org/c");
        assert!(merged.iter().any(|t| t.subject == c_subject));
        assert!(!merged.iter().any(|t| t.subject == crate::Term::iri("http://y.org/c")));
    }

    #[test]
    fn blank_labels_inside_literals_iris_and_comments_are_left_alone() {
        let text = "ex:s ex:p \"_:no\" , '_:no' , <http://x.org/_:no> . # _:no\n\
                    _:yes ex:p _:b2.\nex:s ex:q \"\"\"a \" _:no\"\"\" , ex:a_:no .\n";
        assert_eq!(
            scope_blank_labels(text, "f3"),
            "ex:s ex:p \"_:no\" , '_:no' , <http://x.org/_:no> . # _:no\n\
             _:f3_yes ex:p _:f3_b2.\nex:s ex:q \"\"\"a \" _:no\"\"\" , ex:a_:no .\n"
        );
    }

    #[test]
    fn partial_concatenation_reports_failures_by_index() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let good = write(dir.path(), "good.ttl", A);
        let bad = write(dir.path(), "bad.ttl", "ex:oops");
        let (graph, failures) = concatenate_partial(&[bad, good]);
        assert_eq!(graph.len(), 2);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].0, 0);
    }

    #[test]
    fn drops_repeated_prefix_declarations() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let a = write(dir.path(), "a.ttl", A);
        let c = write(
            dir.path(),
            "c.ttl",
            "@prefix ex: <http://example.org/> .\nex:c ex:p \"2\" .\n",
        );
        let out = dir.path().join("all.ttl");
        let dropped = merge_turtle_files(&[a, c], &out).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(dropped, 1);
        let text = std::fs::read_to_string(&out).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(text.matches("@prefix ex:").count(), 1);
        let reparsed = load_file(&out, "r").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(reparsed.graph.len(), 3);
    }

    #[test]
    fn stops_at_first_invalid_file() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let good = write(dir.path(), "good.ttl", A);
        let bad = write(dir.path(), "bad.ttl", "ex:oops");
        assert!(concatenate(&[good, bad]).is_err());
    }
}
