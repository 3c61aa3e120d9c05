//! Prefix declarations and their use.
//!
//! The body is scanned lexically rather than parsed, so a file with syntax
//! errors still gets its prefix problems reported with line numbers.
//! Comments, IRIs, string literals, language tags and blank-node labels are
//! skipped; every remaining token containing `:` is a prefixed name.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use packagegraph_ontology::parser::declared_prefixes;

use crate::report::{ConformanceReport, TestResult};
use crate::validators::sources::display_name;

const VALIDATOR: &str = "turtle/prefixes";

/// Checks every file's prefixed names against its own declarations.
pub fn validate(files: &[PathBuf]) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    for path in files {
        let name = display_name(path);
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                report.push(TestResult::fail(VALIDATOR, format!("cannot read {name}: {err}")));
                continue;
            }
        };
        report.push(check(&name, &text));
    }
    report
}

/// Checks one document.
pub fn check(name: &str, text: &str) -> TestResult {
    let declared = declared_prefixes(text);
    let known: BTreeSet<&str> = declared.iter().map(|(p, _)| p.as_str()).collect();

    let mut undefined: BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for (prefix, line) in used_prefixes(text) {
        if !known.contains(prefix.as_str()) {
            let lines = undefined.entry(prefix).or_default();
            if lines.last() != Some(&line) {
                lines.push(line);
            }
        }
    }

    if undefined.is_empty() {
        TestResult::pass_with_details(
            VALIDATOR,
            format!("{name} declares {} prefixes", declared.len()),
            declared.iter().map(|(p, iri)| format!("{p}: {iri}")).collect(),
        )
    } else {
        let details = undefined
            .iter()
            .map(|(prefix, lines)| {
                let lines: Vec<String> = lines.iter().map(ToString::to_string).collect();
                format!("`{prefix}:` used on line(s) {}", lines.join(", "))
            })
            .collect();
        TestResult::fail_with_details(
            VALIDATOR,
            format!("{name} uses {} undefined prefixes", undefined.len()),
            details,
        )
    }
}

/// Prefixes of the prefixed names in `text`, with their 1-based line numbers.
pub fn used_prefixes(text: &str) -> Vec<(String, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let mut uses = Vec::new();
    let mut line = 1;
    let mut i = 0;
    // The name declared by a prefix directive is not a use.
    let mut in_directive = false;

    while i < chars.len() {
        match chars[i] {
            '\n' => {
                line += 1;
                i += 1;
            }
            '#' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '<' => {
                i += 1;
                while i < chars.len() && chars[i] != '>' {
                    if chars[i] == '\n' {
                        line += 1;
                    }
                    i += 1;
                }
                i += 1;
            }
            q @ ('"' | '\'') => i = skip_string(&chars, i, q, &mut line),
            '@' => {
                let start = i + 1;
                i = start;
                while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '-') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                in_directive = word == "prefix";
            }
            '_' if chars.get(i + 1) == Some(&':') => {
                i += 2;
                while i < chars.len() && is_name_char(chars[i]) {
                    i += 1;
                }
            }
            c if is_name_char(c) || c == ':' => {
                let start = i;
                while i < chars.len() && (is_name_char(chars[i]) || chars[i] == ':') {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                if token.eq_ignore_ascii_case("prefix") {
                    in_directive = true;
                } else if let Some((prefix, _)) = token.split_once(':') {
                    if std::mem::take(&mut in_directive) {
                        continue;
                    }
                    if prefix.is_empty() || prefix.starts_with(char::is_alphabetic) {
                        uses.push((prefix.to_owned(), line));
                    }
                }
            }
            _ => i += 1,
        }
    }
    uses
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '%')
}

/// Returns the index just past the string literal opening at `start`.
fn skip_string(chars: &[char], start: usize, quote: char, line: &mut usize) -> usize {
    let long = chars.get(start + 1) == Some(&quote) && chars.get(start + 2) == Some(&quote);
    let mut i = start + if long { 3 } else { 1 };
    while i < chars.len() {
        match chars[i] {
            '\\' => {
                i += 2;
                continue;
            }
            '\n' => {
                *line += 1;
                if !long {
                    return i;
                }
            }
            c if c == quote => {
                if !long {
                    return i + 1;
                }
                if chars.get(i + 1) == Some(&quote) && chars.get(i + 2) == Some(&quote) {
                    return i + 3;
                }
            }
            _ => {}
        }
        i += 1;
    }
    i
}
