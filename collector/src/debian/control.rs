//! deb822 stanza parsing for `Packages` indices.

use indexmap::IndexMap;

/// One paragraph of a `Packages` file, fields in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stanza {
    fields: IndexMap<String, String>,
}

impl Stanza {
    /// Value of `key`, matched exactly.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `Package` field.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("Package")
    }

    /// The `Version` field.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get("Version")
    }

    /// Iterates `(key, value)` pairs in source order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, key: &str, value: &str) {
        self.fields.insert(key.to_owned(), value.to_owned());
    }

    fn continue_last(&mut self, line: &str) {
        if let Some((_, value)) = self.fields.last_mut() {
            value.push('\n');
            value.push_str(line);
        }
    }
}

/// Parses a `Packages` index into stanzas that have both `Package` and
/// `Version`.
///
/// Stanzas are separated by blank lines. Lines starting with whitespace
/// continue the previous field and are appended after a newline; other lines
/// without a `:` are ignored.
#[must_use]
pub fn parse_packages(text: &str) -> Vec<Stanza> {
    let mut stanzas = Vec::new();
    let mut current = Stanza::default();
    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.fields.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
            continue;
        }
        if line.starts_with([' ', '\t']) {
            current.continue_last(line.trim());
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            current.insert(key.trim(), value.trim());
        }
    }
    if !current.fields.is_empty() {
        stanzas.push(current);
    }
    stanzas.retain(|s| s.name().is_some() && s.version().is_some());
    stanzas
}
