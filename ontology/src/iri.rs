//! IRI helpers.

/// Percent-encodes `s` for use as an IRI local name or path.
///
/// ASCII letters, digits, `_ . - ~` and `/` are kept; every other byte of the
/// UTF-8 encoding becomes `%XX` (uppercase hex).
#[must_use]
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'.' | b'-' | b'~' | b'/' => {
                out.push(char::from(byte));
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Splits an IRI into `(namespace, local)` at the last `#` or `/`.
///
/// Returns `None` when there is no non-empty local part.
#[must_use]
pub fn split(iri: &str) -> Option<(&str, &str)> {
    let idx = iri.rfind(|c| c == '#' || c == '/')?;
    let (ns, local) = iri.split_at(idx + 1);
    (!local.is_empty()).then_some((ns, local))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_keeps_unreserved() {
        assert_eq!(quote("libc6-2.36-9_amd64"), "libc6-2.36-9_amd64");
    }

    #[test]
    fn quote_encodes_plus_colon_and_space() {
        assert_eq!(quote("g++-12"), "g%2B%2B-12");
        assert_eq!(quote("1:2.3"), "1%3A2.3");
        assert_eq!(quote("a b"), "a%20b");
    }

    #[test]
    fn quote_encodes_utf8_bytes() {
        assert_eq!(quote("é"), "%C3%A9");
    }

    #[test]
    fn split_at_hash_or_slash() {
        assert_eq!(
            split("http://packagegraph.github.io/ontology/debian#Suite"),
            Some(("http://packagegraph.github.io/ontology/debian#", "Suite"))
        );
        assert_eq!(
            split("http://example.org/a/b"),
            Some(("http://example.org/a/", "b"))
        );
        assert_eq!(split("http://example.org/"), None);
    }
}
