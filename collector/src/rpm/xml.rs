//! Small helpers over `quick-xml` shared by the repodata parsers.

use quick_xml::events::{BytesCData, BytesStart, BytesText};

/// Unescaped value of the attribute with local name `name`.
pub(crate) fn attr(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, quick_xml::Error> {
    for a in e.attributes() {
        let a = a?;
        if a.key.local_name().as_ref() == name {
            return Ok(Some(a.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Appends unescaped character data to `buf`.
pub(crate) fn push_text(buf: &mut String, t: &BytesText<'_>) -> Result<(), quick_xml::Error> {
    buf.push_str(&t.unescape()?);
    Ok(())
}

/// Appends a CDATA section to `buf`.
pub(crate) fn push_cdata(buf: &mut String, t: &BytesCData<'_>) {
    buf.push_str(&String::from_utf8_lossy(t));
}
