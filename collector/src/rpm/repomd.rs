//! `repodata/repomd.xml`: the index of a repository's metadata files.

use indexmap::IndexMap;
use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml::attr;

/// Maps each `<data type="...">` to its `<location href="..."/>`.
///
/// # Errors
///
/// Returns the parser error for malformed XML.
pub fn parse_repomd(xml: &str) -> Result<IndexMap<String, String>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut locations = IndexMap::new();
    let mut data_type: Option<String> = None;
    loop {
        match reader.read_event()? {
            Event::Start(e) if e.local_name().as_ref() == b"data" => {
                data_type = attr(&e, b"type")?;
            }
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"location" => {
                if let (Some(kind), Some(href)) = (&data_type, attr(&e, b"href")?) {
                    locations.entry(kind.clone()).or_insert(href);
                }
            }
            Event::End(e) if e.local_name().as_ref() == b"data" => data_type = None,
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(locations)
}
