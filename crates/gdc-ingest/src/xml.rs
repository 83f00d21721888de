//! Leaf-element scanning of clinical XML documents.
//!
//! Clinical documents nest patient data several levels deep (patient,
//! follow-ups, drugs, radiations). Extraction ignores that hierarchy: every
//! element without child elements contributes its text under its local tag
//! name, with namespace prefixes dropped.

use std::path::Path;

use gdc_model::RawTagValues;
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use thiserror::Error;
use tracing::trace;

use crate::error::{IngestError, Result};

/// Failure to scan a document, with the byte offset where it was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct XmlScanError {
    pub position: u64,
    pub message: String,
}

#[derive(Debug)]
struct OpenElement {
    tag: String,
    text: String,
    has_children: bool,
}

/// Collects the text of every leaf element in `xml`.
///
/// Self-closing elements and leaves whose text is blank carry no value and
/// are skipped. Text is trimmed; entity and character references are
/// resolved and CDATA sections are kept verbatim.
pub fn scan_leaf_tags(xml: &str) -> std::result::Result<RawTagValues, XmlScanError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<OpenElement> = Vec::new();
    let mut raw = RawTagValues::new();

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| XmlScanError {
            position,
            message: e.to_string(),
        })?;
        let decode_error = |message: String| XmlScanError { position, message };

        match event {
            Event::Start(start) => {
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
                let tag = reader
                    .decoder()
                    .decode(start.local_name().as_ref())
                    .map_err(|e| decode_error(e.to_string()))?
                    .into_owned();
                stack.push(OpenElement {
                    tag,
                    text: String::new(),
                    has_children: false,
                });
            }
            Event::Empty(_) => {
                if let Some(parent) = stack.last_mut() {
                    parent.has_children = true;
                }
            }
            Event::Text(text) => {
                if let Some(open) = stack.last_mut() {
                    let decoded = reader
                        .decoder()
                        .decode(&text)
                        .map_err(|e| decode_error(e.to_string()))?;
                    open.text.push_str(&decoded);
                }
            }
            Event::CData(cdata) => {
                if let Some(open) = stack.last_mut() {
                    let decoded = reader
                        .decoder()
                        .decode(&cdata)
                        .map_err(|e| decode_error(e.to_string()))?;
                    open.text.push_str(&decoded);
                }
            }
            Event::GeneralRef(reference) => {
                if let Some(open) = stack.last_mut() {
                    let name = reader
                        .decoder()
                        .decode(&reference)
                        .map_err(|e| decode_error(e.to_string()))?;
                    push_reference(&mut open.text, &name)
                        .ok_or_else(|| decode_error(format!("unknown entity '&{name};'")))?;
                }
            }
            Event::End(_) => {
                let Some(closed) = stack.pop() else {
                    return Err(decode_error("closing tag without opening tag".to_string()));
                };
                if closed.has_children {
                    continue;
                }
                let value = closed.text.trim();
                if !value.is_empty() {
                    raw.push(closed.tag, value);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlScanError {
            position: reader.buffer_position() as u64,
            message: format!("unexpected end of document inside <{}>", open.tag),
        });
    }

    Ok(raw)
}

/// Appends the expansion of `&name;` to `text`; `None` for unknown entities.
fn push_reference(text: &mut String, name: &str) -> Option<()> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        text.push(char::from_u32(code)?);
    } else {
        text.push_str(resolve_predefined_entity(name)?);
    }
    Some(())
}

/// Reads a document from disk and scans its leaf elements.
pub fn read_raw_tags(path: &Path) -> Result<RawTagValues> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let raw = scan_leaf_tags(&content).map_err(|e| IngestError::XmlParse {
        path: path.to_path_buf(),
        position: e.position,
        message: e.message,
    })?;
    trace!(path = %path.display(), tag_count = raw.tag_count(), "scanned leaf tags");
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes_are_dropped() {
        let raw = scan_leaf_tags(
            r#"<brca:patient xmlns:brca="b" xmlns:shared="s">
                 <shared:gender procurement_status="Completed">FEMALE</shared:gender>
               </brca:patient>"#,
        )
        .unwrap();
        assert_eq!(raw.get("gender"), ["FEMALE"]);
        assert!(!raw.contains("patient"));
    }

    #[test]
    fn test_self_closing_and_blank_leaves_are_skipped() {
        let raw = scan_leaf_tags(
            r#"<p>
                 <days_to_death procurement_status="Not Applicable" />
                 <pathologic_M></pathologic_M>
                 <pathologic_N>   </pathologic_N>
                 <pathologic_T>T2</pathologic_T>
               </p>"#,
        )
        .unwrap();
        assert!(!raw.contains("days_to_death"));
        assert!(!raw.contains("pathologic_M"));
        assert!(!raw.contains("pathologic_N"));
        assert_eq!(raw.get("pathologic_T"), ["T2"]);
    }

    #[test]
    fn test_nested_elements_are_not_leaves() {
        let raw = scan_leaf_tags(
            "<a><follow_ups><follow_up><vital_status>Alive</vital_status></follow_up>\
             <follow_up><vital_status>Dead</vital_status></follow_up></follow_ups></a>",
        )
        .unwrap();
        assert_eq!(raw.get("vital_status"), ["Alive", "Dead"]);
        assert!(!raw.contains("follow_up"));
        assert!(!raw.contains("follow_ups"));
    }

    #[test]
    fn test_references_and_cdata() {
        let raw = scan_leaf_tags(
            "<a><diagnosis>Lung &amp; Bronchus</diagnosis>\
             <histological_type>&#65;&#x42;</histological_type>\
             <gender><![CDATA[MALE]]></gender></a>",
        )
        .unwrap();
        assert_eq!(raw.get("diagnosis"), ["Lung & Bronchus"]);
        assert_eq!(raw.get("histological_type"), ["AB"]);
        assert_eq!(raw.get("gender"), ["MALE"]);
    }

    #[test]
    fn test_unknown_entity_is_an_error() {
        assert!(scan_leaf_tags("<a><b>&bogus;</b></a>").is_err());
    }

    #[test]
    fn test_mismatched_tags_are_an_error() {
        assert!(scan_leaf_tags("<a><b>1</c></a>").is_err());
    }

    #[test]
    fn test_truncated_document_is_an_error() {
        assert!(scan_leaf_tags("<a><b>1</b>").is_err());
    }
}
