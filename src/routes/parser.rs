// Decoder for JunOS `show route | display xml` output

use crate::error::{AppError, AppResult};
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use std::path::Path;

const ROOT_ELEMENT: &[u8] = b"rpc-reply";

/// A decoded `<rpc-reply>` document. Only the fields the extractor reads are
/// kept; every other element or attribute is skipped by the deserializer.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDocument {
    #[serde(rename = "route-information")]
    pub route_information: RouteInformation,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteInformation {
    #[serde(rename = "route-table", default)]
    pub tables: Vec<RouteTable>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteTable {
    #[serde(rename = "table-name")]
    pub table_name: String,

    #[serde(rename = "rt", default)]
    pub destinations: Vec<Rt>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rt {
    #[serde(rename = "rt-destination")]
    pub destination: String,

    #[serde(rename = "rt-entry", default)]
    pub entries: Vec<RtEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RtEntry {
    /// `*` on the entry the router is using for forwarding
    #[serde(rename = "active-tag", default)]
    pub active_tag: String,

    #[serde(rename = "nh", default)]
    pub next_hops: Vec<Nh>,
}

impl RtEntry {
    pub fn is_active(&self) -> bool {
        self.active_tag.trim() == "*"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Nh {
    #[serde(default)]
    pub to: String,

    #[serde(default)]
    pub via: String,

    #[serde(rename = "nh-local-interface", default)]
    pub local_interface: String,
}

/// Decode one snapshot. `input` names the snapshot in error messages.
pub fn parse_document(input: &str, xml: &str) -> AppResult<RawDocument> {
    check_root(input, xml)?;
    quick_xml::de::from_str(xml).map_err(|e| AppError::malformed(input, e))
}

/// Read and decode a snapshot file.
pub fn load_document(path: &Path) -> AppResult<RawDocument> {
    let xml = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
    parse_document(&path.display().to_string(), &xml)
}

/// The serde deserializer accepts any root element name, so confirm it is
/// an `<rpc-reply>` (with or without a namespace prefix) before decoding.
fn check_root(input: &str, xml: &str) -> AppResult<()> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let name = e.local_name();
                if name.as_ref() == ROOT_ELEMENT {
                    return Ok(());
                }
                return Err(AppError::malformed(
                    input,
                    format!(
                        "expected <rpc-reply> root element, found <{}>",
                        String::from_utf8_lossy(name.as_ref())
                    ),
                ));
            }
            Ok(Event::Eof) => {
                return Err(AppError::malformed(input, "document has no root element"));
            }
            Ok(_) => {}
            Err(e) => return Err(AppError::malformed(input, e)),
        }
    }
}
