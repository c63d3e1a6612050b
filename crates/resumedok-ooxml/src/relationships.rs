//! Relationships parsing and generation for OOXML packages
//!
//! OOXML uses relationship files (`_rels/*.rels`) to map IDs to targets.
//! The writer uses them to wire the main document to its styles and
//! numbering parts; the reader uses them to find the styles part.
//!
//! # Example
//!
//! ```
//! use resumedok_ooxml::Relationships;
//!
//! let mut rels = Relationships::new();
//! let id = rels.add("styles.xml", Relationships::TYPE_STYLES);
//! assert_eq!(id, "rId1");
//! assert_eq!(rels.find_by_type(Relationships::TYPE_STYLES), Some("styles.xml"));
//! ```

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::xml::{escape_xml, XML_DECLARATION};

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Common relationship type URIs
impl Relationships {
    /// Package-level link to the main document part
    pub const TYPE_OFFICE_DOCUMENT: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Numbering relationship type
    pub const TYPE_NUMBERING: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
}

/// Parsed relationships from a .rels file
///
/// Maintains insertion order for deterministic XML serialization.
#[derive(Debug, Clone)]
pub struct Relationships {
    /// Ordered list of relationship IDs
    order: Vec<String>,
    /// Map of relationship ID to target
    map: HashMap<String, RelationshipTarget>,
    /// Counter for generating unique IDs
    next_id_counter: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            map: HashMap::new(),
            next_id_counter: 1, // IDs start at rId1
        }
    }
}

/// A relationship target with its type
#[derive(Debug, Clone)]
pub struct RelationshipTarget {
    /// The target path, relative to the owning part's folder
    pub target: String,
    /// The relationship type URI
    pub rel_type: String,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse relationships from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut rels = Relationships::new();
        let mut max_id: u32 = 0;
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    if e.local_name().as_ref() == b"Relationship" {
                        let mut id = None;
                        let mut target = None;
                        let mut rel_type = None;

                        for attr in e.attributes().filter_map(|a| a.ok()) {
                            let value = attr.unescape_value().ok().map(|s| s.to_string());
                            match attr.key.as_ref() {
                                b"Id" => id = value,
                                b"Target" => target = value,
                                b"Type" => rel_type = value,
                                _ => {}
                            }
                        }

                        if let (Some(id), Some(target)) = (id, target) {
                            if let Some(num) = extract_id_number(&id) {
                                max_id = max_id.max(num);
                            }
                            rels.order.push(id.clone());
                            rels.map.insert(
                                id,
                                RelationshipTarget {
                                    target,
                                    rel_type: rel_type.unwrap_or_default(),
                                },
                            );
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        rels.next_id_counter = max_id.saturating_add(1);
        Ok(rels)
    }

    /// Add a new relationship and return the generated ID (e.g. `rId3`)
    ///
    /// Once the counter is exhausted the lowest free `rIdN` is used instead.
    pub fn add(&mut self, target: impl Into<String>, rel_type: impl Into<String>) -> String {
        let candidate = format!("rId{}", self.next_id_counter);
        let id = match self.next_id_counter.checked_add(1) {
            Some(next) if !self.map.contains_key(&candidate) => {
                self.next_id_counter = next;
                candidate
            }
            _ => (1u64..)
                .map(|n| format!("rId{}", n))
                .find(|id| !self.map.contains_key(id))
                .unwrap_or_default(),
        };

        self.order.push(id.clone());
        self.map.insert(
            id.clone(),
            RelationshipTarget {
                target: target.into(),
                rel_type: rel_type.into(),
            },
        );

        id
    }

    /// Serialize relationships to OOXML format
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(XML_DECLARATION);
        xml.push('\n');
        xml.push_str(&format!(r#"<Relationships xmlns="{}">"#, RELATIONSHIPS_NS));
        xml.push('\n');

        for (id, rel) in self.iter() {
            xml.push_str(&format!(
                r#"  <Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(id),
                escape_xml(&rel.rel_type),
                escape_xml(&rel.target)
            ));
            xml.push('\n');
        }

        xml.push_str("</Relationships>");
        xml
    }

    /// Get the target for a relationship ID
    pub fn get(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(|r| r.target.as_str())
    }

    /// Target of the first relationship with the given type
    pub fn find_by_type(&self, rel_type: &str) -> Option<&str> {
        self.iter()
            .find(|(_, rel)| rel.rel_type == rel_type)
            .map(|(_, rel)| rel.target.as_str())
    }

    /// Get the number of relationships
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if there are no relationships
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over relationships in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelationshipTarget)> {
        self.order
            .iter()
            .filter_map(|id| self.map.get(id).map(|rel| (id.as_str(), rel)))
    }
}

/// Resolve a relationship target against the folder of its source part
///
/// `resolve_target("word/document.xml", "styles.xml")` is
/// `word/styles.xml`; absolute targets (`/word/styles.xml`) are taken from
/// the package root.
pub fn resolve_target(source_part: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = source_part.split('/').collect();
    segments.pop(); // drop the part's file name
    for segment in target.split('/') {
        match segment {
            "." | "" => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Extract the numeric portion from a relationship ID (e.g., "rId5" -> 5)
fn extract_id_number(id: &str) -> Option<u32> {
    id.strip_prefix("rId")
        .or_else(|| id.strip_prefix("RId"))
        .or_else(|| id.strip_prefix("rid"))
        .and_then(|num_str| num_str.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relationships() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
            <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
        </Relationships>"#;

        let rels = Relationships::parse(xml).unwrap();

        assert_eq!(rels.get("rId1"), Some("numbering.xml"));
        assert_eq!(rels.get("rId2"), Some("styles.xml"));
        assert_eq!(rels.find_by_type(Relationships::TYPE_STYLES), Some("styles.xml"));
        assert_eq!(rels.len(), 2);
    }

    #[test]
    fn test_empty_relationships() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
        </Relationships>"#;

        let rels = Relationships::parse(xml).unwrap();
        assert!(rels.get("rId1").is_none());
        assert!(rels.is_empty());
        assert!(rels.find_by_type(Relationships::TYPE_STYLES).is_none());
    }

    #[test]
    fn test_add_continues_after_parsed_ids() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId7" Type="x" Target="a.xml"/>
        </Relationships>"#;

        let mut rels = Relationships::parse(xml).unwrap();
        let id = rels.add("b.xml", Relationships::TYPE_NUMBERING);
        assert_eq!(id, "rId8");
    }

    #[test]
    fn test_parse_max_id_does_not_overflow() {
        let xml = br#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId4294967295" Type="x" Target="a.xml"/>
        </Relationships>"#;

        let mut rels = Relationships::parse(xml).unwrap();
        assert_eq!(rels.get("rId4294967295"), Some("a.xml"));

        let first = rels.add("b.xml", Relationships::TYPE_STYLES);
        let second = rels.add("c.xml", Relationships::TYPE_NUMBERING);
        assert_eq!(first, "rId1");
        assert_eq!(second, "rId2");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_to_xml_roundtrip_preserves_order() {
        let mut rels = Relationships::new();
        rels.add("styles.xml", Relationships::TYPE_STYLES);
        rels.add("numbering.xml", Relationships::TYPE_NUMBERING);

        let xml = rels.to_xml();
        let styles_pos = xml.find("styles.xml").unwrap();
        let numbering_pos = xml.find("numbering.xml").unwrap();
        assert!(styles_pos < numbering_pos);

        let parsed = Relationships::parse(xml.as_bytes()).unwrap();
        let ids: Vec<_> = parsed.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, vec!["rId1", "rId2"]);
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(resolve_target("word/document.xml", "styles.xml"), "word/styles.xml");
        assert_eq!(resolve_target("word/document.xml", "/word/styles.xml"), "word/styles.xml");
        assert_eq!(resolve_target("word/document.xml", "../custom/styles.xml"), "custom/styles.xml");
    }
}
