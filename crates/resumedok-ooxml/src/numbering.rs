//! List numbering (word/numbering.xml)
//!
//! Only bulleted lists are generated. One abstract definition carries the
//! bullet glyphs for nine levels and is instantiated as `numId` 1.

use crate::units::inches_to_twips;
use crate::xml::{W_NS, XML_DECLARATION};

/// `w:numId` of the bullet list instance
pub const BULLET_NUM_ID: u32 = 1;

/// `w:abstractNumId` of the bullet list definition
const BULLET_ABSTRACT_ID: u32 = 0;

/// Deepest list level Word supports (levels are 0-based)
pub const MAX_LIST_LEVEL: u32 = 8;

/// Glyphs cycled through by level: bullet, circle, square
const BULLET_GLYPHS: [(&str, &str); 3] = [
    ("\u{F0B7}", "Symbol"),
    ("o", "Courier New"),
    ("\u{F0A7}", "Wingdings"),
];

/// Marker placed in front of a list paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// A bullet at the given 0-based nesting level
    Bullet {
        /// Nesting level, clamped to [`MAX_LIST_LEVEL`] when written
        level: u32,
    },
}

impl ListMarker {
    /// A top-level bullet
    pub fn bullet() -> Self {
        ListMarker::Bullet { level: 0 }
    }

    /// The `w:numId` this marker references
    pub fn num_id(&self) -> u32 {
        match self {
            ListMarker::Bullet { .. } => BULLET_NUM_ID,
        }
    }

    /// The `w:ilvl` this marker references
    pub fn level(&self) -> u32 {
        match self {
            ListMarker::Bullet { level } => (*level).min(MAX_LIST_LEVEL),
        }
    }

    /// Map a parsed `w:numPr` back to a marker
    ///
    /// Every numbering instance is read as a bullet; `numId` 0 means
    /// "numbering removed" and yields no marker.
    pub fn from_num_pr(num_id: u32, level: u32) -> Option<Self> {
        if num_id == 0 {
            None
        } else {
            Some(ListMarker::Bullet { level })
        }
    }
}

/// Generate word/numbering.xml
pub fn numbering_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:numbering xmlns:w="{}">"#, W_NS));
    xml.push('\n');

    xml.push_str(&format!(
        r#"<w:abstractNum w:abstractNumId="{}">"#,
        BULLET_ABSTRACT_ID
    ));
    xml.push_str(r#"<w:multiLevelType w:val="hybridMultilevel"/>"#);
    xml.push('\n');
    for level in 0..=MAX_LIST_LEVEL {
        let (glyph, font) = BULLET_GLYPHS[level as usize % BULLET_GLYPHS.len()];
        let indent = inches_to_twips(0.5 * (level + 1) as f32);
        let hanging = inches_to_twips(0.25);
        xml.push_str(&format!(r#"<w:lvl w:ilvl="{}">"#, level));
        xml.push_str(r#"<w:start w:val="1"/><w:numFmt w:val="bullet"/>"#);
        xml.push_str(&format!(r#"<w:lvlText w:val="{}"/>"#, glyph));
        xml.push_str(r#"<w:lvlJc w:val="left"/>"#);
        xml.push_str(&format!(
            r#"<w:pPr><w:ind w:left="{}" w:hanging="{}"/></w:pPr>"#,
            indent, hanging
        ));
        xml.push_str(&format!(
            r#"<w:rPr><w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:hint="default"/></w:rPr>"#,
            font
        ));
        xml.push_str("</w:lvl>\n");
    }
    xml.push_str("</w:abstractNum>\n");

    xml.push_str(&format!(
        r#"<w:num w:numId="{}"><w:abstractNumId w:val="{}"/></w:num>"#,
        BULLET_NUM_ID, BULLET_ABSTRACT_ID
    ));
    xml.push('\n');
    xml.push_str("</w:numbering>");
    xml
}
