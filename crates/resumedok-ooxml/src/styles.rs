//! Style definitions (word/styles.xml)
//!
//! Reading: [`StyleSheet::parse`] collects style definitions and the run
//! defaults so the document's base style can be recovered on load.
//!
//! Writing: [`styles_xml`] emits the minimal style table the writer needs,
//! a `Normal` default paragraph style carrying the base font and a
//! `ListBullet` style bound to the bullet numbering definition.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{OoxmlError, Result};
use crate::numbering::BULLET_NUM_ID;
use crate::units::{half_points_to_points, points_to_half_points};
use crate::xml::{escape_xml, get_attr, W_NS, XML_DECLARATION};

/// Style ID of the default paragraph style
pub const NORMAL_STYLE_ID: &str = "Normal";

/// Style ID of the bulleted list paragraph style
pub const LIST_BULLET_STYLE_ID: &str = "ListBullet";

/// The document-wide default run formatting
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStyle {
    /// Font family applied to runs without an explicit font
    pub font_family: String,
    /// Font size in points applied to runs without an explicit size
    pub font_size: f32,
}

impl BaseStyle {
    /// Create a base style
    pub fn new(font_family: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
        }
    }
}

impl Default for BaseStyle {
    /// Word's stock `Normal` style
    fn default() -> Self {
        Self::new("Calibri", 11.0)
    }
}

/// Collection of styles from a document
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// All styles, keyed by style ID
    styles: HashMap<String, Style>,
    /// Default paragraph style ID
    pub default_paragraph: Option<String>,
    /// Font family from `w:docDefaults`
    pub default_font_family: Option<String>,
    /// Font size in points from `w:docDefaults`
    pub default_font_size: Option<f32>,
}

/// A Word style definition
#[derive(Debug, Clone)]
pub struct Style {
    /// Style ID (used in document references)
    pub id: String,
    /// Display name
    pub name: String,
    /// Style type
    pub style_type: StyleType,
    /// Base style ID (for inheritance)
    pub based_on: Option<String>,
    /// Font family from the style's run properties
    pub font_family: Option<String>,
    /// Font size in points from the style's run properties
    pub font_size: Option<f32>,
}

/// Type of style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleType {
    /// Paragraph style
    #[default]
    Paragraph,
    /// Character (run) style
    Character,
    /// Table style
    Table,
    /// Numbering style
    Numbering,
}

impl StyleSheet {
    /// Parse styles from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut stylesheet = StyleSheet::default();
        let mut buf = Vec::new();
        let mut current_style: Option<StyleBuilder> = None;
        let mut in_doc_defaults = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(ref event @ (Event::Start(ref e) | Event::Empty(ref e))) => {
                    let is_empty = matches!(event, Event::Empty(_));
                    match e.local_name().as_ref() {
                        b"docDefaults" => in_doc_defaults = !is_empty,
                        b"style" => {
                            let style_type = match get_attr(e, b"type").as_deref() {
                                Some("character") => StyleType::Character,
                                Some("table") => StyleType::Table,
                                Some("numbering") => StyleType::Numbering,
                                _ => StyleType::Paragraph,
                            };
                            current_style = Some(StyleBuilder {
                                id: get_attr(e, b"styleId"),
                                style_type,
                                is_default: matches!(
                                    get_attr(e, b"default").as_deref(),
                                    Some("1") | Some("true")
                                ),
                                ..Default::default()
                            });
                            // An empty <w:style/> has no End event to close it
                            if is_empty {
                                stylesheet.finish_style(current_style.take());
                            }
                        }
                        b"name" => {
                            if let Some(style) = current_style.as_mut() {
                                style.name = get_attr(e, b"val");
                            }
                        }
                        b"basedOn" => {
                            if let Some(style) = current_style.as_mut() {
                                style.based_on = get_attr(e, b"val");
                            }
                        }
                        b"rFonts" => {
                            let font = get_attr(e, b"ascii").or_else(|| get_attr(e, b"hAnsi"));
                            if let Some(style) = current_style.as_mut() {
                                style.font_family = font;
                            } else if in_doc_defaults {
                                stylesheet.default_font_family = font;
                            }
                        }
                        b"sz" => {
                            let size = get_attr(e, b"val")
                                .and_then(|v| v.parse::<u32>().ok())
                                .map(half_points_to_points);
                            if let Some(style) = current_style.as_mut() {
                                style.font_size = size;
                            } else if in_doc_defaults {
                                stylesheet.default_font_size = size;
                            }
                        }
                        _ => {}
                    }
                }
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"docDefaults" => in_doc_defaults = false,
                    b"style" => stylesheet.finish_style(current_style.take()),
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(stylesheet)
    }

    fn finish_style(&mut self, builder: Option<StyleBuilder>) {
        let Some(builder) = builder else {
            return;
        };
        let is_default = builder.is_default;
        if let Some(style) = builder.build() {
            if is_default && style.style_type == StyleType::Paragraph {
                self.default_paragraph = Some(style.id.clone());
            }
            self.styles.insert(style.id.clone(), style);
        }
    }

    /// Get a style by ID
    pub fn get(&self, id: &str) -> Option<&Style> {
        self.styles.get(id)
    }

    /// Number of styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if there are no styles
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolve a font property by walking the `basedOn` chain
    fn resolve<T>(&self, id: &str, pick: impl Fn(&Style) -> Option<T>) -> Option<T> {
        let mut current = self.styles.get(id);
        // Cycles in basedOn are malformed but possible; bound the walk.
        for _ in 0..self.styles.len() {
            let style = current?;
            if let Some(value) = pick(style) {
                return Some(value);
            }
            current = style.based_on.as_deref().and_then(|b| self.styles.get(b));
        }
        None
    }

    /// The base style of the document
    ///
    /// Font and size come from the default paragraph style (following
    /// `basedOn`), then from `w:docDefaults`. Returns `None` when neither
    /// declares a font family or a size.
    pub fn base_style(&self) -> Option<BaseStyle> {
        let default_id = self
            .default_paragraph
            .as_deref()
            .unwrap_or(NORMAL_STYLE_ID);

        let font_family = self
            .resolve(default_id, |s| s.font_family.clone())
            .or_else(|| self.default_font_family.clone());
        let font_size = self
            .resolve(default_id, |s| s.font_size)
            .or(self.default_font_size);

        match (font_family, font_size) {
            (None, None) => None,
            (family, size) => {
                let fallback = BaseStyle::default();
                Some(BaseStyle::new(
                    family.unwrap_or(fallback.font_family),
                    size.unwrap_or(fallback.font_size),
                ))
            }
        }
    }
}

#[derive(Default)]
struct StyleBuilder {
    id: Option<String>,
    name: Option<String>,
    style_type: StyleType,
    based_on: Option<String>,
    font_family: Option<String>,
    font_size: Option<f32>,
    is_default: bool,
}

impl StyleBuilder {
    fn build(self) -> Option<Style> {
        let id = self.id?;
        Some(Style {
            name: self.name.unwrap_or_else(|| id.clone()),
            id,
            style_type: self.style_type,
            based_on: self.based_on,
            font_family: self.font_family,
            font_size: self.font_size,
        })
    }
}

/// Render `w:rFonts` and `w:sz` for a font family and size
pub(crate) fn font_properties_xml(font_family: Option<&str>, font_size: Option<f32>) -> String {
    let mut xml = String::new();
    if let Some(family) = font_family {
        let family = escape_xml(family);
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{0}" w:cs="{0}"/>"#,
            family
        ));
    }
    if let Some(size) = font_size {
        let half_points = points_to_half_points(size);
        xml.push_str(&format!(
            r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
            half_points
        ));
    }
    xml
}

/// Generate word/styles.xml for a base style
pub fn styles_xml(base: &BaseStyle) -> String {
    let fonts = font_properties_xml(Some(&base.font_family), Some(base.font_size));

    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<w:styles xmlns:w="{}">"#, W_NS));
    xml.push('\n');

    xml.push_str("<w:docDefaults>\n");
    xml.push_str(&format!(
        "<w:rPrDefault><w:rPr>{}</w:rPr></w:rPrDefault>\n",
        fonts
    ));
    xml.push_str("<w:pPrDefault/>\n");
    xml.push_str("</w:docDefaults>\n");

    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="{}">"#,
        NORMAL_STYLE_ID
    ));
    xml.push_str(r#"<w:name w:val="Normal"/><w:qFormat/>"#);
    xml.push_str(&format!("<w:rPr>{}</w:rPr>", fonts));
    xml.push_str("</w:style>\n");

    xml.push_str(
        r#"<w:style w:type="character" w:default="1" w:styleId="DefaultParagraphFont"><w:name w:val="Default Paragraph Font"/><w:uiPriority w:val="1"/><w:semiHidden/></w:style>"#,
    );
    xml.push('\n');

    xml.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="{}">"#,
        LIST_BULLET_STYLE_ID
    ));
    xml.push_str(&format!(
        r#"<w:name w:val="List Bullet"/><w:basedOn w:val="{}"/><w:uiPriority w:val="99"/>"#,
        NORMAL_STYLE_ID
    ));
    xml.push_str(&format!(
        r#"<w:pPr><w:numPr><w:numId w:val="{}"/></w:numPr><w:contextualSpacing/></w:pPr>"#,
        BULLET_NUM_ID
    ));
    xml.push_str("</w:style>\n");

    xml.push_str("</w:styles>");
    xml
}
