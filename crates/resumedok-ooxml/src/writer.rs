//! DOCX Writer
//!
//! This module serializes a [`Document`] into a complete WordprocessingML
//! package: content types, package and document relationships, the main
//! document part, styles and bullet numbering.
//!
//! # Example
//!
//! ```no_run
//! use resumedok_ooxml::{Document, DocxWriter, Paragraph, Run};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::new().with_run(Run::new("Hello").bold()));
//! DocxWriter::write_to_file(&doc, "hello.docx")?;
//! # Ok::<(), resumedok_ooxml::OoxmlError>(())
//! ```

use std::path::Path;

use crate::archive::{OoxmlArchive, DOCUMENT_PART, DOCUMENT_RELS_PART, NUMBERING_PART, STYLES_PART};
use crate::document::{Alignment, Document, Paragraph, Run};
use crate::error::{OoxmlError, Result};
use crate::numbering::numbering_xml;
use crate::relationships::Relationships;
use crate::styles::{font_properties_xml, styles_xml};
use crate::units::{inches_to_twips, is_valid_font_size, points_to_twips};
use crate::xml::{escape_xml, find_invalid_xml_char, W_NS, XML_DECLARATION};

/// US Letter page with one-inch margins, in twips
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#;

/// DOCX Writer for generating DOCX packages from a [`Document`]
#[derive(Debug, Default)]
pub struct DocxWriter {
    /// XML output buffer for word/document.xml
    output: String,
}

impl DocxWriter {
    /// Create a new DocxWriter
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a DOCX file as bytes
    pub fn generate(doc: &Document) -> Result<Vec<u8>> {
        let archive = DocxWriter::new().build_archive(doc)?;
        archive.to_bytes()
    }

    /// Generate a DOCX file and write it to `path`
    pub fn write_to_file<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
        let path = path.as_ref();
        let archive = DocxWriter::new().build_archive(doc)?;
        archive.write_to_file(path)?;
        log::info!(
            "Wrote {} paragraphs to {}",
            doc.len(),
            path.display()
        );
        Ok(())
    }

    /// Assemble every package part for `doc`
    ///
    /// Fails with [`OoxmlError::InvalidStyle`] before producing any output
    /// when a style value cannot be represented.
    pub fn build_archive(&mut self, doc: &Document) -> Result<OoxmlArchive> {
        validate(doc)?;

        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", content_types_xml());

        let mut package_rels = Relationships::new();
        package_rels.add(DOCUMENT_PART, Relationships::TYPE_OFFICE_DOCUMENT);
        archive.set_string("_rels/.rels", package_rels.to_xml());

        let mut document_rels = Relationships::new();
        document_rels.add("styles.xml", Relationships::TYPE_STYLES);
        document_rels.add("numbering.xml", Relationships::TYPE_NUMBERING);
        archive.set_string(DOCUMENT_RELS_PART, document_rels.to_xml());

        archive.set_string(DOCUMENT_PART, self.generate_document_xml(doc));
        archive.set_string(STYLES_PART, styles_xml(doc.base_style()));
        archive.set_string(NUMBERING_PART, numbering_xml());

        log::debug!("Assembled package with {} parts", archive.len());
        Ok(archive)
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &Document) -> String {
        self.output.clear();

        self.output.push_str(XML_DECLARATION);
        self.output.push('\n');
        self.output
            .push_str(&format!(r#"<w:document xmlns:w="{}">"#, W_NS));
        self.output.push('\n');
        self.output.push_str("<w:body>\n");

        for para in doc.paragraphs() {
            self.generate_paragraph(para);
        }

        self.output.push_str(SECTION_PROPERTIES);
        self.output.push('\n');
        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// Generate XML for a paragraph
    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.output.push_str("<w:p>");

        // Child order follows CT_PPr: pStyle, numPr, spacing, ind, jc
        let mut props = String::new();
        if let Some(style) = &para.style_id {
            props.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, escape_xml(style)));
        }
        if let Some(marker) = &para.list {
            props.push_str(&format!(
                r#"<w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr>"#,
                marker.level(),
                marker.num_id()
            ));
        }
        if let Some(before) = para.spacing_before {
            props.push_str(&format!(
                r#"<w:spacing w:before="{}"/>"#,
                points_to_twips(before)
            ));
        }
        if let Some(indent) = para.indent_left {
            props.push_str(&format!(r#"<w:ind w:left="{}"/>"#, inches_to_twips(indent)));
        }
        if para.alignment != Alignment::Left {
            props.push_str(&format!(r#"<w:jc w:val="{}"/>"#, para.alignment.as_jc()));
        }
        if !props.is_empty() {
            self.output.push_str("<w:pPr>");
            self.output.push_str(&props);
            self.output.push_str("</w:pPr>");
        }

        for run in &para.runs {
            self.generate_run(run);
        }

        self.output.push_str("</w:p>\n");
    }

    /// Generate XML for a run
    fn generate_run(&mut self, run: &Run) {
        self.output.push_str("<w:r>");

        // Child order follows CT_RPr: rFonts, b, sz
        let style = &run.style;
        let mut props = font_properties_xml(style.font_family.as_deref(), None);
        if style.bold {
            props.push_str("<w:b/><w:bCs/>");
        }
        props.push_str(&font_properties_xml(None, style.font_size));
        if !props.is_empty() {
            self.output.push_str("<w:rPr>");
            self.output.push_str(&props);
            self.output.push_str("</w:rPr>");
        }

        // Tabs and line breaks are elements, not text
        let mut segment = String::new();
        for ch in run.text.chars() {
            match ch {
                '\t' | '\n' => {
                    self.flush_text(&mut segment);
                    self.output
                        .push_str(if ch == '\t' { "<w:tab/>" } else { "<w:br/>" });
                }
                _ => segment.push(ch),
            }
        }
        self.flush_text(&mut segment);

        self.output.push_str("</w:r>");
    }

    fn flush_text(&mut self, segment: &mut String) {
        if segment.is_empty() {
            return;
        }
        self.output.push_str(&format!(
            r#"<w:t xml:space="preserve">{}</w:t>"#,
            escape_xml(segment)
        ));
        segment.clear();
    }
}

impl Document {
    /// Serialize the document as DOCX at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        DocxWriter::write_to_file(self, path)
    }
}

/// Reject style values WordprocessingML cannot represent
fn validate(doc: &Document) -> Result<()> {
    let base = doc.base_style();
    if base.font_family.trim().is_empty() {
        return Err(OoxmlError::InvalidStyle(
            "base font family is empty".to_string(),
        ));
    }
    if let Some(c) = find_invalid_xml_char(&base.font_family) {
        return Err(OoxmlError::InvalidStyle(format!(
            "base font family contains U+{:04X}",
            c as u32
        )));
    }
    if !is_valid_font_size(base.font_size) {
        return Err(OoxmlError::InvalidStyle(format!(
            "base font size {} is not a positive size",
            base.font_size
        )));
    }

    for (index, para) in doc.paragraphs().iter().enumerate() {
        if let Some(before) = para.spacing_before {
            if !before.is_finite() || before < 0.0 {
                return Err(OoxmlError::InvalidStyle(format!(
                    "paragraph {}: spacing before {} is negative or not finite",
                    index, before
                )));
            }
        }
        if let Some(indent) = para.indent_left {
            if !indent.is_finite() {
                return Err(OoxmlError::InvalidStyle(format!(
                    "paragraph {}: indent is not finite",
                    index
                )));
            }
        }
        if let Some(style_id) = &para.style_id {
            check_style_text(index, "style id", style_id)?;
        }
        for run in &para.runs {
            if let Some(c) = find_invalid_xml_char(&run.text) {
                return Err(OoxmlError::InvalidText(format!(
                    "paragraph {}: character U+{:04X} is not allowed in XML",
                    index, c as u32
                )));
            }
            if let Some(family) = &run.style.font_family {
                check_style_text(index, "font family", family)?;
            }
            if let Some(size) = run.style.font_size {
                if !is_valid_font_size(size) {
                    return Err(OoxmlError::InvalidStyle(format!(
                        "paragraph {}: font size {} is not a positive size",
                        index, size
                    )));
                }
            }
        }
    }

    Ok(())
}

fn check_style_text(index: usize, what: &str, value: &str) -> Result<()> {
    match find_invalid_xml_char(value) {
        Some(c) => Err(OoxmlError::InvalidStyle(format!(
            "paragraph {}: {} contains U+{:04X}",
            index, what, c as u32
        ))),
        None => Ok(()),
    }
}

/// Generate [Content_Types].xml
fn content_types_xml() -> String {
    let mut xml = String::new();
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push('\n');
    for (part, content_type) in [
        (DOCUMENT_PART, "wordprocessingml.document.main+xml"),
        (STYLES_PART, "wordprocessingml.styles+xml"),
        (NUMBERING_PART, "wordprocessingml.numbering+xml"),
    ] {
        xml.push_str(&format!(
            r#"  <Override PartName="/{}" ContentType="application/vnd.openxmlformats-officedocument.{}"/>"#,
            part, content_type
        ));
        xml.push('\n');
    }
    xml.push_str("</Types>");
    xml
}
