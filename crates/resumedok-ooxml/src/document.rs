//! Document model and parsing (word/document.xml)
//!
//! [`Document`] is an ordered, append-only list of paragraphs plus the
//! document-wide [`BaseStyle`]. It can be built in memory, serialized with
//! [`DocxWriter`](crate::writer::DocxWriter) and read back from a package.

use std::io::Cursor;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::{OoxmlArchive, DOCUMENT_PART, STYLES_PART};
use crate::error::{OoxmlError, Result};
use crate::numbering::ListMarker;
use crate::relationships::{resolve_target, Relationships};
use crate::styles::{BaseStyle, StyleSheet};
use crate::units::{half_points_to_points, twips_to_inches, twips_to_points};
use crate::xml::{get_attr, is_on};

/// A word-processing document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    /// Document-wide default run formatting
    base_style: BaseStyle,
    /// Body paragraphs in insertion order
    paragraphs: Vec<Paragraph>,
}

/// Horizontal paragraph alignment (`w:jc`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Left aligned (Word's default, not written out)
    #[default]
    Left,
    /// Centered
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}

impl Alignment {
    /// The `w:jc` value for this alignment
    pub fn as_jc(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }

    /// Parse a `w:jc` value
    ///
    /// Bidi-aware `start`/`end` map to left/right; unknown values are left.
    pub fn from_jc(value: &str) -> Self {
        match value {
            "center" => Alignment::Center,
            "right" | "end" => Alignment::Right,
            "both" | "distribute" => Alignment::Justify,
            _ => Alignment::Left,
        }
    }
}

/// A paragraph with its content and formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// Horizontal alignment
    pub alignment: Alignment,
    /// Space before the paragraph, in points
    pub spacing_before: Option<f32>,
    /// Left indent, in inches
    pub indent_left: Option<f32>,
    /// List marker (bullet) for list paragraphs
    pub list: Option<ListMarker>,
    /// Text runs
    pub runs: Vec<Run>,
}

/// A text run with formatting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    /// The text content
    pub text: String,
    /// Run-level formatting overrides
    pub style: RunStyle,
}

/// Run-level formatting; unset fields inherit from the base style
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunStyle {
    /// Font family override
    pub font_family: Option<String>,
    /// Font size override, in points
    pub font_size: Option<f32>,
    /// Whether the text is bold
    pub bold: bool,
}

impl Document {
    /// Create an empty document with Word's stock base style
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let archive = OoxmlArchive::open(path)?;
        Self::from_archive(&archive)
    }

    /// Read a DOCX package held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes))?;
        Self::from_archive(&archive)
    }

    /// Read the body and base style from an unpacked package
    ///
    /// The styles part is located through the document relationships,
    /// falling back to `word/styles.xml`. A package without styles keeps
    /// the stock base style.
    pub fn from_archive(archive: &OoxmlArchive) -> Result<Self> {
        let mut document = Self::parse(archive.document_xml()?)?;

        let styles_part = match archive.document_rels_xml() {
            Some(xml) => Relationships::parse(xml)?
                .find_by_type(Relationships::TYPE_STYLES)
                .map(|target| resolve_target(DOCUMENT_PART, target)),
            None => None,
        }
        .unwrap_or_else(|| STYLES_PART.to_string());

        if let Some(xml) = archive.get(&styles_part) {
            if let Some(base) = StyleSheet::parse(xml)?.base_style() {
                document.base_style = base;
            }
        } else {
            log::debug!("No styles part at {}, keeping stock base style", styles_part);
        }

        log::info!("Loaded document with {} paragraphs", document.len());
        Ok(document)
    }

    /// Parse body paragraphs from word/document.xml
    ///
    /// Only top-level body paragraphs are read. Tables and text boxes are
    /// skipped, and field instructions are not treated as text.
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Don't trim text - preserve whitespace in runs
        reader.config_mut().trim_text(false);

        let mut paragraphs = Vec::new();
        let mut buf = Vec::new();

        let mut in_body = false;
        // Depth inside content that is not a body paragraph (tables, text boxes)
        let mut skip_depth = 0u32;
        let mut in_paragraph_props = false;
        let mut current_para: Option<Paragraph> = None;
        let mut current_run: Option<Run> = None;
        let mut in_text_element = false;
        // Formatted runs are kept even without text
        let mut run_has_props = false;
        let mut num_id: Option<u32> = None;
        let mut ilvl: u32 = 0;

        loop {
            {
                let event = reader.read_event_into(&mut buf).map_err(OoxmlError::Xml)?;
                match event {
                    Event::Start(ref e) | Event::Empty(ref e) => {
                        let is_empty = matches!(event, Event::Empty(_));
                        let name = e.local_name();
                        match name.as_ref() {
                            b"body" => in_body = !is_empty,
                            b"tbl" | b"txbxContent" if !is_empty => skip_depth += 1,
                            _ if skip_depth > 0 || !in_body => {}
                            b"p" if current_para.is_none() => {
                                let para = Paragraph::new();
                                if is_empty {
                                    paragraphs.push(para);
                                } else {
                                    current_para = Some(para);
                                    num_id = None;
                                    ilvl = 0;
                                }
                            }
                            b"pPr" if current_run.is_none() && !is_empty => in_paragraph_props = true,
                            b"r" if current_para.is_some() && !is_empty => {
                                current_run = Some(Run::default());
                                run_has_props = false;
                            }
                            b"t" if current_run.is_some() => in_text_element = !is_empty,
                            b"tab" if current_run.is_some() => push_text(&mut current_run, "\t"),
                            b"br" | b"cr" if current_run.is_some() => {
                                push_text(&mut current_run, "\n")
                            }
                            b"rPr" if current_run.is_some() => run_has_props = true,
                            _ if current_run.is_some() => apply_run_property(&mut current_run, e),
                            _ if in_paragraph_props => {
                                if let Some(para) = current_para.as_mut() {
                                    apply_paragraph_property(para, e, &mut num_id, &mut ilvl);
                                }
                            }
                            _ => {}
                        }
                    }
                    Event::End(ref e) => match e.local_name().as_ref() {
                        b"body" => in_body = false,
                        b"tbl" | b"txbxContent" => skip_depth = skip_depth.saturating_sub(1),
                        _ if skip_depth > 0 => {}
                        b"pPr" => in_paragraph_props = false,
                        b"t" => in_text_element = false,
                        b"r" => {
                            if let (Some(run), Some(para)) = (current_run.take(), current_para.as_mut())
                            {
                                if !run.text.is_empty() || run_has_props {
                                    para.runs.push(run);
                                }
                            }
                        }
                        b"p" => {
                            if let Some(mut para) = current_para.take() {
                                para.list = num_id.and_then(|id| ListMarker::from_num_pr(id, ilvl));
                                paragraphs.push(para);
                            }
                        }
                        _ => {}
                    },
                    Event::Text(ref e) if in_text_element && skip_depth == 0 => {
                        if let Some(run) = current_run.as_mut() {
                            let text = e.unescape().map_err(OoxmlError::Xml)?;
                            run.text.push_str(&text);
                        }
                    }
                    Event::Eof => break,
                    _ => {}
                }
            }
            buf.clear();
        }

        Ok(Document {
            base_style: BaseStyle::default(),
            paragraphs,
        })
    }

    /// The document-wide base style
    pub fn base_style(&self) -> &BaseStyle {
        &self.base_style
    }

    /// Replace the document-wide base style
    pub fn set_base_style(&mut self, style: BaseStyle) {
        self.base_style = style;
    }

    /// Append a paragraph and return it for further adjustment
    pub fn add_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        log::debug!(
            "Appending paragraph #{}: {:?}",
            self.paragraphs.len(),
            paragraph.plain_text()
        );
        self.paragraphs.push(paragraph);
        let last = self.paragraphs.len() - 1;
        &mut self.paragraphs[last]
    }

    /// All paragraphs in order
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Plain text, one line per paragraph
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.plain_text())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Paragraph {
    /// Create an empty left-aligned paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the paragraph style
    pub fn with_style_id(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Set the alignment
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the space before, in points
    pub fn with_spacing_before(mut self, points: f32) -> Self {
        self.spacing_before = Some(points);
        self
    }

    /// Set the left indent, in inches
    pub fn with_indent_left(mut self, inches: f32) -> Self {
        self.indent_left = Some(inches);
        self
    }

    /// Mark the paragraph as a list item
    pub fn with_list(mut self, marker: ListMarker) -> Self {
        self.list = Some(marker);
        self
    }

    /// Append a run
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run in place
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Get plain text of this paragraph
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether every run carrying text is bold
    ///
    /// Without any text, every run must be bold; a paragraph with no runs
    /// is not bold.
    pub fn is_bold(&self) -> bool {
        let has_text = self.runs.iter().any(|r| !r.text.is_empty());
        let mut runs = self
            .runs
            .iter()
            .filter(|r| !has_text || !r.text.is_empty())
            .peekable();
        runs.peek().is_some() && runs.all(|r| r.style.bold)
    }

    /// Font size of the first run, resolved against a base style
    pub fn font_size(&self, base: &BaseStyle) -> f32 {
        self.runs
            .first()
            .and_then(|r| r.style.font_size)
            .unwrap_or(base.font_size)
    }
}

impl Run {
    /// Create an unformatted run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Make the run bold
    pub fn bold(mut self) -> Self {
        self.style.bold = true;
        self
    }

    /// Set the font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.style.font_family = Some(family.into());
        self
    }

    /// Set the font size, in points
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.style.font_size = Some(points);
        self
    }
}

fn push_text(run: &mut Option<Run>, text: &str) {
    if let Some(run) = run.as_mut() {
        run.text.push_str(text);
    }
}

fn apply_run_property(run: &mut Option<Run>, e: &BytesStart) {
    let Some(run) = run.as_mut() else {
        return;
    };
    match e.local_name().as_ref() {
        b"b" => run.style.bold = is_on(e),
        b"rFonts" => {
            if let Some(font) = get_attr(e, b"ascii").or_else(|| get_attr(e, b"hAnsi")) {
                run.style.font_family = Some(font);
            }
        }
        b"sz" => {
            if let Some(size) = get_attr(e, b"val").and_then(|v| v.parse::<u32>().ok()) {
                run.style.font_size = Some(half_points_to_points(size));
            }
        }
        _ => {}
    }
}

fn apply_paragraph_property(
    para: &mut Paragraph,
    e: &BytesStart,
    num_id: &mut Option<u32>,
    ilvl: &mut u32,
) {
    match e.local_name().as_ref() {
        b"pStyle" => para.style_id = get_attr(e, b"val"),
        b"jc" => {
            if let Some(val) = get_attr(e, b"val") {
                para.alignment = Alignment::from_jc(&val);
            }
        }
        b"spacing" => {
            if let Some(before) = get_attr(e, b"before").and_then(|v| v.parse::<u32>().ok()) {
                para.spacing_before = Some(twips_to_points(before));
            }
        }
        b"ind" => {
            let left = get_attr(e, b"left").or_else(|| get_attr(e, b"start"));
            if let Some(twips) = left.and_then(|v| v.parse::<i32>().ok()) {
                para.indent_left = Some(twips_to_inches(twips));
            }
        }
        b"numId" => *num_id = get_attr(e, b"val").and_then(|v| v.parse().ok()),
        b"ilvl" => *ilvl = get_attr(e, b"val").and_then(|v| v.parse().ok()).unwrap_or(0),
        _ => {}
    }
}
