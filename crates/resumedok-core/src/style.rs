//! Explicit style values for resume blocks
//!
//! [`DefaultStyle`] is the document-wide font every block falls back to.
//! [`BlockFormat`] is the complete formatting of one block; each formatter
//! operation builds one and turns it into a paragraph.

use serde::{Deserialize, Serialize};

use resumedok_ooxml::{Alignment, BaseStyle, Paragraph, Run};

/// Size of the candidate's name in the header, in points
pub const NAME_FONT_SIZE: f32 = 16.0;

/// Size of section headings, in points
pub const HEADING_FONT_SIZE: f32 = 14.0;

/// Space above section headings, in points
pub const HEADING_SPACING_BEFORE: f32 = 12.0;

/// Left indent of bullet items, in inches
pub const BULLET_INDENT_INCHES: f32 = 0.25;

/// Document-wide default font
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultStyle {
    /// Font family name
    pub font_family: String,
    /// Font size in points
    pub font_size: f32,
}

impl Default for DefaultStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 11.0,
        }
    }
}

impl DefaultStyle {
    pub fn new(font_family: impl Into<String>, font_size: f32) -> Self {
        Self {
            font_family: font_family.into(),
            font_size,
        }
    }

    /// The document-layer base style carrying these defaults
    pub fn to_base_style(&self) -> BaseStyle {
        BaseStyle::new(self.font_family.clone(), self.font_size)
    }
}

/// Formatting of a single block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockFormat {
    pub font_family: String,
    pub font_size: f32,
    pub bold: bool,
    pub alignment: Alignment,
    /// Left indent in inches
    pub indent_inches: Option<f32>,
    /// Space before in points
    pub spacing_before: Option<f32>,
}

impl BlockFormat {
    /// Plain left-aligned text in the default font
    pub fn body(defaults: &DefaultStyle) -> Self {
        Self {
            font_family: defaults.font_family.clone(),
            font_size: defaults.font_size,
            bold: false,
            alignment: Alignment::Left,
            indent_inches: None,
            spacing_before: None,
        }
    }

    /// Bold centered name line of the header
    pub fn name(defaults: &DefaultStyle) -> Self {
        Self {
            font_size: NAME_FONT_SIZE,
            bold: true,
            alignment: Alignment::Center,
            ..Self::body(defaults)
        }
    }

    /// Centered contact line of the header
    pub fn contact(defaults: &DefaultStyle) -> Self {
        Self {
            alignment: Alignment::Center,
            ..Self::body(defaults)
        }
    }

    /// Section heading
    pub fn heading(defaults: &DefaultStyle) -> Self {
        Self {
            font_size: HEADING_FONT_SIZE,
            bold: true,
            spacing_before: Some(HEADING_SPACING_BEFORE),
            ..Self::body(defaults)
        }
    }

    /// Bold title line of an experience or education entry
    pub fn entry_title(defaults: &DefaultStyle) -> Self {
        Self {
            bold: true,
            ..Self::body(defaults)
        }
    }

    /// Bullet item text
    pub fn bullet(defaults: &DefaultStyle) -> Self {
        Self {
            indent_inches: Some(BULLET_INDENT_INCHES),
            ..Self::body(defaults)
        }
    }

    /// Build a single-run paragraph with this formatting
    pub fn paragraph(&self, text: impl Into<String>) -> Paragraph {
        let mut run = Run::new(text)
            .with_font_family(self.font_family.clone())
            .with_font_size(self.font_size);
        if self.bold {
            run = run.bold();
        }

        let mut paragraph = Paragraph::new().with_alignment(self.alignment).with_run(run);
        if let Some(inches) = self.indent_inches {
            paragraph = paragraph.with_indent_left(inches);
        }
        if let Some(points) = self.spacing_before {
            paragraph = paragraph.with_spacing_before(points);
        }
        paragraph
    }
}
