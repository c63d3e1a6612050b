//! Resume formatter
//!
//! [`ResumeFormatter`] owns a [`Document`] and appends pre-styled resume
//! blocks to it in call order. Nothing is ever reordered or removed.
//!
//! | operation             | paragraphs appended                 |
//! |-----------------------|-------------------------------------|
//! | `add_header`          | 2 (name, contact line)              |
//! | `add_section_heading` | 1                                   |
//! | `add_bullet_points`   | one per item                        |
//! | `add_experience`      | 1 + one per description item        |
//! | `add_education`       | 1                                   |

use std::path::Path;

use resumedok_ooxml::{Document, ListMarker, LIST_BULLET_STYLE_ID};

use crate::error::Result;
use crate::style::{BlockFormat, DefaultStyle};

/// File name used by [`ResumeFormatter::save_default`]
pub const DEFAULT_OUTPUT: &str = "resume.docx";

/// Builds a resume by appending styled blocks to a document
#[derive(Debug, Clone, Default)]
pub struct ResumeFormatter {
    document: Document,
    default_style: DefaultStyle,
}

impl ResumeFormatter {
    /// Formatter with Arial 11pt defaults over an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter with explicit defaults over an empty document
    ///
    /// The defaults only reach the document's base style once
    /// [`apply_default_style`](Self::apply_default_style) or
    /// [`add_header`](Self::add_header) runs.
    pub fn with_style(default_style: DefaultStyle) -> Self {
        Self {
            document: Document::new(),
            default_style,
        }
    }

    pub fn default_style(&self) -> &DefaultStyle {
        &self.default_style
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Mutable access to the underlying document
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Set the document's base style to the configured defaults
    pub fn apply_default_style(&mut self) {
        self.document.set_base_style(self.default_style.to_base_style());
    }

    /// Append the name line and the `email | phone` contact line
    ///
    /// Resets the base style to the configured defaults first.
    pub fn add_header(&mut self, name: &str, email: &str, phone: &str) {
        self.apply_default_style();

        let name_line = BlockFormat::name(&self.default_style).paragraph(name);
        self.document.add_paragraph(name_line);

        let contact_line =
            BlockFormat::contact(&self.default_style).paragraph(format!("{} | {}", email, phone));
        self.document.add_paragraph(contact_line);
    }

    pub fn add_section_heading(&mut self, title: &str) {
        let heading = BlockFormat::heading(&self.default_style).paragraph(title);
        self.document.add_paragraph(heading);
    }

    /// Append one bulleted paragraph per item, in order
    pub fn add_bullet_points<I>(&mut self, items: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let format = BlockFormat::bullet(&self.default_style);
        let mut count = 0usize;
        for item in items {
            let paragraph = format
                .paragraph(item.as_ref())
                .with_style_id(LIST_BULLET_STYLE_ID)
                .with_list(ListMarker::bullet());
            self.document.add_paragraph(paragraph);
            count += 1;
        }
        log::debug!("Added {} bullet points", count);
    }

    /// Append `title, company (dates)` followed by the description bullets
    pub fn add_experience<I>(&mut self, company: &str, title: &str, dates: &str, description: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let line = BlockFormat::entry_title(&self.default_style)
            .paragraph(format!("{}, {} ({})", title, company, dates));
        self.document.add_paragraph(line);
        self.add_bullet_points(description);
    }

    /// Append `degree, institution (dates)`
    pub fn add_education(&mut self, institution: &str, degree: &str, dates: &str) {
        let line = BlockFormat::entry_title(&self.default_style)
            .paragraph(format!("{}, {} ({})", degree, institution, dates));
        self.document.add_paragraph(line);
    }

    /// Write the document as DOCX at `path`
    ///
    /// The in-memory document is left untouched whether or not the write
    /// succeeds.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        log::debug!("Saving resume to {}", path.display());
        self.document.save(path)?;
        Ok(())
    }

    /// Write the document to [`DEFAULT_OUTPUT`] in the working directory
    pub fn save_default(&self) -> Result<()> {
        self.save(DEFAULT_OUTPUT)
    }
}
