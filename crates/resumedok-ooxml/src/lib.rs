//! # resumedok-ooxml
//!
//! WordprocessingML (DOCX) support for resumedok.
//!
//! This crate provides:
//! - An in-memory [`Document`] of styled paragraphs with a document-wide
//!   [`BaseStyle`]
//! - [`DocxWriter`] to serialize a document as a DOCX package
//! - Reading a DOCX package back into a [`Document`]
//!
//! ## Example: Write and read back
//!
//! ```no_run
//! use resumedok_ooxml::{Alignment, Document, Paragraph, Run};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(
//!     Paragraph::new()
//!         .with_alignment(Alignment::Center)
//!         .with_run(Run::new("Jane Doe").bold().with_font_size(16.0)),
//! );
//! doc.save("out.docx")?;
//!
//! let loaded = Document::open("out.docx")?;
//! assert_eq!(loaded.plain_text(), "Jane Doe");
//! # Ok::<(), resumedok_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod numbering;
pub mod relationships;
pub mod styles;
pub mod units;
pub mod writer;

mod xml;

#[cfg(test)]
mod test_utils;

pub use archive::OoxmlArchive;
pub use document::{Alignment, Document, Paragraph, Run, RunStyle};
pub use error::{OoxmlError, Result};
pub use numbering::ListMarker;
pub use relationships::Relationships;
pub use styles::{BaseStyle, Style, StyleSheet, StyleType, LIST_BULLET_STYLE_ID, NORMAL_STYLE_ID};
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
