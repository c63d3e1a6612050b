//! resumedok-core - Resumes as styled DOCX documents
//!
//! Appends pre-styled resume blocks (header, section headings, bullets,
//! experience and education entries) to a document and saves it as DOCX.
//!
//! # Example
//!
//! ```no_run
//! use resumedok_core::ResumeFormatter;
//!
//! let mut resume = ResumeFormatter::new();
//! resume.add_header("Jane Doe", "jane@example.com", "555-1212");
//! resume.add_section_heading("Skills");
//! resume.add_bullet_points(["Rust", "Go"]);
//! resume.save("resume.docx")?;
//! # Ok::<(), resumedok_core::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod formatter;
pub mod style;

// Re-export main types
pub use config::{OutputSettings, Settings};
pub use error::{Error, Result};
pub use formatter::{ResumeFormatter, DEFAULT_OUTPUT};
pub use style::{BlockFormat, DefaultStyle};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }
}
