//! resumedok CLI - Command-line interface library
//!
//! This library provides the CLI functionality for resumedok:
//! - Sample: Write the sample resume
//! - Inspect: Print the base style and paragraphs of a DOCX file
//!
//! # Library Usage
//!
//! ```ignore
//! use resumedok_cli::{inspect_command, sample_command, OutputFormat};
//! use resumedok_core::DefaultStyle;
//!
//! sample_command(Path::new("cv.docx"), DefaultStyle::default())?;
//! inspect_command(Path::new("cv.docx"), OutputFormat::Json)?;
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Write the sample resume in Georgia 10pt
//! resumedok sample --output cv.docx --font Georgia --font-size 10
//!
//! # Inspect a DOCX file
//! resumedok inspect cv.docx --format json
//!
//! # Use a settings file
//! resumedok --config resumedok.toml sample
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{build_sample, inspect_command, render_inspection, resolve_style, sample_command};
pub use app::{run_cli, OutputFormat, SAMPLE_OUTPUT};
