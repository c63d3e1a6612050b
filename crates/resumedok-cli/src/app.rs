//! CLI Application logic
//!
//! Contains the command-line interface implementation.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use resumedok_core::{DefaultStyle, ResumeFormatter, Settings};
use resumedok_ooxml::{Alignment, Document};

/// Where `resumedok sample` writes when neither a flag nor a config names a path
pub const SAMPLE_OUTPUT: &str = "simple_resume.docx";

/// Output format for `inspect`
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for tool consumption
    Json,
}

#[derive(Parser)]
#[command(name = "resumedok")]
#[command(author, version, about = "Resumes as styled DOCX documents", long_about = None)]
struct Cli {
    /// TOML settings file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default font family (overrides the settings file)
    #[arg(long, global = true)]
    font: Option<String>,

    /// Default font size in points (overrides the settings file)
    #[arg(long, global = true)]
    font_size: Option<f32>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the sample resume
    Sample {
        /// Output DOCX file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the base style and paragraphs of a DOCX file
    Inspect {
        /// Input DOCX file
        input: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Run the CLI application
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file_settings = match &cli.config {
        Some(path) => Some(
            Settings::load(path)
                .with_context(|| format!("Failed to load settings: {}", path.display()))?,
        ),
        None => None,
    };
    let style = resolve_style(file_settings.as_ref(), cli.font, cli.font_size);

    match cli.command {
        Commands::Sample { output } => {
            let output = output
                .or_else(|| file_settings.map(|s| s.output.path))
                .unwrap_or_else(|| PathBuf::from(SAMPLE_OUTPUT));
            sample_command(&output, style)
        }
        Commands::Inspect { input, format } => inspect_command(&input, format),
    }
}

/// Install the stderr subscriber
fn init_logging(verbose: bool) {
    let filter = log_filter(verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());
    // A subscriber may already be installed when embedded in another binary
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` directives when set and valid, otherwise `info` (`debug` with `-v`)
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(level.into()))
}

/// Merge defaults: flags win over the settings file, which wins over built-ins
pub fn resolve_style(
    settings: Option<&Settings>,
    font: Option<String>,
    font_size: Option<f32>,
) -> DefaultStyle {
    let base = settings.map(|s| s.style.clone()).unwrap_or_default();
    DefaultStyle {
        font_family: font.unwrap_or(base.font_family),
        font_size: font_size.unwrap_or(base.font_size),
    }
}

/// Build the sample resume
pub fn build_sample(style: DefaultStyle) -> ResumeFormatter {
    let mut resume = ResumeFormatter::with_style(style);

    resume.add_header("Your Name", "your.email@example.com", "123-456-7890");

    resume.add_section_heading("Summary");
    resume.add_bullet_points(["Enthusiastic and skilled professional."]);

    resume.add_section_heading("Experience");
    resume.add_experience(
        "Company A",
        "Software Engineer",
        "2020-2023",
        [
            "Developed web applications.",
            "Worked with Python and Django.",
            "Contributed to team projects.",
        ],
    );

    resume.add_section_heading("Education");
    resume.add_education("University X", "Bachelor of Science", "2016-2020");

    resume.add_section_heading("Skills");
    resume.add_bullet_points(["Python", "Django", "JavaScript", "HTML", "CSS"]);

    resume
}

/// Write the sample resume to `output`
pub fn sample_command(output: &Path, style: DefaultStyle) -> Result<()> {
    tracing::info!(
        "Building sample resume with {} {}pt",
        style.font_family,
        style.font_size
    );

    let resume = build_sample(style);
    resume
        .save(output)
        .with_context(|| format!("Failed to write resume: {}", output.display()))?;

    println!("Resume generated successfully: {}", output.display());
    Ok(())
}

/// Print a summary of a DOCX file
pub fn inspect_command(input: &Path, format: OutputFormat) -> Result<()> {
    let document = Document::open(input)
        .with_context(|| format!("Failed to open DOCX: {}", input.display()))?;
    print!("{}", render_inspection(&document, format)?);
    Ok(())
}

/// Render the base style and every paragraph of `document`
pub fn render_inspection(document: &Document, format: OutputFormat) -> Result<String> {
    let base = document.base_style();

    match format {
        OutputFormat::Text => {
            let mut out = format!(
                "Base style: {} {}pt\nParagraphs: {}\n",
                base.font_family,
                base.font_size,
                document.len()
            );
            for (index, para) in document.paragraphs().iter().enumerate() {
                let mut line = format!(
                    "[{}] {} {}pt",
                    index,
                    alignment_name(para.alignment),
                    para.font_size(base)
                );
                if para.is_bold() {
                    line.push_str(" bold");
                }
                if let Some(indent) = para.indent_left {
                    line.push_str(&format!(" indent {}in", indent));
                }
                if let Some(marker) = para.list {
                    line.push_str(&format!(" bullet({})", marker.level()));
                }
                line.push_str(&format!(" {:?}\n", para.plain_text()));
                out.push_str(&line);
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let paragraphs: Vec<_> = document
                .paragraphs()
                .iter()
                .enumerate()
                .map(|(index, para)| {
                    json!({
                        "index": index,
                        "style_id": para.style_id,
                        "alignment": alignment_name(para.alignment),
                        "bold": para.is_bold(),
                        "font_size": para.font_size(base),
                        "spacing_before": para.spacing_before,
                        "indent_left": para.indent_left,
                        "list_level": para.list.map(|m| m.level()),
                        "text": para.plain_text(),
                    })
                })
                .collect();

            let report = json!({
                "base_style": {
                    "font_family": base.font_family,
                    "font_size": base.font_size,
                },
                "paragraphs": paragraphs,
            });
            let mut out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn alignment_name(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "justify",
    }
}
