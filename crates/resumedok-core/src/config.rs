//! Configuration Settings
//!
//! TOML settings for the default font and the output path.
//!
//! ```toml
//! [style]
//! font_family = "Arial"
//! font_size = 11.0
//!
//! [output]
//! path = "resume.docx"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::formatter::DEFAULT_OUTPUT;
use crate::style::DefaultStyle;

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Default font for every block
    pub style: DefaultStyle,
    /// Output settings
    pub output: OutputSettings,
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read settings from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&contents)?;
        log::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

/// Where the resume is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: PathBuf,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.style, DefaultStyle::default());
        assert_eq!(settings.output.path, PathBuf::from("resume.docx"));
    }

    #[test]
    fn test_empty_toml() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_style_section() {
        let settings = Settings::from_toml_str(
            r#"
[style]
font_family = "Georgia"
"#,
        )
        .unwrap();

        assert_eq!(settings.style.font_family, "Georgia");
        assert_eq!(settings.style.font_size, 11.0);
        assert_eq!(settings.output, OutputSettings::default());
    }

    #[test]
    fn test_full_settings() {
        let settings = Settings::from_toml_str(
            r#"
[style]
font_family = "Helvetica"
font_size = 10.5

[output]
path = "out/cv.docx"
"#,
        )
        .unwrap();

        assert_eq!(settings.style, DefaultStyle::new("Helvetica", 10.5));
        assert_eq!(settings.output.path, PathBuf::from("out/cv.docx"));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let result = Settings::from_toml_str(
            r#"
[style]
font_size = "large"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("resumedok.toml");
        fs::write(&path, "[style]\nfont_size = 12.0\n").unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.style.font_size, 12.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Settings::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[style\n").unwrap();

        assert!(matches!(Settings::load(&path), Err(Error::Config(_))));
    }
}
