//! Archive handling for DOCX files
//!
//! A DOCX file is a ZIP package of XML parts. [`OoxmlArchive`] holds the
//! whole package in memory so parts can be read or replaced before the
//! package is written out in one pass.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{Read, Seek, Write};
use std::path::Path;

use zip::read::ZipArchive;
use zip::write::ZipWriter;
use zip::CompressionMethod;

use crate::error::{OoxmlError, Result};

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";
/// Default path of the styles part
pub const STYLES_PART: &str = "word/styles.xml";
/// Default path of the numbering part
pub const NUMBERING_PART: &str = "word/numbering.xml";
/// Relationships of the main document part
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

/// An unpacked OOXML package
#[derive(Debug, Default)]
pub struct OoxmlArchive {
    /// All files in the archive, keyed by path (sorted for deterministic output)
    files: BTreeMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Create an empty package
    pub fn new() -> Self {
        Self::default()
    }

    /// Open and unpack a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Opening package {}", path.display());
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = BTreeMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        Ok(Self { files })
    }

    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get a file's contents as a string
    pub fn get_string(&self, path: &str) -> Option<String> {
        self.files
            .get(path)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get(DOCUMENT_PART)
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Get the document relationships (word/_rels/document.xml.rels)
    pub fn document_rels_xml(&self) -> Option<&[u8]> {
        self.get(DOCUMENT_RELS_PART)
    }

    /// Check if a file exists in the archive
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// List all files in the archive, in path order
    pub fn file_list(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(|s| s.as_str())
    }

    /// Number of files in the archive
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the archive has no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Set a file's contents from a string
    pub fn set_string(&mut self, path: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(path.into(), contents.into().into_bytes());
    }

    /// Remove a file from the archive
    pub fn remove(&mut self, path: &str) -> Option<Vec<u8>> {
        self.files.remove(path)
    }

    /// Write the archive to a file
    ///
    /// The package is assembled in memory first, so the destination is only
    /// created once every part has been compressed.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&bytes)?;
        Ok(())
    }

    /// Write the archive into a byte vector
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }

    /// Write the archive to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated);

        for (path, contents) in &self.files {
            zip.start_file(path.as_str(), options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_file_operations() {
        let mut archive = OoxmlArchive::new();

        archive.set_string("test.xml", "<root/>");
        assert!(archive.contains("test.xml"));
        assert_eq!(archive.get_string("test.xml"), Some("<root/>".to_string()));

        archive.remove("test.xml");
        assert!(!archive.contains("test.xml"));
        assert!(archive.is_empty());
    }

    #[test]
    fn test_missing_document_part() {
        let archive = OoxmlArchive::new();
        let err = archive.document_xml().unwrap_err();
        assert!(matches!(err, OoxmlError::MissingFile(ref p) if p == DOCUMENT_PART));
    }

    #[test]
    fn test_roundtrip_through_zip() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", "<Types/>");
        archive.set_string(DOCUMENT_PART, "<w:document/>");

        let mut buffer = Cursor::new(Vec::new());
        archive.write_to(&mut buffer).unwrap();

        buffer.set_position(0);
        let restored = OoxmlArchive::from_reader(buffer).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.document_xml().unwrap(), b"<w:document/>");
    }

    #[test]
    fn test_file_list_is_sorted() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("word/styles.xml", "");
        archive.set_string("[Content_Types].xml", "");
        archive.set_string("_rels/.rels", "");

        let names: Vec<_> = archive.file_list().collect();
        assert_eq!(names, vec!["[Content_Types].xml", "_rels/.rels", "word/styles.xml"]);
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let archive = OoxmlArchive::new();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.docx");
        assert!(matches!(
            archive.write_to_file(&target),
            Err(OoxmlError::Io(_))
        ));
    }
}
