//! Shared test utilities for resumedok-ooxml
//!
//! This module provides common fixtures and helpers used across tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

use crate::archive::OoxmlArchive;

/// Build a DOCX package from `(path, contents)` pairs, stored uncompressed
pub fn build_package(parts: &[(&str, &str)]) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    let mut zip = ZipWriter::new(&mut buffer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (path, contents) in parts {
        zip.start_file(*path, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }

    zip.finish().unwrap();
    buffer.into_inner()
}

/// Extract document.xml content from a DOCX byte array
pub fn extract_document_xml(docx: &[u8]) -> String {
    extract_file(docx, "word/document.xml").unwrap()
}

/// Extract any file content from a DOCX byte array
pub fn extract_file(docx: &[u8], path: &str) -> Option<String> {
    let archive = OoxmlArchive::from_reader(Cursor::new(docx)).unwrap();
    archive.get_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::styles::BaseStyle;

    const BODY: &str = r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>Hi</w:t></w:r></w:p></w:body></w:document>"#;

    #[test]
    fn test_build_package() {
        let docx = build_package(&[("word/document.xml", BODY)]);
        assert!(extract_document_xml(&docx).contains("Hi"));
        assert!(extract_file(&docx, "missing.xml").is_none());
    }

    #[test]
    fn test_styles_found_through_relationships() {
        let docx = build_package(&[
            ("word/document.xml", BODY),
            (
                "word/_rels/document.xml.rels",
                r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
                    <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="custom/styles2.xml"/>
                </Relationships>"#,
            ),
            (
                "word/custom/styles2.xml",
                r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
                    <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
                        <w:rPr><w:rFonts w:ascii="Garamond"/><w:sz w:val="24"/></w:rPr>
                    </w:style>
                </w:styles>"#,
            ),
        ]);

        let doc = Document::from_bytes(&docx).unwrap();
        assert_eq!(doc.base_style(), &BaseStyle::new("Garamond", 12.0));
        assert_eq!(doc.plain_text(), "Hi");
    }

    #[test]
    fn test_package_without_styles_keeps_stock_base() {
        let docx = build_package(&[("word/document.xml", BODY)]);
        let doc = Document::from_bytes(&docx).unwrap();
        assert_eq!(doc.base_style(), &BaseStyle::default());
    }
}
