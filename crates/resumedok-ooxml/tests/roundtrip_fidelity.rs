//! Round-Trip Fidelity Tests
//!
//! Documents written by `DocxWriter` must read back with the same text and
//! formatting: run bold/size/font, alignment, spacing, indent, list markers
//! and the document-wide base style.

// =============================================================================
// PART 1: FORMATTING SURVIVES SAVE AND OPEN
// =============================================================================

mod formatting {
    //! Save to disk, reopen, compare paragraph by paragraph

    use resumedok_ooxml::{Alignment, BaseStyle, Document, ListMarker, Paragraph, Run};
    use tempfile::TempDir;

    fn saved_and_reopened(doc: &Document) -> Document {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.docx");
        doc.save(&path).unwrap();
        Document::open(&path).unwrap()
    }

    #[test]
    fn test_header_block_roundtrip() {
        let mut doc = Document::new();
        doc.set_base_style(BaseStyle::new("Arial", 11.0));
        doc.add_paragraph(
            Paragraph::new()
                .with_alignment(Alignment::Center)
                .with_run(Run::new("Jane Doe").bold().with_font_size(16.0)),
        );
        doc.add_paragraph(
            Paragraph::new()
                .with_alignment(Alignment::Center)
                .with_run(Run::new("jane@x.io | 555-0100")),
        );

        let loaded = saved_and_reopened(&doc);

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.base_style(), &BaseStyle::new("Arial", 11.0));

        let name = &loaded.paragraphs()[0];
        assert_eq!(name.plain_text(), "Jane Doe");
        assert!(name.is_bold());
        assert_eq!(name.alignment, Alignment::Center);
        assert_eq!(name.font_size(loaded.base_style()), 16.0);

        let contact = &loaded.paragraphs()[1];
        assert_eq!(contact.plain_text(), "jane@x.io | 555-0100");
        assert!(!contact.is_bold());
        assert_eq!(contact.font_size(loaded.base_style()), 11.0);
    }

    #[test]
    fn test_spacing_and_font_roundtrip() {
        let mut doc = Document::new();
        doc.add_paragraph(
            Paragraph::new().with_spacing_before(12.0).with_run(
                Run::new("Experience")
                    .bold()
                    .with_font_family("Georgia")
                    .with_font_size(14.0),
            ),
        );

        let loaded = saved_and_reopened(&doc);
        let heading = &loaded.paragraphs()[0];

        assert_eq!(heading.spacing_before, Some(12.0));
        assert_eq!(heading.alignment, Alignment::Left);
        assert_eq!(heading.runs[0].style.font_family.as_deref(), Some("Georgia"));
        assert_eq!(heading.runs[0].style.font_size, Some(14.0));
        assert!(heading.is_bold());
    }

    #[test]
    fn test_bullet_roundtrip() {
        let mut doc = Document::new();
        for item in ["Rust", "Go"] {
            doc.add_paragraph(
                Paragraph::new()
                    .with_style_id("ListBullet")
                    .with_list(ListMarker::bullet())
                    .with_indent_left(0.25)
                    .with_run(Run::new(item)),
            );
        }

        let loaded = saved_and_reopened(&doc);

        assert_eq!(loaded.plain_text(), "Rust\nGo");
        for para in loaded.paragraphs() {
            assert_eq!(para.style_id.as_deref(), Some("ListBullet"));
            assert_eq!(para.list, Some(ListMarker::bullet()));
            assert_eq!(para.indent_left, Some(0.25));
        }
    }

    #[test]
    fn test_special_characters_roundtrip() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new().with_run(Run::new("R&D <Lead> \"Ops\"")));
        doc.add_paragraph(Paragraph::new().with_run(Run::new("Zoë · Ünïcode")));

        let loaded = saved_and_reopened(&doc);
        assert_eq!(loaded.plain_text(), "R&D <Lead> \"Ops\"\nZoë · Ünïcode");
    }

    #[test]
    fn test_empty_document_roundtrip() {
        let loaded = saved_and_reopened(&Document::new());
        assert!(loaded.is_empty());
        assert_eq!(loaded.base_style(), &BaseStyle::default());
    }
}

// =============================================================================
// PART 2: PACKAGE STRUCTURE
// =============================================================================

mod package {
    //! The written package carries every part Word needs to open it

    use std::io::Cursor;

    use resumedok_ooxml::archive::OoxmlArchive;
    use resumedok_ooxml::{Document, DocxWriter, OoxmlError, Paragraph, Run};

    #[test]
    fn test_required_parts_present() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new().with_run(Run::new("x")));

        let bytes = DocxWriter::generate(&doc).unwrap();
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();

        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "word/numbering.xml",
        ] {
            assert!(archive.contains(part), "missing part {}", part);
        }
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/out.docx");

        let result = Document::new().save(&path);
        assert!(matches!(result, Err(OoxmlError::Io(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_run_size_rejected_before_writing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bad.docx");

        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::new().with_run(Run::new("x").with_font_size(-3.0)));

        let result = doc.save(&path);
        assert!(matches!(result, Err(OoxmlError::InvalidStyle(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_open_rejects_non_zip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("plain.docx");
        std::fs::write(&path, b"not a zip archive").unwrap();

        assert!(matches!(Document::open(&path), Err(OoxmlError::Archive(_))));
    }

    #[test]
    fn test_open_rejects_package_without_document() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("word/styles.xml", "<w:styles/>");
        let bytes = archive.to_bytes().unwrap();

        assert!(matches!(
            Document::from_bytes(&bytes),
            Err(OoxmlError::MissingFile(_))
        ));
    }
}

// =============================================================================
// PART 3: READING DOCUMENTS FROM OTHER PRODUCERS
// =============================================================================

mod foreign_documents {
    //! Documents authored elsewhere use markup this crate never writes

    use resumedok_ooxml::{Alignment, Document};

    #[test]
    fn test_tables_are_skipped_and_breaks_kept() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8"?>
        <w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:body>
                <w:p>
                    <w:pPr><w:jc w:val="both"/></w:pPr>
                    <w:r><w:t>Line</w:t></w:r>
                    <w:r><w:br/><w:t>two</w:t></w:r>
                </w:p>
                <w:tbl><w:tr><w:tc><w:p><w:r><w:t>cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
                <w:p><w:r><w:b w:val="0"/><w:t>after</w:t></w:r></w:p>
            </w:body>
        </w:document>"#;

        let doc = Document::parse(xml).unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.paragraphs()[0].plain_text(), "Line\ntwo");
        assert_eq!(doc.paragraphs()[0].alignment, Alignment::Justify);
        assert_eq!(doc.paragraphs()[1].plain_text(), "after");
        assert!(!doc.paragraphs()[1].is_bold());
    }
}
