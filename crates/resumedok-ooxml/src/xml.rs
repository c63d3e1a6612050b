//! Small XML helpers shared by the part readers and writers

use quick_xml::events::BytesStart;

/// WordprocessingML main namespace
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// XML declaration written at the top of every part
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Get an attribute value by local name, ignoring the namespace prefix
///
/// `w:val`, `val` and `x:val` all match `b"val"`.
pub fn get_attr(e: &BytesStart, local_name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == local_name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

/// Interpret an OOXML on/off property (`<w:b/>`, `<w:b w:val="0"/>`)
///
/// A missing `w:val` means "on".
pub fn is_on(e: &BytesStart) -> bool {
    match get_attr(e, b"val") {
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off"),
        None => true,
    }
}

/// First character XML 1.0 does not allow in a document, if any
///
/// Tab, line feed and carriage return are the only allowed controls;
/// U+FFFE and U+FFFF are excluded as well.
pub fn find_invalid_xml_char(text: &str) -> Option<char> {
    text.chars().find(|&c| {
        !matches!(c,
            '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}')
    })
}

/// Escape special XML characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
