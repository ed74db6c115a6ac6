//! In-memory DOCX assembly.
//!
//! A `.docx` file is a ZIP archive of Open XML parts; the document
//! body lives in `word/document.xml`. The writer emits the minimal
//! part set (content types, package relationships, document, document
//! relationships) so the buffer is a complete standalone file, and
//! pins the zip entry order and timestamps so identical inputs produce
//! identical bytes.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use studymate_models::{GenerationResult, SectionToggleSet};
use studymate_utils::StudyMateResult;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#;

/// Assemble the export document: a centered title naming the topic,
/// then for each enabled section in canonical order a heading, the
/// trimmed section text, and a page break. With no enabled sections
/// the document contains only the title.
pub fn build_document(
    topic: &str,
    result: &GenerationResult,
    toggles: &SectionToggleSet,
) -> StudyMateResult<Vec<u8>> {
    let document_xml = document_xml(topic, result, toggles);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamp keeps repeated exports byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(CONTENT_TYPES_XML.as_bytes())?;
    writer.start_file("_rels/.rels", options)?;
    writer.write_all(PACKAGE_RELS_XML.as_bytes())?;
    writer.start_file("word/document.xml", options)?;
    writer.write_all(document_xml.as_bytes())?;
    writer.start_file("word/_rels/document.xml.rels", options)?;
    writer.write_all(DOCUMENT_RELS_XML.as_bytes())?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn document_xml(topic: &str, result: &GenerationResult, toggles: &SectionToggleSet) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#,
    );

    push_title(&mut xml, &format!("Study Materials: {}", topic));

    for section in toggles.enabled_sections() {
        push_heading(&mut xml, section.export_heading());
        push_paragraph(&mut xml, result.section_text(section).trim());
        push_page_break(&mut xml);
    }

    xml.push_str(r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/></w:sectPr>"#);
    xml.push_str("</w:body></w:document>");
    xml
}

fn push_title(xml: &mut String, text: &str) {
    xml.push_str(r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:rPr><w:b/><w:sz w:val="48"/></w:rPr>"#);
    push_text_run(xml, text);
    xml.push_str("</w:r></w:p>");
}

fn push_heading(xml: &mut String, text: &str) {
    xml.push_str(r#"<w:p><w:r><w:rPr><w:b/><w:sz w:val="32"/></w:rPr>"#);
    push_text_run(xml, text);
    xml.push_str("</w:r></w:p>");
}

/// Body text as a single paragraph; newlines in the section text
/// become explicit line breaks.
fn push_paragraph(xml: &mut String, text: &str) {
    xml.push_str("<w:p><w:r>");
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        push_text_run(xml, line.trim_end_matches('\r'));
    }
    xml.push_str("</w:r></w:p>");
}

fn push_page_break(xml: &mut String) {
    xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#);
}

fn push_text_run(xml: &mut String, text: &str) {
    xml.push_str(r#"<w:t xml:space="preserve">"#);
    xml.push_str(&xml_escape(text));
    xml.push_str("</w:t>");
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
