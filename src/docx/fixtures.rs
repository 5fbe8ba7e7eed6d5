// src/docx/fixtures.rs
// Builders for small DOCX files used across the test modules.
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

pub fn paragraph(text: &str) -> String {
    if text.is_empty() {
        return "<w:p/>".to_string();
    }
    format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, escape(text))
}

pub fn paragraphs(texts: &[&str]) -> String {
    texts.iter().map(|t| paragraph(t)).collect()
}

pub fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl>");
    for row in rows {
        xml.push_str("<w:tr>");
        for cell in row.iter() {
            xml.push_str("<w:tc>");
            xml.push_str(&paragraph(cell));
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        W_NS, body
    )
}

/// Writes a minimal DOCX package containing `body` and returns its path.
pub fn write_docx(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create fixture file");
    let mut writer = zip::ZipWriter::new(file);

    writer.start_file("[Content_Types].xml", SimpleFileOptions::default()).expect("start content types");
    writer
        .write_all(br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#)
        .expect("write content types");

    writer.start_file("word/document.xml", SimpleFileOptions::default()).expect("start document part");
    writer.write_all(document_xml(body).as_bytes()).expect("write document part");

    writer.finish().expect("finish fixture zip");
    path
}
