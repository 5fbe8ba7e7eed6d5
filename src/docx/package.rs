// src/docx/package.rs
use crate::docx::models::{BodyBlock, DocxDocument, RawTable};
use crate::utils::error::DocumentError;
use roxmltree::Node;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

// Main story part of a WordprocessingML package
const DOCUMENT_PART: &str = "word/document.xml";
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Opens a DOCX file and parses its body into paragraphs and tables.
pub fn open_document(path: &Path) -> Result<DocxDocument, DocumentError> {
    if !path.exists() {
        tracing::error!("Document does not exist: {}", path.display());
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }

    tracing::debug!("Opening DOCX container: {}", path.display());
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?; // Propagates ZipError as DocumentError::Container

    let xml = read_part(&mut archive, DOCUMENT_PART)?;
    tracing::debug!("Read {} ({} bytes)", DOCUMENT_PART, xml.len());

    parse_document_xml(&xml)
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String, DocumentError> {
    let mut part = match archive.by_name(name) {
        Ok(part) => part,
        Err(ZipError::FileNotFound) => return Err(DocumentError::MissingPart(name.to_string())),
        Err(e) => return Err(e.into()),
    };

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| DocumentError::Structure(format!("failed to read {}: {}", name, e)))?;

    Ok(xml)
}

/// Parses the XML of `word/document.xml` into the ordered body model.
/// Only direct children of `w:body` are kept.
pub fn parse_document_xml(xml: &str) -> Result<DocxDocument, DocumentError> {
    let xml = xml.trim_start_matches('\u{feff}');
    let doc = roxmltree::Document::parse(xml)?;

    let root = doc.root_element();
    if !is_w(root, "document") {
        return Err(DocumentError::Structure(format!(
            "expected w:document root, found '{}'",
            root.tag_name().name()
        )));
    }

    let body = root
        .children()
        .find(|n| is_w(*n, "body"))
        .ok_or_else(|| DocumentError::Structure("document has no w:body".to_string()))?;

    let mut blocks = Vec::new();
    for child in body.children().filter(|n| n.is_element()) {
        if is_w(child, "p") {
            blocks.push(BodyBlock::Paragraph(paragraph_text(child)));
        } else if is_w(child, "tbl") {
            blocks.push(BodyBlock::Table(read_table(child)));
        }
    }

    tracing::debug!("Parsed document body: {} blocks", blocks.len());
    Ok(DocxDocument { blocks })
}

fn is_w(node: Node<'_, '_>, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().namespace() == Some(W_NS)
        && node.tag_name().name() == local_name
}

fn w_child<'a, 'input>(node: Node<'a, 'input>, local_name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| is_w(*n, local_name))
}

fn paragraph_text(paragraph: Node<'_, '_>) -> String {
    let mut text = String::new();
    collect_run_text(paragraph, &mut text);
    text
}

// Runs may sit inside hyperlinks, tracked insertions and similar wrappers.
// Deleted text (w:del) is not part of the visible paragraph.
fn collect_run_text(node: Node<'_, '_>, out: &mut String) {
    for child in node.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match child.tag_name().name() {
            "r" => append_run(child, out),
            "hyperlink" | "ins" | "smartTag" | "fldSimple" | "customXml" => collect_run_text(child, out),
            _ => {}
        }
    }
}

fn append_run(run: Node<'_, '_>, out: &mut String) {
    for child in run.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NS) {
            continue;
        }
        match child.tag_name().name() {
            "t" => out.push_str(child.text().unwrap_or_default()),
            "tab" => out.push('\t'),
            "br" => {
                if child.attribute((W_NS, "type")) != Some("page") {
                    out.push('\n');
                }
            }
            "cr" => out.push('\n'),
            "noBreakHyphen" => out.push('-'),
            _ => {}
        }
    }
}

fn read_table(table: Node<'_, '_>) -> RawTable {
    let mut rows: Vec<Vec<String>> = Vec::new();

    for tr in table.children().filter(|n| is_w(*n, "tr")) {
        let mut row: Vec<String> = Vec::new();

        for tc in tr.children().filter(|n| is_w(*n, "tc")) {
            let props = w_child(tc, "tcPr");

            let span = props
                .and_then(|p| w_child(p, "gridSpan"))
                .and_then(|g| g.attribute((W_NS, "val")))
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|span| *span > 0)
                .unwrap_or(1);

            // A bare <w:vMerge/> means "continue"; only val="restart" opens a new merge
            let continues_merge = props
                .and_then(|p| w_child(p, "vMerge"))
                .map(|vm| vm.attribute((W_NS, "val")).map_or(true, |v| v == "continue"))
                .unwrap_or(false);

            let text = if continues_merge {
                let column = row.len();
                rows.last()
                    .and_then(|above| above.get(column))
                    .cloned()
                    .unwrap_or_default()
            } else {
                cell_text(tc)
            };

            for _ in 0..span {
                row.push(text.clone());
            }
        }

        rows.push(row);
    }

    tracing::trace!("Read table with {} rows", rows.len());
    RawTable { rows }
}

fn cell_text(cell: Node<'_, '_>) -> String {
    cell.children()
        .filter(|n| is_w(*n, "p"))
        .map(paragraph_text)
        .collect::<Vec<_>>()
        .join("\n")
}
