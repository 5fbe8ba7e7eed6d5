// src/docx/models.rs
use serde::Serialize;

/// One top-level child of `w:body`, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum BodyBlock {
    Paragraph(String),
    Table(RawTable),
}

/// A table grid as stored in the document: cell text untrimmed, merged cells
/// already expanded so every row reports one entry per grid column it covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

/// Parsed body of a DOCX file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocxDocument {
    pub blocks: Vec<BodyBlock>,
}

impl DocxDocument {
    /// Top-level paragraph texts, in document order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().filter_map(|block| match block {
            BodyBlock::Paragraph(text) => Some(text.as_str()),
            BodyBlock::Table(_) => None,
        })
    }

    /// Top-level tables, in document order.
    pub fn tables(&self) -> impl Iterator<Item = &RawTable> {
        self.blocks.iter().filter_map(|block| match block {
            BodyBlock::Table(table) => Some(table),
            BodyBlock::Paragraph(_) => None,
        })
    }
}
