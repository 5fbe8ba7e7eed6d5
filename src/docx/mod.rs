// src/docx/mod.rs
pub mod models;
pub mod package;

#[cfg(test)]
pub(crate) mod fixtures;

pub use models::{BodyBlock, DocxDocument, RawTable};
pub use package::{open_document, parse_document_xml};
