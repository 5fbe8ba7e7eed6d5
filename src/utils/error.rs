// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("I/O error reading document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a valid DOCX container: {0}")]
    Container(#[from] zip::result::ZipError), // Automatically convert zip errors

    #[error("DOCX container is missing part: {0}")]
    MissingPart(String),

    #[error("Malformed document XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Unexpected document structure: {0}")]
    Structure(String),
}

impl DocumentError {
    /// True for every failure where the file exists but is not a readable DOCX.
    pub fn is_format_error(&self) -> bool {
        !matches!(self, DocumentError::NotFound(_) | DocumentError::Io(_))
    }
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Invalid section heading pattern: {0}")]
    InvalidPattern(String),

    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A failure observed by several callers waiting on the same cache entry.
    #[error(transparent)]
    Shared(std::sync::Arc<ExtractError>),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Expected at least {expected} tables in the document, found {found}")]
    SchemaShortfall { expected: usize, found: usize },
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        AppError::Extraction(ExtractError::Document(err))
    }
}
