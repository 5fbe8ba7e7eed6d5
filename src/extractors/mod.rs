// src/extractors/mod.rs
pub mod bullets;
pub mod tables;

// Re-export key extraction types for convenience
pub use bullets::{bullets_from_docx, BulletExtractor, BULLET_GLYPHS, DEFAULT_HEADING_PATTERN};
pub use tables::{extract_tables, tables_from_docx, Table};
