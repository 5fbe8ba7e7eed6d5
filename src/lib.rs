// src/lib.rs
//! Structured data extraction for the SCM strategy dashboard: tables and
//! section bullets from a DOCX source, qualitative-to-numeric scoring, and
//! the static strategy dataset.

pub mod cache;
pub mod dashboard;
pub mod dataset;
pub mod docx;
pub mod extractors;
pub mod scoring;
pub mod storage;
pub mod utils;

pub use cache::ExtractionCache;
pub use utils::AppError;
