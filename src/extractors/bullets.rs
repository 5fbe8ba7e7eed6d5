// src/extractors/bullets.rs
use crate::docx::open_document;
use crate::utils::error::ExtractError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Leading characters that mark a paragraph as a bullet line.
pub const BULLET_GLYPHS: [char; 3] = ['•', '-', '–'];

/// Generic section heading: "Section" followed by a single letter.
pub const DEFAULT_HEADING_PATTERN: &str = r"(?i)^\s*Section\s+[A-Z]\b";

static SECTION_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(DEFAULT_HEADING_PATTERN).expect("Failed to compile SECTION_HEADING_RE")
});

/// Collects bullet lines from a marker-delimited section of paragraphs.
///
/// A section opens at the first non-blank paragraph that starts with the
/// marker (case-insensitive) and closes, exclusively, at the next paragraph
/// matching the heading pattern. Scanning stops there for good.
#[derive(Debug, Clone)]
pub struct BulletExtractor {
    heading: Regex,
}

impl Default for BulletExtractor {
    fn default() -> Self {
        Self { heading: SECTION_HEADING_RE.clone() }
    }
}

impl BulletExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a different section-heading grammar for the closing boundary.
    pub fn with_heading_pattern(pattern: &str) -> Result<Self, ExtractError> {
        let heading = Regex::new(pattern)
            .map_err(|e| ExtractError::InvalidPattern(format!("'{}': {}", pattern, e)))?;
        Ok(Self { heading })
    }

    pub fn heading_pattern(&self) -> &str {
        self.heading.as_str()
    }

    /// Returns the bullets found strictly inside the section opened by `marker`.
    /// An absent marker yields an empty list.
    pub fn extract<'a, I>(&self, paragraphs: I, marker: &str) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let marker = marker.to_lowercase();
        let mut bullets = Vec::new();
        let mut in_section = false;

        for paragraph in paragraphs {
            let text = paragraph.trim();
            if text.is_empty() {
                continue;
            }

            // The marker paragraph opens the section and is never a boundary
            if text.to_lowercase().starts_with(&marker) {
                if !in_section {
                    tracing::trace!("Section '{}' opens at: '{}'", marker, text);
                    in_section = true;
                }
                continue;
            }

            if !in_section {
                continue;
            }

            if self.heading.is_match(text) {
                tracing::trace!("Section '{}' closes at: '{}'", marker, text);
                break;
            }

            if text.starts_with(BULLET_GLYPHS) {
                let item = text.trim_start_matches(BULLET_GLYPHS).trim();
                if !item.is_empty() {
                    bullets.push(item.to_string());
                }
            }
        }

        if !in_section {
            tracing::debug!("Section marker '{}' not found", marker);
        }
        bullets
    }

    /// Reads a DOCX file and extracts the bullets of one section.
    pub fn extract_from_docx(&self, path: &Path, marker: &str) -> Result<Vec<String>, ExtractError> {
        let document = open_document(path)?;
        let bullets = self.extract(document.paragraphs(), marker);
        tracing::info!("Extracted {} bullets for '{}' from {}", bullets.len(), marker, path.display());
        Ok(bullets)
    }
}

/// Bullet extraction with the default section-heading grammar.
pub fn bullets_from_docx(path: &Path, marker: &str) -> Result<Vec<String>, ExtractError> {
    BulletExtractor::new().extract_from_docx(path, marker)
}
