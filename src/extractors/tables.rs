// src/extractors/tables.rs
use crate::docx::{open_document, DocxDocument, RawTable};
use crate::utils::error::ExtractError;
use serde::Serialize;
use std::path::Path;

/// A rectangular table: a header row of column names plus data rows.
///
/// Column names need not be unique. Lookups by name resolve to the first
/// column carrying that name, positional access sees every column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, returning `None` if any row's width differs from the header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        if rows.iter().any(|row| row.len() != columns.len()) {
            return None;
        }
        Some(Self { columns, rows })
    }

    /// Applies the extraction rules to a raw grid: cells are trimmed, row 0
    /// becomes the header, and grids without a data row or with ragged rows
    /// are rejected.
    pub fn from_grid(grid: &[Vec<String>]) -> Option<Self> {
        if grid.len() < 2 {
            return None;
        }

        let mut trimmed = grid
            .iter()
            .map(|row| row.iter().map(|cell| cell.trim().to_string()).collect::<Vec<_>>());
        let columns = trimmed.next()?;
        Self::new(columns, trimmed.collect())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// All values of a named column, in row order.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// A row as (column name, cell text) pairs, duplicates kept in position.
    pub fn row_pairs(&self, row: usize) -> Option<Vec<(&str, &str)>> {
        let cells = self.rows.get(row)?;
        Some(
            self.columns
                .iter()
                .zip(cells)
                .map(|(c, v)| (c.as_str(), v.as_str()))
                .collect(),
        )
    }

    /// New table with the same header and the given rows, in the given order.
    /// Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices.iter().filter_map(|&i| self.rows.get(i).cloned()).collect(),
        }
    }
}

/// Converts every top-level table of a parsed document into a [`Table`],
/// in document order, skipping grids with fewer than two rows and ragged grids.
pub fn extract_tables(document: &DocxDocument) -> Vec<Table> {
    document
        .tables()
        .enumerate()
        .filter_map(|(position, raw)| convert(position, raw))
        .collect()
}

fn convert(position: usize, raw: &RawTable) -> Option<Table> {
    if raw.rows.len() < 2 {
        tracing::debug!("Skipping table #{}: {} row(s), need header plus data", position, raw.rows.len());
        return None;
    }

    let table = Table::from_grid(&raw.rows);
    if table.is_none() {
        tracing::warn!(
            "Dropping table #{}: rows do not match header width {}",
            position,
            raw.rows[0].len()
        );
    }
    table
}

/// Reads a DOCX file and extracts its tables.
pub fn tables_from_docx(path: &Path) -> Result<Vec<Table>, ExtractError> {
    let document = open_document(path)?;
    let tables = extract_tables(&document);
    tracing::info!("Extracted {} tables from {}", tables.len(), path.display());
    Ok(tables)
}
