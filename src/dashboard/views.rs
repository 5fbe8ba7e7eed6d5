// src/dashboard/views.rs
// Row selection and aggregates behind the dashboard's filters and widgets.
// All functions return row indices into the input table, in table order.
use crate::extractors::Table;
use crate::scoring::ScoredTable;
use serde::Serialize;

/// Rows where any of `columns` contains `query`, case-insensitively.
/// The query is matched as typed, whitespace included. Columns absent from the
/// table are skipped; an empty query, or no searchable column at all, selects
/// every row.
pub fn search_rows(table: &Table, query: &str, columns: &[&str]) -> Vec<usize> {
    let query = query.to_lowercase();
    let indices: Vec<usize> = columns.iter().filter_map(|c| table.column_index(c)).collect();

    if query.is_empty() || indices.is_empty() {
        return (0..table.len()).collect();
    }

    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| indices.iter().any(|&i| row[i].to_lowercase().contains(&query)))
        .map(|(n, _)| n)
        .collect()
}

/// Rows whose `column` equals `value`. `None` or a missing column selects every row.
pub fn filter_eq(table: &Table, column: &str, value: Option<&str>) -> Vec<usize> {
    let (Some(value), Some(idx)) = (value, table.column_index(column)) else {
        return (0..table.len()).collect();
    };
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| row[idx] == value)
        .map(|(n, _)| n)
        .collect()
}

/// Rows whose `column` is one of `values`, for multi-select filters.
/// An empty selection or a missing column selects every row.
pub fn filter_in(table: &Table, column: &str, values: &[&str]) -> Vec<usize> {
    let Some(idx) = table.column_index(column).filter(|_| !values.is_empty()) else {
        return (0..table.len()).collect();
    };
    table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| values.contains(&row[idx].as_str()))
        .map(|(n, _)| n)
        .collect()
}

/// Sorted unique values of a column, for filter choices.
pub fn distinct_values(table: &Table, column: &str) -> Vec<String> {
    let mut values: Vec<String> = table
        .column_values(column)
        .unwrap_or_default()
        .into_iter()
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Rows whose derived score in `column` is at least `min`.
pub fn rows_with_min_score(scored: &ScoredTable, column: &str, min: u8) -> Vec<usize> {
    match scored.derived_column(column) {
        Some(derived) => derived
            .values
            .iter()
            .enumerate()
            .filter(|(_, score)| score.value() >= min)
            .map(|(n, _)| n)
            .collect(),
        None => Vec::new(),
    }
}

/// Row indices of `scored` ordered by a derived score, highest first.
/// Ties keep table order.
pub fn rank_by_score(scored: &ScoredTable, column: &str) -> Vec<usize> {
    let Some(derived) = scored.derived_column(column) else {
        return Vec::new();
    };
    let mut order: Vec<usize> = (0..derived.values.len()).collect();
    order.sort_by(|&a, &b| derived.values[b].cmp(&derived.values[a]));
    order
}

/// Row count per distinct value of `column`, in first-seen order.
pub fn count_by(table: &Table, column: &str) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for value in table.column_values(column).unwrap_or_default() {
        match counts.iter_mut().find(|(v, _)| v == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// Inputs of the monthly recurring revenue estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MrrInputs {
    pub modules: usize,
    pub module_price: f64,
    pub seats: u32,
    pub seat_price: f64,
    pub ai_units: u64,
    pub ai_unit_price: f64,
}

impl Default for MrrInputs {
    fn default() -> Self {
        Self {
            modules: 2,
            module_price: 150.0,
            seats: 10,
            seat_price: 12.0,
            ai_units: 0,
            ai_unit_price: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MrrEstimate {
    pub modules: f64,
    pub seats: f64,
    pub ai: f64,
    pub total: f64,
}

impl MrrInputs {
    pub fn estimate(&self) -> MrrEstimate {
        let modules = self.modules as f64 * self.module_price;
        let seats = f64::from(self.seats) * self.seat_price;
        let ai = self.ai_units as f64 * self.ai_unit_price;
        MrrEstimate { modules, seats, ai, total: modules + seats + ai }
    }
}
