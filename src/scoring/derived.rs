// src/scoring/derived.rs
use crate::extractors::Table;
use crate::scoring::qualitative::{QualScore, QualitativeScorer};
use serde::Serialize;

/// Scores every row of `table` from its `source_column` text.
/// A missing column scores every row as empty text. Row order and count are kept.
pub fn derive_scores(table: &Table, source_column: &str, scorer: &QualitativeScorer) -> Vec<QualScore> {
    match table.column_index(source_column) {
        Some(idx) => table
            .rows()
            .iter()
            .map(|row| scorer.score(row.get(idx).map(String::as_str)))
            .collect(),
        None => {
            tracing::debug!("Column '{}' absent, scoring {} rows as empty", source_column, table.len());
            vec![scorer.score(None); table.len()]
        }
    }
}

/// A numeric column computed from a text column of the same table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedColumn {
    pub name: String,
    pub source: String,
    pub values: Vec<QualScore>,
}

/// A table plus derived score columns appended alongside it.
/// The source table's columns are left untouched for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoredTable {
    table: Table,
    derived: Vec<DerivedColumn>,
}

impl ScoredTable {
    pub fn new(table: Table) -> Self {
        Self { table, derived: Vec::new() }
    }

    /// Appends (or replaces) a derived column named `name` scored from `source`.
    pub fn with_score_column(mut self, name: &str, source: &str, scorer: &QualitativeScorer) -> Self {
        let column = DerivedColumn {
            name: name.to_string(),
            source: source.to_string(),
            values: derive_scores(&self.table, source, scorer),
        };
        match self.derived.iter_mut().find(|c| c.name == name) {
            Some(existing) => *existing = column,
            None => self.derived.push(column),
        }
        self
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn derived(&self) -> &[DerivedColumn] {
        &self.derived
    }

    pub fn derived_column(&self, name: &str) -> Option<&DerivedColumn> {
        self.derived.iter().find(|c| c.name == name)
    }

    pub fn score(&self, row: usize, name: &str) -> Option<QualScore> {
        self.derived_column(name)?.values.get(row).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

/// Rounds to one decimal place. Ties go to the even digit, so 0.25 becomes 0.2.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// Sum of `value * weight` terms, rounded to one decimal place.
pub fn weighted_score(terms: &[(f64, f64)]) -> f64 {
    round1(terms.iter().map(|(value, weight)| value * weight).sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitors(rows: &[[&str; 2]]) -> Table {
        Table::new(
            vec!["Vendor".to_string(), "Key Limitation".to_string()],
            rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_derive_scores_preserves_order_and_count() {
        let table = competitors(&[
            ["Kinaxis", "Very complex, enterprise only"],
            ["Bizongo", "Basic analytics"],
            ["FourKites", "Visibility only, no execution"],
            ["Unnamed", ""],
        ]);
        let scores: Vec<u8> = derive_scores(&table, "Key Limitation", &QualitativeScorer::default())
            .into_iter()
            .map(u8::from)
            .collect();
        assert_eq!(scores, vec![5, 2, 3, 4]);
    }

    #[test]
    fn test_missing_source_column_scores_default() {
        let table = competitors(&[["A", "weak"], ["B", "basic"]]);
        let scores = derive_scores(&table, "AI Strength", &QualitativeScorer::default());
        assert_eq!(scores, vec![QualScore::NEUTRAL; 2]);
    }

    #[test]
    fn test_derive_scores_on_every_size() {
        let scorer = QualitativeScorer::default();
        for n in 0..5 {
            let rows: Vec<[&str; 2]> = (0..n).map(|_| ["v", "limited"]).collect();
            let table = competitors(&rows);
            assert_eq!(derive_scores(&table, "Key Limitation", &scorer).len(), n);
            assert_eq!(derive_scores(&table, "Missing", &scorer).len(), n);
        }
    }

    #[test]
    fn test_scored_table_keeps_source_columns() {
        let table = competitors(&[["SAP", "High TCO"]]);
        let scorer = QualitativeScorer::default();
        let scored = ScoredTable::new(table.clone())
            .with_score_column("Complexity/Cost (proxy)", "Key Limitation", &scorer)
            .with_score_column("AI Strength (proxy)", "AI Strength", &scorer);

        assert_eq!(scored.table(), &table);
        assert_eq!(scored.derived().len(), 2);
        assert_eq!(scored.score(0, "Complexity/Cost (proxy)"), Some(QualScore::SEVERE));
        assert_eq!(scored.score(0, "AI Strength (proxy)"), Some(QualScore::NEUTRAL));
        assert_eq!(scored.score(1, "AI Strength (proxy)"), None);
    }

    #[test]
    fn test_rescoring_replaces_column() {
        let scorer = QualitativeScorer::default();
        let scored = ScoredTable::new(competitors(&[["A", "weak"]]))
            .with_score_column("proxy", "Vendor", &scorer)
            .with_score_column("proxy", "Key Limitation", &scorer);
        assert_eq!(scored.derived().len(), 1);
        assert_eq!(scored.derived_column("proxy").unwrap().source, "Key Limitation");
    }

    #[test]
    fn test_weighted_score() {
        assert!((weighted_score(&[(9.0, 0.6), (8.0, 0.4)]) - 8.6).abs() < 1e-9);
        assert!((weighted_score(&[(100.0, 0.3), (85.0, 0.3), (90.0, 0.4)]) - 91.5).abs() < 1e-9);
        assert_eq!(weighted_score(&[]), 0.0);
        assert!((round1(8.600000000000001) - 8.6).abs() < 1e-12);
    }

    #[test]
    fn test_round1_ties_to_even() {
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(0.75), 0.8);
        assert_eq!(round1(2.25), 2.2);
        assert_eq!(round1(-0.25), -0.2);
    }
}
