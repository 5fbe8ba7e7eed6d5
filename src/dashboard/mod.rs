// src/dashboard/mod.rs
//! Binds extracted document data to the dashboard's table roles.

pub mod views;

use crate::cache::ExtractionCache;
use crate::extractors::{BulletExtractor, Table};
use crate::scoring::{QualitativeScorer, ScoredTable};
use crate::utils::error::AppError;
use serde::Serialize;
use std::path::Path;

/// Expected tables, in document order.
pub const TABLE_ROLES: [&str; 6] = ["Competitors", "Gap Grid", "AI Map", "Segments", "Companies", "Revenue"];

pub const INSIGHTS_MARKER: &str = "Section D";
pub const PLAYBOOK_MARKER: &str = "E4. Pilot Playbook";

pub const DEFAULT_PLAYBOOK: [&str; 4] = [
    "Week 1–2: Baseline mapping (current tools, SKU count, warehouses, order volume).",
    "Week 3–4: Inventory + PO/GRN live; document AI ingestion; minimum integrations.",
    "Week 5–8: Order + dispatch tracking; control tower; alerting.",
    "Week 9–12: Forecasting + reorder suggestions; KPI review; case study sign-off.",
];

pub const COMPLEXITY_PROXY: &str = "Complexity/Cost (proxy)";
pub const AI_STRENGTH_PROXY: &str = "AI Strength (proxy)";
pub const SME_DIFFERENTIATION_PROXY: &str = "SME Differentiation (proxy)";

/// Everything the presentation layer needs from the source document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocxDashboard {
    pub competitors: ScoredTable,
    pub market_gaps: Table,
    pub ai_map: ScoredTable,
    pub segments: Table,
    pub companies: Table,
    pub revenue: Table,
    /// Empty when the document has no Section D bullets; callers show a notice.
    pub insights: Vec<String>,
    pub playbook: Vec<String>,
    pub playbook_is_default: bool,
}

pub struct DashboardLoader<'c> {
    cache: &'c ExtractionCache,
    min_tables: usize,
    bullets: BulletExtractor,
    scorer: QualitativeScorer,
}

impl<'c> DashboardLoader<'c> {
    pub fn new(cache: &'c ExtractionCache) -> Self {
        Self {
            cache,
            min_tables: TABLE_ROLES.len(),
            bullets: BulletExtractor::default(),
            scorer: QualitativeScorer::default(),
        }
    }

    /// Raises the number of tables the document must provide.
    /// Values below the number of table roles have no effect.
    pub fn with_min_tables(mut self, min_tables: usize) -> Self {
        if min_tables < TABLE_ROLES.len() {
            tracing::warn!(
                "Ignoring min tables {}: the dashboard needs at least {}",
                min_tables,
                TABLE_ROLES.len()
            );
        }
        self.min_tables = min_tables.max(TABLE_ROLES.len());
        self
    }

    pub fn with_bullet_extractor(mut self, extractor: BulletExtractor) -> Self {
        self.bullets = extractor;
        self
    }

    pub fn with_scorer(mut self, scorer: QualitativeScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn min_tables(&self) -> usize {
        self.min_tables
    }

    /// Loads, validates and scores the dashboard data for one document.
    pub fn load(&self, path: &Path) -> Result<DocxDashboard, AppError> {
        let tables = self.cache.tables(path)?;
        let [competitors, market_gaps, ai_map, segments, companies, revenue] =
            bind_tables(&tables, self.min_tables)?;

        let competitors = ScoredTable::new(competitors)
            .with_score_column(COMPLEXITY_PROXY, "Key Limitation", &self.scorer)
            .with_score_column(AI_STRENGTH_PROXY, "AI Strength", &self.scorer);
        let ai_map = ScoredTable::new(ai_map)
            .with_score_column(SME_DIFFERENTIATION_PROXY, "SME Differentiation", &self.scorer);

        let insights = self.cache.bullets_with(&self.bullets, path, INSIGHTS_MARKER)?;
        if insights.is_empty() {
            tracing::warn!("No bullets extracted from '{}' in {}", INSIGHTS_MARKER, path.display());
        }

        let extracted_playbook = self.cache.bullets_with(&self.bullets, path, PLAYBOOK_MARKER)?;
        let (playbook, playbook_is_default) = with_fallback(&extracted_playbook, &DEFAULT_PLAYBOOK);

        Ok(DocxDashboard {
            competitors,
            market_gaps,
            ai_map,
            segments,
            companies,
            revenue,
            insights: insights.to_vec(),
            playbook,
            playbook_is_default,
        })
    }
}

/// Splits the leading tables into the six dashboard roles.
/// Fewer than `min_tables` tables is a fatal shortfall; extra tables are ignored.
pub fn bind_tables(tables: &[Table], min_tables: usize) -> Result<[Table; 6], AppError> {
    let expected = min_tables.max(TABLE_ROLES.len());
    if tables.len() < expected {
        tracing::error!(
            "Expected {} tables ({}), found {}",
            expected,
            TABLE_ROLES.join(", "),
            tables.len()
        );
        return Err(AppError::SchemaShortfall { expected, found: tables.len() });
    }
    if tables.len() > TABLE_ROLES.len() {
        tracing::debug!("Ignoring {} trailing tables", tables.len() - TABLE_ROLES.len());
    }

    Ok(std::array::from_fn(|i| tables[i].clone()))
}

/// The extracted list, or the default when nothing was extracted.
pub fn with_fallback(extracted: &[String], default: &[&str]) -> (Vec<String>, bool) {
    if extracted.is_empty() {
        (default.iter().map(|s| s.to_string()).collect(), true)
    } else {
        (extracted.to_vec(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::fixtures::{paragraphs, table, write_docx};
    use crate::scoring::QualScore;

    fn six_tables() -> String {
        [
            table(&[
                &["Vendor", "Primary Segment", "Key Limitation", "AI Strength"],
                &["Kinaxis", "Enterprise", "Very complex, enterprise only", "Strong"],
                &["Bizongo", "India SME", "Basic analytics", "Weak AI"],
            ]),
            table(&[&["Market Gap", "Product Opportunity", "Business Value"], &["Excel planning", "Planner", "Better decisions"]]),
            table(&[&["AI Feature", "SME Differentiation"], &["Document AI", "No native equivalent"], &["Copilot", "Community add-ons"]]),
            table(&[&["Segment", "Pain"], &["Peenya", "Stockouts"]]),
            table(&[&["Company", "Area"], &["Acme", "Peenya"]]),
            table(&[&["Revenue Stream", "Trigger"], &["Seats", "Team growth"]]),
        ]
        .concat()
    }

    #[test]
    fn test_load_full_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let body = six_tables()
            + &paragraphs(&[
                "Section D: Strategy Validation",
                "• Keep pricing modular",
                "- Avoid feature overload",
                "Section E: Execution",
                "E4. Pilot Playbook",
                "• Week 1: Kickoff",
            ]);
        let path = write_docx(dir.path(), "refer.docx", &body);
        let cache = ExtractionCache::new();

        let dashboard = DashboardLoader::new(&cache).load(&path).unwrap();

        assert_eq!(dashboard.competitors.len(), 2);
        assert_eq!(dashboard.competitors.score(0, COMPLEXITY_PROXY), Some(QualScore::SEVERE));
        assert_eq!(dashboard.competitors.score(1, COMPLEXITY_PROXY), Some(QualScore::BASIC));
        assert_eq!(dashboard.competitors.score(1, AI_STRENGTH_PROXY), Some(QualScore::MODERATE));
        assert_eq!(dashboard.ai_map.score(0, SME_DIFFERENTIATION_PROXY), Some(QualScore::MODERATE));
        assert_eq!(dashboard.ai_map.score(1, SME_DIFFERENTIATION_PROXY), Some(QualScore::BASIC));
        assert_eq!(dashboard.revenue.columns()[0], "Revenue Stream");
        assert_eq!(dashboard.insights, vec!["Keep pricing modular", "Avoid feature overload"]);
        assert_eq!(dashboard.playbook, vec!["Week 1: Kickoff"]);
        assert!(!dashboard.playbook_is_default);
    }

    #[test]
    fn test_missing_playbook_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(dir.path(), "refer.docx", &six_tables());
        let cache = ExtractionCache::new();

        let dashboard = DashboardLoader::new(&cache).load(&path).unwrap();
        assert!(dashboard.insights.is_empty());
        assert!(dashboard.playbook_is_default);
        assert_eq!(dashboard.playbook.len(), DEFAULT_PLAYBOOK.len());
    }

    #[test]
    fn test_five_tables_is_schema_shortfall() {
        let dir = tempfile::tempdir().unwrap();
        let five: String = (0..5)
            .map(|i| {
                let cell = i.to_string();
                table(&[&["H"], &[cell.as_str()]])
            })
            .collect();
        let path = write_docx(dir.path(), "refer.docx", &five);
        let cache = ExtractionCache::new();

        let err = DashboardLoader::new(&cache).load(&path).unwrap_err();
        assert!(matches!(err, AppError::SchemaShortfall { expected: 6, found: 5 }));
    }

    #[test]
    fn test_custom_scorer_drives_proxy_columns() {
        use crate::scoring::ScoreRule;

        let dir = tempfile::tempdir().unwrap();
        let path = write_docx(dir.path(), "refer.docx", &six_tables());
        let cache = ExtractionCache::new();
        let scorer = QualitativeScorer::new(vec![ScoreRule::new("strong", QualScore::SEVERE, &["strong"])], QualScore::BASIC);

        let dashboard = DashboardLoader::new(&cache).with_scorer(scorer).load(&path).unwrap();
        assert_eq!(dashboard.competitors.score(0, AI_STRENGTH_PROXY), Some(QualScore::SEVERE));
        assert_eq!(dashboard.competitors.score(1, AI_STRENGTH_PROXY), Some(QualScore::BASIC));
    }

    #[test]
    fn test_min_tables_can_only_be_raised() {
        let cache = ExtractionCache::new();
        assert_eq!(DashboardLoader::new(&cache).with_min_tables(2).min_tables(), 6);
        assert_eq!(DashboardLoader::new(&cache).with_min_tables(8).min_tables(), 8);
    }

    #[test]
    fn test_bind_tables_ignores_extras() {
        let tables: Vec<Table> = (0..7)
            .map(|i| Table::new(vec![format!("T{}", i)], vec![vec!["x".to_string()]]).unwrap())
            .collect();
        let bound = bind_tables(&tables, 6).unwrap();
        assert_eq!(bound[5].columns()[0], "T5");

        let err = bind_tables(&tables, 8).unwrap_err();
        assert!(matches!(err, AppError::SchemaShortfall { expected: 8, found: 7 }));
    }

    #[test]
    fn test_missing_document_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ExtractionCache::new();
        let err = DashboardLoader::new(&cache).load(&dir.path().join("refer.docx")).unwrap_err();
        assert!(matches!(err, AppError::Extraction(_)));
    }
}
