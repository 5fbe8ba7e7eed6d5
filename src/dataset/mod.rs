// src/dataset/mod.rs
//! Fixed strategy tables that do not come from the source document.

mod records;

use crate::scoring::weighted_score;
use once_cell::sync::Lazy;
use serde::Serialize;

static DATASET: Lazy<StaticDataset> = Lazy::new(StaticDataset::build);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Competitor {
    pub vendor: String,
    pub segment: String,
    pub coverage: u8,
    pub ai: u8,
    pub cost: u8,
    pub sme_access: u8,
    pub opportunity: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GapPriority {
    Critical,
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketGap {
    pub gap: String,
    pub priority: GapPriority,
    pub impact: u8,
    pub ease: u8,
    pub value: String,
    /// `impact * 0.6 + ease * 0.4`, one decimal.
    pub score: f64,
}

impl MarketGap {
    pub fn new(gap: &str, priority: GapPriority, impact: u8, ease: u8, value: &str) -> Self {
        Self {
            gap: gap.to_string(),
            priority,
            impact,
            ease,
            value: value.to_string(),
            score: weighted_score(&[(f64::from(impact), 0.6), (f64::from(ease), 0.4)]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiFeature {
    pub feature: String,
    pub sme_diff: u8,
    pub enterprise_has: u8,
    pub implementation: u8,
    pub roi: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSegment {
    pub name: String,
    pub priority: u8,
    /// Millions of rupees
    pub market_size: u32,
    pub avg_deal: u32,
    /// Percent
    pub conversion_rate: u8,
    pub pain_points: String,
    pub modules: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueStream {
    pub stream: String,
    pub segment: String,
    /// Percent of revenue that recurs
    pub recurring: u8,
    /// Percent margin
    pub margin: u8,
    pub scalability: u8,
    /// `recurring * 0.3 + margin * 0.3 + scalability * 10 * 0.4`, one decimal.
    pub score: f64,
}

impl RevenueStream {
    pub fn new(stream: &str, segment: &str, recurring: u8, margin: u8, scalability: u8) -> Self {
        Self {
            stream: stream.to_string(),
            segment: segment.to_string(),
            recurring,
            margin,
            scalability,
            score: weighted_score(&[
                (f64::from(recurring), 0.3),
                (f64::from(margin), 0.3),
                (f64::from(scalability) * 10.0, 0.4),
            ]),
        }
    }
}

/// Projected market sizes in billions of rupees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketGrowth {
    pub year: u16,
    pub logistics: f64,
    pub warehouse: f64,
    pub wms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightStatus {
    Critical,
    Strength,
    Opportunity,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightImpact {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategicInsight {
    pub category: String,
    pub insight: String,
    pub status: InsightStatus,
    pub impact: InsightImpact,
}

/// Headline figure shown above the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

/// 2030 market projection with its compound annual growth rate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthHeadline {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub cagr_percent: f64,
}

/// One stage of the 90-day pilot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PilotPhase {
    pub week: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesPhase {
    pub phase: String,
    pub window: String,
    pub motion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetCompany {
    pub name: String,
    pub profile: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticDataset {
    pub competitors: Vec<Competitor>,
    pub market_gaps: Vec<MarketGap>,
    pub ai_features: Vec<AiFeature>,
    pub target_segments: Vec<TargetSegment>,
    pub revenue_streams: Vec<RevenueStream>,
    pub market_growth: Vec<MarketGrowth>,
    pub strategic_insights: Vec<StrategicInsight>,
    pub key_metrics: Vec<KeyMetric>,
    pub growth_headlines: Vec<GrowthHeadline>,
    pub pilot_phases: Vec<PilotPhase>,
    pub sales_phases: Vec<SalesPhase>,
    pub target_companies: Vec<TargetCompany>,
}

impl StaticDataset {
    /// Shared instance, built on first use.
    pub fn get() -> &'static StaticDataset {
        &DATASET
    }

    pub fn build() -> Self {
        let dataset = Self {
            competitors: records::competitors(),
            market_gaps: records::market_gaps(),
            ai_features: records::ai_features(),
            target_segments: records::target_segments(),
            revenue_streams: records::revenue_streams(),
            market_growth: records::market_growth(),
            strategic_insights: records::strategic_insights(),
            key_metrics: records::key_metrics(),
            growth_headlines: records::growth_headlines(),
            pilot_phases: records::pilot_phases(),
            sales_phases: records::sales_phases(),
            target_companies: records::target_companies(),
        };
        tracing::debug!(
            "Built static dataset: {} competitors, {} gaps, {} revenue streams",
            dataset.competitors.len(),
            dataset.market_gaps.len(),
            dataset.revenue_streams.len()
        );
        dataset
    }

    /// Highest-scoring gaps first; ties keep dataset order.
    pub fn top_market_gaps(&self, n: usize) -> Vec<&MarketGap> {
        top_by_score(&self.market_gaps, n, |g| g.score)
    }

    /// Highest-scoring revenue streams first; ties keep dataset order.
    pub fn top_revenue_streams(&self, n: usize) -> Vec<&RevenueStream> {
        top_by_score(&self.revenue_streams, n, |s| s.score)
    }

    pub fn insights_with_status(&self, status: InsightStatus) -> Vec<&StrategicInsight> {
        self.strategic_insights.iter().filter(|i| i.status == status).collect()
    }
}

fn top_by_score<T>(items: &[T], n: usize, score: impl Fn(&T) -> f64) -> Vec<&T> {
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| score(b).total_cmp(&score(a))); // stable
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_table_sizes() {
        let data = StaticDataset::get();
        assert_eq!(data.competitors.len(), 9);
        assert_eq!(data.market_gaps.len(), 9);
        assert_eq!(data.ai_features.len(), 9);
        assert_eq!(data.target_segments.len(), 4);
        assert_eq!(data.revenue_streams.len(), 7);
        assert_eq!(data.market_growth.len(), 7);
        assert_eq!(data.strategic_insights.len(), 10);
        assert_eq!(data.key_metrics.len(), 4);
        assert_eq!(data.growth_headlines.len(), 3);
        assert_eq!(data.pilot_phases.len(), 4);
        assert_eq!(data.sales_phases.len(), 3);
        assert_eq!(data.target_companies.len(), 4);
    }

    #[test]
    fn test_plan_content() {
        let data = StaticDataset::get();
        let weeks: Vec<&str> = data.pilot_phases.iter().map(|p| p.week.as_str()).collect();
        assert_eq!(weeks, vec!["Week 1-2", "Week 3-4", "Week 5-8", "Week 9-12"]);
        assert_eq!(data.pilot_phases[3].title, "Intelligence Layer");
        assert_eq!(data.sales_phases[2].window, "18+ months");
        assert_eq!(data.target_companies[2].name, "Udaan (Bengaluru HQ)");
        assert!(close(data.growth_headlines[2].cagr_percent, 17.5));
    }

    #[test]
    fn test_market_gap_scores() {
        let data = StaticDataset::get();
        let score = |name: &str| data.market_gaps.iter().find(|g| g.gap == name).unwrap().score;
        assert!(close(score("SME fragmentation"), 8.6));
        assert!(close(score("Weak India localization"), 9.6));
        assert!(close(score("No cross-module sync"), 7.2));
    }

    #[test]
    fn test_revenue_stream_scores() {
        let data = StaticDataset::get();
        let score = |name: &str| data.revenue_streams.iter().find(|s| s.stream == name).unwrap().score;
        assert!(close(score("Core subscription"), 91.5));
        assert!(close(score("Usage-based AI"), 86.5));
        assert!(close(score("Implementation"), 32.0));
        assert!(close(score("Integration marketplace"), 95.5));
    }

    #[test]
    fn test_top_market_gaps_descending() {
        let top: Vec<&str> = StaticDataset::get().top_market_gaps(3).iter().map(|g| g.gap.as_str()).collect();
        // 9.6, 9.0, 8.8
        assert_eq!(top, vec!["Weak India localization", "High license cost", "No SME AI"]);
    }

    #[test]
    fn test_top_revenue_streams() {
        let top = StaticDataset::get().top_revenue_streams(2);
        assert_eq!(top[0].stream, "Integration marketplace");
        assert_eq!(top[1].stream, "Core subscription");
        assert_eq!(StaticDataset::get().top_revenue_streams(100).len(), 7);
    }

    #[test]
    fn test_insights_by_status() {
        let warnings = StaticDataset::get().insights_with_status(InsightStatus::Warning);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].category, "Risk");
    }

    #[test]
    fn test_serializes_enums_lowercase() {
        let json = serde_json::to_value(&StaticDataset::get().strategic_insights[0]).unwrap();
        assert_eq!(json["status"], "critical");
        assert_eq!(json["impact"], "high");
    }
}
