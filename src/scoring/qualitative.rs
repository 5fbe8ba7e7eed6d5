// src/scoring/qualitative.rs
use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

/// Ordinal proxy score for a qualitative label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QualScore(u8);

impl QualScore {
    pub const BASIC: QualScore = QualScore(2);
    pub const MODERATE: QualScore = QualScore(3);
    pub const NEUTRAL: QualScore = QualScore(4);
    pub const SEVERE: QualScore = QualScore(5);

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<QualScore> for u8 {
    fn from(score: QualScore) -> u8 {
        score.0
    }
}

impl fmt::Display for QualScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tier of the scorer: any keyword contained in the text yields `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreRule {
    pub name: String,
    pub keywords: Vec<String>,
    pub score: QualScore,
}

impl ScoreRule {
    pub fn new(name: &str, score: QualScore, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            score,
        }
    }

    /// `lowered` must already be lowercase.
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

static DEFAULT_SCORER: Lazy<QualitativeScorer> = Lazy::new(QualitativeScorer::default);

/// Maps free text to a [`QualScore`] through an ordered rule list.
/// Rules are tried top-down and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitativeScorer {
    rules: Vec<ScoreRule>,
    fallback: QualScore,
}

impl Default for QualitativeScorer {
    fn default() -> Self {
        Self::new(
            vec![
                ScoreRule::new(
                    "severe",
                    QualScore::SEVERE,
                    &["very complex", "enterprise only", "high tco", "expensive", "heavy infra"],
                ),
                ScoreRule::new(
                    "moderate",
                    QualScore::MODERATE,
                    &["complex", "weak", "limited", "vertical only", "no execution", "no native"],
                ),
                ScoreRule::new("basic", QualScore::BASIC, &["basic", "add-ons", "community"]),
            ],
            QualScore::NEUTRAL,
        )
    }
}

impl QualitativeScorer {
    pub fn new(rules: Vec<ScoreRule>, fallback: QualScore) -> Self {
        Self { rules, fallback }
    }

    pub fn rules(&self) -> &[ScoreRule] {
        &self.rules
    }

    pub fn fallback(&self) -> QualScore {
        self.fallback
    }

    /// The first rule whose keywords occur in `text`, if any.
    pub fn matching_rule(&self, text: Option<&str>) -> Option<&ScoreRule> {
        let lowered = text.unwrap_or_default().to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// Absent or empty text scores as the fallback.
    pub fn score(&self, text: Option<&str>) -> QualScore {
        self.matching_rule(text).map_or(self.fallback, |rule| rule.score)
    }
}

/// Scores text with the default rule table.
pub fn qual_to_score(text: &str) -> QualScore {
    DEFAULT_SCORER.score(Some(text))
}
