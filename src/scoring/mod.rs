// src/scoring/mod.rs
pub mod derived;
pub mod qualitative;

pub use derived::{derive_scores, round1, weighted_score, DerivedColumn, ScoredTable};
pub use qualitative::{qual_to_score, QualScore, QualitativeScorer, ScoreRule};
