//! Rule-based ATS scoring

pub mod text;
pub mod lexicon;
pub mod rules;
pub mod formatting;
pub mod keywords;
pub mod content;
pub mod completeness;
pub mod feedback;
pub mod scorer;

pub use scorer::{calculate_ats_score, AtsScorer, ScoreExplanation, ScoringWeights};
