//! Report structure shared by every output format

use crate::model::ATSScore;
use crate::scoring::keywords::JobMatch;
use crate::scoring::lexicon::LEXICON_VERSION;
use crate::scoring::{ScoreExplanation, ScoringWeights};
use crate::tips::EnhancementTip;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one `score` run produces
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub score: ATSScore,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatch>,

    pub tips: Vec<EnhancementTip>,

    /// Fired rules per sub-score, kept for detailed reports only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<ScoreExplanation>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub scorer_version: String,
    pub lexicon_version: String,
    pub resume_file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_file: Option<String>,
    pub weights: ScoringWeights,
}

impl ReportMetadata {
    pub fn new(resume_file: impl Into<String>, job_file: Option<String>, weights: ScoringWeights) -> Self {
        Self {
            generated_at: Utc::now(),
            scorer_version: env!("CARGO_PKG_VERSION").to_string(),
            lexicon_version: LEXICON_VERSION.to_string(),
            resume_file: resume_file.into(),
            job_file,
            weights,
        }
    }
}

impl ScoreReport {
    pub fn new(explanation: ScoreExplanation, tips: Vec<EnhancementTip>, detailed: bool, metadata: ReportMetadata) -> Self {
        let score = explanation.score.clone();
        let job_match = explanation.job_match.clone();
        Self {
            score,
            job_match,
            tips,
            explanation: detailed.then_some(explanation),
            metadata,
        }
    }

    pub fn verdict(&self) -> &'static str {
        score_label(self.score.overall)
    }
}

/// Band name for a 0-100 score
pub fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "Excellent",
        80..=89 => "Very Good",
        70..=79 => "Good",
        60..=69 => "Fair",
        50..=59 => "Below Average",
        _ => "Poor",
    }
}
