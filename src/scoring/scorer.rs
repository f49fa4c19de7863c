//! ATS scorer combining the four sub-scores

use crate::model::{ATSScore, ResumeData, ScoreBreakdown};
use crate::scoring::completeness::calculate_completeness_score;
use crate::scoring::content::calculate_content_score;
use crate::scoring::feedback::generate_personalized_feedback;
use crate::scoring::formatting::calculate_formatting_score;
use crate::scoring::keywords::{analyze_job_match, calculate_keyword_score, score_job_match, JobMatch};
use crate::scoring::rules::SubScore;
use log::debug;
use serde::{Deserialize, Serialize};

/// Weights of the four sub-scores in the overall score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub formatting: f64,
    pub keywords: f64,
    pub content: f64,
    pub completeness: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            formatting: 0.25,
            keywords: 0.30,
            content: 0.25,
            completeness: 0.20,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.formatting + self.keywords + self.content + self.completeness
    }

    /// Weighted sum of the breakdown, rounded and clamped to `[0, 100]`
    pub fn combine(&self, breakdown: &ScoreBreakdown) -> u8 {
        let weighted = breakdown.formatting as f64 * self.formatting
            + breakdown.keywords as f64 * self.keywords
            + breakdown.content as f64 * self.content
            + breakdown.completeness as f64 * self.completeness;
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// A score together with the rule hits that produced each sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreExplanation {
    pub score: ATSScore,
    pub formatting: SubScore,
    pub keywords: SubScore,
    pub content: SubScore,
    pub completeness: SubScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_match: Option<JobMatch>,
}

/// Stateless resume scorer; every call computes a fresh result
#[derive(Debug, Clone, Default)]
pub struct AtsScorer {
    weights: ScoringWeights,
}

impl AtsScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a resume, optionally against a job description
    pub fn score(&self, resume: &ResumeData, job_description: Option<&str>) -> ATSScore {
        self.explain(resume, job_description).score
    }

    /// Score a resume and keep every fired rule
    pub fn explain(&self, resume: &ResumeData, job_description: Option<&str>) -> ScoreExplanation {
        let formatting = calculate_formatting_score(resume);
        let job_match = job_description.and_then(|jd| analyze_job_match(resume, jd));
        let keywords = match &job_match {
            Some(job_match) => score_job_match(job_match),
            None => calculate_keyword_score(resume),
        };
        let content = calculate_content_score(resume);
        let completeness = calculate_completeness_score(resume);

        debug!(
            "Sub-scores: formatting={} keywords={} content={} completeness={}",
            formatting.score, keywords.score, content.score, completeness.score
        );

        let breakdown = ScoreBreakdown {
            formatting: formatting.score,
            keywords: keywords.score,
            content: content.score,
            completeness: completeness.score,
        };
        let overall = self.weights.combine(&breakdown);
        let feedback = generate_personalized_feedback(resume, &breakdown, job_description, job_match.as_ref());

        debug!(
            "Overall score {} with {} suggestions",
            overall,
            feedback.suggestions.len()
        );

        ScoreExplanation {
            score: ATSScore {
                overall,
                breakdown,
                suggestions: feedback.suggestions,
                strengths: feedback.strengths,
                weaknesses: feedback.weaknesses,
            },
            formatting,
            keywords,
            content,
            completeness,
            job_match,
        }
    }
}

/// Score a resume with the default weights
pub fn calculate_ats_score(resume: &ResumeData, job_description: Option<&str>) -> ATSScore {
    AtsScorer::new().score(resume, job_description)
}
