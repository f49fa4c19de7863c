//! ATS resume scorer library

pub mod cli;
pub mod config;
pub mod enhance;
pub mod error;
pub mod input;
pub mod model;
pub mod output;
pub mod scoring;
pub mod tips;

pub use config::Config;
pub use error::{AtsScorerError, Result};
pub use model::{ATSScore, ResumeData, ScoreBreakdown};
pub use scoring::{calculate_ats_score, AtsScorer, ScoringWeights};
pub use tips::{generate_enhancement_tips, EnhancementTip};
