//! Configuration management for the ATS scorer

use crate::error::{AtsScorerError, Result};
use crate::scoring::ScoringWeights;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub scoring: ScoringConfig,
    pub output: OutputConfig,
    pub tips: TipsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub formatting_weight: f64,
    pub keyword_weight: f64,
    pub content_weight: f64,
    pub completeness_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TipsConfig {
    /// Maximum tips shown per report, 0 shows all
    pub max_tips: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Console => "txt",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
        }
    }
}

const WEIGHT_TOLERANCE: f64 = 0.001;

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            formatting_weight: weights.formatting,
            keyword_weight: weights.keywords,
            content_weight: weights.content,
            completeness_weight: weights.completeness,
        }
    }
}

impl ScoringConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights {
            formatting: self.formatting_weight,
            keywords: self.keyword_weight,
            content: self.content_weight,
            completeness: self.completeness_weight,
        }
    }

    /// Weights must be non-negative and sum to 1.0
    pub fn validate(&self) -> Result<()> {
        let weights = self.weights();
        let named = [
            ("formatting_weight", weights.formatting),
            ("keyword_weight", weights.keywords),
            ("content_weight", weights.content),
            ("completeness_weight", weights.completeness),
        ];
        if let Some((name, value)) = named.iter().find(|(_, value)| *value < 0.0 || !value.is_finite()) {
            return Err(AtsScorerError::Configuration(format!(
                "scoring.{} must be a non-negative number, got {}",
                name, value
            )));
        }
        if (weights.sum() - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(AtsScorerError::Configuration(format!(
                "Scoring weights must sum to 1.0, got {:.3}",
                weights.sum()
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            tips: TipsConfig { max_tips: 10 },
        }
    }
}

impl Config {
    /// Load from `path`, writing defaults there on first use
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.scoring.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| AtsScorerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("ats-scorer")
            .join("config.toml")
    }

    /// Tips allowed in a report; `None` means unlimited
    pub fn tip_limit(&self) -> Option<usize> {
        match self.tips.max_tips {
            0 => None,
            n => Some(n),
        }
    }
}
