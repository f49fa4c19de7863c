//! Optional rewriting of resume text through an external enhancer

use crate::model::ResumeData;
use crate::tips::ResumeSection;
use log::{debug, warn};
use std::future::Future;

/// Something that can rewrite one piece of resume text, typically an LLM client
pub trait ContentEnhancer {
    fn enhance(&self, section: ResumeSection, text: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

/// Resume with enhanced text plus per-field outcome counts
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancedResume {
    pub resume: ResumeData,
    pub enhanced: usize,
    pub fell_back: usize,
}

const ENHANCEMENT_TEMPLATE: &str = r#"Rewrite the following resume {section} text so it reads well to applicant tracking systems.
Start with a strong action verb, keep every fact and number, and add no new claims.
Answer with the rewritten text only.

<TEXT>
{text}
</TEXT>"#;

/// Prompt an LLM-backed enhancer can send for one field
pub fn build_prompt(section: ResumeSection, text: &str) -> String {
    ENHANCEMENT_TEMPLATE
        .replace("{section}", &section.to_string().to_lowercase())
        .replace("{text}", text.trim())
}

async fn attempt<E: ContentEnhancer>(enhancer: &E, section: ResumeSection, text: &str) -> Option<String> {
    match enhancer.enhance(section, text).await {
        Ok(answer) if !answer.trim().is_empty() => Some(answer.trim().to_string()),
        Ok(_) => {
            warn!("Enhancer returned an empty answer for {} text, keeping original", section);
            None
        }
        Err(e) => {
            warn!("Enhancement of {} text failed, keeping original: {:#}", section, e);
            None
        }
    }
}

/// Single attempt; any failure or blank answer yields the original text
pub async fn enhance_or_original<E: ContentEnhancer>(enhancer: &E, section: ResumeSection, text: &str) -> String {
    attempt(enhancer, section, text)
        .await
        .unwrap_or_else(|| text.to_string())
}

/// Enhance every experience bullet and project description. Each field is
/// attempted once and falls back on its own; blank fields are left alone.
pub async fn enhance_resume<E: ContentEnhancer>(enhancer: &E, resume: &ResumeData) -> EnhancedResume {
    let mut result = EnhancedResume {
        resume: resume.clone(),
        enhanced: 0,
        fell_back: 0,
    };

    for experience in &mut result.resume.experience {
        for bullet in experience
            .responsibilities
            .iter_mut()
            .chain(experience.achievements.iter_mut())
        {
            rewrite(enhancer, ResumeSection::Experience, bullet, &mut result.enhanced, &mut result.fell_back).await;
        }
    }

    for project in &mut result.resume.projects {
        rewrite(
            enhancer,
            ResumeSection::Projects,
            &mut project.description,
            &mut result.enhanced,
            &mut result.fell_back,
        )
        .await;
    }

    debug!(
        "Enhancement finished: {} field(s) changed, {} kept after failure",
        result.enhanced, result.fell_back
    );
    result
}

async fn rewrite<E: ContentEnhancer>(
    enhancer: &E,
    section: ResumeSection,
    field: &mut String,
    enhanced: &mut usize,
    fell_back: &mut usize,
) {
    if field.trim().is_empty() {
        return;
    }
    match attempt(enhancer, section, field).await {
        Some(answer) => {
            if answer != *field {
                *enhanced += 1;
                *field = answer;
            }
        }
        None => *fell_back += 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Experience, Project};
    use anyhow::anyhow;

    struct Shouting;

    impl ContentEnhancer for Shouting {
        async fn enhance(&self, _section: ResumeSection, text: &str) -> anyhow::Result<String> {
            Ok(text.to_uppercase())
        }
    }

    struct Offline;

    impl ContentEnhancer for Offline {
        async fn enhance(&self, _section: ResumeSection, _text: &str) -> anyhow::Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    struct Silent;

    impl ContentEnhancer for Silent {
        async fn enhance(&self, _section: ResumeSection, _text: &str) -> anyhow::Result<String> {
            Ok("   ".to_string())
        }
    }

    /// Fails on project text only
    struct ExperienceOnly;

    impl ContentEnhancer for ExperienceOnly {
        async fn enhance(&self, section: ResumeSection, text: &str) -> anyhow::Result<String> {
            match section {
                ResumeSection::Experience => Ok(format!("Led {}", text)),
                _ => Err(anyhow!("quota exceeded")),
            }
        }
    }

    fn resume() -> ResumeData {
        ResumeData {
            experience: vec![Experience {
                responsibilities: vec!["wrote reports".to_string(), " ".to_string()],
                achievements: vec!["cut costs by 10%".to_string()],
                ..Default::default()
            }],
            projects: vec![Project {
                title: "Ledger".to_string(),
                description: "accounting tool".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_enhance_or_original_success() {
        assert_eq!(enhance_or_original(&Shouting, ResumeSection::Experience, "led team").await, "LED TEAM");
    }

    #[tokio::test]
    async fn test_enhance_or_original_falls_back() {
        assert_eq!(enhance_or_original(&Offline, ResumeSection::Experience, "led team").await, "led team");
        assert_eq!(enhance_or_original(&Silent, ResumeSection::Projects, "a tool").await, "a tool");
    }

    #[tokio::test]
    async fn test_enhance_resume_counts() {
        let result = enhance_resume(&Shouting, &resume()).await;
        assert_eq!(result.enhanced, 3);
        assert_eq!(result.fell_back, 0);
        assert_eq!(result.resume.experience[0].responsibilities[0], "WROTE REPORTS");
        assert_eq!(result.resume.experience[0].responsibilities[1], " ");
        assert_eq!(result.resume.projects[0].description, "ACCOUNTING TOOL");
        assert_eq!(result.resume.projects[0].title, "Ledger");
    }

    #[tokio::test]
    async fn test_enhance_resume_offline_is_noop() {
        let original = resume();
        let result = enhance_resume(&Offline, &original).await;
        assert_eq!(result.resume, original);
        assert_eq!(result.enhanced, 0);
        assert_eq!(result.fell_back, 3);
    }

    #[tokio::test]
    async fn test_fallback_is_per_field() {
        let result = enhance_resume(&ExperienceOnly, &resume()).await;
        assert_eq!(result.enhanced, 2);
        assert_eq!(result.fell_back, 1);
        assert_eq!(result.resume.experience[0].achievements[0], "Led cut costs by 10%");
        assert_eq!(result.resume.projects[0].description, "accounting tool");
    }

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt(ResumeSection::PersonalInfo, "  hello  ");
        assert!(prompt.contains("resume personal info text"));
        assert!(prompt.contains("<TEXT>\nhello\n</TEXT>"));
    }
}
