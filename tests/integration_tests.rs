//! Integration tests for the ATS scorer

use ats_scorer::enhance::{enhance_resume, ContentEnhancer};
use ats_scorer::input::InputManager;
use ats_scorer::model::{Certification, PersonalInfo, ResumeData, SkillCategory};
use ats_scorer::output::{ReportGenerator, ReportMetadata, ScoreReport};
use ats_scorer::scoring::keywords::{calculate_keyword_score, calculate_keyword_score_with_jd};
use ats_scorer::tips::{ResumeSection, TipCategory};
use ats_scorer::{calculate_ats_score, generate_enhancement_tips, AtsScorer, AtsScorerError};
use ats_scorer::config::OutputFormat;
use std::path::Path;

async fn load(name: &str) -> ResumeData {
    let mut manager = InputManager::new();
    manager
        .load_resume(&Path::new("tests/fixtures").join(name))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_load_resume_from_json() {
    let resume = load("sample_resume.json").await;
    assert_eq!(resume.personal_info.full_name, "Alex Morgan");
    assert_eq!(resume.experience.len(), 2);
    assert_eq!(resume.skills.len(), 3);
    assert_eq!(resume.certifications[0].credential_id.as_deref(), Some("AWS-SAA-4821"));
}

#[tokio::test]
async fn test_broken_resume_is_invalid_input() {
    let mut manager = InputManager::new();
    let result = manager.load_resume(Path::new("tests/fixtures/broken_resume.json")).await;
    assert!(matches!(result, Err(AtsScorerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_null_fields_are_treated_as_absent() {
    let resume = load("null_fields_resume.json").await;
    assert_eq!(resume.personal_info.phone, "");
    assert_eq!(resume.experience[0].end_date, "");
    assert!(resume.experience[0].achievements.is_empty());
    assert!(resume.projects.is_empty());
    assert!(resume.skills.is_empty());

    let score = calculate_ats_score(&resume, None);
    assert!(score.overall <= 100);
}

#[tokio::test]
async fn test_resume_must_be_json() {
    let mut manager = InputManager::new();
    let result = manager.load_resume(Path::new("tests/fixtures/job.txt")).await;
    assert!(matches!(result, Err(AtsScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let text = manager.extract_text(Path::new("tests/fixtures/job.txt")).await.unwrap();
    assert!(text.contains("Senior Backend Engineer"));
    assert!(text.contains("Kafka and Terraform"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let text = manager.extract_text(Path::new("tests/fixtures/job.md")).await.unwrap();
    assert!(text.contains("Senior Backend Engineer"));
    assert!(text.contains("Kubernetes and Terraform"));
    // Markdown syntax is stripped
    assert!(!text.contains("**"));
    assert!(!text.contains('#'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/job.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_can_be_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager.extract_text(Path::new("tests/fixtures/job.txt")).await.unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/unsupported.xyz")).await;
    assert!(matches!(result, Err(AtsScorerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let result = manager.extract_text(Path::new("tests/fixtures/missing.txt")).await;
    assert!(matches!(result, Err(AtsScorerError::InvalidInput(_))));
}

#[test]
fn test_resumes_without_entries_hit_floors() {
    let resumes = [
        ResumeData::default(),
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Jane Roe".to_string(),
                email: "jane@example.com".to_string(),
                phone: "555-123-4567".to_string(),
                linkedin: Some("linkedin.com/in/janeroe".to_string()),
                ..Default::default()
            },
            certifications: vec![Certification {
                name: "CKA".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        },
    ];
    for resume in &resumes {
        let score = calculate_ats_score(resume, None);
        assert_eq!(score.breakdown.formatting, 20);
        assert_eq!(score.breakdown.content, 15);
    }
}

#[tokio::test]
async fn test_overall_in_range() {
    let mut maximal = load("sample_resume.json").await;
    maximal.skills.push(SkillCategory {
        category: "More".to_string(),
        items: (0..40).map(|i| format!("tool-{}", i)).collect(),
    });
    let inputs = [ResumeData::default(), load("scenario_resume.json").await, load("sample_resume.json").await, maximal];
    let jd = std::fs::read_to_string("tests/fixtures/job.txt").unwrap();

    for resume in &inputs {
        for job in [None, Some(jd.as_str())] {
            let score = calculate_ats_score(resume, job);
            assert!(score.overall <= 100);
            for sub in [
                score.breakdown.formatting,
                score.breakdown.keywords,
                score.breakdown.content,
                score.breakdown.completeness,
            ] {
                assert!(sub <= 100);
            }
        }
    }
}

#[tokio::test]
async fn test_quantified_bullet_never_lowers_scores() {
    for fixture in ["scenario_resume.json", "sample_resume.json"] {
        let base = load(fixture).await;
        let before = calculate_ats_score(&base, None);

        let mut appended = base.clone();
        appended.experience[0].responsibilities[0].push_str(" by 40%");

        let mut added = base.clone();
        added.experience[0]
            .responsibilities
            .push("Reduced reporting time for 12 regional managers by 40%".to_string());

        for changed in [appended, added] {
            let after = calculate_ats_score(&changed, None);
            assert!(after.breakdown.content >= before.breakdown.content, "{}", fixture);
            assert!(after.breakdown.keywords >= before.breakdown.keywords, "{}", fixture);
            assert!(after.overall >= before.overall, "{}", fixture);
        }
    }
}

#[tokio::test]
async fn test_stopword_job_description_falls_back() {
    let resume = load("sample_resume.json").await;
    let jd = "We are looking for the team with ability to work. Are you? Can we? Yes.";

    assert_eq!(calculate_keyword_score_with_jd(&resume, jd), calculate_keyword_score(&resume));

    let with_jd = calculate_ats_score(&resume, Some(jd));
    let without = calculate_ats_score(&resume, None);
    assert_eq!(with_jd.breakdown, without.breakdown);
    assert_eq!(with_jd.overall, without.overall);
}

#[tokio::test]
async fn test_linkedin_worth_five_completeness_points() {
    let without = load("scenario_resume.json").await;
    let mut with = without.clone();
    with.personal_info.linkedin = Some("linkedin.com/in/janeroe".to_string());

    let a = calculate_ats_score(&with, None).breakdown.completeness;
    let b = calculate_ats_score(&without, None).breakdown.completeness;
    assert_eq!(a - b, 5);
}

#[tokio::test]
async fn test_pinned_scenario() {
    let resume = load("scenario_resume.json").await;
    let score = calculate_ats_score(&resume, None);

    assert_eq!(score.breakdown.formatting, 75);
    assert_eq!(score.breakdown.keywords, 0);
    assert_eq!(score.breakdown.content, 69);
    assert_eq!(score.breakdown.completeness, 45);
    assert_eq!(score.overall, 45);
    assert_eq!(score.weaknesses.len(), 4);
    assert!(score.strengths.is_empty());
}

#[tokio::test]
async fn test_scoring_is_idempotent() {
    let resume = load("sample_resume.json").await;
    let jd = std::fs::read_to_string("tests/fixtures/job.txt").unwrap();
    assert_eq!(calculate_ats_score(&resume, Some(&jd)), calculate_ats_score(&resume, Some(&jd)));

    let a = serde_json::to_string(&calculate_ats_score(&resume, None)).unwrap();
    let b = serde_json::to_string(&calculate_ats_score(&resume, None)).unwrap();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_job_description_match() {
    let resume = load("sample_resume.json").await;
    let mut manager = InputManager::new();
    let jd = manager.extract_text(Path::new("tests/fixtures/job.txt")).await.unwrap();

    let explanation = AtsScorer::new().explain(&resume, Some(&jd));
    let job_match = explanation.job_match.expect("job terms extracted");
    assert!(job_match.matched_important.iter().any(|k| k == "rust"));
    assert!(job_match.matched_important.iter().any(|k| k == "kubernetes"));
    assert!(job_match.keywords.important.len() <= 20);
}

#[tokio::test]
async fn test_sample_resume_tips() {
    let resume = load("sample_resume.json").await;
    let tips = generate_enhancement_tips(&resume);

    assert!(tips.iter().all(|t| t.category != TipCategory::Critical));
    assert!(tips
        .iter()
        .any(|t| t.section == ResumeSection::Experience && t.issue.contains("weak phrases")));
    for pair in tips.windows(2) {
        assert!((pair[0].category, pair[0].impact) <= (pair[1].category, pair[1].impact));
    }
}

#[tokio::test]
async fn test_every_format_renders() {
    let resume = load("sample_resume.json").await;
    let scorer = AtsScorer::new();
    let report = ScoreReport::new(
        scorer.explain(&resume, None),
        generate_enhancement_tips(&resume),
        true,
        ReportMetadata::new("tests/fixtures/sample_resume.json", None, *scorer.weights()),
    );
    let generator = ReportGenerator::with_options(false, true, true, true, true);

    for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown, OutputFormat::Html] {
        let output = generator.generate_report(&report, &format).unwrap();
        assert!(output.contains(&report.score.overall.to_string()));
    }
}

struct Echo;

impl ContentEnhancer for Echo {
    async fn enhance(&self, _section: ResumeSection, text: &str) -> anyhow::Result<String> {
        Ok(text.to_string())
    }
}

#[tokio::test]
async fn test_identity_enhancer_keeps_score() {
    let resume = load("sample_resume.json").await;
    let result = enhance_resume(&Echo, &resume).await;
    assert_eq!(result.enhanced, 0);
    assert_eq!(result.fell_back, 0);
    assert_eq!(calculate_ats_score(&result.resume, None), calculate_ats_score(&resume, None));
}
