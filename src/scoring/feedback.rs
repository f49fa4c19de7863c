//! Natural-language feedback derived from the sub-scores

use crate::model::{is_present, ResumeData, ScoreBreakdown};
use crate::scoring::keywords::JobMatch;
use crate::scoring::lexicon::LEXICON;
use crate::scoring::text::{first_word, normalize};

pub const FORMATTING_THRESHOLD: u8 = 80;
pub const KEYWORDS_THRESHOLD: u8 = 70;
pub const CONTENT_THRESHOLD: u8 = 75;
pub const COMPLETENESS_THRESHOLD: u8 = 80;
pub const JD_KEYWORDS_THRESHOLD: u8 = 80;

/// Missing job terms quoted in the tailoring suggestion
const MISSING_TERMS_SHOWN: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

/// Counts re-derived from the bullet text for use in feedback sentences
#[derive(Debug, Clone, PartialEq)]
struct BulletStats {
    bullets: usize,
    action_openers: usize,
    action_verbs: usize,
    weak_phrases: usize,
    quantifications: usize,
}

impl BulletStats {
    fn from_resume(resume: &ResumeData) -> Self {
        let bullets = resume.all_bullets();
        let text = normalize(&bullets.join("\n"));
        let action_openers = bullets
            .iter()
            .filter(|b| first_word(b).map_or(false, |w| LEXICON.is_action_verb(&w)))
            .count();

        Self {
            bullets: bullets.len(),
            action_openers,
            action_verbs: LEXICON.distinct_action_verbs(&text).len(),
            weak_phrases: LEXICON.count_weak_phrases(&text),
            quantifications: LEXICON.count_quantifications(&text),
        }
    }

    fn action_opener_percent(&self) -> usize {
        if self.bullets == 0 {
            0
        } else {
            ((self.action_openers as f64 / self.bullets as f64) * 100.0).round() as usize
        }
    }
}

/// Build suggestions, strengths and weaknesses in formatting, keywords,
/// content, completeness order, followed by the job-description tail
pub fn generate_personalized_feedback(
    resume: &ResumeData,
    breakdown: &ScoreBreakdown,
    job_description: Option<&str>,
    job_match: Option<&JobMatch>,
) -> Feedback {
    let stats = BulletStats::from_resume(resume);
    let mut feedback = Feedback::default();

    formatting_feedback(&mut feedback, breakdown.formatting, &stats);
    keyword_feedback(&mut feedback, breakdown.keywords, &stats);
    content_feedback(&mut feedback, breakdown.content, resume, &stats);
    completeness_feedback(&mut feedback, breakdown.completeness, resume);

    if job_description.is_some() && breakdown.keywords < JD_KEYWORDS_THRESHOLD {
        let missing: Vec<&str> = job_match
            .map(|m| m.missing_important.iter().take(MISSING_TERMS_SHOWN).map(|s| s.as_str()).collect())
            .unwrap_or_default();
        if missing.is_empty() {
            feedback.suggestions.push(
                "Tailor your resume to this job description: mirror its key terms in your skills and experience sections."
                    .to_string(),
            );
        } else {
            feedback.suggestions.push(format!(
                "Tailor your resume to this job description: it repeatedly mentions {} which your resume does not.",
                missing.join(", ")
            ));
        }
    }

    feedback
}

fn formatting_feedback(feedback: &mut Feedback, score: u8, stats: &BulletStats) {
    if score >= FORMATTING_THRESHOLD {
        feedback.strengths.push("Clean, ATS-friendly structure and formatting".to_string());
        return;
    }

    feedback
        .weaknesses
        .push(format!("Formatting may trip up ATS parsers (formatting score {}/100)", score));

    if stats.bullets < 5 {
        feedback.suggestions.push(format!(
            "Add more bullet points: you have {}, aim for 3-6 per role describing what you did and the result.",
            stats.bullets
        ));
    }
    if stats.bullets > 0 && stats.action_openers * 2 < stats.bullets {
        feedback.suggestions.push(format!(
            "Only {}% of your bullet points start with strong action verbs. Open each one with a verb like \"Led\", \"Built\" or \"Optimized\".",
            stats.action_opener_percent()
        ));
    }
    feedback.suggestions.push(
        "Use one date format throughout (for example \"Jan 2020\") and double-check your email and phone number."
            .to_string(),
    );
}

fn keyword_feedback(feedback: &mut Feedback, score: u8, stats: &BulletStats) {
    if score >= KEYWORDS_THRESHOLD {
        feedback.strengths.push(format!(
            "Strong keyword profile with {} distinct action verbs and {} quantified results",
            stats.action_verbs, stats.quantifications
        ));
        return;
    }

    feedback
        .weaknesses
        .push(format!("Keyword coverage is low for ATS matching (keyword score {}/100)", score));

    if stats.quantifications < 3 {
        feedback.suggestions.push(format!(
            "Quantify your impact: only {} measurable result(s) found. Add percentages, dollar amounts, user counts or time saved.",
            stats.quantifications
        ));
    }
    if stats.weak_phrases > 0 {
        feedback.suggestions.push(format!(
            "Replace {} weak phrase(s) such as \"responsible for\" or \"helped\" with specific action verbs.",
            stats.weak_phrases
        ));
    }
    feedback.suggestions.push(
        "Name the concrete tools, languages and platforms you used so keyword searches can find you.".to_string(),
    );
}

fn content_feedback(feedback: &mut Feedback, score: u8, resume: &ResumeData, stats: &BulletStats) {
    if score >= CONTENT_THRESHOLD {
        feedback.strengths.push("Detailed, achievement-focused content".to_string());
        return;
    }

    feedback
        .weaknesses
        .push(format!("Content lacks depth or measurable achievements (content score {}/100)", score));

    let roles_without_achievements = resume
        .experience
        .iter()
        .filter(|e| e.has_responsibilities() && !e.has_achievements())
        .count();
    if roles_without_achievements > 0 {
        feedback.suggestions.push(format!(
            "{} role(s) list duties but no achievements. Add at least one concrete result to each.",
            roles_without_achievements
        ));
    }
    if stats.quantifications == 0 && stats.bullets > 0 {
        feedback
            .suggestions
            .push("None of your bullet points include a number. Back up your claims with metrics.".to_string());
    }
    feedback.suggestions.push(
        "Write bullet points of 8-40 words that state the action, the scope and the outcome.".to_string(),
    );
}

fn completeness_feedback(feedback: &mut Feedback, score: u8, resume: &ResumeData) {
    if score >= COMPLETENESS_THRESHOLD {
        feedback.strengths.push("Complete resume with all key sections".to_string());
        return;
    }

    feedback
        .weaknesses
        .push(format!("Resume is missing sections or contact details (completeness score {}/100)", score));

    let info = &resume.personal_info;
    if !is_present(&info.linkedin) {
        feedback.suggestions.push("Add your LinkedIn profile URL.".to_string());
    }
    if !is_present(&info.github) && !is_present(&info.website) {
        feedback.suggestions.push("Link a GitHub profile or portfolio website.".to_string());
    }
    let skills = resume.total_skill_items();
    if skills < 5 {
        feedback.suggestions.push(format!(
            "List at least 5 relevant skills: you currently have {}.",
            skills
        ));
    }
    if resume.experience.is_empty() {
        feedback
            .suggestions
            .push("Add your work experience, including internships and freelance work.".to_string());
    }
    if resume.projects.is_empty() {
        feedback
            .suggestions
            .push("Add one or two projects that show your skills in practice.".to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Experience;

    fn breakdown(formatting: u8, keywords: u8, content: u8, completeness: u8) -> ScoreBreakdown {
        ScoreBreakdown {
            formatting,
            keywords,
            content,
            completeness,
        }
    }

    #[test]
    fn test_all_strong() {
        let feedback = generate_personalized_feedback(&ResumeData::default(), &breakdown(90, 90, 90, 90), None, None);
        assert_eq!(feedback.strengths.len(), 4);
        assert!(feedback.weaknesses.is_empty());
        assert!(feedback.suggestions.is_empty());
    }

    #[test]
    fn test_action_verb_percentage_in_suggestion() {
        let resume = ResumeData {
            experience: vec![Experience {
                responsibilities: vec![
                    "Led the migration".to_string(),
                    "Did the reporting".to_string(),
                    "Wrote documentation".to_string(),
                    "Was on call".to_string(),
                ],
                ..Default::default()
            }],
            ..Default::default()
        };
        let feedback = generate_personalized_feedback(&resume, &breakdown(60, 90, 90, 90), None, None);
        assert_eq!(feedback.weaknesses.len(), 1);
        assert!(feedback
            .suggestions
            .iter()
            .any(|s| s.starts_with("Only 25% of your bullet points")));
        assert!(feedback.suggestions[0].contains("you have 4"));
    }

    #[test]
    fn test_weaknesses_follow_category_order() {
        let feedback = generate_personalized_feedback(&ResumeData::default(), &breakdown(10, 10, 10, 10), None, None);
        assert_eq!(feedback.weaknesses.len(), 4);
        assert!(feedback.weaknesses[0].contains("formatting score"));
        assert!(feedback.weaknesses[1].contains("keyword score"));
        assert!(feedback.weaknesses[2].contains("content score"));
        assert!(feedback.weaknesses[3].contains("completeness score"));
    }

    #[test]
    fn test_job_description_tail() {
        let job_match = JobMatch {
            missing_important: vec!["kubernetes".to_string(), "terraform".to_string()],
            ..Default::default()
        };
        let feedback = generate_personalized_feedback(
            &ResumeData::default(),
            &breakdown(90, 75, 90, 90),
            Some("kubernetes kubernetes terraform terraform"),
            Some(&job_match),
        );
        let last = feedback.suggestions.last().unwrap();
        assert!(last.contains("kubernetes, terraform"));

        // No tail without a job description
        let feedback = generate_personalized_feedback(&ResumeData::default(), &breakdown(90, 75, 90, 90), None, None);
        assert!(feedback.suggestions.is_empty());
    }
}
