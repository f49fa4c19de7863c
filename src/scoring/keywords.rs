//! Keyword sub-score, with and without a target job description

use crate::model::ResumeData;
use crate::scoring::lexicon::LEXICON;
use crate::scoring::rules::{Rule, SubScore, Tally};
use crate::scoring::text::{lexical_word_count, normalize, ranked_frequencies, ratio, tokenize_job_description};
use serde::{Deserialize, Serialize};

pub const ACTION_VERBS_USED: &str = "distinct action verbs";
pub const WEAK_PHRASES_USED: &str = "weak phrases";
pub const TECHNICAL_KEYWORDS_USED: &str = "technical keywords";
pub const QUANTIFIED_RESULTS: &str = "quantified results";
pub const LOW_DENSITY: &str = "keyword density below 2%";
pub const KEYWORD_STUFFING: &str = "keyword density above 15%";
pub const IMPORTANT_JD_KEYWORDS: &str = "important job keywords matched";
pub const JD_COVERAGE: &str = "job description coverage";

const ACTION_VERB_POINTS: usize = 2;
const ACTION_VERB_CAP: usize = 35;
const WEAK_PHRASE_PENALTY: usize = 3;
const TECHNICAL_POINTS: usize = 2;
const TECHNICAL_CAP: usize = 30;
const QUANTIFICATION_POINTS: usize = 4;
const QUANTIFICATION_CAP: usize = 35;

/// Maximum number of repeated job-description terms treated as important
pub const MAX_IMPORTANT_KEYWORDS: usize = 20;

/// Keyword measurements over the resume's bullet, description and skill text
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordFacts {
    pub action_verbs: usize,
    pub weak_phrases: usize,
    pub technical_keywords: usize,
    pub quantifications: usize,
    pub words: usize,
}

impl KeywordFacts {
    pub fn from_text(text: &str) -> Self {
        Self {
            action_verbs: LEXICON.distinct_action_verbs(text).len(),
            weak_phrases: LEXICON.count_weak_phrases(text),
            technical_keywords: LEXICON.distinct_technical_keywords(text).len(),
            quantifications: LEXICON.count_quantifications(text),
            words: lexical_word_count(text),
        }
    }

    /// Action verbs and technical keywords per word; `None` for empty text
    pub fn density(&self) -> Option<f64> {
        (self.words > 0).then(|| ratio(self.action_verbs + self.technical_keywords, self.words))
    }
}

pub const DENSITY_RULES: [Rule<KeywordFacts>; 2] = [
    Rule { label: LOW_DENSITY, delta: -10, applies: |f| f.density().map_or(false, |d| d < 0.02) },
    Rule { label: KEYWORD_STUFFING, delta: -5, applies: |f| f.density().map_or(false, |d| d > 0.15) },
];

/// Bullets, project descriptions and technologies, and skill items, lower-cased
pub fn keyword_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = resume.all_bullets();
    for project in &resume.projects {
        parts.push(&project.description);
        parts.extend(project.technologies.iter().map(|t| t.as_str()));
    }
    for skill in &resume.skills {
        parts.extend(skill.items.iter().map(|i| i.as_str()));
    }
    normalize(&parts.join("\n"))
}

/// Everything a recruiter's search could hit, lower-cased
pub fn resume_full_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = vec![resume.personal_info.full_name.as_str()];
    for exp in &resume.experience {
        parts.push(&exp.position);
        parts.push(&exp.company);
    }
    for project in &resume.projects {
        parts.push(&project.title);
    }
    for edu in &resume.education {
        parts.push(&edu.degree);
        parts.push(&edu.field);
        parts.push(&edu.institution);
    }
    for cert in &resume.certifications {
        parts.push(&cert.name);
    }
    let mut text = normalize(&parts.join("\n"));
    text.push('\n');
    text.push_str(&keyword_text(resume));
    text
}

/// Keyword score without a job description
pub fn calculate_keyword_score(resume: &ResumeData) -> SubScore {
    let facts = KeywordFacts::from_text(&keyword_text(resume));
    score_facts(&facts)
}

fn score_facts(facts: &KeywordFacts) -> SubScore {
    let mut tally = Tally::starting_at(0);
    tally.add(ACTION_VERBS_USED, (facts.action_verbs * ACTION_VERB_POINTS).min(ACTION_VERB_CAP) as i32);
    tally.add(WEAK_PHRASES_USED, -((facts.weak_phrases * WEAK_PHRASE_PENALTY) as i32));
    tally.add(
        TECHNICAL_KEYWORDS_USED,
        (facts.technical_keywords * TECHNICAL_POINTS).min(TECHNICAL_CAP) as i32,
    );
    tally.add(
        QUANTIFIED_RESULTS,
        (facts.quantifications * QUANTIFICATION_POINTS).min(QUANTIFICATION_CAP) as i32,
    );
    tally.apply(&DENSITY_RULES, facts);
    tally.finish()
}

/// Terms extracted from a job description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobKeywords {
    /// Repeated terms, most frequent first
    pub important: Vec<String>,
    /// Every distinct usable term in order of first appearance
    pub all: Vec<String>,
}

impl JobKeywords {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

pub fn extract_job_keywords(job_description: &str) -> JobKeywords {
    let tokens = tokenize_job_description(job_description, |t| LEXICON.is_stop_word(t));
    let ranked = ranked_frequencies(&tokens);

    let important = ranked
        .iter()
        .filter(|(_, count)| *count > 1)
        .take(MAX_IMPORTANT_KEYWORDS)
        .map(|(token, _)| token.clone())
        .collect();

    let mut all: Vec<String> = Vec::with_capacity(ranked.len());
    for token in &tokens {
        if !all.contains(token) {
            all.push(token.clone());
        }
    }

    JobKeywords { important, all }
}

/// How a resume covers the terms of a job description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobMatch {
    pub keywords: JobKeywords,
    pub matched_important: Vec<String>,
    pub missing_important: Vec<String>,
    pub matched_total: usize,
}

impl JobMatch {
    pub fn important_coverage(&self) -> f64 {
        if self.keywords.important.is_empty() {
            self.coverage()
        } else {
            ratio(self.matched_important.len(), self.keywords.important.len())
        }
    }

    pub fn coverage(&self) -> f64 {
        ratio(self.matched_total, self.keywords.all.len())
    }
}

/// Substring coverage of job terms in the resume; `None` when the job
/// description yields no usable terms
pub fn analyze_job_match(resume: &ResumeData, job_description: &str) -> Option<JobMatch> {
    let keywords = extract_job_keywords(job_description);
    if keywords.is_empty() {
        return None;
    }

    let text = resume_full_text(resume);
    let (matched_important, missing_important): (Vec<String>, Vec<String>) = keywords
        .important
        .iter()
        .cloned()
        .partition(|k| text.contains(k.as_str()));
    let matched_total = keywords.all.iter().filter(|k| text.contains(k.as_str())).count();

    Some(JobMatch {
        keywords,
        matched_important,
        missing_important,
        matched_total,
    })
}

/// Keyword score against a job description, falling back to
/// [`calculate_keyword_score`] when the description has no usable terms
pub fn calculate_keyword_score_with_jd(resume: &ResumeData, job_description: &str) -> SubScore {
    match analyze_job_match(resume, job_description) {
        Some(job_match) => score_job_match(&job_match),
        None => {
            log::debug!("Job description has no usable keywords, scoring without it");
            calculate_keyword_score(resume)
        }
    }
}

/// 60% important-term coverage plus 40% overall coverage
pub fn score_job_match(job_match: &JobMatch) -> SubScore {
    let important = 60.0 * job_match.important_coverage();
    let total = (important + 40.0 * job_match.coverage()).round() as i32;
    let important = important.round() as i32;

    let mut tally = Tally::starting_at(0);
    tally.add(IMPORTANT_JD_KEYWORDS, important);
    tally.add(JD_COVERAGE, total - important);
    tally.finish()
}
