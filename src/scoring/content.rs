//! Content sub-score: bullet quality, project depth, skill coverage

use crate::model::{word_count, Experience, Project, ResumeData};
use crate::scoring::lexicon::LEXICON;
use crate::scoring::rules::{Rule, SubScore, Tally};
use once_cell::sync::Lazy;
use regex::Regex;

pub const NO_CONTENT: &str = "no experience, projects or skills";
pub const SHORT_BULLET: &str = "bullet under 8 words";
pub const LONG_BULLET: &str = "bullet over 40 words";
pub const WEAK_OPENER: &str = "bullet opens with a weak phrase";
pub const PASSIVE_VOICE: &str = "bullet uses passive voice";
pub const QUANTIFIED_BULLET: &str = "bullet includes a number";
pub const NO_ACHIEVEMENTS: &str = "role lists duties but no achievements";
pub const BALANCED_ROLE: &str = "role lists duties and achievements";
pub const SHORT_DESCRIPTION: &str = "project description under 10 words";
pub const FOCUSED_DESCRIPTION: &str = "project description of 10-40 words";
pub const NO_TECHNOLOGIES: &str = "project lists no technologies";
pub const RICH_STACK: &str = "project lists 3+ technologies";
pub const NO_HIGHLIGHTS: &str = "project has no highlights";
pub const SEVERAL_HIGHLIGHTS: &str = "project has 2+ highlights";
pub const PROJECT_LINK: &str = "project links to a demo or repository";
pub const NO_SKILLS: &str = "no skills listed";
pub const FEW_SKILLS: &str = "fewer than 5 skills";
pub const BALANCED_SKILLS: &str = "10-20 skills";
pub const TOO_MANY_SKILLS: &str = "more than 30 skills";
pub const CATEGORIZED_SKILLS: &str = "skills grouped into categories";

/// Score returned when there is nothing to judge content on
pub const EMPTY_CONTENT_SCORE: u8 = 15;

static PASSIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(was|were|been|being)\s+\w+ed\b").expect("Invalid passive voice regex"));

#[derive(Debug, Clone, PartialEq)]
pub struct BulletFacts {
    pub words: usize,
    pub weak_opener: bool,
    pub passive: bool,
    pub has_digit: bool,
}

impl BulletFacts {
    pub fn from_bullet(bullet: &str) -> Self {
        Self {
            words: word_count(bullet),
            weak_opener: LEXICON.starts_with_weak_phrase(bullet),
            passive: PASSIVE_RE.is_match(bullet),
            has_digit: bullet.chars().any(|c| c.is_ascii_digit()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillFacts {
    pub categories: usize,
    pub items: usize,
}

pub const BULLET_RULES: [Rule<BulletFacts>; 5] = [
    Rule { label: SHORT_BULLET, delta: -3, applies: |b| b.words < 8 },
    Rule { label: LONG_BULLET, delta: -2, applies: |b| b.words > 40 },
    Rule { label: WEAK_OPENER, delta: -2, applies: |b| b.weak_opener },
    Rule { label: PASSIVE_VOICE, delta: -1, applies: |b| b.passive },
    Rule { label: QUANTIFIED_BULLET, delta: 1, applies: |b| b.has_digit },
];

pub const EXPERIENCE_RULES: [Rule<Experience>; 2] = [
    Rule { label: NO_ACHIEVEMENTS, delta: -5, applies: |e| !e.has_achievements() && e.has_responsibilities() },
    Rule { label: BALANCED_ROLE, delta: 2, applies: |e| e.has_achievements() && e.has_responsibilities() },
];

fn technology_count(project: &Project) -> usize {
    project.technologies.iter().filter(|t| !t.trim().is_empty()).count()
}

pub const PROJECT_RULES: [Rule<Project>; 7] = [
    Rule { label: SHORT_DESCRIPTION, delta: -4, applies: |p| word_count(&p.description) < 10 },
    Rule { label: FOCUSED_DESCRIPTION, delta: 2, applies: |p| (10..=40).contains(&word_count(&p.description)) },
    Rule { label: NO_TECHNOLOGIES, delta: -5, applies: |p| technology_count(p) == 0 },
    Rule { label: RICH_STACK, delta: 2, applies: |p| technology_count(p) >= 3 },
    Rule { label: NO_HIGHLIGHTS, delta: -3, applies: |p| p.highlight_count() == 0 },
    Rule { label: SEVERAL_HIGHLIGHTS, delta: 2, applies: |p| p.highlight_count() >= 2 },
    Rule { label: PROJECT_LINK, delta: 2, applies: |p| p.has_link() },
];

pub const SKILL_RULES: [Rule<SkillFacts>; 5] = [
    Rule { label: NO_SKILLS, delta: -20, applies: |s| s.categories == 0 },
    Rule { label: FEW_SKILLS, delta: -15, applies: |s| s.categories > 0 && s.items < 5 },
    Rule { label: BALANCED_SKILLS, delta: 5, applies: |s| (10..=20).contains(&s.items) },
    Rule { label: TOO_MANY_SKILLS, delta: -5, applies: |s| s.items > 30 },
    Rule { label: CATEGORIZED_SKILLS, delta: 3, applies: |s| s.categories > 1 },
];

pub fn calculate_content_score(resume: &ResumeData) -> SubScore {
    if resume.experience.is_empty() && resume.projects.is_empty() && resume.skills.is_empty() {
        return SubScore::floor(EMPTY_CONTENT_SCORE, NO_CONTENT);
    }

    let mut tally = Tally::starting_at(100);

    let bullets: Vec<BulletFacts> = resume
        .experience_bullets()
        .into_iter()
        .map(BulletFacts::from_bullet)
        .collect();
    tally.apply_each(&BULLET_RULES, &bullets);
    tally.apply_each(&EXPERIENCE_RULES, &resume.experience);
    tally.apply_each(&PROJECT_RULES, &resume.projects);

    let skills = SkillFacts {
        categories: resume.skills.len(),
        items: resume.total_skill_items(),
    };
    tally.apply(&SKILL_RULES, &skills);

    tally.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SkillCategory;

    fn experience(responsibilities: &[&str], achievements: &[&str]) -> Experience {
        Experience {
            company: "Acme".to_string(),
            position: "Engineer".to_string(),
            responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
            achievements: achievements.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn skills(n: usize, categories: usize) -> Vec<SkillCategory> {
        (0..categories)
            .map(|c| SkillCategory {
                category: format!("Category {}", c),
                items: (0..n / categories).map(|i| format!("skill-{}-{}", c, i)).collect(),
            })
            .collect()
    }

    #[test]
    fn test_empty_floor() {
        let sub = calculate_content_score(&ResumeData::default());
        assert_eq!(sub.score, EMPTY_CONTENT_SCORE);
        assert!(sub.fired(NO_CONTENT));
    }

    #[test]
    fn test_bullet_facts() {
        let facts = BulletFacts::from_bullet("Responsible for the reports that were generated weekly by 3 teams");
        assert!(facts.weak_opener);
        assert!(facts.passive);
        assert!(facts.has_digit);
        assert_eq!(facts.words, 11);
    }

    #[test]
    fn test_short_duties_without_achievements() {
        let resume = ResumeData {
            experience: vec![experience(&["Wrote code for the app", "Fixed bugs in production"], &[])],
            ..Default::default()
        };
        let sub = calculate_content_score(&resume);
        // 2 short bullets, duties without achievements, no skills
        assert_eq!(sub.score, 100 - 6 - 5 - 20);
        let short = sub.hits.iter().find(|h| h.label == SHORT_BULLET).unwrap();
        assert_eq!(short.count, 2);
    }

    #[test]
    fn test_strong_resume_caps_at_100() {
        let resume = ResumeData {
            experience: vec![experience(
                &["Designed and shipped the event ingestion pipeline serving 40 internal teams"],
                &["Reduced infrastructure spend by 25% through rightsizing every production cluster"],
            )],
            projects: vec![Project {
                title: "Ledger".to_string(),
                description: "A double-entry bookkeeping engine with audit trails and reconciliation reports for small businesses".to_string(),
                technologies: vec!["Rust".to_string(), "Postgres".to_string(), "Axum".to_string()],
                highlights: vec!["Handles 2k tx/s".to_string(), "Fully audited".to_string()],
                github: Some("github.com/jane/ledger".to_string()),
                ..Default::default()
            }],
            skills: skills(12, 3),
            ..Default::default()
        };
        let sub = calculate_content_score(&resume);
        assert_eq!(sub.score, 100);
        assert!(sub.fired(BALANCED_ROLE));
        assert!(sub.fired(PROJECT_LINK));
        assert!(sub.fired(BALANCED_SKILLS));
    }

    #[test]
    fn test_bare_project() {
        let resume = ResumeData {
            projects: vec![Project {
                title: "Todo".to_string(),
                description: "A todo app".to_string(),
                ..Default::default()
            }],
            skills: skills(4, 1),
            ..Default::default()
        };
        let sub = calculate_content_score(&resume);
        assert_eq!(sub.score, 100 - 4 - 5 - 3 - 15);
    }

    fn words(n: usize) -> String {
        (0..n)
            .map(|i| if i == 0 { "Built" } else { "services" })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// One achievement and six uncategorized skills fire no rule of their own
    fn single_bullet(bullet: &str) -> SubScore {
        calculate_content_score(&ResumeData {
            experience: vec![experience(&[], &[bullet])],
            skills: skills(6, 1),
            ..Default::default()
        })
    }

    fn project_tally(description: &str) -> SubScore {
        let project = Project {
            title: "Ledger".to_string(),
            description: description.to_string(),
            technologies: vec!["Rust".to_string()],
            highlights: vec!["Fully audited".to_string()],
            ..Default::default()
        };
        let mut tally = Tally::starting_at(50);
        tally.apply(&PROJECT_RULES, &project);
        tally.finish()
    }

    #[test]
    fn test_bullet_length_boundaries() {
        assert_eq!(single_bullet(&words(8)).score, 100);
        assert_eq!(single_bullet(&words(40)).score, 100);

        let short = single_bullet(&words(7));
        assert_eq!(short.score, 97);
        assert!(short.fired(SHORT_BULLET));

        let long = single_bullet(&words(41));
        assert_eq!(long.score, 98);
        assert!(long.fired(LONG_BULLET));
        assert!(!long.fired(SHORT_BULLET));
    }

    #[test]
    fn test_weak_opener_costs_two() {
        let sub = single_bullet("Helped the team migrate the billing service to new hardware");
        assert_eq!(sub.score, 98);
        assert!(sub.fired(WEAK_OPENER));
        assert!(!sub.fired(PASSIVE_VOICE));
    }

    #[test]
    fn test_passive_voice_costs_one() {
        let sub = single_bullet("The billing service was migrated to new hardware by the team");
        assert_eq!(sub.score, 99);
        assert!(sub.fired(PASSIVE_VOICE));
        assert!(!sub.fired(WEAK_OPENER));
    }

    #[test]
    fn test_project_description_boundaries() {
        let nine = project_tally(&words(9));
        assert_eq!(nine.score, 46);
        assert!(nine.fired(SHORT_DESCRIPTION));

        for n in [10, 40] {
            let focused = project_tally(&words(n));
            assert_eq!(focused.score, 52, "{} words", n);
            assert!(focused.fired(FOCUSED_DESCRIPTION));
        }

        let long = project_tally(&words(41));
        assert_eq!(long.score, 50);
        assert!(!long.fired(FOCUSED_DESCRIPTION));
        assert!(!long.fired(SHORT_DESCRIPTION));
    }

    #[test]
    fn test_skill_rules() {
        let mut tally = Tally::starting_at(0);
        tally.apply(&SKILL_RULES, &SkillFacts { categories: 0, items: 0 });
        assert_eq!(tally.total(), -20);

        let mut tally = Tally::starting_at(0);
        tally.apply(&SKILL_RULES, &SkillFacts { categories: 4, items: 32 });
        assert_eq!(tally.total(), -5 + 3);
    }
}
