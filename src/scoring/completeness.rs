//! Completeness sub-score: which sections and contact details are present

use crate::model::{is_present, ResumeData};
use crate::scoring::formatting::is_valid_email;
use crate::scoring::rules::{Rule, SubScore, Tally};

pub const HAS_NAME: &str = "full name";
pub const HAS_EMAIL: &str = "valid email";
pub const HAS_PHONE: &str = "phone number";
pub const HAS_LOCATION: &str = "location";
pub const HAS_LINKEDIN: &str = "LinkedIn profile";
pub const HAS_PORTFOLIO: &str = "GitHub or website";
pub const HAS_EDUCATION: &str = "education section";
pub const COMPLETE_EDUCATION: &str = "education entries complete";
pub const HAS_EXPERIENCE: &str = "experience section";
pub const TWO_ROLES: &str = "two or more roles";
pub const THREE_ROLES: &str = "three or more roles";
pub const FIVE_SKILLS: &str = "five or more skills";
pub const SOME_SKILLS: &str = "skills (3 points each)";
pub const HAS_PROJECTS: &str = "projects section";
pub const TWO_PROJECTS: &str = "two or more projects";

const POINTS_PER_SKILL: usize = 3;

fn longer_than(value: &str, n: usize) -> bool {
    value.trim().chars().count() > n
}

pub const COMPLETENESS_RULES: [Rule<ResumeData>; 14] = [
    Rule { label: HAS_NAME, delta: 5, applies: |r| longer_than(&r.personal_info.full_name, 2) },
    Rule { label: HAS_EMAIL, delta: 5, applies: |r| is_valid_email(&r.personal_info.email) },
    Rule { label: HAS_PHONE, delta: 5, applies: |r| longer_than(&r.personal_info.phone, 9) },
    Rule {
        label: HAS_LOCATION,
        delta: 5,
        applies: |r| r.personal_info.location.as_deref().map_or(false, |l| longer_than(l, 2)),
    },
    Rule { label: HAS_LINKEDIN, delta: 5, applies: |r| is_present(&r.personal_info.linkedin) },
    Rule {
        label: HAS_PORTFOLIO,
        delta: 5,
        applies: |r| is_present(&r.personal_info.github) || is_present(&r.personal_info.website),
    },
    Rule { label: HAS_EDUCATION, delta: 15, applies: |r| !r.education.is_empty() },
    Rule {
        label: COMPLETE_EDUCATION,
        delta: 5,
        applies: |r| !r.education.is_empty() && r.education.iter().all(|e| e.is_complete()),
    },
    Rule { label: HAS_EXPERIENCE, delta: 10, applies: |r| !r.experience.is_empty() },
    Rule { label: TWO_ROLES, delta: 8, applies: |r| r.experience.len() >= 2 },
    Rule { label: THREE_ROLES, delta: 7, applies: |r| r.experience.len() >= 3 },
    Rule { label: FIVE_SKILLS, delta: 15, applies: |r| r.total_skill_items() >= 5 },
    Rule { label: HAS_PROJECTS, delta: 5, applies: |r| !r.projects.is_empty() },
    Rule { label: TWO_PROJECTS, delta: 5, applies: |r| r.projects.len() >= 2 },
];

pub fn calculate_completeness_score(resume: &ResumeData) -> SubScore {
    let mut tally = Tally::starting_at(0);
    tally.apply(&COMPLETENESS_RULES, resume);

    let skill_items = resume.total_skill_items();
    if skill_items < 5 {
        tally.add(SOME_SKILLS, (skill_items * POINTS_PER_SKILL) as i32);
    }

    tally.finish()
}
