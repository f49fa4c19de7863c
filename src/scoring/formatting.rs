//! Formatting sub-score: contact details, date consistency, bullet structure

use crate::model::ResumeData;
use crate::scoring::lexicon::LEXICON;
use crate::scoring::rules::{Rule, SubScore, Tally};
use crate::scoring::text::{first_word, ratio};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

pub const NO_ENTRIES: &str = "no education, experience or projects";
pub const INVALID_EMAIL: &str = "invalid email address";
pub const INVALID_PHONE: &str = "invalid phone number";
pub const INCONSISTENT_DATES: &str = "inconsistent date formats";
pub const TOO_FEW_BULLETS: &str = "too few bullet points";
pub const TOO_MANY_BULLETS: &str = "too many bullet points";
pub const WEAK_OPENERS: &str = "under half of bullets start with action verbs";

/// Score returned when the resume has no entries at all
pub const EMPTY_RESUME_SCORE: u8 = 20;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s()+.-]{10,}$").expect("Invalid phone regex"));
static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?,?\s+\d{4}$")
        .expect("Invalid month-year regex")
});
static SLASH_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}/(\d{1,2}/)?\d{2,4}$").expect("Invalid slash date regex"));
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("Invalid year regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone.trim())
}

/// Families of date notation recognised on a resume
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DateFormat {
    MonthYear,
    Slash,
    YearOnly,
}

impl DateFormat {
    /// `None` for values outside the three families, such as "Present"
    pub fn classify(date: &str) -> Option<Self> {
        let date = date.trim();
        if MONTH_YEAR_RE.is_match(date) {
            Some(DateFormat::MonthYear)
        } else if SLASH_DATE_RE.is_match(date) {
            Some(DateFormat::Slash)
        } else if YEAR_RE.is_match(date) {
            Some(DateFormat::YearOnly)
        } else {
            None
        }
    }
}

/// Measurements the formatting rules are evaluated against
#[derive(Debug, Clone, PartialEq)]
pub struct FormattingFacts {
    pub email_valid: bool,
    pub phone_valid: bool,
    pub date_formats: usize,
    pub bullet_count: usize,
    pub action_verb_bullets: usize,
}

impl FormattingFacts {
    pub fn from_resume(resume: &ResumeData) -> Self {
        let bullets = resume.all_bullets();
        let action_verb_bullets = bullets
            .iter()
            .filter(|b| first_word(b).map_or(false, |w| LEXICON.is_action_verb(&w)))
            .count();

        let date_formats: BTreeSet<DateFormat> = resume
            .all_dates()
            .into_iter()
            .filter_map(DateFormat::classify)
            .collect();

        Self {
            email_valid: is_valid_email(&resume.personal_info.email),
            phone_valid: is_valid_phone(&resume.personal_info.phone),
            date_formats: date_formats.len(),
            bullet_count: bullets.len(),
            action_verb_bullets,
        }
    }

    /// Fraction of bullets opening with an action verb; `None` without bullets
    pub fn action_verb_ratio(&self) -> Option<f64> {
        (self.bullet_count > 0).then(|| ratio(self.action_verb_bullets, self.bullet_count))
    }
}

pub const FORMATTING_RULES: [Rule<FormattingFacts>; 6] = [
    Rule { label: INVALID_EMAIL, delta: -10, applies: |f| !f.email_valid },
    Rule { label: INVALID_PHONE, delta: -5, applies: |f| !f.phone_valid },
    Rule { label: INCONSISTENT_DATES, delta: -10, applies: |f| f.date_formats > 1 },
    Rule { label: TOO_FEW_BULLETS, delta: -15, applies: |f| f.bullet_count < 5 },
    Rule { label: TOO_MANY_BULLETS, delta: -5, applies: |f| f.bullet_count > 30 },
    Rule { label: WEAK_OPENERS, delta: -10, applies: |f| f.action_verb_ratio().map_or(false, |r| r < 0.5) },
];

pub fn calculate_formatting_score(resume: &ResumeData) -> SubScore {
    if resume.has_no_entries() {
        return SubScore::floor(EMPTY_RESUME_SCORE, NO_ENTRIES);
    }

    let facts = FormattingFacts::from_resume(resume);
    let mut tally = Tally::starting_at(100);
    tally.apply(&FORMATTING_RULES, &facts);
    tally.finish()
}
