//! Word lists driving the scorer
//!
//! These lists are scoring data: changing any of them changes scores, so bump
//! [`LEXICON_VERSION`] with every edit.

use crate::scoring::text::{is_word_bounded, words};
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

pub const LEXICON_VERSION: &str = "1";

/// Verbs that signal achievement-oriented phrasing when they open a bullet
pub const ACTION_VERBS: [&str; 36] = [
    "accelerated", "achieved", "analyzed", "architected", "automated", "built",
    "collaborated", "coordinated", "created", "delivered", "deployed", "designed",
    "developed", "directed", "drove", "engineered", "enhanced", "established",
    "executed", "generated", "implemented", "improved", "increased", "initiated",
    "launched", "led", "managed", "mentored", "optimized", "orchestrated",
    "pioneered", "reduced", "resolved", "spearheaded", "streamlined", "transformed",
];

/// Passive or vague openers that ATS reviewers discount
pub const WEAK_VERBS: [&str; 9] = [
    "responsible for",
    "duties included",
    "worked on",
    "helped",
    "assisted",
    "participated in",
    "involved in",
    "tasked with",
    "handled",
];

pub const TECHNICAL_KEYWORDS: [&str; 35] = [
    "python", "javascript", "typescript", "java", "c++", "c#", "go", "rust", "sql",
    "react", "angular", "vue", "node.js", "django", "flask", "spring", "aws", "azure",
    "gcp", "docker", "kubernetes", "terraform", "ci/cd", "git", "linux", "rest api",
    "graphql", "mongodb", "postgresql", "redis", "kafka", "machine learning",
    "microservices", "agile", "api",
];

/// Words ignored when extracting keywords from a job description
pub const STOP_WORDS: [&str; 64] = [
    "about", "above", "after", "again", "also", "and", "are", "because", "been",
    "before", "being", "between", "both", "could", "does", "doing", "during", "each",
    "from", "have", "having", "into", "just", "more", "most", "must", "other", "over",
    "should", "some", "such", "than", "that", "their", "them", "then", "there",
    "these", "they", "this", "those", "through", "under", "until", "very", "were",
    "what", "when", "where", "which", "while", "will", "with", "within", "would",
    "your", "ability", "candidate", "company", "including", "looking", "role",
    "team", "work",
];

/// Patterns that count as quantified impact, applied to lower-cased text
pub const QUANTIFICATION_PATTERNS: [&str; 7] = [
    r"\d+%",
    r"\d+\+",
    r"\$\d+",
    r"\b\d+x\b",
    r"\b\d+k\b",
    r"\b\d+m\b",
    r"\b(?:million|billion|thousand)s?\b",
];

/// Process-wide lexicon built from the constant lists
pub static LEXICON: Lazy<Lexicon> =
    Lazy::new(|| Lexicon::build().expect("built-in word lists are valid patterns"));

/// Compiled matchers over the word lists
pub struct Lexicon {
    action_verbs: HashSet<&'static str>,
    stop_words: HashSet<&'static str>,
    weak_verbs: AhoCorasick,
    technical_keywords: AhoCorasick,
    quantification: Vec<Regex>,
}

impl Lexicon {
    fn build() -> crate::Result<Self> {
        let weak_verbs = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::LeftmostLongest)
            .build(WEAK_VERBS)
            .map_err(|e| crate::AtsScorerError::Configuration(format!("Failed to build weak verb matcher: {}", e)))?;

        // Standard semantics so overlapping terms ("rest api" and "api") both register
        let technical_keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(MatchKind::Standard)
            .build(TECHNICAL_KEYWORDS)
            .map_err(|e| crate::AtsScorerError::Configuration(format!("Failed to build keyword matcher: {}", e)))?;

        let quantification = QUANTIFICATION_PATTERNS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| crate::AtsScorerError::Configuration(format!("Invalid quantification pattern: {}", e)))?;

        Ok(Self {
            action_verbs: ACTION_VERBS.iter().copied().collect(),
            stop_words: STOP_WORDS.iter().copied().collect(),
            weak_verbs,
            technical_keywords,
            quantification,
        })
    }

    pub fn is_action_verb(&self, word: &str) -> bool {
        self.action_verbs.contains(word)
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Distinct action verbs used anywhere in the text
    pub fn distinct_action_verbs(&self, text: &str) -> BTreeSet<&'static str> {
        words(text)
            .filter_map(|w| self.action_verbs.get(w.as_str()).copied())
            .collect()
    }

    /// Whole-word occurrences of weak phrases
    pub fn count_weak_phrases(&self, text: &str) -> usize {
        self.weak_verbs
            .find_iter(text)
            .filter(|m| is_word_bounded(text, m.start(), m.end()))
            .count()
    }

    /// True when the bullet opens with a weak phrase
    pub fn starts_with_weak_phrase(&self, bullet: &str) -> bool {
        let trimmed = bullet.trim_start();
        self.weak_verbs
            .find(trimmed)
            .map_or(false, |m| m.start() == 0 && is_word_bounded(trimmed, m.start(), m.end()))
    }

    /// Distinct technical keywords mentioned as whole words
    pub fn distinct_technical_keywords(&self, text: &str) -> BTreeSet<&'static str> {
        self.technical_keywords
            .find_overlapping_iter(text)
            .filter(|m| is_word_bounded(text, m.start(), m.end()))
            .map(|m| TECHNICAL_KEYWORDS[m.pattern().as_usize()])
            .collect()
    }

    /// Number of quantification matches summed over every pattern
    pub fn count_quantifications(&self, text: &str) -> usize {
        let lowered = text.to_lowercase();
        self.quantification
            .iter()
            .map(|re| re.find_iter(&lowered).count())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sizes() {
        assert_eq!(ACTION_VERBS.len(), 36);
        assert_eq!(WEAK_VERBS.len(), 9);
        assert_eq!(TECHNICAL_KEYWORDS.len(), 35);
        let unique: HashSet<_> = ACTION_VERBS.iter().collect();
        assert_eq!(unique.len(), ACTION_VERBS.len());
    }

    #[test]
    fn test_action_verbs() {
        let verbs = LEXICON.distinct_action_verbs("Led the team. led again, then Built and optimized.");
        assert_eq!(verbs.into_iter().collect::<Vec<_>>(), vec!["built", "led", "optimized"]);
        // "led" inside "handled" is not a match
        assert!(LEXICON.distinct_action_verbs("handled tickets").is_empty());
    }

    #[test]
    fn test_weak_phrases() {
        assert_eq!(LEXICON.count_weak_phrases("responsible for x; helped y; Helped z"), 3);
        assert_eq!(LEXICON.count_weak_phrases("mishandled nothing"), 0);
        assert!(LEXICON.starts_with_weak_phrase("  Responsible for billing"));
        assert!(!LEXICON.starts_with_weak_phrase("Led work, helped others"));
    }

    #[test]
    fn test_technical_keywords_whole_word() {
        let found = LEXICON.distinct_technical_keywords("javascript, c++ and a rest api on aws");
        assert!(found.contains("javascript"));
        assert!(found.contains("c++"));
        assert!(found.contains("rest api"));
        assert!(found.contains("api"));
        assert!(found.contains("aws"));
        assert!(!found.contains("java"));
    }

    #[test]
    fn test_quantifications() {
        assert_eq!(LEXICON.count_quantifications("Cut latency 40% for 10+ services"), 2);
        assert_eq!(LEXICON.count_quantifications("Saved $500 and 3x throughput"), 2);
        assert_eq!(LEXICON.count_quantifications("Served 2 million users"), 1);
        assert_eq!(LEXICON.count_quantifications("no numbers here"), 0);
    }

    #[test]
    fn test_stop_words() {
        assert!(LEXICON.is_stop_word("with"));
        assert!(!LEXICON.is_stop_word("kubernetes"));
    }
}
