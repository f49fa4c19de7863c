//! Text normalization and tokenization shared by the scorers

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));

/// Map typographic punctuation to ASCII and lower-case the text
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'', // Smart quotes to regular quotes
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2013}' | '\u{2014}' => '-',
            '\u{2026}' => '.',
            _ => c,
        })
        .collect::<String>()
        .to_lowercase()
}

/// Lower-cased first word of a bullet, punctuation stripped
pub fn first_word(text: &str) -> Option<String> {
    text.unicode_words().next().map(|w| w.to_lowercase())
}

/// Lower-cased words using Unicode segmentation
pub fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.unicode_words().map(|w| w.to_lowercase())
}

/// Whitespace-separated tokens that start with a letter.
///
/// Numeric evidence such as `40%`, `$2m` or `3x` is not counted, so adding
/// metrics to a bullet never dilutes keyword density.
pub fn lexical_word_count(text: &str) -> usize {
    text.split_whitespace()
        .filter(|t| t.chars().next().map_or(false, char::is_alphabetic))
        .count()
}

/// A match at `start..end` is a whole word when it is not flanked by
/// alphanumeric characters
pub fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
}

/// Job description tokens: lower-cased, punctuation replaced by spaces, split
/// on whitespace, tokens of three characters or fewer and stop words dropped
pub fn tokenize_job_description<F>(text: &str, is_stop_word: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let lowered = normalize(text);
    let cleaned = NON_WORD.replace_all(&lowered, " ");

    cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() > 3 && !is_stop_word(t))
        .map(|t| t.to_string())
        .collect()
}

/// Token frequencies, ranked by count descending with ties kept in order of
/// first appearance
pub fn ranked_frequencies(tokens: &[String]) -> Vec<(String, usize)> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let count = counts.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            order.push(token.as_str());
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|t| (t.to_string(), counts[t]))
        .collect();

    // Stable sort keeps first-appearance order among equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Share of `part` in `whole` as a fraction; zero when `whole` is zero
pub fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
