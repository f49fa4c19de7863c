//! Predicate/delta rule tables
//!
//! Each sub-score is expressed as ordered tables of rules evaluated over a
//! small facts struct. A table can be applied once (document-level facts) or
//! once per item (every bullet, every project), accumulating deltas.

use serde::{Deserialize, Serialize};

/// One scoring rule: when `applies` holds, `delta` is added to the score
pub struct Rule<F> {
    pub label: &'static str,
    pub delta: i32,
    pub applies: fn(&F) -> bool,
}

/// A fired rule as reported in score explanations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleHit {
    pub label: String,
    pub delta: i32,
    /// How many items triggered the rule
    pub count: usize,
}

/// Running total for one sub-score
#[derive(Debug, Clone, Default)]
pub struct Tally {
    total: i32,
    hits: Vec<RuleHit>,
}

impl Tally {
    pub fn starting_at(base: i32) -> Self {
        Self {
            total: base,
            hits: Vec::new(),
        }
    }

    /// Evaluate every rule of `table` against `facts`
    pub fn apply<F>(&mut self, table: &[Rule<F>], facts: &F) {
        for rule in table {
            if (rule.applies)(facts) {
                self.record(rule.label, rule.delta);
            }
        }
    }

    /// Evaluate `table` once per item
    pub fn apply_each<'a, F: 'a>(&mut self, table: &[Rule<F>], items: impl IntoIterator<Item = &'a F>) {
        for item in items {
            self.apply(table, item);
        }
    }

    /// Record a computed contribution that no fixed-delta rule expresses
    pub fn add(&mut self, label: &'static str, delta: i32) {
        if delta != 0 {
            self.record(label, delta);
        }
    }

    fn record(&mut self, label: &'static str, delta: i32) {
        self.total += delta;
        match self.hits.iter_mut().find(|h| h.label == label) {
            Some(hit) => {
                hit.delta += delta;
                hit.count += 1;
            }
            None => self.hits.push(RuleHit {
                label: label.to_string(),
                delta,
                count: 1,
            }),
        }
    }

    /// Raw accumulated total, before clamping
    pub fn total(&self) -> i32 {
        self.total
    }

    /// Clamp into `[0, 100]`
    pub fn finish(self) -> SubScore {
        SubScore {
            score: self.total.clamp(0, 100) as u8,
            hits: self.hits,
        }
    }
}

/// Final value of a sub-score with the rules that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScore {
    pub score: u8,
    pub hits: Vec<RuleHit>,
}

impl SubScore {
    /// Early-return floor for degenerate input
    pub fn floor(score: u8, label: &str) -> Self {
        Self {
            score,
            hits: vec![RuleHit {
                label: label.to_string(),
                delta: 0,
                count: 1,
            }],
        }
    }

    pub fn fired(&self, label: &str) -> bool {
        self.hits.iter().any(|h| h.label == label)
    }
}
