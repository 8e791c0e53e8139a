use serde::{Deserialize, Serialize};

/// Outcome of scoring one candidate against a query
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether every query char was found, in order, in the candidate
    pub matched: bool,

    /// How well the candidate matched. Higher is better; may be negative.
    pub score: f64,
}

impl MatchResult {
    pub fn new(matched: bool, score: f64) -> Self {
        Self { matched, score }
    }

    /// Check if the score clears a caller-chosen threshold
    pub fn is_above(&self, min_score: f64) -> bool {
        self.score >= min_score
    }
}
