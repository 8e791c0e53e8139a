//! Single-pass fuzzy scorer.
//!
//! The candidate is scanned once, left to right. Each query char is matched
//! greedily, but the engine keeps the best-scoring occurrence of the char it
//! matched last in a pending slot, so a later copy of the same letter (one
//! sitting after a separator or on a camel-case boundary, say) can replace
//! an earlier one before the score is committed.

use crate::core::{MatchResult, ScoreWeights};

/// Best occurrence seen so far for the most recently matched query char.
#[derive(Debug, Clone, Copy)]
struct Pending {
    ch: char,
    score: f64,
}

/// Scores candidates against one query with fixed weights.
///
/// Build once per query and reuse it across a whole collection; the query
/// is decoded into chars a single time.
#[derive(Debug, Clone)]
pub struct Scorer<'w> {
    query: Vec<char>,
    weights: &'w ScoreWeights,
}

impl<'w> Scorer<'w> {
    pub fn new(query: &str, weights: &'w ScoreWeights) -> Self {
        Self {
            query: query.chars().collect(),
            weights,
        }
    }

    /// Score `candidate` against the query.
    pub fn score(&self, candidate: &str) -> MatchResult {
        let w = self.weights;
        let query = &self.query;

        let mut score = 0.0;
        let mut query_idx = 0;
        let mut pending: Option<Pending> = None;

        let mut prev_matched = false;
        let mut prev_lower = false;
        // Start of string is treated as a word boundary
        let mut prev_separator = true;

        for (idx, ch) in candidate.chars().enumerate() {
            let query_char = query.get(query_idx).copied();

            let next_match = query_char.is_some_and(|q| eq_fold(q, ch));
            let rematch = pending.is_some_and(|p| eq_fold(p.ch, ch));
            let advanced = next_match && pending.is_some();
            let query_repeat = match (pending, query_char) {
                (Some(p), Some(q)) => eq_fold(p.ch, q),
                _ => false,
            };

            if advanced || query_repeat {
                if let Some(p) = pending.take() {
                    score += p.score;
                }
            }

            if next_match || rematch {
                let mut letter_score = 0.0;

                if query_idx == 0 {
                    score += leading_penalty(idx, w);
                }
                if prev_matched {
                    letter_score += w.adjacency_bonus;
                }
                if prev_separator {
                    letter_score += w.separator_bonus;
                }
                if prev_lower && is_uppercase_letter(ch) {
                    letter_score += w.camel_bonus;
                }

                if next_match {
                    query_idx += 1;
                }

                let best = pending.map_or(0.0, |p| p.score);
                if letter_score >= best {
                    // The occurrence being replaced no longer counts
                    if pending.is_some() {
                        score += w.unmatched_letter_penalty;
                    }
                    pending = Some(Pending {
                        ch,
                        score: letter_score,
                    });
                }

                prev_matched = true;
            } else {
                score += w.unmatched_letter_penalty;
                prev_matched = false;
            }

            prev_lower = is_lowercase_letter(ch);
            prev_separator = is_separator(ch);
        }

        if let Some(p) = pending {
            score += p.score;
        }

        MatchResult::new(query_idx == query.len(), score)
    }
}

/// Score `candidate` against `query`.
///
/// `matched` is true when every char of `query` occurs in `candidate` in the
/// same order, ignoring case. The score is only meaningful relative to other
/// candidates scored with the same query and weights.
///
/// # Examples
///
/// ```
/// use fuzzy_rank::{fuzzy_match, ScoreWeights};
///
/// let weights = ScoreWeights::default();
/// let hit = fuzzy_match("Game of Thrones", "GoT", &weights);
/// assert!(hit.matched);
/// assert_eq!(hit.score, 18.0);
///
/// let miss = fuzzy_match("Game of Phones", "GoT", &weights);
/// assert!(!miss.matched);
/// ```
pub fn fuzzy_match(candidate: &str, query: &str, weights: &ScoreWeights) -> MatchResult {
    Scorer::new(query, weights).score(candidate)
}

fn leading_penalty(idx: usize, w: &ScoreWeights) -> f64 {
    let penalty = idx as f64 * w.leading_letter_penalty;
    if penalty <= w.max_leading_letter_penalty {
        w.max_leading_letter_penalty
    } else {
        penalty
    }
}

#[inline]
fn is_separator(ch: char) -> bool {
    ch == '_' || ch == ' '
}

#[inline]
fn eq_fold(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Lowercase and has an uppercase counterpart
#[inline]
fn is_lowercase_letter(ch: char) -> bool {
    ch.to_lowercase().eq(std::iter::once(ch)) && !ch.to_uppercase().eq(std::iter::once(ch))
}

/// Uppercase and has a lowercase counterpart
#[inline]
fn is_uppercase_letter(ch: char) -> bool {
    ch.to_uppercase().eq(std::iter::once(ch)) && !ch.to_lowercase().eq(std::iter::once(ch))
}
