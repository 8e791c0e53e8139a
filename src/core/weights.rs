use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Bonus for a match immediately following another match
pub const DEFAULT_ADJACENCY_BONUS: f64 = 5.0;
/// Bonus for a match directly after `_` or a space
pub const DEFAULT_SEPARATOR_BONUS: f64 = 10.0;
/// Bonus for an uppercase match directly after a lowercase letter
pub const DEFAULT_CAMEL_BONUS: f64 = 10.0;
/// Penalty per character before the first match
pub const DEFAULT_LEADING_LETTER_PENALTY: f64 = -3.0;
/// Cap on the total leading-letter penalty
pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: f64 = -9.0;
/// Penalty per character that does not contribute to the match
pub const DEFAULT_UNMATCHED_LETTER_PENALTY: f64 = -1.0;

/// Bonuses and penalties used by the scorer.
///
/// Values are plain numbers and are not validated: odd weights (a positive
/// unmatched penalty, say) produce odd rankings, never errors.
///
/// # Examples
///
/// ```
/// use fuzzy_rank::ScoreWeights;
///
/// let weights = ScoreWeights::default();
/// assert_eq!(weights.adjacency_bonus, 5.0);
///
/// let tuned = ScoreWeights::default()
///     .with_adjacency_bonus(10.0)
///     .with_max_leading_letter_penalty(-3.0);
/// assert_eq!(tuned.adjacency_bonus, 10.0);
/// assert_eq!(tuned.separator_bonus, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    /// Bonus for adjacent matches
    pub adjacency_bonus: f64,

    /// Bonus if the match is after a separator (or at the start)
    pub separator_bonus: f64,

    /// Bonus if the match is uppercase and the previous char is lowercase
    pub camel_bonus: f64,

    /// Penalty applied for every char before the first match
    pub leading_letter_penalty: f64,

    /// Maximum penalty for leading chars
    pub max_leading_letter_penalty: f64,

    /// Penalty for every char that doesn't match
    pub unmatched_letter_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            adjacency_bonus: DEFAULT_ADJACENCY_BONUS,
            separator_bonus: DEFAULT_SEPARATOR_BONUS,
            camel_bonus: DEFAULT_CAMEL_BONUS,
            leading_letter_penalty: DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: DEFAULT_UNMATCHED_LETTER_PENALTY,
        }
    }
}

impl ScoreWeights {
    /// Weights with the default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adjacency_bonus(mut self, bonus: f64) -> Self {
        self.adjacency_bonus = bonus;
        self
    }

    pub fn with_separator_bonus(mut self, bonus: f64) -> Self {
        self.separator_bonus = bonus;
        self
    }

    pub fn with_camel_bonus(mut self, bonus: f64) -> Self {
        self.camel_bonus = bonus;
        self
    }

    pub fn with_leading_letter_penalty(mut self, penalty: f64) -> Self {
        self.leading_letter_penalty = penalty;
        self
    }

    pub fn with_max_leading_letter_penalty(mut self, penalty: f64) -> Self {
        self.max_leading_letter_penalty = penalty;
        self
    }

    pub fn with_unmatched_letter_penalty(mut self, penalty: f64) -> Self {
        self.unmatched_letter_penalty = penalty;
        self
    }

    /// Builds weights from a flat key/value map, falling back to defaults.
    ///
    /// Keys are the field names (`adjacency_bonus`, `camel_bonus`, ...).
    /// Unknown keys are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use fuzzy_rank::ScoreWeights;
    ///
    /// let mut config = HashMap::new();
    /// config.insert("camel_bonus".to_string(), 20.0);
    /// config.insert("colour".to_string(), 1.0);
    ///
    /// let weights = ScoreWeights::from_config(&config);
    /// assert_eq!(weights.camel_bonus, 20.0);
    /// assert_eq!(weights.unmatched_letter_penalty, -1.0); // default
    /// ```
    pub fn from_config(config: &HashMap<String, f64>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, fallback: f64| config.get(key).copied().unwrap_or(fallback);

        Self {
            adjacency_bonus: get("adjacency_bonus", defaults.adjacency_bonus),
            separator_bonus: get("separator_bonus", defaults.separator_bonus),
            camel_bonus: get("camel_bonus", defaults.camel_bonus),
            leading_letter_penalty: get("leading_letter_penalty", defaults.leading_letter_penalty),
            max_leading_letter_penalty: get(
                "max_leading_letter_penalty",
                defaults.max_leading_letter_penalty,
            ),
            unmatched_letter_penalty: get(
                "unmatched_letter_penalty",
                defaults.unmatched_letter_penalty,
            ),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load weights from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let weights = Self::from_json(&json)?;
        tracing::debug!("Loaded score weights from {}", path.display());
        Ok(weights)
    }
}
