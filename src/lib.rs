//! # fuzzy-rank
//!
//! Type-ahead fuzzy ranking for candidate lists:
//! - Single-pass scorer with adjacency, separator and camel-case bonuses
//! - Leading-letter and unmatched-letter penalties, all tunable
//! - In-place sorting through a small `Candidates` trait, results kept aligned
//! - Non-mutating ranking for callers that can't reorder their data
//! - Multiple interfaces: Rust library, Python bindings, CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use fuzzy_rank::{sort_strings, ScoreWeights, Sorter};
//!
//! let mut folders = vec!["Downloads", "Git", "Pictures", "go-tools"];
//! let results = sort_strings(&mut folders, "gt");
//! assert_eq!(folders, ["Git", "go-tools", "Pictures", "Downloads"]);
//! assert!(results[0].matched);
//!
//! // Explicit weights for a custom session
//! let weights = ScoreWeights::default().with_camel_bonus(20.0);
//! let mut apps = vec!["out of time", "OmniFocus"];
//! let mut sorter = Sorter::with_weights(&mut apps, weights);
//! sorter.sort("of");
//! assert_eq!(sorter.score(0), Some(23.0));
//! assert_eq!(sorter.data()[0], "OmniFocus");
//! ```

pub mod core;
pub mod error;
pub mod ranking;

// Re-export primary types
pub use crate::core::{MatchResult, ScoreWeights};
pub use crate::error::{FuzzyError, Result};
pub use crate::ranking::{
    filter_strings, fuzzy_match, rank_order, rank_strings, sort_strings, sort_strings_with,
    Candidates, Ranking, Scorer, Sorter,
};

// Python bindings
#[cfg(feature = "python")]
pub mod python;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
