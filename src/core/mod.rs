pub mod match_result;
pub mod weights;

pub use match_result::MatchResult;
pub use weights::ScoreWeights;
