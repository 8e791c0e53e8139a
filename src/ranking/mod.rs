pub mod scorer;
pub mod sorter;
pub mod strings;

use std::borrow::Cow;

pub use scorer::{fuzzy_match, Scorer};
pub use sorter::{rank_order, Ranking, Sorter};
pub use strings::{filter_strings, rank_strings, sort_strings, sort_strings_with};

/// A collection that can be fuzzy-ranked in place.
///
/// Positions are indices into the collection as it is currently ordered.
/// The engine reads sort keys by position and reorders the collection only
/// through [`Candidates::swap`].
pub trait Candidates {
    /// Number of candidates
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Exchange the candidates at `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Secondary ordering, used when two candidates score exactly the same
    fn less(&self, i: usize, j: usize) -> bool;

    /// String the query is compared against (may differ from what is displayed)
    fn sort_key(&self, i: usize) -> Cow<'_, str>;
}
