//! Ready-made ranking for plain lists of strings.
//!
//! Each string is its own sort key and ties fall back to ordinary string
//! ordering.

use std::borrow::Cow;

use crate::core::{MatchResult, ScoreWeights};
use crate::ranking::{rank_order, Candidates, Sorter};

impl<S: AsRef<str>> Candidates for [S] {
    fn len(&self) -> usize {
        <[S]>::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[S]>::swap(self, i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].as_ref() < self[j].as_ref()
    }

    fn sort_key(&self, i: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[i].as_ref())
    }
}

impl<S: AsRef<str>> Candidates for Vec<S> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn swap(&mut self, i: usize, j: usize) {
        Candidates::swap(self.as_mut_slice(), i, j)
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Candidates::less(self.as_slice(), i, j)
    }

    fn sort_key(&self, i: usize) -> Cow<'_, str> {
        Candidates::sort_key(self.as_slice(), i)
    }
}

/// Fuzzy-sort `data` in place with the default weights.
///
/// # Examples
///
/// ```
/// use fuzzy_rank::sort_strings;
///
/// let mut titles = ["Router", "Wolf // ruTorrent"];
/// let results = sort_strings(&mut titles, "ruto");
///
/// assert_eq!(titles, ["Wolf // ruTorrent", "Router"]);
/// assert!(results[0].matched);
/// assert!(!results[1].matched);
/// ```
pub fn sort_strings<S: AsRef<str>>(data: &mut [S], query: &str) -> Vec<MatchResult> {
    sort_strings_with(data, query, &ScoreWeights::default())
}

/// Fuzzy-sort `data` in place with explicit weights.
pub fn sort_strings_with<S: AsRef<str>>(
    data: &mut [S],
    query: &str,
    weights: &ScoreWeights,
) -> Vec<MatchResult> {
    let mut sorter = Sorter::with_weights(data, *weights);
    sorter.sort(query);
    sorter.into_results()
}

/// Rank `data` without reordering it, best match first.
pub fn rank_strings<'a, S: AsRef<str>>(
    data: &'a [S],
    query: &str,
    weights: &ScoreWeights,
) -> Vec<(&'a S, MatchResult)> {
    rank_order(data, query, weights)
        .iter()
        .map(|(i, result)| (&data[i], result))
        .collect()
}

/// The strings that match `query`, best match first.
///
/// # Examples
///
/// ```
/// use fuzzy_rank::{filter_strings, ScoreWeights};
///
/// let titles = ["game of thrones", "no match", "got milk?", "got"];
/// let hits = filter_strings(&titles, "got", &ScoreWeights::default());
/// assert_eq!(hits, [&"got", &"game of thrones", &"got milk?"]);
/// ```
pub fn filter_strings<'a, S: AsRef<str>>(
    data: &'a [S],
    query: &str,
    weights: &ScoreWeights,
) -> Vec<&'a S> {
    rank_order(data, query, weights)
        .matches()
        .map(|(i, _)| &data[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_strings() {
        let mut data = vec!["go and throw", "baby got back", "game of thrones"];
        sort_strings(&mut data, "got");
        assert_eq!(data, ["game of thrones", "go and throw", "baby got back"]);
    }

    #[test]
    fn test_owned_strings() {
        let mut data: Vec<String> = ["spelunking", "OmniFocus", "out of time"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let results = sort_strings(&mut data, "of");
        assert_eq!(data[0], "OmniFocus");
        assert_eq!(results.len(), 3);
        assert!(!results[2].matched);
    }

    #[test]
    fn test_empty_query_shortest_first() {
        let mut data = ["abc", "a", "ab", ""];
        let results = sort_strings(&mut data, "");
        assert_eq!(data, ["", "a", "ab", "abc"]);
        assert!(results.iter().all(|r| r.matched));
        assert_eq!(results[3].score, -3.0);
    }

    #[test]
    fn test_lexicographic_tie_break() {
        let mut data = ["zz", "aa", "mm"];
        sort_strings(&mut data, "q");
        assert_eq!(data, ["aa", "mm", "zz"]);
    }

    #[test]
    fn test_rank_strings_does_not_mutate() {
        let data = ["no match", "got"];
        let ranked = rank_strings(&data, "got", &ScoreWeights::default());
        assert_eq!(data, ["no match", "got"]);
        assert_eq!(*ranked[0].0, "got");
        assert_eq!(ranked[0].1, MatchResult::new(true, 20.0));
        assert!(!ranked[1].1.matched);
    }

    #[test]
    fn test_filter_strings() {
        let data = ["see all fellows' armpits", "Safari", "french canada", "spanish harlem"];
        let hits = filter_strings(&data, "safa", &ScoreWeights::default());
        assert_eq!(hits, [&"Safari", &"see all fellows' armpits"]);
    }

    #[test]
    fn test_custom_weights_change_order() {
        // Without the camel bonus "OmniFocus" loses its lead
        let weights = ScoreWeights::default().with_camel_bonus(0.0);
        let mut data = ["OmniFocus", "out of time"];
        sort_strings_with(&mut data, "of", &weights);
        assert_eq!(data, ["out of time", "OmniFocus"]);
    }
}
