use std::cmp::Ordering;

use crate::core::{MatchResult, ScoreWeights};
use crate::ranking::{Candidates, Scorer};

/// Fuzzy-sorts a borrowed collection and keeps per-position results.
///
/// Results always describe the candidate currently at the same position:
/// whenever the sorter swaps two candidates it swaps their results too.
///
/// # Examples
///
/// ```
/// use fuzzy_rank::Sorter;
///
/// let mut names = vec!["game of thrones", "no match", "got milk?", "got"];
/// let mut sorter = Sorter::new(&mut names);
/// sorter.sort("got");
///
/// assert!(sorter.is_match(0));
/// assert!(!sorter.is_match(3));
/// assert_eq!(names, ["got", "game of thrones", "got milk?", "no match"]);
/// ```
pub struct Sorter<'a, C: Candidates + ?Sized> {
    data: &'a mut C,
    weights: ScoreWeights,
    results: Vec<MatchResult>,
}

impl<'a, C: Candidates + ?Sized> Sorter<'a, C> {
    /// Create a sorter with the default weights
    pub fn new(data: &'a mut C) -> Self {
        Self::with_weights(data, ScoreWeights::default())
    }

    /// Create a sorter with explicit weights
    pub fn with_weights(data: &'a mut C, weights: ScoreWeights) -> Self {
        Self {
            data,
            weights,
            results: Vec::new(),
        }
    }

    /// Score every candidate against `query` and reorder the collection,
    /// best match first.
    ///
    /// This rewrites the order of the borrowed collection in place. Equal
    /// scores fall back to [`Candidates::less`]. Results from a previous
    /// call are discarded and recomputed from the current order.
    pub fn sort(&mut self, query: &str) -> &[MatchResult] {
        self.results = score_all(&*self.data, query, &self.weights);
        let order = ordering(&*self.data, &self.results);
        self.apply(&order);

        tracing::debug!(
            query,
            candidates = self.results.len(),
            matched = self.results.iter().filter(|r| r.matched).count(),
            "sorted candidates"
        );

        &self.results
    }

    /// Move candidate `order[k]` to position `k` using swaps only.
    fn apply(&mut self, order: &[usize]) {
        let n = order.len();
        // pos_of[orig] = current position, at_pos[pos] = original index there
        let mut pos_of: Vec<usize> = (0..n).collect();
        let mut at_pos: Vec<usize> = (0..n).collect();

        for (target, &wanted) in order.iter().enumerate() {
            let current = pos_of[wanted];
            if current == target {
                continue;
            }

            self.swap(target, current);

            let displaced = at_pos[target];
            at_pos[current] = displaced;
            pos_of[displaced] = current;
            at_pos[target] = wanted;
            pos_of[wanted] = target;
        }
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.results.swap(i, j);
    }

    /// Results of the last sort, aligned with the current order
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn result(&self, i: usize) -> Option<MatchResult> {
        self.results.get(i).copied()
    }

    /// Whether the candidate at `i` matched the last query
    pub fn is_match(&self, i: usize) -> bool {
        self.results.get(i).is_some_and(|r| r.matched)
    }

    pub fn score(&self, i: usize) -> Option<f64> {
        self.results.get(i).map(|r| r.score)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Read access to the (possibly reordered) collection
    pub fn data(&self) -> &C {
        &*self.data
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.results
    }
}

/// Ranked view of a collection that was left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranking {
    order: Vec<usize>,
    results: Vec<MatchResult>,
}

impl Ranking {
    /// Original indices, best match first
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Results aligned with [`Ranking::order`]
    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    /// `(original_index, result)` pairs, best match first
    pub fn iter(&self) -> impl Iterator<Item = (usize, MatchResult)> + '_ {
        self.order.iter().copied().zip(self.results.iter().copied())
    }

    /// Like [`Ranking::iter`], without the candidates that did not match
    pub fn matches(&self) -> impl Iterator<Item = (usize, MatchResult)> + '_ {
        self.iter().filter(|(_, r)| r.matched)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_parts(self) -> (Vec<usize>, Vec<MatchResult>) {
        (self.order, self.results)
    }
}

/// Rank `data` against `query` without reordering it.
///
/// Produces the same order [`Sorter::sort`] would leave the collection in.
pub fn rank_order<C: Candidates + ?Sized>(data: &C, query: &str, weights: &ScoreWeights) -> Ranking {
    let scores = score_all(data, query, weights);
    let order = ordering(data, &scores);
    let results = order.iter().map(|&i| scores[i]).collect();

    tracing::debug!(query, candidates = scores.len(), "ranked candidates");

    Ranking { order, results }
}

fn score_all<C: Candidates + ?Sized>(data: &C, query: &str, weights: &ScoreWeights) -> Vec<MatchResult> {
    let scorer = Scorer::new(query, weights);
    (0..data.len())
        .map(|i| {
            let result = scorer.score(&data.sort_key(i));
            tracing::trace!(index = i, matched = result.matched, score = result.score, "scored");
            result
        })
        .collect()
}

/// Indices of `results` in final order: score descending, then `less`.
fn ordering<C: Candidates + ?Sized>(data: &C, results: &[MatchResult]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by(|&a, &b| compare(data, results, a, b));
    order
}

fn compare<C: Candidates + ?Sized>(data: &C, results: &[MatchResult], a: usize, b: usize) -> Ordering {
    let (score_a, score_b) = (results[a].score, results[b].score);
    if score_a == score_b {
        if data.less(a, b) {
            Ordering::Less
        } else if data.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    } else {
        // Higher scores first; total_cmp keeps NaN weights from breaking the sort
        score_b.total_cmp(&score_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::fuzzy_match;
    use std::borrow::Cow;

    /// Items tie-broken by id rather than by name, counting swaps
    struct Items {
        names: Vec<&'static str>,
        ids: Vec<u32>,
        swaps: usize,
    }

    impl Items {
        fn new(entries: &[(&'static str, u32)]) -> Self {
            Self {
                names: entries.iter().map(|e| e.0).collect(),
                ids: entries.iter().map(|e| e.1).collect(),
                swaps: 0,
            }
        }
    }

    impl Candidates for Items {
        fn len(&self) -> usize {
            self.names.len()
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.names.swap(i, j);
            self.ids.swap(i, j);
            self.swaps += 1;
        }

        fn less(&self, i: usize, j: usize) -> bool {
            self.ids[i] < self.ids[j]
        }

        fn sort_key(&self, i: usize) -> Cow<'_, str> {
            Cow::Borrowed(self.names[i])
        }
    }

    #[test]
    fn test_results_follow_candidates() {
        let mut items = Items::new(&[
            ("out of time", 1),
            ("spelunking", 2),
            ("OmniFocus", 3),
            ("game of thrones", 4),
        ]);
        let mut sorter = Sorter::new(&mut items);
        let results = sorter.sort("of").to_vec();

        let weights = ScoreWeights::default();
        for (i, result) in results.iter().enumerate() {
            let name = sorter.data().names[i];
            assert_eq!(*result, fuzzy_match(name, "of", &weights), "position {}", i);
        }
        assert_eq!(sorter.data().names, ["OmniFocus", "out of time", "game of thrones", "spelunking"]);
        assert_eq!(sorter.data().ids, [3, 1, 4, 2]);
    }

    #[test]
    fn test_tie_break_uses_secondary_order() {
        // Same length, no match: identical scores
        let mut a = Items::new(&[("xx", 3), ("yy", 1), ("zz", 2)]);
        let mut b = Items::new(&[("zz", 2), ("xx", 3), ("yy", 1)]);

        Sorter::new(&mut a).sort("q");
        Sorter::new(&mut b).sort("q");

        assert_eq!(a.ids, [1, 2, 3]);
        assert_eq!(b.ids, [1, 2, 3]);
        assert_eq!(a.names, b.names);
    }

    #[test]
    fn test_resort_is_idempotent() {
        let mut items = Items::new(&[
            ("game of thrones", 1),
            ("no match", 2),
            ("got milk?", 3),
            ("got", 4),
        ]);
        let mut sorter = Sorter::new(&mut items);
        let first = sorter.sort("got").to_vec();
        let second = sorter.sort("got").to_vec();
        assert_eq!(first, second);
        drop(sorter);

        assert_eq!(items.names, ["got", "game of thrones", "got milk?", "no match"]);
    }

    #[test]
    fn test_resort_with_new_query() {
        let mut names = vec!["out of time", "spelunking", "OmniFocus"];
        let mut sorter = Sorter::new(&mut names);
        sorter.sort("of");
        assert_eq!(sorter.data()[0], "OmniFocus");

        sorter.sort("spel");
        assert_eq!(sorter.data()[0], "spelunking");
        assert!(sorter.is_match(0));
        assert!(!sorter.is_match(1));
        assert!(!sorter.is_match(2));
    }

    #[test]
    fn test_swap_count_bounded() {
        let entries: Vec<(&'static str, u32)> = vec![
            ("www.example.com", 1),
            ("one.example.com", 2),
            ("two.example.com", 3),
            ("www.google.com", 4),
            ("www.amazon.de", 5),
            ("www.two.co.uk", 6),
        ];
        let mut items = Items::new(&entries);
        Sorter::new(&mut items).sort("two");
        assert!(items.swaps < entries.len());
    }

    #[test]
    fn test_accessors() {
        let mut names = vec!["got", "no match"];
        let mut sorter = Sorter::new(&mut names);
        assert!(!sorter.is_match(0));
        assert_eq!(sorter.score(0), None);

        sorter.sort("got");
        assert_eq!(sorter.len(), 2);
        assert!(!sorter.is_empty());
        assert_eq!(sorter.result(0), Some(MatchResult::new(true, 20.0)));
        assert_eq!(sorter.score(0), Some(20.0));
        assert_eq!(sorter.result(5), None);
        assert!(!sorter.is_match(5));
        assert_eq!(sorter.weights(), &ScoreWeights::default());

        let results = sorter.into_results();
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_empty_collection() {
        let mut names: Vec<String> = Vec::new();
        let mut sorter = Sorter::new(&mut names);
        assert!(sorter.sort("anything").is_empty());
        assert!(sorter.is_empty());
    }

    #[test]
    fn test_rank_order_leaves_data_alone() {
        let items = Items::new(&[("game of thrones", 1), ("no match", 2), ("got", 3)]);
        let ranking = rank_order(&items, "got", &ScoreWeights::default());

        assert_eq!(items.swaps, 0);
        assert_eq!(items.names, ["game of thrones", "no match", "got"]);
        assert_eq!(ranking.order(), [2, 0, 1]);
        assert_eq!(ranking.len(), 3);

        let matched: Vec<usize> = ranking.matches().map(|(i, _)| i).collect();
        assert_eq!(matched, [2, 0]);
    }

    #[test]
    fn test_rank_order_agrees_with_sort() {
        let original = vec!["see all fellows' armpits", "Safari", "french canada", "spanish harlem"];
        let ranking = rank_order(&original, "safa", &ScoreWeights::default());

        let mut sorted = original.clone();
        let results = Sorter::new(&mut sorted).sort("safa").to_vec();

        let via_ranking: Vec<&str> = ranking.order().iter().map(|&i| original[i]).collect();
        assert_eq!(via_ranking, sorted);
        assert_eq!(ranking.results(), results.as_slice());
    }

    #[test]
    fn test_nan_weights_do_not_panic() {
        let weights = ScoreWeights::default().with_adjacency_bonus(f64::NAN);
        let mut names = vec!["got", "game of thrones", "go", "gotgotgot"];
        let results = Sorter::with_weights(&mut names, weights).sort("got").to_vec();
        assert_eq!(results.len(), 4);
    }
}
