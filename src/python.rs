use pyo3::prelude::*;

use crate::core::{MatchResult as RustMatchResult, ScoreWeights as RustScoreWeights};
use crate::ranking;

/// Python wrapper for ScoreWeights
#[pyclass(name = "ScoreWeights")]
#[derive(Clone)]
struct ScoreWeights {
    inner: RustScoreWeights,
}

#[pymethods]
impl ScoreWeights {
    /// Create weights; omitted values keep their defaults
    #[new]
    #[pyo3(signature = (
        adjacency_bonus = None,
        separator_bonus = None,
        camel_bonus = None,
        leading_letter_penalty = None,
        max_leading_letter_penalty = None,
        unmatched_letter_penalty = None
    ))]
    fn new(
        adjacency_bonus: Option<f64>,
        separator_bonus: Option<f64>,
        camel_bonus: Option<f64>,
        leading_letter_penalty: Option<f64>,
        max_leading_letter_penalty: Option<f64>,
        unmatched_letter_penalty: Option<f64>,
    ) -> Self {
        let defaults = RustScoreWeights::default();
        Self {
            inner: RustScoreWeights {
                adjacency_bonus: adjacency_bonus.unwrap_or(defaults.adjacency_bonus),
                separator_bonus: separator_bonus.unwrap_or(defaults.separator_bonus),
                camel_bonus: camel_bonus.unwrap_or(defaults.camel_bonus),
                leading_letter_penalty: leading_letter_penalty
                    .unwrap_or(defaults.leading_letter_penalty),
                max_leading_letter_penalty: max_leading_letter_penalty
                    .unwrap_or(defaults.max_leading_letter_penalty),
                unmatched_letter_penalty: unmatched_letter_penalty
                    .unwrap_or(defaults.unmatched_letter_penalty),
            },
        }
    }

    /// Load weights from a JSON string
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let inner = RustScoreWeights::from_json(json)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(Self { inner })
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    #[getter]
    fn adjacency_bonus(&self) -> f64 {
        self.inner.adjacency_bonus
    }

    #[getter]
    fn separator_bonus(&self) -> f64 {
        self.inner.separator_bonus
    }

    #[getter]
    fn camel_bonus(&self) -> f64 {
        self.inner.camel_bonus
    }

    #[getter]
    fn leading_letter_penalty(&self) -> f64 {
        self.inner.leading_letter_penalty
    }

    #[getter]
    fn max_leading_letter_penalty(&self) -> f64 {
        self.inner.max_leading_letter_penalty
    }

    #[getter]
    fn unmatched_letter_penalty(&self) -> f64 {
        self.inner.unmatched_letter_penalty
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}

/// Python wrapper for MatchResult
#[pyclass(name = "MatchResult")]
#[derive(Clone, Copy)]
struct MatchResult {
    #[pyo3(get)]
    matched: bool,
    #[pyo3(get)]
    score: f64,
}

#[pymethods]
impl MatchResult {
    fn __repr__(&self) -> String {
        format!("MatchResult(matched={}, score={})", self.matched, self.score)
    }
}

impl From<RustMatchResult> for MatchResult {
    fn from(result: RustMatchResult) -> Self {
        Self {
            matched: result.matched,
            score: result.score,
        }
    }
}

fn weights_or_default(weights: Option<ScoreWeights>) -> RustScoreWeights {
    weights.map(|w| w.inner).unwrap_or_default()
}

/// Score one candidate against a query
#[pyfunction]
#[pyo3(signature = (candidate, query, weights = None))]
fn match_score(candidate: &str, query: &str, weights: Option<ScoreWeights>) -> MatchResult {
    ranking::fuzzy_match(candidate, query, &weights_or_default(weights)).into()
}

/// Sort candidates best match first, as (candidate, matched, score) tuples
#[pyfunction]
#[pyo3(signature = (candidates, query, weights = None))]
fn sort_strings(
    mut candidates: Vec<String>,
    query: &str,
    weights: Option<ScoreWeights>,
) -> Vec<(String, bool, f64)> {
    let results = ranking::sort_strings_with(&mut candidates, query, &weights_or_default(weights));
    candidates
        .into_iter()
        .zip(results)
        .map(|(candidate, r)| (candidate, r.matched, r.score))
        .collect()
}

/// Matching candidates only, best match first
#[pyfunction]
#[pyo3(signature = (candidates, query, weights = None))]
fn filter_strings(candidates: Vec<String>, query: &str, weights: Option<ScoreWeights>) -> Vec<String> {
    ranking::filter_strings(&candidates, query, &weights_or_default(weights))
        .into_iter()
        .cloned()
        .collect()
}

/// Python module
#[pymodule]
fn fuzzy_rank(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<ScoreWeights>()?;
    m.add_class::<MatchResult>()?;
    m.add_function(wrap_pyfunction!(match_score, m)?)?;
    m.add_function(wrap_pyfunction!(sort_strings, m)?)?;
    m.add_function(wrap_pyfunction!(filter_strings, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
