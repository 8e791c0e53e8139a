use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use fuzzy_rank::{fuzzy_match, rank_strings, MatchResult, ScoreWeights};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "fuzzy-rank")]
#[command(about = "Fuzzy type-ahead ranking CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with score weights
    #[arg(short, long, global = true)]
    weights: Option<PathBuf>,

    #[command(flatten)]
    overrides: WeightOverrides,
}

/// Per-weight overrides, applied on top of the weights file
#[derive(Args)]
struct WeightOverrides {
    #[arg(long, global = true, allow_hyphen_values = true)]
    adjacency_bonus: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    separator_bonus: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    camel_bonus: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    leading_letter_penalty: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    max_leading_letter_penalty: Option<f64>,

    #[arg(long, global = true, allow_hyphen_values = true)]
    unmatched_letter_penalty: Option<f64>,
}

impl WeightOverrides {
    fn apply(&self, mut weights: ScoreWeights) -> ScoreWeights {
        if let Some(v) = self.adjacency_bonus {
            weights = weights.with_adjacency_bonus(v);
        }
        if let Some(v) = self.separator_bonus {
            weights = weights.with_separator_bonus(v);
        }
        if let Some(v) = self.camel_bonus {
            weights = weights.with_camel_bonus(v);
        }
        if let Some(v) = self.leading_letter_penalty {
            weights = weights.with_leading_letter_penalty(v);
        }
        if let Some(v) = self.max_leading_letter_penalty {
            weights = weights.with_max_leading_letter_penalty(v);
        }
        if let Some(v) = self.unmatched_letter_penalty {
            weights = weights.with_unmatched_letter_penalty(v);
        }
        weights
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates (one per line) against a query
    Sort {
        /// Search query
        query: String,

        /// Read candidates from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Drop candidates that don't contain the query
        #[arg(long)]
        matches_only: bool,

        /// Drop candidates scoring below this value
        #[arg(long, allow_hyphen_values = true)]
        min_score: Option<f64>,

        /// Maximum results
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Score a single candidate
    Score {
        /// Candidate string
        candidate: String,

        /// Search query
        query: String,
    },

    /// Print the effective weights as JSON
    Weights,
}

#[derive(Serialize)]
struct Row<'a> {
    candidate: &'a str,
    #[serde(flatten)]
    result: MatchResult,
}

fn read_candidates(input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if !line.is_empty() {
            candidates.push(line.to_string());
        }
    }
    Ok(candidates)
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing (stderr, so ranked output stays pipeable)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let base = match &cli.weights {
        Some(path) => ScoreWeights::load(path)
            .with_context(|| format!("Failed to load weights from {}", path.display()))?,
        None => ScoreWeights::default(),
    };
    let weights = cli.overrides.apply(base);

    match cli.command {
        Commands::Sort { query, input, matches_only, min_score, limit, json } => {
            let candidates = read_candidates(input.as_deref())?;
            tracing::info!("Ranking {} candidates against {:?}", candidates.len(), query);

            let ranked = rank_strings(&candidates, &query, &weights)
                .into_iter()
                .filter(|(_, r)| !matches_only || r.matched)
                .filter(|(_, r)| min_score.map_or(true, |min| r.is_above(min)))
                .take(limit.unwrap_or(usize::MAX));

            for (candidate, result) in ranked {
                if json {
                    let row = Row { candidate, result };
                    println!("{}", serde_json::to_string(&row)?);
                } else {
                    let flag = if result.matched { "*" } else { " " };
                    println!("{:>8.1} {} {}", result.score, flag, candidate);
                }
            }
        }

        Commands::Score { candidate, query } => {
            let result = fuzzy_match(&candidate, &query, &weights);
            println!("Candidate: {}", candidate);
            println!("Query:     {}", query);
            println!("Matched:   {}", result.matched);
            println!("Score:     {:.1}", result.score);
        }

        Commands::Weights => {
            println!("{}", serde_json::to_string_pretty(&weights)?);
        }
    }

    Ok(())
}
