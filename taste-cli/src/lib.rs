//! Command-line interface for collaborative-filtering queries.
//!
//! The binary loads a ratings file into an in-memory table, then runs one
//! of the two engine operations over it and renders the result as text or
//! JSON. All of the interesting behaviour lives in `taste-core` and
//! `taste-predictor`; this crate only parses arguments, loads data, and
//! prints.

#![forbid(unsafe_code)]

use std::io::Write;

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use taste_core::{ItemId, UserId};
use taste_predictor::{AggregationPolicy, NeighbourPredictor, Prediction, similarity};

mod dataset;
mod error;

pub use error::{CliError, ParseRatingError};

use dataset::load_ratings;

/// Run the Taste CLI with the current process arguments.
///
/// # Errors
/// Returns [`CliError`] when argument parsing, data loading, or either
/// engine operation fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(cli.command, &mut out)
}

fn execute<W: Write>(command: Command, out: &mut W) -> Result<(), CliError> {
    match command {
        Command::Similarity(args) => run_similarity(&args, out),
        Command::Predict(args) => run_predict(&args, out),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "taste",
    about = "Collaborative-filtering queries over a ratings file",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Pearson similarity between two users.
    Similarity(SimilarityArgs),
    /// Predict the score a user would give an item.
    Predict(PredictArgs),
}

/// Arguments for the `similarity` subcommand.
#[derive(Debug, Args)]
struct SimilarityArgs {
    /// Path to the ratings file (one user,item,score triple per line).
    #[arg(long, value_name = "path")]
    ratings: Utf8PathBuf,
    /// First user identifier.
    #[arg(long, value_name = "id")]
    user_a: u64,
    /// Second user identifier.
    #[arg(long, value_name = "id")]
    user_b: u64,
    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

/// Arguments for the `predict` subcommand.
#[derive(Debug, Args)]
struct PredictArgs {
    /// Path to the ratings file (one user,item,score triple per line).
    #[arg(long, value_name = "path")]
    ratings: Utf8PathBuf,
    /// Target user identifier.
    #[arg(long, value_name = "id")]
    user: u64,
    /// Target item identifier.
    #[arg(long, value_name = "id")]
    item: u64,
    /// Aggregation policy: weighted-average or similarity-product.
    #[arg(long, value_name = "policy", default_value = "weighted-average")]
    policy: String,
    /// Also list the similarity-ranked neighbours.
    #[arg(long)]
    neighbours: bool,
    /// Emit JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn run_similarity<W: Write>(args: &SimilarityArgs, out: &mut W) -> Result<(), CliError> {
    let table = load_ratings(&args.ratings)?;
    let user_a = UserId::new(args.user_a);
    let user_b = UserId::new(args.user_b);
    let value = similarity(&table, user_a, user_b)?;

    if args.json {
        let payload = serde_json::json!({
            "user_a": args.user_a,
            "user_b": args.user_b,
            "similarity": value,
        });
        writeln!(out, "{payload}").map_err(CliError::WriteOutput)?;
    } else {
        writeln!(out, "similarity({user_a}, {user_b}) = {value:.6}")
            .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn run_predict<W: Write>(args: &PredictArgs, out: &mut W) -> Result<(), CliError> {
    let policy: AggregationPolicy = args
        .policy
        .parse()
        .map_err(|reason| CliError::InvalidPolicy { reason })?;
    let table = load_ratings(&args.ratings)?;
    let predictor = NeighbourPredictor::with_policy(table, policy);
    let user = UserId::new(args.user);
    let item = ItemId::new(args.item);

    let ranked = if args.neighbours {
        Some(predictor.neighbours(user, item)?)
    } else {
        None
    };
    let prediction = predictor.predict(user, item)?;

    if args.json {
        let neighbours = ranked.map(|list| {
            list.into_iter()
                .map(|n| {
                    serde_json::json!({
                        "user": n.user.get(),
                        "weight": n.weight,
                        "score": n.score,
                    })
                })
                .collect::<Vec<_>>()
        });
        let mut payload = serde_json::json!({
            "user": args.user,
            "item": args.item,
            "policy": policy.as_str(),
            "estimate": prediction.estimate(),
        });
        if let (Some(list), Some(object)) = (neighbours, payload.as_object_mut()) {
            object.insert("neighbours".into(), serde_json::Value::Array(list));
        }
        writeln!(out, "{payload}").map_err(CliError::WriteOutput)?;
    } else {
        match prediction {
            Prediction::Estimate(estimate) => {
                writeln!(out, "predict({user}, {item}) = {estimate:.6}")
                    .map_err(CliError::WriteOutput)?;
            }
            Prediction::Unavailable => {
                writeln!(out, "predict({user}, {item}) is unavailable")
                    .map_err(CliError::WriteOutput)?;
            }
        }
        if let Some(list) = ranked {
            for neighbour in list {
                writeln!(
                    out,
                    "  neighbour {} weight {:.6} score {}",
                    neighbour.user, neighbour.weight, neighbour.score,
                )
                .map_err(CliError::WriteOutput)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
