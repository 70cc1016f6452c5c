//! Unit coverage for dataset loading and command dispatch.

use camino::Utf8PathBuf;
use clap::Parser;
use rstest::rstest;
use taste_core::{ItemId, UserId};
use tempfile::TempDir;

use crate::dataset::parse_ratings;
use crate::error::{CliError, ParseRatingError};
use crate::{Cli, Command, PredictArgs, SimilarityArgs, execute};

const LOCKSTEP_RATINGS: &str = "\
# users 1 and 2 agree; only user 2 has rated item 30
1,10,5
1,20,3
2,10,4
2,20,2
2,30,4
";

fn ratings_file(dir: &TempDir, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from_path_buf(dir.path().join("ratings.csv")).expect("utf8 path");
    std::fs::write(path.as_std_path(), contents).expect("write ratings fixture");
    path
}

fn run_command(command: Command) -> Result<String, CliError> {
    let mut out = Vec::new();
    execute(command, &mut out)?;
    Ok(String::from_utf8(out).expect("command output is UTF-8"))
}

#[rstest]
fn parsing_skips_comments_and_blank_lines() {
    let table = parse_ratings("# header\n\n1,10,5\n  \n2,10,4\n").expect("valid ratings");
    assert_eq!(table.rating_count(), 2);
}

#[rstest]
fn parsing_applies_re_rating_semantics() {
    let table = parse_ratings("1,10,5\n1,10,2\n").expect("valid ratings");
    assert_eq!(table.rating_count(), 1);
    assert_eq!(table.rating(UserId::new(1), ItemId::new(10)), Some(2.0));
}

#[rstest]
#[case("1,10\n", 1)]
#[case("1,10,5\nseven,10,4\n", 2)]
#[case("1,10,5\n2,10,nan,extra\n", 2)]
fn parsing_reports_the_offending_line(#[case] contents: &str, #[case] expected_line: usize) {
    let (line, _) = parse_ratings(contents).expect_err("malformed ratings");
    assert_eq!(line, expected_line);
}

#[rstest]
fn parsing_rejects_non_finite_scores() {
    let (_, source) = parse_ratings("1,10,inf\n").expect_err("non-finite score");
    assert!(matches!(source, ParseRatingError::InvalidRating(_)));
}

#[rstest]
fn similarity_command_renders_text() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, LOCKSTEP_RATINGS);
    let output = run_command(Command::Similarity(SimilarityArgs {
        ratings: path,
        user_a: 1,
        user_b: 2,
        json: false,
    }))
    .expect("similarity succeeds");
    assert_eq!(output, "similarity(1, 2) = 1.000000\n");
}

#[rstest]
fn similarity_command_renders_json() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, LOCKSTEP_RATINGS);
    let output = run_command(Command::Similarity(SimilarityArgs {
        ratings: path,
        user_a: 1,
        user_b: 2,
        json: true,
    }))
    .expect("similarity succeeds");
    let payload: serde_json::Value =
        serde_json::from_str(&output).expect("output is valid JSON");
    assert_eq!(payload["user_a"], 1);
    assert_eq!(payload["similarity"], 1.0);
}

#[rstest]
fn predict_command_renders_estimate_with_neighbours() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, LOCKSTEP_RATINGS);
    let output = run_command(Command::Predict(PredictArgs {
        ratings: path,
        user: 1,
        item: 30,
        policy: "weighted-average".into(),
        neighbours: true,
        json: false,
    }))
    .expect("prediction succeeds");
    assert!(output.starts_with("predict(1, 30) = 4.000000\n"), "got: {output}");
    assert!(output.contains("neighbour 2"), "got: {output}");
}

#[rstest]
fn predict_command_reports_unavailable() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, "1,10,5\n2,40,4\n");
    let output = run_command(Command::Predict(PredictArgs {
        ratings: path,
        user: 1,
        item: 40,
        policy: "weighted-average".into(),
        neighbours: false,
        json: false,
    }))
    .expect("prediction succeeds");
    assert_eq!(output, "predict(1, 40) is unavailable\n");
}

#[rstest]
fn predict_command_renders_json_null_for_unavailable() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, "1,10,5\n2,40,4\n");
    let output = run_command(Command::Predict(PredictArgs {
        ratings: path,
        user: 1,
        item: 40,
        policy: "weighted-average".into(),
        neighbours: false,
        json: true,
    }))
    .expect("prediction succeeds");
    let payload: serde_json::Value =
        serde_json::from_str(&output).expect("output is valid JSON");
    assert!(payload["estimate"].is_null());
    assert_eq!(payload["policy"], "weighted-average");
}

#[rstest]
fn unknown_policy_is_rejected_before_loading() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, LOCKSTEP_RATINGS);
    let err = run_command(Command::Predict(PredictArgs {
        ratings: path,
        user: 1,
        item: 30,
        policy: "harmonic".into(),
        neighbours: false,
        json: false,
    }))
    .expect_err("unknown policy");
    assert!(matches!(err, CliError::InvalidPolicy { .. }));
}

#[rstest]
fn unknown_user_surfaces_a_typed_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = ratings_file(&dir, LOCKSTEP_RATINGS);
    let err = run_command(Command::Similarity(SimilarityArgs {
        ratings: path,
        user_a: 1,
        user_b: 9,
        json: false,
    }))
    .expect_err("user 9 unknown");
    assert!(matches!(err, CliError::Similarity(_)));
}

#[rstest]
fn missing_ratings_file_is_reported_with_its_path() {
    let err = run_command(Command::Similarity(SimilarityArgs {
        ratings: Utf8PathBuf::from("does-not-exist.csv"),
        user_a: 1,
        user_b: 2,
        json: false,
    }))
    .expect_err("missing file");
    assert!(matches!(err, CliError::ReadRatings { .. }));
}

#[rstest]
fn arguments_parse_into_the_expected_command() {
    let cli = Cli::try_parse_from([
        "taste",
        "predict",
        "--ratings",
        "ratings.csv",
        "--user",
        "1",
        "--item",
        "30",
        "--policy",
        "similarity-product",
    ])
    .expect("valid arguments");
    match cli.command {
        Command::Predict(args) => {
            assert_eq!(args.user, 1);
            assert_eq!(args.item, 30);
            assert_eq!(args.policy, "similarity-product");
            assert!(!args.neighbours);
        }
        Command::Similarity(_) => panic!("expected predict subcommand"),
    }
}
