use crate::infra::resolve_today;
use candidate_scoring::config::{AppConfig, RubricSource};
use candidate_scoring::error::AppError;
use candidate_scoring::scoring::export::write_export;
use candidate_scoring::scoring::ranking::{rank, RankedApplicant};
use candidate_scoring::scoring::{
    ApplicantRecord, ApplicantSubmission, RankingSummary, ScoreRange, ScoreResult, ScoringEngine,
};
use candidate_scoring::telemetry;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding a single applicant record
    #[arg(long)]
    pub(crate) applicant: PathBuf,
    /// JSON rubric (defaults to SCORING_RUBRIC_PATH or the built-in rubric)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// Evaluation date for ongoing jobs (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// JSON array of `{ "id": ..., "applicant": { ... } }` entries
    #[arg(long)]
    pub(crate) applicants: PathBuf,
    /// JSON rubric (defaults to SCORING_RUBRIC_PATH or the built-in rubric)
    #[arg(long)]
    pub(crate) rubric: Option<PathBuf>,
    /// Evaluation date for ongoing jobs (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Drop applicants scoring below this total
    #[arg(long)]
    pub(crate) min_score: Option<u8>,
    /// Drop applicants scoring above this total
    #[arg(long)]
    pub(crate) max_score: Option<u8>,
    /// Write the ranking as CSV to this path instead of printing JSON
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ScoreReport {
    today: NaiveDate,
    result: ScoreResult,
}

#[derive(Debug, Serialize)]
struct RankReport {
    today: NaiveDate,
    ranking: Vec<RankedApplicant>,
    summary: RankingSummary,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        applicant,
        rubric,
        today,
    } = args;

    let engine = load_engine(rubric)?;
    let record: ApplicantRecord = read_json(&applicant)?;
    let today = resolve_today(today);

    let result = engine.score(&record, today);
    println!(
        "{}",
        serde_json::to_string_pretty(&ScoreReport { today, result })?
    );
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        applicants,
        rubric,
        today,
        min_score,
        max_score,
        csv,
    } = args;

    let engine = load_engine(rubric)?;
    let submissions: Vec<ApplicantSubmission> = read_json(&applicants)?;
    let today = resolve_today(today);

    let range = ScoreRange {
        min: min_score,
        max: max_score,
    };
    let ranking = range.apply(rank(&engine, &submissions, today));

    match csv {
        Some(path) => {
            let file = File::create(&path)?;
            write_export(BufWriter::new(file), &ranking)?;
            info!(path = %path.display(), rows = ranking.len(), "ranking exported");
        }
        None => {
            let summary = RankingSummary::from_ranking(&ranking);
            let report = RankReport {
                today,
                ranking,
                summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load_engine(rubric: Option<PathBuf>) -> Result<ScoringEngine, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let source = match rubric {
        Some(path) => RubricSource { path: Some(path) },
        None => config.rubric,
    };
    Ok(ScoringEngine::new(source.resolve()?))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
