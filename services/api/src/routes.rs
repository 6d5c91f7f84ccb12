use crate::infra::{deserialize_optional_date, resolve_today, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use candidate_scoring::error::AppError;
use candidate_scoring::scoring::export::export_to_string;
use candidate_scoring::scoring::ranking::{rank, RankedApplicant};
use candidate_scoring::scoring::{
    ApplicantRecord, ApplicantSubmission, RankingSummary, ScoreRange, ScoreResult,
    ScoringConfiguration,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) applicant: ApplicantRecord,
    #[serde(default)]
    pub(crate) rubric: Option<ScoringConfiguration>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) today: NaiveDate,
    pub(crate) result: ScoreResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RankRequest {
    pub(crate) applicants: Vec<ApplicantSubmission>,
    #[serde(default)]
    pub(crate) rubric: Option<ScoringConfiguration>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) score_range: ScoreRange,
}

#[derive(Debug, Serialize)]
pub(crate) struct RankResponse {
    pub(crate) today: NaiveDate,
    pub(crate) ranking: Vec<RankedApplicant>,
    /// Describes the returned (filtered) ranking.
    pub(crate) summary: RankingSummary,
}

pub(crate) fn scoring_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/score", post(score_endpoint))
        .route("/api/v1/rank", post(rank_endpoint))
        .route("/api/v1/rank/export", post(rank_export_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let ScoreRequest {
        applicant,
        rubric,
        today,
    } = payload;

    let engine = state.engine_for(rubric)?;
    let today = resolve_today(today);
    let result = engine.score(&applicant, today);

    info!(total = result.total, rating = %result.rating, "applicant scored via api");
    Ok(Json(ScoreResponse { today, result }))
}

pub(crate) async fn rank_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    let (today, ranking) = ranked(&state, payload)?;
    let summary = RankingSummary::from_ranking(&ranking);

    Ok(Json(RankResponse {
        today,
        ranking,
        summary,
    }))
}

pub(crate) async fn rank_export_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<RankRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (_, ranking) = ranked(&state, payload)?;
    let body = export_to_string(&ranking)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        body,
    ))
}

fn ranked(
    state: &AppState,
    payload: RankRequest,
) -> Result<(NaiveDate, Vec<RankedApplicant>), AppError> {
    let RankRequest {
        applicants,
        rubric,
        today,
        score_range,
    } = payload;

    let engine = state.engine_for(rubric)?;
    let today = resolve_today(today);
    let ranking = score_range.apply(rank(&engine, &applicants, today));
    Ok((today, ranking))
}
