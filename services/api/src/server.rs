use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::scoring_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use candidate_scoring::config::AppConfig;
use candidate_scoring::error::AppError;
use candidate_scoring::scoring::ScoringEngine;
use candidate_scoring::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let rubric = config.rubric.resolve()?;
    info!(
        rubric = ?config.rubric.path,
        band = ?rubric.experience.required_band,
        required_keywords = rubric.skills.required.len(),
        "scoring rubric loaded"
    );

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engine: Arc::new(ScoringEngine::new(rubric)),
    };

    let app = scoring_routes()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "candidate scoring service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
