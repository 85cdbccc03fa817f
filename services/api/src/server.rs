use crate::cli::ServeArgs;
use crate::infra::{build_concierge, AppState, ForecastEngines};
use crate::routes::app_router;
use crate::scheduler::DemandAnalysisScheduler;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hotel_ai::config::AppConfig;
use hotel_ai::error::AppError;
use hotel_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const DEMAND_ANALYSIS_PERIOD: Duration = Duration::from_secs(60);

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));

    // The blocking HTTP client must be built off the async runtime.
    let concierge_config = config.concierge.clone();
    let concierge = tokio::task::spawn_blocking(move || build_concierge(&concierge_config))
        .await
        .map_err(|err| {
            hotel_ai::concierge::ConciergeError::Upstream(format!("client setup failed: {err}"))
        })??;
    if concierge.is_none() {
        info!("no concierge API key configured; chat endpoint will answer 503");
    }

    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        engines: Arc::new(ForecastEngines::standard()),
        concierge,
    };

    let scheduler = DemandAnalysisScheduler::start(DEMAND_ANALYSIS_PERIOD);

    let app = app_router()
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "revenue decision service ready");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    scheduler.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        // No signal handler available; fall back to running until killed.
        std::future::pending::<()>().await;
    }
}
