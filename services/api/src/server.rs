use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryReportRepository, InMemorySessionStore, InMemoryUserRepository,
    StaticAgencyDirectory,
};
use crate::routes::with_api_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use scam_alerts::agencies::AgencyService;
use scam_alerts::config::AppConfig;
use scam_alerts::error::AppError;
use scam_alerts::identity::IdentityService;
use scam_alerts::reports::{ReportRouterState, ReportService};
use scam_alerts::telemetry;
use std::sync::atomic::Ordering;
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
    if let Some(latency_ms) = args.mock_latency_ms.take() {
        config.mock_api.latency_ms = latency_ms;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let latency = config.mock_api.latency();
    let users = Arc::new(InMemoryUserRepository::seeded());
    let reports = Arc::new(InMemoryReportRepository::seeded());
    let sessions = Arc::new(InMemorySessionStore::default());
    let agencies = Arc::new(StaticAgencyDirectory::seeded());

    let identity_service = Arc::new(IdentityService::new(
        Arc::clone(&users),
        sessions,
        latency,
    ));
    let report_service = Arc::new(ReportService::new(reports, users, latency));
    let agency_service = Arc::new(AgencyService::new(agencies, latency));

    let report_state = ReportRouterState {
        reports: report_service,
        identity: Arc::clone(&identity_service),
    };

    let app = with_api_routes(report_state, identity_service, agency_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "scam-alerts service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
