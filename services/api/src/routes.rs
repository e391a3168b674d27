use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use scam_alerts::agencies::{agency_router, AgencyDirectory, AgencyService};
use scam_alerts::identity::{identity_router, IdentityService, SessionStore, UserRepository};
use scam_alerts::reports::{report_router, ReportRepository, ReportRouterState};
use serde_json::json;
use std::sync::Arc;

/// Assemble the application router: identity, reports, agencies, and the
/// operational endpoints.
pub(crate) fn with_api_routes<R, U, S, D>(
    reports: ReportRouterState<R, U, S>,
    identity: Arc<IdentityService<U, S>>,
    agencies: Arc<AgencyService<D>>,
) -> axum::Router
where
    R: ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
    D: AgencyDirectory + 'static,
{
    report_router(reports)
        .merge(identity_router(identity))
        .merge(agency_router(agencies))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
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
