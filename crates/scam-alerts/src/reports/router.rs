use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::identity::{IdentityService, SessionStore, UserRepository};
use crate::storage::RepositoryError;

use super::domain::{ReportId, ReportStatus};
use super::moderation::authorize_moderator;
use super::service::{ReportService, ReportServiceError, ReportSubmission};
use super::views::{admin_listing, landing_page, paginate, public_listing, StatusFilter, PUBLIC_PAGE_SIZE};

/// Shared state for the report routes. Moderation endpoints resolve the
/// acting user through the identity service before touching reports.
pub struct ReportRouterState<R, U, S> {
    pub reports: Arc<ReportService<R, U>>,
    pub identity: Arc<IdentityService<U, S>>,
}

impl<R, U, S> Clone for ReportRouterState<R, U, S> {
    fn clone(&self) -> Self {
        Self {
            reports: Arc::clone(&self.reports),
            identity: Arc::clone(&self.identity),
        }
    }
}

/// Router builder exposing HTTP endpoints for report intake, public
/// listings, and moderation.
pub fn report_router<R, U, S>(state: ReportRouterState<R, U, S>) -> Router
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route(
            "/api/v1/reports",
            get(admin_listing_handler::<R, U, S>).post(submit_handler::<R, U, S>),
        )
        .route(
            "/api/v1/reports/public",
            get(public_listing_handler::<R, U, S>),
        )
        .route("/api/v1/reports/latest", get(latest_handler::<R, U, S>))
        .route(
            "/api/v1/reports/:report_id/status",
            patch(update_status_handler::<R, U, S>),
        )
        .route(
            "/api/v1/reports/:report_id",
            delete(delete_handler::<R, U, S>),
        )
        .with_state(state)
}

#[derive(Debug, Default, Deserialize)]
pub struct AdminListingQuery {
    #[serde(default)]
    pub status: StatusFilter,
}

#[derive(Debug, Default, Deserialize)]
pub struct PublicListingQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default = "first_page")]
    pub page: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ReportStatus,
}

fn first_page() -> usize {
    1
}

pub(crate) async fn admin_listing_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    Query(query): Query<AdminListingQuery>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_moderator(&state.identity).await {
        return denied;
    }

    match state.reports.list().await {
        Ok(reports) => {
            let listing = admin_listing(&reports, query.status);
            (StatusCode::OK, axum::Json(listing)).into_response()
        }
        Err(error) => service_error(error),
    }
}

pub(crate) async fn public_listing_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    Query(query): Query<PublicListingQuery>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.reports.list().await {
        Ok(reports) => {
            let listing = public_listing(&reports, &query.search);
            let page = paginate(&listing, query.page, PUBLIC_PAGE_SIZE);
            (StatusCode::OK, axum::Json(page)).into_response()
        }
        Err(error) => service_error(error),
    }
}

pub(crate) async fn latest_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    Query(query): Query<SearchQuery>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.reports.list().await {
        Ok(reports) => {
            let listing = landing_page(&reports, &query.search);
            (StatusCode::OK, axum::Json(listing)).into_response()
        }
        Err(error) => service_error(error),
    }
}

pub(crate) async fn submit_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    axum::Json(submission): axum::Json<ReportSubmission>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match state.reports.submit(submission).await {
        Ok(report) => (StatusCode::CREATED, axum::Json(report)).into_response(),
        Err(error @ ReportServiceError::UnknownSubmitter(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(error) => service_error(error),
    }
}

pub(crate) async fn update_status_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    Path(report_id): Path<String>,
    axum::Json(request): axum::Json<UpdateStatusRequest>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_moderator(&state.identity).await {
        return denied;
    }

    let id = ReportId(report_id);
    match state.reports.update_status(&id, request.status).await {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => service_error(error),
    }
}

pub(crate) async fn delete_handler<R, U, S>(
    State(state): State<ReportRouterState<R, U, S>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: super::repository::ReportRepository + 'static,
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    if let Err(denied) = require_moderator(&state.identity).await {
        return denied;
    }

    let id = ReportId(report_id);
    match state.reports.delete(&id).await {
        Ok(()) => (StatusCode::OK, axum::Json(json!({ "success": true }))).into_response(),
        Err(error) => service_error(error),
    }
}

/// Resolve the session user and require the ADMIN role. Not a security
/// boundary: the session token is a client claim, the same as the
/// original browser app's role check.
async fn require_moderator<U, S>(identity: &IdentityService<U, S>) -> Result<(), Response>
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    let user = match identity.check_session().await {
        Ok(Some(user)) => user,
        Ok(None) => {
            let payload = json!({ "error": "no active session" });
            return Err((StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response());
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return Err((StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response());
        }
    };

    authorize_moderator(&user).map_err(|error| {
        let payload = json!({ "error": error.to_string() });
        (StatusCode::FORBIDDEN, axum::Json(payload)).into_response()
    })
}

fn service_error(error: ReportServiceError) -> Response {
    let status = match &error {
        ReportServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ReportServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
