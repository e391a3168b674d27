use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{SessionStore, UserRepository};
use super::service::{IdentityError, IdentityService};

/// Router builder exposing HTTP endpoints for login, signup, logout, and
/// session resolution.
pub fn identity_router<U, S>(service: Arc<IdentityService<U, S>>) -> Router
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    Router::new()
        .route("/api/v1/auth/login", post(login_handler::<U, S>))
        .route("/api/v1/auth/signup", post(signup_handler::<U, S>))
        .route("/api/v1/auth/logout", post(logout_handler::<U, S>))
        .route("/api/v1/auth/session", get(session_handler::<U, S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub(crate) async fn login_handler<U, S>(
    State(service): State<Arc<IdentityService<U, S>>>,
    axum::Json(request): axum::Json<LoginRequest>,
) -> Response
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match service.login(&request.email, &request.password).await {
        Ok(user) => (StatusCode::OK, axum::Json(user)).into_response(),
        Err(IdentityError::InvalidCredentials) => {
            let payload = json!({ "error": IdentityError::InvalidCredentials.to_string() });
            (StatusCode::UNAUTHORIZED, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn signup_handler<U, S>(
    State(service): State<Arc<IdentityService<U, S>>>,
    axum::Json(request): axum::Json<SignupRequest>,
) -> Response
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    match service
        .signup(&request.full_name, &request.email, &request.password)
        .await
    {
        Ok(user) => (StatusCode::CREATED, axum::Json(user)).into_response(),
        Err(error @ IdentityError::DuplicateEmail { .. }) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn logout_handler<U, S>(
    State(service): State<Arc<IdentityService<U, S>>>,
) -> Response
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    service.logout();
    (StatusCode::OK, axum::Json(json!({ "status": "logged out" }))).into_response()
}

pub(crate) async fn session_handler<U, S>(
    State(service): State<Arc<IdentityService<U, S>>>,
) -> Response
where
    U: UserRepository + 'static,
    S: SessionStore + 'static,
{
    // Serializes the resolved user directly, `null` when no session holds.
    match service.check_session().await {
        Ok(user) => (StatusCode::OK, axum::Json(user)).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: IdentityError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
