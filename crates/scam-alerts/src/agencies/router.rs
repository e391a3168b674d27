use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Router};

use super::{AgencyDirectory, AgencyService};

/// Router builder exposing the read-only agency listing.
pub fn agency_router<D>(service: Arc<AgencyService<D>>) -> Router
where
    D: AgencyDirectory + 'static,
{
    Router::new()
        .route("/api/v1/agencies", get(list_handler::<D>))
        .with_state(service)
}

pub(crate) async fn list_handler<D>(
    State(service): State<Arc<AgencyService<D>>>,
) -> impl IntoResponse
where
    D: AgencyDirectory + 'static,
{
    (StatusCode::OK, axum::Json(service.list().await))
}
