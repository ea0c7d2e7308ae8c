//! Admin dashboard endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{request::UpdateStatusPayload, MaintenanceRequest, RequestStatus, Technician},
};

use super::AuthenticatedActor;

/// Status update response
#[derive(Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    pub message: String,
    pub request: MaintenanceRequest,
}

/// Category analytics response
#[derive(Serialize, ToSchema)]
pub struct AnalyticsResponse {
    /// Request counts per category, largest first
    #[schema(value_type = Object)]
    pub by_category: IndexMap<String, i64>,
}

/// List every request on file
#[utoipa::path(
    get,
    path = "/admin/requests",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All requests", body = Vec<MaintenanceRequest>),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require_admin()?;

    let requests = state.services.requests.list_all().await?;
    Ok(Json(requests))
}

/// Update a request's status
#[utoipa::path(
    put,
    path = "/admin/requests/{id}/status",
    tag = "admin",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 400, description = "Invalid status value"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_status(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> AppResult<Json<UpdateStatusResponse>> {
    claims.require_admin()?;

    let status: RequestStatus = payload
        .status
        .parse()
        .map_err(AppError::Validation)?;

    let request = state.services.requests.update_status(id, status).await?;

    Ok(Json(UpdateStatusResponse {
        message: "Status updated".to_string(),
        request,
    }))
}

/// List the technician roster with current loads
#[utoipa::path(
    get,
    path = "/admin/technicians",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Technician roster", body = Vec<Technician>),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn list_technicians(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
) -> AppResult<Json<Vec<Technician>>> {
    claims.require_admin()?;

    let technicians = state.services.technicians.list_all().await?;
    Ok(Json(technicians))
}

/// Request counts per category
#[utoipa::path(
    get,
    path = "/admin/analytics",
    tag = "admin",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Category analytics", body = AnalyticsResponse),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn analytics(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
) -> AppResult<Json<AnalyticsResponse>> {
    claims.require_admin()?;

    let by_category = state.services.stats.by_category().await?;
    Ok(Json(AnalyticsResponse { by_category }))
}
