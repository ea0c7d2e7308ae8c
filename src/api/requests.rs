//! Request submission and lookup endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{request::CreateRequestPayload, Category, MaintenanceRequest, RequestStatus},
};

use super::AuthenticatedActor;

/// Submission response: the persisted record's fields plus the canned
/// department reply and the duplicate advisory
#[derive(Serialize, ToSchema)]
pub struct SubmitResponse {
    pub request_id: Uuid,
    pub category: Category,
    /// Canned acknowledgement for the resolved department
    pub message: String,
    pub technician: Option<String>,
    pub start_time: Option<i16>,
    pub end_time: Option<i16>,
    pub assigned_time: Option<i16>,
    pub student_free_time: Option<i16>,
    pub status: RequestStatus,
    pub is_duplicate: bool,
    pub duplicate_id: Option<Uuid>,
}

/// Submit a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    request_body = CreateRequestPayload,
    responses(
        (status = 201, description = "Request filed", body = SubmitResponse),
        (status = 400, description = "Invalid payload"),
        (status = 403, description = "Not allowed to file for this student")
    )
)]
pub async fn submit_request(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
    Json(payload): Json<CreateRequestPayload>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    claims.require_student_access(&payload.student_id)?;

    let submission = state
        .services
        .intake
        .submit(&payload.student_id, &payload.query)
        .await?;

    let request = submission.request;
    Ok((
        StatusCode::CREATED,
        Json(SubmitResponse {
            request_id: request.request_id,
            category: request.category,
            message: request.category.canned_reply().to_string(),
            technician: request.technician,
            start_time: request.start_time,
            end_time: request.end_time,
            assigned_time: request.assigned_time,
            student_free_time: request.student_free_time,
            status: request.status,
            is_duplicate: submission.duplicate_of.is_some(),
            duplicate_id: submission.duplicate_of,
        }),
    ))
}

/// Get the current state of a request
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    responses(
        (status = 200, description = "Request record", body = MaintenanceRequest),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    AuthenticatedActor(_claims): AuthenticatedActor,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MaintenanceRequest>> {
    let request = state.services.requests.get_request(id).await?;
    Ok(Json(request))
}

/// Get a student's request history
#[utoipa::path(
    get,
    path = "/students/{student_id}/requests",
    tag = "requests",
    security(("bearer_auth" = [])),
    params(
        ("student_id" = String, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Request history", body = Vec<MaintenanceRequest>),
        (status = 403, description = "Not allowed to read this student's history")
    )
)]
pub async fn student_history(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
    Path(student_id): Path<String>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require_student_access(&student_id)?;

    let history = state.services.requests.student_history(&student_id).await?;
    Ok(Json(history))
}
