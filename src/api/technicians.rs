//! Technician task endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{request::UpdateStatusPayload, ActorKind, MaintenanceRequest, RequestStatus},
};

use super::{admin::UpdateStatusResponse, AuthenticatedActor};

/// List the tasks assigned to a technician
#[utoipa::path(
    get,
    path = "/technicians/{name}/tasks",
    tag = "technicians",
    security(("bearer_auth" = [])),
    params(
        ("name" = String, Path, description = "Technician name")
    ),
    responses(
        (status = 200, description = "Assigned tasks", body = Vec<MaintenanceRequest>),
        (status = 403, description = "Not allowed to act for this technician")
    )
)]
pub async fn get_tasks(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
    Path(name): Path<String>,
) -> AppResult<Json<Vec<MaintenanceRequest>>> {
    claims.require_technician_access(&name)?;

    let tasks = state.services.requests.tasks_for(&name).await?;
    Ok(Json(tasks))
}

/// Update the status of an assigned task
#[utoipa::path(
    put,
    path = "/technicians/tasks/{id}/status",
    tag = "technicians",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Request ID")
    ),
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Task updated", body = UpdateStatusResponse),
        (status = 400, description = "Invalid status value"),
        (status = 403, description = "Task not assigned to this technician"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_task(
    State(state): State<crate::AppState>,
    AuthenticatedActor(claims): AuthenticatedActor,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> AppResult<Json<UpdateStatusResponse>> {
    let status: RequestStatus = payload
        .status
        .parse()
        .map_err(AppError::Validation)?;

    let request = match claims.actor {
        ActorKind::Admin => state.services.requests.update_status(id, status).await?,
        ActorKind::Technician => {
            state
                .services
                .requests
                .update_task(&claims.sub, id, status)
                .await?
        }
        ActorKind::Student => {
            return Err(AppError::Authorization(
                "Technician privileges required".to_string(),
            ))
        }
    };

    Ok(Json(UpdateStatusResponse {
        message: "Task updated".to_string(),
        request,
    }))
}
