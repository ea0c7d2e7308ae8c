//! Authentication endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::Trade};

/// Student login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    pub student_id: String,
    pub password: String,
}

/// Technician login request
#[derive(Deserialize, ToSchema)]
pub struct TechnicianLoginRequest {
    pub name: String,
    pub password: String,
}

/// Login response with bearer token
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// Display name of the authenticated actor
    pub name: String,
    /// Technician trade, for technician logins
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Trade>,
}

/// Authenticate a student
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid ID or password")
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, student) = state
        .services
        .auth
        .student_login(&request.student_id, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        name: student.name,
        role: None,
    }))
}

/// Authenticate a technician
#[utoipa::path(
    post,
    path = "/auth/technician/login",
    tag = "auth",
    request_body = TechnicianLoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn technician_login(
    State(state): State<crate::AppState>,
    Json(request): Json<TechnicianLoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (token, technician) = state
        .services
        .auth
        .technician_login(&request.name, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        name: technician.name,
        role: Some(technician.role),
    }))
}
