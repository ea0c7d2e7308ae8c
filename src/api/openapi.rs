//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{admin, auth, health, requests, technicians};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Campusfix API",
        version = "0.9.0",
        description = "Campus Maintenance Helpdesk REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Campusfix Maintainers", email = "dev@campusfix.org")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::technician_login,
        // Requests
        requests::submit_request,
        requests::get_request,
        requests::student_history,
        // Admin
        admin::list_requests,
        admin::update_status,
        admin::list_technicians,
        admin::analytics,
        // Technicians
        technicians::get_tasks,
        technicians::update_task,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::TechnicianLoginRequest,
            auth::LoginResponse,
            // Requests
            crate::models::request::CreateRequestPayload,
            crate::models::request::UpdateStatusPayload,
            crate::models::MaintenanceRequest,
            crate::models::RequestStatus,
            crate::models::Category,
            requests::SubmitResponse,
            // Admin
            admin::UpdateStatusResponse,
            admin::AnalyticsResponse,
            // Technicians
            crate::models::Technician,
            crate::models::Trade,
            crate::models::TechStatus,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "requests", description = "Request intake and lookup"),
        (name = "admin", description = "Admin dashboard"),
        (name = "technicians", description = "Technician task management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
