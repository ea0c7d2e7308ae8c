//! Maintenance request model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::category::Category;

/// Request lifecycle status. The first four values are intake outcomes;
/// `working`, `resolved` and `completed` are set later by staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Matched,
    NoTimeMatch,
    NoTechnician,
    Working,
    Resolved,
    Completed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Matched => "matched",
            RequestStatus::NoTimeMatch => "no_time_match",
            RequestStatus::NoTechnician => "no_technician",
            RequestStatus::Working => "working",
            RequestStatus::Resolved => "resolved",
            RequestStatus::Completed => "completed",
        }
    }

    /// Terminal statuses release the assigned technician's load slot.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Resolved | RequestStatus::Completed)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(RequestStatus::Pending),
            "matched" => Ok(RequestStatus::Matched),
            "no_time_match" => Ok(RequestStatus::NoTimeMatch),
            "no_technician" => Ok(RequestStatus::NoTechnician),
            "working" => Ok(RequestStatus::Working),
            "resolved" => Ok(RequestStatus::Resolved),
            "completed" => Ok(RequestStatus::Completed),
            _ => Err(format!("Invalid request status: {}", s)),
        }
    }
}

impl From<String> for RequestStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(RequestStatus::Pending)
    }
}

/// Internal row structure for database queries (with String fields)
#[derive(Debug, Clone, FromRow)]
pub struct RequestRow {
    request_id: Uuid,
    student_id: String,
    query: String,
    category: String,
    technician: Option<String>,
    start_time: Option<i16>,
    end_time: Option<i16>,
    assigned_time: Option<i16>,
    student_free_time: Option<i16>,
    status: String,
}

impl From<RequestRow> for MaintenanceRequest {
    fn from(row: RequestRow) -> Self {
        MaintenanceRequest {
            request_id: row.request_id,
            student_id: row.student_id,
            query: row.query,
            category: Category::from(row.category),
            technician: row.technician,
            start_time: row.start_time,
            end_time: row.end_time,
            assigned_time: row.assigned_time,
            student_free_time: row.student_free_time,
            status: RequestStatus::from(row.status),
        }
    }
}

/// Full maintenance request record.
///
/// Field order is a public contract: downstream tooling reads the record
/// as `request_id, student_id, query, category, technician, start_time,
/// end_time, assigned_time, student_free_time, status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MaintenanceRequest {
    pub request_id: Uuid,
    pub student_id: String,
    /// Normalized query text as submitted through intake
    pub query: String,
    pub category: Category,
    /// Assigned technician's name, if dispatch succeeded
    pub technician: Option<String>,
    /// Technician's working-window snapshot at assignment
    pub start_time: Option<i16>,
    pub end_time: Option<i16>,
    /// Hour used for matching; prefers the student's stated hour
    pub assigned_time: Option<i16>,
    /// Raw hour extracted from the query text, if any
    pub student_free_time: Option<i16>,
    pub status: RequestStatus,
}

/// Submit request payload
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRequestPayload {
    #[validate(length(min = 1, message = "student_id is required"))]
    pub student_id: String,
    #[validate(length(min = 1, message = "query is required"))]
    pub query: String,
}

/// Status update payload (admin and technician surfaces)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusPayload {
    /// New status value (pending, working, matched, no_time_match,
    /// no_technician, resolved, completed)
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(RequestStatus::Resolved.is_terminal());
        assert!(RequestStatus::Completed.is_terminal());
        assert!(!RequestStatus::Working.is_terminal());
        assert!(!RequestStatus::NoTimeMatch.is_terminal());
    }

    #[test]
    fn test_status_parse_rejects_unknown() {
        assert!("done".parse::<RequestStatus>().is_err());
        assert_eq!(
            "no_time_match".parse::<RequestStatus>().unwrap(),
            RequestStatus::NoTimeMatch
        );
    }
}
