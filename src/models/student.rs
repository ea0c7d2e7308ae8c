//! Student model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Student record. Read-only from the intake engine's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub student_id: String,
    pub name: String,
    /// Opaque credential material
    #[serde(skip_serializing)]
    pub password: String,
    /// Staff accounts with access to the admin surface
    pub is_admin: bool,
}
