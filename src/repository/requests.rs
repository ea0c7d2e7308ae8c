//! Requests repository for database operations

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{request::RequestRow, MaintenanceRequest, RequestStatus},
};

const REQUEST_COLUMNS: &str = "request_id, student_id, query, category, technician, \
     start_time, end_time, assigned_time, student_free_time, status";

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Persist a freshly created request. This is the one write the
    /// submission pipeline must not survive failing.
    pub async fn insert(&self, request: &MaintenanceRequest) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO requests (request_id, student_id, query, category, technician,
                 start_time, end_time, assigned_time, student_free_time, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(request.request_id)
        .bind(&request.student_id)
        .bind(&request.query)
        .bind(request.category.as_str())
        .bind(&request.technician)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.assigned_time)
        .bind(request.student_free_time)
        .bind(request.status.as_str())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Get a request by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE request_id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Most recent requests, newest first (duplicate-detection window)
    pub async fn list_recent(&self, limit: i64) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceRequest::from).collect())
    }

    /// A student's full request history, oldest first
    pub async fn list_by_student(&self, student_id: &str) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE student_id = $1 ORDER BY created_at"
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceRequest::from).collect())
    }

    /// Requests assigned to a technician, oldest first
    pub async fn list_by_technician(&self, name: &str) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE technician = $1 ORDER BY created_at"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceRequest::from).collect())
    }

    /// Every request on file, oldest first (admin dashboard)
    pub async fn list_all(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let rows = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(MaintenanceRequest::from).collect())
    }

    /// Update a request's status, releasing the assigned technician's load
    /// slot when the request first reaches a terminal status.
    ///
    /// The row is locked for the whole transition so a request moving into
    /// `resolved`/`completed` decrements its technician exactly once, no
    /// matter how many times staff re-submit the same update.
    pub async fn update_status(
        &self,
        id: Uuid,
        new_status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, RequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM requests WHERE request_id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Request with id {} not found", id)))?;

        let mut request = MaintenanceRequest::from(row);
        let prior_status = request.status;

        sqlx::query("UPDATE requests SET status = $1 WHERE request_id = $2")
            .bind(new_status.as_str())
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if new_status.is_terminal() && !prior_status.is_terminal() {
            if let Some(technician) = &request.technician {
                sqlx::query(
                    "UPDATE technicians
                     SET current_load = GREATEST(current_load - 1, 0),
                         status = CASE WHEN current_load <= 1 THEN 'free' ELSE 'busy' END
                     WHERE name = $1",
                )
                .bind(technician)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;

        request.status = new_status;
        Ok(request)
    }

    /// Request counts per category, largest first (admin analytics)
    pub async fn count_by_category(&self) -> AppResult<Vec<(String, i64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) FROM requests GROUP BY category ORDER BY COUNT(*) DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
