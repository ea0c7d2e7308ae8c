//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::Student};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a student by ID
    pub async fn get_by_id(&self, student_id: &str) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT student_id, name, password, is_admin FROM students WHERE student_id = $1",
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }
}
