//! Issue-hint lookup table
//!
//! A small administrator-maintained mapping from known issue phrases to
//! the technician who usually handles them. Consulted only for
//! maintenance-department queries that the keyword boost did not resolve.

use sqlx::{FromRow, Pool, Postgres};

use crate::error::AppResult;

#[derive(Debug, Clone, FromRow)]
struct HintRow {
    issue: String,
    technician: String,
}

#[derive(Clone)]
pub struct HintsRepository {
    pool: Pool<Postgres>,
}

impl HintsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Name of the technician hinted for a query, if any word of a known
    /// issue phrase appears in the query text. First row wins.
    pub async fn lookup(&self, query: &str) -> AppResult<Option<String>> {
        let rows = sqlx::query_as::<_, HintRow>(
            "SELECT issue, technician FROM issue_hints ORDER BY issue",
        )
        .fetch_all(&self.pool)
        .await?;

        for row in rows {
            let issue = row.issue.to_lowercase();
            if issue.split_whitespace().any(|word| query.contains(word)) {
                return Ok(Some(row.technician));
            }
        }
        Ok(None)
    }
}
