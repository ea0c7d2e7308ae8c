//! Technicians repository: lookups, the load ledger, and transactional
//! assignment

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    intake::{self, Selection},
    models::{technician::TechnicianRow, Technician, Trade},
};

#[derive(Clone)]
pub struct TechniciansRepository {
    pool: Pool<Postgres>,
}

impl TechniciansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every technician (admin dashboard)
    pub async fn list_all(&self) -> AppResult<Vec<Technician>> {
        let rows = sqlx::query_as::<_, TechnicianRow>(
            "SELECT name, role, start_time, end_time, current_load, status, password
             FROM technicians ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Technician::from).collect())
    }

    /// Get a technician by name
    pub async fn get_by_name(&self, name: &str) -> AppResult<Option<Technician>> {
        let row = sqlx::query_as::<_, TechnicianRow>(
            "SELECT name, role, start_time, end_time, current_load, status, password
             FROM technicians WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Technician::from))
    }

    /// Snapshot of all technicians of a trade, in stable store order
    pub async fn get_by_role(&self, role: &Trade) -> AppResult<Vec<Technician>> {
        let rows = sqlx::query_as::<_, TechnicianRow>(
            "SELECT name, role, start_time, end_time, current_load, status, password
             FROM technicians WHERE role = $1 ORDER BY name",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Technician::from).collect())
    }

    /// Select a technician for a trade and reserve them in one transaction.
    ///
    /// The candidate rows are read under `FOR UPDATE` so two concurrent
    /// submissions cannot both observe the same technician as free; the
    /// load increment lands before the lock is released.
    pub async fn assign(&self, role: &Trade, desired_hour: Option<i16>) -> AppResult<Selection> {
        let mut tx = self.pool.begin().await?;

        let rows = sqlx::query_as::<_, TechnicianRow>(
            "SELECT name, role, start_time, end_time, current_load, status, password
             FROM technicians WHERE role = $1 ORDER BY name FOR UPDATE",
        )
        .bind(role.as_str())
        .fetch_all(&mut *tx)
        .await?;

        let candidates: Vec<Technician> = rows.into_iter().map(Technician::from).collect();
        let selection = intake::select_technician(&candidates, desired_hour);

        if let Some(name) = &selection.technician {
            sqlx::query(
                "UPDATE technicians SET current_load = current_load + 1, status = 'busy'
                 WHERE name = $1",
            )
            .bind(name)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(selection)
    }

    /// Raise a technician's active-job count by one. No-op when the name
    /// is unknown.
    pub async fn increment_load(&self, name: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE technicians SET current_load = current_load + 1, status = 'busy'
             WHERE name = $1",
        )
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Lower a technician's active-job count by one, floored at zero;
    /// the technician becomes free exactly when the count reaches zero.
    /// No-op when the name is unknown.
    pub async fn decrement_load(&self, name: &str) -> AppResult<()> {
        sqlx::query(
            "UPDATE technicians
             SET current_load = GREATEST(current_load - 1, 0),
                 status = CASE WHEN current_load <= 1 THEN 'free' ELSE 'busy' END
             WHERE name = $1",
        )
        .bind(name)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
