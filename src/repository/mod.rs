//! Repository layer for database operations

pub mod hints;
pub mod requests;
pub mod students;
pub mod technicians;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub requests: requests::RequestsRepository,
    pub technicians: technicians::TechniciansRepository,
    pub students: students::StudentsRepository,
    pub hints: hints::HintsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            requests: requests::RequestsRepository::new(pool.clone()),
            technicians: technicians::TechniciansRepository::new(pool.clone()),
            students: students::StudentsRepository::new(pool.clone()),
            hints: hints::HintsRepository::new(pool.clone()),
            pool,
        }
    }
}
