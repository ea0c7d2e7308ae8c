//! Technician roster service

use crate::{error::AppResult, models::Technician, repository::Repository};

#[derive(Clone)]
pub struct TechniciansService {
    repository: Repository,
}

impl TechniciansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Full roster with current loads (admin dashboard)
    pub async fn list_all(&self) -> AppResult<Vec<Technician>> {
        self.repository.technicians.list_all().await
    }
}
