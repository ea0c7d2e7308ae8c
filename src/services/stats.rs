//! Request analytics service

use indexmap::IndexMap;

use crate::{error::AppResult, repository::Repository};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Request counts per category, largest category first
    pub async fn by_category(&self) -> AppResult<IndexMap<String, i64>> {
        let counts = self.repository.requests.count_by_category().await?;
        Ok(counts.into_iter().collect())
    }
}
