//! Request intake orchestration
//!
//! Runs a submission through the whole pipeline: normalize, advisory
//! duplicate check, time extraction, classification, technician
//! assignment, persistence. Every stage except the final save degrades
//! gracefully; an unpersisted request is a lost ticket and is the one
//! hard failure.

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    config::IntakeConfig,
    error::AppResult,
    intake::{self, Selection},
    models::{Category, MaintenanceRequest, Trade},
    repository::Repository,
    services::classifier::CategoryModel,
};

/// Result of a processed submission
pub struct Submission {
    pub request: MaintenanceRequest,
    /// Advisory: id of a recent request this one appears to repeat
    pub duplicate_of: Option<Uuid>,
}

#[derive(Clone)]
pub struct IntakeService {
    repository: Repository,
    model: Option<Arc<dyn CategoryModel>>,
    config: IntakeConfig,
}

impl IntakeService {
    pub fn new(
        repository: Repository,
        model: Option<Arc<dyn CategoryModel>>,
        config: IntakeConfig,
    ) -> Self {
        Self {
            repository,
            model,
            config,
        }
    }

    /// Process one submission end to end
    pub async fn submit(&self, student_id: &str, raw_query: &str) -> AppResult<Submission> {
        let query = intake::normalize(raw_query);

        let recent = match self
            .repository
            .requests
            .list_recent(self.config.duplicate_window)
            .await
        {
            Ok(recent) => recent,
            Err(e) => {
                tracing::warn!("Duplicate window read failed, skipping check: {}", e);
                Vec::new()
            }
        };
        let duplicate_of =
            intake::find_duplicate(&query, &recent, self.config.duplicate_threshold);

        let student_hour = intake::extract_hour(&query);

        let (category, mut role) = resolve_category(&query, self.model.as_deref()).await;

        if role.is_none() && category == intake::MAINTENANCE_DEPARTMENT {
            role = self.hinted_role(&query).await;
            if role.is_none() {
                role = intake::auto_role(&query);
            }
        }

        let selection = match &role {
            Some(trade) => match self.repository.technicians.assign(trade, student_hour).await {
                Ok(selection) => selection,
                Err(e) => {
                    tracing::warn!("Technician assignment failed for {}: {}", trade, e);
                    Selection::no_technician()
                }
            },
            None => Selection::no_technician(),
        };

        let request = MaintenanceRequest {
            request_id: Uuid::new_v4(),
            student_id: student_id.to_string(),
            query,
            category,
            technician: selection.technician.clone(),
            start_time: selection.start_time,
            end_time: selection.end_time,
            // Prefer the hour the student stated over the assigned slot
            assigned_time: student_hour.or(selection.assigned_hour),
            student_free_time: student_hour,
            status: selection.outcome.as_status(),
        };

        self.repository.requests.insert(&request).await?;

        tracing::info!(
            request_id = %request.request_id,
            category = %request.category,
            status = %request.status,
            "request filed"
        );

        Ok(Submission {
            request,
            duplicate_of,
        })
    }

    /// Trade of the technician named by the issue-hint table, if any.
    /// Lookup failures are tolerated; this path is best-effort.
    async fn hinted_role(&self, query: &str) -> Option<Trade> {
        let hinted = match self.repository.hints.lookup(query).await {
            Ok(hinted) => hinted,
            Err(e) => {
                tracing::warn!("Issue-hint lookup failed: {}", e);
                None
            }
        }?;
        match self.repository.technicians.get_by_name(&hinted).await {
            Ok(Some(technician)) => Some(technician.role),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Hinted technician {} lookup failed: {}", hinted, e);
                None
            }
        }
    }
}

/// Resolve a category and, where possible, a trade for a normalized
/// query. Keyword boost wins outright; otherwise the statistical
/// classifier names the category, degrading to the maintenance
/// department when it is absent, fails, or returns an unknown label.
pub(crate) async fn resolve_category(
    query: &str,
    model: Option<&dyn CategoryModel>,
) -> (Category, Option<Trade>) {
    if let Some((category, trade)) = intake::keyword_boost(query) {
        return (category, Some(trade));
    }

    let category = match model {
        Some(model) => match model.predict(query).await {
            Ok(label) => match label.parse::<Category>() {
                Ok(category) => category,
                Err(_) => {
                    tracing::warn!("Classifier returned unknown label {:?}", label);
                    Category::Hostel
                }
            },
            Err(e) => {
                tracing::warn!("Classifier failed, defaulting category: {}", e);
                Category::Hostel
            }
        },
        None => Category::Hostel,
    };

    (category, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::classifier::MockCategoryModel;

    #[tokio::test]
    async fn test_keyword_boost_bypasses_model() {
        let mut model = MockCategoryModel::new();
        model.expect_predict().never();

        let (category, role) = resolve_category("fan not working", Some(&model)).await;
        assert_eq!(category, Category::Hostel);
        assert_eq!(role, Some(Trade::Electrician));
    }

    #[tokio::test]
    async fn test_model_names_category_when_no_keyword() {
        let mut model = MockCategoryModel::new();
        model
            .expect_predict()
            .returning(|_| Ok("Library".to_string()));

        let (category, role) = resolve_category("lost my borrowed book", Some(&model)).await;
        assert_eq!(category, Category::Library);
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_absent_model_defaults_to_hostel() {
        let (category, role) = resolve_category("strange smell in corridor", None).await;
        assert_eq!(category, Category::Hostel);
        assert_eq!(role, None);
    }

    #[tokio::test]
    async fn test_unknown_label_defaults_to_hostel() {
        let mut model = MockCategoryModel::new();
        model.expect_predict().returning(|_| Ok("Gym".to_string()));

        let (category, _) = resolve_category("strange smell in corridor", Some(&model)).await;
        assert_eq!(category, Category::Hostel);
    }

    #[tokio::test]
    async fn test_model_failure_defaults_to_hostel() {
        let mut model = MockCategoryModel::new();
        model
            .expect_predict()
            .returning(|_| Err(AppError::Classifier("boom".to_string())));

        let (category, _) = resolve_category("strange smell in corridor", Some(&model)).await;
        assert_eq!(category, Category::Hostel);
    }
}
