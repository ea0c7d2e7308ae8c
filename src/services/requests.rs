//! Request lifecycle service

use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{MaintenanceRequest, RequestStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Look up a single request
    pub async fn get_request(&self, id: Uuid) -> AppResult<MaintenanceRequest> {
        self.repository.requests.get_by_id(id).await
    }

    /// A student's request history
    pub async fn student_history(&self, student_id: &str) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list_by_student(student_id).await
    }

    /// Every request on file (admin dashboard)
    pub async fn list_all(&self) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list_all().await
    }

    /// Update a request's status (admin surface). Terminal transitions
    /// release the assigned technician's load slot exactly once.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        self.repository.requests.update_status(id, status).await
    }

    /// Requests assigned to a technician
    pub async fn tasks_for(&self, technician: &str) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository.requests.list_by_technician(technician).await
    }

    /// Update the status of a task from the technician surface. The
    /// request must actually be assigned to the acting technician.
    pub async fn update_task(
        &self,
        technician: &str,
        id: Uuid,
        status: RequestStatus,
    ) -> AppResult<MaintenanceRequest> {
        let request = self.repository.requests.get_by_id(id).await?;
        if request.technician.as_deref() != Some(technician) {
            return Err(AppError::Authorization(
                "Request is not assigned to this technician".to_string(),
            ));
        }
        self.repository.requests.update_status(id, status).await
    }
}
