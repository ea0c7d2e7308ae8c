//! Business logic services

pub mod auth;
pub mod classifier;
pub mod intake;
pub mod requests;
pub mod stats;
pub mod technicians;

use crate::{
    config::{AuthConfig, IntakeConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub intake: intake::IntakeService,
    pub requests: requests::RequestsService,
    pub technicians: technicians::TechniciansService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig, intake_config: IntakeConfig) -> Self {
        let model = classifier::from_config(&intake_config);
        Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            intake: intake::IntakeService::new(repository.clone(), model, intake_config),
            requests: requests::RequestsService::new(repository.clone()),
            technicians: technicians::TechniciansService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
