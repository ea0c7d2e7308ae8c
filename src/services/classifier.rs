//! Statistical classifier collaborator
//!
//! The intake pipeline consumes a trained text classifier as a black box:
//! normalized query text in, department category label out. Deployments
//! without one simply leave `intake.classifier_url` unset and every
//! unboosted query falls back to the maintenance department.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    config::IntakeConfig,
    error::{AppError, AppResult},
};

/// Black-box category predictor
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryModel: Send + Sync {
    /// Predict a department category label for normalized query text
    async fn predict(&self, text: &str) -> AppResult<String>;
}

/// Classifier served over HTTP by a separate model-hosting process
pub struct RemoteClassifier {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteClassifier {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PredictResponse {
    category: String,
}

#[async_trait]
impl CategoryModel for RemoteClassifier {
    async fn predict(&self, text: &str) -> AppResult<String> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(&PredictRequest { text })
            .send()
            .await
            .map_err(|e| AppError::Classifier(format!("Classifier unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Classifier(format!(
                "Classifier returned {}",
                response.status()
            )));
        }

        let body: PredictResponse = response
            .json()
            .await
            .map_err(|e| AppError::Classifier(format!("Invalid classifier response: {}", e)))?;

        Ok(body.category)
    }
}

/// Build the optional classifier from configuration
pub fn from_config(config: &IntakeConfig) -> Option<Arc<dyn CategoryModel>> {
    config
        .classifier_url
        .as_ref()
        .map(|url| Arc::new(RemoteClassifier::new(url.clone())) as Arc<dyn CategoryModel>)
}
