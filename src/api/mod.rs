//! API handlers for Campusfix REST endpoints

pub mod admin;
pub mod auth;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod technicians;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{error::AppError, models::ActorClaims, AppState};

/// Extractor for the authenticated actor from a JWT bearer token
pub struct AuthenticatedActor(pub ActorClaims);

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedActor {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        // Get the Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))?;

        // Check for Bearer token
        if !auth_header.starts_with("Bearer ") {
            return Err(AppError::Authentication("Invalid authorization header format".to_string()));
        }

        let token = &auth_header[7..];

        // Validate JWT token using the secret from configuration
        let claims = ActorClaims::from_token(token, &state.config.auth.jwt_secret)
            .map_err(|e| AppError::Authentication(e.to_string()))?;

        Ok(AuthenticatedActor(claims))
    }
}
