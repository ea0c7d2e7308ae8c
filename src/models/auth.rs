//! JWT claims for authenticated actors

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Kind of authenticated actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Student,
    Technician,
    Admin,
}

/// JWT claims shared by the student, technician and admin surfaces
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorClaims {
    /// Student id or technician name
    pub sub: String,
    /// Display name
    pub name: String,
    pub actor: ActorKind,
    pub exp: i64,
    pub iat: i64,
}

impl ActorClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    pub fn is_admin(&self) -> bool {
        self.actor == ActorKind::Admin
    }

    /// Require admin privileges
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Authorization("Administrator privileges required".to_string()))
        }
    }

    /// Require the acting student (or an admin acting on their behalf)
    pub fn require_student_access(&self, student_id: &str) -> Result<(), AppError> {
        match self.actor {
            ActorKind::Admin => Ok(()),
            ActorKind::Student if self.sub == student_id => Ok(()),
            _ => Err(AppError::Authorization(
                "Not allowed to act for this student".to_string(),
            )),
        }
    }

    /// Require the named technician (or an admin)
    pub fn require_technician_access(&self, technician_name: &str) -> Result<(), AppError> {
        match self.actor {
            ActorKind::Admin => Ok(()),
            ActorKind::Technician if self.sub == technician_name => Ok(()),
            _ => Err(AppError::Authorization(
                "Not allowed to act for this technician".to_string(),
            )),
        }
    }
}
