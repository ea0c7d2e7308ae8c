//! Authentication service for the student and technician surfaces

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{ActorClaims, ActorKind, Student, Technician},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a student by id and return a JWT token. Staff
    /// accounts flagged as admin receive an admin token.
    pub async fn student_login(
        &self,
        student_id: &str,
        password: &str,
    ) -> AppResult<(String, Student)> {
        let student = self
            .repository
            .students
            .get_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid ID or password".to_string()))?;

        if !verify_password(&student.password, password)? {
            return Err(AppError::Authentication("Invalid ID or password".to_string()));
        }

        let actor = if student.is_admin {
            ActorKind::Admin
        } else {
            ActorKind::Student
        };
        let token = self.issue_token(&student.student_id, &student.name, actor)?;

        Ok((token, student))
    }

    /// Authenticate a technician by name and return a JWT token
    pub async fn technician_login(
        &self,
        name: &str,
        password: &str,
    ) -> AppResult<(String, Technician)> {
        let technician = self
            .repository
            .technicians
            .get_by_name(name)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        let stored = technician
            .password
            .as_deref()
            .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

        if !verify_password(stored, password)? {
            return Err(AppError::Authentication("Invalid credentials".to_string()));
        }

        let token = self.issue_token(&technician.name, &technician.name, ActorKind::Technician)?;

        Ok((token, technician))
    }

    fn issue_token(&self, sub: &str, name: &str, actor: ActorKind) -> AppResult<String> {
        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = ActorClaims {
            sub: sub.to_string(),
            name: name.to_string(),
            actor,
            exp,
            iat: now,
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }
}

/// Check a presented password against the stored credential. Hashed
/// credentials are verified with argon2; rows seeded before hashing was
/// introduced store the raw value and are compared directly.
pub(crate) fn verify_password(stored: &str, given: &str) -> AppResult<bool> {
    if stored.starts_with("$argon2") {
        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::Internal(format!("Corrupt password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(given.as_bytes(), &parsed)
            .is_ok())
    } else {
        Ok(stored == given)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};

    #[test]
    fn test_verify_argon2_hash() {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(b"1234", &salt)
            .unwrap()
            .to_string();

        assert!(verify_password(&hash, "1234").unwrap());
        assert!(!verify_password(&hash, "4321").unwrap());
    }

    #[test]
    fn test_verify_legacy_plaintext() {
        assert!(verify_password("1234", "1234").unwrap());
        assert!(!verify_password("1234", "4321").unwrap());
    }
}
