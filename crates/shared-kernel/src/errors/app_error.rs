// crates/shared-kernel/src/errors/app_error.rs

use crate::errors::{DomainError, ErrorCode};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Serialize, Clone)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        match error {
            // 1. Entité introuvable (404)
            DomainError::NotFound { entity, id } => Self::new(
                ErrorCode::NotFound,
                format!("{entity} with id '{id}' not found"),
            ),

            // 2. Conflit d'unicité - ex: même nom dans la même ville
            DomainError::AlreadyExists {
                entity,
                field,
                value,
            } => Self::new(
                ErrorCode::AlreadyExists,
                format!("{entity} with {field} '{value}' already exists"),
            ),

            // 3. Validation (422)
            DomainError::Validation { field, reason } => Self {
                code: ErrorCode::ValidationFailed,
                message: format!("Validation failed for {field}: {reason}"),
                details: Some(serde_json::json!({ "field": field, "reason": reason })),
            },

            DomainError::InvalidDate { value } => Self::new(
                ErrorCode::InvalidDate,
                format!("Invalid date '{value}'. Expected YYYY-MM-DD"),
            )
            .with_details(serde_json::json!({ "field": "birth_date", "value": value })),

            DomainError::UnknownCountry { country } => Self::new(
                ErrorCode::UnknownCountry,
                format!("Unknown country '{country}'"),
            )
            .with_details(serde_json::json!({ "field": "country", "value": country })),

            DomainError::UnsupportedTone { tone } => Self::new(
                ErrorCode::UnsupportedTone,
                format!("Unsupported tone '{tone}'. Expected one of: friendly, formal"),
            ),

            // 4. Chemin modèle hébergé (502 / 504)
            DomainError::GenerationFailed { reason } => Self::new(
                ErrorCode::GenerationFailed,
                format!("AI generation failed: {reason}"),
            ),

            DomainError::GenerationTimeout { timeout_ms } => Self::new(
                ErrorCode::GenerationTimeout,
                format!("AI generation timed out after {timeout_ms}ms"),
            ),

            // 5. Bug de programmation : on log le détail et on le masque au client
            DomainError::InvalidRationale { sentences } => {
                tracing::error!(
                    "❌ Generator broke the explanation contract ({} rationale sentences)",
                    sentences
                );
                Self::new(
                    ErrorCode::InternalError,
                    "An unexpected error occurred. Please try again later.",
                )
            }

            // 6. Erreurs techniques (500)
            DomainError::Infrastructure(detail) => {
                tracing::error!("❌ Infrastructure failure: {}", detail);
                Self::new(
                    ErrorCode::InfrastructureFailure,
                    "An unexpected error occurred. Please try again later.",
                )
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
