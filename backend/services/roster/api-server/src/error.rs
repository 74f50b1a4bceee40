// backend/services/roster/api-server/src/error.rs

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_kernel::errors::{AppError, DomainError, ErrorCode};

/// Enveloppe HTTP autour d'`AppError`
#[derive(Debug)]
pub struct ApiError(pub AppError);

pub type ApiResult<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(self.0.code)
    }
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed
        | ErrorCode::InvalidDate
        | ErrorCode::UnknownCountry
        | ErrorCode::UnsupportedTone => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::AlreadyExists => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::GenerationTimeout => StatusCode::GATEWAY_TIMEOUT,
        ErrorCode::GenerationFailed => StatusCode::BAD_GATEWAY,
        ErrorCode::InternalError | ErrorCode::InfrastructureFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self(error.into())
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

// --- REJECTIONS ---

/// Requête illisible par un extracteur : même enveloppe qu'une erreur de validation
fn rejected(source: &'static str, reason: String) -> ApiError {
    tracing::warn!("⚠️ Rejected {} : {}", source, reason);
    ApiError(
        AppError::new(
            ErrorCode::ValidationFailed,
            format!("Invalid request {source}: {reason}"),
        )
        .with_details(serde_json::json!({ "source": source, "reason": reason })),
    )
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        rejected("body", rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        rejected("query", rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.0)).into_response()
    }
}
