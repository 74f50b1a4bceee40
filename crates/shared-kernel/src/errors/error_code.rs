// crates/shared-kernel/src/errors/error_code.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationFailed,
    InvalidDate,
    UnknownCountry,
    UnsupportedTone,
    NotFound,
    AlreadyExists,
    GenerationFailed,
    GenerationTimeout,
    InternalError,
    InfrastructureFailure,
}
