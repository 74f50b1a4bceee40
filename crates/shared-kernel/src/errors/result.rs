// crates/shared-kernel/src/errors/result.rs

use crate::errors::{AppError, DomainError};

/// RESULT DU DOMAINE (Interne)
/// Utilisé par : value objects, services de domaine, use cases, ports.
pub type Result<T> = std::result::Result<T, DomainError>;

/// RESULT D'APPLICATION (Exécutable)
/// Utilisé par : API (handlers), bootstrap, configuration.
pub type AppResult<T> = std::result::Result<T, AppError>;
