// crates/shared-kernel/src/errors/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Date calendaire mal formée (ex: "1990-02-31", "01/01/1990")
    #[error("Invalid date '{value}'. Expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Pays absent de la table des fuseaux horaires
    #[error("Unknown country '{country}'")]
    UnknownCountry { country: String },

    #[error("Unsupported tone '{tone}'. Expected one of: friendly, formal")]
    UnsupportedTone { tone: String },

    #[error("{entity} not found with id '{id}'")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    #[error("{entity} already exists with {field} = '{value}'")]
    AlreadyExists {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// Le fournisseur du modèle est injoignable ou a répondu n'importe quoi
    #[error("Message generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// Délai en millisecondes : un délai inférieur à la seconde reste lisible
    #[error("Message generation timed out after {timeout_ms}ms")]
    GenerationTimeout { timeout_ms: u64 },

    /// Rupture de contrat d'un générateur : ne doit jamais atteindre un appelant
    #[error("Rationale must contain exactly 2 sentences, got {sentences}")]
    InvalidRationale { sentences: usize },

    /// Erreur liée à l'infrastructure (store, transport email)
    #[error("Infrastructure failure: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }

    /// Erreurs propres au chemin "modèle hébergé"
    pub fn is_generation_failure(&self) -> bool {
        matches!(
            self,
            Self::GenerationFailed { .. } | Self::GenerationTimeout { .. }
        )
    }
}
