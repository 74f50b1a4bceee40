// crates/roster/src/domain/value_objects/person_name.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

/// Prénom ou nom de famille d'un membre
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    pub const MAX_LENGTH: usize = 100;

    /// Constructeur sécurisé : `field` sert uniquement au message d'erreur
    /// ("first_name" / "last_name").
    pub fn try_new(field: &'static str, value: impl Into<String>) -> Result<Self> {
        let name = Self(normalize(&value.into()));
        name.check(field)?;
        Ok(name)
    }

    /// Reconstruction rapide (Infrastructure / store)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn check(&self, field: &'static str) -> Result<()> {
        let count = self.0.chars().count();

        if count == 0 {
            return Err(DomainError::Validation {
                field,
                reason: "Name cannot be empty".into(),
            });
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field,
                reason: format!("Name too long (max {})", Self::MAX_LENGTH),
            });
        }

        Ok(())
    }
}

/// Retire les caractères de contrôle et écrase les espaces multiples
pub(crate) fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl ValueObject for PersonName {
    fn validate(&self) -> Result<()> {
        self.check("name")
    }
}

// --- CONVERSIONS ---

impl From<String> for PersonName {
    fn from(value: String) -> Self {
        Self::from_raw(value)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
