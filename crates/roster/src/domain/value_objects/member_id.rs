// crates/roster/src/domain/value_objects/member_id.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Identifiant attribué par le store à la création (séquentiel, strictement positif).
/// L'ordre des ids suit l'ordre d'insertion : il sert de départage dans le classement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(i64);

impl MemberId {
    pub fn try_new(value: i64) -> Result<Self> {
        let id = Self(value);
        id.validate()?;
        Ok(id)
    }

    /// Reconstruction depuis un type sûr (store)
    pub fn new_unchecked(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ValueObject for MemberId {
    fn validate(&self) -> Result<()> {
        if self.0 <= 0 {
            return Err(DomainError::Validation {
                field: "member_id",
                reason: "Member ID must be a positive integer".to_string(),
            });
        }
        Ok(())
    }
}

// --- CONVERSIONS ---

impl FromStr for MemberId {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<i64>().map_err(|_| DomainError::Validation {
            field: "member_id",
            reason: format!("'{}' is not a valid member id", s),
        })?;
        Self::try_new(value)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
