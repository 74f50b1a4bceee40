// crates/roster/src/domain/value_objects/country.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::Result;
use std::fmt;

use crate::domain::services::TimeZoneResolver;
use crate::domain::value_objects::UtcOffset;

/// Pays d'un membre. Un pays non résolu par la table des fuseaux est refusé
/// dès la construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct Country(String);

impl Country {
    /// Constructeur sécurisé : stocke l'orthographe canonique ("usa" -> "USA")
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let raw = value.into();
        let canonical = TimeZoneResolver::new().canonical_name(&raw)?;
        Ok(Self(canonical.to_string()))
    }

    /// Reconstruction rapide (Infrastructure / store)
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn utc_offset(&self) -> Result<UtcOffset> {
        TimeZoneResolver::new().resolve(&self.0)
    }
}

impl ValueObject for Country {
    fn validate(&self) -> Result<()> {
        TimeZoneResolver::new().lookup(&self.0).map(|_| ())
    }
}

impl From<String> for Country {
    fn from(value: String) -> Self {
        Self::from_raw(value)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.0
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
