// crates/roster/src/domain/value_objects/language.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Langue par défaut d'un pays (clé : nom canonique en minuscules)
static COUNTRY_LANGUAGES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("usa", "en"),
        ("uk", "en"),
        ("canada", "en"),
        ("australia", "en"),
        ("germany", "de"),
        ("japan", "ja"),
        ("brazil", "pt"),
        ("india", "hi"),
    ])
});

/// Code de langue transmis tel quel au générateur (aucune traduction ici).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Language(String);

impl Language {
    pub const DEFAULT: &'static str = "en";

    /// Constructeur sécurisé (API)
    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        // Certains clients envoient "pt_BR" : on normalise vers "pt-br"
        let normalized = value.into().trim().replace('_', "-").to_lowercase();

        let language = Self(normalized);
        language.validate()?;
        Ok(language)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Langue préférée d'un pays, "en" pour un pays non référencé
    pub fn for_country(country: &str) -> Self {
        let key = country.trim().to_lowercase();
        let code = COUNTRY_LANGUAGES
            .get(key.as_str())
            .copied()
            .unwrap_or(Self::DEFAULT);
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Language {
    fn validate(&self) -> Result<()> {
        let len = self.0.len();

        // BCP-47 léger : min 2 (ex: "en"), max 10 (ex: "zh-hans-cn")
        if !(2..=10).contains(&len) {
            return Err(DomainError::Validation {
                field: "language",
                reason: format!("Language code length invalid ({}). Expected BCP-47 format.", self.0),
            });
        }

        if !self.0.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomainError::Validation {
                field: "language",
                reason: "Language code contains invalid characters".into(),
            });
        }

        Ok(())
    }
}

impl Default for Language {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

// --- CONVERSIONS ---

impl FromStr for Language {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for Language {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        Self::try_new(value)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.0
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
