// crates/roster/src/domain/value_objects/tone.rs

use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Registre du message d'anniversaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Friendly,
    Formal,
}

impl Tone {
    pub const ALL: [Tone; 2] = [Tone::Friendly, Tone::Formal];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
        }
    }
}

impl FromStr for Tone {
    type Err = DomainError;

    /// Valeurs exactes uniquement : `FORMAL` ou ` formal` sont refusés
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "friendly" => Ok(Tone::Friendly),
            "formal" => Ok(Tone::Formal),
            _ => Err(DomainError::UnsupportedTone { tone: s.to_string() }),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
