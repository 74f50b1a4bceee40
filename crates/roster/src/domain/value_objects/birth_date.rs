// crates/roster/src/domain/value_objects/birth_date.rs

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveDate", into = "NaiveDate")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 125;
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Constructeur sécurisé (inscription) : `today` est fourni par l'appelant,
    /// jamais lu depuis l'horloge système.
    pub fn try_new(date: NaiveDate, today: NaiveDate) -> Result<Self> {
        let birth_date = Self(date);
        birth_date.validate_at(today)?;
        Ok(birth_date)
    }

    /// Reconstruction rapide (Infrastructure / store)
    pub fn from_raw(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse une date ISO-8601 sans appliquer les règles d'âge.
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|_| DomainError::InvalidDate {
                value: value.to_string(),
            })
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    /// Âge révolu à une date donnée
    pub fn age_at(&self, reference: NaiveDate) -> u32 {
        let mut age = reference.year() - self.0.year();
        if (reference.month(), reference.day()) < (self.0.month(), self.0.day()) {
            age -= 1;
        }

        age.max(0) as u32
    }

    pub fn is_leap_day(&self) -> bool {
        self.0.month() == 2 && self.0.day() == 29
    }

    /// Date de l'anniversaire pour une année donnée.
    /// Un 29 février tombe le 28 février les années non bissextiles.
    pub fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| {
                if self.is_leap_day() {
                    NaiveDate::from_ymd_opt(year, 2, 28)
                } else {
                    None
                }
            })
            .unwrap_or(self.0)
    }

    pub fn validate_at(&self, today: NaiveDate) -> Result<()> {
        if self.0 > today {
            return Err(DomainError::Validation {
                field: "birth_date",
                reason: "Birth date cannot be in the future".into(),
            });
        }

        let age = self.age_at(today);
        if age < Self::MIN_AGE {
            return Err(DomainError::Validation {
                field: "birth_date",
                reason: format!(
                    "Member must be at least {} years old. Current age would be {}",
                    Self::MIN_AGE,
                    age
                ),
            });
        }

        if age > Self::MAX_AGE {
            return Err(DomainError::Validation {
                field: "birth_date",
                reason: "Invalid birth date (exceeds biological limits)".into(),
            });
        }

        Ok(())
    }
}

// --- CONVERSIONS ---

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_raw(date)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(birth_date: BirthDate) -> Self {
        birth_date.0
    }
}

impl FromStr for BirthDate {
    type Err = DomainError;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}
