// crates/roster/src/domain/value_objects/city.rs

use serde::{Deserialize, Serialize};
use shared_kernel::domain::value_objects::ValueObject;
use shared_kernel::errors::{DomainError, Result};
use std::fmt;

use crate::domain::value_objects::person_name::normalize;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct City(String);

impl City {
    pub const MAX_LENGTH: usize = 100;

    pub fn try_new(value: impl Into<String>) -> Result<Self> {
        let city = Self(normalize(&value.into()));
        city.validate()?;
        Ok(city)
    }

    pub fn from_raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for City {
    fn validate(&self) -> Result<()> {
        let count = self.0.chars().count();

        if count == 0 {
            return Err(DomainError::Validation {
                field: "city",
                reason: "City cannot be empty".into(),
            });
        }

        if count > Self::MAX_LENGTH {
            return Err(DomainError::Validation {
                field: "city",
                reason: format!("City too long (max {})", Self::MAX_LENGTH),
            });
        }

        Ok(())
    }
}

impl From<String> for City {
    fn from(value: String) -> Self {
        Self::from_raw(value)
    }
}

impl From<City> for String {
    fn from(city: City) -> Self {
        city.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
