// crates/roster/src/domain/value_objects/utc_offset.rs

use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::errors::{DomainError, Result};
use std::fmt;
use std::str::FromStr;

/// Décalage UTC fixe, à la minute près (ex: +05:30 pour l'Inde).
/// Sérialisé sous la forme "+HH:MM".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UtcOffset(FixedOffset);

impl UtcOffset {
    pub fn from_minutes(minutes: i32) -> Result<Self> {
        FixedOffset::east_opt(minutes * 60)
            .map(Self)
            .ok_or_else(|| DomainError::Validation {
                field: "timezone_offset",
                reason: format!("Offset of {minutes} minutes is out of range"),
            })
    }

    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    pub fn total_minutes(&self) -> i32 {
        self.0.local_minus_utc() / 60
    }

    /// Heure murale locale correspondant à un instant UTC
    pub fn local_time(&self, now_utc: DateTime<Utc>) -> NaiveDateTime {
        now_utc.with_timezone(&self.0).naive_local()
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.total_minutes();
        let sign = if minutes < 0 { '-' } else { '+' };
        let abs = minutes.abs();
        write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DomainError::Validation {
            field: "timezone_offset",
            reason: format!("'{s}' is not a valid offset (expected +HH:MM)"),
        };

        let trimmed = s.trim();
        let (sign, rest) = if let Some(rest) = trimmed.strip_prefix('+') {
            (1, rest)
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            (-1, rest)
        } else {
            return Err(invalid());
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let hours: i32 = hours.parse().map_err(|_| invalid())?;
        let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
        if !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        Self::from_minutes(sign * (hours * 60 + minutes))
    }
}

impl TryFrom<String> for UtcOffset {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<UtcOffset> for String {
    fn from(offset: UtcOffset) -> Self {
        offset.to_string()
    }
}
