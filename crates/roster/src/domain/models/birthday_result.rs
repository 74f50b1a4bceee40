// crates/roster/src/domain/models/birthday_result.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::Member;
use crate::domain::value_objects::{MemberId, UtcOffset};

/// Résultat dérivé, recalculé à chaque requête (jamais mis en cache : "now" bouge).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthdayResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberId>,
    pub age_years: u32,
    /// Date dans le fuseau local du membre
    pub next_birthday: NaiveDate,
    pub days_until: i64,
    pub timezone_offset: UtcOffset,
}

impl BirthdayResult {
    pub fn is_today(&self) -> bool {
        self.days_until == 0
    }

    pub fn is_within(&self, window_days: u32) -> bool {
        (0..=i64::from(window_days)).contains(&self.days_until)
    }
}

/// Membre accompagné de son anniversaire calculé, pour l'affichage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMember {
    #[serde(flatten)]
    pub member: Member,
    pub days_until_birthday: i64,
    pub birthday: BirthdayResult,
}

impl RankedMember {
    pub fn new(member: Member, birthday: BirthdayResult) -> Self {
        Self {
            days_until_birthday: birthday.days_until,
            member,
            birthday,
        }
    }
}
