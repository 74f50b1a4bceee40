// crates/roster/src/domain/services/birthday_clock.rs

use chrono::{DateTime, Datelike, Utc};
use shared_kernel::domain::entities::Entity;
use shared_kernel::errors::Result;

use crate::domain::entities::Member;
use crate::domain::models::BirthdayResult;
use crate::domain::services::TimeZoneResolver;
use crate::domain::value_objects::BirthDate;

/// Calcule âge, prochain anniversaire et jours restants dans le fuseau du membre.
/// Fonction pure de ses entrées : "now" est toujours fourni par l'appelant.
#[derive(Debug, Default, Clone, Copy)]
pub struct BirthdayClock {
    resolver: TimeZoneResolver,
}

impl BirthdayClock {
    pub fn new(resolver: TimeZoneResolver) -> Self {
        Self { resolver }
    }

    pub fn compute(
        &self,
        birth_date: &BirthDate,
        country: &str,
        now_utc: DateTime<Utc>,
    ) -> Result<BirthdayResult> {
        let offset = self.resolver.resolve(country)?;
        let today = offset.local_time(now_utc).date();

        let age_years = birth_date.age_at(today);

        // Un anniversaire tombant aujourd'hui (heure locale) reste "à venir" : days_until = 0
        let mut next_birthday = birth_date.occurrence_in(today.year());
        if next_birthday < today {
            next_birthday = birth_date.occurrence_in(today.year() + 1);
        }

        Ok(BirthdayResult {
            member_id: None,
            age_years,
            next_birthday,
            days_until: (next_birthday - today).num_days(),
            timezone_offset: offset,
        })
    }

    /// Variante pour une date brute "YYYY-MM-DD" (InvalidDate si mal formée)
    pub fn compute_str(
        &self,
        birth_date: &str,
        country: &str,
        now_utc: DateTime<Utc>,
    ) -> Result<BirthdayResult> {
        let birth_date = BirthDate::parse(birth_date)?;
        self.compute(&birth_date, country, now_utc)
    }

    pub fn compute_for(&self, member: &Member, now_utc: DateTime<Utc>) -> Result<BirthdayResult> {
        let mut result = self.compute(member.birth_date(), member.country().as_str(), now_utc)?;
        result.member_id = Some(*member.id());
        Ok(result)
    }
}
