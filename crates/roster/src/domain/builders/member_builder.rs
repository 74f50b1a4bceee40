// crates/roster/src/domain/builders/member_builder.rs

use chrono::{DateTime, Utc};
use shared_kernel::errors::Result;

use crate::domain::entities::{Member, NewMember};
use crate::domain::value_objects::{BirthDate, City, Country, MemberId, PersonName};

pub struct MemberBuilder {
    first_name: PersonName,
    last_name: PersonName,
    birth_date: BirthDate,
    country: Country,
    city: City,
}

impl MemberBuilder {
    /// Chemin 1 : CRÉATION (Via le use case d'inscription)
    pub fn new(
        first_name: PersonName,
        last_name: PersonName,
        birth_date: BirthDate,
        country: Country,
        city: City,
    ) -> Self {
        Self {
            first_name,
            last_name,
            birth_date,
            country,
            city,
        }
    }

    /// Chemin 2 : RESTAURATION (Via le store)
    /// Reconstruit le membre sans aucune validation : la règle d'âge ne
    /// s'applique qu'à la création.
    pub fn restore(
        id: MemberId,
        first_name: PersonName,
        last_name: PersonName,
        birth_date: BirthDate,
        country: Country,
        city: City,
        created_at: DateTime<Utc>,
    ) -> Member {
        Member::restore(id, first_name, last_name, birth_date, country, city, created_at)
    }

    /// Finalise la création : vérifie l'âge minimum à `now` et fige `created_at`.
    pub fn build(self, now: DateTime<Utc>) -> Result<NewMember> {
        self.birth_date.validate_at(now.date_naive())?;

        Ok(NewMember {
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            country: self.country,
            city: self.city,
            created_at: now,
        })
    }
}
