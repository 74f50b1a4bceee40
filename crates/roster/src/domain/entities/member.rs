// crates/roster/src/domain/entities/member.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared_kernel::domain::entities::{Entity, EntityMetadata};

use crate::domain::builders::MemberBuilder;
use crate::domain::value_objects::{BirthDate, City, Country, MemberId, PersonName};

/// Clé d'unicité normalisée (trim + minuscules) :
/// "John Smith / USA / New York" == "john smith / usa / new york"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberKey {
    pub first_name: String,
    pub last_name: String,
    pub country: String,
    pub city: String,
}

impl MemberKey {
    fn of(first_name: &PersonName, last_name: &PersonName, country: &Country, city: &City) -> Self {
        let norm = |s: &str| s.trim().to_lowercase();
        Self {
            first_name: norm(first_name.as_str()),
            last_name: norm(last_name.as_str()),
            country: norm(country.as_str()),
            city: norm(city.as_str()),
        }
    }
}

impl std::fmt::Display for MemberKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} in {}, {}", self.first_name, self.last_name, self.city, self.country)
    }
}

/// Membre validé, pas encore persisté (ni id ni ligne en base).
#[derive(Debug, Clone, PartialEq)]
pub struct NewMember {
    pub(crate) first_name: PersonName,
    pub(crate) last_name: PersonName,
    pub(crate) birth_date: BirthDate,
    pub(crate) country: Country,
    pub(crate) city: City,
    pub(crate) created_at: DateTime<Utc>,
}

impl NewMember {
    pub fn builder(
        first_name: PersonName,
        last_name: PersonName,
        birth_date: BirthDate,
        country: Country,
        city: City,
    ) -> MemberBuilder {
        MemberBuilder::new(first_name, last_name, birth_date, country, city)
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn uniqueness_key(&self) -> MemberKey {
        MemberKey::of(&self.first_name, &self.last_name, &self.country, &self.city)
    }

    /// Appelé par le store au moment de l'insertion
    pub fn into_member(self, id: MemberId) -> Member {
        Member {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            country: self.country,
            city: self.city,
            created_at: self.created_at,
        }
    }
}

/// Membre du roster. Immuable une fois créé.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    first_name: PersonName,
    last_name: PersonName,
    birth_date: BirthDate,
    country: Country,
    city: City,
    created_at: DateTime<Utc>,
}

impl Member {
    // ==========================================
    // RESTAURATION (Infrastructure)
    // ==========================================

    pub(crate) fn restore(
        id: MemberId,
        first_name: PersonName,
        last_name: PersonName,
        birth_date: BirthDate,
        country: Country,
        city: City,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            birth_date,
            country,
            city,
            created_at,
        }
    }

    // ==========================================
    // GETTERS
    // ==========================================

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn last_name(&self) -> &PersonName {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_date(&self) -> &BirthDate {
        &self.birth_date
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn uniqueness_key(&self) -> MemberKey {
        MemberKey::of(&self.first_name, &self.last_name, &self.country, &self.city)
    }
}

impl EntityMetadata for Member {
    fn entity_name() -> &'static str {
        "Member"
    }
}

impl Entity for Member {
    type Id = MemberId;

    fn id(&self) -> &MemberId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
