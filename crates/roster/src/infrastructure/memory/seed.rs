// crates/roster/src/infrastructure/memory/seed.rs

use shared_kernel::clock::Clock;
use shared_kernel::errors::Result;

use crate::domain::entities::NewMember;
use crate::domain::repositories::MemberRepository;
use crate::domain::value_objects::{BirthDate, City, Country, PersonName};

/// (prénom, nom, date de naissance, pays, ville)
pub const SEED_MEMBERS: [(&str, &str, &str, &str, &str); 6] = [
    ("John", "Smith", "1990-03-15", "USA", "New York"),
    ("Emma", "Johnson", "1985-07-22", "UK", "London"),
    ("Hans", "Mueller", "1992-11-08", "Germany", "Berlin"),
    ("Yuki", "Tanaka", "1988-01-30", "Japan", "Tokyo"),
    ("Sophie", "Martin", "1995-05-12", "Canada", "Toronto"),
    ("Raj", "Patel", "1987-09-25", "India", "Mumbai"),
];

/// Insère le roster de démonstration. Les doublons sont ignorés,
/// l'opération peut donc être rejouée. Retourne le nombre de membres insérés.
pub async fn seed_roster(repo: &dyn MemberRepository, clock: &dyn Clock) -> Result<usize> {
    let now = clock.now();
    let mut inserted = 0;

    for (first, last, birth, country, city) in SEED_MEMBERS {
        let draft = NewMember::builder(
            PersonName::try_new("first_name", first)?,
            PersonName::try_new("last_name", last)?,
            BirthDate::parse(birth)?,
            Country::try_new(country)?,
            City::try_new(city)?,
        )
        .build(now)?;

        match repo.create(draft).await {
            Ok(_) => inserted += 1,
            Err(e) if e.is_already_exists() => continue,
            Err(e) => return Err(e),
        }
    }

    tracing::info!(inserted, "🌱 Seed roster loaded");
    Ok(inserted)
}
