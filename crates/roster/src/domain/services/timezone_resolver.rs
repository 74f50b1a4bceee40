// crates/roster/src/domain/services/timezone_resolver.rs

use once_cell::sync::Lazy;
use shared_kernel::errors::{DomainError, Result};
use std::collections::HashMap;

use crate::domain::value_objects::UtcOffset;

/// Une entrée de la table statique pays -> fuseau
#[derive(Debug, Clone, Copy)]
pub struct CountryTimezone {
    pub name: &'static str,
    /// Zone IANA de référence (informative, le calcul utilise l'offset fixe)
    pub zone: &'static str,
    pub offset_minutes: i32,
    pub aliases: &'static [&'static str],
}

/// Pour ajouter un pays : ajouter une ligne, jamais une branche.
const COUNTRY_TIMEZONES: &[CountryTimezone] = &[
    CountryTimezone { name: "USA", zone: "America/New_York", offset_minutes: -5 * 60, aliases: &["United States", "US"] },
    CountryTimezone { name: "UK", zone: "Europe/London", offset_minutes: 0, aliases: &["United Kingdom", "GB"] },
    CountryTimezone { name: "Germany", zone: "Europe/Berlin", offset_minutes: 60, aliases: &["Deutschland", "DE"] },
    CountryTimezone { name: "Japan", zone: "Asia/Tokyo", offset_minutes: 9 * 60, aliases: &["JP"] },
    CountryTimezone { name: "Canada", zone: "America/Toronto", offset_minutes: -5 * 60, aliases: &["CA"] },
    CountryTimezone { name: "India", zone: "Asia/Kolkata", offset_minutes: 5 * 60 + 30, aliases: &["IN"] },
    CountryTimezone { name: "Australia", zone: "Australia/Sydney", offset_minutes: 10 * 60, aliases: &["AU"] },
    CountryTimezone { name: "Brazil", zone: "America/Sao_Paulo", offset_minutes: -3 * 60, aliases: &["Brasil", "BR"] },
];

/// Index construit une seule fois : nom ou alias en minuscules -> entrée
static INDEX: Lazy<HashMap<String, &'static CountryTimezone>> = Lazy::new(|| {
    COUNTRY_TIMEZONES
        .iter()
        .flat_map(|entry| {
            std::iter::once(entry.name)
                .chain(entry.aliases.iter().copied())
                .map(move |key| (key.to_lowercase(), entry))
        })
        .collect()
});

/// Résolution pays -> décalage UTC fixe. Pur, sans I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeZoneResolver;

impl TimeZoneResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn lookup(&self, country: &str) -> Result<&'static CountryTimezone> {
        INDEX
            .get(&country.trim().to_lowercase())
            .copied()
            .ok_or_else(|| DomainError::UnknownCountry {
                country: country.to_string(),
            })
    }

    pub fn resolve(&self, country: &str) -> Result<UtcOffset> {
        UtcOffset::from_minutes(self.lookup(country)?.offset_minutes)
    }

    /// Orthographe canonique (ex: "united kingdom" -> "UK")
    pub fn canonical_name(&self, country: &str) -> Result<&'static str> {
        Ok(self.lookup(country)?.name)
    }

    pub fn supported_countries(&self) -> impl Iterator<Item = &'static str> {
        COUNTRY_TIMEZONES.iter().map(|entry| entry.name)
    }
}
