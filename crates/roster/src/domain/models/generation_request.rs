// crates/roster/src/domain/models/generation_request.rs

use crate::domain::entities::Member;
use crate::domain::value_objects::{Language, Tone};

/// Entrée d'un générateur de message. L'âge est calculé en amont par
/// `BirthdayClock` pour que le générateur reste indépendant de l'horloge.
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub member: &'a Member,
    pub age_years: u32,
    pub tone: Tone,
    pub language: Language,
}
