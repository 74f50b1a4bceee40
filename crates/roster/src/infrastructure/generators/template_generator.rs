// crates/roster/src/infrastructure/generators/template_generator.rs

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use shared_kernel::errors::Result;

use crate::domain::models::{GeneratedMessage, GenerationRequest};
use crate::domain::ports::MessageGenerator;
use crate::domain::services::ExplanationBuilder;
use crate::domain::value_objects::Tone;

const GENERIC_PHRASE: &str = "Enjoy every moment of your special day!";

/// Formules locales, indexées par nom canonique de pays
static CULTURAL_PHRASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("USA", "Have a fantastic celebration!"),
        ("UK", "Cheers to another brilliant year!"),
        ("Germany", "Alles Gute zum Geburtstag!"),
        ("Japan", "Otanjoubi omedetou gozaimasu!"),
        ("Canada", "Have a wonderful celebration with friends and family!"),
        ("India", "Janamdin ki hardik shubhkamnayein!"),
        ("Australia", "Have a ripper of a day!"),
        ("Brazil", "Feliz aniversário!"),
    ])
});

/// Générateur déterministe à base de gabarits (mode MOCK_AI).
#[derive(Debug, Default, Clone)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub const MODEL: &'static str = "mock-generator-v1";
    pub const METHOD: &'static str = "template_based_generation";

    pub fn new() -> Self {
        Self
    }

    pub fn cultural_phrase(country: &str) -> &'static str {
        CULTURAL_PHRASES.get(country).copied().unwrap_or(GENERIC_PHRASE)
    }

    fn render(request: &GenerationRequest<'_>) -> String {
        let member = request.member;
        let ordinal = ordinal(request.age_years);
        let phrase = Self::cultural_phrase(member.country().as_str());

        match request.tone {
            Tone::Friendly => format!(
                "Happy Birthday, {}! Wishing you an amazing {} birthday filled with joy and laughter from all of us at Datavid. {}",
                member.first_name(),
                ordinal,
                phrase
            ),
            Tone::Formal => format!(
                "Dear {} {}, on behalf of Datavid, we wish you a very happy {} birthday and continued success in the year ahead. {}",
                member.first_name(),
                member.last_name(),
                ordinal,
                phrase
            ),
        }
    }
}

#[async_trait]
impl MessageGenerator for TemplateGenerator {
    fn model_name(&self) -> &str {
        Self::MODEL
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<GeneratedMessage> {
        let explanation = ExplanationBuilder::new(Self::MODEL, Self::METHOD)
            .with_parameter("tone", request.tone.as_str())
            .with_parameter("language", request.language.as_str())
            .with_rationale(format!(
                "Generated using a rule-based template system with {} tone. \
                 Personalized with the member's first name and age, considering cultural context from {}.",
                request.tone,
                request.member.country()
            ))
            .build()?;

        Ok(GeneratedMessage {
            text: Self::render(request),
            explanation,
        })
    }
}

/// 1 -> "1st", 22 -> "22nd", 13 -> "13th"
fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
