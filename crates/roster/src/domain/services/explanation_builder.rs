// crates/roster/src/domain/services/explanation_builder.rs

use serde_json::Value;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::models::{Explanation, GenerationParameters};

/// Découpe un texte en phrases. Un `.`, `!` ou `?` ne termine une phrase
/// que s'il est suivi d'un blanc ou de la fin du texte ("0.7" reste intact).
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        let at_boundary = matches!(c, '.' | '!' | '?')
            && chars.peek().map_or(true, |(_, next)| next.is_whitespace());

        if at_boundary {
            let end = idx + c.len_utf8();
            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }
    }

    let tail = text[start..].trim();
    if !tail.is_empty() {
        sentences.push(tail);
    }

    sentences
}

/// Assemble l'objet d'explicabilité commun à tous les générateurs.
/// Refuse toute justification qui ne fait pas exactement deux phrases, pour
/// qu'aucun générateur ne puisse y glisser un raisonnement détaillé.
#[derive(Debug, Clone)]
pub struct ExplanationBuilder {
    model: String,
    method: String,
    parameters: GenerationParameters,
    rationale: String,
}

impl ExplanationBuilder {
    pub const RATIONALE_SENTENCES: usize = 2;

    pub fn new(model: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            method: method.into(),
            parameters: GenerationParameters::new(),
            rationale: String::new(),
        }
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    pub fn build(self) -> Result<Explanation> {
        let sentences = split_sentences(&self.rationale);
        if sentences.len() != Self::RATIONALE_SENTENCES {
            return Err(DomainError::InvalidRationale {
                sentences: sentences.len(),
            });
        }

        Ok(Explanation {
            model: self.model,
            method: self.method,
            parameters: self.parameters,
            rationale: sentences.join(" "),
        })
    }
}
