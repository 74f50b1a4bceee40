use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use shared_kernel::errors::{DomainError, Result};

use crate::domain::models::{GeneratedMessage, GenerationRequest};
use crate::domain::ports::MessageGenerator;
use crate::domain::services::ExplanationBuilder;
use crate::domain::value_objects::{Language, Tone};

/// Générateur de test : enregistre les requêtes reçues
#[derive(Default)]
pub struct MessageGeneratorStub {
    /// (prénom, âge, ton, langue) de chaque appel
    pub calls: Arc<Mutex<Vec<(String, u32, Tone, Language)>>>,
    /// Permet de simuler une panne du fournisseur
    pub error_to_return: Arc<Mutex<Option<DomainError>>>,
}

impl MessageGeneratorStub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_with(error: DomainError) -> Self {
        let stub = Self::default();
        *stub.error_to_return.lock().unwrap() = Some(error);
        stub
    }
}

#[async_trait]
impl MessageGenerator for MessageGeneratorStub {
    fn model_name(&self) -> &str {
        "stub-generator"
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<GeneratedMessage> {
        self.calls.lock().unwrap().push((
            request.member.first_name().to_string(),
            request.age_years,
            request.tone,
            request.language.clone(),
        ));

        if let Some(err) = self.error_to_return.lock().unwrap().clone() {
            return Err(err);
        }

        let explanation = ExplanationBuilder::new(self.model_name(), "stub")
            .with_parameter("tone", request.tone.as_str())
            .with_rationale("Stubbed message. Used in tests only.")
            .build()?;

        Ok(GeneratedMessage {
            text: format!("Hi {}!", request.member.first_name()),
            explanation,
        })
    }
}
