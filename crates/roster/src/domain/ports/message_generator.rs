// crates/roster/src/domain/ports/message_generator.rs

use async_trait::async_trait;
use shared_kernel::errors::Result;

use crate::domain::models::{GeneratedMessage, GenerationRequest};

/// Générateur de message d'anniversaire. La variante est choisie une fois au
/// démarrage puis injectée ; le métier ne teste jamais "quel mode".
#[async_trait]
pub trait MessageGenerator: Send + Sync {
    /// Identité du modèle, reprise dans `explanation.model`
    fn model_name(&self) -> &str;

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<GeneratedMessage>;
}
