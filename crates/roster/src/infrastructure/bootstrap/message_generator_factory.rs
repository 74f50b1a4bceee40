// crates/roster/src/infrastructure/bootstrap/message_generator_factory.rs

use std::sync::Arc;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

use crate::domain::ports::MessageGenerator;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::generators::{HostedModelGenerator, TemplateGenerator};

/// Choix du générateur, une seule fois au démarrage.
pub fn build_message_generator(config: &AppConfig) -> AppResult<Arc<dyn MessageGenerator>> {
    if config.mock_ai {
        tracing::info!("🧩 Message generator: templates ({})", TemplateGenerator::MODEL);
        return Ok(Arc::new(TemplateGenerator::new()));
    }

    let hosted = config.hosted_model().ok_or_else(|| {
        AppError::new(
            ErrorCode::InternalError,
            "OPENAI_API_KEY must be set when MOCK_AI=false",
        )
    })?;

    tracing::info!(
        model = %hosted.model,
        timeout_ms = hosted.timeout.as_millis() as u64,
        "🤖 Message generator: hosted model"
    );
    Ok(Arc::new(HostedModelGenerator::new(hosted)))
}
