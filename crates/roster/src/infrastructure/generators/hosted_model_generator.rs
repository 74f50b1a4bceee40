// crates/roster/src/infrastructure/generators/hosted_model_generator.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use shared_kernel::errors::{DomainError, Result};

use crate::domain::models::{GeneratedMessage, GenerationRequest};
use crate::domain::ports::MessageGenerator;
use crate::domain::services::ExplanationBuilder;
use crate::infrastructure::generators::TemplateGenerator;

#[derive(Debug, Clone)]
pub struct HostedModelConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout: Duration,
}

impl HostedModelConfig {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com";
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// --- WIRE (API compatible OpenAI) ---

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Générateur adossé à un modèle de langage hébergé.
/// Un seul appel par message : pas de streaming, pas de retry, pas de repli
/// sur les gabarits en cas d'échec.
#[derive(Clone)]
pub struct HostedModelGenerator {
    client: reqwest::Client,
    config: Arc<HostedModelConfig>,
}

impl HostedModelGenerator {
    pub const METHOD: &'static str = "generative_model_completion";
    pub const TEMPERATURE: f64 = 0.7;
    pub const MAX_TOKENS: u32 = 150;

    pub fn new(config: HostedModelConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Arc::new(config),
        }
    }

    fn build_prompt(request: &GenerationRequest<'_>) -> String {
        let member = request.member;
        format!(
            "Generate a birthday message for a Datavid company member with these details:\n\
             - Name: {} {}\n\
             - Turning: {}\n\
             - Location: {}, {}\n\
             - Tone: {}\n\
             - Language preference: {}\n\
             - Cultural context: {}\n\n\
             Create a warm, personal birthday message (2-3 sentences max) that reflects the specified tone.",
            member.first_name(),
            member.last_name(),
            request.age_years,
            member.city(),
            member.country(),
            request.tone,
            request.language,
            TemplateGenerator::cultural_phrase(member.country().as_str()),
        )
    }

    /// Appel HTTP unique, borné par `config.timeout`
    #[tracing::instrument(skip(self, prompt), fields(model = %self.config.model))]
    async fn complete(&self, prompt: &str) -> Result<String> {
        let timeout = self.config.timeout;

        match tokio::time::timeout(timeout, self.send_completion(prompt)).await {
            Ok(result) => result,
            Err(_) => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(timeout_ms, "⏱️ Hosted model timed out");
                Err(DomainError::GenerationTimeout { timeout_ms })
            }
        }
    }

    async fn send_completion(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.config.base_url.trim_end_matches('/'));
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: Self::TEMPERATURE,
            max_tokens: Self::MAX_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| generation_failed(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(generation_failed(format!("provider returned {status}")));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| generation_failed(format!("malformed response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| generation_failed("empty completion".to_string()))
    }
}

fn generation_failed(reason: String) -> DomainError {
    tracing::error!(%reason, "❌ Hosted model generation failed");
    DomainError::GenerationFailed { reason }
}

#[async_trait]
impl MessageGenerator for HostedModelGenerator {
    fn model_name(&self) -> &str {
        &self.config.model
    }

    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<GeneratedMessage> {
        let prompt = Self::build_prompt(request);
        let text = self.complete(&prompt).await?;

        let explanation = ExplanationBuilder::new(self.config.model.as_str(), Self::METHOD)
            .with_parameter("tone", request.tone.as_str())
            .with_parameter("language", request.language.as_str())
            .with_parameter("temperature", Self::TEMPERATURE)
            .with_rationale(format!(
                "Generated using {} with {} tone setting and temperature {} for creative variation. \
                 Prompt included the member's name, age, location ({}) and language preference to ensure cultural appropriateness.",
                self.config.model,
                request.tone,
                Self::TEMPERATURE,
                request.member.country()
            ))
            .build()?;

        tracing::info!(model = %self.config.model, tone = %request.tone, "🤖 Birthday message generated");

        Ok(GeneratedMessage { text, explanation })
    }
}
