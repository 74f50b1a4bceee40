// crates/roster/src/infrastructure/config/app_config.rs

use std::str::FromStr;
use std::time::Duration;
use shared_kernel::errors::{AppError, AppResult, ErrorCode};

use crate::domain::services::RankingOptions;
use crate::infrastructure::generators::HostedModelConfig;

/// Configuration du service, lue une seule fois au démarrage.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mock_ai: bool,
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub generation_timeout: Duration,
    pub mail_domain: String,
    pub upcoming_window_days: u32,
    pub seed_roster: bool,
    pub port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mock_ai: true,
            openai_api_key: None,
            openai_base_url: HostedModelConfig::DEFAULT_BASE_URL.to_string(),
            openai_model: HostedModelConfig::DEFAULT_MODEL.to_string(),
            generation_timeout: HostedModelConfig::DEFAULT_TIMEOUT,
            mail_domain: "datavid.com".to_string(),
            upcoming_window_days: RankingOptions::DEFAULT_WINDOW_DAYS,
            seed_roster: true,
            port: 8000,
        }
    }
}

impl AppConfig {
    /// Charge la config depuis les variables d'environnement
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Même chose que `from_env`, à partir d'une source de variables arbitraire
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let config = Self {
            mock_ai: parse_bool("MOCK_AI", get("MOCK_AI"), defaults.mock_ai)?,
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            generation_timeout: parse_number::<u64>("GENERATION_TIMEOUT_SECS", get("GENERATION_TIMEOUT_SECS"))?
                .map(Duration::from_secs)
                .unwrap_or(defaults.generation_timeout),
            mail_domain: get("MAIL_DOMAIN").unwrap_or(defaults.mail_domain),
            upcoming_window_days: parse_number("UPCOMING_WINDOW_DAYS", get("UPCOMING_WINDOW_DAYS"))?
                .unwrap_or(defaults.upcoming_window_days),
            seed_roster: parse_bool("SEED_ROSTER", get("SEED_ROSTER"), defaults.seed_roster)?,
            port: parse_number("PORT", get("PORT"))?.unwrap_or(defaults.port),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !self.mock_ai && self.openai_api_key.is_none() {
            return Err(AppError::new(
                ErrorCode::InternalError,
                "OPENAI_API_KEY must be set when MOCK_AI=false",
            ));
        }
        if self.generation_timeout.is_zero() {
            return Err(AppError::new(
                ErrorCode::InternalError,
                "GENERATION_TIMEOUT_SECS must be greater than 0",
            ));
        }
        Ok(())
    }

    // --- OVERRIDES (tests, wiring) ---

    pub fn with_mock_ai(mut self, mock_ai: bool) -> Self {
        self.mock_ai = mock_ai;
        self
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_openai_base_url(mut self, url: impl Into<String>) -> Self {
        self.openai_base_url = url.into();
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Duration) -> Self {
        self.generation_timeout = timeout;
        self
    }

    pub fn with_mail_domain(mut self, domain: impl Into<String>) -> Self {
        self.mail_domain = domain.into();
        self
    }

    pub fn with_seed_roster(mut self, seed: bool) -> Self {
        self.seed_roster = seed;
        self
    }

    /// Paramètres du modèle hébergé, si une clé est configurée
    pub fn hosted_model(&self) -> Option<HostedModelConfig> {
        self.openai_api_key.as_ref().map(|key| {
            HostedModelConfig::new(key.clone())
                .with_base_url(self.openai_base_url.clone())
                .with_model(self.openai_model.clone())
                .with_timeout(self.generation_timeout)
        })
    }
}

fn parse_bool(key: &str, raw: Option<String>, default: bool) -> AppResult<bool> {
    match raw.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None => Ok(default),
        Some("true" | "1" | "yes") => Ok(true),
        Some("false" | "0" | "no") => Ok(false),
        Some(other) => Err(AppError::new(
            ErrorCode::InternalError,
            format!("{key} must be a boolean, got '{other}'"),
        )),
    }
}

fn parse_number<T: FromStr>(key: &str, raw: Option<String>) -> AppResult<Option<T>> {
    raw.map(|value| {
        value.parse::<T>().map_err(|_| {
            AppError::new(
                ErrorCode::InternalError,
                format!("{key} must be a positive integer, got '{value}'"),
            )
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppResult<AppConfig> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_environment_is_empty() {
        let config = load(&[]).unwrap();

        assert_eq!(config, AppConfig::default());
        assert!(config.mock_ai);
        assert_eq!(config.port, 8000);
        assert_eq!(config.upcoming_window_days, 30);
        assert_eq!(config.generation_timeout, Duration::from_secs(20));
        assert_eq!(config.mail_domain, "datavid.com");
    }

    #[test]
    fn test_overrides_are_read() {
        let config = load(&[
            ("MOCK_AI", "FALSE"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o-mini"),
            ("GENERATION_TIMEOUT_SECS", "5"),
            ("UPCOMING_WINDOW_DAYS", "14"),
            ("SEED_ROSTER", "0"),
            ("PORT", "9090"),
        ])
        .unwrap();

        assert!(!config.mock_ai);
        assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.generation_timeout, Duration::from_secs(5));
        assert_eq!(config.upcoming_window_days, 14);
        assert!(!config.seed_roster);
        assert_eq!(config.port, 9090);

        let hosted = config.hosted_model().unwrap();
        assert_eq!(hosted.model, "gpt-4o-mini");
    }

    #[test]
    fn test_overrides_feed_hosted_model_config() {
        let config = AppConfig::default()
            .with_mock_ai(false)
            .with_openai_api_key("sk-test")
            .with_openai_base_url("http://localhost:9999")
            .with_generation_timeout(Duration::from_secs(3))
            .with_mail_domain("example.org")
            .with_seed_roster(false);

        assert!(config.validate().is_ok());
        assert_eq!(config.mail_domain, "example.org");
        assert!(!config.seed_roster);

        let hosted = config.hosted_model().unwrap();
        assert_eq!(hosted.base_url, "http://localhost:9999");
        assert_eq!(hosted.timeout, Duration::from_secs(3));
        assert_eq!(hosted.api_key, "sk-test");
    }

    #[test]
    fn test_hosted_mode_without_key_is_a_startup_error() {
        let result = load(&[("MOCK_AI", "false")]);
        assert!(result.is_err());

        // Une clé vide compte comme absente
        let result = load(&[("MOCK_AI", "false"), ("OPENAI_API_KEY", "  ")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(load(&[("MOCK_AI", "maybe")]).is_err());
        assert!(load(&[("PORT", "eighty")]).is_err());
        assert!(load(&[("GENERATION_TIMEOUT_SECS", "0")]).is_err());
    }
}
