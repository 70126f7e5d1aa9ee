use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analyzer::aggregate::RateCombination;
use crate::error::AppError;

pub const DEFAULT_COMPLETIONS_ENDPOINT: &str = "https://api.perplexity.ai/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.1-sonar-small-128k-online";
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful HR analytics assistant. Analyze the data and provide clear, concise answers.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub chat: ChatConfig,
    pub generator: GeneratorConfig,
    pub rate_combination: RateCombination,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub system_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible datasets; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub start_year: i32,
    pub months: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chat: ChatConfig::default(),
            generator: GeneratorConfig::default(),
            rate_combination: RateCombination::PairwiseAverage,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_COMPLETIONS_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            timeout_secs: 60,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            start_year: 2025,
            months: 12,
        }
    }
}

impl AppConfig {
    /// Parses a JSON document; absent keys keep their default value.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&raw)?;
        log::info!("Configuration loaded from {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let c = AppConfig::default();
        assert_eq!(c.chat.max_tokens, 1000);
        assert!((c.chat.temperature - 0.2).abs() < 1e-6);
        assert_eq!(c.generator.start_year, 2025);
        assert_eq!(c.generator.months, 12);
        assert_eq!(c.rate_combination, RateCombination::PairwiseAverage);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let c = AppConfig::from_json_str(
            r#"{"generator": {"seed": 9}, "rateCombination": "arithmeticMean"}"#,
        )
        .unwrap();
        assert_eq!(c.generator.seed, Some(9));
        assert_eq!(c.generator.months, 12);
        assert_eq!(c.chat.model, DEFAULT_MODEL);
        assert_eq!(c.rate_combination, RateCombination::ArithmeticMean);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            AppConfig::from_json_str("{not json"),
            Err(AppError::Serde(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"chat": {{"maxTokens": 250}}}}"#).unwrap();
        let c = AppConfig::load(file.path()).unwrap();
        assert_eq!(c.chat.max_tokens, 250);
        assert_eq!(c.chat.endpoint, DEFAULT_COMPLETIONS_ENDPOINT);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load("/nonexistent/hr-dashboard.json"),
            Err(AppError::Io(_))
        ));
    }
}
