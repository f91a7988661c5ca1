//! Configuration module for the AQI forecaster.
//!
//! Loaded from environment variables (and `.env` via dotenvy in the
//! binaries), organized by concern: Artifacts, Observability, Language.

mod artifact_config;
mod observability_config;

pub use artifact_config::{ArtifactEnvConfig, DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH};
pub use observability_config::ObservabilityEnvConfig;

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Indonesian,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Indonesian => "id",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "id" | "indonesian" => Ok(Language::Indonesian),
            _ => anyhow::bail!("Invalid AQI_LANGUAGE: {}. Must be 'en' or 'id'", s),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub artifacts: ArtifactEnvConfig,
    pub observability: ObservabilityEnvConfig,
    pub language: Language,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let language = match env::var("AQI_LANGUAGE") {
            Ok(v) if !v.trim().is_empty() => Language::from_str(&v)?,
            _ => Language::default(),
        };

        Ok(Self {
            artifacts: ArtifactEnvConfig::from_env(),
            observability: ObservabilityEnvConfig::from_env(),
            language,
        })
    }
}
