//! Application Configuration
//!
//! Everything comes from the environment with defaults in `constants.rs`.
//! Validation happens once at startup; an empty or unknown ensemble
//! selection can never reach the aggregator.

use std::path::PathBuf;

use crate::constants;
use crate::logic::model::registry::manifest_contains;

// ============================================================================
// APP CONFIG
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the nine ONNX artifacts
    pub model_dir: PathBuf,
    /// Churn reference dataset CSV
    pub dataset_path: PathBuf,
    /// Chat-completion API base URL (OpenAI-compatible)
    pub chat_api_base: String,
    /// Chat model id
    pub chat_model: String,
    /// Bearer credential for the chat API; narrative generation is
    /// unavailable without it, prediction still works
    pub chat_api_key: Option<String>,
    /// Model names averaged into the risk score
    pub ensemble: Vec<String>,
}

impl AppConfig {
    /// Build from environment variables with constants-file defaults
    pub fn from_env() -> Self {
        let ensemble = std::env::var("CHURN_ENSEMBLE")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| {
                constants::DEFAULT_ENSEMBLE.iter().map(|s| s.to_string()).collect()
            });

        Self {
            model_dir: PathBuf::from(constants::get_model_dir()),
            dataset_path: PathBuf::from(constants::get_dataset_path()),
            chat_api_base: constants::get_chat_api_base(),
            chat_model: constants::get_chat_model(),
            chat_api_key: constants::get_chat_api_key(),
            ensemble,
        }
    }

    /// Reject configurations the pipeline cannot run on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ensemble.is_empty() {
            return Err(ConfigError::EmptyEnsemble);
        }
        for name in &self.ensemble {
            if !manifest_contains(name) {
                return Err(ConfigError::UnknownEnsembleModel(name.clone()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Mean over zero models is undefined
    EmptyEnsemble,
    /// Ensemble names must come from the model manifest
    UnknownEnsembleModel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyEnsemble => {
                write!(f, "ensemble selection is empty; at least one model is required")
            }
            ConfigError::UnknownEnsembleModel(name) => {
                write!(f, "ensemble references unknown model '{}'", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// TESTS
// ============================================================================
