//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To point at a different chat API or model directory, only edit this file.

/// Default directory holding the nine exported ONNX model artifacts
pub const DEFAULT_MODEL_DIR: &str = "ml-model";

/// Default path to the churn reference dataset
pub const DEFAULT_DATASET_PATH: &str = "ml-model/churn.csv";

/// Default chat-completion API base URL (OpenAI-compatible)
pub const DEFAULT_CHAT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Default chat model id used for explanations and emails
pub const DEFAULT_CHAT_MODEL: &str = "llama-3.2-3b-preview";

/// Risk threshold separating the "at risk" and "stable" narrative branches
pub const RISK_THRESHOLD: f32 = 0.40;

/// Number of sentences requested from the explanation narrative
pub const EXPLANATION_SENTENCES: usize = 3;

/// Model names whose probabilities are averaged into the risk score.
/// The remaining loaded models stay available for side-by-side comparison.
pub const DEFAULT_ENSEMBLE: &[&str] = &["xgboost", "random_forest", "knn"];

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "ChurnSight";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get chat API base URL from environment or use default
pub fn get_chat_api_base() -> String {
    std::env::var("CHAT_API_BASE").unwrap_or_else(|_| DEFAULT_CHAT_API_BASE.to_string())
}

/// Get chat model id from environment or use default
pub fn get_chat_model() -> String {
    std::env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string())
}

/// Get the chat API key from the environment, if configured
pub fn get_chat_api_key() -> Option<String> {
    std::env::var("GROQ_API_KEY").ok().filter(|k| !k.is_empty())
}

/// Get model directory from environment or use default
pub fn get_model_dir() -> String {
    std::env::var("CHURN_MODEL_DIR").unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string())
}

/// Get dataset path from environment or use default
pub fn get_dataset_path() -> String {
    std::env::var("CHURN_DATASET").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string())
}
