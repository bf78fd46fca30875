//! Narrative Types - Chat API Wire Structs & Errors

use serde::{Deserialize, Serialize};

// ============================================================================
// CHAT WIRE TYPES (OpenAI-compatible)
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Text-generation collaborator failures. Terminal for the narrative step
/// only — the risk score stays valid and is still presented.
#[derive(Debug, Clone)]
pub enum NarrativeError {
    /// No API key configured
    MissingApiKey,
    /// Credential rejected by the API
    InvalidApiKey,
    /// Rate limit exceeded
    RateLimited,
    /// Non-success HTTP status
    Http { code: u16 },
    /// Transport-level failure
    Network { message: String },
    /// Response body did not parse as a chat completion
    Parse { message: String },
    /// Completion arrived with no usable content
    EmptyResponse,
}

impl std::fmt::Display for NarrativeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NarrativeError::MissingApiKey => {
                write!(f, "chat API key not configured (set GROQ_API_KEY)")
            }
            NarrativeError::InvalidApiKey => write!(f, "chat API rejected the credential"),
            NarrativeError::RateLimited => write!(f, "chat API rate limit exceeded"),
            NarrativeError::Http { code } => write!(f, "chat API returned HTTP {}", code),
            NarrativeError::Network { message } => write!(f, "chat API unreachable: {}", message),
            NarrativeError::Parse { message } => {
                write!(f, "malformed chat API response: {}", message)
            }
            NarrativeError::EmptyResponse => write!(f, "chat API returned no content"),
        }
    }
}

impl std::error::Error for NarrativeError {}
