//! Chat Client - Blocking Text-Generation Calls
//!
//! One synchronous request per narrative. No retry and no fallback: if the
//! collaborator fails, the narrative step fails and the caller decides what
//! to present. Authentication is a bearer credential from configuration.

use super::types::{ChatMessage, ChatRequest, ChatResponse, NarrativeError};

pub struct ChatClient {
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl ChatClient {
    pub fn new(base_url: String, api_key: Option<String>, model: String) -> Self {
        Self {
            base_url,
            api_key,
            model,
        }
    }

    /// Check if a credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt, return the completion content (blocking)
    pub fn complete(&self, prompt: &str) -> Result<String, NarrativeError> {
        let api_key = self.api_key.as_ref().ok_or(NarrativeError::MissingApiKey)?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
        };

        let url = format!("{}/chat/completions", self.base_url);
        log::debug!("Chat request to {} (model '{}', {} prompt bytes)", url, self.model, prompt.len());

        let response = ureq::post(&url)
            .set("Authorization", &format!("Bearer {}", api_key))
            .send_json(&request);

        match response {
            Ok(resp) => {
                let body = resp
                    .into_string()
                    .map_err(|e| NarrativeError::Parse { message: e.to_string() })?;

                let parsed: ChatResponse = serde_json::from_str(&body)
                    .map_err(|e| NarrativeError::Parse { message: e.to_string() })?;

                let content = parsed
                    .choices
                    .into_iter()
                    .next()
                    .map(|c| c.message.content)
                    .unwrap_or_default();

                if content.trim().is_empty() {
                    return Err(NarrativeError::EmptyResponse);
                }

                Ok(content)
            }
            Err(ureq::Error::Status(401, _)) => Err(NarrativeError::InvalidApiKey),
            Err(ureq::Error::Status(429, _)) => Err(NarrativeError::RateLimited),
            Err(ureq::Error::Status(code, _)) => Err(NarrativeError::Http { code }),
            Err(e) => Err(NarrativeError::Network { message: e.to_string() }),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_fails_before_any_network_io() {
        let client = ChatClient::new(
            "https://api.example.invalid/v1".to_string(),
            None,
            "test-model".to_string(),
        );

        assert!(!client.is_configured());
        assert!(matches!(client.complete("hello"), Err(NarrativeError::MissingApiKey)));
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Three sentences."}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Three sentences.");
    }

    #[test]
    fn test_response_with_no_choices_parses() {
        let body = r#"{"choices":[]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.choices.is_empty());
    }
}
