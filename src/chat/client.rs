use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chat::session::ChatMessage;
use crate::error::{NutriError, Result};

/// Chat completion endpoint.
pub const CHAT_API_URL: &str = "https://api.groqcloud.com/v1/chat";

/// Model identifier sent with every request.
pub const CHAT_MODEL: &str = "groq-1";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GROQCLOUD_API_KEY";

/// Completion length cap.
const MAX_TOKENS: u32 = 150;

/// Sampling temperature.
const TEMPERATURE: f64 = 0.7;

/// Upper bound on a single chat request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

/// Blocking client for the external chat API.
pub struct ChatClient {
    http: reqwest::blocking::Client,
    api_url: String,
    api_key: String,
}

impl ChatClient {
    /// Build a client for `api_url` with the given bearer key.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
        })
    }

    /// Build a client for the default endpoint, reading the key from the
    /// environment. A missing key is an error; keys are never baked in.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| NutriError::Chat(format!("{API_KEY_ENV} is not set")))?;
        Self::new(CHAT_API_URL, api_key)
    }

    /// Send the conversation context (whose last entry is the new user
    /// message) and return the assistant's reply, trimmed.
    ///
    /// Any failure here surfaces as an error for the caller to turn
    /// into a displayed message rather than aborting the conversation.
    pub fn send(&self, context: &[ChatMessage]) -> Result<String> {
        let payload = ChatRequest {
            model: CHAT_MODEL,
            messages: context,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()?
            .error_for_status()?;

        let body: ChatResponse = response
            .json()
            .map_err(|e| NutriError::Chat(format!("malformed response body: {e}")))?;

        body.choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .ok_or_else(|| NutriError::Chat("response contained no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_requires_key() {
        // No other test touches this variable.
        unsafe { std::env::remove_var(API_KEY_ENV) };
        assert!(matches!(ChatClient::from_env(), Err(NutriError::Chat(_))));
    }

    #[test]
    fn test_response_parsing_picks_first_choice() {
        let raw = r#"{"choices":[{"message":{"content":"  Eat more greens.  "}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.choices[0].message.content.trim(), "Eat more greens.");
    }
}
