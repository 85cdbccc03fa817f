use super::{system_prompt, usable_history, ChatPrompt, ChatReply, ConciergeError, ConciergeGateway};
use crate::config::ConciergeConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1024;

/// Blocking client for the Groq OpenAI-compatible chat endpoint; handlers
/// call it through `spawn_blocking` to keep the async runtime clear.
pub struct GroqConcierge {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl GroqConcierge {
    /// Returns `None` when no API key is configured; the caller then runs
    /// without a concierge rather than holding a client that cannot work.
    pub fn from_config(config: &ConciergeConfig) -> Result<Option<Self>, ConciergeError> {
        let Some(api_key) = config.api_key.clone() else {
            return Ok(None);
        };

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| ConciergeError::Upstream(err.to_string()))?;

        Ok(Some(Self {
            client,
            api_key,
            model: config.model.clone(),
        }))
    }

    fn build_messages(&self, prompt: &ChatPrompt) -> Vec<WireMessage> {
        let mut messages = vec![WireMessage {
            role: "system".to_string(),
            content: system_prompt(prompt.role_context.as_deref()),
        }];

        for turn in usable_history(&prompt.history) {
            let role = if turn.role.eq_ignore_ascii_case("user") {
                "user"
            } else {
                "assistant"
            };
            messages.push(WireMessage {
                role: role.to_string(),
                content: turn.text.clone(),
            });
        }

        messages.push(WireMessage {
            role: "user".to_string(),
            content: prompt.message.clone(),
        });

        messages
    }
}

impl std::fmt::Debug for GroqConcierge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConcierge")
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ConciergeGateway for GroqConcierge {
    fn chat(&self, prompt: ChatPrompt) -> Result<ChatReply, ConciergeError> {
        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: self.build_messages(&prompt),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|err| ConciergeError::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(ConciergeError::Upstream(format!(
                "provider answered {status}: {detail}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .map_err(|err| ConciergeError::Payload(err.to_string()))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| ConciergeError::Payload("no completion choices".to_string()))?;

        Ok(ChatReply { reply })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionChoice {
    message: WireMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concierge() -> GroqConcierge {
        GroqConcierge::from_config(&ConciergeConfig {
            api_key: Some("test-key".to_string()),
            model: "llama-3.3-70b-versatile".to_string(),
        })
        .expect("client builds")
        .expect("key present")
    }

    #[test]
    fn from_config_without_key_yields_no_client() {
        let absent = GroqConcierge::from_config(&ConciergeConfig {
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
        })
        .expect("config is valid");
        assert!(absent.is_none());
    }

    #[test]
    fn messages_carry_system_history_and_user_turn() {
        let prompt = ChatPrompt {
            message: "Do suites have balconies?".to_string(),
            history: vec![crate::concierge::ChatTurn {
                role: "user".to_string(),
                text: "Hi there".to_string(),
            }],
            role_context: Some("Manager".to_string()),
        };

        let messages = concierge().build_messages(&prompt);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert!(messages[0].content.contains("User role: Manager"));
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].content, "Do suites have balconies?");
    }
}
