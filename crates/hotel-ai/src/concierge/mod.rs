//! Guest concierge chat, proxied to an LLM provider.
//!
//! The provider is an opaque external collaborator: the engine code never
//! talks to it directly, only through [`ConciergeGateway`], so the HTTP
//! layer can run without a provider and tests can substitute a stub.

mod groq;

pub use groq::GroqConcierge;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One prior exchange in the chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub text: String,
}

/// A chat request as assembled by the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub message: String,
    pub history: Vec<ChatTurn>,
    pub role_context: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConciergeError {
    #[error("concierge provider is not configured")]
    NotConfigured,
    #[error("concierge provider request failed: {0}")]
    Upstream(String),
    #[error("concierge provider returned an unusable payload: {0}")]
    Payload(String),
}

pub trait ConciergeGateway: Debug + Send + Sync {
    fn chat(&self, prompt: ChatPrompt) -> Result<ChatReply, ConciergeError>;
}

/// Hotel facts pinned into every system prompt so replies stay on-property.
pub(crate) fn system_prompt(role_context: Option<&str>) -> String {
    let role = role_context.unwrap_or("Guest");
    format!(
        "You are the concierge for the Grand Astoria hotel.\n\
         Room types: Presidential Suite ($1200), Royal Penthouse ($1500), \
         Executive Suite ($500+), Standard Plus.\n\
         Cancellations require 24 hours notice. Pricing is dynamic and \
         demand-driven. Loyalty stays earn points.\n\
         User role: {role}\n\
         Answer concisely and professionally, stay within these facts, and \
         keep context from the supplied history."
    )
}

/// Drop seeded welcome banners and blank turns before forwarding history.
pub(crate) fn usable_history(history: &[ChatTurn]) -> impl Iterator<Item = &ChatTurn> {
    history
        .iter()
        .filter(|turn| !turn.text.is_empty() && !turn.text.starts_with("Welcome to"))
}
