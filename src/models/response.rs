//! Response-side wire types for the Messages API.

use serde::{Deserialize, Serialize};

use super::request::{ContentBlock, MessageRole};

/// Token accounting reported by the API for a completed request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_token: u32,
    #[serde(default)]
    pub output_token: u32,
}

/// Complete (non-streamed) response body from the message-creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub id: String,
    /// Object discriminator, `message` for this endpoint
    #[serde(rename = "type", default)]
    pub response_type: String,
    pub role: MessageRole,
    pub model: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Why generation ended, e.g. `end_turn` or `max_tokens`; null while unknown
    #[serde(default)]
    pub stop_reason: Option<String>,
    /// The stop sequence that fired, when `stop_reason` is `stop_sequence`
    #[serde(default)]
    pub stop_sequences: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}
