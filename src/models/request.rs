//! Request-side wire types for the Messages API.
//!
//! [`MessagesRequest`] is a mutable builder for a conversation: ordered
//! messages, an optional system prompt, and sampling parameters. It
//! serializes to the exact JSON body the API expects; optional fields are
//! omitted entirely until set.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Role of a message author in a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Base64-encoded media attached to an image content block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageSource {
    Base64 {
        /// MIME type of the encoded bytes, e.g. `image/jpeg`
        media_type: String,
        /// Standard base64 (with padding) of the raw image bytes
        data: String,
    },
}

/// Content block in a message - either plain text or an embedded image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text { text: String },
    Image { source: ImageSource },
}

/// A single turn in the conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: Vec<ContentBlock>,
}

/// Caller-supplied metadata forwarded with a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Opaque identifier for the end user on whose behalf the request runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Request body for the message-creation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessagesRequest {
    /// Model identifier, e.g. `claude-3-haiku`
    pub model: String,
    /// Ordered conversation turns (may be empty)
    pub messages: Vec<Message>,
    /// System prompt applied to the whole conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Sequences that stop generation when produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
    /// Wire flag selecting the streamed response format; the client sets
    /// this on dispatch, callers never need to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl MessagesRequest {
    /// Create a request for `model` with an empty conversation
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            system: None,
            max_tokens,
            metadata: None,
            stop_sequences: None,
            stream: None,
            temperature: None,
            top_p: None,
            top_k: None,
        }
    }

    /// Append a single-text-block message from `role`
    pub fn add_text_message(&mut self, role: MessageRole, text: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: vec![ContentBlock::Text { text: text.into() }],
        });
    }

    /// Append a message carrying an image followed by a text caption.
    ///
    /// The raw `image` bytes are base64-encoded into the wire payload.
    pub fn add_image_message(
        &mut self,
        role: MessageRole,
        image: &[u8],
        media_type: impl Into<String>,
        caption: impl Into<String>,
    ) {
        self.messages.push(Message {
            role,
            content: vec![
                ContentBlock::Image {
                    source: ImageSource::Base64 {
                        media_type: media_type.into(),
                        data: STANDARD.encode(image),
                    },
                },
                ContentBlock::Text {
                    text: caption.into(),
                },
            ],
        });
    }

    /// Drop every queued message, keeping model and parameters
    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    /// Set (or replace) the system prompt
    pub fn set_system_prompt(&mut self, text: impl Into<String>) {
        self.system = Some(text.into());
    }
}
