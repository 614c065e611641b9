//! Event types decoded from `data:` payloads of the stream.

use serde::Deserialize;

/// Payload object nested in content-block events.
///
/// Start events carry it under `content_block` (type `text`), delta events
/// under `delta` (type `text_delta`). Both shapes share these two fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextPayload {
    #[serde(rename = "type", default)]
    pub payload_type: String,
    #[serde(default)]
    pub text: String,
}

/// A decoded stream event, tagged by its `type` discriminator.
///
/// Only the three content-block variants are modeled; every other
/// discriminator the server emits (`message_start`, `message_delta`,
/// `message_stop`, `ping`, and anything added in the future) collapses into
/// [`StreamEvent::Other`] so the decoder can skip it instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    ContentBlockStart {
        #[serde(default)]
        index: u32,
        #[serde(default)]
        content_block: Option<TextPayload>,
    },
    ContentBlockDelta {
        #[serde(default)]
        index: u32,
        #[serde(default)]
        delta: Option<TextPayload>,
    },
    ContentBlockStop {
        #[serde(default)]
        index: u32,
    },
    #[serde(other)]
    Other,
}
