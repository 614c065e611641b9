//! Server-sent-event decoding for streamed message responses.
//!
//! The wire format is line-oriented:
//! - `event: <type>` - announcement line, ignored
//! - `data: <json>` - payload line, the only kind that carries content
//! - Blank lines separate events; comment lines start with `:`
//!
//! Each `data:` payload is a JSON object tagged by `type`. Text arrives in
//! `content_block_delta` events; `content_block_stop` ends the stream.
//!
//! # Module structure
//! - `events` - Decoded payload types (StreamEvent, TextPayload)
//! - `reader` - The pull cursor (MessageStream, StreamUpdate)

mod events;
mod reader;

pub use events::{StreamEvent, TextPayload};
pub use reader::{MessageStream, StreamUpdate};
