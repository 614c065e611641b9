//! Blocking Rust client for the Anthropic Messages API.
//!
//! Build a conversation with [`MessagesRequest`], send it with [`Client`],
//! and read the reply either as one [`MessagesResponse`] or incrementally
//! through a [`MessageStream`] pull cursor.

pub mod client;
pub mod error;
pub mod models;
pub mod stream;

pub use client::{Client, DEFAULT_API_URL, DEFAULT_API_VERSION};
pub use error::{ApiError, ApiErrorDetails, ClientError};
pub use models::{
    ContentBlock, ImageSource, Message, MessageRole, MessagesRequest, MessagesResponse, Metadata,
    Usage,
};
pub use stream::{MessageStream, StreamEvent, StreamUpdate, TextPayload};
