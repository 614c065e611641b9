//! Wire types for the Messages API: request builder, conversation content,
//! and response records.

mod request;
mod response;

pub use request::{ContentBlock, ImageSource, Message, MessageRole, MessagesRequest, Metadata};
pub use response::{MessagesResponse, Usage};
