//! HTTP client for the Anthropic Messages API.
//!
//! Wires the request builder, the wire codecs, and the stream decoder into
//! two entry points: [`Client::create_message`] for a complete response and
//! [`Client::create_message_stream`] for an incrementally decoded one.

use std::sync::Mutex;

use reqwest::blocking::Response;
use tracing::{debug, warn};

use crate::error::{ApiError, ClientError};
use crate::models::{MessagesRequest, MessagesResponse};
use crate::stream::MessageStream;

/// Default API endpoint, up to and including the version segment
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1";
/// Default value of the `anthropic-version` header
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

const AUTH_HEADER: &str = "x-api-key";
const VERSION_HEADER: &str = "anthropic-version";

/// Client for the Anthropic Messages API.
///
/// Holds the API key and the mutable configuration (base URL, version
/// header, optional proxy). Configuration sits behind a mutex so a single
/// client can serve concurrent request flows; every call snapshots the
/// configuration and releases the lock before any network IO happens.
pub struct Client {
    api_key: String,
    state: Mutex<ClientState>,
}

/// Mutable configuration plus the HTTP client built from it.
struct ClientState {
    api_url: String,
    api_version: String,
    proxy_url: Option<String>,
    http: reqwest::blocking::Client,
}

impl Client {
    /// Create a client with the default endpoint and API version.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            state: Mutex::new(ClientState {
                api_url: DEFAULT_API_URL.to_string(),
                api_version: DEFAULT_API_VERSION.to_string(),
                proxy_url: None,
                http: reqwest::blocking::Client::new(),
            }),
        }
    }

    /// Override the API base URL.
    pub fn set_api_url(&self, api_url: impl Into<String>) {
        self.state.lock().unwrap().api_url = api_url.into();
    }

    /// Current API base URL.
    pub fn api_url(&self) -> String {
        self.state.lock().unwrap().api_url.clone()
    }

    /// Override the `anthropic-version` header value.
    pub fn set_api_version(&self, api_version: impl Into<String>) {
        self.state.lock().unwrap().api_version = api_version.into();
    }

    /// Current `anthropic-version` header value.
    pub fn api_version(&self) -> String {
        self.state.lock().unwrap().api_version.clone()
    }

    /// Route requests through an HTTP proxy, or clear it with `None`.
    ///
    /// Rebuilds the underlying HTTP client. An unparseable proxy URL is an
    /// error and leaves the previous configuration in place.
    pub fn set_proxy(&self, proxy_url: Option<&str>) -> Result<(), ClientError> {
        let mut state = self.state.lock().unwrap();
        match proxy_url {
            Some(url) => {
                let proxy = reqwest::Proxy::all(url)?;
                state.http = reqwest::blocking::Client::builder().proxy(proxy).build()?;
                state.proxy_url = Some(url.to_string());
            }
            None => {
                state.http = reqwest::blocking::Client::builder().build()?;
                state.proxy_url = None;
            }
        }
        Ok(())
    }

    /// Currently configured proxy URL, if any.
    pub fn proxy_url(&self) -> Option<String> {
        self.state.lock().unwrap().proxy_url.clone()
    }

    /// Send a conversation and block until the complete response arrives.
    ///
    /// Always requests the non-streamed response format. The full body is
    /// read before classification: a non-success status becomes
    /// [`ClientError::Api`] when the body carries a structured error and
    /// [`ClientError::UnexpectedStatus`] otherwise; a success status with an
    /// undecodable body is a [`ClientError::Json`].
    pub fn create_message(
        &self,
        mut request: MessagesRequest,
    ) -> Result<MessagesResponse, ClientError> {
        request.stream = None;

        let response = self.dispatch(&request)?;
        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(classify_failure(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Send a conversation and stream the response incrementally.
    ///
    /// Always requests the streamed response format. On success the live
    /// response body is handed to a [`MessageStream`] unread; on a
    /// non-success status the body is drained and classified exactly as in
    /// [`Client::create_message`], and no decoder is constructed.
    pub fn create_message_stream(
        &self,
        mut request: MessagesRequest,
    ) -> Result<MessageStream<Response>, ClientError> {
        request.stream = Some(true);

        let response = self.dispatch(&request)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text()?;
            return Err(classify_failure(status.as_u16(), &body));
        }

        Ok(MessageStream::new(response))
    }

    /// Serialize `request` and POST it to the messages endpoint with the
    /// auth, version, and content-type headers attached.
    fn dispatch(&self, request: &MessagesRequest) -> Result<Response, ClientError> {
        let body = serde_json::to_string(request)?;

        let builder = {
            let state = self.state.lock().unwrap();
            let url = format!("{}/messages", state.api_url);
            debug!("Sending messages request for model {} to {}", request.model, url);
            state
                .http
                .post(url)
                .header(AUTH_HEADER, self.api_key.as_str())
                .header(VERSION_HEADER, state.api_version.as_str())
                .header("content-type", "application/json")
                .body(body)
        };

        Ok(builder.send()?)
    }
}

/// Map a non-success response body to the structured API error when it
/// parses as one, or to the generic status error when it does not.
fn classify_failure(status: u16, body: &str) -> ClientError {
    warn!("Messages request failed with status {}", status);
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => ClientError::Api(api_error),
        Err(_) => ClientError::UnexpectedStatus(status),
    }
}
