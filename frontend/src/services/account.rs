//! HTTP client for the account deletion endpoint.
//!
//! Both calls go to [`API_URL`]; only the body differs. The reply is
//! judged by its JSON body alone, the HTTP status is not consulted.

use gloo_net::http::Request;
use serde::Serialize;
use serde_json::Value;

use crate::config::API_URL;
use crate::error::{AccountError, AccountResult};

/// Transport for the deletion endpoint.
///
/// The page uses [`HttpAccountClient`]; tests drive the wizard with a
/// fake that records bodies.
#[allow(async_fn_in_trait)]
pub trait AccountClient {
    /// POST `body` as JSON and return the decoded reply body.
    async fn post<B: Serialize>(&self, body: &B) -> AccountResult<Value>;
}

/// [`AccountClient`] over `fetch` via gloo-net.
#[derive(Clone, Debug)]
pub struct HttpAccountClient {
    url: String,
}

impl HttpAccountClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for HttpAccountClient {
    fn default() -> Self {
        Self::new(API_URL)
    }
}

impl AccountClient for HttpAccountClient {
    async fn post<B: Serialize>(&self, body: &B) -> AccountResult<Value> {
        // `json` also sets `Content-Type: application/json`.
        let response = Request::post(&self.url).json(body)?.send().await?;
        log::debug!("{} answered {}", self.url, response.status());

        let reply = response.json::<Value>().await?;
        Ok(reply)
    }
}

/// Decide whether a reply body means success.
///
/// Accepted: a bare `true`, or an object whose `status` or `success` is
/// `true`. Any other object or scalar is a rejection carrying the
/// object's `message` when it is a non-empty string or non-zero number.
/// `null` cannot be inspected and counts as a network failure.
pub fn interpret_reply(reply: &Value) -> AccountResult<()> {
    match reply {
        Value::Bool(true) => Ok(()),
        Value::Null => Err(AccountError::Network("reply body was null".to_string())),
        Value::Object(body) => {
            let flag = |key: &str| body.get(key) == Some(&Value::Bool(true));
            if flag("status") || flag("success") {
                return Ok(());
            }
            let message = body.get("message").and_then(display_message);
            Err(AccountError::Rejected { message })
        }
        _ => Err(AccountError::Rejected { message: None }),
    }
}

/// A `message` worth showing: a non-empty string or a non-zero number.
fn display_message(message: &Value) -> Option<String> {
    match message {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

/// POST `body` and interpret the reply.
pub async fn submit<C: AccountClient, B: Serialize>(client: &C, body: &B) -> AccountResult<()> {
    let reply = client.post(body).await?;
    interpret_reply(&reply)
}
