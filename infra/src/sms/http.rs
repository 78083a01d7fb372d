//! HTTP transport shared by every provider adapter
//!
//! One request per call, no retries. Connection failures and non-2xx statuses
//! become `SmsError`s; anything a provider says inside a 2xx body is left to
//! the adapter to interpret.

use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error};

use iran_sms_core::errors::SmsError;

/// Default timeout for provider requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Build the client shared by every adapter a manager creates
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Join a base URL and an endpoint path with exactly one slash
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Thin wrapper tagging transport failures with the provider name
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    provider: &'static str,
}

impl HttpTransport {
    pub fn new(client: Client, provider: &'static str) -> Self {
        Self { client, provider }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Send the request and fail on connection errors or non-2xx statuses
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, SmsError> {
        let response = request.send().await.map_err(|e| self.connection_error(e))?;

        let status = response.status();
        debug!(provider = self.provider, status = status.as_u16(), "Provider responded");

        if !status.is_success() {
            error!(provider = self.provider, status = status.as_u16(), "Provider returned HTTP error");
            return Err(SmsError::HttpStatus {
                provider: self.provider.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Send and read the body as text
    pub async fn text(&self, request: RequestBuilder) -> Result<String, SmsError> {
        let response = self.send(request).await?;
        response.text().await.map_err(|e| self.connection_error(e))
    }

    /// Send and decode the body as JSON; an empty body decodes to `null`
    pub async fn json(&self, request: RequestBuilder) -> Result<Value, SmsError> {
        let body = self.text(request).await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| SmsError::UnexpectedResponse {
            provider: self.provider.to_string(),
            reason: format!("invalid JSON body: {}", e),
        })
    }

    fn connection_error(&self, e: reqwest::Error) -> SmsError {
        error!(provider = self.provider, error = %e, "Failed to reach provider");
        SmsError::Connection {
            provider: self.provider.to_string(),
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.sms.ir/v1/send", "verify"), "https://api.sms.ir/v1/send/verify");
        assert_eq!(join_url("http://127.0.0.1:8080/", "/bulk"), "http://127.0.0.1:8080/bulk");
    }
}
