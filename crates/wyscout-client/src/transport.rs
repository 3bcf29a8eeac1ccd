//! HTTP transport layer for Wyscout API requests

use crate::loader::{Params, Route, RouteLoader};
use crate::rate_limit::RateLimiter;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;
use wyscout_core::{ApiVersion, Config, Credentials, Error, Result};

/// HTTP transport for the Wyscout REST API.
///
/// Owns the HTTP client, the credentials, and the request pacer, so
/// rate limiting is scoped to the client instance it belongs to. Every
/// request carries HTTP Basic auth; the configured [`ApiVersion`]
/// selects the URL path prefix.
#[derive(Debug)]
pub struct Transport {
    client: Client,
    base_url: String,
    version: ApiVersion,
    credentials: Credentials,
    rate_limiter: RateLimiter,
}

impl Transport {
    /// Create a new transport instance from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("wyscout-client/0.1.0")
            .build()
            .map_err(|e| Error::Http(format!("Failed to create HTTP client: {e}")))?;

        Ok(Transport {
            client,
            base_url: config.base_url.clone(),
            version: config.version,
            credentials: config.credentials.clone(),
            rate_limiter: RateLimiter::per_second(config.requests_per_second),
        })
    }

    /// Create a mock transport for testing
    #[cfg(test)]
    pub fn new_mock(version: ApiVersion) -> Self {
        Transport {
            client: Client::new(),
            base_url: "https://mock.wyscout.test".to_string(),
            version,
            credentials: Credentials::new("test_user", "test_pass"),
            rate_limiter: RateLimiter::default(),
        }
    }

    /// Build the full URL for an API request
    fn build_url(&self, route: &Route, params: &Params) -> Result<String> {
        let mut url = Url::parse(&format!("{}/{}/{}", self.base_url, self.version, route.path()))
            .map_err(|e| Error::Http(format!("Invalid base URL: {e}")))?;

        if !params.is_empty() {
            let mut query_pairs = url.query_pairs_mut();
            for (key, value) in params.pairs() {
                query_pairs.append_pair(key, value);
            }
        }

        Ok(url.to_string())
    }

    /// Decode a response body, mapping the Wyscout error envelope.
    ///
    /// The API sometimes reports failures inside a 200 response as
    /// `{"error": {"code": ..., "message": ...}}` (or a bare string
    /// under `"error"`). Top-level arrays pass through untouched.
    fn parse_body(&self, status: StatusCode, text: &str) -> Result<Value> {
        let value: Value = serde_json::from_str(text).map_err(|e| {
            Error::Decode(format!("Failed to parse response: {e}. Response: {}", snippet(text)))
        })?;

        if let Some(envelope) = value.get("error") {
            return Err(envelope_error(status, envelope));
        }

        Ok(value)
    }

    /// Get the base URL being used
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the API version being targeted
    pub fn version(&self) -> ApiVersion {
        self.version
    }
}

#[async_trait]
impl RouteLoader for Transport {
    #[instrument(skip_all, fields(path = %route.path()))]
    async fn get_route_json(&self, route: &Route, params: &Params) -> Result<Value> {
        let url = self.build_url(route, params)?;

        self.rate_limiter.acquire().await;
        debug!("Making request to: {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .send()
            .await
            .map_err(|e| Error::Http(format!("Request failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("Failed to read response body: {e}")))?;

        if !status.is_success() {
            error!("Request failed with status: {}", status);
            return Err(status_error(status, text));
        }

        debug!("Response body length: {} bytes", text.len());
        self.parse_body(status, &text)
    }
}

/// Map a non-success HTTP status to an error, keeping the body verbatim.
fn status_error(status: StatusCode, body: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication(body),
        StatusCode::BAD_REQUEST => Error::BadRequest(body),
        StatusCode::TOO_MANY_REQUESTS => Error::TooManyRequests(body),
        _ => Error::Api { status: status.as_u16(), body },
    }
}

/// Map the in-body error envelope to an error.
fn envelope_error(status: StatusCode, envelope: &Value) -> Error {
    if let Value::String(message) = envelope {
        return Error::InvalidResponse(message.clone());
    }

    let message = envelope
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match envelope.get("code").and_then(Value::as_u64) {
        Some(401) => Error::Authentication(message),
        Some(400) => Error::BadRequest(message),
        Some(429) => Error::TooManyRequests(message),
        Some(code) => Error::Api { status: code as u16, body: message },
        None => Error::Api { status: status.as_u16(), body: message },
    }
}

/// First ~200 characters of a body, for error context.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_v3() {
        let transport = Transport::new_mock(ApiVersion::V3);
        let route = Route::new("players").seg(329061);
        let params = Params::new().set("details", "currentTeam");

        let url = transport.build_url(&route, &params).unwrap();

        assert!(url.starts_with("https://mock.wyscout.test/v3/players/329061"));
        assert!(url.contains("details=currentTeam"));
    }

    #[test]
    fn test_build_url_version_switch() {
        let transport = Transport::new_mock(ApiVersion::V2);
        let route = Route::new("players").seg(329061);

        let url = transport.build_url(&route, &Params::new()).unwrap();

        assert_eq!(url, "https://mock.wyscout.test/v2/players/329061");
    }

    #[test]
    fn test_envelope_authentication() {
        let transport = Transport::new_mock(ApiVersion::V3);
        let body = r#"{"error": {"code": 401, "message": "Authentication required"}}"#;

        let result = transport.parse_body(StatusCode::OK, body);

        match result {
            Err(Error::Authentication(message)) => {
                assert_eq!(message, "Authentication required");
            }
            other => panic!("Expected Authentication error, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_bad_request_and_rate() {
        let transport = Transport::new_mock(ApiVersion::V3);

        let bad = transport
            .parse_body(StatusCode::OK, r#"{"error": {"code": 400, "message": "no"}}"#);
        assert!(matches!(bad, Err(Error::BadRequest(_))));

        let throttled = transport
            .parse_body(StatusCode::OK, r#"{"error": {"code": 429, "message": "slow down"}}"#);
        assert!(matches!(throttled, Err(Error::TooManyRequests(_))));
    }

    #[test]
    fn test_envelope_bare_string() {
        let transport = Transport::new_mock(ApiVersion::V3);

        let result = transport.parse_body(StatusCode::OK, r#"{"error": "unrecognized"}"#);

        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }

    #[test]
    fn test_array_passthrough() {
        let transport = Transport::new_mock(ApiVersion::V3);

        let value = transport.parse_body(StatusCode::OK, r#"[{"wyId": 1}, {"wyId": 2}]"#).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let transport = Transport::new_mock(ApiVersion::V3);

        let result = transport.parse_body(StatusCode::OK, "<html>maintenance</html>");

        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_status_error_preserves_body() {
        let error = status_error(StatusCode::NOT_FOUND, "no such player".to_string());

        match error {
            Error::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "no such player");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_status_error_authentication() {
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, String::new()),
            Error::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, String::new()),
            Error::Authentication(_)
        ));
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS, String::new()),
            Error::TooManyRequests(_)
        ));
    }
}
