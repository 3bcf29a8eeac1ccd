use thiserror::Error;

/// The main error type for the wyscout-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing or unusable API credentials
  #[error("Credentials error: {0}")]
  Credentials(String),

  /// Remote service rejected the credentials (HTTP 401/403)
  #[error("Authentication failed: {0}")]
  Authentication(String),

  /// Remote service rejected the request as malformed (HTTP 400)
  #[error("Bad request: {0}")]
  BadRequest(String),

  /// Remote service reported request-rate exhaustion (HTTP 429)
  #[error("Too many requests: {0}")]
  TooManyRequests(String),

  /// Any other non-success response; the body is preserved verbatim
  #[error("API error (status {status}): {body}")]
  Api {
    /// HTTP status code (or error-envelope code) reported by the API
    status: u16,
    /// Raw response body, untouched, for caller inspection
    body: String,
  },

  /// Response body is not valid JSON
  #[error("Decode error: {0}")]
  Decode(String),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Invalid response from API
  #[error("Invalid API response: {0}")]
  InvalidResponse(String),

  /// Missing required field in response
  #[error("Missing required field: {0}")]
  MissingField(String),
}

/// Result type alias for wyscout-* crates
pub type Result<T> = std::result::Result<T, Error>;
