//! Configuration management for the Wyscout client

use crate::error::{Error, Result};
use crate::{ApiVersion, DEFAULT_REQUESTS_PER_SEC, DEFAULT_TIMEOUT_SECS, WYSCOUT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::env;
use dotenvy::dotenv;

/// Account credentials used for HTTP Basic authentication.
///
/// The `Debug` output redacts the password so the secret does not end
/// up in logs or panic messages.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
  /// Wyscout account username
  pub username: String,
  /// Wyscout account password
  pub password: String,
}

impl Credentials {
  /// Create credentials from a username/password pair
  pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
    Credentials { username: username.into(), password: password.into() }
  }
}

impl std::fmt::Debug for Credentials {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Credentials")
      .field("username", &self.username)
      .field("password", &"<redacted>")
      .finish()
  }
}

/// Main configuration struct for the Wyscout client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
  /// Account credentials
  pub credentials: Credentials,

  /// API version selecting the URL path prefix (v2 or v3)
  pub version: ApiVersion,

  /// Request pacing ceiling (requests per second)
  pub requests_per_second: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the Wyscout API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {

    dotenv().ok();

    let username = env::var("WYSCOUT_USERNAME")
      .map_err(|_| Error::Credentials("WYSCOUT_USERNAME not set".to_string()))?;

    let password = env::var("WYSCOUT_PASSWORD")
      .map_err(|_| Error::Credentials("WYSCOUT_PASSWORD not set".to_string()))?;

    let version = match env::var("WYSCOUT_API_VERSION") {
      Ok(raw) => raw.parse()?,
      Err(_) => ApiVersion::default(),
    };

    let requests_per_second = env::var("WYSCOUT_REQUESTS_PER_SEC")
      .unwrap_or_else(|_| DEFAULT_REQUESTS_PER_SEC.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid WYSCOUT_REQUESTS_PER_SEC".to_string()))?;

    let timeout_secs = env::var("WYSCOUT_TIMEOUT_SECS")
      .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid WYSCOUT_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("WYSCOUT_BASE_URL").unwrap_or_else(|_| WYSCOUT_BASE_URL.to_string());

    Ok(Config {
      credentials: Credentials { username, password },
      version,
      requests_per_second,
      timeout_secs,
      base_url,
    })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_credentials(username: String, password: String) -> Self {
    Config {
      credentials: Credentials { username, password },
      version: ApiVersion::default(),
      requests_per_second: DEFAULT_REQUESTS_PER_SEC,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
      base_url: WYSCOUT_BASE_URL.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("WYSCOUT_USERNAME", "test_user");
    env::set_var("WYSCOUT_PASSWORD", "test_pass");
    env::remove_var("WYSCOUT_API_VERSION");
    env::remove_var("WYSCOUT_REQUESTS_PER_SEC");

    let config = Config::from_env().unwrap();
    assert_eq!(config.credentials.username, "test_user");
    assert_eq!(config.version, ApiVersion::V3);
    assert_eq!(config.requests_per_second, 12);
    assert_eq!(config.base_url, WYSCOUT_BASE_URL);
  }

  #[test]
  fn test_debug_redacts_password() {
    let credentials = Credentials::new("someone", "hunter2");
    let rendered = format!("{credentials:?}");
    assert!(rendered.contains("someone"));
    assert!(!rendered.contains("hunter2"));
  }
}
