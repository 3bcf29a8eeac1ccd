//! # wyscout-client
//!
//! A pure Wyscout football data API client for Rust (v2 & v3).
//!
//! ## Features
//!
//! - **Clean API**: one endpoint group per Wyscout entity family
//! - **Async/Await**: built on tokio
//! - **Rate Limiting**: strict request pacing to respect account limits
//! - **Mockable**: any [`RouteLoader`] implementation can stand in for
//!   the network transport in tests
//! - **Configurable**: environment-based configuration via wyscout-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wyscout_client::WyscoutClient;
//! use wyscout_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = WyscoutClient::new(config)?;
//!
//!     // Look up a player by Wyscout id
//!     let player = client.players().get(329061).await?;
//!     println!("{}", player["shortName"]);
//!
//!     // Search for a team
//!     use wyscout_client::SearchType;
//!     let hits = client.search().query("Roma", SearchType::Team, None, None).await?;
//!     println!("{hits}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limiting
//!
//! Requests are paced evenly: with the default 12 requests/second the
//! transport leaves at least ~83ms between consecutive requests. The
//! pacing state belongs to the client instance, not the process.
//!
//! ## Error Handling
//!
//! All methods return `Result<T, wyscout_core::Error>` for consistent
//! error handling across the wyscout-* workspace. Response bodies are
//! returned as raw `serde_json::Value`s; nothing is schema-validated.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod loader;
pub mod rate_limit;
pub mod transport;

// Re-export the main client and common types
pub use client::WyscoutClient;
pub use loader::{Params, Route, RouteLoader};
pub use rate_limit::RateLimiter;
pub use transport::Transport;
pub use wyscout_core::{ApiVersion, Config, Credentials, Error, Result, SearchType, UpdatedType};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
    areas::AreaEndpoints, coaches::CoachEndpoints, competitions::CompetitionEndpoints,
    matches::MatchEndpoints, players::PlayerEndpoints, referees::RefereeEndpoints,
    rounds::RoundEndpoints, search::SearchEndpoints, seasons::SeasonEndpoints,
    teams::TeamEndpoints,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_configuration() {
        let config = Config::default_with_credentials("user".to_string(), "pass".to_string());
        // Test that we can create the client configuration
        assert_eq!(config.credentials.username, "user");
        assert_eq!(config.requests_per_second, 12);
    }
}
