/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The main client facade over the Wyscout endpoint groups.

use crate::endpoints::{
  areas::AreaEndpoints, coaches::CoachEndpoints, competitions::CompetitionEndpoints,
  matches::MatchEndpoints, players::PlayerEndpoints, referees::RefereeEndpoints,
  rounds::RoundEndpoints, search::SearchEndpoints, seasons::SeasonEndpoints,
  teams::TeamEndpoints,
};

use crate::loader::RouteLoader;
use crate::transport::Transport;
use std::sync::Arc;
use wyscout_core::{Config, Result};

/// Main Wyscout API client
///
/// Provides access to the Wyscout entity families through organized
/// endpoint modules. Handles authentication, rate limiting, and
/// transport concerns automatically.
///
/// # Examples
///
/// ```ignore
/// use wyscout_client::WyscoutClient;
/// use wyscout_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = WyscoutClient::new(config)?;
///
///     // Look up a player
///     let player = client.players().get(329061).await?;
///     println!("{}", player["shortName"]);
///
///     // List competitions for Italy
///     let competitions = client.competitions().list("ITA", None, None).await?;
///     println!("{competitions}");
///
///     Ok(())
/// }
/// ```
pub struct WyscoutClient {
  loader: Arc<dyn RouteLoader>,
}

impl WyscoutClient {
  /// Create a new Wyscout API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing credentials and other settings
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use wyscout_client::WyscoutClient;
  /// use wyscout_core::Config;
  ///
  /// let config = Config::from_env().expect("Missing credentials");
  /// let client = WyscoutClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    Ok(WyscoutClient { loader: Arc::new(Transport::new(&config)?) })
  }

  /// Create a client configured from the environment
  ///
  /// Reads `WYSCOUT_USERNAME`, `WYSCOUT_PASSWORD` and the optional
  /// `WYSCOUT_*` overrides, `.env` files included.
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Create a client over a user-supplied loader
  ///
  /// Any [`RouteLoader`] implementation works; a stub returning canned
  /// JSON fully bypasses network access, which is the intended way to
  /// test code built on this client.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// let client = WyscoutClient::with_loader(Arc::new(my_stub));
  /// let canned = client.players().get(1).await?;
  /// ```
  pub fn with_loader(loader: Arc<dyn RouteLoader>) -> Self {
    WyscoutClient { loader }
  }

  /// Get access to area endpoints
  pub fn areas(&self) -> AreaEndpoints {
    AreaEndpoints::new(self.loader.clone())
  }

  /// Get access to coach endpoints
  pub fn coaches(&self) -> CoachEndpoints {
    CoachEndpoints::new(self.loader.clone())
  }

  /// Get access to competition endpoints
  ///
  /// Returns a `CompetitionEndpoints` instance for listing competitions
  /// by area and walking a competition's seasons, matches, players and
  /// teams.
  pub fn competitions(&self) -> CompetitionEndpoints {
    CompetitionEndpoints::new(self.loader.clone())
  }

  /// Get access to match endpoints
  pub fn matches(&self) -> MatchEndpoints {
    MatchEndpoints::new(self.loader.clone())
  }

  /// Get access to player endpoints
  ///
  /// Returns a `PlayerEndpoints` instance for player lookup, career,
  /// transfers, schedule, advanced statistics and injury data.
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # let client = WyscoutClient::from_env().unwrap();
  /// let player = client.players().get(329061).await?;
  /// let career = client.players().career(329061, None, None).await?;
  /// # Ok::<(), wyscout_core::Error>(())
  /// ```
  pub fn players(&self) -> PlayerEndpoints {
    PlayerEndpoints::new(self.loader.clone())
  }

  /// Get access to referee endpoints
  pub fn referees(&self) -> RefereeEndpoints {
    RefereeEndpoints::new(self.loader.clone())
  }

  /// Get access to round endpoints
  pub fn rounds(&self) -> RoundEndpoints {
    RoundEndpoints::new(self.loader.clone())
  }

  /// Get access to search endpoints
  ///
  /// Returns a `SearchEndpoints` instance for free-text object search
  /// and the daily updated-objects feed.
  pub fn search(&self) -> SearchEndpoints {
    SearchEndpoints::new(self.loader.clone())
  }

  /// Get access to season endpoints
  pub fn seasons(&self) -> SeasonEndpoints {
    SeasonEndpoints::new(self.loader.clone())
  }

  /// Get access to team endpoints
  pub fn teams(&self) -> TeamEndpoints {
    TeamEndpoints::new(self.loader.clone())
  }
}

impl std::fmt::Debug for WyscoutClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WyscoutClient").field("loader", &"RouteLoader").finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::loader::{Params, Route};
  use async_trait::async_trait;
  use serde_json::{json, Value};

  struct CannedLoader(Value);

  #[async_trait]
  impl RouteLoader for CannedLoader {
    async fn get_route_json(&self, _route: &Route, _params: &Params) -> Result<Value> {
      Ok(self.0.clone())
    }
  }

  #[tokio::test]
  async fn test_facade_delegates_to_loader() {
    let canned = json!({"wyId": 329061, "shortName": "F. Totti"});
    let client = WyscoutClient::with_loader(Arc::new(CannedLoader(canned.clone())));

    // The facade adds nothing: whatever the loader returns comes back.
    assert_eq!(client.players().get(329061).await.unwrap(), canned);
    assert_eq!(client.players().get(1).await.unwrap(), canned);
    assert_eq!(client.teams().get(3157).await.unwrap(), canned);
  }

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_credentials("user".to_string(), "pass".to_string());
    let client = WyscoutClient::new(config).expect("Failed to create client");
    let rendered = format!("{client:?}");
    assert!(rendered.contains("WyscoutClient"));
  }
}
