//! Player endpoints
//!
//! This module provides access to Wyscout's player data:
//! - Player lookup by Wyscout id
//! - Aggregated career and transfer history
//! - Current-season matches and full fixture list
//! - Advanced statistics per competition season
//! - Injury history (beta)

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Player lookup and statistics endpoints
pub struct PlayerEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl PlayerEndpoints {
    /// Create a new player endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given player
    ///
    /// # Arguments
    ///
    /// * `player_id` - The player's Wyscout id
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let client = WyscoutClient::from_env().unwrap();
    /// let player = client.players().get(329061).await?;
    /// println!("{}", player["shortName"]);
    /// # Ok::<(), wyscout_core::Error>(())
    /// ```
    #[instrument(skip(self))]
    pub async fn get(&self, player_id: u64) -> Result<Value> {
        self.get_with_options(player_id, false, None, None).await
    }

    /// Retrieve a player with image and detail options
    ///
    /// # Arguments
    ///
    /// * `player_id` - The player's Wyscout id
    /// * `image_data_url` - Embed the player image as a data URL
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn get_with_options(
        &self,
        player_id: u64,
        image_data_url: bool,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id);
        let params = Params::new()
            .flag("imageDataURL", image_data_url)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve aggregated career information about a given player
    #[instrument(skip(self))]
    pub async fn career(
        &self,
        player_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("career");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve a given player's transfers
    #[instrument(skip(self))]
    pub async fn transfers(
        &self,
        player_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("transfer");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of matches played by the given player in the
    /// current season
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        player_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("matches");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve all the fixture matches for the given player
    #[instrument(skip(self))]
    pub async fn fixtures(
        &self,
        player_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("fixtures");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return advanced statistics of a given player in a specific
    /// competition's season
    ///
    /// The statistics are relative to the selected season globally, not
    /// to a specific team.
    ///
    /// # Arguments
    ///
    /// * `player_id` - The player's Wyscout id
    /// * `competition_id` - Competition the statistics are scoped to
    /// * `season_id` - Optional season restriction
    /// * `round_id` - Optional round restriction
    /// * `match_day` - Optional match-day restriction
    #[instrument(skip(self))]
    pub async fn advanced_stats(
        &self,
        player_id: u64,
        competition_id: u64,
        season_id: Option<u64>,
        round_id: Option<u64>,
        match_day: Option<u32>,
    ) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("advancedstats");
        let params = Params::new()
            .set("compId", competition_id)
            .opt("seasonId", season_id)
            .opt("roundId", round_id)
            .opt("matchDay", match_day);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of injuries for a given player
    ///
    /// This endpoint is still marked beta by the vendor.
    #[instrument(skip(self))]
    pub async fn injuries(&self, player_id: u64) -> Result<Value> {
        let route = Route::new("players").seg(player_id).seg("injuries");
        self.loader().get_route_json(&route, &Params::new()).await
    }
}

impl_endpoint_base!(PlayerEndpoints);
