//! Season endpoints
//!
//! Season lookup plus the season's careers, matches, fixtures,
//! players, teams and standings.

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Season endpoints
pub struct SeasonEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl SeasonEndpoints {
    /// Create a new season endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given season
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id);
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve all the career entries for the given season
    ///
    /// # Arguments
    ///
    /// * `season_id` - The season's Wyscout id
    /// * `filters` - Optional vendor filter expression
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn career(
        &self,
        season_id: u64,
        filters: Option<&str>,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("career");
        let params = Params::new()
            .opt("filters", filters)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of matches played in the given season
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("matches");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve all the matches scheduled for the given season
    #[instrument(skip(self))]
    pub async fn fixtures(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("fixtures");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of players in the given season
    #[instrument(skip(self))]
    pub async fn players(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("players");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of teams in the given season
    #[instrument(skip(self))]
    pub async fn teams(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("teams");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve the standings for the given season
    #[instrument(skip(self))]
    pub async fn standings(
        &self,
        season_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("seasons").seg(season_id).seg("standings");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(SeasonEndpoints);
