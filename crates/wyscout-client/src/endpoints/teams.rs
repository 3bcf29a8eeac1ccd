//! Team endpoints
//!
//! Team lookup, schedule, squad, career and advanced statistics.

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Team lookup and statistics endpoints
pub struct TeamEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl TeamEndpoints {
    /// Create a new team endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given team
    #[instrument(skip(self))]
    pub async fn get(&self, team_id: u64) -> Result<Value> {
        self.get_with_options(team_id, false, None, None).await
    }

    /// Retrieve a team with image and detail options
    ///
    /// # Arguments
    ///
    /// * `team_id` - The team's Wyscout id
    /// * `image_data_url` - Embed the team crest as a data URL
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn get_with_options(
        &self,
        team_id: u64,
        image_data_url: bool,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id);
        let params = Params::new()
            .flag("imageDataURL", image_data_url)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of matches played by the given team
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        team_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id).seg("matches");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve all the fixture matches for the given team
    #[instrument(skip(self))]
    pub async fn fixtures(
        &self,
        team_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id).seg("fixtures");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of players currently playing for the given team
    ///
    /// # Arguments
    ///
    /// * `team_id` - The team's Wyscout id
    /// * `season_id` - Restrict the squad to a specific season
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn squad(
        &self,
        team_id: u64,
        season_id: Option<u64>,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id).seg("squad");
        let params = Params::new()
            .opt("seasonId", season_id)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve the team's career entries
    #[instrument(skip(self))]
    pub async fn career(
        &self,
        team_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id).seg("career");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return advanced statistics of a given team in a specific
    /// competition's season
    #[instrument(skip(self))]
    pub async fn advanced_stats(
        &self,
        team_id: u64,
        competition_id: u64,
        season_id: Option<u64>,
        round_id: Option<u64>,
        match_day: Option<u32>,
    ) -> Result<Value> {
        let route = Route::new("teams").seg(team_id).seg("advancedstats");
        let params = Params::new()
            .set("compId", competition_id)
            .opt("seasonId", season_id)
            .opt("roundId", round_id)
            .opt("matchDay", match_day);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(TeamEndpoints);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::RecordingLoader;
    use serde_json::json;

    #[tokio::test]
    async fn test_squad_season_restriction() {
        let loader = Arc::new(RecordingLoader::returning(json!({})));
        let endpoints = TeamEndpoints::new(loader.clone());

        endpoints.squad(3157, Some(187530), None, None).await.unwrap();

        let (path, params) = loader.last_call();
        assert_eq!(path, "teams/3157/squad");
        assert_eq!(params, vec![("seasonId".to_string(), "187530".to_string())]);
    }
}
