//! Competition endpoints
//!
//! Competition listing per area and the current-season contents of a
//! competition: seasons, matches, players and teams.

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Competition endpoints
pub struct CompetitionEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl CompetitionEndpoints {
    /// Create a new competition endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Return the list of competitions for a given area
    ///
    /// # Arguments
    ///
    /// * `area_id` - Numeric area id or alpha-3 area code (e.g. `ITA`)
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        area_id: &str,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions");
        let params = Params::new()
            .set("areaId", area_id)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve information about a given competition
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        competition_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions").seg(competition_id);
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of seasons of the given competition
    ///
    /// # Arguments
    ///
    /// * `competition_id` - The competition's Wyscout id
    /// * `active` - Restrict to the currently active seasons
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn seasons(
        &self,
        competition_id: u64,
        active: bool,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions").seg(competition_id).seg("seasons");
        let params = Params::new()
            .flag("active", active)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of matches of the given competition in the
    /// current season
    #[instrument(skip(self))]
    pub async fn matches(
        &self,
        competition_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions").seg(competition_id).seg("matches");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of players of the given competition in the
    /// current season
    #[instrument(skip(self))]
    pub async fn players(
        &self,
        competition_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions").seg(competition_id).seg("players");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the list of teams of the given competition in the
    /// current season
    #[instrument(skip(self))]
    pub async fn teams(
        &self,
        competition_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("competitions").seg(competition_id).seg("teams");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(CompetitionEndpoints);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::RecordingLoader;
    use serde_json::json;

    #[tokio::test]
    async fn test_list_by_area() {
        let loader = Arc::new(RecordingLoader::returning(json!({"competitions": []})));
        let endpoints = CompetitionEndpoints::new(loader.clone());

        endpoints.list("ITA", None, None).await.unwrap();

        let (path, params) = loader.last_call();
        assert_eq!(path, "competitions");
        assert_eq!(params, vec![("areaId".to_string(), "ITA".to_string())]);
    }

    #[tokio::test]
    async fn test_seasons_active_flag() {
        let loader = Arc::new(RecordingLoader::returning(json!({})));
        let endpoints = CompetitionEndpoints::new(loader.clone());

        endpoints.seasons(524, true, None, None).await.unwrap();

        let (path, params) = loader.last_call();
        assert_eq!(path, "competitions/524/seasons");
        assert_eq!(params, vec![("active".to_string(), "true".to_string())]);
    }
}
