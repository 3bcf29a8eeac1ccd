//! Match endpoints
//!
//! Match lookup and per-match event streams.

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Match endpoints
pub struct MatchEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl MatchEndpoints {
    /// Create a new match endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given match
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        match_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        self.get_with_options(match_id, false, details, fetch).await
    }

    /// Retrieve a match, optionally keyed by home/away side
    ///
    /// # Arguments
    ///
    /// * `match_id` - The match's Wyscout id
    /// * `use_sides` - Report teams as `side1`/`side2` instead of ids
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    #[instrument(skip(self))]
    pub async fn get_with_options(
        &self,
        match_id: u64,
        use_sides: bool,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("matches").seg(match_id);
        let params = Params::new()
            .flag("useSides", use_sides)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Retrieve the event stream of a given match
    #[instrument(skip(self))]
    pub async fn events(
        &self,
        match_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("matches").seg(match_id).seg("events");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(MatchEndpoints);
