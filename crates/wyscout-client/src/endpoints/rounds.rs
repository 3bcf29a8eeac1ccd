//! Round endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Competition round endpoints
pub struct RoundEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl RoundEndpoints {
    /// Create a new round endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given round
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        round_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("rounds").seg(round_id);
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(RoundEndpoints);
