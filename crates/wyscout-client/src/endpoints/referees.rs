//! Referee endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Referee endpoints
pub struct RefereeEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl RefereeEndpoints {
    /// Create a new referee endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given referee
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        referee_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("referees").seg(referee_id);
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(RefereeEndpoints);
