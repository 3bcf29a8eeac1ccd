//! Coach endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Coach endpoints
pub struct CoachEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl CoachEndpoints {
    /// Create a new coach endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Retrieve information about a given coach
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        coach_id: u64,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("coaches").seg(coach_id);
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(CoachEndpoints);
