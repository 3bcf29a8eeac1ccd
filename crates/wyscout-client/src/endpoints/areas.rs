//! Area endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::Result;

/// Geographic area endpoints
pub struct AreaEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl AreaEndpoints {
    /// Create a new area endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Return the full list of areas with their codes
    #[instrument(skip(self))]
    pub async fn list(&self, details: Option<&str>, fetch: Option<&str>) -> Result<Value> {
        let route = Route::new("areas");
        let params = Params::new().opt("details", details).opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }
}

impl_endpoint_base!(AreaEndpoints);
