//! Search and update-feed endpoints
//!
//! This module provides access to Wyscout's cross-entity lookups:
//! - Free-text search over players, teams, competitions, referees and
//!   areas
//! - The daily updated-objects feed for keeping a local mirror fresh

use super::{impl_endpoint_base, EndpointBase};
use crate::loader::{Params, Route, RouteLoader};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;
use wyscout_core::{Error, Result, SearchType, UpdatedType};

/// Search and update-feed endpoints
pub struct SearchEndpoints {
    loader: Arc<dyn RouteLoader>,
}

impl SearchEndpoints {
    /// Create a new search endpoints instance
    pub fn new(loader: Arc<dyn RouteLoader>) -> Self {
        Self { loader }
    }

    /// Return a list of objects matching the provided search string
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search string
    /// * `object_type` - Which object family to search
    /// * `details` - Comma-separated related objects to expand inline
    /// * `fetch` - Comma-separated related objects to attach
    ///
    /// # Examples
    ///
    /// ```ignore
    /// # let client = WyscoutClient::from_env().unwrap();
    /// use wyscout_client::SearchType;
    /// let hits = client.search().query("totti", SearchType::Player, None, None).await?;
    /// # Ok::<(), wyscout_core::Error>(())
    /// ```
    #[instrument(skip(self))]
    pub async fn query(
        &self,
        query: &str,
        object_type: SearchType,
        details: Option<&str>,
        fetch: Option<&str>,
    ) -> Result<Value> {
        let route = Route::new("search");
        let params = Params::new()
            .set("query", query)
            .set("objType", object_type)
            .opt("details", details)
            .opt("fetch", fetch);
        self.loader().get_route_json(&route, &params).await
    }

    /// Return the objects of a given family updated since a timestamp
    ///
    /// Tracks daily changes to the Wyscout database; `since` can go
    /// back at most 168 hours (one week). The response nests the
    /// result under the object-type key, which this method unwraps.
    ///
    /// # Arguments
    ///
    /// * `since` - Lower bound, serialized as `YYYY-MM-DD HH:MM:SS`
    /// * `object_type` - Which object family to report
    #[instrument(skip(self))]
    pub async fn updated_objects(
        &self,
        since: NaiveDateTime,
        object_type: UpdatedType,
    ) -> Result<Value> {
        let route = Route::new("updatedobjects");
        let params = Params::new()
            .set("updated_since", since.format("%Y-%m-%d %H:%M:%S"))
            .set("type", object_type);

        let mut response = self.loader().get_route_json(&route, &params).await?;

        let key = object_type.to_string();
        match response.get_mut(&key) {
            Some(updated) => Ok(updated.take()),
            None => Err(Error::MissingField(key)),
        }
    }
}

impl_endpoint_base!(SearchEndpoints);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::RecordingLoader;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn test_query_params() {
        let loader = Arc::new(RecordingLoader::returning(json!([])));
        let endpoints = SearchEndpoints::new(loader.clone());

        endpoints.query("totti", SearchType::Player, None, None).await.unwrap();

        let (path, params) = loader.last_call();
        assert_eq!(path, "search");
        assert_eq!(
            params,
            vec![
                ("query".to_string(), "totti".to_string()),
                ("objType".to_string(), "player".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_updated_objects_unwraps_type_key() {
        let loader = Arc::new(RecordingLoader::returning(
            json!({"players": [{"wyId": 1}, {"wyId": 2}]}),
        ));
        let endpoints = SearchEndpoints::new(loader.clone());
        let since = NaiveDate::from_ymd_opt(2018, 2, 9)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let updated = endpoints.updated_objects(since, UpdatedType::Players).await.unwrap();

        assert_eq!(updated.as_array().map(Vec::len), Some(2));
        let (path, params) = loader.last_call();
        assert_eq!(path, "updatedobjects");
        assert_eq!(
            params,
            vec![
                ("updated_since".to_string(), "2018-02-09 18:00:00".to_string()),
                ("type".to_string(), "players".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_updated_objects_missing_key() {
        let loader = Arc::new(RecordingLoader::returning(json!({"teams": []})));
        let endpoints = SearchEndpoints::new(loader.clone());
        let since = NaiveDate::from_ymd_opt(2018, 2, 9)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();

        let result = endpoints.updated_objects(since, UpdatedType::Players).await;

        assert!(matches!(result, Err(Error::MissingField(key)) if key == "players"));
    }
}
