//! Route vocabulary and the loader capability.
//!
//! Every fetch the client performs is described by a [`Route`] (ordered
//! path segments) plus [`Params`] (query string pairs). [`RouteLoader`]
//! is the seam between the endpoint groups and the network: the real
//! [`Transport`](crate::transport::Transport) implements it, and test
//! doubles can implement it to bypass network access entirely.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use wyscout_core::Result;

/// Ordered URL path segments identifying a remote resource.
///
/// Built per call; segments are joined with `/` under the versioned
/// base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    segments: Vec<String>,
}

impl Route {
    /// Start a route at a root collection, e.g. `players`.
    pub fn new(root: &str) -> Self {
        Route { segments: vec![root.to_string()] }
    }

    /// Append a path segment; accepts anything printable (ids, names).
    #[must_use]
    pub fn seg(mut self, segment: impl fmt::Display) -> Self {
        self.segments.push(segment.to_string());
        self
    }

    /// The joined path, without a leading slash.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// Query parameters in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    /// An empty parameter set.
    pub fn new() -> Self {
        Params::default()
    }

    /// Add a parameter.
    #[must_use]
    pub fn set(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when a value is present.
    #[must_use]
    pub fn opt(self, key: &str, value: Option<impl fmt::Display>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Add a boolean parameter, serialized lowercase (`true`/`false`).
    #[must_use]
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.set(key, value)
    }

    /// The accumulated key/value pairs.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Whether any parameters were set.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Capability for turning a route + params into parsed JSON.
///
/// Implement this trait to substitute the network transport, e.g. with
/// a stub returning canned values in tests.
#[async_trait]
pub trait RouteLoader: Send + Sync {
    /// Fetch `route` with `params` and return the decoded JSON value.
    async fn get_route_json(&self, route: &Route, params: &Params) -> Result<Value>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_joins_segments() {
        let route = Route::new("players").seg(329061).seg("career");
        assert_eq!(route.path(), "players/329061/career");
    }

    #[test]
    fn test_params_skip_absent_options() {
        let params = Params::new()
            .set("query", "totti")
            .opt("details", None::<&str>)
            .opt("fetch", Some("team"));
        assert_eq!(
            params.pairs(),
            &[
                ("query".to_string(), "totti".to_string()),
                ("fetch".to_string(), "team".to_string()),
            ]
        );
    }

    #[test]
    fn test_flags_serialize_lowercase() {
        let params = Params::new().flag("useSides", true).flag("imageDataURL", false);
        assert_eq!(
            params.pairs(),
            &[
                ("useSides".to_string(), "true".to_string()),
                ("imageDataURL".to_string(), "false".to_string()),
            ]
        );
    }
}
