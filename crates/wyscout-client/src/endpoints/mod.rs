//! Entity endpoint groups for the Wyscout API.
//!
//! Each module mirrors one family of routes; every method resolves to
//! a single GET through the shared [`RouteLoader`].

pub mod areas;
pub mod coaches;
pub mod competitions;
pub mod matches;
pub mod players;
pub mod referees;
pub mod rounds;
pub mod search;
pub mod seasons;
pub mod teams;

use crate::loader::RouteLoader;
use std::sync::Arc;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub trait EndpointBase {
  /// Get a reference to the loader behind this endpoint group
  fn loader(&self) -> &Arc<dyn RouteLoader>;
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl crate::endpoints::EndpointBase for $struct_name {
      fn loader(&self) -> &std::sync::Arc<dyn crate::loader::RouteLoader> {
        &self.loader
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

#[cfg(test)]
pub(crate) mod test_support {
  use crate::loader::{Params, Route, RouteLoader};
  use async_trait::async_trait;
  use serde_json::Value;
  use std::sync::Mutex;
  use wyscout_core::Result;

  /// Loader stub that records the last route/params and returns a
  /// canned value.
  pub struct RecordingLoader {
    pub response: Value,
    pub seen: Mutex<Vec<(String, Vec<(String, String)>)>>,
  }

  impl RecordingLoader {
    pub fn returning(response: Value) -> Self {
      RecordingLoader { response, seen: Mutex::new(Vec::new()) }
    }

    pub fn last_call(&self) -> (String, Vec<(String, String)>) {
      self.seen.lock().unwrap().last().cloned().expect("no call recorded")
    }
  }

  #[async_trait]
  impl RouteLoader for RecordingLoader {
    async fn get_route_json(&self, route: &Route, params: &Params) -> Result<Value> {
      self.seen.lock().unwrap().push((route.path(), params.pairs().to_vec()));
      Ok(self.response.clone())
    }
  }
}
