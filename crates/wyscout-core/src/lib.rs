pub mod config;
pub mod error;

pub use config::{Config, Credentials};
pub use error::{Error, Result};

use serde::{Deserialize, Serialize};

/// Version of the Wyscout REST API to target.
///
/// The version is part of every request path (`{base}/{version}/...`).
/// v3 is the current API; v2 is kept for legacy accounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
  /// Legacy v2 endpoint
  V2,
  /// Current v3 endpoint (default)
  #[default]
  V3,
}

impl std::fmt::Display for ApiVersion {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      ApiVersion::V2 => write!(f, "v2"),
      ApiVersion::V3 => write!(f, "v3"),
    }
  }
}

impl std::str::FromStr for ApiVersion {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "v2" | "V2" => Ok(ApiVersion::V2),
      "v3" | "V3" => Ok(ApiVersion::V3),
      other => Err(Error::Config(format!("Unknown API version: {other}"))),
    }
  }
}

/// Object kinds accepted by the search endpoint's `objType` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchType {
  /// Search players by name
  Player,
  /// Search teams by name
  Team,
  /// Search competitions by name
  Competition,
  /// Search referees by name
  Referee,
  /// Search areas by name or code
  Area,
}

impl std::fmt::Display for SearchType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      SearchType::Player => write!(f, "player"),
      SearchType::Team => write!(f, "team"),
      SearchType::Competition => write!(f, "competition"),
      SearchType::Referee => write!(f, "referee"),
      SearchType::Area => write!(f, "area"),
    }
  }
}

/// Object kinds tracked by the `updatedobjects` endpoint.
///
/// The daily-update feed reports changes per object family; the wire
/// value doubles as the key the response nests the results under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdatedType {
  /// Geographic areas
  Areas,
  /// Coaches
  Coaches,
  /// Competitions
  Competitions,
  /// Matches
  Matches,
  /// Player career entries
  PlayerCareers,
  /// Players
  Players,
  /// Referees
  Referees,
  /// Competition rounds
  Rounds,
  /// Seasons
  Seasons,
  /// Team career entries
  TeamCareers,
  /// Teams
  Teams,
  /// Player transfers
  Transfers,
}

impl std::fmt::Display for UpdatedType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      UpdatedType::Areas => write!(f, "areas"),
      UpdatedType::Coaches => write!(f, "coaches"),
      UpdatedType::Competitions => write!(f, "competitions"),
      UpdatedType::Matches => write!(f, "matches"),
      UpdatedType::PlayerCareers => write!(f, "playercareers"),
      UpdatedType::Players => write!(f, "players"),
      UpdatedType::Referees => write!(f, "referees"),
      UpdatedType::Rounds => write!(f, "rounds"),
      UpdatedType::Seasons => write!(f, "seasons"),
      UpdatedType::TeamCareers => write!(f, "teamcareers"),
      UpdatedType::Teams => write!(f, "teams"),
      UpdatedType::Transfers => write!(f, "transfers"),
    }
  }
}

/// Base URL for the Wyscout REST API
pub const WYSCOUT_BASE_URL: &str = "https://apirest.wyscout.com";

/// Request pacing defaults
pub const DEFAULT_REQUESTS_PER_SEC: u32 = 12; // one request every ~83ms
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_version_wire_strings() {
    assert_eq!(ApiVersion::V2.to_string(), "v2");
    assert_eq!(ApiVersion::V3.to_string(), "v3");
    assert_eq!(ApiVersion::default(), ApiVersion::V3);
  }

  #[test]
  fn test_version_parsing() {
    assert_eq!("v2".parse::<ApiVersion>().unwrap(), ApiVersion::V2);
    assert_eq!("v3".parse::<ApiVersion>().unwrap(), ApiVersion::V3);
    assert!("v4".parse::<ApiVersion>().is_err());
  }

  #[test]
  fn test_updated_type_matches_response_keys() {
    assert_eq!(UpdatedType::PlayerCareers.to_string(), "playercareers");
    assert_eq!(UpdatedType::TeamCareers.to_string(), "teamcareers");
    assert_eq!(UpdatedType::Transfers.to_string(), "transfers");
  }

  #[test]
  fn test_search_type_wire_strings() {
    assert_eq!(SearchType::Player.to_string(), "player");
    assert_eq!(SearchType::Area.to_string(), "area");
  }
}
