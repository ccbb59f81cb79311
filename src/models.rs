//! Typed views over the service's JSON responses.
//!
//! [`RankingClient`](crate::RankingClient) always hands back the raw
//! response. These types are for callers who would rather not pick
//! through a [`Value`] by hand:
//!
//! ```
//! # use ranking_client::models::{decode, ItemResponse, GameMode};
//! # let response = serde_json::json!({ "item": {
//! #   "gameModeId": "gm-1", "rankingTableId": "rt-1", "gameMode": "Speed",
//! #   "ownerId": "owner", "asc": true, "calcInterval": 15,
//! #   "createAt": 1500000000, "updateAt": 1500000000 } });
//! let mode: ItemResponse<GameMode> = decode(&response).unwrap();
//! assert!(mode.item.sort_order().is_ascending());
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a raw response into one of the types in this module.
pub fn decode<T: DeserializeOwned>(response: &Value) -> Result<T, serde_json::Error> {
  T::deserialize(response)
}

/// Direction in which a game mode ranks its scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
  /// Lowest score first, as in a race game.
  Ascending,
  /// Highest score first.
  Descending,
}

/// Envelope of single-entity responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse<T> {
  pub item: T,
}

/// Envelope of listing responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsResponse<T> {
  pub items: Vec<T>,
  /// Present when another page is available.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingTable {
  pub ranking_table_id: String,
  pub owner_id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub create_at: DateTime<Utc>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub update_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
  pub game_mode_id: String,
  pub ranking_table_id: String,
  pub game_mode: String,
  pub owner_id: String,
  pub asc: bool,
  /// Aggregation interval in minutes.
  pub calc_interval: u32,
  /// Absent until the first aggregation has run.
  #[serde(default, with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none")]
  pub last_calc_at: Option<DateTime<Utc>>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub create_at: DateTime<Utc>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub update_at: DateTime<Utc>,
}

/// A single aggregated position in a ranking.
///
/// `index` is the strict 1-based position. `rank` is shared between
/// tied scores, so two players on the same score have the same `rank`
/// but consecutive `index` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
  pub index: u64,
  pub rank: u64,
  pub user_id: String,
  pub score: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<String>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub update_at: DateTime<Utc>,
}

/// A score as accepted by the service, before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSubmission {
  pub ranking_table_id: String,
  pub game_mode: String,
  pub user_id: String,
  pub score: i64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub meta: Option<String>,
  #[serde(with = "chrono::serde::ts_seconds")]
  pub update_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MyRank {
  pub index: u64,
  pub rank: u64,
}

/// Bounds of a bucketed rank estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRank {
  pub min: u64,
  pub max: u64,
}

impl SortOrder {
  pub fn from_asc(asc: bool) -> Self {
    if asc { SortOrder::Ascending } else { SortOrder::Descending }
  }

  pub fn is_ascending(self) -> bool {
    self == SortOrder::Ascending
  }
}

impl GameMode {
  pub fn sort_order(&self) -> SortOrder {
    SortOrder::from_asc(self.asc)
  }
}

impl EstimateRank {
  pub fn contains(&self, rank: u64) -> bool {
    (self.min..=self.max).contains(&rank)
  }
}
