
use super::{Validate, require_table, require_game_mode, insert_query, insert_body};
use crate::error::InvalidArgumentError;
use crate::models::SortOrder;
use crate::transport::Query;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListGameModesRequest {
  pub ranking_table_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page_token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGameModeRequest {
  pub ranking_table_name: String,
  /// Name of the new game mode.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub game_mode: Option<String>,
  /// `true` if lower scores rank higher (e.g. race times).
  #[serde(skip_serializing_if = "Option::is_none")]
  pub asc: Option<bool>,
  /// Aggregation interval in minutes. The service accepts 15 through
  /// 1440; the client does not check.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub calc_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetGameModeRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateGameModeRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub calc_interval: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteGameModeRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
}

impl ListGameModesRequest {
  pub fn new(ranking_table_name: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      page_token: None,
      limit: None,
    }
  }

  pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
    self.page_token = Some(page_token.into());
    self
  }

  pub fn with_limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn query(&self) -> Query {
    let mut query = Query::new();
    insert_query(&mut query, "pageToken", &self.page_token);
    insert_query(&mut query, "limit", &self.limit);
    query
  }
}

impl CreateGameModeRequest {
  pub fn new(ranking_table_name: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      ..Self::default()
    }
  }

  pub fn with_game_mode(mut self, game_mode: impl Into<String>) -> Self {
    self.game_mode = Some(game_mode.into());
    self
  }

  pub fn with_asc(mut self, asc: bool) -> Self {
    self.asc = Some(asc);
    self
  }

  pub fn with_sort_order(self, order: SortOrder) -> Self {
    self.with_asc(order.is_ascending())
  }

  pub fn with_calc_interval(mut self, minutes: u32) -> Self {
    self.calc_interval = Some(minutes);
    self
  }

  pub fn body(&self) -> Value {
    let mut body = Map::new();
    insert_body(&mut body, "gameMode", &self.game_mode);
    insert_body(&mut body, "asc", &self.asc);
    insert_body(&mut body, "calcInterval", &self.calc_interval);
    Value::Object(body)
  }
}

impl GetGameModeRequest {
  pub fn new(ranking_table_name: impl Into<String>, game_mode: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
    }
  }
}

impl UpdateGameModeRequest {
  pub fn new(ranking_table_name: impl Into<String>, game_mode: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
      calc_interval: None,
    }
  }

  pub fn with_calc_interval(mut self, minutes: u32) -> Self {
    self.calc_interval = Some(minutes);
    self
  }

  pub fn body(&self) -> Value {
    let mut body = Map::new();
    insert_body(&mut body, "calcInterval", &self.calc_interval);
    Value::Object(body)
  }
}

impl DeleteGameModeRequest {
  pub fn new(ranking_table_name: impl Into<String>, game_mode: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
    }
  }
}

impl Validate for ListGameModesRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_table(&self.ranking_table_name)
  }
}

// The new mode's name travels in the body and is optional here; the
// service decides whether to accept a nameless mode.
impl Validate for CreateGameModeRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_table(&self.ranking_table_name)
  }
}

impl Validate for GetGameModeRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)
  }
}

impl Validate for UpdateGameModeRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)
  }
}

impl Validate for DeleteGameModeRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn create_body_carries_mode_settings() {
    let req = CreateGameModeRequest::new("T1")
      .with_game_mode("Speed")
      .with_asc(true)
      .with_calc_interval(15);
    assert_eq!(req.body(), json!({ "gameMode": "Speed", "asc": true, "calcInterval": 15 }));
  }

  #[test]
  fn create_body_with_nothing_set_is_empty() {
    assert_eq!(CreateGameModeRequest::new("T1").body(), json!({}));
  }

  #[test]
  fn sort_order_maps_onto_asc() {
    let req = CreateGameModeRequest::new("T1").with_sort_order(SortOrder::Descending);
    assert_eq!(req.asc, Some(false));
    assert_eq!(req.body(), json!({ "asc": false }));
  }

  #[test]
  fn interval_is_not_range_checked() {
    let req = UpdateGameModeRequest::new("T1", "M1").with_calc_interval(5);
    assert!(req.validate().is_ok());
    assert_eq!(req.body(), json!({ "calcInterval": 5 }));
  }

  #[test]
  fn mode_requests_require_table_and_mode() {
    assert_eq!(ListGameModesRequest::new("").validate().unwrap_err().field(), "rankingTableName");
    assert_eq!(CreateGameModeRequest::new("").validate().unwrap_err().field(), "rankingTableName");
    assert_eq!(GetGameModeRequest::new("T1", "").validate().unwrap_err().field(), "gameMode");
    assert_eq!(UpdateGameModeRequest::new("", "M1").validate().unwrap_err().field(), "rankingTableName");
    assert_eq!(DeleteGameModeRequest::new("T1", "").validate().unwrap_err().field(), "gameMode");
    assert!(CreateGameModeRequest::new("T1").validate().is_ok());
  }

  #[test]
  fn list_query_is_empty_without_pagination() {
    assert!(ListGameModesRequest::new("T1").query().is_empty());
    let query = ListGameModesRequest::new("T1").with_limit(5).query();
    assert_eq!(query.len(), 1);
    assert_eq!(query["limit"], "5");
    let query = ListGameModesRequest::new("T1").with_page_token("p2").query();
    assert_eq!(query.len(), 1);
    assert_eq!(query["pageToken"], "p2");
    let query = ListGameModesRequest::new("T1").with_page_token("p2").with_limit(5).query();
    assert_eq!(query.len(), 2);
  }
}
