
use super::{Validate, require_table, insert_query, insert_body};
use crate::error::InvalidArgumentError;
use crate::transport::Query;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListRankingTablesRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub page_token: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRankingTableRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRankingTableRequest {
  pub ranking_table_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRankingTableRequest {
  pub ranking_table_name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRankingTableRequest {
  pub ranking_table_name: String,
}

impl ListRankingTablesRequest {
  pub fn new() -> Self {
    Self::default()
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

impl CreateRankingTableRequest {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = Some(name.into());
    self
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn body(&self) -> Value {
    let mut body = Map::new();
    insert_body(&mut body, "name", &self.name);
    insert_body(&mut body, "description", &self.description);
    Value::Object(body)
  }
}

impl GetRankingTableRequest {
  pub fn new(ranking_table_name: impl Into<String>) -> Self {
    Self { ranking_table_name: ranking_table_name.into() }
  }
}

impl UpdateRankingTableRequest {
  pub fn new(ranking_table_name: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      description: None,
    }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  pub fn body(&self) -> Value {
    let mut body = Map::new();
    insert_body(&mut body, "description", &self.description);
    Value::Object(body)
  }
}

impl DeleteRankingTableRequest {
  pub fn new(ranking_table_name: impl Into<String>) -> Self {
    Self { ranking_table_name: ranking_table_name.into() }
  }
}

impl Validate for ListRankingTablesRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    Ok(())
  }
}

impl Validate for CreateRankingTableRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    Ok(())
  }
}

impl Validate for GetRankingTableRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_table(&self.ranking_table_name)
  }
}

impl Validate for UpdateRankingTableRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_table(&self.ranking_table_name)
  }
}

impl Validate for DeleteRankingTableRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_table(&self.ranking_table_name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn list_query_has_only_supplied_keys() {
    assert!(ListRankingTablesRequest::new().query().is_empty());
    let query = ListRankingTablesRequest::new().with_page_token("abc").with_limit(20).query();
    assert_eq!(query.len(), 2);
    assert_eq!(query["pageToken"], "abc");
    assert_eq!(query["limit"], "20");
  }

  #[test]
  fn create_body_omits_absent_fields() {
    assert_eq!(CreateRankingTableRequest::new().body(), json!({}));
    assert_eq!(
      CreateRankingTableRequest::new().with_name("weekly").body(),
      json!({ "name": "weekly" }),
    );
    assert_eq!(
      CreateRankingTableRequest::new().with_name("weekly").with_description("").body(),
      json!({ "name": "weekly", "description": "" }),
    );
  }

  #[test]
  fn update_body_never_contains_the_table_name() {
    let req = UpdateRankingTableRequest::new("T1").with_description("desc");
    assert_eq!(req.body(), json!({ "description": "desc" }));
  }

  #[test]
  fn table_name_is_required() {
    assert_eq!(GetRankingTableRequest::new("").validate().unwrap_err().field(), "rankingTableName");
    assert_eq!(UpdateRankingTableRequest::new("").validate().unwrap_err().field(), "rankingTableName");
    assert_eq!(DeleteRankingTableRequest::new("").validate().unwrap_err().field(), "rankingTableName");
    assert!(GetRankingTableRequest::new("T1").validate().is_ok());
  }

  #[test]
  fn missing_key_in_a_dynamic_map_fails_validation() {
    let req: GetRankingTableRequest = serde_json::from_value(json!({})).unwrap();
    assert!(req.validate().is_err());
    let req: UpdateRankingTableRequest = serde_json::from_value(json!({
      "rankingTableName": "T1",
      "description": "hi",
    })).unwrap();
    assert_eq!(req, UpdateRankingTableRequest::new("T1").with_description("hi"));
  }
}
