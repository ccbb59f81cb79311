
use super::{Validate, require, require_game_mode, insert_query, insert_body, fields};
use crate::error::InvalidArgumentError;
use crate::transport::{Headers, Query};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use std::fmt;

/// Reads a page of aggregated ranking entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetRankingRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
  /// Zero-based offset into the ranking.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub offset: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,
}

/// Submits a score on behalf of the player holding `access_token`.
///
/// Submissions are buffered server-side and only show up in
/// [`GetRankingRequest`] results after the game mode's next
/// aggregation.
///
/// Only [`Deserialize`] is implemented, so the access token can be
/// read from a request map but is never written back out.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PutScoreRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
  pub access_token: String,
  pub score: Option<i64>,
  pub meta: Option<String>,
}

/// Looks up the rank of the player holding `access_token`, as of the
/// last aggregation.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetMyRankRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
  pub access_token: String,
}

/// Asks roughly where a hypothetical score would place. The answer is
/// bucketed to about a thousand ranks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetEstimateRankRequest {
  pub ranking_table_name: String,
  pub game_mode: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub score: Option<i64>,
}

impl GetRankingRequest {
  pub fn new(ranking_table_name: impl Into<String>, game_mode: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
      offset: None,
      limit: None,
    }
  }

  pub fn with_offset(mut self, offset: u64) -> Self {
    self.offset = Some(offset);
    self
  }

  pub fn with_limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn query(&self) -> Query {
    let mut query = Query::new();
    insert_query(&mut query, "offset", &self.offset);
    insert_query(&mut query, "limit", &self.limit);
    query
  }
}

impl PutScoreRequest {
  pub fn new(
    ranking_table_name: impl Into<String>,
    game_mode: impl Into<String>,
    access_token: impl Into<String>,
  ) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
      access_token: access_token.into(),
      score: None,
      meta: None,
    }
  }

  pub fn with_score(mut self, score: i64) -> Self {
    self.score = Some(score);
    self
  }

  pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
    self.meta = Some(meta.into());
    self
  }

  pub fn body(&self) -> Value {
    let mut body = Map::new();
    insert_body(&mut body, "score", &self.score);
    insert_body(&mut body, "meta", &self.meta);
    Value::Object(body)
  }

  pub fn headers(&self) -> Headers {
    super::access_token_headers(&self.access_token)
  }
}

impl GetMyRankRequest {
  pub fn new(
    ranking_table_name: impl Into<String>,
    game_mode: impl Into<String>,
    access_token: impl Into<String>,
  ) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
      access_token: access_token.into(),
    }
  }

  pub fn headers(&self) -> Headers {
    super::access_token_headers(&self.access_token)
  }
}

impl GetEstimateRankRequest {
  pub fn new(ranking_table_name: impl Into<String>, game_mode: impl Into<String>) -> Self {
    Self {
      ranking_table_name: ranking_table_name.into(),
      game_mode: game_mode.into(),
      score: None,
    }
  }

  pub fn with_score(mut self, score: i64) -> Self {
    self.score = Some(score);
    self
  }

  pub fn query(&self) -> Query {
    let mut query = Query::new();
    insert_query(&mut query, "score", &self.score);
    query
  }
}

impl Validate for GetRankingRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)
  }
}

impl Validate for PutScoreRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)?;
    require(fields::ACCESS_TOKEN, &self.access_token)
  }
}

impl Validate for GetMyRankRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)?;
    require(fields::ACCESS_TOKEN, &self.access_token)
  }
}

impl Validate for GetEstimateRankRequest {
  fn validate(&self) -> Result<(), InvalidArgumentError> {
    require_game_mode(&self.ranking_table_name, &self.game_mode)
  }
}

// Access tokens are credentials, so keep them out of debug output.
impl fmt::Debug for PutScoreRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("PutScoreRequest")
      .field("ranking_table_name", &self.ranking_table_name)
      .field("game_mode", &self.game_mode)
      .field("access_token", &"<redacted>")
      .field("score", &self.score)
      .field("meta", &self.meta)
      .finish()
  }
}

impl fmt::Debug for GetMyRankRequest {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("GetMyRankRequest")
      .field("ranking_table_name", &self.ranking_table_name)
      .field("game_mode", &self.game_mode)
      .field("access_token", &"<redacted>")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::requests::ACCESS_TOKEN_HEADER;
  use serde_json::json;

  #[test]
  fn put_score_keeps_token_out_of_body() {
    let req = PutScoreRequest::new("T1", "M1", "tok").with_score(100).with_meta("replay-7");
    assert_eq!(req.body(), json!({ "score": 100, "meta": "replay-7" }));
    assert_eq!(req.headers()[ACCESS_TOKEN_HEADER], "tok");
  }

  #[test]
  fn zero_score_is_still_sent() {
    let req = PutScoreRequest::new("T1", "M1", "tok").with_score(0);
    assert_eq!(req.body(), json!({ "score": 0 }));
    let req = GetEstimateRankRequest::new("T1", "M1").with_score(0);
    assert_eq!(req.query()["score"], "0");
  }

  #[test]
  fn access_token_is_required() {
    let err = PutScoreRequest::new("T1", "M1", "").validate().unwrap_err();
    assert_eq!(err.field(), "accessToken");
    let err = GetMyRankRequest::new("T1", "M1", "").validate().unwrap_err();
    assert_eq!(err.field(), "accessToken");
  }

  #[test]
  fn ranking_query_passes_offset_and_limit_verbatim() {
    assert!(GetRankingRequest::new("T1", "M1").query().is_empty());
    let query = GetRankingRequest::new("T1", "M1").with_offset(0).with_limit(50).query();
    assert_eq!(query.len(), 2);
    assert_eq!(query["offset"], "0");
    assert_eq!(query["limit"], "50");
  }

  #[test]
  fn debug_output_hides_access_token() {
    let debug = format!("{:?}", PutScoreRequest::new("T1", "M1", "secret-token"));
    assert!(!debug.contains("secret-token"));
    let debug = format!("{:?}", GetMyRankRequest::new("T1", "M1", "secret-token"));
    assert!(!debug.contains("secret-token"));
  }

  #[test]
  fn token_requests_read_the_token_from_a_map() {
    let req: PutScoreRequest = serde_json::from_value(json!({
      "rankingTableName": "T1",
      "gameMode": "M1",
      "accessToken": "tok",
      "score": 7,
    })).unwrap();
    assert!(req.validate().is_ok());
    assert_eq!(req, PutScoreRequest::new("T1", "M1", "tok").with_score(7));

    let req: GetMyRankRequest = serde_json::from_value(json!({
      "rankingTableName": "T1",
      "gameMode": "M1",
      "accessToken": "tok",
    })).unwrap();
    assert!(req.validate().is_ok());
    assert_eq!(req.headers()[ACCESS_TOKEN_HEADER], "tok");
  }

  #[test]
  fn estimate_requires_mode() {
    let req: GetEstimateRankRequest = serde_json::from_value(json!({ "rankingTableName": "T1" })).unwrap();
    assert_eq!(req.validate().unwrap_err().field(), "gameMode");
  }
}
