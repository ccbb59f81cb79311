//! Typed request records, one per operation.
//!
//! Required fields are plain `String`s and are checked for emptiness
//! before anything is sent. Optional fields are `Option`s and are
//! forwarded exactly when they are `Some`, including `Some(0)`,
//! `Some(false)` and `Some("")`.
//!
//! Every request also implements [`Deserialize`](serde::Deserialize)
//! from its camelCase wire shape. Missing keys fall back to their
//! defaults, so a dynamic map lacking a required key becomes an
//! empty field and fails [`Validate::validate`] with
//! [`InvalidArgumentError`].

mod game_mode;
mod ranking;
mod ranking_table;

pub use game_mode::{
  ListGameModesRequest, CreateGameModeRequest, GetGameModeRequest,
  UpdateGameModeRequest, DeleteGameModeRequest,
};
pub use ranking::{GetRankingRequest, PutScoreRequest, GetMyRankRequest, GetEstimateRankRequest};
pub use ranking_table::{
  ListRankingTablesRequest, CreateRankingTableRequest, GetRankingTableRequest,
  UpdateRankingTableRequest, DeleteRankingTableRequest,
};

use crate::error::InvalidArgumentError;
use crate::transport::{Headers, Query};

use serde_json::{Map, Value};

/// Wire names of the fields that can be required.
pub mod fields {
  pub const RANKING_TABLE_NAME: &'static str = "rankingTableName";
  pub const GAME_MODE: &'static str = "gameMode";
  pub const ACCESS_TOKEN: &'static str = "accessToken";
}

/// Header carrying a player's access token.
pub const ACCESS_TOKEN_HEADER: &'static str = "X-GS2-ACCESS-TOKEN";

/// Checks that every required field of a request is present.
pub trait Validate {
  fn validate(&self) -> Result<(), InvalidArgumentError>;
}

/// Empty strings count as missing.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), InvalidArgumentError> {
  if value.is_empty() {
    Err(InvalidArgumentError::new(field))
  } else {
    Ok(())
  }
}

pub(crate) fn require_table(table: &str) -> Result<(), InvalidArgumentError> {
  require(fields::RANKING_TABLE_NAME, table)
}

pub(crate) fn require_game_mode(table: &str, mode: &str) -> Result<(), InvalidArgumentError> {
  require_table(table)?;
  require(fields::GAME_MODE, mode)
}

pub(crate) fn insert_query<T: ToString>(query: &mut Query, key: &str, value: &Option<T>) {
  if let Some(value) = value {
    query.insert(key.to_owned(), value.to_string());
  }
}

pub(crate) fn insert_body<T: Clone + Into<Value>>(body: &mut Map<String, Value>, key: &str, value: &Option<T>) {
  if let Some(value) = value {
    body.insert(key.to_owned(), value.clone().into());
  }
}

pub(crate) fn access_token_headers(access_token: &str) -> Headers {
  let mut headers = Headers::new();
  headers.insert(ACCESS_TOKEN_HEADER.to_owned(), access_token.to_owned());
  headers
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn require_rejects_only_empty_strings() {
    assert_eq!(require("gameMode", ""), Err(InvalidArgumentError::new("gameMode")));
    assert_eq!(require("gameMode", "0"), Ok(()));
    assert_eq!(require("gameMode", " "), Ok(()));
  }

  #[test]
  fn require_game_mode_checks_table_first() {
    let err = require_game_mode("", "").unwrap_err();
    assert_eq!(err.field(), fields::RANKING_TABLE_NAME);
    let err = require_game_mode("T1", "").unwrap_err();
    assert_eq!(err.field(), fields::GAME_MODE);
  }

  #[test]
  fn insert_helpers_skip_none() {
    let mut query = Query::new();
    insert_query(&mut query, "limit", &None::<u32>);
    insert_query(&mut query, "offset", &Some(0u64));
    assert_eq!(query.len(), 1);
    assert_eq!(query["offset"], "0");

    let mut body = Map::new();
    insert_body(&mut body, "asc", &Some(false));
    insert_body(&mut body, "meta", &None::<String>);
    assert_eq!(Value::Object(body), json!({ "asc": false }));
  }

  #[test]
  fn access_token_goes_in_a_header() {
    let headers = access_token_headers("tok");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers[ACCESS_TOKEN_HEADER], "tok");
  }
}
