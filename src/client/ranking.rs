
use super::{RankingClient, Operation, Response};
use crate::error::Error;
use crate::paths;
use crate::requests::{GetRankingRequest, PutScoreRequest, GetMyRankRequest, GetEstimateRankRequest};
use crate::transport::{Method, Transport};

impl<T: Transport> RankingClient<T> {
  /// Reads a slice of the aggregated ranking.
  ///
  /// Each entry carries both an `index` (1-based position) and a
  /// `rank` (shared between tied scores). Use `index` when ties
  /// should still be told apart. Entries can be read from any offset,
  /// so [`get_my_rank`](Self::get_my_rank) followed by a query around
  /// the returned index shows a player their neighbours.
  pub async fn get_ranking(&self, request: &GetRankingRequest) -> Result<Response, Error> {
    let op = Operation::GetRanking;
    Self::check(op, request)?;
    let path = paths::ranking(&request.ranking_table_name, &request.game_mode);
    let req = self.request(Method::Get, op, path)
      .with_query(request.query());
    self.dispatch(req).await
  }

  /// Submits a score for the player identified by the access token.
  ///
  /// Scores are buffered and written into the ranking at the next
  /// aggregation. A score submitted just as an aggregation starts may
  /// miss it and appear one interval later.
  pub async fn put_score(&self, request: &PutScoreRequest) -> Result<Response, Error> {
    let op = Operation::PutScore;
    Self::check(op, request)?;
    let path = paths::ranking(&request.ranking_table_name, &request.game_mode);
    let req = self.request(Method::Post, op, path)
      .with_body(request.body())
      .with_headers(request.headers());
    self.dispatch(req).await
  }

  /// The player's exact `index` and `rank` as of the last
  /// aggregation.
  pub async fn get_my_rank(&self, request: &GetMyRankRequest) -> Result<Response, Error> {
    let op = Operation::GetMyRank;
    Self::check(op, request)?;
    let path = paths::my_rank(&request.ranking_table_name, &request.game_mode);
    let req = self.request(Method::Get, op, path)
      .with_headers(request.headers());
    self.dispatch(req).await
  }

  /// Roughly where `score` would place, as a `min`/`max` pair.
  ///
  /// Resolution is about a thousand ranks. Near the top of the table
  /// that is too coarse to be useful, so follow up with
  /// [`get_ranking`](Self::get_ranking) to pin the position down.
  pub async fn get_estimate_rank(&self, request: &GetEstimateRankRequest) -> Result<Response, Error> {
    let op = Operation::GetEstimateRank;
    Self::check(op, request)?;
    let path = paths::estimate_rank(&request.ranking_table_name, &request.game_mode);
    let req = self.request(Method::Get, op, path)
      .with_query(request.query());
    self.dispatch(req).await
  }
}
