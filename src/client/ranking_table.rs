
use super::{RankingClient, Operation, Response};
use crate::error::Error;
use crate::paths;
use crate::requests::{
  ListRankingTablesRequest, CreateRankingTableRequest, GetRankingTableRequest,
  UpdateRankingTableRequest, DeleteRankingTableRequest,
};
use crate::transport::{Method, Transport};

impl<T: Transport> RankingClient<T> {
  /// Lists the caller's ranking tables, one page at a time.
  ///
  /// Responds with `items` and, if more remain, `nextPageToken`.
  pub async fn list_ranking_tables(&self, request: &ListRankingTablesRequest) -> Result<Response, Error> {
    let op = Operation::DescribeRankingTable;
    Self::check(op, request)?;
    let req = self.request(Method::Get, op, paths::RANKING_TABLES.to_owned())
      .with_query(request.query());
    self.dispatch(req).await
  }

  /// Creates a ranking table. A table must exist before any game mode
  /// can be added to it.
  pub async fn create_ranking_table(&self, request: &CreateRankingTableRequest) -> Result<Response, Error> {
    let op = Operation::CreateRankingTable;
    Self::check(op, request)?;
    let req = self.request(Method::Post, op, paths::RANKING_TABLES.to_owned())
      .with_body(request.body());
    self.dispatch(req).await
  }

  pub async fn get_ranking_table(&self, request: &GetRankingTableRequest) -> Result<Response, Error> {
    let op = Operation::GetRankingTable;
    Self::check(op, request)?;
    let req = self.request(Method::Get, op, paths::ranking_table(&request.ranking_table_name));
    self.dispatch(req).await
  }

  pub async fn update_ranking_table(&self, request: &UpdateRankingTableRequest) -> Result<Response, Error> {
    let op = Operation::UpdateRankingTable;
    Self::check(op, request)?;
    let req = self.request(Method::Put, op, paths::ranking_table(&request.ranking_table_name))
      .with_body(request.body());
    self.dispatch(req).await
  }

  pub async fn delete_ranking_table(&self, request: &DeleteRankingTableRequest) -> Result<Response, Error> {
    let op = Operation::DeleteRankingTable;
    Self::check(op, request)?;
    let req = self.request(Method::Delete, op, paths::ranking_table(&request.ranking_table_name));
    self.dispatch(req).await
  }
}
