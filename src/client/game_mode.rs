
use super::{RankingClient, Operation, Response};
use crate::error::Error;
use crate::paths;
use crate::requests::{
  ListGameModesRequest, CreateGameModeRequest, GetGameModeRequest,
  UpdateGameModeRequest, DeleteGameModeRequest,
};
use crate::transport::{Method, Transport};

impl<T: Transport> RankingClient<T> {
  pub async fn list_game_modes(&self, request: &ListGameModesRequest) -> Result<Response, Error> {
    let op = Operation::DescribeGameMode;
    Self::check(op, request)?;
    let req = self.request(Method::Get, op, paths::game_modes(&request.ranking_table_name))
      .with_query(request.query());
    self.dispatch(req).await
  }

  /// Adds a game mode to a ranking table.
  ///
  /// The mode fixes the sort direction (ascending for time-attack
  /// style games, descending for high scores) and the aggregation
  /// interval, which the service accepts between 15 minutes and 24
  /// hours. Each aggregation is billed, so shorter intervals cost
  /// more.
  pub async fn create_game_mode(&self, request: &CreateGameModeRequest) -> Result<Response, Error> {
    let op = Operation::CreateGameMode;
    Self::check(op, request)?;
    let req = self.request(Method::Post, op, paths::game_modes(&request.ranking_table_name))
      .with_body(request.body());
    self.dispatch(req).await
  }

  pub async fn get_game_mode(&self, request: &GetGameModeRequest) -> Result<Response, Error> {
    let op = Operation::GetGameMode;
    Self::check(op, request)?;
    let path = paths::game_mode(&request.ranking_table_name, &request.game_mode);
    self.dispatch(self.request(Method::Get, op, path)).await
  }

  /// Changes a game mode's aggregation interval. The sort direction
  /// cannot be changed after creation.
  pub async fn update_game_mode(&self, request: &UpdateGameModeRequest) -> Result<Response, Error> {
    let op = Operation::UpdateGameMode;
    Self::check(op, request)?;
    let path = paths::game_mode(&request.ranking_table_name, &request.game_mode);
    let req = self.request(Method::Put, op, path)
      .with_body(request.body());
    self.dispatch(req).await
  }

  pub async fn delete_game_mode(&self, request: &DeleteGameModeRequest) -> Result<Response, Error> {
    let op = Operation::DeleteGameMode;
    Self::check(op, request)?;
    let path = paths::game_mode(&request.ranking_table_name, &request.game_mode);
    self.dispatch(self.request(Method::Delete, op, path)).await
  }
}
