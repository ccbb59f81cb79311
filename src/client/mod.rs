//! The ranking service client.
//!
//! Operations are split by resource: ranking tables, game modes and
//! the rankings themselves. Every operation follows the same
//! shape: validate, build one [`TransportRequest`], send it, and
//! return the response untouched.

mod game_mode;
mod ranking;
mod ranking_table;

use crate::config::ClientConfig;
use crate::error::Error;
use crate::requests::Validate;
use crate::transport::{Method, Transport, TransportRequest};

use log::debug;
use serde_json::Value;

use std::fmt::{self, Display};

/// Service name sent with every request.
pub const SERVICE_NAME: &'static str = "Gs2Ranking";

/// Raw parsed response, as returned by the transport. See
/// [`models`](crate::models) for typed views.
pub type Response = Value;

/// Wire names of the service's operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
  DescribeRankingTable,
  CreateRankingTable,
  GetRankingTable,
  UpdateRankingTable,
  DeleteRankingTable,
  DescribeGameMode,
  CreateGameMode,
  GetGameMode,
  UpdateGameMode,
  DeleteGameMode,
  GetRanking,
  PutScore,
  GetMyRank,
  GetEstimateRank,
}

/// Client for the ranking service.
///
/// Holds nothing but its configuration and transport, so a single
/// client may be shared freely between tasks.
#[derive(Debug, Clone)]
pub struct RankingClient<T> {
  config: ClientConfig,
  transport: T,
}

impl Operation {
  pub fn name(self) -> &'static str {
    match self {
      Operation::DescribeRankingTable => "DescribeRankingTable",
      Operation::CreateRankingTable => "CreateRankingTable",
      Operation::GetRankingTable => "GetRankingTable",
      Operation::UpdateRankingTable => "UpdateRankingTable",
      Operation::DeleteRankingTable => "DeleteRankingTable",
      Operation::DescribeGameMode => "DescribeGameMode",
      Operation::CreateGameMode => "CreateGameMode",
      Operation::GetGameMode => "GetGameMode",
      Operation::UpdateGameMode => "UpdateGameMode",
      Operation::DeleteGameMode => "DeleteGameMode",
      Operation::GetRanking => "GetRanking",
      Operation::PutScore => "PutScore",
      Operation::GetMyRank => "GetMyRank",
      Operation::GetEstimateRank => "GetEstimateRank",
    }
  }
}

impl Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl<T: Transport> RankingClient<T> {
  pub fn new(config: ClientConfig, transport: T) -> Self {
    Self { config, transport }
  }

  pub fn config(&self) -> &ClientConfig {
    &self.config
  }

  pub fn transport(&self) -> &T {
    &self.transport
  }

  pub fn into_transport(self) -> T {
    self.transport
  }

  fn check(operation: Operation, request: &impl Validate) -> Result<(), Error> {
    request.validate().map_err(|err| {
      debug!("{SERVICE_NAME} {operation}: rejected locally, {} missing", err.field());
      Error::from(err)
    })
  }

  fn request(&self, method: Method, operation: Operation, path: String) -> TransportRequest {
    let (endpoint, region) = (self.config.endpoint.clone(), self.config.region.clone());
    match method {
      Method::Get => TransportRequest::get(SERVICE_NAME, operation.name(), endpoint, region, path),
      Method::Post => TransportRequest::post(SERVICE_NAME, operation.name(), endpoint, region, path),
      Method::Put => TransportRequest::put(SERVICE_NAME, operation.name(), endpoint, region, path),
      Method::Delete => TransportRequest::delete(SERVICE_NAME, operation.name(), endpoint, region, path),
    }
  }

  // Never log headers or bodies. They may carry access tokens.
  async fn dispatch(&self, request: TransportRequest) -> Result<Response, Error> {
    debug!("{} {}: {} {}", request.service, request.operation, request.method, request.path);
    let response = self.transport.send(request).await?;
    Ok(response)
  }
}
