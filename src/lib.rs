//! Client binding for a hosted leaderboard and ranking service.
//!
//! Each method on [`RankingClient`] corresponds to exactly one REST
//! endpoint. The client checks required fields, builds the path,
//! query, body and headers, and hands the result to a [`Transport`].
//! Ranking aggregation happens on the service, on a per-mode
//! schedule; nothing is computed or cached locally.
//!
//! ```
//! use ranking_client::{ClientConfig, RankingClient};
//! use ranking_client::requests::CreateGameModeRequest;
//! use ranking_client::transport::RecordingTransport;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let config = ClientConfig::new("ap-northeast-1", "client-id", "client-secret");
//! let client = RankingClient::new(config, RecordingTransport::new());
//!
//! let request = CreateGameModeRequest::new("weekly")
//!   .with_game_mode("Speed")
//!   .with_asc(true)
//!   .with_calc_interval(15);
//! client.create_game_mode(&request).await.unwrap();
//!
//! let sent = client.transport().last_request().unwrap();
//! assert_eq!(sent.path, "/ranking/weekly/mode");
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod paths;
pub mod requests;
pub mod transport;

pub use client::{RankingClient, Response, Operation};
pub use config::ClientConfig;
pub use error::{Error, InvalidArgumentError};
pub use transport::{Transport, TransportError, TransportRequest};
