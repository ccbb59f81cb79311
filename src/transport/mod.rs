//! The boundary between [`RankingClient`](crate::RankingClient) and
//! whatever actually speaks HTTP.
//!
//! The client never opens a connection itself. It assembles a
//! [`TransportRequest`] and hands it to a [`Transport`], which is
//! responsible for resolving the host from the endpoint alias and
//! region, signing the request, sending it, and parsing the JSON
//! response. Retries, timeouts and TLS all live on that side of the
//! boundary.

mod recording;

pub use recording::RecordingTransport;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

/// Query string parameters, keyed by wire name.
pub type Query = BTreeMap<String, String>;

/// Extra HTTP headers, keyed by header name.
pub type Headers = BTreeMap<String, String>;

/// Something capable of performing a single request against the
/// ranking service.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn send(&self, request: TransportRequest) -> Result<Value, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
  Get,
  Post,
  Put,
  Delete,
}

/// A fully assembled request, ready to be sent.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
  pub method: Method,
  /// Service name, as used for request signing.
  pub service: &'static str,
  /// Operation name, as used for request signing.
  pub operation: &'static str,
  /// Endpoint alias used to resolve the host.
  pub endpoint: String,
  pub region: String,
  pub path: String,
  pub query: Query,
  pub body: Option<Value>,
  pub headers: Headers,
}

/// Opaque failure reported by a [`Transport`].
///
/// The client never inspects these. Network failures, non-2xx
/// statuses and malformed responses all arrive here in whatever form
/// the transport chose.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TransportError(Box<dyn StdError + Send + Sync>);

impl Method {
  pub fn as_str(self) -> &'static str {
    match self {
      Method::Get => "GET",
      Method::Post => "POST",
      Method::Put => "PUT",
      Method::Delete => "DELETE",
    }
  }
}

impl Display for Method {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl TransportRequest {
  fn new(
    method: Method,
    service: &'static str,
    operation: &'static str,
    endpoint: impl Into<String>,
    region: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self {
      method,
      service,
      operation,
      endpoint: endpoint.into(),
      region: region.into(),
      path: path.into(),
      query: Query::new(),
      body: None,
      headers: Headers::new(),
    }
  }

  pub fn get(
    service: &'static str,
    operation: &'static str,
    endpoint: impl Into<String>,
    region: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self::new(Method::Get, service, operation, endpoint, region, path)
  }

  pub fn post(
    service: &'static str,
    operation: &'static str,
    endpoint: impl Into<String>,
    region: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self::new(Method::Post, service, operation, endpoint, region, path)
  }

  pub fn put(
    service: &'static str,
    operation: &'static str,
    endpoint: impl Into<String>,
    region: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self::new(Method::Put, service, operation, endpoint, region, path)
  }

  pub fn delete(
    service: &'static str,
    operation: &'static str,
    endpoint: impl Into<String>,
    region: impl Into<String>,
    path: impl Into<String>,
  ) -> Self {
    Self::new(Method::Delete, service, operation, endpoint, region, path)
  }

  pub fn with_query(mut self, query: Query) -> Self {
    self.query = query;
    self
  }

  pub fn with_body(mut self, body: Value) -> Self {
    self.body = Some(body);
    self
  }

  pub fn with_headers(mut self, headers: Headers) -> Self {
    self.headers = headers;
    self
  }

  /// Looks up a header by name, ignoring ASCII case.
  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers
      .iter()
      .find(|(key, _)| key.eq_ignore_ascii_case(name))
      .map(|(_, value)| value.as_str())
  }
}

impl TransportError {
  pub fn new(err: impl Into<Box<dyn StdError + Send + Sync>>) -> Self {
    Self(err.into())
  }

  /// A transport error carrying only a message.
  pub fn msg(message: impl Display) -> Self {
    Self(message.to_string().into())
  }

  pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
    &*self.0
  }

  pub fn into_inner(self) -> Box<dyn StdError + Send + Sync> {
    self.0
  }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
  async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
    (**self).send(request).await
  }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
  async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
    (**self).send(request).await
  }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
  async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
    (**self).send(request).await
  }
}
