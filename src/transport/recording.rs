
use super::{Transport, TransportError, TransportRequest};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::{Map, Value};

use std::collections::VecDeque;

/// In-memory [`Transport`] which records every request it is given
/// and answers from a queue of canned outcomes.
///
/// When the queue is empty, requests are answered with an empty JSON
/// object.
#[derive(Debug, Default)]
pub struct RecordingTransport {
  requests: Mutex<Vec<TransportRequest>>,
  outcomes: Mutex<VecDeque<Outcome>>,
}

#[derive(Debug)]
enum Outcome {
  Respond(Value),
  Fail(String),
}

impl RecordingTransport {
  pub fn new() -> Self {
    Self::default()
  }

  /// Queues a response for a future request.
  pub fn respond_with(&self, response: Value) -> &Self {
    self.outcomes.lock().push_back(Outcome::Respond(response));
    self
  }

  /// Queues a failure for a future request.
  pub fn fail_with(&self, message: impl Into<String>) -> &Self {
    self.outcomes.lock().push_back(Outcome::Fail(message.into()));
    self
  }

  /// All requests seen so far, oldest first.
  pub fn requests(&self) -> Vec<TransportRequest> {
    self.requests.lock().clone()
  }

  pub fn last_request(&self) -> Option<TransportRequest> {
    self.requests.lock().last().cloned()
  }

  pub fn request_count(&self) -> usize {
    self.requests.lock().len()
  }
}

#[async_trait]
impl Transport for RecordingTransport {
  async fn send(&self, request: TransportRequest) -> Result<Value, TransportError> {
    self.requests.lock().push(request);
    match self.outcomes.lock().pop_front() {
      None => Ok(Value::Object(Map::new())),
      Some(Outcome::Respond(value)) => Ok(value),
      Some(Outcome::Fail(message)) => Err(TransportError::msg(message)),
    }
  }
}
