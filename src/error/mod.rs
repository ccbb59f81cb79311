
pub mod messages;

use crate::transport::TransportError;

use thiserror::Error;

/// Error returned by every [`RankingClient`](crate::RankingClient)
/// operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  /// A required field was missing or empty. Raised before any request
  /// reaches the transport.
  #[error("{0}")]
  InvalidArgument(#[from] InvalidArgumentError),
  /// Whatever the transport reported, unchanged.
  #[error("{0}")]
  Transport(#[from] TransportError),
}

/// A required request field was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid argument: {field} {}", messages::REQUIRED_FIELD)]
pub struct InvalidArgumentError {
  field: &'static str,
}

impl InvalidArgumentError {
  pub(crate) fn new(field: &'static str) -> Self {
    Self { field }
  }

  /// Wire name of the offending field, such as `rankingTableName`.
  pub fn field(&self) -> &'static str {
    self.field
  }
}

impl Error {
  pub fn is_invalid_argument(&self) -> bool {
    matches!(self, Error::InvalidArgument(_))
  }

  /// The offending field, if this is an
  /// [`InvalidArgument`](Error::InvalidArgument) error.
  pub fn invalid_field(&self) -> Option<&'static str> {
    match self {
      Error::InvalidArgument(err) => Some(err.field()),
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_argument_names_the_field() {
    let err = Error::from(InvalidArgumentError::new("gameMode"));
    assert!(err.is_invalid_argument());
    assert_eq!(err.invalid_field(), Some("gameMode"));
    assert_eq!(err.to_string(), "Invalid argument: gameMode is required");
  }

  #[test]
  fn transport_errors_pass_through() {
    let err = Error::from(TransportError::msg("connection reset"));
    assert!(!err.is_invalid_argument());
    assert_eq!(err.invalid_field(), None);
    assert_eq!(err.to_string(), "connection reset");
  }
}
