//! Client configuration.

use crate::error::messages;

use serde::Deserialize;
use thiserror::Error;

use std::env::{self, VarError};
use std::fmt;

/// Endpoint alias used when none is configured.
pub const DEFAULT_ENDPOINT: &'static str = "ranking";

pub const REGION_VAR: &'static str = "RANKING_REGION";
pub const CLIENT_ID_VAR: &'static str = "RANKING_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &'static str = "RANKING_CLIENT_SECRET";
pub const ENDPOINT_VAR: &'static str = "RANKING_ENDPOINT";

/// Fixed configuration of a [`RankingClient`](crate::RankingClient).
///
/// The endpoint alias and region are forwarded with every request so
/// the transport can resolve the host. The credentials are not used
/// by the client itself; they are here so that a single config can
/// build both the client and its transport.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
  pub region: String,
  pub client_id: String,
  pub client_secret: String,
  #[serde(default = "default_endpoint")]
  pub endpoint: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
  #[error("{}: {}", messages::MISSING_ENV_VAR, .0)]
  MissingVar(&'static str),
  #[error("{}: {}", messages::NON_UNICODE_ENV_VAR, .0)]
  NotUnicode(&'static str),
}

fn default_endpoint() -> String {
  DEFAULT_ENDPOINT.to_owned()
}

impl ClientConfig {
  pub fn new(
    region: impl Into<String>,
    client_id: impl Into<String>,
    client_secret: impl Into<String>,
  ) -> Self {
    Self {
      region: region.into(),
      client_id: client_id.into(),
      client_secret: client_secret.into(),
      endpoint: default_endpoint(),
    }
  }

  /// Overrides the endpoint alias. Mostly useful for pointing a
  /// client at a staging deployment.
  pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
    self.endpoint = endpoint.into();
    self
  }

  /// Reads the configuration from `RANKING_REGION`,
  /// `RANKING_CLIENT_ID`, `RANKING_CLIENT_SECRET` and, optionally,
  /// `RANKING_ENDPOINT`.
  ///
  /// Unset and empty variables are both reported as
  /// [`ConfigError::MissingVar`]. A variable that is set but not valid
  /// unicode is reported as [`ConfigError::NotUnicode`].
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|name| env::var(name))
  }

  fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> Result<Self, ConfigError> {
    let optional = |name: &'static str| -> Result<Option<String>, ConfigError> {
      match lookup(name) {
        Ok(value) if !value.is_empty() => Ok(Some(value)),
        Ok(_) | Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name)),
      }
    };
    let require = |name: &'static str| -> Result<String, ConfigError> {
      optional(name)?.ok_or(ConfigError::MissingVar(name))
    };
    let config = ClientConfig::new(
      require(REGION_VAR)?,
      require(CLIENT_ID_VAR)?,
      require(CLIENT_SECRET_VAR)?,
    );
    Ok(match optional(ENDPOINT_VAR)? {
      Some(endpoint) => config.with_endpoint(endpoint),
      None => config,
    })
  }
}

impl fmt::Debug for ClientConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ClientConfig")
      .field("region", &self.region)
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .field("endpoint", &self.endpoint)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use std::collections::HashMap;
  use std::ffi::OsString;

  fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, VarError> {
    let vars: HashMap<String, String> = vars
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |name: &str| vars.get(name).cloned().ok_or(VarError::NotPresent)
  }

  #[test]
  fn endpoint_defaults_to_ranking() {
    let config = ClientConfig::new("ap-northeast-1", "id", "secret");
    assert_eq!(config.endpoint, "ranking");
    assert_eq!(config.with_endpoint("ranking-dev").endpoint, "ranking-dev");
  }

  #[test]
  fn deserializes_with_default_endpoint() {
    let config: ClientConfig = serde_json::from_str(
      r#"{ "region": "ap-northeast-1", "clientId": "id", "clientSecret": "secret" }"#,
    ).unwrap();
    assert_eq!(config, ClientConfig::new("ap-northeast-1", "id", "secret"));
  }

  #[test]
  fn debug_output_hides_secret() {
    let config = ClientConfig::new("ap-northeast-1", "id", "hunter2");
    let debug = format!("{:?}", config);
    assert!(!debug.contains("hunter2"));
    assert!(debug.contains("<redacted>"));
  }

  #[test]
  fn from_lookup_reads_all_vars() {
    let config = ClientConfig::from_lookup(lookup_in(&[
      (REGION_VAR, "us-east-1"),
      (CLIENT_ID_VAR, "id"),
      (CLIENT_SECRET_VAR, "secret"),
      (ENDPOINT_VAR, "ranking-dev"),
    ])).unwrap();
    assert_eq!(config, ClientConfig::new("us-east-1", "id", "secret").with_endpoint("ranking-dev"));
  }

  #[test]
  fn from_lookup_requires_credentials() {
    let err = ClientConfig::from_lookup(lookup_in(&[
      (REGION_VAR, "us-east-1"),
      (CLIENT_ID_VAR, "id"),
    ])).unwrap_err();
    assert_eq!(err, ConfigError::MissingVar(CLIENT_SECRET_VAR));
    assert_eq!(err.to_string(), "Missing environment variable: RANKING_CLIENT_SECRET");
  }

  #[test]
  fn non_unicode_var_is_not_reported_as_missing() {
    let lookup = |name: &str| {
      if name == CLIENT_ID_VAR {
        Err(VarError::NotUnicode(OsString::from("id")))
      } else {
        lookup_in(&[(REGION_VAR, "us-east-1"), (CLIENT_SECRET_VAR, "secret")])(name)
      }
    };
    let err = ClientConfig::from_lookup(lookup).unwrap_err();
    assert_eq!(err, ConfigError::NotUnicode(CLIENT_ID_VAR));
    assert_eq!(err.to_string(), "Environment variable is not valid unicode: RANKING_CLIENT_ID");
  }

  #[test]
  fn non_unicode_endpoint_var_is_an_error() {
    let lookup = |name: &str| {
      if name == ENDPOINT_VAR {
        Err(VarError::NotUnicode(OsString::from("ranking")))
      } else {
        lookup_in(&[(REGION_VAR, "us-east-1"), (CLIENT_ID_VAR, "id"), (CLIENT_SECRET_VAR, "secret")])(name)
      }
    };
    assert_eq!(ClientConfig::from_lookup(lookup).unwrap_err(), ConfigError::NotUnicode(ENDPOINT_VAR));
  }

  #[test]
  fn empty_endpoint_var_keeps_default() {
    let config = ClientConfig::from_lookup(lookup_in(&[
      (REGION_VAR, "us-east-1"),
      (CLIENT_ID_VAR, "id"),
      (CLIENT_SECRET_VAR, "secret"),
      (ENDPOINT_VAR, ""),
    ])).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
  }
}
