//! Common error messages, as constants to be reused by the client and
//! its transports.

pub const REQUIRED_FIELD: &'static str = "is required";
pub const MISSING_ENV_VAR: &'static str = "Missing environment variable";
pub const NON_UNICODE_ENV_VAR: &'static str = "Environment variable is not valid unicode";
