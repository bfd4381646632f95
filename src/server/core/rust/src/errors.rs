/* src/server/core/rust/src/errors.rs */

use std::fmt;

#[derive(Debug, Clone)]
pub struct VeneerError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "BAD_REQUEST" => 400,
    "NOT_FOUND" => 404,
    "METHOD_NOT_ALLOWED" => 405,
    "CONFIG_ERROR" => 500,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl VeneerError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  /// Invalid workspace, configuration or definitions. Fatal at startup.
  pub fn config(msg: impl Into<String>) -> Self {
    Self::with_code("CONFIG_ERROR", msg)
  }

  pub fn bad_request(msg: impl Into<String>) -> Self {
    Self::with_code("BAD_REQUEST", msg)
  }

  pub fn not_found(msg: impl Into<String>) -> Self {
    Self::with_code("NOT_FOUND", msg)
  }

  pub fn method_not_allowed(msg: impl Into<String>) -> Self {
    Self::with_code("METHOD_NOT_ALLOWED", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_config(&self) -> bool {
    self.code == "CONFIG_ERROR"
  }
}

impl fmt::Display for VeneerError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for VeneerError {}
