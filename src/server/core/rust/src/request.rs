/* src/server/core/rust/src/request.rs */

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
  Get,
  Post,
}

/// Framework-agnostic view of an incoming page request, handed to request
/// hooks and dynamic fragments. Adapters build it from their own request type.
#[derive(Debug, Clone)]
pub struct RequestCtx {
  pub method: RequestMethod,
  /// Path plus query string, as received.
  pub url: String,
  /// Header names are stored lowercase.
  pub headers: HashMap<String, String>,
  /// Parsed JSON body, if any.
  pub body: Option<serde_json::Value>,
}

impl RequestCtx {
  pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
    Self { method, url: url.into(), headers: HashMap::new(), body: None }
  }

  pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
    self.headers.insert(name.to_ascii_lowercase(), value.into());
    self
  }

  pub fn with_body(mut self, body: serde_json::Value) -> Self {
    self.body = Some(body);
    self
  }

  pub fn path(&self) -> &str {
    self.url.split_once('?').map_or(self.url.as_str(), |(path, _)| path)
  }

  pub fn query(&self) -> Option<&str> {
    self.url.split_once('?').map(|(_, query)| query)
  }

  /// Value of the first `key=value` pair named `key` in the query string.
  pub fn query_param(&self, key: &str) -> Option<&str> {
    self
      .query()?
      .split('&')
      .filter_map(|pair| pair.split_once('='))
      .find_map(|(k, v)| (k == key).then_some(v))
  }

  pub fn header(&self, name: &str) -> Option<&str> {
    self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
  }

  pub fn cookie(&self, name: &str) -> Option<&str> {
    self
      .header("cookie")?
      .split(';')
      .filter_map(|pair| pair.trim().split_once('='))
      .find_map(|(k, v)| (k == name).then_some(v))
  }
}
