/* src/server/core/rust/src/config.rs */

use std::collections::BTreeMap;

use veneer_engine::{DEFAULT_MOUNT_ID, is_valid_url};

use crate::errors::VeneerError;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LANG: &str = "fr";
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 10_000;

/// Runtime site configuration. Validated once, before anything is loaded.
#[derive(Debug, Clone)]
pub struct Config {
  pub port: u16,
  /// Value of `<html lang="...">`.
  pub lang: String,
  /// Unmatched request path -> redirect target.
  pub alias: BTreeMap<String, String>,
  /// Where unknown routes outside the static prefixes are redirected.
  pub redirect_404: String,
  /// `id` of the template element that receives page bodies.
  pub mount_id: String,
  /// Client-side deadline for navigation fetches and asset loads. `None` waits forever.
  pub navigation_timeout_ms: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      port: DEFAULT_PORT,
      lang: DEFAULT_LANG.to_string(),
      alias: default_alias(),
      redirect_404: "/".to_string(),
      mount_id: DEFAULT_MOUNT_ID.to_string(),
      navigation_timeout_ms: Some(DEFAULT_NAVIGATION_TIMEOUT_MS),
    }
  }
}

pub fn default_alias() -> BTreeMap<String, String> {
  BTreeMap::from([
    ("/favicon.ico".to_string(), "/assets/favicon.ico".to_string()),
    ("/robots.txt".to_string(), "/assets/robots.txt".to_string()),
  ])
}

impl Config {
  pub fn validate(&self) -> Result<(), VeneerError> {
    if !is_valid_url(&self.redirect_404) {
      return Err(VeneerError::config(format!(
        "Invalid redirect 404 url '{}'. Expected '/' or '/segment[/segment...]'.",
        self.redirect_404
      )));
    }
    for (from, to) in &self.alias {
      if !is_valid_url(from) || !is_valid_url(to) {
        return Err(VeneerError::config(format!(
          "Invalid alias '{from}' -> '{to}'. Expected '/' or '/segment[/segment...]'."
        )));
      }
    }
    if self.mount_id.is_empty() {
      return Err(VeneerError::config("The mount id must not be empty."));
    }
    Ok(())
  }
}
