/* src/cli/core/src/config/types.rs */

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use veneer_server::{
  Config, DEFAULT_LANG, DEFAULT_NAVIGATION_TIMEOUT_MS, DEFAULT_PORT, default_alias,
};

/// Contents of `veneer.toml`. Every section and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VeneerToml {
  #[serde(default)]
  pub site: SiteSection,
  /// Replaces the default aliases when present.
  #[serde(default)]
  pub alias: Option<BTreeMap<String, String>>,
  #[serde(default)]
  pub client: ClientSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteSection {
  /// Relative to the directory holding `veneer.toml`.
  #[serde(default = "default_workspace")]
  pub workspace: String,
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default = "default_lang")]
  pub lang: String,
  #[serde(default = "default_redirect_404")]
  pub redirect_404: String,
  #[serde(default = "default_mount_id")]
  pub mount_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientSection {
  /// `0` disables the deadline.
  #[serde(default = "default_timeout")]
  pub navigation_timeout_ms: u64,
}

fn default_workspace() -> String {
  ".".to_string()
}

fn default_port() -> u16 {
  DEFAULT_PORT
}

fn default_lang() -> String {
  DEFAULT_LANG.to_string()
}

fn default_redirect_404() -> String {
  "/".to_string()
}

fn default_mount_id() -> String {
  Config::default().mount_id
}

fn default_timeout() -> u64 {
  DEFAULT_NAVIGATION_TIMEOUT_MS
}

impl Default for SiteSection {
  fn default() -> Self {
    Self {
      workspace: default_workspace(),
      port: default_port(),
      lang: default_lang(),
      redirect_404: default_redirect_404(),
      mount_id: default_mount_id(),
    }
  }
}

impl Default for ClientSection {
  fn default() -> Self {
    Self { navigation_timeout_ms: default_timeout() }
  }
}

impl VeneerToml {
  /// Workspace directory, resolved against `base_dir`.
  pub fn workspace_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.site.workspace)
  }

  /// Runtime configuration for the server core.
  pub fn to_config(&self) -> Config {
    let timeout = self.client.navigation_timeout_ms;
    Config {
      port: self.site.port,
      lang: self.site.lang.clone(),
      alias: self.alias.clone().unwrap_or_else(default_alias),
      redirect_404: self.site.redirect_404.clone(),
      mount_id: self.site.mount_id.clone(),
      navigation_timeout_ms: (timeout > 0).then_some(timeout),
    }
  }
}
