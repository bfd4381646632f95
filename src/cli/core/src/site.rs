/* src/cli/core/src/site.rs */

use anyhow::{Context, Result};
use veneer_server::{Site, VeneerServer};

use crate::config::Settings;

/// Load and validate the workspace described by `settings`.
pub fn build_site(settings: &Settings) -> Result<Site> {
  VeneerServer::new(&settings.workspace)
    .config(settings.config.clone())
    .build()
    .with_context(|| format!("failed to load workspace {}", settings.workspace.display()))
}
