/* src/cli/core/src/config/settings.rs */

use std::path::{Path, PathBuf};

use anyhow::Result;
use veneer_server::Config;

use super::{VeneerToml, find_veneer_config, load_veneer_config};

/// Command-line values that take precedence over `veneer.toml`.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
  /// Relative to the current directory.
  pub workspace: Option<PathBuf>,
  pub port: Option<u16>,
  pub lang: Option<String>,
  pub redirect_404: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Settings {
  /// `veneer.toml` in use, if any.
  pub source: Option<PathBuf>,
  pub workspace: PathBuf,
  pub config: Config,
}

/// Merge defaults, the config file (explicit or discovered upward from `cwd`)
/// and command-line overrides, in that order.
pub fn resolve_settings(explicit: Option<&Path>, cwd: &Path, overrides: &Overrides) -> Result<Settings> {
  let source = match explicit {
    Some(path) => Some(path.to_path_buf()),
    None => find_veneer_config(cwd)?,
  };
  let (file, base_dir) = match &source {
    Some(path) => {
      let base_dir = path.parent().map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
      (load_veneer_config(path)?, base_dir)
    }
    None => (VeneerToml::default(), cwd.to_path_buf()),
  };

  let mut workspace = file.workspace_dir(&base_dir);
  let mut config = file.to_config();
  if let Some(dir) = &overrides.workspace {
    workspace = cwd.join(dir);
  }
  if let Some(port) = overrides.port {
    config.port = port;
  }
  if let Some(lang) = &overrides.lang {
    config.lang = lang.clone();
  }
  if let Some(target) = &overrides.redirect_404 {
    config.redirect_404 = target.clone();
  }

  Ok(Settings { source, workspace, config })
}
