/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::VeneerToml;

pub const CONFIG_FILE: &str = "veneer.toml";

/// Walk upward from `start` to find `veneer.toml`, like Cargo.toml discovery
pub fn find_veneer_config(start: &Path) -> Result<Option<PathBuf>> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(Some(candidate));
    }
    if !dir.pop() {
      return Ok(None);
    }
  }
}

pub fn load_veneer_config(path: &Path) -> Result<VeneerToml> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
