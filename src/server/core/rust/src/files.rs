/* src/server/core/rust/src/files.rs */

//! Script cache and static file lookup for the `/styles`, `/scripts` and
//! `/assets` prefixes.

use std::collections::HashMap;
use std::path::{Component, Path};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::errors::VeneerError;

pub const JAVASCRIPT_MIME: &str = "application/javascript";

/// Source-to-browser transform applied to every workspace script at startup.
/// Receives the source text and the file path (for loader selection).
pub type ScriptTransform = Arc<dyn Fn(&str, &Path) -> Result<String, VeneerError> + Send + Sync>;

/// Passes sources through unchanged.
pub fn identity_transform() -> ScriptTransform {
  Arc::new(|source: &str, _path: &Path| Ok(source.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedFile {
  pub content: Vec<u8>,
  pub mime_type: String,
}

/// Transformed scripts keyed by URL path, e.g. `/scripts/app/index.js`.
#[derive(Debug, Default)]
pub struct FileCache {
  entries: HashMap<String, CachedFile>,
}

impl FileCache {
  /// Read and transform every `.js`/`.ts` file under `<root>/scripts`.
  pub fn load(root: &Path, transform: &ScriptTransform) -> Result<Self, VeneerError> {
    let scripts = root.join("scripts");
    let mut entries = HashMap::new();

    for entry in WalkDir::new(&scripts).sort_by_file_name() {
      let entry = entry
        .map_err(|e| VeneerError::config(format!("failed to walk {}: {e}", scripts.display())))?;
      let path = entry.path();
      let is_script = path.extension().is_some_and(|ext| ext == "js" || ext == "ts");
      if !entry.file_type().is_file() || !is_script {
        continue;
      }

      let source = std::fs::read_to_string(path)
        .map_err(|e| VeneerError::config(format!("failed to read {}: {e}", path.display())))?;
      let content = transform(&source, path)?;
      let key = url_key(root, path)?;
      tracing::debug!(script = %key, "cached script");
      entries.insert(key, CachedFile { content: content.into_bytes(), mime_type: JAVASCRIPT_MIME.into() });
    }

    Ok(Self { entries })
  }

  pub fn get(&self, path: &str) -> Option<&CachedFile> {
    self.entries.get(path)
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Cached entry for `path`, else the workspace file at `<root><path>`.
  /// Paths with `..` segments resolve to nothing.
  pub async fn serve(&self, root: &Path, path: &str) -> Option<CachedFile> {
    if let Some(cached) = self.get(path) {
      return Some(cached.clone());
    }
    let relative = Path::new(path.trim_start_matches('/'));
    if relative.components().any(|c| !matches!(c, Component::Normal(_))) {
      return None;
    }
    let full = root.join(relative);
    let meta = tokio::fs::metadata(&full).await.ok()?;
    if !meta.is_file() {
      return None;
    }
    let content = tokio::fs::read(&full).await.ok()?;
    let mime_type = mime_guess::from_path(&full).first_or_octet_stream().to_string();
    Some(CachedFile { content, mime_type })
  }
}

fn url_key(root: &Path, path: &Path) -> Result<String, VeneerError> {
  let relative = path
    .strip_prefix(root)
    .map_err(|_| VeneerError::internal(format!("{} is outside the workspace", path.display())))?;
  let segments: Vec<_> = relative.components().map(|c| c.as_os_str().to_string_lossy()).collect();
  Ok(format!("/{}", segments.join("/")))
}
