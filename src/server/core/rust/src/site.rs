/* src/server/core/rust/src/site.rs */

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use veneer_engine::{CLIENT_PATH, MountAnchor, is_static_path, is_valid_url};

use crate::config::Config;
use crate::errors::VeneerError;
use crate::files::{FileCache, ScriptTransform};
use crate::fragment::Fragment;
use crate::page::Page;
use crate::template::Template;

/// A validated, immutable site: everything an adapter needs to serve requests.
/// Built by [`crate::VeneerServer::build`]; shared behind `Arc` by adapters.
pub struct Site {
  config: Config,
  workspace: PathBuf,
  mount: MountAnchor,
  templates: HashMap<String, Arc<Template>>,
  pages: Vec<Arc<Page>>,
  files: FileCache,
  transform: ScriptTransform,
}

impl Site {
  pub(crate) fn new(
    config: Config,
    workspace: PathBuf,
    templates: Vec<Template>,
    pages: Vec<Page>,
    files: FileCache,
    transform: ScriptTransform,
  ) -> Result<Self, VeneerError> {
    let mount = MountAnchor::new(&config.mount_id);

    let mut by_name = HashMap::with_capacity(templates.len());
    for template in templates {
      if !has_mount(&mount, &template.body) {
        return Err(VeneerError::config(format!(
          "The template '{}' has no element with id=\"{}\".",
          template.name,
          mount.id()
        )));
      }
      let name = template.name.clone();
      if by_name.insert(name.clone(), Arc::new(template)).is_some() {
        return Err(VeneerError::config(format!("The template '{name}' is defined twice.")));
      }
    }

    let mut urls = HashSet::with_capacity(pages.len());
    for page in &pages {
      validate_page(page, &by_name)?;
      if !urls.insert(page.url.as_str()) {
        return Err(VeneerError::config(format!("The page '{}' is defined twice.", page.url)));
      }
    }
    if !urls.contains(config.redirect_404.as_str()) {
      return Err(VeneerError::config("The 404 page does not exist."));
    }

    Ok(Self {
      config,
      workspace,
      mount,
      templates: by_name,
      pages: pages.into_iter().map(Arc::new).collect(),
      files,
      transform,
    })
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn workspace(&self) -> &Path {
    &self.workspace
  }

  pub fn mount(&self) -> &MountAnchor {
    &self.mount
  }

  pub fn pages(&self) -> &[Arc<Page>] {
    &self.pages
  }

  pub fn files(&self) -> &FileCache {
    &self.files
  }

  pub fn transform(&self) -> &ScriptTransform {
    &self.transform
  }

  pub fn template(&self, name: &str) -> Option<&Arc<Template>> {
    self.templates.get(name)
  }

  pub fn template_count(&self) -> usize {
    self.templates.len()
  }

  /// Template a page renders inside. Startup validation guarantees it exists,
  /// so a miss here is an internal error.
  pub fn template_for(&self, page: &Page) -> Result<&Arc<Template>, VeneerError> {
    self.template(&page.template).ok_or_else(|| {
      VeneerError::internal(format!(
        "The template '{}' of page '{}' is not loaded.",
        page.template, page.url
      ))
    })
  }
}

impl std::fmt::Debug for Site {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Site")
      .field("config", &self.config)
      .field("workspace", &self.workspace)
      .field("templates", &self.templates.len())
      .field("pages", &self.pages.len())
      .field("scripts", &self.files.len())
      .finish_non_exhaustive()
  }
}

fn validate_page(page: &Page, templates: &HashMap<String, Arc<Template>>) -> Result<(), VeneerError> {
  if !is_valid_url(&page.url) {
    return Err(VeneerError::config(format!(
      "Invalid page url '{}'. Expected '/' or '/segment[/segment...]'.",
      page.url
    )));
  }
  if page.url.split('/').any(is_route_syntax) {
    return Err(VeneerError::config(format!(
      "Invalid page url '{}'. Segments must not start with ':' or '*' or contain braces.",
      page.url
    )));
  }
  if is_static_path(&page.url) {
    return Err(VeneerError::config(format!(
      "The page '{}' collides with a reserved static prefix.",
      page.url
    )));
  }
  if page.url == CLIENT_PATH {
    return Err(VeneerError::config(format!("The page '{CLIENT_PATH}' is reserved for the client engine.")));
  }
  if !templates.contains_key(&page.template) {
    return Err(VeneerError::config(format!("The template '{}' does not exist.", page.template)));
  }
  Ok(())
}

/// Router capture syntax. Page urls are literal paths.
fn is_route_syntax(segment: &str) -> bool {
  segment.starts_with([':', '*']) || segment.contains(['{', '}'])
}

/// Dynamic bodies can only be checked per request.
fn has_mount(mount: &MountAnchor, body: &Fragment) -> bool {
  body.as_static().is_none_or(|markup| mount.is_present(markup))
}

#[cfg(test)]
mod tests;
