/* src/server/core/rust/src/server.rs */

use std::path::PathBuf;

use crate::config::Config;
use crate::errors::VeneerError;
use crate::files::{FileCache, ScriptTransform, identity_transform};
use crate::page::Page;
use crate::site::Site;
use crate::template::Template;
use crate::workspace::{check_workspace, load_definitions};

/// Collects configuration, templates and pages, then validates everything
/// in one pass. Adapter crates turn the resulting [`Site`] into a router.
pub struct VeneerServer {
  workspace: PathBuf,
  config: Config,
  templates: Vec<Template>,
  pages: Vec<Page>,
  load_definitions: bool,
  transform: ScriptTransform,
}

impl VeneerServer {
  pub fn new(workspace: impl Into<PathBuf>) -> Self {
    Self {
      workspace: workspace.into(),
      config: Config::default(),
      templates: Vec::new(),
      pages: Vec::new(),
      load_definitions: true,
      transform: identity_transform(),
    }
  }

  pub fn config(mut self, config: Config) -> Self {
    self.config = config;
    self
  }

  pub fn template(mut self, template: Template) -> Self {
    self.templates.push(template);
    self
  }

  pub fn page(mut self, page: Page) -> Self {
    self.pages.push(page);
    self
  }

  /// Whether `templates/*.toml` and `pages/*.toml` are read at build time (default: yes).
  pub fn load_workspace_definitions(mut self, enabled: bool) -> Self {
    self.load_definitions = enabled;
    self
  }

  pub fn script_transform(mut self, transform: ScriptTransform) -> Self {
    self.transform = transform;
    self
  }

  /// Validate and load the site. Any failure is a configuration error and
  /// nothing is served.
  pub fn build(self) -> Result<Site, VeneerError> {
    check_workspace(&self.workspace)?;
    self.config.validate()?;

    let mut templates = self.templates;
    let mut pages = self.pages;
    if self.load_definitions {
      let definitions = load_definitions(&self.workspace)?;
      templates.extend(definitions.templates);
      pages.extend(definitions.pages);
    }

    let files = FileCache::load(&self.workspace, &self.transform)?;
    let site = Site::new(self.config, self.workspace, templates, pages, files, self.transform)?;

    tracing::info!(
      workspace = %site.workspace().display(),
      templates = site.template_count(),
      pages = site.pages().len(),
      scripts = site.files().len(),
      "site loaded"
    );
    Ok(site)
  }
}
