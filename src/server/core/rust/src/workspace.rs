/* src/server/core/rust/src/workspace.rs */

//! Workspace layout checks and declarative template/page definitions.
//!
//! Each `templates/*.toml` file describes one template and each
//! `pages/*.toml` file one page. Markup is given inline (`head`, `body`) or
//! read from a file next to the definition (`head_file`, `body_file`).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use crate::errors::VeneerError;
use crate::fragment::Fragment;
use crate::page::{DEFAULT_FAVICON, Page};
use crate::template::Template;

pub const REQUIRED_DIRECTORIES: [&str; 5] = ["templates", "scripts", "styles", "assets", "pages"];

/// Fail unless `root` exists and holds every required directory.
pub fn check_workspace(root: &Path) -> Result<(), VeneerError> {
  if !root.is_dir() {
    return Err(VeneerError::config(format!(
      "The specified workspace '{}' does not exist.",
      root.display()
    )));
  }
  for directory in REQUIRED_DIRECTORIES {
    if !root.join(directory).is_dir() {
      return Err(VeneerError::config(format!("The directory named '{directory}' does not exist.")));
    }
  }
  Ok(())
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TemplateFile {
  name: String,
  #[serde(default)]
  styles: Vec<String>,
  #[serde(default)]
  scripts: Vec<String>,
  head: Option<String>,
  head_file: Option<String>,
  body: Option<String>,
  body_file: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PageFile {
  url: String,
  template: String,
  #[serde(default)]
  title: String,
  #[serde(default = "default_favicon")]
  favicon: String,
  #[serde(default)]
  styles: Vec<String>,
  #[serde(default)]
  scripts: Vec<String>,
  head: Option<String>,
  head_file: Option<String>,
  body: Option<String>,
  body_file: Option<String>,
}

fn default_favicon() -> String {
  DEFAULT_FAVICON.to_string()
}

/// Templates and pages read from a workspace.
#[derive(Debug, Default)]
pub struct Definitions {
  pub templates: Vec<Template>,
  pub pages: Vec<Page>,
}

pub fn load_definitions(root: &Path) -> Result<Definitions, VeneerError> {
  let mut definitions = Definitions::default();

  for path in definition_files(&root.join("templates"))? {
    let file: TemplateFile = parse(&path)?;
    let base = path.parent().unwrap_or(root);
    let mut template = Template::new(file.name);
    template.styles = file.styles;
    template.scripts = file.scripts;
    template.head = markup(base, &path, "head", file.head, file.head_file)?;
    template.body = markup(base, &path, "body", file.body, file.body_file)?;
    definitions.templates.push(template);
  }

  for path in definition_files(&root.join("pages"))? {
    let file: PageFile = parse(&path)?;
    let base = path.parent().unwrap_or(root);
    let mut page = Page::new(file.url, file.template).title(file.title).favicon(file.favicon);
    page.styles = file.styles;
    page.scripts = file.scripts;
    page.head = markup(base, &path, "head", file.head, file.head_file)?;
    page.body = markup(base, &path, "body", file.body, file.body_file)?;
    definitions.pages.push(page);
  }

  Ok(definitions)
}

/// `*.toml` files under `dir`, recursively, in a stable order.
fn definition_files(dir: &Path) -> Result<Vec<PathBuf>, VeneerError> {
  let mut files = Vec::new();
  for entry in WalkDir::new(dir).sort_by_file_name() {
    let entry = entry
      .map_err(|e| VeneerError::config(format!("failed to walk {}: {e}", dir.display())))?;
    let path = entry.path();
    if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "toml") {
      files.push(path.to_path_buf());
    }
  }
  Ok(files)
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, VeneerError> {
  let content = std::fs::read_to_string(path)
    .map_err(|e| VeneerError::config(format!("failed to read {}: {e}", path.display())))?;
  toml::from_str(&content)
    .map_err(|e| VeneerError::config(format!("failed to parse {}: {e}", path.display())))
}

fn markup(
  base: &Path,
  definition: &Path,
  field: &str,
  inline: Option<String>,
  file: Option<String>,
) -> Result<Fragment, VeneerError> {
  match (inline, file) {
    (Some(_), Some(_)) => Err(VeneerError::config(format!(
      "{}: '{field}' and '{field}_file' are mutually exclusive",
      definition.display()
    ))),
    (Some(markup), None) => Ok(Fragment::Static(markup)),
    (None, Some(file)) => {
      let path = base.join(file);
      std::fs::read_to_string(&path)
        .map(Fragment::Static)
        .map_err(|e| VeneerError::config(format!("failed to read {}: {e}", path.display())))
    }
    (None, None) => Ok(Fragment::default()),
  }
}

#[cfg(test)]
mod tests;
