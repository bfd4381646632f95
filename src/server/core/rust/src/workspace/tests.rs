/* src/server/core/rust/src/workspace/tests.rs */

use std::fs;

use super::*;

fn scaffold() -> tempfile::TempDir {
  let dir = tempfile::tempdir().unwrap();
  for sub in REQUIRED_DIRECTORIES {
    fs::create_dir_all(dir.path().join(sub)).unwrap();
  }
  dir
}

#[test]
fn complete_workspace_passes() {
  let dir = scaffold();
  assert!(check_workspace(dir.path()).is_ok());
}

#[test]
fn missing_workspace_fails() {
  let dir = scaffold();
  let err = check_workspace(&dir.path().join("nope")).unwrap_err();
  assert!(err.is_config());
  assert!(err.message().contains("does not exist"));
}

#[test]
fn missing_assets_directory_fails() {
  let dir = scaffold();
  fs::remove_dir(dir.path().join("assets")).unwrap();
  let err = check_workspace(dir.path()).unwrap_err();
  assert_eq!(err.message(), "The directory named 'assets' does not exist.");
}

#[test]
fn loads_inline_and_file_markup() {
  let dir = scaffold();
  fs::write(
    dir.path().join("templates/app.toml"),
    r#"
name = "app"
styles = ["/styles/reset.css", "/styles/app.css"]
body_file = "app.html"
"#,
  )
  .unwrap();
  fs::write(dir.path().join("templates/app.html"), r#"<h1>Site</h1><div id="app"></div>"#).unwrap();
  fs::write(
    dir.path().join("pages/index.toml"),
    r#"
url = "/"
template = "app"
title = "Index"
styles = ["/styles/app/index.css"]
body = "<p>Index</p>"
"#,
  )
  .unwrap();

  let defs = load_definitions(dir.path()).unwrap();
  assert_eq!(defs.templates.len(), 1);
  let template = &defs.templates[0];
  assert_eq!(template.name, "app");
  assert_eq!(template.styles, vec!["/styles/reset.css", "/styles/app.css"]);
  assert_eq!(template.body.as_static(), Some(r#"<h1>Site</h1><div id="app"></div>"#));
  assert_eq!(template.head.as_static(), Some(""));

  let page = &defs.pages[0];
  assert_eq!(page.url, "/");
  assert_eq!(page.title, "Index");
  assert_eq!(page.favicon, "/favicon.ico");
  assert_eq!(page.body.as_static(), Some("<p>Index</p>"));
}

#[test]
fn pages_load_in_file_name_order() {
  let dir = scaffold();
  for (file, url) in [("b.toml", "/b"), ("a.toml", "/a"), ("c.toml", "/c")] {
    fs::write(dir.path().join("pages").join(file), format!("url = \"{url}\"\ntemplate = \"app\"\n"))
      .unwrap();
  }
  let urls: Vec<_> = load_definitions(dir.path()).unwrap().pages.into_iter().map(|p| p.url).collect();
  assert_eq!(urls, vec!["/a", "/b", "/c"]);
}

#[test]
fn non_toml_files_are_ignored() {
  let dir = scaffold();
  fs::write(dir.path().join("pages/notes.md"), "# scratch").unwrap();
  assert!(load_definitions(dir.path()).unwrap().pages.is_empty());
}

#[test]
fn inline_and_file_together_is_an_error() {
  let dir = scaffold();
  fs::write(
    dir.path().join("pages/x.toml"),
    "url = \"/x\"\ntemplate = \"app\"\nbody = \"<p/>\"\nbody_file = \"x.html\"\n",
  )
  .unwrap();
  let err = load_definitions(dir.path()).unwrap_err();
  assert!(err.message().contains("mutually exclusive"));
}

#[test]
fn unknown_field_is_an_error() {
  let dir = scaffold();
  fs::write(dir.path().join("templates/t.toml"), "name = \"t\"\nlayout = \"x\"\n").unwrap();
  let err = load_definitions(dir.path()).unwrap_err();
  assert!(err.is_config());
  assert!(err.message().contains("failed to parse"));
}
