/* src/server/core/rust/src/site/tests.rs */

use std::fs;

use crate::config::Config;
use crate::fragment::Fragment;
use crate::page::Page;
use crate::server::VeneerServer;
use crate::template::Template;
use crate::workspace::REQUIRED_DIRECTORIES;

fn scaffold() -> tempfile::TempDir {
  let dir = tempfile::tempdir().unwrap();
  for sub in REQUIRED_DIRECTORIES {
    fs::create_dir_all(dir.path().join(sub)).unwrap();
  }
  dir
}

fn app_template() -> Template {
  Template::new("app").body(r#"<header>Site</header><main id="app"></main>"#)
}

fn server(dir: &tempfile::TempDir) -> VeneerServer {
  VeneerServer::new(dir.path()).template(app_template()).page(Page::new("/", "app").title("Index"))
}

#[test]
fn builds_minimal_site() {
  let dir = scaffold();
  let site = server(&dir).build().unwrap();
  assert_eq!(site.template_count(), 1);
  assert_eq!(site.pages().len(), 1);
  assert!(site.template("app").is_some());
  let page = &site.pages()[0];
  assert_eq!(site.template_for(page).unwrap().name, "app");
}

#[test]
fn missing_assets_directory_is_fatal() {
  let dir = scaffold();
  fs::remove_dir(dir.path().join("assets")).unwrap();
  let err = server(&dir).build().unwrap_err();
  assert!(err.is_config());
  assert_eq!(err.message(), "The directory named 'assets' does not exist.");
}

#[test]
fn missing_workspace_is_fatal() {
  let dir = scaffold();
  let err = VeneerServer::new(dir.path().join("absent")).build().unwrap_err();
  assert!(err.is_config());
  assert!(err.message().starts_with("The specified workspace"));
}

#[test]
fn dangling_template_reference_is_fatal() {
  let dir = scaffold();
  let err = server(&dir).page(Page::new("/admin", "ghost")).build().unwrap_err();
  assert!(err.is_config());
  assert_eq!(err.message(), "The template 'ghost' does not exist.");
}

#[test]
fn dangling_reference_from_definition_file_is_fatal() {
  let dir = scaffold();
  fs::write(dir.path().join("pages/admin.toml"), "url = \"/admin\"\ntemplate = \"ghost\"\n").unwrap();
  let err = server(&dir).build().unwrap_err();
  assert_eq!(err.message(), "The template 'ghost' does not exist.");
}

#[test]
fn missing_404_page_is_fatal() {
  let dir = scaffold();
  let config = Config { redirect_404: "/not-found".into(), ..Config::default() };
  let err = server(&dir).config(config).build().unwrap_err();
  assert_eq!(err.message(), "The 404 page does not exist.");
}

#[test]
fn invalid_redirect_url_is_checked_before_directories() {
  let dir = scaffold();
  fs::remove_dir(dir.path().join("pages")).unwrap();
  let config = Config { redirect_404: "nope".into(), ..Config::default() };
  let err = server(&dir).config(config).build().unwrap_err();
  assert!(err.message().contains("redirect 404"));
}

#[test]
fn reserved_prefix_page_is_fatal() {
  let dir = scaffold();
  let err = server(&dir).page(Page::new("/assets/page", "app")).build().unwrap_err();
  assert!(err.message().contains("reserved static prefix"));
}

#[test]
fn malformed_page_url_is_fatal() {
  let dir = scaffold();
  let err = server(&dir).page(Page::new("/blog/", "app")).build().unwrap_err();
  assert!(err.message().starts_with("Invalid page url"));
}

#[test]
fn duplicates_are_fatal() {
  let dir = scaffold();
  let err = server(&dir).template(app_template()).build().unwrap_err();
  assert_eq!(err.message(), "The template 'app' is defined twice.");

  let err = server(&dir).page(Page::new("/", "app")).build().unwrap_err();
  assert_eq!(err.message(), "The page '/' is defined twice.");
}

#[test]
fn static_template_without_mount_is_fatal() {
  let dir = scaffold();
  let err = VeneerServer::new(dir.path())
    .template(Template::new("bare").body("<div>no mount</div>"))
    .page(Page::new("/", "bare"))
    .build()
    .unwrap_err();
  assert!(err.message().contains("has no element with id=\"app\""));
}

#[test]
fn dynamic_template_body_is_checked_per_request() {
  let dir = scaffold();
  let site = VeneerServer::new(dir.path())
    .template(Template::new("dyn").body(Fragment::from_fn(|_| "<div>none</div>".into())))
    .page(Page::new("/", "dyn"))
    .build();
  assert!(site.is_ok());
}

#[test]
fn custom_mount_id_is_used_for_validation() {
  let dir = scaffold();
  let config = Config { mount_id: "root".into(), ..Config::default() };
  let err = server(&dir).config(config.clone()).build().unwrap_err();
  assert!(err.message().contains("id=\"root\""));

  let site = VeneerServer::new(dir.path())
    .config(config)
    .template(Template::new("app").body(r#"<div id="root"></div>"#))
    .page(Page::new("/", "app"))
    .build()
    .unwrap();
  assert_eq!(site.mount().id(), "root");
}

#[test]
fn definitions_can_be_skipped() {
  let dir = scaffold();
  fs::write(dir.path().join("pages/admin.toml"), "url = \"/admin\"\ntemplate = \"ghost\"\n").unwrap();
  let site = server(&dir).load_workspace_definitions(false).build().unwrap();
  assert_eq!(site.pages().len(), 1);
}

#[test]
fn route_capture_syntax_in_page_url_is_fatal() {
  for url in ["/:id", "/files/*rest", "/{slug}", "/a/b}"] {
    let dir = scaffold();
    let err = server(&dir).page(Page::new(url, "app")).build().unwrap_err();
    assert!(err.is_config(), "{url}");
    assert!(err.message().starts_with(&format!("Invalid page url '{url}'")), "{url}");
  }
}

#[test]
fn colon_inside_segment_is_allowed() {
  let dir = scaffold();
  let site = server(&dir).page(Page::new("/docs/a:b", "app")).build().unwrap();
  assert_eq!(site.pages().len(), 2);
}
