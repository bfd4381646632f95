/* src/server/engine/rust/src/document.rs */

//! Full-document assembly for GET requests.
//!
//! Head order: template head, title, fixed meta tags, styles (template then
//! page), favicon, page head. Body order: merged template/page body, import
//! map, client bootstrap, scripts (template then page). The client engine
//! relies on the title, favicon and import map as fixed anchors when it
//! patches the document, so their relative positions must not change.

use crate::assets::{script_tags, style_tags};
use crate::escape::{escape_attr, escape_script_json};
use crate::splice::{MountAnchor, SpliceOutcome};

/// Bare module specifier the bootstrap imports the client engine from.
pub const CLIENT_SPECIFIER: &str = "@veneer/client";
/// URL the import map resolves [`CLIENT_SPECIFIER`] to.
pub const CLIENT_PATH: &str = "/@veneer/client";

const INDENT: &str = "\n        ";

pub struct DocumentConfig<'a> {
  pub lang: &'a str,
  pub mount: &'a MountAnchor,
  /// Deadline handed to the client engine for fetches and asset loads.
  pub navigation_timeout_ms: Option<u64>,
}

/// Template side of a composition, with head/body already rendered.
pub struct TemplateFragments<'a> {
  pub name: &'a str,
  pub styles: &'a [String],
  pub scripts: &'a [String],
  pub head: &'a str,
  pub body: &'a str,
}

/// Page side of a composition, with head/body already rendered.
pub struct PageFragments<'a> {
  pub title: &'a str,
  pub favicon: &'a str,
  pub styles: &'a [String],
  pub scripts: &'a [String],
  pub head: &'a str,
  pub body: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
  pub html: String,
  pub splice: SpliceOutcome,
}

/// Compose a complete HTML document. Pure: identical inputs give identical output.
pub fn compose(
  config: &DocumentConfig<'_>,
  template: &TemplateFragments<'_>,
  page: &PageFragments<'_>,
) -> Composed {
  let spliced = config.mount.splice(template.body, page.body);
  let styles = style_tags(template.styles, page.styles).join(INDENT);
  let scripts = script_tags(template.scripts, page.scripts).join(INDENT);
  let bootstrap = bootstrap_block(template.name, config);

  let html = format!(
    r#"<!DOCTYPE html>
<html lang="{lang}">
    <head>
        {template_head}
        <title>{title}</title>
        <meta charset="UTF-8" />
        <meta http-equiv="X-UA-Compatible" content="IE=edge" />
        <meta name="viewport" content="width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no" />
        {styles}
        <link rel="icon shortcut" href="{favicon}" type="image/x-icon" />
        {page_head}
    </head>
    <body>
        {body}

        {bootstrap}

        {scripts}
    </body>
</html>"#,
    lang = escape_attr(config.lang),
    template_head = template.head,
    title = page.title,
    favicon = escape_attr(page.favicon),
    page_head = page.head,
    body = spliced.html,
  );

  Composed { html, splice: spliced.outcome }
}

/// Import map plus the module script that initializes the client engine.
/// Emitted before every template/page script so link interception is active first.
fn bootstrap_block(template_name: &str, config: &DocumentConfig<'_>) -> String {
  let mut options = serde_json::Map::new();
  options.insert("template".into(), template_name.into());
  options.insert("mount".into(), config.mount.id().into());
  if let Some(ms) = config.navigation_timeout_ms {
    options.insert("timeout".into(), ms.into());
  }
  let options = escape_script_json(&serde_json::Value::Object(options).to_string());

  format!(
    r#"<script type="importmap">
            {{
                "imports": {{
                    "{CLIENT_SPECIFIER}": "{CLIENT_PATH}"
                }}
            }}
        </script>
        <script type="module">
            import {{ Veneer }} from "{CLIENT_SPECIFIER}";

            Veneer.initialize({options});
        </script>"#
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  fn compose_basic(mount: &MountAnchor, template_body: &str) -> Composed {
    let config = DocumentConfig { lang: "fr", mount, navigation_timeout_ms: None };
    let template = TemplateFragments {
      name: "app",
      styles: &["/styles/reset.css".to_string(), "/styles/app.css".to_string()],
      scripts: &["/scripts/app.js".to_string()],
      head: r##"<meta name="theme-color" content="#000">"##,
      body: template_body,
    };
    let page = PageFragments {
      title: "Index",
      favicon: "/favicon.ico",
      styles: &["/styles/app/index.css".to_string()],
      scripts: &["/scripts/index.js".to_string()],
      head: r#"<meta name="description" content="home">"#,
      body: "<span>NEW</span>",
    };
    compose(&config, &template, &page)
  }

  #[test]
  fn injects_page_body_into_mount() {
    let mount = MountAnchor::default();
    let composed = compose_basic(&mount, r#"<div><p id="app">OLD</p></div>"#);
    assert_eq!(composed.splice, SpliceOutcome::Injected);
    assert!(composed.html.contains(r#"<p id="app"><span>NEW</span></p>"#));
    assert!(!composed.html.contains("OLD"));
  }

  #[test]
  fn recomposition_is_byte_identical() {
    let mount = MountAnchor::default();
    let a = compose_basic(&mount, r#"<div><p id="app">OLD</p></div>"#);
    let b = compose_basic(&mount, r#"<div><p id="app">OLD</p></div>"#);
    assert_eq!(a.html, b.html);
  }

  #[test]
  fn styles_ordered_template_then_page() {
    let mount = MountAnchor::default();
    let html = compose_basic(&mount, r#"<div id="app"></div>"#).html;
    let reset = html.find("/styles/reset.css").unwrap();
    let app = html.find("/styles/app.css").unwrap();
    let index = html.find("/styles/app/index.css").unwrap();
    assert!(reset < app && app < index);
    assert!(html.contains(r#"href="/styles/app/index.css" veneer-origin="page""#));
  }

  #[test]
  fn head_anchor_order() {
    let mount = MountAnchor::default();
    let html = compose_basic(&mount, r#"<div id="app"></div>"#).html;
    let template_head = html.find("theme-color").unwrap();
    let title = html.find("<title>Index</title>").unwrap();
    let last_style = html.find("/styles/app/index.css").unwrap();
    let favicon = html.find(r#"<link rel="icon shortcut" href="/favicon.ico""#).unwrap();
    let page_head = html.find(r#"name="description""#).unwrap();
    assert!(template_head < title);
    assert!(title < last_style && last_style < favicon);
    assert!(favicon < page_head);
  }

  #[test]
  fn bootstrap_precedes_scripts() {
    let mount = MountAnchor::default();
    let html = compose_basic(&mount, r#"<div id="app"></div>"#).html;
    let importmap = html.find(r#"<script type="importmap">"#).unwrap();
    let init = html.find(r#"Veneer.initialize({"mount":"app","template":"app"});"#).unwrap();
    let template_script = html.find(r#"src="/scripts/app.js""#).unwrap();
    let page_script = html.find(r#"src="/scripts/index.js""#).unwrap();
    let body = html.find("<span>NEW</span>").unwrap();
    assert!(body < importmap && importmap < init);
    assert!(init < template_script && template_script < page_script);
    assert!(html.contains(r#""@veneer/client": "/@veneer/client""#));
  }

  #[test]
  fn lang_and_doctype() {
    let mount = MountAnchor::default();
    let html = compose_basic(&mount, r#"<div id="app"></div>"#).html;
    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"fr\">"));
    assert!(html.ends_with("</html>"));
  }

  #[test]
  fn missing_mount_reports_and_drops_body() {
    let mount = MountAnchor::default();
    let composed = compose_basic(&mount, "<div>chrome only</div>");
    assert_eq!(composed.splice, SpliceOutcome::MissingAnchor);
    assert!(!composed.html.contains("<span>NEW</span>"));
    assert!(composed.html.contains("<div>chrome only</div>"));
  }

  #[test]
  fn bootstrap_escapes_template_name() {
    let mount = MountAnchor::default();
    let config = DocumentConfig { lang: "en", mount: &mount, navigation_timeout_ms: Some(5000) };
    let template = TemplateFragments {
      name: "</script>",
      styles: &[],
      scripts: &[],
      head: "",
      body: r#"<div id="app"></div>"#,
    };
    let page = PageFragments {
      title: "t",
      favicon: "/f.ico",
      styles: &[],
      scripts: &[],
      head: "",
      body: "",
    };
    let html = compose(&config, &template, &page).html;
    assert_eq!(html.matches("</script>").count(), 2);
    assert!(html.contains(r#""timeout":5000"#));
  }
}
