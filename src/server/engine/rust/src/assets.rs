/* src/server/engine/rust/src/assets.rs */

use serde::{Deserialize, Serialize};

use crate::escape::escape_attr;

/// Attribute marking which generation a style or script element belongs to.
pub const ORIGIN_ATTR: &str = "veneer-origin";

/// Owner of a style/script element. Partial updates remove elements by origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
  Template,
  Page,
}

impl Origin {
  pub fn as_str(self) -> &'static str {
    match self {
      Origin::Template => "template",
      Origin::Page => "page",
    }
  }
}

impl std::fmt::Display for Origin {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

pub fn style_tag(href: &str, origin: Origin) -> String {
  format!(r#"<link rel="stylesheet" href="{}" {ORIGIN_ATTR}="{origin}">"#, escape_attr(href))
}

pub fn script_tag(src: &str, origin: Origin) -> String {
  format!(
    r#"<script src="{}" type="module" {ORIGIN_ATTR}="{origin}"></script>"#,
    escape_attr(src)
  )
}

/// Style tags for both origins, template entries first.
pub fn style_tags(template: &[String], page: &[String]) -> Vec<String> {
  tagged(template, page, style_tag)
}

/// Script tags for both origins, template entries first.
pub fn script_tags(template: &[String], page: &[String]) -> Vec<String> {
  tagged(template, page, script_tag)
}

fn tagged(template: &[String], page: &[String], tag: fn(&str, Origin) -> String) -> Vec<String> {
  template
    .iter()
    .map(|url| tag(url, Origin::Template))
    .chain(page.iter().map(|url| tag(url, Origin::Page)))
    .collect()
}
