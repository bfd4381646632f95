/* src/server/engine/rust/src/payload.rs */

//! Wire types of the partial-navigation protocol (`POST <page-url>`).

use serde::{Deserialize, Serialize};

/// Body of a navigation POST. `template` is the name the client currently
/// has applied; `None` (or a missing field) asks for the full template payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
  #[serde(default)]
  pub template: Option<String>,
}

impl NavigationRequest {
  /// Lenient parse: an empty or malformed body means "no template known".
  pub fn from_body(body: &[u8]) -> Self {
    serde_json::from_slice(body).unwrap_or_default()
  }

  /// Whether a response to this request must carry the template of `page_template`.
  pub fn needs_template(&self, page_template: &str) -> bool {
    self.template.as_deref() != Some(page_template)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationPayload {
  pub url: String,
  pub title: String,
  pub favicon: String,
  pub template: Option<TemplatePayload>,
  pub page: PagePayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplatePayload {
  pub name: String,
  pub styles: Vec<String>,
  pub scripts: Vec<String>,
  pub head: String,
  pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePayload {
  pub styles: Vec<String>,
  pub scripts: Vec<String>,
  pub head: String,
  pub body: String,
}
