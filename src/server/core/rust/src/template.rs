/* src/server/core/rust/src/template.rs */

use crate::fragment::Fragment;
use crate::hook::RequestHook;

/// Shared chrome reused by every page that names it. Its body must contain
/// the mount element the page body is injected into.
#[derive(Debug, Clone)]
pub struct Template {
  pub name: String,
  pub styles: Vec<String>,
  pub scripts: Vec<String>,
  pub head: Fragment,
  pub body: Fragment,
  pub on_request: Option<RequestHook>,
}

impl Template {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      styles: Vec::new(),
      scripts: Vec::new(),
      head: Fragment::default(),
      body: Fragment::default(),
      on_request: None,
    }
  }

  pub fn style(mut self, href: impl Into<String>) -> Self {
    self.styles.push(href.into());
    self
  }

  pub fn script(mut self, src: impl Into<String>) -> Self {
    self.scripts.push(src.into());
    self
  }

  pub fn head(mut self, head: impl Into<Fragment>) -> Self {
    self.head = head.into();
    self
  }

  pub fn body(mut self, body: impl Into<Fragment>) -> Self {
    self.body = body.into();
    self
  }

  pub fn on_request(mut self, hook: RequestHook) -> Self {
    self.on_request = Some(hook);
    self
  }
}
