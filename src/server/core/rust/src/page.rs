/* src/server/core/rust/src/page.rs */

use crate::fragment::Fragment;
use crate::hook::RequestHook;

pub const DEFAULT_FAVICON: &str = "/favicon.ico";

/// Route-specific content, rendered inside the mount element of its template.
#[derive(Debug, Clone)]
pub struct Page {
  /// Absolute route path, e.g. "/" or "/blog/first-post".
  pub url: String,
  /// Name of the template this page is rendered inside.
  pub template: String,
  pub title: String,
  pub favicon: String,
  pub styles: Vec<String>,
  pub scripts: Vec<String>,
  pub head: Fragment,
  pub body: Fragment,
  pub on_request: Option<RequestHook>,
}

impl Page {
  pub fn new(url: impl Into<String>, template: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      template: template.into(),
      title: String::new(),
      favicon: DEFAULT_FAVICON.to_string(),
      styles: Vec::new(),
      scripts: Vec::new(),
      head: Fragment::default(),
      body: Fragment::default(),
      on_request: None,
    }
  }

  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  pub fn favicon(mut self, href: impl Into<String>) -> Self {
    self.favicon = href.into();
    self
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
