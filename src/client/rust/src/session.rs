/* src/client/rust/src/session.rs */

use veneer_engine::NavigationRequest;

/// Name of the template currently applied to the document. It is the only
/// navigation state the server needs, and it travels in every request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSlot {
  current: Option<String>,
}

impl TemplateSlot {
  pub fn new(template: impl Into<String>) -> Self {
    Self { current: Some(template.into()) }
  }

  pub fn current(&self) -> Option<&str> {
    self.current.as_deref()
  }

  pub fn apply(&mut self, template: impl Into<String>) {
    self.current = Some(template.into());
  }

  /// Request body for the next navigation. `reload` forgets the applied
  /// template so the server sends it again.
  pub fn request(&self, reload: bool) -> NavigationRequest {
    NavigationRequest { template: if reload { None } else { self.current.clone() } }
  }
}
