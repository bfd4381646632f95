/* src/client/rust/src/host.rs */

use std::fmt;
use std::time::Duration;

use futures::future::LocalBoxFuture;
use url::Url;
use veneer_engine::Origin;

use crate::error::NavigationError;

/// Fixed elements the navigator patches around. Their relative order in the
/// composed document is stable: template head, title, styles, favicon, page
/// head; then body markup, import map, bootstrap, scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
  Title,
  Favicon,
  ImportMap,
}

impl fmt::Display for Anchor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Anchor::Title => "title",
      Anchor::Favicon => "favicon",
      Anchor::ImportMap => "import map",
    })
  }
}

/// Insertion point relative to an anchor, as in `insertAdjacentHTML`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
  BeforeBegin,
  AfterEnd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
  Style,
  Script,
}

/// Where click interception is (re)bound after new markup lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
  Document,
  Mount,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
  /// Final URL after redirects.
  pub url: String,
  pub redirected: bool,
  pub body: String,
}

/// The document, history, network and timers of one browser tab.
///
/// Methods take `&self`; implementations use interior mutability. Returned
/// futures are `'static` and must not borrow the host.
pub trait DomHost {
  /// Handle to a style or script element, used to remove it later.
  type Element;

  fn location(&self) -> Url;

  /// `POST path` with a JSON `body`, following redirects.
  fn fetch_navigation(
    &self,
    path: &str,
    body: String,
  ) -> LocalBoxFuture<'static, Result<FetchResponse, NavigationError>>;

  fn push_state(&self, url: &str);
  fn replace_state(&self, url: &str);
  /// Full page load of `url`.
  fn reload(&self, url: &str);

  fn has_anchor(&self, anchor: Anchor) -> bool;
  fn set_title(&self, title: &str);
  fn set_favicon(&self, href: &str);

  /// Remove every sibling before `anchor` within its parent.
  fn remove_before(&self, anchor: Anchor);
  /// Remove every sibling after `anchor` within its parent.
  fn remove_after(&self, anchor: Anchor);
  fn insert_html(&self, anchor: Anchor, position: Position, html: &str);
  /// Replace the content of the element with `id`. False when there is none.
  fn set_mount_html(&self, id: &str, html: &str) -> bool;

  /// Style or script elements tagged with `origin`, in document order.
  fn tagged_assets(&self, kind: AssetKind, origin: Origin) -> Vec<Self::Element>;
  fn remove_element(&self, element: &Self::Element);
  /// Insert a stylesheet link before the favicon; resolves once loaded.
  fn insert_style(&self, href: &str, origin: Origin) -> LocalBoxFuture<'static, ()>;
  /// Append a module script to the body; resolves once loaded.
  fn append_script(&self, src: &str, origin: Origin) -> LocalBoxFuture<'static, ()>;

  /// Attach click interception to same-origin anchors inside `scope`.
  fn bind_links(&self, scope: Scope);
  /// Start delivering history traversal to [`crate::Navigator::on_popstate`].
  fn listen_popstate(&self);

  fn scroll_to_origin(&self);
  /// Smoothly scroll the element with `id` into view. False when there is none.
  fn scroll_into_view(&self, id: &str) -> bool;

  fn now_millis(&self) -> u64;
  fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}
