/* src/client/rust/src/navigator/mod.rs */

use std::cell::RefCell;
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;
use std::time::Duration;

use futures::future::{Either, join_all, select};
use serde::Deserialize;
use veneer_engine::{DEFAULT_MOUNT_ID, NavigationPayload, Origin, PagePayload, TemplatePayload};

use crate::error::{NavigationError, Stage};
use crate::host::{Anchor, AssetKind, DomHost, Position, Scope};
use crate::path::{cache_bust, fragment_id, normalize, resolve_same_origin};
use crate::session::TemplateSlot;

/// Arguments of `Veneer.initialize(...)` as emitted by the bootstrap block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Options {
  pub template: String,
  #[serde(default = "default_mount")]
  pub mount: String,
  /// Milliseconds; absent means no deadline.
  #[serde(default)]
  pub timeout: Option<u64>,
}

fn default_mount() -> String {
  DEFAULT_MOUNT_ID.to_string()
}

impl Options {
  pub fn new(template: impl Into<String>) -> Self {
    Self { template: template.into(), mount: default_mount(), timeout: None }
  }

  pub fn from_json(json: &str) -> Result<Self, NavigationError> {
    serde_json::from_str(json).map_err(|e| NavigationError::Payload(e.to_string()))
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Uninitialized,
  Idle,
  Navigating,
  /// A navigation failed and a full reload was requested. Terminal.
  Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// This navigation and any queued after it were applied.
  Completed,
  /// Another navigation is in flight; this one replaced the queued slot.
  Queued,
  /// Not initialized, or already failed.
  Ignored,
  /// Applied nothing further; the host was asked to reload the target.
  Failed(NavigationError),
}

#[derive(Debug, Clone)]
struct Trigger {
  path: String,
  reload: bool,
  replace: bool,
}

struct State {
  phase: Phase,
  session: TemplateSlot,
  mount: String,
  timeout: Option<Duration>,
  pending: Option<Trigger>,
  listeners: Vec<Rc<dyn Fn()>>,
}

struct Inner<H: DomHost> {
  host: H,
  state: RefCell<State>,
}

/// Drives partial navigations for one document. Cheap to clone; clones
/// share state, so event handlers can each hold one.
pub struct Navigator<H: DomHost> {
  inner: Rc<Inner<H>>,
}

impl<H: DomHost> Clone for Navigator<H> {
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone() }
  }
}

impl<H: DomHost> Navigator<H> {
  pub fn new(host: H) -> Self {
    let state = State {
      phase: Phase::Uninitialized,
      session: TemplateSlot::default(),
      mount: default_mount(),
      timeout: None,
      pending: None,
      listeners: Vec::new(),
    };
    Self { inner: Rc::new(Inner { host, state: RefCell::new(state) }) }
  }

  pub fn host(&self) -> &H {
    &self.inner.host
  }

  pub fn phase(&self) -> Phase {
    self.inner.state.borrow().phase
  }

  pub fn current_template(&self) -> Option<String> {
    self.inner.state.borrow().session.current().map(str::to_string)
  }

  /// Bind anchors, history and links. Later calls are no-ops.
  pub fn initialize(&self, options: Options) -> Result<(), NavigationError> {
    if self.phase() != Phase::Uninitialized {
      return Ok(());
    }
    let host = &self.inner.host;
    for anchor in [Anchor::Title, Anchor::Favicon, Anchor::ImportMap] {
      if !host.has_anchor(anchor) {
        return Err(NavigationError::MissingAnchor(anchor));
      }
    }

    {
      let mut state = self.inner.state.borrow_mut();
      state.session = TemplateSlot::new(options.template);
      state.mount = options.mount;
      state.timeout = options.timeout.map(Duration::from_millis);
      state.phase = Phase::Idle;
    }
    host.listen_popstate();
    host.bind_links(Scope::Document);
    tracing::debug!(template = ?self.current_template(), "navigator initialized");
    Ok(())
  }

  /// Called once a navigation finishes, in registration order.
  pub fn add_onload_listener(&self, listener: impl Fn() + 'static) {
    self.inner.state.borrow_mut().listeners.push(Rc::new(listener));
  }

  /// Whether a click on a link should become a partial navigation, and to
  /// which path. The caller prevents the default action when this is `Some`.
  pub fn intercept(&self, href: &str, target: Option<&str>) -> Option<String> {
    if !matches!(self.phase(), Phase::Idle | Phase::Navigating) {
      return None;
    }
    if !matches!(target.unwrap_or(""), "" | "_self") {
      return None;
    }
    let url = resolve_same_origin(&self.inner.host.location(), href)?;
    Some(normalize(&url))
  }

  pub async fn navigate(&self, path: &str) -> Outcome {
    self.run(Trigger { path: path.to_string(), reload: false, replace: false }).await
  }

  /// Navigate programmatically. `reload` asks for the template again even
  /// when the target shares the current one.
  pub async fn redirect(&self, path: &str, reload: bool) -> Outcome {
    self.run(Trigger { path: path.to_string(), reload, replace: false }).await
  }

  /// History traversal: load the entry the browser moved to without adding
  /// a new one.
  pub async fn on_popstate(&self) -> Outcome {
    let path = normalize(&self.inner.host.location());
    self.run(Trigger { path, reload: false, replace: true }).await
  }

  async fn run(&self, trigger: Trigger) -> Outcome {
    {
      let mut state = self.inner.state.borrow_mut();
      match state.phase {
        Phase::Uninitialized | Phase::Failed => return Outcome::Ignored,
        Phase::Navigating => {
          tracing::debug!(path = %trigger.path, "navigation queued");
          state.pending = Some(trigger);
          return Outcome::Queued;
        }
        Phase::Idle => state.phase = Phase::Navigating,
      }
    }

    let mut next = Some(trigger);
    while let Some(trigger) = next {
      if let Err(err) = self.transition(&trigger).await {
        tracing::warn!(path = %trigger.path, %err, "navigation failed, reloading");
        {
          let mut state = self.inner.state.borrow_mut();
          state.phase = Phase::Failed;
          state.pending = None;
        }
        self.inner.host.reload(&trigger.path);
        return Outcome::Failed(err);
      }
      next = self.inner.state.borrow_mut().pending.take();
    }

    self.inner.state.borrow_mut().phase = Phase::Idle;
    Outcome::Completed
  }

  async fn transition(&self, trigger: &Trigger) -> Result<(), NavigationError> {
    let host = &self.inner.host;
    let request = self.inner.state.borrow().session.request(trigger.reload);
    let body = serde_json::to_string(&request).map_err(|e| NavigationError::Payload(e.to_string()))?;

    let response = self.deadline(Stage::Fetch, host.fetch_navigation(&trigger.path, body)).await??;
    let payload: NavigationPayload =
      serde_json::from_str(&response.body).map_err(|e| NavigationError::Payload(e.to_string()))?;

    let url = if response.redirected {
      let location = host.location();
      location.join(&response.url).map(|u| normalize(&u)).unwrap_or(response.url)
    } else {
      trigger.path.clone()
    };
    if trigger.replace {
      host.replace_state(&url);
    } else {
      host.push_state(&url);
    }

    host.set_title(&payload.title);
    host.set_favicon(&payload.favicon);

    if let Some(template) = &payload.template {
      self.apply_template(template).await?;
    }
    self.apply_page(&payload.page).await?;

    match fragment_id(&url) {
      None => host.scroll_to_origin(),
      Some(id) => {
        if !host.scroll_into_view(id) {
          tracing::debug!(%id, "fragment target not found");
        }
      }
    }

    let listeners = self.inner.state.borrow().listeners.clone();
    for listener in listeners {
      listener();
    }
    Ok(())
  }

  async fn apply_template(&self, template: &TemplatePayload) -> Result<(), NavigationError> {
    let host = &self.inner.host;
    host.remove_before(Anchor::Title);
    host.insert_html(Anchor::Title, Position::BeforeBegin, &template.head);
    self.inner.state.borrow_mut().session.apply(&template.name);

    let old_styles = host.tagged_assets(AssetKind::Style, Origin::Template);
    self.load_styles(&template.styles, Origin::Template, Stage::TemplateStyles).await?;

    host.remove_before(Anchor::ImportMap);
    host.insert_html(Anchor::ImportMap, Position::BeforeBegin, &template.body);

    for element in &old_styles {
      host.remove_element(element);
    }
    for element in &host.tagged_assets(AssetKind::Script, Origin::Template) {
      host.remove_element(element);
    }
    self.load_scripts(&template.scripts, Origin::Template, Stage::TemplateScripts).await?;
    host.bind_links(Scope::Document);
    Ok(())
  }

  async fn apply_page(&self, page: &PagePayload) -> Result<(), NavigationError> {
    let host = &self.inner.host;
    host.remove_after(Anchor::Favicon);
    host.insert_html(Anchor::Favicon, Position::AfterEnd, &page.head);

    let old_styles = host.tagged_assets(AssetKind::Style, Origin::Page);
    self.load_styles(&page.styles, Origin::Page, Stage::PageStyles).await?;

    let mount = self.inner.state.borrow().mount.clone();
    if !host.set_mount_html(&mount, &page.body) {
      return Err(NavigationError::MissingMount(mount));
    }

    for element in &old_styles {
      host.remove_element(element);
    }
    for element in &host.tagged_assets(AssetKind::Script, Origin::Page) {
      host.remove_element(element);
    }
    self.load_scripts(&page.scripts, Origin::Page, Stage::PageScripts).await?;
    host.bind_links(Scope::Mount);
    Ok(())
  }

  async fn load_styles(&self, hrefs: &[String], origin: Origin, stage: Stage) -> Result<(), NavigationError> {
    let host = &self.inner.host;
    let loads = join_all(hrefs.iter().map(|href| host.insert_style(href, origin)));
    self.deadline(stage, loads).await.map(drop)
  }

  async fn load_scripts(&self, srcs: &[String], origin: Origin, stage: Stage) -> Result<(), NavigationError> {
    let host = &self.inner.host;
    let now = host.now_millis();
    let loads = join_all(srcs.iter().map(|src| host.append_script(&cache_bust(src, now), origin)));
    self.deadline(stage, loads).await.map(drop)
  }

  /// Race `fut` against the configured timeout.
  async fn deadline<T>(&self, stage: Stage, fut: impl Future<Output = T>) -> Result<T, NavigationError> {
    let timeout = self.inner.state.borrow().timeout;
    let Some(timeout) = timeout else {
      return Ok(fut.await);
    };
    match select(pin!(fut), self.inner.host.sleep(timeout)).await {
      Either::Left((value, _)) => Ok(value),
      Either::Right(((), _)) => Err(NavigationError::Timeout {
        stage,
        timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
      }),
    }
  }
}

#[cfg(test)]
mod tests;
